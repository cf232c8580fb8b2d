//! バッチ実行
//!
//! キーワードCSV読み込み → 1件ずつチェック → 結果CSV書き出し。
//! 読み込み・書き出しの失敗は致命的、キーワード単位の失敗は "No" として続行。

use crate::cli::CheckArgs;
use crate::error::{CheckerError, Result};
use crate::progress;
use indicatif::ProgressStyle;
use local_pack_common::{check_keywords, load_keywords, write_batch_file, RunSummary, SearchApi};

pub async fn run_batch<A>(api: &A, args: &CheckArgs) -> Result<RunSummary>
where
    A: SearchApi + ?Sized,
{
    let location = args.location();

    // 1. キーワード読み込み
    println!("[1/3] Loading keywords from {}...", args.input.display());
    if !args.input.exists() {
        return Err(CheckerError::KeywordsNotFound(args.input.display().to_string()));
    }
    let keywords = load_keywords(&args.input)?;
    println!("✔ {} keywords loaded\n", keywords.len());

    // 2. チェック
    match location {
        Some(loc) => println!("[2/3] Checking local packs (location: {})...", loc),
        None => println!("[2/3] Checking local packs..."),
    }
    let pb = progress::bar(keywords.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let results = check_keywords(api, &keywords, location, |_, result| {
        let status = match (&result.error, result.has_local_pack.is_yes()) {
            (Some(e), _) => format!("⚠️ No local pack (check failed: {})", e),
            (None, true) => "✅ Has local pack".to_string(),
            (None, false) => "❌ No local pack".to_string(),
        };
        pb.suspend(|| println!("🔍 \"{}\" → {}", result.keyword, status));
        pb.inc(1);
    })
    .await;
    pb.finish_and_clear();
    println!("✔ {} keywords checked\n", results.len());

    // 3. 書き出し
    println!("[3/3] Writing results...");
    write_batch_file(&args.output, &results, location.is_some())?;
    println!("✔ Results saved to {}", args.output.display());

    let summary = RunSummary::from_results(&results);
    tracing::info!(?summary, output = %args.output.display(), "batch finished");
    Ok(summary)
}

/// 実行結果の要約を表示
pub fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!("  Keywords:        {}", summary.total);
    println!("  Has local pack:  {}", summary.with_local_pack);
    println!("  No local pack:   {}", summary.without_local_pack);
    if summary.failed > 0 {
        println!(
            "  ⚠️ {} check(s) failed and were recorded as \"No\" (see log)",
            summary.failed
        );
    }
}
