//! ローカルパックチェック本体
//!
//! キーワードを1件ずつ順番にチェックする。並列化・リトライはしない。
//! 1件の失敗は "No" として記録し、残りのキーワードの処理を続ける。

use crate::serper::{has_local_pack, SearchApi, SearchRequest};
use crate::types::CheckResult;

/// キーワード1件をチェック
///
/// API呼び出しの失敗（通信エラー、2xx以外、JSON不正）はログに出して
/// `CheckResult::failed` を返す。エラーは呼び出し元へ伝播しない。
pub async fn check_keyword<A>(api: &A, keyword: &str, location: Option<&str>) -> CheckResult
where
    A: SearchApi + ?Sized,
{
    let request = SearchRequest::new(keyword, location);
    tracing::debug!(keyword, ?location, "searching");

    match api.search(&request).await {
        Ok(response) => CheckResult::found(keyword, location, has_local_pack(&response)),
        Err(e) => {
            tracing::warn!(keyword, error = %e, "local pack check failed");
            CheckResult::failed(keyword, location, e.to_string())
        }
    }
}

/// キーワード列を順番にチェック
///
/// 結果は入力順。`on_result` は各キーワードの完了ごとに
/// (インデックス, 結果) で呼ばれる（進捗表示用）。
pub async fn check_keywords<A, F>(
    api: &A,
    keywords: &[String],
    location: Option<&str>,
    mut on_result: F,
) -> Vec<CheckResult>
where
    A: SearchApi + ?Sized,
    F: FnMut(usize, &CheckResult),
{
    let mut results = Vec::with_capacity(keywords.len());

    for (index, keyword) in keywords.iter().enumerate() {
        let result = check_keyword(api, keyword, location).await;
        on_result(index, &result);
        results.push(result);
    }

    results
}
