use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "keywords.csv";
pub const DEFAULT_OUTPUT: &str = "results.csv";

#[derive(Parser, Debug)]
#[command(name = "local-pack", version)]
#[command(about = "キーワードごとに検索結果のローカルパック有無をチェック", long_about = None)]
pub struct Cli {
    /// 省略時は `check` をデフォルト引数で実行
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// キーワードCSVをチェックして結果CSVを出力
    Check(CheckArgs),

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct CheckArgs {
    /// キーワードCSV（ヘッダーなし、各行の最初のセル）
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// 結果CSV（既存ファイルは上書き）
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// 検索地域（例: "Los Angeles, CA"）。指定時はLocation列を追加
    #[arg(short, long)]
    pub location: Option<String>,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            location: None,
        }
    }
}

impl CheckArgs {
    /// 空白のみの地域指定は未指定扱い
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}
