use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。SERPER_API_KEY を設定するか `local-pack config --set-api-key YOUR_KEY` で保存してください")]
    MissingApiKey,

    #[error("キーワードファイルが見つかりません: {0}")]
    KeywordsNotFound(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] local_pack_common::Error),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
