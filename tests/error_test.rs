//! エラーケーステスト

use local_pack_checker::client::SerperClient;
use local_pack_checker::error::CheckerError;
use local_pack_common::load_keywords;
use std::path::Path;

/// CheckerErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CheckerError::Config("テスト設定エラー".to_string()),
        CheckerError::MissingApiKey,
        CheckerError::KeywordsNotFound("keywords.csv".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingApiKeyエラーのメッセージ確認
#[test]
fn test_missing_api_key_message() {
    let display = format!("{}", CheckerError::MissingApiKey);
    assert!(display.contains("SERPER_API_KEY"));
    assert!(display.contains("local-pack config"));
}

/// APIキーなしでクライアントは作れない
#[test]
fn test_client_requires_api_key() {
    let result = SerperClient::new("");
    assert!(matches!(result, Err(CheckerError::MissingApiKey)));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CheckerError = io_err.into();
    assert!(matches!(err, CheckerError::Io(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = local_pack_common::Error::Http { status: 429 };
    let err: CheckerError = common_err.into();

    assert!(matches!(err, CheckerError::Common(_)));
    assert_eq!(format!("{}", err), "API error: HTTP 429");
}

/// 読めないキーワードファイルはIOエラー
#[test]
fn test_load_keywords_missing_file() {
    let result = load_keywords(Path::new("/nonexistent/path/12345/keywords.csv"));
    let err: CheckerError = result.unwrap_err().into();
    assert!(matches!(err, CheckerError::Common(local_pack_common::Error::Io(_))));
}
