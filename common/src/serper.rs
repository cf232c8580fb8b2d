//! Serper.dev 検索APIの契約
//!
//! リクエスト形式とローカルパック判定はCLIとWebで共通。
//! 実際の送信は `SearchApi` の実装側（reqwest / fetch）が担う。

use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

pub const SERPER_SEARCH_URL: &str = "https://google.serper.dev/search";

/// APIキーを渡すリクエストヘッダー
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// 検索リクエストボディ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub q: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl SearchRequest {
    pub fn new(keyword: &str, location: Option<&str>) -> Self {
        Self {
            q: keyword.to_string(),
            location: location.map(str::to_string),
        }
    }
}

/// 検索APIクライアント
///
/// 1回の呼び出しで1回だけPOSTする。リトライしない。
/// 2xx以外のステータスは `Error::Http` として返すこと。
#[async_trait(?Send)]
pub trait SearchApi {
    async fn search(&self, request: &SearchRequest) -> Result<Value>;
}

/// レスポンスにローカルパックが含まれるか
///
/// `places` が空でない配列のときのみ true
pub fn has_local_pack(response: &Value) -> bool {
    response
        .get("places")
        .and_then(Value::as_array)
        .is_some_and(|places| !places.is_empty())
}
