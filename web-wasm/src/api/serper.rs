//! Serper.dev 検索API（ブラウザ fetch）

use async_trait::async_trait;
use local_pack_common::{Error, Result, SearchApi, SearchRequest, API_KEY_HEADER, SERPER_SEARCH_URL};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub struct FetchClient {
    api_key: String,
}

impl FetchClient {
    pub fn new(api_key: &str) -> Result<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(Self { api_key: api_key.to_string() })
    }
}

fn js_error(e: JsValue) -> Error {
    Error::Transport(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// POSTを1回だけ送信
async fn post_json(api_key: &str, body: &str) -> std::result::Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(SERPER_SEARCH_URL, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    request.headers().set(API_KEY_HEADER, api_key)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into()
}

#[async_trait(?Send)]
impl SearchApi for FetchClient {
    async fn search(&self, request: &SearchRequest) -> Result<Value> {
        let body = serde_json::to_string(request)?;
        let resp = post_json(&self.api_key, &body).await.map_err(js_error)?;

        if !resp.ok() {
            return Err(Error::Http { status: resp.status() });
        }

        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();

        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_api_key_rejected() {
        assert!(matches!(FetchClient::new(""), Err(Error::MissingApiKey)));
        assert!(matches!(FetchClient::new("   "), Err(Error::MissingApiKey)));
    }

    #[test]
    fn test_api_key_trimmed() {
        let client = FetchClient::new("  abc  ").unwrap();
        assert_eq!(client.api_key, "abc");
    }
}
