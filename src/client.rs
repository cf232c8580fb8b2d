//! Serper.dev 検索クライアント（reqwest）

use crate::error::{CheckerError, Result};
use async_trait::async_trait;
use local_pack_common::{SearchApi, SearchRequest, API_KEY_HEADER, SERPER_SEARCH_URL};
use reqwest::Client;
use serde_json::Value;

pub struct SerperClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl SerperClient {
    /// APIキーが空ならリクエストを送る前にエラー
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CheckerError::MissingApiKey);
        }

        // タイムアウトは設定しない（reqwestの既定のまま）
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            api_key,
            endpoint: SERPER_SEARCH_URL.to_string(),
        })
    }

    /// 送信先を差し替える（テスト用のローカルサーバーなど）
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait(?Send)]
impl SearchApi for SerperClient {
    async fn search(&self, request: &SearchRequest) -> local_pack_common::Result<Value> {
        let transport = |e: reqwest::Error| local_pack_common::Error::Transport(e.to_string());

        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(local_pack_common::Error::Http { status: status.as_u16() });
        }

        let body = response.text().await.map_err(transport)?;
        Ok(serde_json::from_str(&body)?)
    }
}
