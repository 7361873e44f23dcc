//! # HTTP トランスポート
//!
//! 組み立て済みの [`reqwest::Request`] を送信してレスポンスを返すだけの抽象。
//! テスト時にスタブを差し込めるようトレイトで定義し、
//! キャッシュなどの横断的な処理はこのトレイトのデコレータとして実装する。

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::config::{ClientConfig, ConfigError};

/// HTTP トランスポート
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// リクエストを 1 回だけ送信する（リトライしない）
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error>;
}

/// reqwest::Client によるトランスポート実装
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// 設定からトランスポートを作成する
    ///
    /// タイムアウトと User-Agent を reqwest::Client に設定する。
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error> {
        self.client.execute(request).await
    }
}

/// 共有されたトランスポートもそのまま使えるようにする（デコレータの内側に渡す場合など）
#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error> {
        (**self).execute(request).await
    }
}
