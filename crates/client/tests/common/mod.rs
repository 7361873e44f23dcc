//! テスト共通フィクスチャ
//!
//! ネットワークを使わずにクライアントを検証するためのスタブトランスポート。
//! 送信されたリクエストを記録し、キューに積んだレスポンスを順に返す。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use authentik_client::{AuthentikClientImpl, HttpTransport};

pub const BASE_URL: &str = "https://auth.example.com";

/// 記録されたリクエスト
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method:        String,
    pub url:           String,
    pub authorization: Option<String>,
    pub content_type:  Option<String>,
    pub body:          Option<serde_json::Value>,
}

impl RecordedRequest {
    /// ベース URL を除いたパスとクエリ
    pub fn target(&self) -> &str {
        self.url
            .strip_prefix(BASE_URL)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(&self.url)
    }
}

/// スタブトランスポート
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<(u16, String)>>,
    requests:  Mutex<Vec<RecordedRequest>>,
}

impl StubTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 次に返すレスポンスを積む
    pub fn respond(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back((status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// 最後に送信されたリクエスト
    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("リクエストが送信されていない")
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error> {
        let header = |name: reqwest::header::HeaderName| {
            request
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let recorded = RecordedRequest {
            method:        request.method().to_string(),
            url:           request.url().to_string(),
            authorization: header(reqwest::header::AUTHORIZATION),
            content_type:  header(reqwest::header::CONTENT_TYPE),
            body:          request
                .body()
                .and_then(|b| b.as_bytes())
                .map(|bytes| serde_json::from_slice(bytes).expect("ボディが JSON ではない")),
        };
        self.requests.lock().unwrap().push(recorded);

        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((200, String::new()));
        let response = http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        Ok(reqwest::Response::from(response))
    }
}

/// スタブトランスポートを使うクライアントを作成する
pub fn client_with(transport: &Arc<StubTransport>) -> AuthentikClientImpl {
    AuthentikClientImpl::with_transport(BASE_URL, transport.clone())
        .unwrap()
        .with_token("test-token")
        .unwrap()
}
