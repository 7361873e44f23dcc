//! # レスポンスキャッシュ（任意のデコレータ）
//!
//! [`CachedTransport`] は [`HttpTransport`] を包み、成功した GET レスポンスを
//! [`ResponseCache`] へ保存する。呼び出し側（invoker）はキャッシュの存在を知らない。
//!
//! ## キー
//!
//! `me` や `view_key` のように応答がトークンの持ち主で変わるため、キーは
//! URL と `Authorization` ヘッダーの SHA-256 指紋の組にする（[`cache_key`]）。
//! トークン本体はキャッシュに残さない。認証なしのリクエストは URL のみ。
//!
//! - GET 以外のメソッドは常に内側のトランスポートへ素通しする
//! - 非 2xx レスポンスは保存しない
//! - 追い出しポリシーは持たない。必要なら [`ResponseCache`] の実装側で行う

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{
    StatusCode,
    header::{AUTHORIZATION, HeaderMap},
};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use crate::transport::HttpTransport;

/// キャッシュされたレスポンス
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub status:  StatusCode,
    pub headers: HeaderMap,
    pub body:    Bytes,
}

impl CachedResponse {
    fn into_response(self) -> reqwest::Response {
        let mut response = http::Response::new(self.body);
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        reqwest::Response::from(response)
    }
}

/// レスポンスキャッシュ
#[async_trait]
pub trait ResponseCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<CachedResponse>;
    async fn put(&self, key: String, response: CachedResponse);
}

/// プロセス内メモリのキャッシュ
///
/// 件数・期限の制限はない。明示的に [`invalidate`](Self::invalidate) / [`clear`](Self::clear) する。
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, CachedResponse>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn invalidate(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ResponseCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<CachedResponse> {
        self.entries.read().await.get(key).cloned()
    }

    async fn put(&self, key: String, response: CachedResponse) {
        self.entries.write().await.insert(key, response);
    }
}

/// リクエストのキャッシュキーを作る
///
/// 認証付きなら `<url>#<sha256(Authorization) の hex>`、なければ `<url>`。
pub fn cache_key(request: &reqwest::Request) -> String {
    let url = request.url().as_str();
    match request.headers().get(AUTHORIZATION) {
        Some(value) => {
            let fingerprint = hex::encode(Sha256::digest(value.as_bytes()));
            format!("{url}#{fingerprint}")
        }
        None => url.to_string(),
    }
}

/// GET レスポンスをキャッシュするトランスポートのデコレータ
pub struct CachedTransport<T, C> {
    inner: T,
    cache: C,
}

impl<T, C> CachedTransport<T, C>
where
    T: HttpTransport,
    C: ResponseCache,
{
    pub fn new(inner: T, cache: C) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl<T, C> HttpTransport for CachedTransport<T, C>
where
    T: HttpTransport,
    C: ResponseCache,
{
    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response, reqwest::Error> {
        if request.method() != reqwest::Method::GET {
            return self.inner.execute(request).await;
        }

        let key = cache_key(&request);
        if let Some(cached) = self.cache.get(&key).await {
            tracing::debug!(%key, "キャッシュからレスポンスを返します");
            return Ok(cached.into_response());
        }

        let response = self.inner.execute(request).await?;
        if !response.status().is_success() {
            return Ok(response);
        }

        let cached = CachedResponse {
            status:  response.status(),
            headers: response.headers().clone(),
            body:    response.bytes().await?,
        };
        self.cache.put(key, cached.clone()).await;
        Ok(cached.into_response())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    /// 呼び出し回数を数え、常に同じボディを返すトランスポート
    struct CountingTransport {
        calls:  AtomicUsize,
        status: u16,
    }

    impl CountingTransport {
        fn new(status: u16) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                status,
            }
        }
    }

    #[async_trait]
    impl HttpTransport for CountingTransport {
        async fn execute(
            &self,
            _request: reqwest::Request,
        ) -> Result<reqwest::Response, reqwest::Error> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            let http_resp = http::Response::builder()
                .status(self.status)
                .body(format!(r#"{{"call": {n}}}"#))
                .unwrap();
            Ok(reqwest::Response::from(http_resp))
        }
    }

    fn request(method: reqwest::Method, url: &str) -> reqwest::Request {
        reqwest::Request::new(method, url.parse().unwrap())
    }

    fn authorized(url: &str, token: &str) -> reqwest::Request {
        let mut req = request(reqwest::Method::GET, url);
        req.headers_mut().insert(
            AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        req
    }

    #[test]
    fn test_キーはトークンごとに分かれ本体を含まない() {
        let url = "https://auth.example.com/api/v3/core/users/me/";

        let anonymous = cache_key(&request(reqwest::Method::GET, url));
        let alice = cache_key(&authorized(url, "alice-token"));
        let bob = cache_key(&authorized(url, "bob-token"));

        assert_eq!(anonymous, url);
        assert_ne!(alice, bob);
        assert!(alice.starts_with(&format!("{url}#")));
        assert!(!alice.contains("alice-token"));
        assert_eq!(alice, cache_key(&authorized(url, "alice-token")));
    }

    #[tokio::test]
    async fn test_2回目のgetはキャッシュから返す() {
        let cache = MemoryCache::new();
        let transport = CachedTransport::new(CountingTransport::new(200), cache.clone());
        let url = "https://auth.example.com/api/v3/admin/version/";

        let first = transport
            .execute(request(reqwest::Method::GET, url))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        let second = transport
            .execute(request(reqwest::Method::GET, url))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(first, r#"{"call": 0}"#);
        assert_eq!(second, r#"{"call": 0}"#);
        assert_eq!(transport.inner.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_get以外はキャッシュしない() {
        let cache = MemoryCache::new();
        let transport = CachedTransport::new(CountingTransport::new(200), cache.clone());
        let url = "https://auth.example.com/api/v3/core/users/";

        transport
            .execute(request(reqwest::Method::POST, url))
            .await
            .unwrap();
        transport
            .execute(request(reqwest::Method::POST, url))
            .await
            .unwrap();

        assert_eq!(transport.inner.calls.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_エラーレスポンスはキャッシュしない() {
        let cache = MemoryCache::new();
        let transport = CachedTransport::new(CountingTransport::new(503), cache.clone());
        let url = "https://auth.example.com/api/v3/admin/system/";

        let response = transport
            .execute(request(reqwest::Method::GET, url))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_invalidate後は再取得する() {
        let cache = MemoryCache::new();
        let transport = CachedTransport::new(CountingTransport::new(200), cache.clone());
        let url = "https://auth.example.com/api/v3/admin/apps/";

        transport
            .execute(request(reqwest::Method::GET, url))
            .await
            .unwrap();
        cache.invalidate(url).await;
        let body = transport
            .execute(request(reqwest::Method::GET, url))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();

        assert_eq!(body, r#"{"call": 1}"#);
    }
}
