//! AuthentikClient スーパートレイトと汎用 invoker を持つクライアント実装

use std::sync::Arc;

use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{
    api::{
        AdminApi,
        ApplicationsApi,
        AuthenticatorsApi,
        EventsApi,
        FlowsApi,
        GroupsApi,
        TokensApi,
        UsersApi,
    },
    config::{ClientConfig, ConfigError},
    endpoint::Endpoint,
    error::ClientError,
    request::RequestParams,
    response::handle_response,
    transport::{HttpTransport, ReqwestTransport},
};

/// Authentik クライアントトレイト（スーパートレイト）
///
/// リソースごとのサブトレイトを束ねる。
/// テスト時にはサブトレイト単位でスタブを使用できる。
pub trait AuthentikClient:
    AdminApi
    + ApplicationsApi
    + AuthenticatorsApi
    + EventsApi
    + FlowsApi
    + GroupsApi
    + TokensApi
    + UsersApi
{
}

/// ブランケット impl: すべてのサブトレイトを実装する型は
/// 自動的に `AuthentikClient` を実装する。
impl<T> AuthentikClient for T where
    T: AdminApi
        + ApplicationsApi
        + AuthenticatorsApi
        + EventsApi
        + FlowsApi
        + GroupsApi
        + TokensApi
        + UsersApi
{
}

/// Authentik クライアント実装
///
/// クローンは安価で、クローン同士はトランスポートを共有する。
#[derive(Clone)]
pub struct AuthentikClientImpl {
    base_url:      Url,
    authorization: Option<HeaderValue>,
    transport:     Arc<dyn HttpTransport>,
    cancel:        Option<CancellationToken>,
}

impl std::fmt::Debug for AuthentikClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthentikClientImpl")
            .field("base_url", &self.base_url.as_str())
            .field("authenticated", &self.authorization.is_some())
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

impl AuthentikClientImpl {
    /// reqwest のデフォルト設定でクライアントを作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: Authentik のベース URL（例: `https://auth.example.com`）
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Self::with_transport(base_url, Arc::new(ReqwestTransport::default()))
    }

    /// 設定からクライアントを作成する
    pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::from_config(config)?;
        let client = Self::with_transport(&config.base_url, Arc::new(transport))?;
        match &config.token {
            Some(token) => client.with_token(token),
            None => Ok(client),
        }
    }

    /// 任意のトランスポートでクライアントを作成する
    ///
    /// キャッシュ付きトランスポートやテスト用スタブを差し込む場合に使う。
    pub fn with_transport(
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            authorization: None,
            transport,
            cancel: None,
        })
    }

    /// API トークンを設定する
    pub fn with_token(mut self, token: &str) -> Result<Self, ConfigError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ConfigError::InvalidToken)?;
        value.set_sensitive(true);
        self.authorization = Some(value);
        Ok(self)
    }

    /// キャンセルトークンに紐づいたクローンを返す
    ///
    /// トークンがキャンセルされると、送信中の呼び出しは
    /// [`ClientError::Cancelled`] で中断される。
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel: Some(token),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// エンドポイントを呼び出す
    ///
    /// 1. リクエストを組み立てる（パス・クエリ・ボディ・認証ヘッダー）
    /// 2. トランスポートで 1 回だけ送信する
    /// 3. ステータスを検査し、レスポンス形状に従ってデコードする
    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(endpoint = endpoint.name, method = %endpoint.method)
    )]
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        params: RequestParams,
    ) -> Result<T, ClientError> {
        let request = params.into_request(&self.base_url, endpoint, self.authorization.as_ref())?;
        tracing::debug!(url = %request.url(), "Authentik API を呼び出します");

        let exchange = async {
            let response = self.transport.execute(request).await?;
            handle_response(response, endpoint.shape).await
        };

        match &self.cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        tracing::debug!("キャンセルされました");
                        Err(ClientError::Cancelled)
                    }
                    result = exchange => result,
                }
            }
            None => exchange.await,
        }
    }
}

/// ベース URL を末尾 `/` 付きに正規化する
///
/// `Url::join` は末尾 `/` がないと最後のセグメントを置き換えてしまうため。
fn normalize_base_url(base_url: &str) -> Result<Url, ConfigError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let url = Url::parse(&format!("{trimmed}/"))
        .map_err(|e| ConfigError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl(format!(
            "{base_url}: http / https 以外のスキームは使用できません"
        )));
    }
    Ok(url)
}
