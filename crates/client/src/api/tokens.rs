//! トークン API
//!
//! トークンは `identifier` で識別する。キー本体は `view_key` でしか取得できない。

use async_trait::async_trait;
use authentik_shared::Paginated;

use crate::{
    client_impl::AuthentikClientImpl,
    endpoints,
    error::ClientError,
    models::{
        PatchedTokenRequest,
        Token,
        TokenIntent,
        TokenRequest,
        TokenSetKeyRequest,
        TokenView,
        UsedBy,
    },
    request::{PageRequest, QueryParams, RequestParams, ToQuery},
};

/// トークン一覧のフィルタ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenListQuery {
    pub paging:        PageRequest,
    pub identifier:    Option<String>,
    pub intent:        Option<TokenIntent>,
    pub description:   Option<String>,
    pub managed:       Option<String>,
    /// 所有ユーザー名（`user__username`）
    pub user_username: Option<String>,
}

impl ToQuery for TokenListQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("identifier", self.identifier.as_deref())
            .push("intent", self.intent)
            .push("description", self.description.as_deref())
            .push("managed", self.managed.as_deref())
            .push("user__username", self.user_username.as_deref());
        self.paging.append_to(&mut query);
        query
    }
}

/// トークン API トレイト
#[async_trait]
pub trait TokensApi: Send + Sync {
    /// トークン一覧を取得する
    ///
    /// `GET api/v3/core/tokens/` を呼び出す。
    async fn list_tokens(&self, query: &TokenListQuery) -> Result<Paginated<Token>, ClientError>;

    /// トークンを取得する
    async fn retrieve_token(&self, identifier: &str) -> Result<Token, ClientError>;

    /// トークンを作成する
    async fn create_token(&self, req: &TokenRequest) -> Result<Token, ClientError>;

    /// トークンを全体更新する
    async fn update_token(&self, identifier: &str, req: &TokenRequest)
    -> Result<Token, ClientError>;

    /// トークンを部分更新する
    async fn partial_update_token(
        &self,
        identifier: &str,
        req: &PatchedTokenRequest,
    ) -> Result<Token, ClientError>;

    /// トークンを削除する
    async fn destroy_token(&self, identifier: &str) -> Result<(), ClientError>;

    /// トークンのキーを取得する
    ///
    /// `GET api/v3/core/tokens/{identifier}/view_key/` を呼び出す。
    async fn view_token_key(&self, identifier: &str) -> Result<TokenView, ClientError>;

    /// トークンのキーを設定する
    ///
    /// `POST api/v3/core/tokens/{identifier}/set_key/` を呼び出す。成功時はボディなし。
    async fn set_token_key(
        &self,
        identifier: &str,
        req: &TokenSetKeyRequest,
    ) -> Result<(), ClientError>;

    /// トークンを参照しているオブジェクトを取得する
    async fn token_used_by(&self, identifier: &str) -> Result<Vec<UsedBy>, ClientError>;
}

#[async_trait]
impl TokensApi for AuthentikClientImpl {
    async fn list_tokens(&self, query: &TokenListQuery) -> Result<Paginated<Token>, ClientError> {
        let params = RequestParams::new().query(query.to_query());
        self.invoke(&endpoints::CORE_TOKENS_LIST, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%identifier))]
    async fn retrieve_token(&self, identifier: &str) -> Result<Token, ClientError> {
        let params = RequestParams::new().path("identifier", identifier);
        self.invoke(&endpoints::CORE_TOKENS_RETRIEVE, params).await
    }

    async fn create_token(&self, req: &TokenRequest) -> Result<Token, ClientError> {
        let params = RequestParams::new().json(req)?;
        self.invoke(&endpoints::CORE_TOKENS_CREATE, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%identifier))]
    async fn update_token(
        &self,
        identifier: &str,
        req: &TokenRequest,
    ) -> Result<Token, ClientError> {
        let params = RequestParams::new()
            .path("identifier", identifier)
            .json(req)?;
        self.invoke(&endpoints::CORE_TOKENS_UPDATE, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%identifier))]
    async fn partial_update_token(
        &self,
        identifier: &str,
        req: &PatchedTokenRequest,
    ) -> Result<Token, ClientError> {
        let params = RequestParams::new()
            .path("identifier", identifier)
            .json(req)?;
        self.invoke(&endpoints::CORE_TOKENS_PARTIAL_UPDATE, params)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%identifier))]
    async fn destroy_token(&self, identifier: &str) -> Result<(), ClientError> {
        let params = RequestParams::new().path("identifier", identifier);
        self.invoke(&endpoints::CORE_TOKENS_DESTROY, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%identifier))]
    async fn view_token_key(&self, identifier: &str) -> Result<TokenView, ClientError> {
        let params = RequestParams::new().path("identifier", identifier);
        self.invoke(&endpoints::CORE_TOKENS_VIEW_KEY, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%identifier))]
    async fn set_token_key(
        &self,
        identifier: &str,
        req: &TokenSetKeyRequest,
    ) -> Result<(), ClientError> {
        let params = RequestParams::new()
            .path("identifier", identifier)
            .json(req)?;
        self.invoke(&endpoints::CORE_TOKENS_SET_KEY, params).await
    }

    async fn token_used_by(&self, identifier: &str) -> Result<Vec<UsedBy>, ClientError> {
        let params = RequestParams::new().path("identifier", identifier);
        self.invoke(&endpoints::CORE_TOKENS_USED_BY, params).await
    }
}
