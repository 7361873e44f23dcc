//! フロー API

use async_trait::async_trait;
use authentik_shared::Paginated;

use crate::{
    client_impl::AuthentikClientImpl,
    endpoints,
    error::ClientError,
    models::{Flow, FlowDesignation, UsedBy},
    request::{PageRequest, QueryParams, RequestParams, ToQuery},
};

/// フロー一覧のフィルタ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowListQuery {
    pub paging:      PageRequest,
    pub designation: Option<FlowDesignation>,
    pub name:        Option<String>,
    pub slug:        Option<String>,
}

impl ToQuery for FlowListQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("designation", self.designation)
            .push("name", self.name.as_deref())
            .push("slug", self.slug.as_deref());
        self.paging.append_to(&mut query);
        query
    }
}

/// フロー API トレイト
#[async_trait]
pub trait FlowsApi: Send + Sync {
    /// フロー一覧を取得する
    ///
    /// `GET api/v3/flows/instances/` を呼び出す。
    async fn list_flows(&self, query: &FlowListQuery) -> Result<Paginated<Flow>, ClientError>;

    /// フローを取得する
    async fn retrieve_flow(&self, slug: &str) -> Result<Flow, ClientError>;

    /// フローを削除する
    async fn destroy_flow(&self, slug: &str) -> Result<(), ClientError>;

    /// フローを参照しているオブジェクトを取得する
    async fn flow_used_by(&self, slug: &str) -> Result<Vec<UsedBy>, ClientError>;
}

#[async_trait]
impl FlowsApi for AuthentikClientImpl {
    async fn list_flows(&self, query: &FlowListQuery) -> Result<Paginated<Flow>, ClientError> {
        let params = RequestParams::new().query(query.to_query());
        self.invoke(&endpoints::FLOWS_INSTANCES_LIST, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%slug))]
    async fn retrieve_flow(&self, slug: &str) -> Result<Flow, ClientError> {
        let params = RequestParams::new().path("slug", slug);
        self.invoke(&endpoints::FLOWS_INSTANCES_RETRIEVE, params)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%slug))]
    async fn destroy_flow(&self, slug: &str) -> Result<(), ClientError> {
        let params = RequestParams::new().path("slug", slug);
        self.invoke(&endpoints::FLOWS_INSTANCES_DESTROY, params)
            .await
    }

    async fn flow_used_by(&self, slug: &str) -> Result<Vec<UsedBy>, ClientError> {
        let params = RequestParams::new().path("slug", slug);
        self.invoke(&endpoints::FLOWS_INSTANCES_USED_BY, params)
            .await
    }
}
