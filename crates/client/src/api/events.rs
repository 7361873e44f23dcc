//! イベント（監査ログ）API

use async_trait::async_trait;
use authentik_shared::Paginated;
use uuid::Uuid;

use crate::{
    client_impl::AuthentikClientImpl,
    endpoints,
    error::ClientError,
    models::{Event, EventTopPerUser, TypeCreate},
    request::{PageRequest, QueryParams, RequestParams, ToQuery},
};

/// イベント一覧のフィルタ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventListQuery {
    pub paging:                 PageRequest,
    pub action:                 Option<String>,
    /// 複数アクションの OR 条件
    pub actions:                Vec<String>,
    pub username:               Option<String>,
    pub client_ip:              Option<String>,
    pub brand_name:             Option<String>,
    pub context_authorized_app: Option<String>,
    pub context_model_app:      Option<String>,
    pub context_model_name:     Option<String>,
    pub context_model_pk:       Option<String>,
}

impl ToQuery for EventListQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("action", self.action.as_deref())
            .push_all("actions", &self.actions)
            .push("username", self.username.as_deref())
            .push("client_ip", self.client_ip.as_deref())
            .push("brand_name", self.brand_name.as_deref())
            .push("context_authorized_app", self.context_authorized_app.as_deref())
            .push("context_model_app", self.context_model_app.as_deref())
            .push("context_model_name", self.context_model_name.as_deref())
            .push("context_model_pk", self.context_model_pk.as_deref());
        self.paging.append_to(&mut query);
        query
    }
}

/// `top_per_user` の条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopPerUserQuery {
    pub action: Option<String>,
    /// 上位何件を返すか（サーバー既定は 15）
    pub top_n:  Option<u32>,
}

impl ToQuery for TopPerUserQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("action", self.action.as_deref())
            .push("top_n", self.top_n);
        query
    }
}

/// イベント API トレイト
#[async_trait]
pub trait EventsApi: Send + Sync {
    /// イベント一覧を取得する
    ///
    /// `GET api/v3/events/events/` を呼び出す。
    async fn list_events(&self, query: &EventListQuery) -> Result<Paginated<Event>, ClientError>;

    /// イベントを取得する
    async fn retrieve_event(&self, event_uuid: Uuid) -> Result<Event, ClientError>;

    /// ユーザーごとのイベント件数上位を取得する
    ///
    /// `GET api/v3/events/events/top_per_user/` を呼び出す。
    async fn top_events_per_user(
        &self,
        query: &TopPerUserQuery,
    ) -> Result<Vec<EventTopPerUser>, ClientError>;

    /// 定義済みのアクション一覧を取得する
    async fn event_actions(&self) -> Result<Vec<TypeCreate>, ClientError>;
}

#[async_trait]
impl EventsApi for AuthentikClientImpl {
    async fn list_events(&self, query: &EventListQuery) -> Result<Paginated<Event>, ClientError> {
        let params = RequestParams::new().query(query.to_query());
        self.invoke(&endpoints::EVENTS_EVENTS_LIST, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%event_uuid))]
    async fn retrieve_event(&self, event_uuid: Uuid) -> Result<Event, ClientError> {
        let params = RequestParams::new().path("event_uuid", event_uuid);
        self.invoke(&endpoints::EVENTS_EVENTS_RETRIEVE, params)
            .await
    }

    async fn top_events_per_user(
        &self,
        query: &TopPerUserQuery,
    ) -> Result<Vec<EventTopPerUser>, ClientError> {
        let params = RequestParams::new().query(query.to_query());
        self.invoke(&endpoints::EVENTS_EVENTS_TOP_PER_USER, params)
            .await
    }

    async fn event_actions(&self) -> Result<Vec<TypeCreate>, ClientError> {
        self.invoke(&endpoints::EVENTS_EVENTS_ACTIONS, RequestParams::new())
            .await
    }
}
