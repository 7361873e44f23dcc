//! グループ API

use async_trait::async_trait;
use authentik_shared::Paginated;
use uuid::Uuid;

use crate::{
    client_impl::AuthentikClientImpl,
    endpoints,
    error::ClientError,
    models::{Group, GroupRequest, PatchedGroupRequest, UsedBy, UserAccountRequest},
    request::{PageRequest, QueryParams, RequestParams, ToQuery},
};

/// グループ一覧のフィルタ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupListQuery {
    pub paging:              PageRequest,
    pub name:                Option<String>,
    pub is_superuser:        Option<bool>,
    pub members_by_pk:       Vec<i64>,
    pub members_by_username: Vec<String>,
    pub include_users:       Option<bool>,
    pub include_children:    Option<bool>,
}

impl ToQuery for GroupListQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("name", self.name.as_deref())
            .push("is_superuser", self.is_superuser)
            .push_all("members_by_pk", &self.members_by_pk)
            .push_all("members_by_username", &self.members_by_username)
            .push("include_users", self.include_users)
            .push("include_children", self.include_children);
        self.paging.append_to(&mut query);
        query
    }
}

/// グループ API トレイト
#[async_trait]
pub trait GroupsApi: Send + Sync {
    /// グループ一覧を取得する
    ///
    /// `GET api/v3/core/groups/` を呼び出す。
    async fn list_groups(&self, query: &GroupListQuery) -> Result<Paginated<Group>, ClientError>;

    /// グループを取得する
    async fn retrieve_group(&self, group_uuid: Uuid) -> Result<Group, ClientError>;

    /// グループを作成する
    async fn create_group(&self, req: &GroupRequest) -> Result<Group, ClientError>;

    /// グループを全体更新する
    async fn update_group(&self, group_uuid: Uuid, req: &GroupRequest)
    -> Result<Group, ClientError>;

    /// グループを部分更新する
    async fn partial_update_group(
        &self,
        group_uuid: Uuid,
        req: &PatchedGroupRequest,
    ) -> Result<Group, ClientError>;

    /// グループを削除する
    async fn destroy_group(&self, group_uuid: Uuid) -> Result<(), ClientError>;

    /// グループにユーザーを追加する
    ///
    /// `POST api/v3/core/groups/{group_uuid}/add_user/` を呼び出す。
    async fn add_user_to_group(&self, group_uuid: Uuid, user_pk: i64) -> Result<(), ClientError>;

    /// グループからユーザーを外す
    ///
    /// `POST api/v3/core/groups/{group_uuid}/remove_user/` を呼び出す。
    async fn remove_user_from_group(
        &self,
        group_uuid: Uuid,
        user_pk: i64,
    ) -> Result<(), ClientError>;

    /// グループを参照しているオブジェクトを取得する
    async fn group_used_by(&self, group_uuid: Uuid) -> Result<Vec<UsedBy>, ClientError>;
}

#[async_trait]
impl GroupsApi for AuthentikClientImpl {
    async fn list_groups(&self, query: &GroupListQuery) -> Result<Paginated<Group>, ClientError> {
        let params = RequestParams::new().query(query.to_query());
        self.invoke(&endpoints::CORE_GROUPS_LIST, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%group_uuid))]
    async fn retrieve_group(&self, group_uuid: Uuid) -> Result<Group, ClientError> {
        let params = RequestParams::new().path("group_uuid", group_uuid);
        self.invoke(&endpoints::CORE_GROUPS_RETRIEVE, params).await
    }

    async fn create_group(&self, req: &GroupRequest) -> Result<Group, ClientError> {
        let params = RequestParams::new().json(req)?;
        self.invoke(&endpoints::CORE_GROUPS_CREATE, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%group_uuid))]
    async fn update_group(
        &self,
        group_uuid: Uuid,
        req: &GroupRequest,
    ) -> Result<Group, ClientError> {
        let params = RequestParams::new()
            .path("group_uuid", group_uuid)
            .json(req)?;
        self.invoke(&endpoints::CORE_GROUPS_UPDATE, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%group_uuid))]
    async fn partial_update_group(
        &self,
        group_uuid: Uuid,
        req: &PatchedGroupRequest,
    ) -> Result<Group, ClientError> {
        let params = RequestParams::new()
            .path("group_uuid", group_uuid)
            .json(req)?;
        self.invoke(&endpoints::CORE_GROUPS_PARTIAL_UPDATE, params)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%group_uuid))]
    async fn destroy_group(&self, group_uuid: Uuid) -> Result<(), ClientError> {
        let params = RequestParams::new().path("group_uuid", group_uuid);
        self.invoke(&endpoints::CORE_GROUPS_DESTROY, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%group_uuid, %user_pk))]
    async fn add_user_to_group(&self, group_uuid: Uuid, user_pk: i64) -> Result<(), ClientError> {
        let params = RequestParams::new()
            .path("group_uuid", group_uuid)
            .json(&UserAccountRequest { pk: user_pk })?;
        self.invoke(&endpoints::CORE_GROUPS_ADD_USER, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%group_uuid, %user_pk))]
    async fn remove_user_from_group(
        &self,
        group_uuid: Uuid,
        user_pk: i64,
    ) -> Result<(), ClientError> {
        let params = RequestParams::new()
            .path("group_uuid", group_uuid)
            .json(&UserAccountRequest { pk: user_pk })?;
        self.invoke(&endpoints::CORE_GROUPS_REMOVE_USER, params)
            .await
    }

    async fn group_used_by(&self, group_uuid: Uuid) -> Result<Vec<UsedBy>, ClientError> {
        let params = RequestParams::new().path("group_uuid", group_uuid);
        self.invoke(&endpoints::CORE_GROUPS_USED_BY, params).await
    }
}
