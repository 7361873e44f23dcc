//! ユーザー API

use async_trait::async_trait;
use authentik_shared::Paginated;
use uuid::Uuid;

use crate::{
    client_impl::AuthentikClientImpl,
    endpoints,
    error::ClientError,
    models::{
        PatchedUserRequest,
        SessionUser,
        UsedBy,
        User,
        UserPasswordSetRequest,
        UserPath,
        UserRequest,
        UserType,
    },
    request::{PageRequest, QueryParams, RequestParams, ToQuery},
};

/// ユーザー一覧のフィルタ
///
/// 未設定のフィールドはクエリに含まれない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListQuery {
    pub paging:          PageRequest,
    pub username:        Option<String>,
    pub email:           Option<String>,
    pub name:            Option<String>,
    pub is_active:       Option<bool>,
    pub is_superuser:    Option<bool>,
    pub path:            Option<String>,
    pub path_startswith: Option<String>,
    pub uuid:            Option<Uuid>,
    /// `type=internal&type=external` のように複数指定できる
    pub user_types:      Vec<UserType>,
    pub groups_by_name:  Vec<String>,
    pub groups_by_pk:    Vec<Uuid>,
    /// `false` でグループの埋め込みを省略する
    pub include_groups:  Option<bool>,
}

impl ToQuery for UserListQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("username", self.username.as_deref())
            .push("email", self.email.as_deref())
            .push("name", self.name.as_deref())
            .push("is_active", self.is_active)
            .push("is_superuser", self.is_superuser)
            .push("path", self.path.as_deref())
            .push("path_startswith", self.path_startswith.as_deref())
            .push("uuid", self.uuid)
            .push_all("type", &self.user_types)
            .push_all("groups_by_name", &self.groups_by_name)
            .push_all("groups_by_pk", &self.groups_by_pk)
            .push("include_groups", self.include_groups);
        self.paging.append_to(&mut query);
        query
    }
}

/// ユーザー API トレイト
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// ユーザー一覧を取得する
    ///
    /// `GET api/v3/core/users/` を呼び出す。
    async fn list_users(&self, query: &UserListQuery) -> Result<Paginated<User>, ClientError>;

    /// ユーザーを取得する
    ///
    /// `GET api/v3/core/users/{id}/` を呼び出す。
    async fn retrieve_user(&self, id: i64) -> Result<User, ClientError>;

    /// ユーザーを作成する
    async fn create_user(&self, req: &UserRequest) -> Result<User, ClientError>;

    /// ユーザーを全体更新する
    async fn update_user(&self, id: i64, req: &UserRequest) -> Result<User, ClientError>;

    /// ユーザーを部分更新する
    async fn partial_update_user(
        &self,
        id: i64,
        req: &PatchedUserRequest,
    ) -> Result<User, ClientError>;

    /// ユーザーを削除する
    async fn destroy_user(&self, id: i64) -> Result<(), ClientError>;

    /// ログイン中のユーザー（トークンの持ち主）を取得する
    ///
    /// `GET api/v3/core/users/me/` を呼び出す。
    async fn me(&self) -> Result<SessionUser, ClientError>;

    /// パスワードを設定する
    ///
    /// `POST api/v3/core/users/{id}/set_password/` を呼び出す。成功時はボディなし。
    async fn set_password(
        &self,
        id: i64,
        req: &UserPasswordSetRequest,
    ) -> Result<(), ClientError>;

    /// ユーザーを参照しているオブジェクトを取得する
    async fn user_used_by(&self, id: i64) -> Result<Vec<UsedBy>, ClientError>;

    /// 使用中のユーザーパス一覧を取得する
    async fn user_paths(&self, search: Option<&str>) -> Result<UserPath, ClientError>;
}

#[async_trait]
impl UsersApi for AuthentikClientImpl {
    async fn list_users(&self, query: &UserListQuery) -> Result<Paginated<User>, ClientError> {
        let params = RequestParams::new().query(query.to_query());
        self.invoke(&endpoints::CORE_USERS_LIST, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn retrieve_user(&self, id: i64) -> Result<User, ClientError> {
        let params = RequestParams::new().path("id", id);
        self.invoke(&endpoints::CORE_USERS_RETRIEVE, params).await
    }

    async fn create_user(&self, req: &UserRequest) -> Result<User, ClientError> {
        let params = RequestParams::new().json(req)?;
        self.invoke(&endpoints::CORE_USERS_CREATE, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn update_user(&self, id: i64, req: &UserRequest) -> Result<User, ClientError> {
        let params = RequestParams::new().path("id", id).json(req)?;
        self.invoke(&endpoints::CORE_USERS_UPDATE, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn partial_update_user(
        &self,
        id: i64,
        req: &PatchedUserRequest,
    ) -> Result<User, ClientError> {
        let params = RequestParams::new().path("id", id).json(req)?;
        self.invoke(&endpoints::CORE_USERS_PARTIAL_UPDATE, params)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn destroy_user(&self, id: i64) -> Result<(), ClientError> {
        let params = RequestParams::new().path("id", id);
        self.invoke(&endpoints::CORE_USERS_DESTROY, params).await
    }

    async fn me(&self) -> Result<SessionUser, ClientError> {
        self.invoke(&endpoints::CORE_USERS_ME, RequestParams::new())
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn set_password(
        &self,
        id: i64,
        req: &UserPasswordSetRequest,
    ) -> Result<(), ClientError> {
        let params = RequestParams::new().path("id", id).json(req)?;
        self.invoke(&endpoints::CORE_USERS_SET_PASSWORD, params)
            .await
    }

    async fn user_used_by(&self, id: i64) -> Result<Vec<UsedBy>, ClientError> {
        let params = RequestParams::new().path("id", id);
        self.invoke(&endpoints::CORE_USERS_USED_BY, params).await
    }

    async fn user_paths(&self, search: Option<&str>) -> Result<UserPath, ClientError> {
        let mut query = QueryParams::new();
        query.push("search", search);
        let params = RequestParams::new().query(query);
        self.invoke(&endpoints::CORE_USERS_PATHS, params).await
    }
}
