//! アプリケーション API

use async_trait::async_trait;
use authentik_shared::Paginated;

use crate::{
    client_impl::AuthentikClientImpl,
    endpoints,
    error::ClientError,
    models::{
        Application,
        ApplicationRequest,
        PatchedApplicationRequest,
        PolicyTestResult,
        UsedBy,
    },
    request::{PageRequest, QueryParams, RequestParams, ToQuery},
};

/// アプリケーション一覧のフィルタ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationListQuery {
    pub paging:               PageRequest,
    pub name:                 Option<String>,
    pub slug:                 Option<String>,
    pub group:                Option<String>,
    pub meta_publisher:       Option<String>,
    pub meta_launch_url:      Option<String>,
    /// 管理者向けに全件を返す
    pub superuser_full_list:  Option<bool>,
    /// 指定ユーザーがアクセスできるものに絞る
    pub for_user:             Option<i64>,
    pub only_with_launch_url: Option<bool>,
}

impl ToQuery for ApplicationListQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .push("name", self.name.as_deref())
            .push("slug", self.slug.as_deref())
            .push("group", self.group.as_deref())
            .push("meta_publisher", self.meta_publisher.as_deref())
            .push("meta_launch_url", self.meta_launch_url.as_deref())
            .push("superuser_full_list", self.superuser_full_list)
            .push("for_user", self.for_user)
            .push("only_with_launch_url", self.only_with_launch_url);
        self.paging.append_to(&mut query);
        query
    }
}

/// アプリケーション API トレイト
#[async_trait]
pub trait ApplicationsApi: Send + Sync {
    /// アプリケーション一覧を取得する
    ///
    /// `GET api/v3/core/applications/` を呼び出す。
    async fn list_applications(
        &self,
        query: &ApplicationListQuery,
    ) -> Result<Paginated<Application>, ClientError>;

    /// アプリケーションを取得する
    async fn retrieve_application(&self, slug: &str) -> Result<Application, ClientError>;

    /// アプリケーションを作成する
    async fn create_application(&self, req: &ApplicationRequest)
    -> Result<Application, ClientError>;

    /// アプリケーションを全体更新する
    async fn update_application(
        &self,
        slug: &str,
        req: &ApplicationRequest,
    ) -> Result<Application, ClientError>;

    /// アプリケーションを部分更新する
    async fn partial_update_application(
        &self,
        slug: &str,
        req: &PatchedApplicationRequest,
    ) -> Result<Application, ClientError>;

    /// アプリケーションを削除する
    async fn destroy_application(&self, slug: &str) -> Result<(), ClientError>;

    /// ユーザーがアプリケーションにアクセスできるかを評価する
    ///
    /// `GET api/v3/core/applications/{slug}/check_access/?for_user=...` を呼び出す。
    async fn check_application_access(
        &self,
        slug: &str,
        for_user: i64,
    ) -> Result<PolicyTestResult, ClientError>;

    /// アプリケーションを参照しているオブジェクトを取得する
    async fn application_used_by(&self, slug: &str) -> Result<Vec<UsedBy>, ClientError>;
}

#[async_trait]
impl ApplicationsApi for AuthentikClientImpl {
    async fn list_applications(
        &self,
        query: &ApplicationListQuery,
    ) -> Result<Paginated<Application>, ClientError> {
        let params = RequestParams::new().query(query.to_query());
        self.invoke(&endpoints::CORE_APPLICATIONS_LIST, params)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%slug))]
    async fn retrieve_application(&self, slug: &str) -> Result<Application, ClientError> {
        let params = RequestParams::new().path("slug", slug);
        self.invoke(&endpoints::CORE_APPLICATIONS_RETRIEVE, params)
            .await
    }

    async fn create_application(
        &self,
        req: &ApplicationRequest,
    ) -> Result<Application, ClientError> {
        let params = RequestParams::new().json(req)?;
        self.invoke(&endpoints::CORE_APPLICATIONS_CREATE, params)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%slug))]
    async fn update_application(
        &self,
        slug: &str,
        req: &ApplicationRequest,
    ) -> Result<Application, ClientError> {
        let params = RequestParams::new().path("slug", slug).json(req)?;
        self.invoke(&endpoints::CORE_APPLICATIONS_UPDATE, params)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%slug))]
    async fn partial_update_application(
        &self,
        slug: &str,
        req: &PatchedApplicationRequest,
    ) -> Result<Application, ClientError> {
        let params = RequestParams::new().path("slug", slug).json(req)?;
        self.invoke(&endpoints::CORE_APPLICATIONS_PARTIAL_UPDATE, params)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%slug))]
    async fn destroy_application(&self, slug: &str) -> Result<(), ClientError> {
        let params = RequestParams::new().path("slug", slug);
        self.invoke(&endpoints::CORE_APPLICATIONS_DESTROY, params)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%slug, %for_user))]
    async fn check_application_access(
        &self,
        slug: &str,
        for_user: i64,
    ) -> Result<PolicyTestResult, ClientError> {
        let mut query = QueryParams::new();
        query.push("for_user", Some(for_user));
        let params = RequestParams::new().path("slug", slug).query(query);
        self.invoke(&endpoints::CORE_APPLICATIONS_CHECK_ACCESS, params)
            .await
    }

    async fn application_used_by(&self, slug: &str) -> Result<Vec<UsedBy>, ClientError> {
        let params = RequestParams::new().path("slug", slug);
        self.invoke(&endpoints::CORE_APPLICATIONS_USED_BY, params)
            .await
    }
}
