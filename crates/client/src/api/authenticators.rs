//! 認証器（MFA デバイス）API
//!
//! 管理者向け（`authenticators/admin/{kind}/`）と本人向け（`authenticators/{kind}/`）の
//! 2 系統がある。本人向けにデバイスの作成はない。

use async_trait::async_trait;
use authentik_shared::Paginated;

use crate::{
    client_impl::AuthentikClientImpl,
    endpoints,
    error::ClientError,
    models::{Device, DeviceKind, DeviceRecord, DeviceRequest, PatchedDeviceRequest},
    request::{PageRequest, QueryParams, RequestParams, ToQuery},
};

/// 種類別デバイス一覧のフィルタ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceListQuery {
    pub paging: PageRequest,
    pub name:   Option<String>,
}

impl ToQuery for DeviceListQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push("name", self.name.as_deref());
        self.paging.append_to(&mut query);
        query
    }
}

/// 認証器 API トレイト
#[async_trait]
pub trait AuthenticatorsApi: Send + Sync {
    /// 全種類のデバイスを取得する（管理者向け）
    ///
    /// `GET api/v3/authenticators/admin/all/` を呼び出す。
    ///
    /// # 引数
    ///
    /// - `user`: 所有ユーザーの pk（省略時は全ユーザー）
    async fn admin_all(&self, user: Option<i64>) -> Result<Vec<Device>, ClientError>;

    /// ログイン中のユーザーの全種類のデバイスを取得する
    ///
    /// `GET api/v3/authenticators/all/` を呼び出す。
    async fn all(&self) -> Result<Vec<Device>, ClientError>;

    /// 指定種類のデバイス一覧を取得する（管理者向け）
    async fn admin_list(
        &self,
        kind: DeviceKind,
        query: &DeviceListQuery,
    ) -> Result<Paginated<DeviceRecord>, ClientError>;

    /// デバイスを取得する（管理者向け）
    async fn admin_retrieve(&self, kind: DeviceKind, id: i64)
    -> Result<DeviceRecord, ClientError>;

    /// デバイスを作成する（管理者向け）
    async fn admin_create(
        &self,
        kind: DeviceKind,
        req: &DeviceRequest,
    ) -> Result<DeviceRecord, ClientError>;

    /// デバイスを全体更新する（管理者向け）
    async fn admin_update(
        &self,
        kind: DeviceKind,
        id: i64,
        req: &DeviceRequest,
    ) -> Result<DeviceRecord, ClientError>;

    /// デバイスを部分更新する（管理者向け）
    async fn admin_partial_update(
        &self,
        kind: DeviceKind,
        id: i64,
        req: &PatchedDeviceRequest,
    ) -> Result<DeviceRecord, ClientError>;

    /// デバイスを削除する（管理者向け）
    async fn admin_destroy(&self, kind: DeviceKind, id: i64) -> Result<(), ClientError>;

    /// 自分の指定種類のデバイス一覧を取得する
    async fn list_devices(
        &self,
        kind: DeviceKind,
        query: &DeviceListQuery,
    ) -> Result<Paginated<DeviceRecord>, ClientError>;

    /// 自分のデバイスを取得する
    async fn retrieve_device(&self, kind: DeviceKind, id: i64)
    -> Result<DeviceRecord, ClientError>;

    /// 自分のデバイスを全体更新する
    async fn update_device(
        &self,
        kind: DeviceKind,
        id: i64,
        req: &DeviceRequest,
    ) -> Result<DeviceRecord, ClientError>;

    /// 自分のデバイスを部分更新する
    async fn partial_update_device(
        &self,
        kind: DeviceKind,
        id: i64,
        req: &PatchedDeviceRequest,
    ) -> Result<DeviceRecord, ClientError>;

    /// 自分のデバイスを削除する
    async fn destroy_device(&self, kind: DeviceKind, id: i64) -> Result<(), ClientError>;
}

/// `{kind}` / `{id}` を埋めたパラメータ
fn device_params(kind: DeviceKind, id: i64) -> RequestParams {
    RequestParams::new().path("kind", kind).path("id", id)
}

#[async_trait]
impl AuthenticatorsApi for AuthentikClientImpl {
    #[tracing::instrument(skip_all, level = "debug", fields(?user))]
    async fn admin_all(&self, user: Option<i64>) -> Result<Vec<Device>, ClientError> {
        let mut query = QueryParams::new();
        query.push("user", user);
        let params = RequestParams::new().query(query);
        self.invoke(&endpoints::AUTHENTICATORS_ADMIN_ALL, params)
            .await
    }

    async fn all(&self) -> Result<Vec<Device>, ClientError> {
        self.invoke(&endpoints::AUTHENTICATORS_ALL, RequestParams::new())
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%kind))]
    async fn admin_list(
        &self,
        kind: DeviceKind,
        query: &DeviceListQuery,
    ) -> Result<Paginated<DeviceRecord>, ClientError> {
        let params = RequestParams::new()
            .path("kind", kind)
            .query(query.to_query());
        self.invoke(&endpoints::AUTHENTICATORS_ADMIN_LIST, params)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%kind, %id))]
    async fn admin_retrieve(
        &self,
        kind: DeviceKind,
        id: i64,
    ) -> Result<DeviceRecord, ClientError> {
        self.invoke(&endpoints::AUTHENTICATORS_ADMIN_RETRIEVE, device_params(kind, id))
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%kind))]
    async fn admin_create(
        &self,
        kind: DeviceKind,
        req: &DeviceRequest,
    ) -> Result<DeviceRecord, ClientError> {
        let params = RequestParams::new().path("kind", kind).json(req)?;
        self.invoke(&endpoints::AUTHENTICATORS_ADMIN_CREATE, params)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%kind, %id))]
    async fn admin_update(
        &self,
        kind: DeviceKind,
        id: i64,
        req: &DeviceRequest,
    ) -> Result<DeviceRecord, ClientError> {
        let params = device_params(kind, id).json(req)?;
        self.invoke(&endpoints::AUTHENTICATORS_ADMIN_UPDATE, params)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%kind, %id))]
    async fn admin_partial_update(
        &self,
        kind: DeviceKind,
        id: i64,
        req: &PatchedDeviceRequest,
    ) -> Result<DeviceRecord, ClientError> {
        let params = device_params(kind, id).json(req)?;
        self.invoke(&endpoints::AUTHENTICATORS_ADMIN_PARTIAL_UPDATE, params)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%kind, %id))]
    async fn admin_destroy(&self, kind: DeviceKind, id: i64) -> Result<(), ClientError> {
        self.invoke(&endpoints::AUTHENTICATORS_ADMIN_DESTROY, device_params(kind, id))
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%kind))]
    async fn list_devices(
        &self,
        kind: DeviceKind,
        query: &DeviceListQuery,
    ) -> Result<Paginated<DeviceRecord>, ClientError> {
        let params = RequestParams::new()
            .path("kind", kind)
            .query(query.to_query());
        self.invoke(&endpoints::AUTHENTICATORS_LIST, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%kind, %id))]
    async fn retrieve_device(
        &self,
        kind: DeviceKind,
        id: i64,
    ) -> Result<DeviceRecord, ClientError> {
        self.invoke(&endpoints::AUTHENTICATORS_RETRIEVE, device_params(kind, id))
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%kind, %id))]
    async fn update_device(
        &self,
        kind: DeviceKind,
        id: i64,
        req: &DeviceRequest,
    ) -> Result<DeviceRecord, ClientError> {
        let params = device_params(kind, id).json(req)?;
        self.invoke(&endpoints::AUTHENTICATORS_UPDATE, params).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%kind, %id))]
    async fn partial_update_device(
        &self,
        kind: DeviceKind,
        id: i64,
        req: &PatchedDeviceRequest,
    ) -> Result<DeviceRecord, ClientError> {
        let params = device_params(kind, id).json(req)?;
        self.invoke(&endpoints::AUTHENTICATORS_PARTIAL_UPDATE, params)
            .await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%kind, %id))]
    async fn destroy_device(&self, kind: DeviceKind, id: i64) -> Result<(), ClientError> {
        self.invoke(&endpoints::AUTHENTICATORS_DESTROY, device_params(kind, id))
            .await
    }
}
