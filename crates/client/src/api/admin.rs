//! 管理系 API

use async_trait::async_trait;

use crate::{
    client_impl::AuthentikClientImpl,
    endpoints,
    error::ClientError,
    models::{App, SystemInfo, Version},
    request::RequestParams,
};

/// 管理系 API トレイト
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// システム情報を取得する
    ///
    /// `GET api/v3/admin/system/` を呼び出す。
    async fn system_info(&self) -> Result<SystemInfo, ClientError>;

    /// バージョン情報を取得する
    ///
    /// `GET api/v3/admin/version/` を呼び出す。
    async fn version(&self) -> Result<Version, ClientError>;

    /// インストール済みの Django アプリ一覧を取得する
    ///
    /// `GET api/v3/admin/apps/` を呼び出す。
    async fn admin_apps(&self) -> Result<Vec<App>, ClientError>;
}

#[async_trait]
impl AdminApi for AuthentikClientImpl {
    async fn system_info(&self) -> Result<SystemInfo, ClientError> {
        self.invoke(&endpoints::ADMIN_SYSTEM, RequestParams::new())
            .await
    }

    async fn version(&self) -> Result<Version, ClientError> {
        self.invoke(&endpoints::ADMIN_VERSION, RequestParams::new())
            .await
    }

    async fn admin_apps(&self) -> Result<Vec<App>, ClientError> {
        self.invoke(&endpoints::ADMIN_APPS, RequestParams::new())
            .await
    }
}
