//! # Authentik API クライアント
//!
//! Authentik（ID プロバイダ）の REST API (`/api/v3/...`) を型付きで呼び出す SDK。
//!
//! ## 構成
//!
//! すべての操作は同じ手順で実行される:
//!
//! ```text
//! Endpoint（記述子） + RequestParams
//!        │
//!        ▼
//! AuthentikClientImpl::invoke
//!   ├─ リクエスト組み立て（パス埋め込み・クエリ・ボディ・認証ヘッダー）
//!   ├─ HttpTransport::execute（1 回だけ送信）
//!   ├─ ステータス → ClientError 変換
//!   └─ ResponseShape に従ってデコード
//! ```
//!
//! - [`endpoints`]: 全操作の記述子テーブル
//! - [`api`]: リソース別の型付きトレイト（記述子を `invoke` に渡すだけ）
//! - [`cache`]: トランスポートを包む任意の GET キャッシュ
//!
//! ## 使用例
//!
//! ```no_run
//! use authentik_client::{AuthentikClientImpl, ClientConfig, api::AuthenticatorsApi};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let client = AuthentikClientImpl::from_config(&config)?;
//! let devices = client.admin_all(Some(5)).await?;
//! println!("{} 件", devices.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod request;
pub mod transport;

mod client_impl;
mod response;

pub use authentik_shared::{ApiErrorBody, Paginated, PaginationMeta};
pub use cache::{CachedResponse, CachedTransport, MemoryCache, ResponseCache, cache_key};
pub use client_impl::{AuthentikClient, AuthentikClientImpl};
pub use config::{ClientConfig, ConfigError};
pub use endpoint::{Endpoint, HttpMethod, ResponseShape};
pub use error::ClientError;
pub use request::{PageRequest, QueryParams, RequestParams, ToQuery};
pub use response::decode_body;
pub use transport::{HttpTransport, ReqwestTransport};
