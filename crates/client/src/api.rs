//! # リソース別 API
//!
//! Authentik のリソースごとに型付きのトレイトを提供する。
//! 各メソッドは [`endpoints`](crate::endpoints) の記述子を
//! [`AuthentikClientImpl::invoke`](crate::AuthentikClientImpl::invoke) に渡すだけの薄いファサード。
//!
//! ## リソース
//!
//! - [`AdminApi`] - `admin/` システム情報
//! - [`ApplicationsApi`] - `core/applications/`
//! - [`AuthenticatorsApi`] - `authenticators/` MFA デバイス
//! - [`EventsApi`] - `events/events/` 監査ログ
//! - [`FlowsApi`] - `flows/instances/`
//! - [`GroupsApi`] - `core/groups/`
//! - [`TokensApi`] - `core/tokens/`
//! - [`UsersApi`] - `core/users/`

mod admin;
mod applications;
mod authenticators;
mod events;
mod flows;
mod groups;
mod tokens;
mod users;

pub use admin::AdminApi;
pub use applications::{ApplicationListQuery, ApplicationsApi};
pub use authenticators::{AuthenticatorsApi, DeviceListQuery};
pub use events::{EventListQuery, EventsApi, TopPerUserQuery};
pub use flows::{FlowListQuery, FlowsApi};
pub use groups::{GroupListQuery, GroupsApi};
pub use tokens::{TokenListQuery, TokensApi};
pub use users::{UserListQuery, UsersApi};
