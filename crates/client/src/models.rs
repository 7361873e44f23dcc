//! # Authentik API のモデル
//!
//! フィールド名はワイヤーフォーマット（snake_case）にそのまま合わせる。
//! サーバーが省略しうるフィールドは `#[serde(default)]` で受ける。

pub mod admin;
pub mod application;
pub mod authenticator;
pub mod common;
pub mod event;
pub mod flow;
pub mod group;
pub mod token;
pub mod user;

pub use admin::{App, SystemInfo, SystemRuntime, Version};
pub use application::{
    Application,
    ApplicationRequest,
    PatchedApplicationRequest,
    PolicyTestResult,
};
pub use authenticator::{Device, DeviceKind, DeviceRecord, DeviceRequest, PatchedDeviceRequest};
pub use common::{PolicyEngineMode, UsedBy, UsedByAction};
pub use event::{Event, EventTopPerUser, TypeCreate};
pub use flow::{Flow, FlowDesignation};
pub use group::{Group, GroupMember, GroupRequest, PatchedGroupRequest, UserAccountRequest};
pub use token::{
    PatchedTokenRequest,
    Token,
    TokenIntent,
    TokenRequest,
    TokenSetKeyRequest,
    TokenView,
};
pub use user::{
    PatchedUserRequest,
    SessionUser,
    User,
    UserGroup,
    UserPasswordSetRequest,
    UserPath,
    UserRequest,
    UserSelf,
    UserSelfGroup,
    UserType,
};
