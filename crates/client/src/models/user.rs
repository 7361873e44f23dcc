//! ユーザー関連のモデル

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ユーザー種別
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserType {
    #[default]
    Internal,
    External,
    ServiceAccount,
    InternalServiceAccount,
}

/// ユーザーに埋め込まれるグループ情報
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGroup {
    pub pk:           Uuid,
    #[serde(default)]
    pub num_pk:       i64,
    pub name:         String,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub parent:       Option<Uuid>,
    #[serde(default)]
    pub parent_name:  Option<String>,
    #[serde(default)]
    pub attributes:   serde_json::Value,
}

/// ユーザー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub pk: i64,
    pub username: String,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub groups: Vec<Uuid>,
    /// `include_groups=true` のときのみ返される
    #[serde(default)]
    pub groups_obj: Option<Vec<UserGroup>>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub attributes: serde_json::Value,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type", default)]
    pub user_type: UserType,
    #[serde(default)]
    pub uuid: Option<Uuid>,
}

/// ユーザー作成・全体更新リクエスト
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserRequest {
    pub username:   String,
    pub name:       String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active:  Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path:       Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email:      Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups:     Vec<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Value>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type:  Option<UserType>,
}

/// ユーザー部分更新リクエスト（指定したフィールドのみ送信する）
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchedUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username:   Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:       Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active:  Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path:       Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email:      Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups:     Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<serde_json::Value>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type:  Option<UserType>,
}

/// パスワード設定リクエスト
#[derive(Clone, Serialize)]
pub struct UserPasswordSetRequest {
    pub password: String,
}

impl std::fmt::Debug for UserPasswordSetRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserPasswordSetRequest")
            .field("password", &"***")
            .finish()
    }
}

/// `me` のユーザーに埋め込まれるグループ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSelfGroup {
    pub name: String,
    pub pk:   String,
}

/// ログイン中のユーザー自身
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSelf {
    pub pk: i64,
    pub username: String,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub groups: Vec<UserSelfGroup>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub settings: serde_json::Value,
    #[serde(rename = "type", default)]
    pub user_type: UserType,
    #[serde(default)]
    pub system_permissions: Vec<String>,
}

/// `core/users/me/` のレスポンス
///
/// なりすまし中は `original` に本来のユーザーが入る。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user:     UserSelf,
    #[serde(default)]
    pub original: Option<UserSelf>,
}

impl SessionUser {
    /// なりすまし中か
    pub fn is_impersonating(&self) -> bool {
        self.original.is_some()
    }
}

/// `core/users/paths/` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPath {
    #[serde(default)]
    pub paths: Vec<String>,
}

fn default_true() -> bool {
    true
}
