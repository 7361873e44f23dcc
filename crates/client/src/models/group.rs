//! グループ関連のモデル

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// グループに埋め込まれるメンバー情報（`include_users=true` のとき）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMember {
    pub pk:         i64,
    pub username:   String,
    pub name:       String,
    #[serde(default)]
    pub is_active:  bool,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub email:      String,
    #[serde(default)]
    pub attributes: serde_json::Value,
    #[serde(default)]
    pub uid:        String,
}

/// グループ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
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
    pub users:        Vec<i64>,
    #[serde(default)]
    pub users_obj:    Option<Vec<GroupMember>>,
    #[serde(default)]
    pub attributes:   serde_json::Value,
    #[serde(default)]
    pub roles:        Vec<Uuid>,
}

/// グループ作成・全体更新リクエスト
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupRequest {
    pub name:         String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent:       Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users:        Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes:   Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles:        Option<Vec<Uuid>>,
}

/// グループ部分更新リクエスト
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchedGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:         Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
    /// `Some(None)` で親グループを外す
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent:       Option<Option<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users:        Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes:   Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles:        Option<Vec<Uuid>>,
}

/// `add_user` / `remove_user` のリクエスト
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserAccountRequest {
    pub pk: i64,
}
