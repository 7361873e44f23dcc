//! イベント（監査ログ）関連のモデル

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// イベント
///
/// `user` / `context` / `brand` は発生源によって形が変わるため JSON のまま保持する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub pk:        Uuid,
    #[serde(default)]
    pub user:      serde_json::Value,
    /// `login`, `model_created` などのアクション名
    pub action:    String,
    #[serde(default)]
    pub app:       String,
    #[serde(default)]
    pub context:   serde_json::Value,
    #[serde(default)]
    pub client_ip: Option<String>,
    pub created:   DateTime<Utc>,
    #[serde(default)]
    pub expires:   Option<DateTime<Utc>>,
    #[serde(default)]
    pub brand:     serde_json::Value,
}

impl Event {
    /// イベントを発生させたユーザー名
    pub fn username(&self) -> Option<&str> {
        self.user.get("username").and_then(serde_json::Value::as_str)
    }
}

/// `top_per_user` の集計行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTopPerUser {
    #[serde(default)]
    pub application:    serde_json::Map<String, serde_json::Value>,
    pub counted_events: i64,
    pub unique_users:   i64,
}

/// 作成可能な型の一覧（`actions` などが返す）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCreate {
    pub name:                String,
    #[serde(default)]
    pub description:         String,
    #[serde(default)]
    pub component:           String,
    #[serde(default)]
    pub model_name:          String,
    #[serde(default)]
    pub icon_url:            Option<String>,
    #[serde(default)]
    pub requires_enterprise: bool,
}
