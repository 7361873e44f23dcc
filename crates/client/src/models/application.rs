//! アプリケーション関連のモデル

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::PolicyEngineMode;

/// アプリケーション
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub pk: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub provider: Option<i64>,
    #[serde(default)]
    pub backchannel_providers: Vec<i64>,
    #[serde(default)]
    pub launch_url: Option<String>,
    #[serde(default)]
    pub open_in_new_tab: bool,
    #[serde(default)]
    pub meta_launch_url: String,
    #[serde(default)]
    pub meta_icon: Option<String>,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub meta_publisher: String,
    #[serde(default)]
    pub policy_engine_mode: PolicyEngineMode,
    #[serde(default)]
    pub group: String,
}

/// アプリケーション作成・全体更新リクエスト
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplicationRequest {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backchannel_providers: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_in_new_tab: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_launch_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_engine_mode: Option<PolicyEngineMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// アプリケーション部分更新リクエスト
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchedApplicationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// `Some(None)` でプロバイダの紐付けを外す
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backchannel_providers: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_in_new_tab: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_launch_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_engine_mode: Option<PolicyEngineMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// `check_access` の評価結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyTestResult {
    pub passing:      bool,
    #[serde(default)]
    pub messages:     Vec<String>,
    #[serde(default)]
    pub log_messages: Vec<serde_json::Value>,
}
