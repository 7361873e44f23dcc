//! フロー関連のモデル

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::PolicyEngineMode;

/// フローの用途
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FlowDesignation {
    Authentication,
    Authorization,
    Invalidation,
    Enrollment,
    Unenrollment,
    Recovery,
    StageConfiguration,
}

/// フロー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub pk:                 Uuid,
    pub name:               String,
    pub slug:               String,
    #[serde(default)]
    pub title:              String,
    pub designation:        FlowDesignation,
    #[serde(default)]
    pub background:         String,
    #[serde(default)]
    pub stages:             Vec<Uuid>,
    #[serde(default)]
    pub policies:           Vec<Uuid>,
    #[serde(default)]
    pub cache_count:        i64,
    #[serde(default)]
    pub policy_engine_mode: PolicyEngineMode,
    #[serde(default)]
    pub compatibility_mode: bool,
    #[serde(default)]
    pub export_url:         String,
    #[serde(default)]
    pub layout:             String,
    #[serde(default)]
    pub denied_action:      String,
}
