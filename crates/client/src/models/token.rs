//! トークン関連のモデル

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// トークンの用途
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TokenIntent {
    Verification,
    #[default]
    Api,
    Recovery,
    AppPassword,
}

/// トークン（キー本体は含まない。取得は `view_key` を使う）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub pk:          Uuid,
    #[serde(default)]
    pub managed:     Option<String>,
    pub identifier:  String,
    #[serde(default)]
    pub intent:      TokenIntent,
    pub user:        i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub expires:     Option<DateTime<Utc>>,
    #[serde(default)]
    pub expiring:    bool,
}

/// トークン作成・全体更新リクエスト
#[derive(Debug, Clone, Default, Serialize)]
pub struct TokenRequest {
    pub identifier:  String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent:      Option<TokenIntent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user:        Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires:     Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiring:    Option<bool>,
}

/// トークン部分更新リクエスト
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchedTokenRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier:  Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent:      Option<TokenIntent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user:        Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires:     Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiring:    Option<bool>,
}

/// `view_key` のレスポンス
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenView {
    pub key: String,
}

impl std::fmt::Debug for TokenView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenView").field("key", &"***").finish()
    }
}

/// `set_key` のリクエスト
#[derive(Clone, Serialize)]
pub struct TokenSetKeyRequest {
    pub key: String,
}

impl std::fmt::Debug for TokenSetKeyRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSetKeyRequest")
            .field("key", &"***")
            .finish()
    }
}
