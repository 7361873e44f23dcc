//! 認証器（MFA デバイス）関連のモデル
//!
//! Authentik は認証器の種類ごとに別のエンドポイントを持つが、操作の形はすべて同じ。
//! 種類は [`DeviceKind`] でパスセグメントとして表し、種類固有のフィールドは
//! [`DeviceRecord::extra`] に保持する。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 認証器の種類（パスセグメント）
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeviceKind {
    Duo,
    Email,
    Sms,
    Static,
    Totp,
    Webauthn,
}

/// `authenticators/all/` / `authenticators/admin/all/` が返す種類横断のデバイス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub pk:                  i64,
    pub name:                String,
    #[serde(default)]
    pub verbose_name:        String,
    #[serde(default)]
    pub verbose_name_plural: String,
    /// `authentik_stages_authenticator_totp.totpdevice` 形式のモデル名
    #[serde(default)]
    pub meta_model_name:     String,
    #[serde(rename = "type", default)]
    pub device_type:         String,
    #[serde(default)]
    pub confirmed:           bool,
    #[serde(default)]
    pub created:             Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated:        Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_used:           Option<DateTime<Utc>>,
    #[serde(default)]
    pub extra_description:   Option<String>,
    #[serde(default)]
    pub external_id:         Option<String>,
}

impl Device {
    /// `meta_model_name` から認証器の種類を推定する
    pub fn kind(&self) -> Option<DeviceKind> {
        let model = self.meta_model_name.rsplit('.').next()?;
        let name = model.strip_suffix("device")?;
        name.parse().ok()
    }
}

/// 種類別エンドポイントが返すデバイス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub pk:    i64,
    pub name:  String,
    /// 種類固有のフィールド（`confirmed`, `user`, `phone_number`, `token_set` など）
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DeviceRecord {
    /// 種類固有のフィールドを取得する
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.extra.get(name)
    }
}

/// デバイス作成・全体更新リクエスト
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeviceRequest {
    pub name:  String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// デバイス部分更新リクエスト
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchedDeviceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:  Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
