//! 管理系エンドポイントのモデル

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 実行環境の情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemRuntime {
    pub python_version:       String,
    pub environment:          String,
    pub architecture:         String,
    pub platform:             String,
    pub uname:                String,
    pub openssl_version:      String,
    pub openssl_fips_enabled: Option<bool>,
    pub authentik_version:    String,
}

/// `admin/system/` のレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInfo {
    #[serde(default)]
    pub http_headers:             BTreeMap<String, String>,
    #[serde(default)]
    pub http_host:                String,
    #[serde(default)]
    pub http_is_secure:           bool,
    #[serde(default)]
    pub runtime:                  SystemRuntime,
    #[serde(default)]
    pub brand:                    String,
    pub server_time:              DateTime<Utc>,
    #[serde(default)]
    pub embedded_outpost_disabled: bool,
    #[serde(default)]
    pub embedded_outpost_host:    String,
}

/// `admin/version/` のレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub version_current:      String,
    #[serde(default)]
    pub version_latest:       String,
    #[serde(default)]
    pub version_latest_valid: bool,
    #[serde(default)]
    pub build_hash:           String,
    #[serde(default)]
    pub outdated:             bool,
    #[serde(default)]
    pub outpost_outdated:     bool,
}

/// `admin/apps/` の要素（Django アプリ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub name:  String,
    pub label: String,
}
