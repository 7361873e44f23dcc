//! # Authentik エラーボディ
//!
//! Authentik が非 2xx レスポンスで返す JSON ボディを表す。
//!
//! ## 形式
//!
//! - `GenericError`: `{ "detail": "...", "code": "..." }`（401 / 403 / 404 など）
//! - `ValidationError`: `{ "non_field_errors": [...], "<field>": [...], "code": "..." }`（400）
//!
//! 両者を 1 つの構造体で受け、フィールド単位のエラーは `field_errors` に集める。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Authentik のエラーレスポンスボディ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub non_field_errors: Vec<String>,
    /// フィールド名 → エラー内容（通常は文字列の配列）
    #[serde(flatten)]
    pub field_errors: BTreeMap<String, serde_json::Value>,
}

impl ApiErrorBody {
    /// レスポンスボディをパースする
    ///
    /// JSON オブジェクトでないボディ（HTML のエラーページなど）は `None`。
    pub fn parse(body: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// 人が読むための 1 行の要約を作る
    pub fn summary(&self) -> String {
        if let Some(detail) = &self.detail {
            return detail.clone();
        }

        let mut parts: Vec<String> = self.non_field_errors.clone();
        for (field, errors) in &self.field_errors {
            let message = match errors {
                serde_json::Value::Array(items) => items
                    .iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", "),
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            parts.push(format!("{field}: {message}"));
        }
        parts.join("; ")
    }
}
