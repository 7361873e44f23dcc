//! # クライアント設定
//!
//! 環境変数から Authentik クライアントの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `AUTHENTIK_URL` | **Yes** | Authentik のベース URL（例: `https://auth.example.com`） |
//! | `AUTHENTIK_TOKEN` | No | API トークン（`Authorization: Bearer` で送信） |
//! | `AUTHENTIK_TIMEOUT_SECS` | No | リクエスト全体のタイムアウト秒数 |

use std::{env, time::Duration};

use thiserror::Error;

/// 設定エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 環境変数の値が不正
    #[error("{var} の値が不正です: {reason}")]
    Invalid { var: &'static str, reason: String },

    /// ベース URL が不正
    #[error("ベース URL が不正です: {0}")]
    InvalidBaseUrl(String),

    /// トークンにヘッダーとして使えない文字が含まれる
    #[error("API トークンに使用できない文字が含まれています")]
    InvalidToken,

    /// HTTP クライアントの初期化失敗
    #[error("HTTP クライアントを初期化できません: {0}")]
    HttpClient(String),
}

/// Authentik クライアントの設定
#[derive(Clone)]
pub struct ClientConfig {
    /// ベース URL
    pub base_url:   String,
    /// API トークン
    pub token:      Option<String>,
    /// リクエスト全体のタイムアウト（未設定ならトランスポートのデフォルト）
    pub timeout:    Option<Duration>,
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url:   base_url.into(),
            token:      None,
            timeout:    None,
            user_agent: default_user_agent(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー参照関数から設定を読み込む
    ///
    /// テストでプロセスの環境変数を書き換えずに済むよう分離している。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("AUTHENTIK_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("AUTHENTIK_URL"))?;

        let token = lookup("AUTHENTIK_TOKEN").filter(|v| !v.is_empty());

        let timeout = match lookup("AUTHENTIK_TIMEOUT_SECS") {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        Ok(Self {
            base_url,
            token,
            timeout,
            user_agent: default_user_agent(),
        })
    }
}

fn default_user_agent() -> String {
    format!("authentik-client-rs/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.trim().parse().map_err(|e| ConfigError::Invalid {
        var:    "AUTHENTIK_TIMEOUT_SECS",
        reason: format!("{e}"),
    })?;
    if secs == 0 {
        return Err(ConfigError::Invalid {
            var:    "AUTHENTIK_TIMEOUT_SECS",
            reason: "0 秒は指定できません".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}
