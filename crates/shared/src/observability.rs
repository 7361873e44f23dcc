//! # Observability 基盤
//!
//! トレーシング初期化とログ出力形式の設定を提供する。
//! 環境変数 `LOG_FORMAT` による JSON / Pretty 出力の切り替えに対応する。
//!
//! SDK 本体（`authentik-client`）は `tracing` でイベントを出すだけで、
//! subscriber の設定は利用側（CLI など）の責務とする。

/// ログ出力形式
///
/// 環境変数 `LOG_FORMAT` で切り替える。
/// 値が未設定または不正な場合は [`Pretty`](LogFormat::Pretty) にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON 形式（ログ収集基盤向け）
    Json,
    /// 人間が読みやすい形式（対話的な利用向け）
    #[default]
    Pretty,
}

impl LogFormat {
    /// 文字列からログ形式をパースする
    ///
    /// 前後の空白を除き、大文字小文字を区別しない（`.env` の `LOG_FORMAT=JSON` を許す）。
    /// 不正な値の場合は [`Pretty`](LogFormat::Pretty) にフォールバックし、
    /// stderr に警告を出力する。
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => {
                eprintln!("WARNING: unknown LOG_FORMAT={s:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }

    /// 環境変数 `LOG_FORMAT` から読み取る
    ///
    /// 未設定の場合は [`Pretty`](LogFormat::Pretty) をデフォルトとする。
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT") {
            Ok(val) => Self::parse(&val),
            Err(_) => Self::default(),
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// アプリケーション名（デフォルトフィルタの対象ターゲット）
    pub app_name:   String,
    /// ログ出力形式
    pub log_format: LogFormat,
}

impl TracingConfig {
    /// 新しい設定を作成する
    pub fn new(app_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            app_name: app_name.into(),
            log_format,
        }
    }

    /// `RUST_LOG` 未設定時に使うフィルタ
    ///
    /// 全体は `warn`、アプリと SDK は `info`。
    pub fn default_filter(&self) -> String {
        let app_target = self.app_name.replace('-', "_");
        format!("warn,{app_target}=info,authentik_client=info")
    }
}

/// トレーシングを初期化する
///
/// `RUST_LOG` 環境変数でログレベルを制御可能。
/// 未設定の場合は [`TracingConfig::default_filter`] を使う。
///
/// ログは stderr に出力する（stdout はコマンドの出力に使うため）。
#[cfg(feature = "observability")]
pub fn init_tracing(config: TracingConfig) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_filter().into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
