//! # Authentik CLI
//!
//! Authentik API クライアント SDK を使って REST API を呼び出すコマンドラインツール。
//! 結果は JSON で stdout に出力する。ログは stderr に出す。
//!
//! ## 環境変数
//!
//! `.env` ファイルがあれば先に読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `AUTHENTIK_URL` | **Yes** | Authentik のベース URL（`--url` で上書き可） |
//! | `AUTHENTIK_TOKEN` | No | API トークン |
//! | `AUTHENTIK_TIMEOUT_SECS` | No | リクエストのタイムアウト秒数 |
//! | `LOG_FORMAT` | No | `json` / `pretty`、大文字小文字は区別しない（デフォルト: `pretty`、`--log-format` で上書き可） |
//! | `RUST_LOG` | No | ログレベルのフィルタ |
//!
//! ## 使用例
//!
//! ```bash
//! authentik users list --active true
//! authentik authenticators admin-all --user 5
//! authentik apps check-access grafana --user 5
//! ```

mod cli;
mod commands;

use anyhow::Context as _;
use authentik_client::{AuthentikClientImpl, ClientConfig};
use authentik_shared::observability::{TracingConfig, init_tracing};
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(TracingConfig::new("authentik-cli", cli.log_format()));

    let mut config = match &cli.url {
        Some(url) => ClientConfig::from_lookup(|key| match key {
            "AUTHENTIK_URL" => Some(url.clone()),
            other => std::env::var(other).ok(),
        }),
        None => ClientConfig::from_env(),
    }
    .context("設定の読み込みに失敗しました")?;
    config.user_agent = format!("authentik-cli/{}", env!("CARGO_PKG_VERSION"));

    let client = AuthentikClientImpl::from_config(&config)
        .context("クライアントの初期化に失敗しました")?;
    tracing::debug!(base_url = %client.base_url(), "Authentik に接続します");

    let output = commands::run(&client, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
