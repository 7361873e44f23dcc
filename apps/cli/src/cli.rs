//! コマンドライン引数の定義

use authentik_shared::observability::LogFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "authentik", version, about = "Authentik API を呼び出すコマンドラインツール")]
pub struct Cli {
    /// ベース URL（未指定なら `AUTHENTIK_URL`）
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// ログ出力形式（未指定なら `LOG_FORMAT`）
    #[arg(long, global = true, value_enum, ignore_case = true)]
    pub log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// 使うログ形式。フラグが環境変数より優先する
    pub fn log_format(&self) -> LogFormat {
        self.log_format
            .map_or_else(LogFormat::from_env, LogFormat::from)
    }
}

/// `--log-format` の値
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Json,
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Json => Self::Json,
            LogFormatArg::Pretty => Self::Pretty,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// ユーザー
    #[command(subcommand)]
    Users(UsersCommand),
    /// グループ
    #[command(subcommand)]
    Groups(GroupsCommand),
    /// アプリケーション
    #[command(subcommand)]
    Apps(AppsCommand),
    /// 認証器（MFA デバイス）
    #[command(subcommand)]
    Authenticators(AuthenticatorsCommand),
    /// イベント（監査ログ）
    #[command(subcommand)]
    Events(EventsCommand),
    /// システム情報
    #[command(subcommand)]
    Admin(AdminCommand),
}

/// 一覧系コマンド共通のページ指定
#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    /// ページ番号（1 始まり）
    #[arg(long)]
    pub page:      Option<u32>,
    #[arg(long)]
    pub page_size: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// ユーザー一覧
    List {
        /// 全文検索
        #[arg(long)]
        search: Option<String>,
        /// 有効 / 無効で絞り込む
        #[arg(long)]
        active: Option<bool>,
        #[command(flatten)]
        page:   PageArgs,
    },
    /// ユーザーを pk で取得
    Get { id: i64 },
    /// トークンの持ち主
    Me,
}

#[derive(Debug, Subcommand)]
pub enum GroupsCommand {
    /// グループ一覧
    List {
        #[arg(long)]
        search: Option<String>,
        #[command(flatten)]
        page:   PageArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum AppsCommand {
    /// アプリケーション一覧
    List {
        #[arg(long)]
        search: Option<String>,
        #[command(flatten)]
        page:   PageArgs,
    },
    /// ユーザーがアプリケーションにアクセスできるか評価する
    CheckAccess {
        slug: String,
        /// ユーザーの pk
        #[arg(long)]
        user: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum AuthenticatorsCommand {
    /// 全種類のデバイス（管理者向け）
    AdminAll {
        /// 所有ユーザーの pk
        #[arg(long)]
        user: Option<i64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// イベント一覧
    List {
        /// `login` などのアクション名
        #[arg(long)]
        action: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[command(flatten)]
        page:     PageArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// バージョン情報
    Version,
    /// システム情報
    System,
}
