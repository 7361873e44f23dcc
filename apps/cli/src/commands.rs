//! サブコマンドの実行
//!
//! 結果はすべて JSON 値として返し、出力は呼び出し側で行う。

use authentik_client::{
    AuthentikClient,
    PageRequest,
    api::{ApplicationListQuery, EventListQuery, GroupListQuery, UserListQuery},
};
use serde::Serialize;

use crate::cli::{
    AdminCommand,
    AppsCommand,
    AuthenticatorsCommand,
    Command,
    EventsCommand,
    GroupsCommand,
    PageArgs,
    UsersCommand,
};

/// サブコマンドを実行する
pub async fn run<C: AuthentikClient>(
    client: &C,
    command: Command,
) -> anyhow::Result<serde_json::Value> {
    match command {
        Command::Users(cmd) => users(client, cmd).await,
        Command::Groups(cmd) => groups(client, cmd).await,
        Command::Apps(cmd) => apps(client, cmd).await,
        Command::Authenticators(cmd) => authenticators(client, cmd).await,
        Command::Events(cmd) => events(client, cmd).await,
        Command::Admin(cmd) => admin(client, cmd).await,
    }
}

async fn users<C: AuthentikClient>(
    client: &C,
    cmd: UsersCommand,
) -> anyhow::Result<serde_json::Value> {
    match cmd {
        UsersCommand::List {
            search,
            active,
            page,
        } => {
            let query = UserListQuery {
                is_active: active,
                paging: paging(page, search),
                ..Default::default()
            };
            to_json(&client.list_users(&query).await?)
        }
        UsersCommand::Get { id } => to_json(&client.retrieve_user(id).await?),
        UsersCommand::Me => to_json(&client.me().await?),
    }
}

async fn groups<C: AuthentikClient>(
    client: &C,
    cmd: GroupsCommand,
) -> anyhow::Result<serde_json::Value> {
    match cmd {
        GroupsCommand::List { search, page } => {
            let query = GroupListQuery {
                paging: paging(page, search),
                ..Default::default()
            };
            to_json(&client.list_groups(&query).await?)
        }
    }
}

async fn apps<C: AuthentikClient>(
    client: &C,
    cmd: AppsCommand,
) -> anyhow::Result<serde_json::Value> {
    match cmd {
        AppsCommand::List { search, page } => {
            let query = ApplicationListQuery {
                paging: paging(page, search),
                ..Default::default()
            };
            to_json(&client.list_applications(&query).await?)
        }
        AppsCommand::CheckAccess { slug, user } => {
            to_json(&client.check_application_access(&slug, user).await?)
        }
    }
}

async fn authenticators<C: AuthentikClient>(
    client: &C,
    cmd: AuthenticatorsCommand,
) -> anyhow::Result<serde_json::Value> {
    match cmd {
        AuthenticatorsCommand::AdminAll { user } => to_json(&client.admin_all(user).await?),
    }
}

async fn events<C: AuthentikClient>(
    client: &C,
    cmd: EventsCommand,
) -> anyhow::Result<serde_json::Value> {
    match cmd {
        EventsCommand::List {
            action,
            username,
            page,
        } => {
            let query = EventListQuery {
                action,
                username,
                paging: paging(page, None),
                ..Default::default()
            };
            to_json(&client.list_events(&query).await?)
        }
    }
}

async fn admin<C: AuthentikClient>(
    client: &C,
    cmd: AdminCommand,
) -> anyhow::Result<serde_json::Value> {
    match cmd {
        AdminCommand::Version => to_json(&client.version().await?),
        AdminCommand::System => to_json(&client.system_info().await?),
    }
}

fn paging(page: PageArgs, search: Option<String>) -> PageRequest {
    PageRequest {
        page: page.page,
        page_size: page.page_size,
        search,
        ..Default::default()
    }
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use authentik_client::{AuthentikClientImpl, HttpTransport};
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::cli::Cli;

    /// 要求された URL を記録し、固定のボディを返すトランスポート
    struct RecordingTransport {
        body: &'static str,
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl HttpTransport for RecordingTransport {
        async fn execute(
            &self,
            request: reqwest::Request,
        ) -> Result<reqwest::Response, reqwest::Error> {
            self.urls.lock().unwrap().push(request.url().to_string());
            let response = http::Response::builder()
                .status(200)
                .body(self.body)
                .unwrap();
            Ok(reqwest::Response::from(response))
        }
    }

    async fn run_args(args: &[&str], body: &'static str) -> (serde_json::Value, String) {
        let transport = Arc::new(RecordingTransport {
            body,
            urls: Mutex::new(Vec::new()),
        });
        let client =
            AuthentikClientImpl::with_transport("https://auth.example.com", transport.clone())
                .unwrap();
        let cli = Cli::try_parse_from(args).unwrap();

        let output = run(&client, cli.command).await.unwrap();
        let url = transport.urls.lock().unwrap().last().cloned().unwrap();
        (output, url)
    }

    #[rstest]
    #[case(
        &["authentik", "authenticators", "admin-all", "--user", "5"],
        "https://auth.example.com/api/v3/authenticators/admin/all/?user=5"
    )]
    #[case(
        &["authentik", "apps", "check-access", "grafana", "--user", "7"],
        "https://auth.example.com/api/v3/core/applications/grafana/check_access/?for_user=7"
    )]
    #[case(
        &["authentik", "users", "list", "--active", "true", "--search", "ak"],
        "https://auth.example.com/api/v3/core/users/?is_active=true&search=ak"
    )]
    #[case(
        &["authentik", "events", "list", "--action", "login"],
        "https://auth.example.com/api/v3/events/events/?action=login"
    )]
    #[tokio::test]
    async fn test_サブコマンドが対応するエンドポイントを呼ぶ(
        #[case] args: &[&str],
        #[case] expected_url: &str,
    ) {
        let body = match args[1] {
            "apps" => r#"{"passing": false, "messages": ["denied"]}"#,
            _ => "",
        };

        let (_, url) = run_args(args, body).await;

        assert_eq!(url, expected_url);
    }

    #[tokio::test]
    async fn test_一覧の空ボディは空の結果としてjsonになる() {
        let (output, _) = run_args(&["authentik", "groups", "list"], "").await;

        assert_eq!(output["results"], serde_json::json!([]));
        assert_eq!(output["pagination"]["count"], 0);
    }

    #[tokio::test]
    async fn test_バージョンをjsonで返す() {
        let (output, url) = run_args(
            &["authentik", "admin", "version"],
            r#"{"version_current": "2024.4.1"}"#,
        )
        .await;

        assert_eq!(url, "https://auth.example.com/api/v3/admin/version/");
        assert_eq!(output["version_current"], "2024.4.1");
    }
}
