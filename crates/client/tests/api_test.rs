//! リソース API 統合テスト
//!
//! スタブトランスポートを通して、各 API が組み立てる HTTP リクエストと
//! レスポンスのデコード結果を検証する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p authentik-client --test api_test
//! ```

mod common;

use authentik_client::{
    ClientError,
    PageRequest,
    api::{
        AdminApi,
        ApplicationsApi,
        AuthenticatorsApi,
        EventsApi,
        FlowsApi,
        GroupsApi,
        TokensApi,
        UserListQuery,
        UsersApi,
    },
    models::{
        DeviceKind,
        PatchedDeviceRequest,
        TokenSetKeyRequest,
        UserPasswordSetRequest,
    },
};
use common::{StubTransport, client_with};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use uuid::Uuid;

const USER_JSON: &str = r#"{
    "pk": 5,
    "username": "akadmin",
    "name": "authentik Default Admin",
    "is_active": true,
    "is_superuser": true,
    "email": "root@localhost",
    "uid": "f1e2d3",
    "path": "users",
    "type": "internal",
    "uuid": "6b1b4a3e-7a1f-4c1e-9f3f-1d2c3b4a5e6f"
}"#;

// ===== 認証器 =====

#[tokio::test]
async fn test_admin_allはuserをクエリに付与する() {
    let transport = StubTransport::new();
    transport.respond(
        200,
        r#"[{"pk": 1, "name": "phone", "meta_model_name": "authentik_stages_authenticator_totp.totpdevice", "confirmed": true}]"#,
    );
    let client = client_with(&transport);

    let devices = client.admin_all(Some(5)).await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.target(), "api/v3/authenticators/admin/all/?user=5");
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].kind(), Some(DeviceKind::Totp));
}

#[tokio::test]
async fn test_admin_allでuser未指定ならクエリを付けない() {
    let transport = StubTransport::new();
    transport.respond(200, "[]");
    let client = client_with(&transport);

    let devices = client.admin_all(None).await.unwrap();

    assert_eq!(transport.last_request().target(), "api/v3/authenticators/admin/all/");
    assert!(devices.is_empty());
}

#[rstest]
#[case(DeviceKind::Duo, "api/v3/authenticators/admin/duo/3/")]
#[case(DeviceKind::Sms, "api/v3/authenticators/admin/sms/3/")]
#[case(DeviceKind::Webauthn, "api/v3/authenticators/admin/webauthn/3/")]
#[tokio::test]
async fn test_種類別の管理者削除はdeleteを送る(
    #[case] kind: DeviceKind,
    #[case] expected: &str,
) {
    let transport = StubTransport::new();
    transport.respond(204, "");
    let client = client_with(&transport);

    client.admin_destroy(kind, 3).await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.target(), expected);
    assert_eq!(request.body, None);
}

#[tokio::test]
async fn test_自分のデバイスの部分更新はpatchでボディを送る() {
    let transport = StubTransport::new();
    transport.respond(200, r#"{"pk": 9, "name": "yubikey", "confirmed": true}"#);
    let client = client_with(&transport);

    let record = client
        .partial_update_device(
            DeviceKind::Webauthn,
            9,
            &PatchedDeviceRequest {
                name: Some("yubikey".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, "PATCH");
    assert_eq!(request.target(), "api/v3/authenticators/webauthn/9/");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(request.body, Some(json!({ "name": "yubikey" })));
    assert_eq!(record.field("confirmed"), Some(&json!(true)));
}

#[tokio::test]
async fn test_種類別一覧の空ボディは0件になる() {
    let transport = StubTransport::new();
    transport.respond(200, "");
    let client = client_with(&transport);

    let page = client
        .admin_list(DeviceKind::Static, &Default::default())
        .await
        .unwrap();

    assert!(page.is_empty());
    assert_eq!(page.pagination.count, 0);
}

// ===== ユーザー =====

#[tokio::test]
async fn test_ユーザー一覧は設定したフィルタだけを送る() {
    let transport = StubTransport::new();
    transport.respond(
        200,
        &format!(
            r#"{{"pagination": {{"next": 0, "previous": 0, "count": 1, "current": 1, "total_pages": 1, "start_index": 1, "end_index": 1}}, "results": [{USER_JSON}]}}"#
        ),
    );
    let client = client_with(&transport);

    let page = client
        .list_users(&UserListQuery {
            is_active: Some(false),
            paging: PageRequest {
                search: Some("ak admin".to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(
        transport.last_request().target(),
        "api/v3/core/users/?is_active=false&search=ak%20admin"
    );
    assert_eq!(page.len(), 1);
    assert_eq!(page.results[0].username, "akadmin");
    assert!(!page.pagination.has_next());
}

#[tokio::test]
async fn test_ユーザー取得でボディがオブジェクトになる() {
    let transport = StubTransport::new();
    transport.respond(200, USER_JSON);
    let client = client_with(&transport);

    let user = client.retrieve_user(5).await.unwrap();

    assert_eq!(transport.last_request().target(), "api/v3/core/users/5/");
    assert_eq!(user.pk, 5);
    assert!(user.is_superuser);
}

#[tokio::test]
async fn test_ユーザー取得で404はnot_foundになる() {
    let transport = StubTransport::new();
    transport.respond(404, r#"{"detail": "No User matches the given query."}"#);
    let client = client_with(&transport);

    let err = client.retrieve_user(999).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert_eq!(
        err.api_error().and_then(|e| e.detail),
        Some("No User matches the given query.".to_string())
    );
}

#[tokio::test]
async fn test_パスワード設定はpostでボディを送り空レスポンスを受け付ける() {
    let transport = StubTransport::new();
    transport.respond(204, "");
    let client = client_with(&transport);

    client
        .set_password(
            5,
            &UserPasswordSetRequest {
                password: "correct horse battery staple".to_string(),
            },
        )
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.target(), "api/v3/core/users/5/set_password/");
    assert_eq!(
        request.body,
        Some(json!({ "password": "correct horse battery staple" }))
    );
}

#[tokio::test]
async fn test_パスワード設定の400はvalidationになる() {
    let transport = StubTransport::new();
    transport.respond(400, r#"{"password": ["This password is too short."]}"#);
    let client = client_with(&transport);

    let err = client
        .set_password(
            5,
            &UserPasswordSetRequest {
                password: "x".to_string(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation { .. }));
    let body = err.api_error().unwrap();
    assert_eq!(
        body.field_errors.get("password"),
        Some(&json!(["This password is too short."]))
    );
}

#[tokio::test]
async fn test_認証ヘッダーにbearerトークンが付く() {
    let transport = StubTransport::new();
    transport.respond(
        200,
        &format!(r#"{{"user": {USER_JSON}, "original": null}}"#),
    );
    let client = client_with(&transport);

    let session = client.me().await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.target(), "api/v3/core/users/me/");
    assert_eq!(request.authorization.as_deref(), Some("Bearer test-token"));
    assert!(!session.is_impersonating());
}

#[tokio::test]
async fn test_401はunauthorizedになる() {
    let transport = StubTransport::new();
    transport.respond(401, r#"{"detail": "Token invalid/expired"}"#);
    let client = client_with(&transport);

    let err = client.me().await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized { .. }));
    assert_eq!(err.body(), Some(r#"{"detail": "Token invalid/expired"}"#));
}

#[tokio::test]
async fn test_used_byの空ボディは空リストになる() {
    let transport = StubTransport::new();
    transport.respond(200, "   ");
    let client = client_with(&transport);

    let used_by = client.user_used_by(5).await.unwrap();

    assert!(used_by.is_empty());
}

// ===== グループ =====

#[tokio::test]
async fn test_グループへのユーザー追加はpkをボディで送る() {
    let transport = StubTransport::new();
    transport.respond(204, "");
    let client = client_with(&transport);
    let group_uuid: Uuid = "0b9c5d7e-1111-4a2b-8c3d-444455556666".parse().unwrap();

    client.add_user_to_group(group_uuid, 5).await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, "POST");
    assert_eq!(
        request.target(),
        "api/v3/core/groups/0b9c5d7e-1111-4a2b-8c3d-444455556666/add_user/"
    );
    assert_eq!(request.body, Some(json!({ "pk": 5 })));
}

// ===== アプリケーション =====

#[rstest]
#[case("..")]
#[case(".")]
#[tokio::test]
async fn test_ドットセグメントのslugは送信せずinvalid_requestになる(#[case] slug: &str) {
    let transport = StubTransport::new();
    let client = client_with(&transport);

    let err = client.retrieve_application(slug).await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidRequest(_)));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_ドットを含むslugは1つのセグメントのまま送る() {
    let transport = StubTransport::new();
    transport.respond(
        200,
        r#"{"pk": "4c1d2b3a-0000-4000-8000-000000000001", "name": "Docs", "slug": "docs..v2"}"#,
    );
    let client = client_with(&transport);

    let app = client.retrieve_application("docs..v2").await.unwrap();

    assert_eq!(
        transport.last_request().target(),
        "api/v3/core/applications/docs..v2/"
    );
    assert_eq!(app.slug, "docs..v2");
}

#[tokio::test]
async fn test_アクセス確認はslugをエンコードしfor_userを付与する() {
    let transport = StubTransport::new();
    transport.respond(200, r#"{"passing": true, "messages": [], "log_messages": []}"#);
    let client = client_with(&transport);

    let result = client
        .check_application_access("grafana/prod", 5)
        .await
        .unwrap();

    assert_eq!(
        transport.last_request().target(),
        "api/v3/core/applications/grafana%2Fprod/check_access/?for_user=5"
    );
    assert!(result.passing);
}

#[tokio::test]
async fn test_アプリケーション削除の409はconflictになる() {
    let transport = StubTransport::new();
    transport.respond(409, "");
    let client = client_with(&transport);

    let err = client.destroy_application("grafana").await.unwrap_err();

    assert!(matches!(err, ClientError::Conflict { .. }));
}

// ===== トークン =====

#[tokio::test]
async fn test_トークンのキー設定はpostで送る() {
    let transport = StubTransport::new();
    transport.respond(204, "");
    let client = client_with(&transport);

    client
        .set_token_key(
            "ci-token",
            &TokenSetKeyRequest {
                key: "s3cr3t".to_string(),
            },
        )
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.target(), "api/v3/core/tokens/ci-token/set_key/");
    assert_eq!(request.body, Some(json!({ "key": "s3cr3t" })));
}

#[tokio::test]
async fn test_トークンのキー取得() {
    let transport = StubTransport::new();
    transport.respond(200, r#"{"key": "abc123"}"#);
    let client = client_with(&transport);

    let view = client.view_token_key("ci-token").await.unwrap();

    assert_eq!(
        transport.last_request().target(),
        "api/v3/core/tokens/ci-token/view_key/"
    );
    assert_eq!(view.key, "abc123");
}

// ===== イベント・管理・フロー =====

#[tokio::test]
async fn test_イベント一覧の空ボディは0件になる() {
    let transport = StubTransport::new();
    transport.respond(200, "");
    let client = client_with(&transport);

    let page = client.list_events(&Default::default()).await.unwrap();

    assert_eq!(transport.last_request().target(), "api/v3/events/events/");
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_バージョン取得() {
    let transport = StubTransport::new();
    transport.respond(
        200,
        r#"{"version_current": "2024.4.1", "version_latest": "2024.4.2", "version_latest_valid": true, "build_hash": "", "outdated": true, "outpost_outdated": false}"#,
    );
    let client = client_with(&transport);

    let version = client.version().await.unwrap();

    assert_eq!(transport.last_request().target(), "api/v3/admin/version/");
    assert_eq!(version.version_current, "2024.4.1");
    assert!(version.outdated);
}

#[tokio::test]
async fn test_単一オブジェクトの空ボディはデコードエラーになる() {
    let transport = StubTransport::new();
    transport.respond(200, "");
    let client = client_with(&transport);

    let err = client.version().await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_500はstatusとして本文を保持する() {
    let transport = StubTransport::new();
    transport.respond(500, "Internal Server Error");
    let client = client_with(&transport);

    let err = client.destroy_flow("default-authentication-flow").await.unwrap_err();

    assert_eq!(transport.last_request().method, "DELETE");
    assert!(matches!(err, ClientError::Status { .. }));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert_eq!(err.body(), Some("Internal Server Error"));
}

#[tokio::test]
async fn test_呼び出しごとに1回だけ送信する() {
    let transport = StubTransport::new();
    transport.respond(503, "");
    let client = client_with(&transport);

    let _ = client.admin_apps().await;

    assert_eq!(transport.request_count(), 1);
}
