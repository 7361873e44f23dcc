//! # リクエストビルダー
//!
//! パステンプレートへの値の埋め込みとクエリ文字列の組み立てを担当する。
//!
//! ## 規則
//!
//! - パスパラメータはテンプレート中の `{name}` をちょうど 1 回置き換える。
//!   不足・余剰はどちらも [`ClientError::InvalidRequest`]
//! - クエリパラメータは値があるものだけを付与する（`None` と空文字列は省略）
//! - bool は `true` / `false` の小文字で出力する
//! - パス・クエリの値はすべてパーセントエンコードする
//! - クエリが 0 件のときは `?` を付けない

use std::fmt::Display;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde::Serialize;
use url::Url;

use crate::{endpoint::Endpoint, error::ClientError};

/// クエリパラメータ
///
/// 追加順を保持する。同じキーを複数回追加すると `key=a&key=b` になる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 値があれば追加する
    pub fn push<V: Display>(&mut self, key: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            let rendered = value.to_string();
            if !rendered.is_empty() {
                self.pairs.push((key, rendered));
            }
        }
        self
    }

    /// 複数値のフィルタ（`groups_by_name=a&groups_by_name=b`）を追加する
    pub fn push_all<I>(&mut self, key: &'static str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for value in values {
            self.push(key, Some(value));
        }
        self
    }

    /// キーに対応する最初の値（エンコード前）
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// `a=1&b=2` 形式のエンコード済み文字列（先頭の `?` は含まない）
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// クエリパラメータに変換できるフィルタ型
pub trait ToQuery {
    fn to_query(&self) -> QueryParams;
}

/// 一覧系エンドポイント共通のページング・検索条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// 並び順（`-` 接頭辞で降順）
    pub ordering:  Option<String>,
    /// ページ番号（1 始まり）
    pub page:      Option<u32>,
    pub page_size: Option<u32>,
    /// 全文検索
    pub search:    Option<String>,
}

impl PageRequest {
    /// 指定ページを要求する
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    pub(crate) fn append_to(&self, query: &mut QueryParams) {
        query
            .push("ordering", self.ordering.as_deref())
            .push("page", self.page)
            .push("page_size", self.page_size)
            .push("search", self.search.as_deref());
    }
}

/// パステンプレートに値を埋め込む
///
/// 値はパスセグメントとしてエンコードされる（`a/b` → `a%2Fb`）。
/// 空文字列と `.` / `..` は URL 解決でセグメントが消えるため受け付けない。
pub fn render_path(template: &str, params: &[(&'static str, String)]) -> Result<String, ClientError> {
    let mut rendered = String::with_capacity(template.len());
    let mut used = vec![false; params.len()];
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let literal = &rest[..start];
        if literal.contains('}') {
            return Err(ClientError::InvalidRequest(format!(
                "対応しない `}}` があります: {template}"
            )));
        }
        rendered.push_str(literal);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            return Err(ClientError::InvalidRequest(format!(
                "閉じられていないプレースホルダ: {template}"
            )));
        };
        let name = &after[..end];

        let Some(index) = params.iter().position(|(key, _)| *key == name) else {
            return Err(ClientError::InvalidRequest(format!(
                "パスパラメータ `{name}` が指定されていません: {template}"
            )));
        };
        if used[index] {
            return Err(ClientError::InvalidRequest(format!(
                "パスパラメータ `{name}` がテンプレート内で重複しています: {template}"
            )));
        }
        used[index] = true;
        let value = params[index].1.as_str();
        if matches!(value, "" | "." | "..") {
            return Err(ClientError::InvalidRequest(format!(
                "パスパラメータ `{name}` に {value:?} は指定できません: {template}"
            )));
        }
        rendered.push_str(&urlencoding::encode(value));

        rest = &after[end + 1..];
    }
    if rest.contains('}') {
        return Err(ClientError::InvalidRequest(format!(
            "対応しない `}}` があります: {template}"
        )));
    }
    rendered.push_str(rest);

    if let Some(index) = used.iter().position(|u| !u) {
        return Err(ClientError::InvalidRequest(format!(
            "パスパラメータ `{}` はテンプレートに存在しません: {template}",
            params[index].0
        )));
    }

    Ok(rendered)
}

/// 1 回の呼び出しに渡すパラメータ一式
#[derive(Debug, Clone, Default)]
pub struct RequestParams {
    path:  Vec<(&'static str, String)>,
    query: QueryParams,
    body:  Option<Vec<u8>>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// パスパラメータを追加する
    pub fn path(mut self, name: &'static str, value: impl Display) -> Self {
        self.path.push((name, value.to_string()));
        self
    }

    /// クエリパラメータを設定する
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// JSON ボディを設定する
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ClientError> {
        let bytes = serde_json::to_vec(body).map_err(|e| {
            ClientError::InvalidRequest(format!("リクエストボディをシリアライズできません: {e}"))
        })?;
        self.body = Some(bytes);
        Ok(self)
    }

    /// ベース URL からの相対ターゲット（`api/v3/...?...`）を組み立てる
    pub fn relative_target(&self, endpoint: &Endpoint) -> Result<String, ClientError> {
        let path = render_path(endpoint.path, &self.path)?;
        if self.query.is_empty() {
            return Ok(path);
        }
        Ok(format!("{path}?{}", self.query.to_query_string()))
    }

    /// 絶対 URL を組み立てる
    ///
    /// `base_url` は末尾が `/` に正規化済みであること。
    pub fn build_url(&self, base_url: &Url, endpoint: &Endpoint) -> Result<Url, ClientError> {
        let path = render_path(endpoint.path, &self.path)?;
        let mut url = base_url
            .join(&path)
            .map_err(|e| ClientError::InvalidRequest(format!("URL を組み立てられません: {e}")))?;
        if !self.query.is_empty() {
            url.set_query(Some(&self.query.to_query_string()));
        }
        Ok(url)
    }

    /// reqwest のリクエストに変換する
    pub(crate) fn into_request(
        self,
        base_url: &Url,
        endpoint: &Endpoint,
        authorization: Option<&HeaderValue>,
    ) -> Result<reqwest::Request, ClientError> {
        if self.body.is_some() && !endpoint.method.allows_body() {
            return Err(ClientError::InvalidRequest(format!(
                "{} はボディを持てません: {}",
                endpoint.method, endpoint.name
            )));
        }

        let url = self.build_url(base_url, endpoint)?;
        let mut request = reqwest::Request::new(endpoint.method.to_reqwest(), url);
        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(value) = authorization {
            headers.insert(AUTHORIZATION, value.clone());
        }
        if let Some(body) = self.body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(reqwest::Body::from(body));
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::endpoint::ResponseShape;

    const ADMIN_ALL: Endpoint = Endpoint::get(
        "authenticators_admin_all_list",
        "api/v3/authenticators/admin/all/",
        ResponseShape::List,
    );

    const USER_SET_PASSWORD: Endpoint = Endpoint::post(
        "core_users_set_password_create",
        "api/v3/core/users/{id}/set_password/",
        ResponseShape::Empty,
    );

    // ===== QueryParams テスト =====

    #[test]
    fn test_未設定のパラメータはキーごと省略される() {
        let mut query = QueryParams::new();
        query
            .push("user", None::<i64>)
            .push("search", None::<&str>)
            .push("is_active", None::<bool>);

        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_空文字列は省略される() {
        let mut query = QueryParams::new();
        query.push("search", Some("")).push("name", Some("akadmin"));

        assert_eq!(query.to_query_string(), "name=akadmin");
    }

    #[rstest]
    #[case(true, "is_active=true")]
    #[case(false, "is_active=false")]
    fn test_boolは小文字で出力される(#[case] value: bool, #[case] expected: &str) {
        let mut query = QueryParams::new();
        query.push("is_active", Some(value));

        assert_eq!(query.to_query_string(), expected);
    }

    #[test]
    fn test_複数パラメータはアンパサンドで連結される() {
        let mut query = QueryParams::new();
        query
            .push("user", Some(5))
            .push("ordering", Some("-created"))
            .push("page", Some(2u32));

        assert_eq!(query.to_query_string(), "user=5&ordering=-created&page=2");
        assert_eq!(query.get("ordering"), Some("-created"));
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn test_値はパーセントエンコードされる() {
        let mut query = QueryParams::new();
        query.push("search", Some("a&b=c d"));

        assert_eq!(query.to_query_string(), "search=a%26b%3Dc%20d");
    }

    #[test]
    fn test_push_allは同じキーを繰り返す() {
        let mut query = QueryParams::new();
        query.push_all("groups_by_name", ["admins", "", "users"]);

        assert_eq!(
            query.to_query_string(),
            "groups_by_name=admins&groups_by_name=users"
        );
    }

    #[test]
    fn test_page_requestは設定済みの項目だけを追加する() {
        let mut query = QueryParams::new();
        PageRequest::page(3, 50).append_to(&mut query);

        assert_eq!(query.to_query_string(), "page=3&page_size=50");
    }

    // ===== render_path テスト =====

    #[test]
    fn test_パスパラメータを名前で置き換える() {
        let path = render_path(
            "api/v3/authenticators/admin/{kind}/{id}/",
            &[("id", "42".to_string()), ("kind", "totp".to_string())],
        )
        .unwrap();

        assert_eq!(path, "api/v3/authenticators/admin/totp/42/");
    }

    #[test]
    fn test_パスパラメータはエンコードされ二重エンコードされない() {
        let path = render_path("api/v3/core/applications/{slug}/", &[(
            "slug",
            "a/b%20c".to_string(),
        )])
        .unwrap();

        assert_eq!(path, "api/v3/core/applications/a%2Fb%2520c/");
    }

    #[rstest]
    #[case("api/v3/core/users/{id}/", &[])]
    #[case("api/v3/core/users/", &[("id", "1")])]
    #[case("api/v3/core/users/{id/", &[("id", "1")])]
    #[case("api/v3/core/users/{id}/{id}/", &[("id", "1")])]
    #[case("api/v3/core/users/id}/", &[])]
    #[case("api/v3/core/applications/{slug}/", &[("slug", "..")])]
    #[case("api/v3/core/applications/{slug}/", &[("slug", ".")])]
    #[case("api/v3/core/applications/{slug}/", &[("slug", "")])]
    fn test_不正なパスパラメータはinvalid_requestになる(
        #[case] template: &str,
        #[case] params: &[(&'static str, &str)],
    ) {
        let params: Vec<(&'static str, String)> =
            params.iter().map(|(k, v)| (*k, v.to_string())).collect();

        let result = render_path(template, &params);

        assert!(
            matches!(result, Err(ClientError::InvalidRequest(_))),
            "InvalidRequest を期待したが {result:?} を受け取った"
        );
    }

    // ===== RequestParams テスト =====

    #[test]
    fn test_user_5でadmin_allのパスを組み立てる() {
        let mut query = QueryParams::new();
        query.push("user", Some(5));

        let target = RequestParams::new()
            .query(query)
            .relative_target(&ADMIN_ALL)
            .unwrap();

        assert_eq!(target, "api/v3/authenticators/admin/all/?user=5");
    }

    #[test]
    fn test_クエリが0件ならクエスチョンマークを付けない() {
        let target = RequestParams::new().relative_target(&ADMIN_ALL).unwrap();

        assert_eq!(target, "api/v3/authenticators/admin/all/");
    }

    #[test]
    fn test_build_urlはベースurlのパスを保持する() {
        let base = Url::parse("https://auth.example.com/sub/").unwrap();
        let mut query = QueryParams::new();
        query.push("user", Some(5));

        let url = RequestParams::new()
            .query(query)
            .build_url(&base, &ADMIN_ALL)
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://auth.example.com/sub/api/v3/authenticators/admin/all/?user=5"
        );
    }

    #[test]
    fn test_into_requestでボディとヘッダーを付与する() {
        let base = Url::parse("https://auth.example.com/").unwrap();
        let token = HeaderValue::from_static("Bearer secret");

        let request = RequestParams::new()
            .path("id", 7)
            .json(&serde_json::json!({ "password": "hunter2" }))
            .unwrap()
            .into_request(&base, &USER_SET_PASSWORD, Some(&token))
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://auth.example.com/api/v3/core/users/7/set_password/"
        );
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer secret");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        let body: serde_json::Value =
            serde_json::from_slice(request.body().unwrap().as_bytes().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "password": "hunter2" }));
    }

    #[test]
    fn test_getにボディを指定するとinvalid_requestになる() {
        let base = Url::parse("https://auth.example.com/").unwrap();

        let result = RequestParams::new()
            .json(&serde_json::json!({}))
            .unwrap()
            .into_request(&base, &ADMIN_ALL, None);

        assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
    }
}
