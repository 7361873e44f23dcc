//! # エンドポイント記述子
//!
//! 1 つの REST 操作を「HTTP メソッド + パステンプレート + レスポンス形状」として静的に記述する。
//! すべての操作はこの記述子を [`invoke`](crate::AuthentikClientImpl::invoke) に渡すことで実行される。
//!
//! 記述子の一覧は [`endpoints`](crate::endpoints) モジュールにまとめて定義している。

/// HTTP メソッド
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// JSON ボディを持てるメソッドか
    pub fn allows_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

/// レスポンスボディの形状
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ResponseShape {
    /// 単一オブジェクト（retrieve / create / update）
    Object,
    /// `{ "pagination": ..., "results": [...] }` 形式の一覧
    Paginated,
    /// JSON 配列そのもの
    List,
    /// ボディなし（204 No Content など）
    Empty,
}

impl ResponseShape {
    /// ボディが空のときに代わりにデコードする JSON
    ///
    /// 一覧系は `null` ではなく空の結果を返す。単一オブジェクトは代替がない。
    pub fn empty_body_fallback(self) -> Option<&'static str> {
        match self {
            Self::Object => None,
            Self::Paginated => Some("{}"),
            Self::List => Some("[]"),
            Self::Empty => Some("null"),
        }
    }
}

/// エンドポイント記述子
///
/// `path` はベース URL からの相対パスで、`{name}` 形式のプレースホルダを含められる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// 操作名（ログ出力用。Authentik の operationId に揃える）
    pub name:   &'static str,
    pub method: HttpMethod,
    pub path:   &'static str,
    pub shape:  ResponseShape,
}

impl Endpoint {
    pub const fn new(
        name: &'static str,
        method: HttpMethod,
        path: &'static str,
        shape: ResponseShape,
    ) -> Self {
        Self {
            name,
            method,
            path,
            shape,
        }
    }

    pub const fn get(name: &'static str, path: &'static str, shape: ResponseShape) -> Self {
        Self::new(name, HttpMethod::Get, path, shape)
    }

    pub const fn post(name: &'static str, path: &'static str, shape: ResponseShape) -> Self {
        Self::new(name, HttpMethod::Post, path, shape)
    }

    pub const fn put(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Put, path, ResponseShape::Object)
    }

    pub const fn patch(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Patch, path, ResponseShape::Object)
    }

    pub const fn delete(name: &'static str, path: &'static str) -> Self {
        Self::new(name, HttpMethod::Delete, path, ResponseShape::Empty)
    }
}
