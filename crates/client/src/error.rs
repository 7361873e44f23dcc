//! Authentik クライアントのエラー型

use authentik_shared::ApiErrorBody;
use reqwest::StatusCode;
use thiserror::Error;

/// Authentik クライアントエラー
///
/// HTTP ステータスに由来するバリアントはすべてステータスコードとレスポンスボディを保持する。
/// 呼び出し側は [`ClientError::status`] で「サーバーが拒否した」ケースを他の失敗と区別できる。
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// リクエストを組み立てられない（パスパラメータ不足、GET にボディ指定など）
    #[error("不正なリクエスト: {0}")]
    InvalidRequest(String),

    /// ネットワークエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// キャンセルトークンによる中断
    #[error("リクエストがキャンセルされました")]
    Cancelled,

    /// バリデーションエラー（400）
    #[error("バリデーションエラー: {body}")]
    Validation { body: String },

    /// 認証エラー（401）
    #[error("認証に失敗しました: {body}")]
    Unauthorized { body: String },

    /// 権限不足（403）
    #[error("権限がありません: {body}")]
    Forbidden { body: String },

    /// リソースが見つからない（404）
    #[error("リソースが見つかりません: {body}")]
    NotFound { body: String },

    /// 競合（409）
    #[error("競合が発生しました: {body}")]
    Conflict { body: String },

    /// その他の非 2xx ステータス
    #[error("予期しないステータス {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// レスポンスボディのデコード失敗
    #[error("レスポンスのデコードに失敗しました: {0}")]
    Decode(String),
}

impl ClientError {
    /// 非 2xx ステータスをエラーに変換する
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::Validation { body },
            StatusCode::UNAUTHORIZED => Self::Unauthorized { body },
            StatusCode::FORBIDDEN => Self::Forbidden { body },
            StatusCode::NOT_FOUND => Self::NotFound { body },
            StatusCode::CONFLICT => Self::Conflict { body },
            status => Self::Status { status, body },
        }
    }

    /// サーバーが返した HTTP ステータス
    ///
    /// ステータスに由来しないエラー（ネットワーク、デコードなど）は `None`。
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Validation { .. } => Some(StatusCode::BAD_REQUEST),
            Self::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            Self::Forbidden { .. } => Some(StatusCode::FORBIDDEN),
            Self::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            Self::Conflict { .. } => Some(StatusCode::CONFLICT),
            Self::Status { status, .. } => Some(*status),
            Self::InvalidRequest(_) | Self::Network(_) | Self::Cancelled | Self::Decode(_) => None,
        }
    }

    /// サーバーが返したレスポンスボディ
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Validation { body }
            | Self::Unauthorized { body }
            | Self::Forbidden { body }
            | Self::NotFound { body }
            | Self::Conflict { body }
            | Self::Status { body, .. } => Some(body),
            Self::InvalidRequest(_) | Self::Network(_) | Self::Cancelled | Self::Decode(_) => None,
        }
    }

    /// レスポンスボディを Authentik のエラー形式としてパースする
    pub fn api_error(&self) -> Option<ApiErrorBody> {
        self.body().and_then(ApiErrorBody::parse)
    }

    /// 404 か
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
