//! # レスポンスの共通ハンドリング
//!
//! 1. 非 2xx ステータスは [`ClientError::from_status`] でエラーに変換する（ボディはデコードしない）
//! 2. 2xx のボディはエンドポイントの [`ResponseShape`] に従ってデコードする

use serde::de::DeserializeOwned;

use crate::{endpoint::ResponseShape, error::ClientError};

/// レスポンスを検査し、成功ならボディをデコードする
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
    shape: ResponseShape,
) -> Result<T, ClientError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "Authentik がエラーステータスを返しました");
        return Err(ClientError::from_status(status, body));
    }

    let bytes = response.bytes().await?;
    decode_body(shape, &bytes)
}

/// ボディをレスポンス形状に従ってデコードする
///
/// 空（または空白のみ）のボディは [`ResponseShape::empty_body_fallback`] で置き換える。
/// [`ResponseShape::Empty`] はボディの内容を読まない。
pub fn decode_body<T: DeserializeOwned>(
    shape: ResponseShape,
    bytes: &[u8],
) -> Result<T, ClientError> {
    if shape == ResponseShape::Empty {
        return Ok(serde_json::from_str("null")?);
    }

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return match shape.empty_body_fallback() {
            Some(fallback) => Ok(serde_json::from_str(fallback)?),
            None => Err(ClientError::Decode(format!(
                "{shape} のレスポンスボディが空です"
            ))),
        };
    }

    Ok(serde_json::from_slice(bytes)?)
}
