//! # Authentik SDK 共有ユーティリティ
//!
//! Authentik API クライアントと CLI の両方で使用される共通の型を提供する。
//!
//! ## 設計方針
//!
//! - すべてのリソースに共通するワイヤーフォーマット（ページネーション、エラーボディ）のみを配置
//! - HTTP 通信やリソース固有のモデルは含まない
//! - 外部クレートへの依存は最小限に抑える

pub mod error_body;
pub mod observability;
pub mod paginated;

pub use error_body::ApiErrorBody;
pub use paginated::{Paginated, PaginationMeta};
