//! 複数リソースで共有するモデル

use serde::{Deserialize, Serialize};

/// 削除時に参照元へ及ぶ影響
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsedByAction {
    Cascade,
    CascadeMany,
    SetNull,
    SetDefault,
}

/// `.../used_by/` が返す参照元オブジェクト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedBy {
    pub app:        String,
    pub model_name: String,
    pub pk:         String,
    pub name:       String,
    pub action:     UsedByAction,
}

/// ポリシー評価モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyEngineMode {
    /// すべてのポリシーを満たす
    #[default]
    All,
    /// いずれかのポリシーを満たす
    Any,
}
