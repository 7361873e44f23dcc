//! # ページネーション付きレスポンス
//!
//! Authentik のページ番号ベースのページネーションに対応したレスポンス型。

use serde::{Deserialize, Serialize};

/// ページネーションのメタデータ
///
/// Authentik はすべての一覧エンドポイントで同じ形のメタデータを返す。
/// `next` / `previous` は存在しない場合 `0` になる。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationMeta {
    pub next:        u64,
    pub previous:    u64,
    pub count:       u64,
    pub current:     u64,
    pub total_pages: u64,
    pub start_index: u64,
    pub end_index:   u64,
}

impl PaginationMeta {
    /// 次のページが存在するか
    pub fn has_next(&self) -> bool {
        self.next > 0
    }
}

/// ページネーション付きレスポンス
///
/// ## JSON 形式
///
/// ```json
/// {
///   "pagination": { "next": 2, "previous": 0, "count": 120, ... },
///   "results": [...]
/// }
/// ```
///
/// ボディが空の場合も `null` ではなく空の結果として扱えるよう、
/// 両フィールドとも省略可能にしている。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub pagination: PaginationMeta,
    #[serde(default = "Vec::new")]
    pub results:    Vec<T>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            pagination: PaginationMeta::default(),
            results:    Vec::new(),
        }
    }
}

impl<T> Paginated<T> {
    /// 結果が 0 件か
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// 結果の件数（このページ分のみ）
    pub fn len(&self) -> usize {
        self.results.len()
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_authentikのページネーション形式をデシリアライズする() {
        let json = r#"{
            "pagination": {
                "next": 2,
                "previous": 0,
                "count": 3,
                "current": 1,
                "total_pages": 2,
                "start_index": 1,
                "end_index": 2
            },
            "results": ["a", "b"]
        }"#;

        let page: Paginated<String> = serde_json::from_str(json).unwrap();

        assert_eq!(page.results, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(page.pagination.count, 3);
        assert!(page.pagination.has_next());
    }

    #[test]
    fn test_空オブジェクトから空の結果を作る() {
        let page: Paginated<i64> = serde_json::from_str("{}").unwrap();

        assert!(page.is_empty());
        assert_eq!(page.pagination, PaginationMeta::default());
    }

    #[test]
    fn test_最終ページではhas_nextがfalse() {
        let page: Paginated<i64> =
            serde_json::from_str(r#"{"pagination": {"next": 0, "current": 3}, "results": [1]}"#)
                .unwrap();

        assert!(!page.pagination.has_next());
        assert_eq!(page.len(), 1);
    }

    #[test]
    fn test_into_iterで結果を取り出す() {
        let page = Paginated {
            pagination: PaginationMeta::default(),
            results:    vec![1, 2, 3],
        };

        assert_eq!(page.into_iter().sum::<i32>(), 6);
    }
}
