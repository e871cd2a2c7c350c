//! One page of a paginated listing.

use serde::{Deserialize, Serialize};

/// Page contents plus the total when the server reports one.
///
/// Accepts either a bare JSON array or an object carrying the items under
/// `items`/`content` and the total under `total`/`totalElements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PageRepr<T>")]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageRepr<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "content")]
        items: Vec<T>,
        #[serde(default, alias = "totalElements")]
        total: Option<u64>,
    },
}

impl<T> From<PageRepr<T>> for Page<T> {
    fn from(repr: PageRepr<T>) -> Self {
        match repr {
            PageRepr::Bare(items) => Page { items, total: None },
            PageRepr::Wrapped { items, total } => Page { items, total },
        }
    }
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array() {
        let page: Page<i32> = serde_json::from_value(json!([1, 2, 3])).unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total, None);
    }

    #[test]
    fn test_spring_page_object() {
        let page: Page<i32> =
            serde_json::from_value(json!({"content": [4], "totalElements": 31, "number": 3}))
                .unwrap();
        assert_eq!(page.items, vec![4]);
        assert_eq!(page.total, Some(31));
    }

    #[test]
    fn test_items_without_total() {
        let page: Page<i32> = serde_json::from_value(json!({"items": []})).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, None);
    }
}
