use serde::{Deserialize, Serialize};

use super::serde_utils::null_as_default;

/// One page of a paginated resource as returned by `GET /{resource}`.
///
/// Every field is optional on the wire; missing values normalize to an empty
/// list / zero so the client never depends on the server sending all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ResourcePage<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub items: Vec<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub per_page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pages: u32,
}

impl<T> Default for ResourcePage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 0,
            per_page: 0,
            pages: 0,
        }
    }
}

impl<T> ResourcePage<T> {
    /// `items.len() <= per_page` and `total >= items.len()`.
    ///
    /// A page whose `per_page` is unknown (0) only has to satisfy the total bound.
    pub fn is_consistent(&self) -> bool {
        let len = self.items.len();
        let fits_page = self.per_page == 0 || len <= self.per_page as usize;
        fits_page && self.total >= len as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload() {
        let page: ResourcePage<u32> = serde_json::from_str(
            r#"{"items":[1,2,3],"total":35,"page":1,"per_page":10,"pages":4}"#,
        )
        .unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total, 35);
        assert_eq!(page.pages, 4);
        assert!(page.is_consistent());
    }

    #[test]
    fn test_missing_fields_default() {
        let page: ResourcePage<u32> = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert!(page.is_consistent());

        let page: ResourcePage<u32> = serde_json::from_str(r#"{"items":null,"total":null}"#).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_inconsistent_pages() {
        let too_many = ResourcePage {
            items: vec![1, 2, 3],
            total: 3,
            page: 1,
            per_page: 2,
            pages: 2,
        };
        assert!(!too_many.is_consistent());

        let short_total = ResourcePage {
            items: vec![1, 2],
            total: 1,
            page: 1,
            per_page: 10,
            pages: 1,
        };
        assert!(!short_total.is_consistent());
    }
}
