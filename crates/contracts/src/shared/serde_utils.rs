//! Serde helpers for the loosely-typed payloads of the external API.

use serde::{Deserialize, Deserializer};

/// Deserializes `null` (or a missing field, together with `#[serde(default)]`)
/// into `T::default()`.
///
/// The API omits or nulls balances that were never computed; the client
/// treats those as zero/empty instead of failing the whole page.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Balance {
        #[serde(default, deserialize_with = "null_as_default")]
        value: f64,
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<String>,
    }

    #[test]
    fn test_null_and_missing_become_default() {
        let p: Balance = serde_json::from_str(r#"{"value":null,"items":null}"#).unwrap();
        assert_eq!(p.value, 0.0);
        assert!(p.items.is_empty());

        let p: Balance = serde_json::from_str("{}").unwrap();
        assert_eq!(p.value, 0.0);
    }

    #[test]
    fn test_present_values_kept() {
        let p: Balance = serde_json::from_str(r#"{"value":12.5,"items":["a"]}"#).unwrap();
        assert_eq!(p.value, 12.5);
        assert_eq!(p.items, vec!["a".to_string()]);
    }
}
