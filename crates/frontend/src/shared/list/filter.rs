//! Local search for screens whose endpoint does not filter.

use super::{SubRecord, TableRow};

/// Case-insensitive substring match over the row's scalar texts and the
/// labels of all its sub-records. An empty term matches everything.
pub fn matches_search<R: TableRow>(row: &R, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    row.search_fields()
        .into_iter()
        .any(|f| f.to_lowercase().contains(&needle))
        || row
            .sub_records()
            .iter()
            .any(|s| s.label().to_lowercase().contains(&needle))
}

pub fn filter_rows<R: TableRow>(rows: &[R], term: &str) -> Vec<R> {
    rows.iter()
        .filter(|row| matches_search(*row, term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::fixtures::{row, sub};

    #[test]
    fn test_matches_code_description_and_sub_labels() {
        let rows = vec![
            row("10.1", "Perfil U", None, vec![sub("o1", "Torre Norte", 1.0)]),
            row("20.5", "Chapa lisa", None, vec![]),
        ];
        assert_eq!(filter_rows(&rows, "perfil").len(), 1);
        assert_eq!(filter_rows(&rows, "20.").len(), 1);
        assert_eq!(filter_rows(&rows, "NORTE")[0].codigo, "10.1");
        assert_eq!(filter_rows(&rows, "").len(), 2);
        assert_eq!(filter_rows(&rows, "   ").len(), 2);
        assert!(filter_rows(&rows, "inexistente").is_empty());
    }
}
