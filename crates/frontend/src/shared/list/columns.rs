//! Data-driven columns: one per distinct sub-record label found on a page.

use std::cmp::Ordering;
use std::collections::HashSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::{SubRecord, TableRow};

/// Width of one dynamic column, in pixels.
pub const DYNAMIC_COLUMN_WIDTH_PX: u32 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicColumn {
    pub label: String,
    /// Id of the first sub-record seen with this label.
    pub id: String,
    /// Flag of that first sub-record (`false` when the kind has none).
    pub flag: bool,
}

/// Distinct labels of the sub-records selected by `accessor`, first
/// occurrence winning, ordered by [`compare_labels`].
pub fn derive_columns<'a, R, S, F>(rows: &'a [R], accessor: F) -> Vec<DynamicColumn>
where
    S: SubRecord,
    F: Fn(&'a R) -> &'a [S],
{
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for row in rows {
        for sub in accessor(row) {
            if seen.insert(sub.label().to_string()) {
                columns.push(DynamicColumn {
                    label: sub.label().to_string(),
                    id: sub.id().to_string(),
                    flag: sub.flag().unwrap_or(false),
                });
            }
        }
    }
    columns.sort_by(|a, b| compare_labels(&a.label, &b.label));
    columns
}

pub fn derive_row_columns<R: TableRow>(rows: &[R]) -> Vec<DynamicColumn> {
    derive_columns(rows, R::sub_records)
}

fn primary_key(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}

fn secondary_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

/// Orders labels the way a pt-BR collator does for plain text: base letters
/// first (case and accents ignored), then accents (unaccented first), then
/// case (lowercase first).
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| {
            let tertiary = |s: &str| -> Vec<(bool, char)> {
                s.nfd().map(|c| (c.is_uppercase(), c)).collect()
            };
            tertiary(a).cmp(&tertiary(b))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::fixtures::{row, sub, Row};

    fn labels(cols: &[DynamicColumn]) -> Vec<&str> {
        cols.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let mut first = sub("id-1", "Obra B", 1.0);
        first.flag = true;
        let rows: Vec<Row> = vec![
            row("1", "x", None, vec![first, sub("id-2", "Obra A", 2.0)]),
            row("2", "y", None, vec![sub("id-3", "Obra B", 3.0)]),
        ];
        let cols = derive_row_columns(&rows);
        assert_eq!(labels(&cols), vec!["Obra A", "Obra B"]);
        assert_eq!(cols[1].id, "id-1");
        assert!(cols[1].flag);
    }

    #[test]
    fn test_idempotent() {
        let rows = vec![
            row("1", "x", None, vec![sub("a", "Édifício", 1.0), sub("b", "edificio", 1.0)]),
            row("2", "y", None, vec![sub("c", "Casa", 1.0), sub("d", "árvore", 1.0)]),
        ];
        let once = derive_row_columns(&rows);
        let twice = derive_row_columns(&rows);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_page() {
        let rows: Vec<Row> = Vec::new();
        assert!(derive_row_columns(&rows).is_empty());
    }

    #[test]
    fn test_collation() {
        let mut words = vec!["Zeta", "árvore", "Casa", "avião", "casa", "Ábaco"];
        words.sort_by(|a, b| compare_labels(a, b));
        assert_eq!(words, vec!["Ábaco", "árvore", "avião", "casa", "Casa", "Zeta"]);

        assert_eq!(compare_labels("e", "é"), Ordering::Less);
        assert_eq!(compare_labels("obra", "Obra"), Ordering::Less);
        assert_eq!(compare_labels("Obra", "Obra"), Ordering::Equal);
    }
}
