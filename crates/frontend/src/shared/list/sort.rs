//! Client-side ordering of the rows of the current page.

use std::cmp::Ordering;

use super::TableRow;

/// Comparable value of one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
    /// Absent value; compares as the number 0.
    Missing,
}

impl SortKey {
    fn as_number(&self) -> Option<f64> {
        match self {
            SortKey::Number(n) => Some(*n),
            SortKey::Missing => Some(0.0),
            SortKey::Text(_) => None,
        }
    }

    fn as_text(&self) -> String {
        match self {
            SortKey::Number(n) => number_text(*n),
            SortKey::Missing => "0".to_string(),
            SortKey::Text(s) => s.to_lowercase(),
        }
    }
}

fn number_text(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Numeric when both sides are numeric, otherwise lowercase text order.
pub fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.as_text().cmp(&b.as_text()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// Sortable column: a fixed scalar field or a dynamic column label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortField {
    Column(&'static str),
    Dynamic(String),
}

impl SortField {
    pub fn key_of<R: TableRow>(&self, row: &R) -> SortKey {
        match self {
            SortField::Column(name) => row.field(name),
            SortField::Dynamic(label) => SortKey::Number(row.sub_quantity(label)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }
}

/// Same field flips the direction; another field starts ascending.
pub fn toggled(current: Option<&SortSpec>, field: SortField) -> SortSpec {
    match current {
        Some(spec) if spec.field == field => SortSpec {
            field,
            direction: spec.direction.flipped(),
        },
        _ => SortSpec::ascending(field),
    }
}

/// Stable sort; rows with equal keys keep their relative order.
pub fn sort_rows<R: TableRow>(rows: &mut [R], spec: &SortSpec) {
    rows.sort_by(|a, b| {
        let ord = compare_keys(&spec.field.key_of(a), &spec.field.key_of(b));
        match spec.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

pub fn sorted<R: TableRow>(mut rows: Vec<R>, spec: Option<&SortSpec>) -> Vec<R> {
    if let Some(spec) = spec {
        sort_rows(&mut rows, spec);
    }
    rows
}

/// Arrow shown next to a header: only the active column gets one.
pub fn sort_indicator(current: Option<&SortSpec>, field: &SortField) -> &'static str {
    match current {
        Some(spec) if &spec.field == field => {
            if spec.direction.is_ascending() {
                " ▲"
            } else {
                " ▼"
            }
        }
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::fixtures::{row, sub, Row};

    fn codes(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.codigo.as_str()).collect()
    }

    #[test]
    fn test_numeric_and_text_compare() {
        assert_eq!(
            compare_keys(&SortKey::Number(2.0), &SortKey::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(
            compare_keys(&SortKey::Text("b".into()), &SortKey::Text("A".into())),
            Ordering::Greater
        );
        // text vs number falls back to text: "10" < "9"
        assert_eq!(
            compare_keys(&SortKey::Text("9".into()), &SortKey::Number(10.0)),
            Ordering::Greater
        );
        assert_eq!(compare_keys(&SortKey::Missing, &SortKey::Number(0.0)), Ordering::Equal);
        assert_eq!(compare_keys(&SortKey::Missing, &SortKey::Number(-1.0)), Ordering::Greater);
    }

    #[test]
    fn test_descending_reverses_ascending() {
        let rows = vec![
            row("1", "c", Some(3.0), vec![]),
            row("2", "a", Some(1.0), vec![]),
            row("3", "b", Some(2.0), vec![]),
        ];
        let asc = sorted(rows.clone(), Some(&SortSpec::ascending(SortField::Column("saldo"))));
        let desc = sorted(
            rows,
            Some(&SortSpec {
                field: SortField::Column("saldo"),
                direction: SortDirection::Descending,
            }),
        );
        assert_eq!(codes(&asc), vec!["2", "3", "1"]);
        let mut reversed = codes(&desc);
        reversed.reverse();
        assert_eq!(codes(&asc), reversed);
    }

    #[test]
    fn test_missing_dynamic_label_sorts_as_zero() {
        let rows = vec![
            row("with", "x", None, vec![sub("o1", "Obra A", 5.0)]),
            row("without", "y", None, vec![]),
            row("negative", "z", None, vec![sub("o1", "Obra A", -2.0)]),
        ];
        let out = sorted(rows, Some(&SortSpec::ascending(SortField::Dynamic("Obra A".into()))));
        assert_eq!(codes(&out), vec!["negative", "without", "with"]);
    }

    #[test]
    fn test_missing_scalar_is_zero_and_sort_is_stable() {
        let rows = vec![
            row("a", "x", None, vec![]),
            row("b", "x", Some(0.0), vec![]),
            row("c", "x", Some(-1.0), vec![]),
            row("d", "x", None, vec![]),
        ];
        let out = sorted(rows.clone(), Some(&SortSpec::ascending(SortField::Column("saldo"))));
        assert_eq!(codes(&out), vec!["c", "a", "b", "d"]);

        let by_text = sorted(rows, Some(&SortSpec::ascending(SortField::Column("descricao"))));
        assert_eq!(codes(&by_text), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_toggle() {
        let first = toggled(None, SortField::Column("codigo"));
        assert_eq!(first.direction, SortDirection::Ascending);
        let second = toggled(Some(&first), SortField::Column("codigo"));
        assert_eq!(second.direction, SortDirection::Descending);
        let third = toggled(Some(&second), SortField::Dynamic("Obra A".into()));
        assert_eq!(third, SortSpec::ascending(SortField::Dynamic("Obra A".into())));
    }

    #[test]
    fn test_indicator() {
        let spec = SortSpec::ascending(SortField::Column("codigo"));
        assert_eq!(sort_indicator(Some(&spec), &SortField::Column("codigo")), " ▲");
        assert_eq!(sort_indicator(Some(&spec), &SortField::Column("descricao")), "");
        assert_eq!(sort_indicator(None, &SortField::Column("codigo")), "");
    }

    #[test]
    fn test_number_text() {
        assert_eq!(number_text(5.0), "5");
        assert_eq!(number_text(2.5), "2.5");
    }
}
