//! The authenticated data-table core shared by every list screen.
//!
//! Rows are plain DTOs from `contracts`; the traits below give the generic
//! pieces (sorting, filtering, dynamic columns, mutations) uniform access to
//! their scalar fields and sub-records.

pub mod columns;
pub mod export;
pub mod fetcher;
pub mod filter;
pub mod mutations;
pub mod pagination;
pub mod resource_table;
pub mod scroll_sync;
pub mod search;
pub mod sort;
pub mod state;

use std::convert::Infallible;

use sort::SortKey;

/// A nested record of a row that becomes one dynamic column
/// (an obra consuming the product, a purchase feeding it).
pub trait SubRecord: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
    fn label(&self) -> &str;
    fn quantity(&self) -> f64;
    /// Per-column boolean shown above the header (obra `is_considered`).
    fn flag(&self) -> Option<bool> {
        None
    }
}

/// Rows without sub-records use `Infallible`.
impl SubRecord for Infallible {
    fn id(&self) -> &str {
        match *self {}
    }

    fn label(&self) -> &str {
        match *self {}
    }

    fn quantity(&self) -> f64 {
        match *self {}
    }
}

pub trait TableRow: Clone + Send + Sync + 'static {
    type Sub: SubRecord;

    fn row_key(&self) -> String;

    /// Value of a scalar column by its wire name; unknown names are `Missing`.
    fn field(&self, name: &str) -> SortKey;

    fn sub_records(&self) -> &[Self::Sub] {
        &[]
    }

    /// Scalar texts matched by the local search.
    fn search_fields(&self) -> Vec<&str>;

    /// Quantity of the sub-record labelled `label`, 0 when absent.
    fn sub_quantity(&self, label: &str) -> f64 {
        self.sub_records()
            .iter()
            .find(|s| s.label() == label)
            .map(|s| s.quantity())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct Sub {
        pub id: String,
        pub label: String,
        pub quantity: f64,
        pub flag: bool,
    }

    impl SubRecord for Sub {
        fn id(&self) -> &str {
            &self.id
        }
        fn label(&self) -> &str {
            &self.label
        }
        fn quantity(&self) -> f64 {
            self.quantity
        }
        fn flag(&self) -> Option<bool> {
            Some(self.flag)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Row {
        pub codigo: String,
        pub descricao: String,
        pub saldo: Option<f64>,
        pub subs: Vec<Sub>,
    }

    impl TableRow for Row {
        type Sub = Sub;

        fn row_key(&self) -> String {
            self.codigo.clone()
        }

        fn field(&self, name: &str) -> SortKey {
            match name {
                "codigo" => SortKey::Text(self.codigo.clone()),
                "descricao" => SortKey::Text(self.descricao.clone()),
                "saldo" => self.saldo.map(SortKey::Number).unwrap_or(SortKey::Missing),
                _ => SortKey::Missing,
            }
        }

        fn sub_records(&self) -> &[Sub] {
            &self.subs
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![&self.codigo, &self.descricao]
        }
    }

    pub fn sub(id: &str, label: &str, quantity: f64) -> Sub {
        Sub {
            id: id.into(),
            label: label.into(),
            quantity,
            flag: false,
        }
    }

    pub fn row(codigo: &str, descricao: &str, saldo: Option<f64>, subs: Vec<Sub>) -> Row {
        Row {
            codigo: codigo.into(),
            descricao: descricao.into(),
            saldo,
            subs,
        }
    }
}
