//! "Estoque Controle": physical stock of the day against the previous count
//! and the projected balances. The endpoint filters by code or description.

use contracts::projections::p900_stock_control::dto::{
    ProdutoEstoqueDto, DEFAULT_DATA_ESTOQUE_ANTERIOR, DEFAULT_DATA_ESTOQUE_ATUAL, RESOURCE,
};
use leptos::prelude::*;
use std::convert::Infallible;

use crate::shared::components::table::format_quantity;
use crate::shared::components::ui::badge::{stock_tone, Badge, Tone};
use crate::shared::config::EXTENDED_PAGE_SIZE_OPTIONS;
use crate::shared::list::resource_table::{ColumnDef, ResourceSpec, ResourceTable, SearchMode};
use crate::shared::list::sort::SortKey;
use crate::shared::list::TableRow;

impl TableRow for ProdutoEstoqueDto {
    type Sub = Infallible;

    fn row_key(&self) -> String {
        self.codigo.clone()
    }

    fn field(&self, name: &str) -> SortKey {
        match name {
            "codigo" => SortKey::Text(self.codigo.clone()),
            "descricao" => SortKey::Text(self.descricao.clone()),
            "cor" => self.cor.clone().map(SortKey::Text).unwrap_or(SortKey::Missing),
            "estoqueAtual" => SortKey::Number(self.estoque_atual),
            "estoqueAnterior" => SortKey::Number(self.estoque_anterior),
            "comparacao" => SortKey::Number(self.comparacao),
            "saldoInterm" => SortKey::Number(self.saldo_interm),
            "saldoAposCompras" => SortKey::Number(self.saldo_apos_compras),
            "saldoAposNovasObras" => SortKey::Number(self.saldo_apos_novas_obras),
            _ => SortKey::Missing,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.codigo.as_str(), self.descricao.as_str()];
        fields.extend(self.cor.as_deref());
        fields
    }
}

/// Date of the current count, taken from the first row of the page.
fn current_date(rows: &[ProdutoEstoqueDto]) -> String {
    rows.first()
        .map(|r| r.data_atual())
        .unwrap_or(DEFAULT_DATA_ESTOQUE_ATUAL)
        .to_string()
}

fn previous_date(rows: &[ProdutoEstoqueDto]) -> String {
    rows.first()
        .map(|r| r.data_anterior())
        .unwrap_or(DEFAULT_DATA_ESTOQUE_ANTERIOR)
        .to_string()
}

fn title(rows: &[ProdutoEstoqueDto]) -> String {
    format!("PCM do dia {}", current_date(rows))
}

fn toned(value: f64, tone: Tone) -> AnyView {
    view! { <Badge tone=tone>{format_quantity(value)}</Badge> }.into_any()
}

fn columns() -> Vec<ColumnDef<ProdutoEstoqueDto>> {
    vec![
        ColumnDef::new("Código", "codigo", |r: &ProdutoEstoqueDto| r.codigo.clone().into_any()),
        ColumnDef::new("Descrição", "descricao", |r: &ProdutoEstoqueDto| {
            r.descricao.clone().into_any()
        })
        .min_width(240.0),
        ColumnDef::new("Cor", "cor", |r: &ProdutoEstoqueDto| {
            r.cor.clone().unwrap_or_default().into_any()
        }),
        ColumnDef::new("Estoque Atual", "estoqueAtual", |r: &ProdutoEstoqueDto| {
            toned(r.estoque_atual, Tone::Blue)
        }),
        ColumnDef::new("Estoque Anterior", "estoqueAnterior", |r: &ProdutoEstoqueDto| {
            format_quantity(r.estoque_anterior).into_any()
        })
        .with_note(previous_date),
        ColumnDef::new("Diferença", "comparacao", |r: &ProdutoEstoqueDto| {
            toned(r.comparacao, stock_tone(r.comparacao))
        }),
        ColumnDef::new("Saldo Intermediário", "saldoInterm", |r: &ProdutoEstoqueDto| {
            toned(r.saldo_interm, stock_tone(r.saldo_interm))
        }),
        ColumnDef::new("Saldo Após Compras", "saldoAposCompras", |r: &ProdutoEstoqueDto| {
            toned(r.saldo_apos_compras, stock_tone(r.saldo_apos_compras))
        }),
        ColumnDef::new(
            "Saldo Após Obras Futuras",
            "saldoAposNovasObras",
            |r: &ProdutoEstoqueDto| toned(r.saldo_apos_novas_obras, stock_tone(r.saldo_apos_novas_obras)),
        ),
    ]
}

pub fn spec() -> ResourceSpec<ProdutoEstoqueDto> {
    ResourceSpec {
        resource: RESOURCE,
        title,
        export_kind: Some(RESOURCE),
        search: SearchMode::ServerDebounced,
        placeholder: "Digite código, produto ou cor...",
        page_sizes: &EXTENDED_PAGE_SIZE_OPTIONS,
        leading: columns(),
        dynamic: None,
        trailing: Vec::new(),
    }
}

#[component]
pub fn StockControlList() -> impl IntoView {
    view! { <ResourceTable spec=spec() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::sort::{sorted, SortDirection, SortField, SortSpec};

    fn produto(codigo: &str, cor: Option<&str>, comparacao: f64) -> ProdutoEstoqueDto {
        ProdutoEstoqueDto {
            codigo: codigo.into(),
            descricao: format!("Perfil {codigo}"),
            cor: cor.map(Into::into),
            comparacao,
            ..Default::default()
        }
    }

    #[test]
    fn test_title_and_note_use_first_row() {
        assert_eq!(title(&[]), "PCM do dia 12/11/2024");
        let mut row = produto("1", None, 0.0);
        row.data_estoque_atual = Some("20/05/2025".into());
        row.data_estoque_anterior = Some("19/05/2025".into());
        assert_eq!(title(&[row.clone()]), "PCM do dia 20/05/2025");
        assert_eq!(columns()[4].header(&[row]), "Estoque Anterior (19/05/2025)");
    }

    #[test]
    fn test_sort_by_difference_desc() {
        let rows = vec![produto("1", None, 2.0), produto("2", None, -5.0), produto("3", None, 7.0)];
        let spec = SortSpec {
            field: SortField::Column("comparacao"),
            direction: SortDirection::Descending,
        };
        let codes: Vec<String> = sorted(rows, Some(&spec)).into_iter().map(|r| r.codigo).collect();
        assert_eq!(codes, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_search_fields_include_color() {
        let row = produto("10.1", Some("Branco"), 0.0);
        assert_eq!(row.search_fields(), vec!["10.1", "Perfil 10.1", "Branco"]);
        assert_eq!(row.field("cor"), SortKey::Text("Branco".into()));
        assert_eq!(produto("1", None, 0.0).field("cor"), SortKey::Missing);
    }
}
