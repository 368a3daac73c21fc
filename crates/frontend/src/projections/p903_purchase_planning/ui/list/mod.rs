//! "Compras Planejadas": balances before and after the planned purchases,
//! one dynamic column per purchase.

use contracts::projections::p903_purchase_planning::dto::{CompraDto, ProdutoComprasDto, RESOURCE};
use leptos::prelude::*;

use crate::shared::components::table::format_quantity;
use crate::shared::components::ui::badge::{balance_tone, Badge, Tone};
use crate::shared::config::PAGE_SIZE_OPTIONS;
use crate::shared::list::resource_table::{
    ColumnDef, DynamicBlock, ResourceSpec, ResourceTable, SearchMode,
};
use crate::shared::list::sort::SortKey;
use crate::shared::list::{SubRecord, TableRow};

pub const EXPORT_KIND: &str = "produtos-compras";

pub const VISIBLE_COMPRAS: usize = 5;

impl SubRecord for CompraDto {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.descricao
    }

    fn quantity(&self) -> f64 {
        self.quantidade_comprada
    }
}

impl TableRow for ProdutoComprasDto {
    type Sub = CompraDto;

    fn row_key(&self) -> String {
        self.codigo.clone()
    }

    fn field(&self, name: &str) -> SortKey {
        match name {
            "codigo" => SortKey::Text(self.codigo.clone()),
            "descricao" => SortKey::Text(self.descricao.clone()),
            "estoqueAtual" => SortKey::Number(self.estoque_atual),
            "consumoObras" => SortKey::Number(self.consumo_obras),
            "estoquePosObras" => SortKey::Number(self.estoque_pos_obras),
            "estoquePosCompras" => SortKey::Number(self.estoque_pos_compras),
            _ => SortKey::Missing,
        }
    }

    fn sub_records(&self) -> &[CompraDto] {
        &self.compras
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.codigo, &self.descricao]
    }
}

fn title(_: &[ProdutoComprasDto]) -> String {
    "Compras Planejadas".to_string()
}

fn badge(value: f64, tone: Tone) -> AnyView {
    view! { <Badge tone=tone>{format_quantity(value)}</Badge> }.into_any()
}

pub fn spec() -> ResourceSpec<ProdutoComprasDto> {
    type Row = ProdutoComprasDto;
    ResourceSpec {
        resource: RESOURCE,
        title,
        export_kind: Some(EXPORT_KIND),
        search: SearchMode::ServerOnSubmit,
        placeholder: "Digite código, produto ou compra...",
        page_sizes: &PAGE_SIZE_OPTIONS,
        leading: vec![
            ColumnDef::new("Código", "codigo", |r: &Row| r.codigo.clone().into_any()),
            ColumnDef::new("Produto", "descricao", |r: &Row| r.descricao.clone().into_any())
                .min_width(220.0),
            ColumnDef::new("Estoque Atual", "estoqueAtual", |r: &Row| {
                badge(r.estoque_atual, Tone::Blue)
            }),
            ColumnDef::new("Consumo Obras", "consumoObras", |r: &Row| {
                badge(r.consumo_obras, Tone::Purple)
            }),
            ColumnDef::new("Saldo Intermediário", "estoquePosObras", |r: &Row| {
                badge(r.estoque_pos_obras, balance_tone(r.estoque_pos_obras))
            }),
        ],
        dynamic: Some(DynamicBlock {
            max_visible: VISIBLE_COMPRAS,
            flag_row: None,
            tone: Tone::Green,
        }),
        trailing: vec![ColumnDef::new(
            "Saldo Após Compras",
            "estoquePosCompras",
            |r: &Row| badge(r.estoque_pos_compras, balance_tone(r.estoque_pos_compras)),
        )],
    }
}

#[component]
pub fn PurchasePlanningList() -> impl IntoView {
    view! { <ResourceTable spec=spec() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::fetcher::ListQuery;
    use crate::shared::list::search::route_search_term;
    use crate::shared::list::sort::{sorted, SortDirection, SortField, SortSpec};

    fn produto(codigo: &str, compras: Vec<(&str, f64)>) -> ProdutoComprasDto {
        ProdutoComprasDto {
            codigo: codigo.into(),
            descricao: format!("Perfil {codigo}"),
            compras: compras
                .into_iter()
                .map(|(d, q)| CompraDto {
                    id: format!("c-{d}"),
                    descricao: d.into(),
                    quantidade_comprada: q,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_by_purchase_desc() {
        let rows = vec![
            produto("1", vec![("Pedido 12", 3.0)]),
            produto("2", vec![("Pedido 12", 9.0)]),
            produto("3", vec![]),
        ];
        let spec = SortSpec {
            field: SortField::Dynamic("Pedido 12".into()),
            direction: SortDirection::Descending,
        };
        let codes: Vec<String> = sorted(rows, Some(&spec)).into_iter().map(|r| r.codigo).collect();
        assert_eq!(codes, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_code_search_query() {
        let query = ListQuery::new(1, 10).with_search(route_search_term("123"));
        assert_eq!(query.to_path(RESOURCE).unwrap(), "/compras?page=1&per_page=10&codigo=123");
    }
}
