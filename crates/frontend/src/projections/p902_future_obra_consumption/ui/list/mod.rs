//! "Estoque Obras Futuras": balances after active obras and purchases, then
//! the consumption of each planned (future) obra.

use contracts::domain::a001_obra::dto::ObraConsumoDto;
use contracts::projections::p902_future_obra_consumption::dto::{
    ProdutoObrasFuturasDto, RESOURCE,
};
use leptos::prelude::*;

use crate::shared::components::table::format_quantity;
use crate::shared::components::ui::badge::{balance_tone, Badge, Tone};
use crate::shared::config::PAGE_SIZE_OPTIONS;
use crate::shared::list::resource_table::{
    ColumnDef, DynamicBlock, ResourceSpec, ResourceTable, SearchMode,
};
use crate::shared::list::sort::SortKey;
use crate::shared::list::TableRow;

pub const VISIBLE_OBRAS_FUTURAS: usize = 7;

impl TableRow for ProdutoObrasFuturasDto {
    type Sub = ObraConsumoDto;

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
            "quantidadeCompras" => SortKey::Number(self.quantidade_compras),
            "estoquePosCompras" => SortKey::Number(self.estoque_pos_compras),
            "estoquePosObrasFuturas" => SortKey::Number(self.estoque_pos_obras_futuras),
            _ => SortKey::Missing,
        }
    }

    fn sub_records(&self) -> &[ObraConsumoDto] {
        &self.obras_futuras
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.codigo, &self.descricao]
    }
}

fn title(_: &[ProdutoObrasFuturasDto]) -> String {
    "Estoque Obras Futuras".to_string()
}

fn badge(value: f64, tone: Tone) -> AnyView {
    view! { <Badge tone=tone>{format_quantity(value)}</Badge> }.into_any()
}

pub fn spec() -> ResourceSpec<ProdutoObrasFuturasDto> {
    type Row = ProdutoObrasFuturasDto;
    ResourceSpec {
        resource: RESOURCE,
        title,
        export_kind: None,
        search: SearchMode::Local,
        placeholder: "Digite código, produto ou obra...",
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
            ColumnDef::new("Quantidade Comprada", "quantidadeCompras", |r: &Row| {
                badge(r.quantidade_compras, Tone::Green)
            }),
            ColumnDef::new("Saldo Após Compras", "estoquePosCompras", |r: &Row| {
                badge(r.estoque_pos_compras, balance_tone(r.estoque_pos_compras))
            }),
        ],
        dynamic: Some(DynamicBlock {
            max_visible: VISIBLE_OBRAS_FUTURAS,
            flag_row: None,
            tone: Tone::Purple,
        }),
        trailing: vec![ColumnDef::new(
            "Saldo Pós Obras Futuras",
            "estoquePosObrasFuturas",
            |r: &Row| badge(r.estoque_pos_obras_futuras, balance_tone(r.estoque_pos_obras_futuras)),
        )],
    }
}

#[component]
pub fn FutureObraConsumptionList() -> impl IntoView {
    view! { <ResourceTable spec=spec() /> }
}
