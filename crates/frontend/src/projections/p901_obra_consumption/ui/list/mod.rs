//! "Estoque Obras": consumption of each product by the active obras, one
//! dynamic column per obra, with the per-obra "considered" toggle.

use contracts::domain::a001_obra::dto::ObraConsumoDto;
use contracts::projections::p901_obra_consumption::dto::{ProdutoObrasDto, RESOURCE};
use leptos::prelude::*;

use crate::shared::components::table::format_quantity;
use crate::shared::components::ui::badge::{obras_tone, Badge, Tone};
use crate::shared::config::EXTENDED_PAGE_SIZE_OPTIONS;
use crate::shared::list::resource_table::{
    ColumnDef, DynamicBlock, ResourceSpec, ResourceTable, SearchMode,
};
use crate::shared::list::sort::SortKey;
use crate::shared::list::{SubRecord, TableRow};

/// Export `type` of the obras screen.
pub const EXPORT_KIND: &str = "produtos-obras";

/// Dynamic obra columns visible before scrolling.
pub const VISIBLE_OBRAS: usize = 7;

impl SubRecord for ObraConsumoDto {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.descricao
    }

    fn quantity(&self) -> f64 {
        self.quantidade_consumida
    }

    fn flag(&self) -> Option<bool> {
        Some(self.is_considered)
    }
}

impl TableRow for ProdutoObrasDto {
    type Sub = ObraConsumoDto;

    fn row_key(&self) -> String {
        self.codigo.clone()
    }

    fn field(&self, name: &str) -> SortKey {
        match name {
            "codigo" => SortKey::Text(self.codigo.clone()),
            "descricao" => SortKey::Text(self.descricao.clone()),
            "estoqueAtual" => SortKey::Number(self.estoque_atual),
            "estoquePosObras" => SortKey::Number(self.estoque_pos_obras),
            _ => SortKey::Missing,
        }
    }

    fn sub_records(&self) -> &[ObraConsumoDto] {
        &self.obras
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.codigo, &self.descricao]
    }
}

fn title(_: &[ProdutoObrasDto]) -> String {
    "Estoque Obras".to_string()
}

pub fn spec() -> ResourceSpec<ProdutoObrasDto> {
    ResourceSpec {
        resource: RESOURCE,
        title,
        export_kind: Some(EXPORT_KIND),
        search: SearchMode::Local,
        placeholder: "Digite código, produto ou obra...",
        page_sizes: &EXTENDED_PAGE_SIZE_OPTIONS,
        leading: vec![
            ColumnDef::new("Código", "codigo", |r: &ProdutoObrasDto| r.codigo.clone().into_any()),
            ColumnDef::new("Produto", "descricao", |r: &ProdutoObrasDto| {
                r.descricao.clone().into_any()
            })
            .min_width(220.0),
            ColumnDef::new("Estoque Atual", "estoqueAtual", |r: &ProdutoObrasDto| {
                let value = r.estoque_atual;
                view! { <Badge tone=Tone::Blue>{format_quantity(value)}</Badge> }.into_any()
            }),
        ],
        dynamic: Some(DynamicBlock {
            max_visible: VISIBLE_OBRAS,
            flag_row: Some("Obras consideradas"),
            tone: Tone::Purple,
        }),
        trailing: vec![ColumnDef::new(
            "Saldo Intermediário",
            "estoquePosObras",
            |r: &ProdutoObrasDto| {
                let tone = obras_tone(r.estoque_atual, r.estoque_pos_obras);
                let value = r.estoque_pos_obras;
                view! { <Badge tone=tone>{format_quantity(value)}</Badge> }.into_any()
            },
        )],
    }
}

#[component]
pub fn ObraConsumptionList() -> impl IntoView {
    view! { <ResourceTable spec=spec() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::columns::derive_row_columns;
    use crate::shared::list::filter::filter_rows;
    use crate::shared::list::sort::{sorted, SortField, SortSpec};

    fn obra(id: &str, descricao: &str, qtd: f64, considered: bool) -> ObraConsumoDto {
        ObraConsumoDto {
            id: id.into(),
            descricao: descricao.into(),
            quantidade_consumida: qtd,
            is_considered: considered,
        }
    }

    fn produto(codigo: &str, obras: Vec<ObraConsumoDto>) -> ProdutoObrasDto {
        ProdutoObrasDto {
            codigo: codigo.into(),
            descricao: format!("Perfil {codigo}"),
            estoque_atual: 10.0,
            estoque_pos_obras: 4.0,
            obras,
        }
    }

    #[test]
    fn test_columns_keep_first_id_and_flag() {
        let rows = vec![
            produto("1", vec![obra("o2", "Edifício Sul", 3.0, true)]),
            produto("2", vec![obra("o9", "Edifício Sul", 1.0, false), obra("o1", "Casa Azul", 2.0, false)]),
        ];
        let cols = derive_row_columns(&rows);
        let labels: Vec<&str> = cols.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Casa Azul", "Edifício Sul"]);
        assert_eq!(cols[1].id, "o2");
        assert!(cols[1].flag);
    }

    #[test]
    fn test_missing_obra_sorts_as_zero() {
        let rows = vec![
            produto("1", vec![obra("o1", "Casa Azul", 5.0, false)]),
            produto("2", vec![]),
            produto("3", vec![obra("o1", "Casa Azul", 2.0, false)]),
        ];
        let spec = SortSpec::ascending(SortField::Dynamic("Casa Azul".into()));
        let codes: Vec<String> = sorted(rows, Some(&spec)).into_iter().map(|r| r.codigo).collect();
        assert_eq!(codes, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_local_search_matches_obra_names() {
        let rows = vec![
            produto("1", vec![obra("o1", "Casa Azul", 5.0, false)]),
            produto("2", vec![obra("o2", "Galpão", 1.0, false)]),
        ];
        let hits = filter_rows(&rows, "galp");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].codigo, "2");
    }
}
