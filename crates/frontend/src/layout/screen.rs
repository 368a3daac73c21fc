//! Closed set of screens reachable from the header.

use leptos::prelude::*;

use crate::domain::a001_obra::ui::list::ObraList;
use crate::projections::p900_stock_control::ui::list::StockControlList;
use crate::projections::p901_obra_consumption::ui::list::ObraConsumptionList;
use crate::projections::p902_future_obra_consumption::ui::list::FutureObraConsumptionList;
use crate::projections::p903_purchase_planning::ui::list::PurchasePlanningList;
use crate::usecases::u501_import_spreadsheet::view::ImportSpreadsheet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    Principal,
    #[default]
    Estoques,
    Importacao,
    Compras,
    Obras,
    ListarObras,
    ListarObrasFuturas,
    ObrasFuturas,
}

impl Screen {
    pub fn all() -> [Screen; 8] {
        [
            Screen::Principal,
            Screen::Estoques,
            Screen::Importacao,
            Screen::Compras,
            Screen::Obras,
            Screen::ListarObras,
            Screen::ListarObrasFuturas,
            Screen::ObrasFuturas,
        ]
    }

    /// Stable key kept in the `?active=` query parameter.
    pub fn key(&self) -> &'static str {
        match self {
            Screen::Principal => "principal",
            Screen::Estoques => "estoques",
            Screen::Importacao => "importacao",
            Screen::Compras => "compras",
            Screen::Obras => "obras",
            Screen::ListarObras => "listar_obras",
            Screen::ListarObrasFuturas => "listar_obras_futuras",
            Screen::ObrasFuturas => "obras_futuras",
        }
    }

    pub fn from_key(key: &str) -> Option<Screen> {
        Self::all().into_iter().find(|s| s.key() == key)
    }

    /// Breadcrumb title.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Principal => "Principal",
            Screen::Estoques => "Estoque Controle",
            Screen::Importacao => "Importação",
            Screen::Compras => "Compras",
            Screen::Obras => "Estoque Obras",
            Screen::ListarObras => "Listar Obras",
            Screen::ListarObrasFuturas => "Listar Obras Futuras",
            Screen::ObrasFuturas => "Estoque Obras Futuras",
        }
    }

    /// Screens grouped under the "Obras" dropdown.
    pub fn is_obras_group(&self) -> bool {
        matches!(
            self,
            Screen::Obras | Screen::ListarObras | Screen::ListarObrasFuturas | Screen::ObrasFuturas
        )
    }

    pub fn render(&self) -> AnyView {
        match self {
            Screen::Principal => view! {
                <div class="page-placeholder">"Página Principal em desenvolvimento..."</div>
            }
            .into_any(),
            Screen::Estoques => view! { <StockControlList /> }.into_any(),
            Screen::Importacao => view! { <ImportSpreadsheet /> }.into_any(),
            Screen::Compras => view! { <PurchasePlanningList /> }.into_any(),
            Screen::Obras => view! { <ObraConsumptionList /> }.into_any(),
            Screen::ListarObras => view! { <ObraList /> }.into_any(),
            Screen::ListarObrasFuturas => view! { <ObraList futura=true /> }.into_any(),
            Screen::ObrasFuturas => view! { <FutureObraConsumptionList /> }.into_any(),
        }
    }
}
