use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::screen::Screen;

/// Navigation state shared by the header and the content area.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Screen>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Screen::default()),
        }
    }

    pub fn navigate(&self, screen: Screen) {
        log::debug!("navigate: {}", screen.key());
        self.active.set(screen);
    }

    /// Restores the screen from `?active=<key>` and keeps the URL in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(screen) = screen_from_query(&search) {
            self.active.set(screen);
        }

        let this = *self;
        Effect::new(move |_| {
            let key = this.active.get().key();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

fn screen_from_query(search: &str) -> Option<Screen> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|key| Screen::from_key(key))
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_from_query() {
        assert_eq!(screen_from_query("?active=compras"), Some(Screen::Compras));
        assert_eq!(
            screen_from_query("active=listar_obras_futuras"),
            Some(Screen::ListarObrasFuturas)
        );
        assert_eq!(screen_from_query("?active=nada"), None);
        assert_eq!(screen_from_query(""), None);
    }
}
