use super::pagination::PageInfo;
use super::sort::{toggled, SortField, SortSpec};
use crate::shared::config::config;

/// View state of one list screen. Nothing here is persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState {
    // pagination (1-based)
    pub page: u32,
    pub per_page: u32,
    pub total: u64,

    // search
    pub search_input: String,
    pub applied_search: String,

    // client-side sorting
    pub sort: Option<SortSpec>,

    pub is_loaded: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self::with_page_size(config().default_page_size)
    }
}

impl ListState {
    pub fn with_page_size(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page,
            total: 0,
            search_input: String::new(),
            applied_search: String::new(),
            sort: None,
            is_loaded: false,
        }
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.page, self.per_page, self.total)
    }

    pub fn go_to(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Changing the page size always restarts at page 1.
    pub fn set_per_page(&mut self, per_page: u32) {
        self.per_page = per_page;
        self.page = 1;
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = Some(toggled(self.sort.as_ref(), field));
    }

    /// Commits the typed term; a non-blank term restarts at page 1.
    pub fn apply_search(&mut self) {
        self.applied_search = self.search_input.trim().to_string();
        if !self.applied_search.is_empty() {
            self.page = 1;
        }
    }

    /// Explicit "Buscar": commits the typed term and always restarts at page 1,
    /// even when the term is blank.
    pub fn submit_search(&mut self) {
        self.apply_search();
        self.page = 1;
    }

    pub fn record_page(&mut self, total: u64) {
        self.total = total;
        self.is_loaded = true;
    }

    /// A failed fetch leaves an empty list behind, never the previous page.
    pub fn record_failure(&mut self) {
        self.total = 0;
    }
}
