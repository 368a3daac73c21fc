//! Page arithmetic for the list footer. Pages are 1-based.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

/// Number of page buttons shown at once.
pub const PAGE_WINDOW: u32 = 5;

impl PageInfo {
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        Self {
            page: page.max(1),
            per_page,
            total,
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page as u64) as u32
    }

    /// 1-based index of the first item on the page; 0 when there is none.
    pub fn start(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        ((self.page as u64 - 1) * self.per_page as u64 + 1).min(self.total)
    }

    pub fn end(&self) -> u64 {
        (self.page as u64 * self.per_page as u64).min(self.total)
    }

    pub fn summary(&self) -> String {
        format!(
            "Mostrando {} a {} de {} itens",
            self.start(),
            self.end(),
            self.total
        )
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Up to [`PAGE_WINDOW`] page numbers centred on the current page.
    pub fn page_numbers(&self) -> Vec<u32> {
        let total = self.total_pages();
        if total == 0 {
            return Vec::new();
        }
        let span = PAGE_WINDOW.min(total);
        let half = PAGE_WINDOW / 2;
        let first = if self.page <= half + 1 {
            1
        } else if self.page + half >= total {
            total + 1 - span
        } else {
            self.page - half
        };
        (first..first + span).collect()
    }
}
