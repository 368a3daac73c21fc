//! Routing of a free-text search term to the server's `codigo` or
//! `descricao` filter.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    Codigo(String),
    Descricao(String),
}

impl SearchFilter {
    pub fn codigo(&self) -> Option<&str> {
        match self {
            SearchFilter::Codigo(v) => Some(v),
            SearchFilter::Descricao(_) => None,
        }
    }

    pub fn descricao(&self) -> Option<&str> {
        match self {
            SearchFilter::Descricao(v) => Some(v),
            SearchFilter::Codigo(_) => None,
        }
    }
}

/// A term starting with a digit or `.` is a product code, anything else a
/// description; the two are exclusive. Blank terms yield no filter.
pub fn route_search_term(term: &str) -> Option<SearchFilter> {
    let term = term.trim();
    let first = term.chars().next()?;
    if first.is_ascii_digit() || first == '.' {
        Some(SearchFilter::Codigo(term.to_string()))
    } else {
        Some(SearchFilter::Descricao(term.to_string()))
    }
}
