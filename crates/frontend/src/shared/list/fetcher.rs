//! Paginated reads of `GET /{resource}`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use contracts::shared::page::ResourcePage;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::search::SearchFilter;
use crate::shared::api_utils::ApiClient;
use crate::shared::error::ApiError;

/// Query string of a list request; `None` filters are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
}

impl ListQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, filter: Option<SearchFilter>) -> Self {
        match filter {
            Some(SearchFilter::Codigo(v)) => self.codigo = Some(v),
            Some(SearchFilter::Descricao(v)) => self.descricao = Some(v),
            None => {}
        }
        self
    }

    pub fn to_path(&self, resource: &str) -> Result<String, ApiError> {
        let qs = serde_qs::to_string(self).map_err(|e| ApiError::Validation(e.to_string()))?;
        Ok(format!("/{}?{}", resource.trim_matches('/'), qs))
    }
}

pub async fn fetch_page<T: DeserializeOwned>(
    api: &ApiClient,
    resource: &str,
    query: &ListQuery,
) -> Result<ResourcePage<T>, ApiError> {
    let path = query.to_path(resource)?;
    log::debug!("fetching {path}");
    let page = api.get_json::<ResourcePage<T>>(&path).await?;
    if !page.is_consistent() {
        log::warn!(
            "{path}: {} items for per_page {} and total {}",
            page.items.len(),
            page.per_page,
            page.total
        );
    }
    Ok(page)
}

/// Hands out increasing tickets so only the answer to the latest request of
/// a list is applied.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}
