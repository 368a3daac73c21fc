//! Row-level state changes: delete, finalize, toggle "considered".
//!
//! Lifecycle of an obra: `Active -> Finished`, `{Active, Finished} -> Removed`.
//! The flag toggle is orthogonal and is followed by a re-fetch of the page,
//! since the server recomputes balances of every row.

use contracts::domain::a001_obra::dto::{IsConsideredRequest, STATUS_FINISHED};

use crate::shared::api_utils::{ApiClient, Body, Verb};
use crate::shared::error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowMutation {
    Delete { id: String },
    Finalize { id: String },
    SetConsidered { id: String, value: bool },
}

/// How the displayed list catches up with a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// Patch the rows in place.
    Local,
    /// Reload the current page.
    Refetch,
}

/// Rows a mutation can be applied to locally.
pub trait MutableRow {
    fn row_id(&self) -> &str;
    fn mark_finished(&mut self);
}

impl RowMutation {
    pub fn id(&self) -> &str {
        match self {
            RowMutation::Delete { id }
            | RowMutation::Finalize { id }
            | RowMutation::SetConsidered { id, .. } => id,
        }
    }

    pub fn confirmation(&self) -> Option<&'static str> {
        match self {
            RowMutation::Delete { .. } => Some("Tem certeza que deseja remover esta obra?"),
            RowMutation::Finalize { .. } => Some("Tem certeza que deseja finalizar esta obra?"),
            RowMutation::SetConsidered { .. } => None,
        }
    }

    pub fn verb(&self) -> Verb {
        match self {
            RowMutation::Delete { .. } => Verb::Delete,
            RowMutation::Finalize { .. } | RowMutation::SetConsidered { .. } => Verb::Patch,
        }
    }

    pub fn path(&self, resource: &str) -> String {
        let resource = resource.trim_matches('/');
        let id = urlencoding::encode(self.id());
        match self {
            RowMutation::Delete { .. } => format!("/{resource}/{id}"),
            RowMutation::Finalize { .. } => {
                format!("/{resource}/{id}/status?status_update={STATUS_FINISHED}")
            }
            RowMutation::SetConsidered { .. } => format!("/{resource}/{id}/is-considered"),
        }
    }

    pub fn json_body(&self) -> Option<serde_json::Value> {
        match self {
            RowMutation::SetConsidered { value, .. } => serde_json::to_value(IsConsideredRequest {
                is_considered: *value,
            })
            .ok(),
            _ => None,
        }
    }

    pub fn reconcile(&self) -> Reconcile {
        match self {
            RowMutation::SetConsidered { .. } => Reconcile::Refetch,
            _ => Reconcile::Local,
        }
    }

    pub fn failure_message(&self, err: &ApiError) -> String {
        match self {
            RowMutation::Delete { .. } => "Erro ao remover obra. Tente novamente.".to_string(),
            RowMutation::Finalize { .. } => "Erro ao finalizar obra. Tente novamente.".to_string(),
            RowMutation::SetConsidered { .. } => format!("Erro ao atualizar obra: {err}"),
        }
    }
}

/// Applies a confirmed mutation to the displayed rows.
pub fn apply_mutation<R: MutableRow>(rows: &mut Vec<R>, mutation: &RowMutation) {
    match mutation {
        RowMutation::Delete { id } => rows.retain(|r| r.row_id() != id),
        RowMutation::Finalize { id } => rows
            .iter_mut()
            .filter(|r| r.row_id() == id)
            .for_each(|r| r.mark_finished()),
        RowMutation::SetConsidered { .. } => {}
    }
}

/// Sends the mutation; the caller reconciles the list on `Ok`.
pub async fn execute(
    api: &ApiClient,
    resource: &str,
    mutation: &RowMutation,
) -> Result<Reconcile, ApiError> {
    let body = match mutation.json_body() {
        Some(value) => Body::Json(value),
        None => Body::Empty,
    };
    let path = mutation.path(resource);
    log::debug!("{} {}", mutation.verb().as_str(), path);
    api.send(mutation.verb(), &path, body).await?;
    Ok(mutation.reconcile())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Obra {
        id: String,
        finished: bool,
    }

    impl MutableRow for Obra {
        fn row_id(&self) -> &str {
            &self.id
        }
        fn mark_finished(&mut self) {
            self.finished = true;
        }
    }

    fn obras() -> Vec<Obra> {
        ["a", "b", "c"]
            .iter()
            .map(|id| Obra {
                id: id.to_string(),
                finished: false,
            })
            .collect()
    }

    #[test]
    fn test_delete_removes_only_that_id() {
        let mut rows = obras();
        apply_mutation(&mut rows, &RowMutation::Delete { id: "b".into() });
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(!rows.iter().any(|r| r.id == "b"));
    }

    #[test]
    fn test_finalize_rewrites_status() {
        let mut rows = obras();
        apply_mutation(&mut rows, &RowMutation::Finalize { id: "a".into() });
        assert!(rows[0].finished);
        assert!(!rows[1].finished);
    }

    #[test]
    fn test_toggle_request_and_refetch() {
        let m = RowMutation::SetConsidered {
            id: "o1".into(),
            value: true,
        };
        assert_eq!(m.verb(), Verb::Patch);
        assert_eq!(m.path("obras"), "/obras/o1/is-considered");
        assert_eq!(
            m.json_body().unwrap().to_string(),
            r#"{"is_considered":true}"#
        );
        assert_eq!(m.reconcile(), Reconcile::Refetch);
        assert!(m.confirmation().is_none());

        let mut rows = obras();
        apply_mutation(&mut rows, &m);
        assert_eq!(rows, obras());
    }

    #[test]
    fn test_paths_and_confirmations() {
        let del = RowMutation::Delete { id: "x/1".into() };
        assert_eq!(del.path("/obras/"), "/obras/x%2F1");
        assert_eq!(del.verb(), Verb::Delete);
        assert_eq!(del.confirmation(), Some("Tem certeza que deseja remover esta obra?"));

        let fin = RowMutation::Finalize { id: "7".into() };
        assert_eq!(fin.path("obras"), "/obras/7/status?status_update=finished");
        assert_eq!(fin.json_body(), None);
        assert_eq!(fin.reconcile(), Reconcile::Local);
    }

    #[test]
    fn test_failure_messages() {
        let err = ApiError::Status { status: 500, detail: None };
        let m = RowMutation::SetConsidered { id: "1".into(), value: false };
        assert_eq!(m.failure_message(&err), "Erro ao atualizar obra: HTTP 500");
        assert_eq!(
            RowMutation::Delete { id: "1".into() }.failure_message(&err),
            "Erro ao remover obra. Tente novamente."
        );
    }
}
