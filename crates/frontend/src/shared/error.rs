use thiserror::Error;

/// Failure of a call to the dashboard API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response was received (offline, CORS, DNS...).
    #[error("falha de rede: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("{}", status_message(*status, detail.as_deref()))]
    Status { status: u16, detail: Option<String> },

    #[error("resposta inválida do servidor: {0}")]
    Decode(String),

    /// A DOM/browser API call failed (blob, object URL, anchor).
    #[error("falha no navegador: {0}")]
    Browser(String),

    /// Rejected on the client before any request was made.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

pub fn is_auth_status(status: u16) -> bool {
    status == 401 || status == 403
}

fn status_message(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => detail.to_string(),
        None => format!("HTTP {status}"),
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
