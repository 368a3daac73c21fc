//! HTTP plumbing shared by every screen.
//!
//! All calls to the dashboard API go through [`ApiClient`], which owns the
//! base URL and the [`Session`] so the bearer header and the 401/403 logout
//! rule live in exactly one place.

use contracts::shared::error::ErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::shared::config::config;
use crate::shared::error::ApiError;
use crate::system::auth::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }

    fn builder(&self, url: &str) -> RequestBuilder {
        match self {
            Verb::Get => Request::get(url),
            Verb::Post => Request::post(url),
            Verb::Patch => Request::patch(url),
            Verb::Delete => Request::delete(url),
        }
    }
}

/// Request payload.
pub enum Body {
    Empty,
    Json(serde_json::Value),
    Form(web_sys::FormData),
}

fn build(builder: RequestBuilder, body: Body) -> Result<Request, ApiError> {
    let request = match body {
        Body::Empty => builder.build()?,
        Body::Json(value) => builder.json(&value)?,
        Body::Form(form) => builder.body(form)?,
    };
    Ok(request)
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn from_config(session: Session) -> Self {
        Self::new(config().api_base_url.clone(), session)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends `path` with the session's bearer header.
    ///
    /// A 401/403 answer ends the session (token cleared, `Logout` published)
    /// before the response is handed back untouched. Transport failures never
    /// end the session.
    pub async fn authorized_fetch(
        &self,
        verb: Verb,
        path: &str,
        body: Body,
    ) -> Result<Response, ApiError> {
        let url = self.url(path);
        let builder = verb
            .builder(&url)
            .header("Authorization", &self.session.authorization_header());
        let request = build(builder, body)?;

        let response = request.send().await.map_err(|e| {
            log::warn!("{} {} failed: {}", verb.as_str(), url, e);
            ApiError::Network(e.to_string())
        })?;

        self.session.observe_status(response.status());
        Ok(response)
    }

    /// Sends `path` without credentials (login).
    pub async fn send_public(&self, verb: Verb, path: &str, body: Body) -> Result<Response, ApiError> {
        let url = self.url(path);
        let request = build(verb.builder(&url), body)?;
        request.send().await.map_err(|e| {
            log::warn!("{} {} failed: {}", verb.as_str(), url, e);
            ApiError::Network(e.to_string())
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.authorized_fetch(Verb::Get, path, Body::Empty).await?;
        let response = ensure_success(response).await?;
        response.json::<T>().await.map_err(|e| {
            log::error!("GET {path}: unexpected body: {e}");
            ApiError::Decode(e.to_string())
        })
    }

    /// Authenticated call whose response body is irrelevant.
    pub async fn send(&self, verb: Verb, path: &str, body: Body) -> Result<(), ApiError> {
        let response = self.authorized_fetch(verb, path, body).await?;
        ensure_success(response).await?;
        Ok(())
    }
}

/// Turns a non-2xx response into [`ApiError::Status`] carrying the server's
/// `detail`, if any.
pub async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message());
    Err(ApiError::Status { status, detail })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::events::AuthBus;
    use crate::system::auth::storage::testing::MemoryTokens;
    use std::sync::Arc;

    #[test]
    fn test_url_building() {
        let session = Session::new(Arc::new(MemoryTokens::default()), AuthBus::new());
        let api = ApiClient::new("https://api.example.com/", session);
        assert_eq!(api.url("/obras/all"), "https://api.example.com/obras/all");
        assert_eq!(
            api.url("export_pdf?type=produtos-estoque"),
            "https://api.example.com/export_pdf?type=produtos-estoque"
        );
    }

    #[test]
    fn test_verbs() {
        assert_eq!(Verb::Patch.as_str(), "PATCH");
        assert_eq!(Verb::Delete.as_str(), "DELETE");
    }
}
