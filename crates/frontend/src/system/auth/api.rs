use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api_utils::{ensure_success, ApiClient, Body, Verb};
use crate::shared::error::ApiError;

pub const LOGIN_FAILED: &str = "Falha no login";
pub const INVALID_SERVER_ANSWER: &str = "Resposta inválida do servidor";
pub const AUTH_UNREACHABLE: &str = "Erro ao autenticar";

/// `POST /login`; on success the token is stored and `Login` is published.
pub async fn login(api: &ApiClient, username: String, password: String) -> Result<(), String> {
    let request = LoginRequest { username, password };
    let body = serde_json::to_value(&request).map_err(|e| e.to_string())?;

    let response = api
        .send_public(Verb::Post, "/login", Body::Json(body))
        .await
        .map_err(|_| AUTH_UNREACHABLE.to_string())?;

    let response = ensure_success(response).await.map_err(|e| login_error_message(&e))?;

    let parsed = response
        .json::<LoginResponse>()
        .await
        .map_err(|_| INVALID_SERVER_ANSWER.to_string())?;

    let token = parsed.token().ok_or_else(|| INVALID_SERVER_ANSWER.to_string())?;
    api.session().begin(token);
    log::info!("login succeeded");
    Ok(())
}

fn login_error_message(err: &ApiError) -> String {
    err.detail().unwrap_or(LOGIN_FAILED).to_string()
}
