use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of a successful `POST /login`.
///
/// `access_token` is optional on the wire: a 2xx without a token is treated
/// as an invalid server answer by the client, not as a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl LoginResponse {
    /// Returns the bearer token if the server actually issued one.
    pub fn token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_present() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"access_token":"abc","token_type":"bearer"}"#).unwrap();
        assert_eq!(resp.token(), Some("abc"));
    }

    #[test]
    fn test_token_missing_or_blank() {
        let resp: LoginResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.token(), None);

        let resp: LoginResponse = serde_json::from_str(r#"{"access_token":"  "}"#).unwrap();
        assert_eq!(resp.token(), None);
    }
}
