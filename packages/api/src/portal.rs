//! Authenticated client for the campus portal service.

use serde_json::json;
use store::{AuthToken, Credentials, Instructor, Session, Student};

use crate::error::{ensure_success, ApiError};

/// Client for the login-gated endpoints.
///
/// Only [`PortalApi::login`] works without a token; every other call takes
/// the bearer token the login handed out.
#[derive(Clone, Debug)]
pub struct PortalApi {
    client: reqwest::Client,
    base: String,
}

impl PortalApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            client: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// `POST /auth/login` with the credentials. A 2xx body decodes into the
    /// token/user pair; any other status is a failed login.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(credentials)
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }

    /// `GET /students` with the bearer token.
    pub async fn list_students(&self, token: &AuthToken) -> Result<Vec<Student>, ApiError> {
        let response = self
            .client
            .get(self.url("/students"))
            .bearer_auth(token.as_str())
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }

    /// `GET /instructors` with the bearer token.
    pub async fn list_instructors(&self, token: &AuthToken) -> Result<Vec<Instructor>, ApiError> {
        let response = self
            .client
            .get(self.url("/instructors"))
            .bearer_auth(token.as_str())
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }

    /// `PUT /instructors/{id}` with the new name. Returns the updated record
    /// for the caller to patch into its list.
    pub async fn rename_instructor(
        &self,
        token: &AuthToken,
        id: &str,
        name: &str,
    ) -> Result<Instructor, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/instructors/{id}")))
            .bearer_auth(token.as_str())
            .json(&json!({ "name": name }))
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let api = PortalApi::new("http://localhost:5000/");
        assert_eq!(api.url("/auth/login"), "http://localhost:5000/auth/login");
        assert_eq!(
            api.url("/instructors/i1"),
            "http://localhost:5000/instructors/i1"
        );
    }

    #[test]
    fn test_rename_body_shape() {
        let body = json!({ "name": "Adm. Hopper" });
        assert_eq!(body.to_string(), r#"{"name":"Adm. Hopper"}"#);
    }
}
