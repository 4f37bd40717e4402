//! Unauthenticated client for the student roster service.

use store::{FormStudent, Student};

use crate::error::{ensure_success, ApiError};

/// Client for the student CRUD endpoints.
///
/// Wraps a connection-pooled [`reqwest::Client`], so cloning is cheap and
/// views can construct one per call site.
#[derive(Clone, Debug)]
pub struct RosterApi {
    client: reqwest::Client,
    base: String,
}

impl RosterApi {
    /// `base` is the service root, e.g. `http://localhost:4000`. A trailing
    /// slash is tolerated.
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

    /// `GET /students`. Returns the whole collection.
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        let response = self.client.get(self.url("/students")).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    /// `POST /students` with the name/age/major payload.
    pub async fn create_student(&self, student: &FormStudent) -> Result<Student, ApiError> {
        let response = self
            .client
            .post(self.url("/students"))
            .json(student)
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }

    /// `PUT /students/{id}` with the name/age/major payload.
    pub async fn update_student(
        &self,
        id: &str,
        student: &FormStudent,
    ) -> Result<Student, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/students/{id}")))
            .json(student)
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }

    /// `DELETE /students/{id}`. The response body is ignored.
    pub async fn delete_student(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/students/{id}")))
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let api = RosterApi::new("http://localhost:4000");
        assert_eq!(api.url("/students"), "http://localhost:4000/students");
        assert_eq!(api.url("/students/66f"), "http://localhost:4000/students/66f");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let api = RosterApi::new("http://localhost:4000/");
        assert_eq!(api.url("/students"), "http://localhost:4000/students");
    }
}
