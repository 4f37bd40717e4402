//! # Domain models for the campus records backends
//!
//! Defines the data structures exchanged with the REST services as JSON.
//! Each type derives the serde traits for the direction it travels:
//! [`Session`] only ever arrives and [`Credentials`] only ever leaves,
//! while the rest derive both.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Student`] | A student record. Carries the server-issued identifier (wire field `_id`), the name/age/major triple, and the `enrolled` flag. |
//! | [`Instructor`] | An instructor record: identifier plus display name. |
//! | [`FormStudent`] | The validated create/update payload. Only name, age and major go over the wire; the server owns everything else. |
//! | [`User`] | The account a login resolves to, with its [`Role`]. |
//! | [`AuthToken`] | Opaque bearer token. Redacted from `Debug` output. |
//! | [`Session`] | Token plus user, decoded straight from the login response. |
//! | [`Credentials`] | The login request body. |
//!
//! The backends are Mongo-flavoured: identifiers arrive as `_id` strings and
//! are opaque to the client. Deployed data is not always complete (students
//! with empty names or majors do occur), so record fields other than the
//! identifier default instead of failing the whole list decode.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A student record as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Server-issued identifier, `_id` on the wire.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub enrolled: bool,
}

impl Student {
    /// Whether the record carries enough data to be worth a list row.
    pub fn displayable(&self) -> bool {
        !self.name.is_empty() && !self.major.is_empty()
    }
}

/// An instructor record as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    /// Server-issued identifier, `_id` on the wire.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// The create/update payload for a student: exactly the fields a client may
/// set. Produced by draft validation, never built from raw input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormStudent {
    pub name: String,
    pub age: u32,
    pub major: String,
}

/// Role attached to an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
}

/// The account a successful login resolves to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub role: Role,
}

/// Opaque bearer token issued by the login endpoint.
///
/// Held in memory only and never printed: the `Debug` impl is redacted so a
/// stray log line cannot leak it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

/// Proof of authentication: the token plus the user it was issued to.
/// Decoded directly from the login response body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Session {
    pub token: AuthToken,
    pub user: User,
}

/// Login request body.
#[derive(Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_decodes_mongo_id() {
        let student: Student = serde_json::from_str(
            r#"{"_id":"66f","name":"Ada","age":21,"major":"CS","enrolled":true}"#,
        )
        .unwrap();
        assert_eq!(student.id, "66f");
        assert_eq!(student.name, "Ada");
        assert_eq!(student.age, 21);
        assert!(student.enrolled);
    }

    #[test]
    fn test_student_encodes_mongo_id() {
        let student = Student {
            id: "66f".to_string(),
            name: "Ada".to_string(),
            age: 21,
            major: "CS".to_string(),
            enrolled: true,
        };
        let json = serde_json::to_value(&student).unwrap();
        // The rename holds in both directions.
        assert_eq!(json["_id"], "66f");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_sparse_student_still_decodes() {
        // Real deployments have records with only an id.
        let student: Student = serde_json::from_str(r#"{"_id":"66f"}"#).unwrap();
        assert_eq!(student.id, "66f");
        assert_eq!(student.name, "");
        assert_eq!(student.age, 0);
        assert!(!student.enrolled);
        assert!(!student.displayable());
    }

    #[test]
    fn test_displayable_needs_name_and_major() {
        let mut student: Student =
            serde_json::from_str(r#"{"_id":"1","name":"Ada","major":"CS"}"#).unwrap();
        assert!(student.displayable());
        student.major.clear();
        assert!(!student.displayable());
    }

    #[test]
    fn test_form_student_wire_shape() {
        let payload = FormStudent {
            name: "Ada".to_string(),
            age: 21,
            major: "CS".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Ada", "age": 21, "major": "CS"})
        );
    }

    #[test]
    fn test_session_decodes_login_response() {
        let session: Session = serde_json::from_str(
            r#"{"token":"abc.def","user":{"_id":"u1","username":"ada","role":"instructor"}}"#,
        )
        .unwrap();
        assert_eq!(session.token.as_str(), "abc.def");
        assert_eq!(session.user.role, Role::Instructor);
    }

    #[test]
    fn test_role_round_trips_lowercase() {
        assert_eq!(
            serde_json::to_value(Role::Instructor).unwrap(),
            serde_json::json!("instructor")
        );
        let role: Role = serde_json::from_str(r#""student""#).unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let session: Session = serde_json::from_str(
            r#"{"token":"secret-value","user":{"_id":"u1","username":"ada","role":"student"}}"#,
        )
        .unwrap();
        let printed = format!("{:?}", session);
        assert!(!printed.contains("secret-value"));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = Credentials {
            email: "ada@example.edu".to_string(),
            password: "hunter2".to_string(),
        };
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("ada@example.edu"));
        assert!(!printed.contains("hunter2"));
    }
}
