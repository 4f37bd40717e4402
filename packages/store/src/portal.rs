//! State for the authenticated campus portal.

use crate::models::{AuthToken, Instructor, Session, Student, User};

/// The session machine. There is no logout transition; the only way back to
/// `Anonymous` is a fresh page load, which starts from `Default` again.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// The bearer token, present only once authenticated.
    pub fn token(&self) -> Option<&AuthToken> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated(session) => Some(&session.token),
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated(session) => Some(&session.user),
        }
    }
}

/// The rename target and its working text.
///
/// Keying the draft by row id makes the save target unambiguous: typing into
/// a different row moves the target and the text together, so a save can
/// never pair one row's text with another row's id.
#[derive(Clone, Debug, PartialEq)]
pub struct InstructorEdit {
    pub id: String,
    pub name: String,
}

/// Everything the portal renders from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortalState {
    pub session: SessionState,
    pub logging_in: bool,
    pub login_error: Option<String>,
    pub students: Vec<Student>,
    pub instructors: Vec<Instructor>,
    /// The one active rename field, if any.
    pub editing: Option<InstructorEdit>,
}

/// Every mutation of [`PortalState`].
#[derive(Clone, Debug, PartialEq)]
pub enum PortalAction {
    /// Credentials were submitted.
    LoginStarted,
    /// The login endpoint accepted them.
    LoginSucceeded(Session),
    /// The login endpoint rejected them or was unreachable.
    LoginFailed(String),
    /// The student list arrived.
    StudentsLoaded(Vec<Student>),
    /// The instructor list arrived.
    InstructorsLoaded(Vec<Instructor>),
    /// Text typed into one instructor's rename field; makes that row the
    /// rename target.
    RenameChanged { id: String, name: String },
    /// The server accepted a rename. Exactly that record is patched in
    /// place, no refetch.
    RenameSucceeded(Instructor),
}

impl PortalState {
    /// The text of a row's rename field: the typed draft when this row is
    /// the target, empty otherwise.
    pub fn rename_draft(&self, id: &str) -> &str {
        match &self.editing {
            Some(edit) if edit.id == id => &edit.name,
            _ => "",
        }
    }

    pub fn apply(&mut self, action: PortalAction) {
        match action {
            PortalAction::LoginStarted => {
                self.logging_in = true;
                self.login_error = None;
            }
            PortalAction::LoginSucceeded(session) => {
                self.session = SessionState::Authenticated(session);
                self.logging_in = false;
                self.login_error = None;
            }
            PortalAction::LoginFailed(message) => {
                // Still Anonymous; the lists stay empty.
                self.logging_in = false;
                self.login_error = Some(message);
            }
            PortalAction::StudentsLoaded(students) => {
                self.students = students;
            }
            PortalAction::InstructorsLoaded(instructors) => {
                self.instructors = instructors;
            }
            PortalAction::RenameChanged { id, name } => {
                self.editing = Some(InstructorEdit { id, name });
            }
            PortalAction::RenameSucceeded(updated) => {
                if let Some(slot) = self
                    .instructors
                    .iter_mut()
                    .find(|instructor| instructor.id == updated.id)
                {
                    *slot = updated;
                }
                self.editing = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn session() -> Session {
        Session {
            token: AuthToken::new("tok"),
            user: User {
                id: "u1".to_string(),
                username: "ada".to_string(),
                role: Role::Instructor,
            },
        }
    }

    fn instructor(id: &str, name: &str) -> Instructor {
        Instructor {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_starts_anonymous() {
        let state = PortalState::default();
        assert!(!state.session.is_authenticated());
        assert!(state.session.token().is_none());
        assert!(state.students.is_empty());
        assert!(state.instructors.is_empty());
    }

    #[test]
    fn test_login_success_authenticates() {
        let mut state = PortalState::default();
        state.apply(PortalAction::LoginStarted);
        assert!(state.logging_in);

        state.apply(PortalAction::LoginSucceeded(session()));
        assert!(state.session.is_authenticated());
        assert!(!state.logging_in);
        assert_eq!(state.session.token().unwrap().as_str(), "tok");
        assert_eq!(state.session.user().unwrap().username, "ada");
    }

    #[test]
    fn test_login_failure_stays_anonymous() {
        let mut state = PortalState::default();
        state.apply(PortalAction::LoginStarted);
        state.apply(PortalAction::LoginFailed("401".to_string()));

        assert!(!state.session.is_authenticated());
        assert!(!state.logging_in);
        assert_eq!(state.login_error.as_deref(), Some("401"));
        // Nothing ever gets fetched without the transition.
        assert!(state.students.is_empty());
        assert!(state.instructors.is_empty());
    }

    #[test]
    fn test_retry_clears_previous_login_error() {
        let mut state = PortalState::default();
        state.apply(PortalAction::LoginFailed("401".to_string()));
        state.apply(PortalAction::LoginStarted);
        assert!(state.login_error.is_none());
    }

    #[test]
    fn test_login_success_clears_previous_error() {
        let mut state = PortalState::default();
        state.apply(PortalAction::LoginFailed("401".to_string()));
        state.apply(PortalAction::LoginSucceeded(session()));
        assert!(state.login_error.is_none());
        assert!(state.session.is_authenticated());
    }

    #[test]
    fn test_lists_load_independently() {
        let mut state = PortalState::default();
        state.apply(PortalAction::InstructorsLoaded(vec![instructor(
            "i1", "Turing",
        )]));
        // The student fetch failing leaves the instructor list alone.
        assert!(state.students.is_empty());
        assert_eq!(state.instructors.len(), 1);
    }

    #[test]
    fn test_rename_draft_is_scoped_to_target() {
        let mut state = PortalState::default();
        state.apply(PortalAction::RenameChanged {
            id: "i1".to_string(),
            name: "Dr. T".to_string(),
        });
        assert_eq!(state.rename_draft("i1"), "Dr. T");
        assert_eq!(state.rename_draft("i2"), "");
    }

    #[test]
    fn test_typing_elsewhere_moves_the_target() {
        let mut state = PortalState::default();
        state.apply(PortalAction::RenameChanged {
            id: "i1".to_string(),
            name: "Dr. T".to_string(),
        });
        state.apply(PortalAction::RenameChanged {
            id: "i2".to_string(),
            name: "G".to_string(),
        });

        // The old target's text is gone with it; a save now can only pair
        // "G" with "i2".
        assert_eq!(state.rename_draft("i1"), "");
        assert_eq!(state.rename_draft("i2"), "G");
    }

    #[test]
    fn test_rename_success_patches_in_place() {
        let mut state = PortalState::default();
        state.apply(PortalAction::InstructorsLoaded(vec![
            instructor("i1", "Turing"),
            instructor("i2", "Hopper"),
        ]));
        state.apply(PortalAction::RenameChanged {
            id: "i2".to_string(),
            name: "Adm. Hopper".to_string(),
        });
        state.apply(PortalAction::RenameSucceeded(instructor("i2", "Adm. Hopper")));

        let names: Vec<_> = state.instructors.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Turing", "Adm. Hopper"]);
        assert!(state.editing.is_none());
    }

    #[test]
    fn test_rename_success_for_missing_row_is_noop() {
        let mut state = PortalState::default();
        state.apply(PortalAction::InstructorsLoaded(vec![instructor(
            "i1", "Turing",
        )]));
        state.apply(PortalAction::RenameSucceeded(instructor("ix", "Ghost")));
        assert_eq!(state.instructors[0].name, "Turing");
    }
}
