pub mod models;

mod roster;
pub use roster::{DraftField, RosterAction, RosterState, StudentDraft, StudentEdit};

mod portal;
pub use portal::{InstructorEdit, PortalAction, PortalState, SessionState};

pub use models::{
    AuthToken, Credentials, FormStudent, Instructor, Role, Session, Student, User,
};
