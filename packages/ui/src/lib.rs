//! This crate contains all shared UI for the workspace.

pub mod components;

mod session;
pub use session::{use_session, SessionProvider};

mod student_form;
pub use student_form::StudentForm;

mod student_row;
pub use student_row::StudentRow;

mod instructor_row;
pub use instructor_row::InstructorRow;
