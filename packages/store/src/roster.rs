//! State for the student roster screen.
//!
//! The view owns a single [`RosterState`] and routes every change through
//! [`RosterState::apply`]. Network calls stay in the view layer; their
//! outcomes come back here as [`RosterAction`]s, so the transitions are plain
//! functions that tests can drive without a server.

use crate::models::{FormStudent, Student};

/// One of the three editable student fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Age,
    Major,
}

/// Raw text of the student form fields. Age stays text until validation so
/// partially-typed input survives re-renders unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentDraft {
    pub name: String,
    pub age: String,
    pub major: String,
}

impl StudentDraft {
    /// Seed a draft from an existing record, for entering edit mode.
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            age: student.age.to_string(),
            major: student.major.clone(),
        }
    }

    /// Validate into a request payload: name and major non-empty after
    /// trimming, age parsing as an unsigned integer. `None` leaves the raw
    /// draft untouched for the user to fix.
    pub fn validated(&self) -> Option<FormStudent> {
        let name = self.name.trim();
        let major = self.major.trim();
        let age = self.age.trim().parse::<u32>().ok()?;
        if name.is_empty() || major.is_empty() {
            return None;
        }
        Some(FormStudent {
            name: name.to_string(),
            age,
            major: major.to_string(),
        })
    }

    fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Age => self.age = value,
            DraftField::Major => self.major = value,
        }
    }
}

/// The row currently in edit mode and its working copy of the fields.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentEdit {
    pub id: String,
    pub draft: StudentDraft,
}

/// Everything the roster screen renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct RosterState {
    pub students: Vec<Student>,
    pub loading: bool,
    pub error: Option<String>,
    /// The create form at the top of the screen.
    pub draft: StudentDraft,
    /// At most one row is in edit mode at a time.
    pub editing: Option<StudentEdit>,
}

impl Default for RosterState {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            // First paint is the loading screen; the initial fetch is
            // already on its way.
            loading: true,
            error: None,
            draft: StudentDraft::default(),
            editing: None,
        }
    }
}

/// Every mutation of [`RosterState`]. UI events and request outcomes both
/// arrive through here.
#[derive(Clone, Debug, PartialEq)]
pub enum RosterAction {
    /// A list fetch was issued.
    FetchStarted,
    /// A list fetch succeeded; the collection is replaced wholesale.
    Loaded(Vec<Student>),
    /// A list fetch failed.
    LoadFailed(String),
    /// The create form changed.
    DraftChanged(DraftField, String),
    /// The create form is reset after a successful create.
    DraftCleared,
    /// A row entered edit mode, seeded from the record.
    EditStarted(Student),
    /// The edit form changed.
    EditChanged(DraftField, String),
    /// Edit mode left without saving; the record is untouched.
    EditCancelled,
    /// Edit mode left after the server accepted the update.
    EditFinished,
    /// A create, update or delete request failed.
    MutationFailed(String),
}

impl RosterState {
    /// Rows worth rendering. Records missing a name or a major are hidden
    /// from the list but stay in the collection.
    pub fn visible(&self) -> impl Iterator<Item = &Student> {
        self.students.iter().filter(|s| s.displayable())
    }

    /// The working copy of the fields if `id` is the row in edit mode.
    pub fn edit_draft(&self, id: &str) -> Option<StudentDraft> {
        self.editing
            .as_ref()
            .filter(|edit| edit.id == id)
            .map(|edit| edit.draft.clone())
    }

    pub fn apply(&mut self, action: RosterAction) {
        match action {
            RosterAction::FetchStarted => {
                self.loading = true;
            }
            RosterAction::Loaded(students) => {
                self.students = students;
                self.loading = false;
                // A successful fetch ends the error screen.
                self.error = None;
            }
            RosterAction::LoadFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            RosterAction::DraftChanged(field, value) => {
                self.draft.set(field, value);
            }
            RosterAction::DraftCleared => {
                self.draft = StudentDraft::default();
            }
            RosterAction::EditStarted(student) => {
                self.editing = Some(StudentEdit {
                    id: student.id.clone(),
                    draft: StudentDraft::from_student(&student),
                });
            }
            RosterAction::EditChanged(field, value) => {
                if let Some(edit) = self.editing.as_mut() {
                    edit.draft.set(field, value);
                }
            }
            RosterAction::EditCancelled | RosterAction::EditFinished => {
                self.editing = None;
            }
            RosterAction::MutationFailed(message) => {
                self.error = Some(message);
            }
        }
    }
}
