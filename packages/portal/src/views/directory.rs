//! Directory view: the read-only student list plus the instructor list with
//! rename-in-place.

use dioxus::prelude::*;

use store::PortalAction;
use ui::{use_session, InstructorRow};

use crate::views::make_api;
use crate::Route;

#[component]
pub fn Directory() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    // The directory only exists signed in.
    if !session().session.is_authenticated() {
        nav.replace(Route::Login {});
    }

    // One combined fetch per signed-in mount. Reads peek so later state
    // changes do not re-trigger it. A failed list is logged and leaves
    // whatever already loaded in place.
    let _loader = use_resource(move || async move {
        let token = session.peek().session.token().cloned();
        let Some(token) = token else {
            return;
        };
        let api = make_api();
        match api.list_students(&token).await {
            Ok(students) => session.write().apply(PortalAction::StudentsLoaded(students)),
            Err(e) => tracing::error!("Failed to load students: {}", e),
        }
        match api.list_instructors(&token).await {
            Ok(instructors) => session
                .write()
                .apply(PortalAction::InstructorsLoaded(instructors)),
            Err(e) => tracing::error!("Failed to load instructors: {}", e),
        }
    });

    let handle_rename_change = move |(id, name): (String, String)| {
        session
            .write()
            .apply(PortalAction::RenameChanged { id, name });
    };

    let handle_rename_save = move |(id, name): (String, String)| {
        spawn(async move {
            let token = session.peek().session.token().cloned();
            let Some(token) = token else {
                return;
            };
            match make_api().rename_instructor(&token, &id, &name).await {
                Ok(updated) => session.write().apply(PortalAction::RenameSucceeded(updated)),
                Err(e) => {
                    // List and edit field both stay as they were.
                    tracing::error!("Failed to rename instructor {}: {}", id, e);
                }
            }
        });
    };

    let state = session();
    let username = state
        .session
        .user()
        .map(|user| user.username.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "directory",

            header {
                class: "directory-header",
                h1 { "Campus Portal" }
                span { class: "directory-user", "Signed in as {username}" }
            }

            section {
                class: "directory-section",
                h2 { "Students" }
                if state.students.is_empty() {
                    p { class: "status", "No students yet." }
                } else {
                    ul {
                        class: "student-list",
                        for student in state.students.iter() {
                            li {
                                key: "{student.id}",
                                class: "student-row",
                                div {
                                    class: "student-info",
                                    strong { "{student.name}" }
                                    " — {student.age} years old, Major: {student.major} "
                                    span {
                                        class: "student-enrolled",
                                        if student.enrolled { "(Enrolled)" } else { "(Not Enrolled)" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "directory-section",
                h2 { "Instructors" }
                if state.instructors.is_empty() {
                    p { class: "status", "No instructors yet." }
                } else {
                    ul {
                        class: "instructor-list",
                        for instructor in state.instructors.iter() {
                            InstructorRow {
                                key: "{instructor.id}",
                                instructor: instructor.clone(),
                                draft: state.rename_draft(&instructor.id).to_string(),
                                on_change: handle_rename_change,
                                on_save: handle_rename_save,
                            }
                        }
                    }
                }
            }
        }
    }
}
