use dioxus::prelude::*;

use api::RosterApi;
use store::{DraftField, RosterAction, RosterState, Student};
use ui::components::{Button, ButtonVariant};
use ui::{StudentForm, StudentRow};

/// Root of the roster service, overridable at build time for deployments.
fn api_base() -> &'static str {
    option_env!("ROSTER_API_BASE").unwrap_or("http://localhost:4000")
}

fn make_api() -> RosterApi {
    RosterApi::new(api_base())
}

/// Issue the full list fetch. Success replaces the collection and ends any
/// error screen; failure replaces the screen with a fresh error.
async fn refresh(mut roster: Signal<RosterState>) {
    roster.write().apply(RosterAction::FetchStarted);
    match make_api().list_students().await {
        Ok(students) => roster.write().apply(RosterAction::Loaded(students)),
        Err(e) => {
            tracing::error!("Failed to load students: {}", e);
            roster.write().apply(RosterAction::LoadFailed(e.to_string()));
        }
    }
}

#[component]
pub fn Students() -> Element {
    let mut roster = use_signal(RosterState::default);

    // Load the list on mount.
    let _loader = use_resource(move || async move {
        refresh(roster).await;
    });

    let handle_draft_change = move |(field, value): (DraftField, String)| {
        roster.write().apply(RosterAction::DraftChanged(field, value));
    };

    let handle_create = move |_| {
        // Invalid drafts never leave the client; the raw text stays put.
        let Some(payload) = roster().draft.validated() else {
            return;
        };
        spawn(async move {
            match make_api().create_student(&payload).await {
                Ok(_) => {
                    roster.write().apply(RosterAction::DraftCleared);
                    refresh(roster).await;
                }
                Err(e) => {
                    tracing::error!("Failed to create student: {}", e);
                    roster
                        .write()
                        .apply(RosterAction::MutationFailed(e.to_string()));
                }
            }
        });
    };

    let handle_edit = move |student: Student| {
        roster.write().apply(RosterAction::EditStarted(student));
    };

    let handle_edit_change = move |(field, value): (DraftField, String)| {
        roster.write().apply(RosterAction::EditChanged(field, value));
    };

    let handle_cancel = move |_| {
        roster.write().apply(RosterAction::EditCancelled);
    };

    let handle_save = move |_| {
        let Some(edit) = roster().editing else {
            return;
        };
        let Some(payload) = edit.draft.validated() else {
            return;
        };
        let id = edit.id;
        spawn(async move {
            match make_api().update_student(&id, &payload).await {
                Ok(_) => {
                    roster.write().apply(RosterAction::EditFinished);
                    refresh(roster).await;
                }
                Err(e) => {
                    tracing::error!("Failed to update student {}: {}", id, e);
                    roster
                        .write()
                        .apply(RosterAction::MutationFailed(e.to_string()));
                }
            }
        });
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            match make_api().delete_student(&id).await {
                Ok(()) => refresh(roster).await,
                Err(e) => {
                    tracing::error!("Failed to delete student {}: {}", id, e);
                    roster
                        .write()
                        .apply(RosterAction::MutationFailed(e.to_string()));
                }
            }
        });
    };

    let handle_retry = move |_| {
        spawn(async move {
            refresh(roster).await;
        });
    };

    let state = roster();

    if state.loading {
        return rsx! {
            div {
                class: "roster",
                p { class: "status", "Loading students..." }
            }
        };
    }

    if let Some(error) = &state.error {
        return rsx! {
            div {
                class: "roster",
                div {
                    class: "status status-error",
                    p { "Error: {error}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: handle_retry,
                        "Retry"
                    }
                }
            }
        };
    }

    rsx! {
        div {
            class: "roster",

            h1 { "Student Roster" }

            StudentForm {
                draft: state.draft.clone(),
                on_change: handle_draft_change,
                on_submit: handle_create,
            }

            if state.visible().count() == 0 {
                p { class: "status", "No students found." }
            } else {
                ul {
                    class: "student-list",
                    for student in state.visible() {
                        StudentRow {
                            key: "{student.id}",
                            student: student.clone(),
                            editing: state.edit_draft(&student.id),
                            on_edit: handle_edit,
                            on_edit_change: handle_edit_change,
                            on_save: handle_save,
                            on_cancel: handle_cancel,
                            on_delete: handle_delete,
                        }
                    }
                }
            }
        }
    }
}
