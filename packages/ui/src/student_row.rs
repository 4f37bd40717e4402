use dioxus::prelude::*;
use store::{DraftField, Student, StudentDraft};

use crate::components::{Button, ButtonVariant, Input};

/// One row of the student list: read-only display, or the edit form when
/// `editing` carries this row's working copy of the fields.
#[component]
pub fn StudentRow(
    student: Student,
    editing: Option<StudentDraft>,
    on_edit: EventHandler<Student>,
    on_edit_change: EventHandler<(DraftField, String)>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
    on_delete: EventHandler<String>,
) -> Element {
    let record = student.clone();
    let delete_id = student.id.clone();

    rsx! {
        li {
            class: "student-row",
            if let Some(draft) = editing {
                div {
                    class: "student-edit",
                    Input {
                        r#type: "text",
                        value: "{draft.name}",
                        oninput: move |evt: FormEvent| on_edit_change.call((DraftField::Name, evt.value())),
                    }
                    Input {
                        r#type: "number",
                        value: "{draft.age}",
                        oninput: move |evt: FormEvent| on_edit_change.call((DraftField::Age, evt.value())),
                    }
                    Input {
                        r#type: "text",
                        value: "{draft.major}",
                        oninput: move |evt: FormEvent| on_edit_change.call((DraftField::Major, evt.value())),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_save.call(()),
                        "Save"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            } else {
                div {
                    class: "student-info",
                    strong { "{student.name}" }
                    " — {student.age} years old, Major: {student.major} "
                    span {
                        class: "student-enrolled",
                        if student.enrolled { "(Enrolled)" } else { "(Not Enrolled)" }
                    }
                }
                div {
                    class: "student-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_edit.call(record.clone()),
                        "Edit"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}
