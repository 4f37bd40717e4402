use dioxus::prelude::*;
use store::{DraftField, StudentDraft};

use crate::components::{Button, ButtonVariant, Input};

/// Inline form for adding a student.
///
/// The draft lives with the caller; keystrokes and the submit click are
/// reported upward so the caller decides what a valid submission is.
#[component]
pub fn StudentForm(
    draft: StudentDraft,
    on_change: EventHandler<(DraftField, String)>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "student-form",
            Input {
                r#type: "text",
                placeholder: "Name",
                value: "{draft.name}",
                oninput: move |evt: FormEvent| on_change.call((DraftField::Name, evt.value())),
            }
            Input {
                r#type: "number",
                placeholder: "Age",
                value: "{draft.age}",
                oninput: move |evt: FormEvent| on_change.call((DraftField::Age, evt.value())),
            }
            Input {
                r#type: "text",
                placeholder: "Major",
                value: "{draft.major}",
                oninput: move |evt: FormEvent| on_change.call((DraftField::Major, evt.value())),
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_submit.call(()),
                "Add Student"
            }
        }
    }
}
