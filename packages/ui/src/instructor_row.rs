use dioxus::prelude::*;
use store::Instructor;

use crate::components::{Button, ButtonVariant, Input};

/// One row of the instructor list with its rename-in-place field.
///
/// `draft` is the typed replacement name while this row is the active rename
/// target, and empty otherwise; the current name doubles as the placeholder.
/// Save reports the id and the text together so the pairing is fixed at the
/// moment of the click.
#[component]
pub fn InstructorRow(
    instructor: Instructor,
    draft: String,
    on_change: EventHandler<(String, String)>,
    on_save: EventHandler<(String, String)>,
) -> Element {
    let change_id = instructor.id.clone();
    let save_id = instructor.id.clone();
    let save_name = draft.clone();
    let empty = draft.trim().is_empty();

    rsx! {
        li {
            class: "instructor-row",
            span { class: "instructor-name", "{instructor.name}" }
            Input {
                r#type: "text",
                placeholder: "{instructor.name}",
                value: "{draft}",
                oninput: move |evt: FormEvent| on_change.call((change_id.clone(), evt.value())),
            }
            Button {
                variant: ButtonVariant::Primary,
                disabled: empty,
                onclick: move |_| on_save.call((save_id.clone(), save_name.trim().to_string())),
                "Save"
            }
        }
    }
}
