//! Login page view with the email/password form.

use dioxus::prelude::*;

use store::{Credentials, PortalAction};
use ui::components::{Button, ButtonVariant, Input};
use ui::use_session;

use crate::views::make_api;
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    // Already signed in: straight to the directory.
    if session().session.is_authenticated() {
        nav.replace(Route::Directory {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || p.is_empty() {
                session.write().apply(PortalAction::LoginFailed(
                    "Email and password are required".to_string(),
                ));
                return;
            }

            session.write().apply(PortalAction::LoginStarted);
            let credentials = Credentials {
                email: e,
                password: p,
            };
            match make_api().login(&credentials).await {
                Ok(granted) => {
                    session.write().apply(PortalAction::LoginSucceeded(granted));
                    nav.replace(Route::Directory {});
                }
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    session
                        .write()
                        .apply(PortalAction::LoginFailed(e.to_string()));
                }
            }
        });
    };

    let state = session();

    rsx! {
        div {
            class: "login-page",

            h1 { "Campus Portal" }
            p { class: "login-hint", "Sign in to your account" }

            form {
                class: "login-form",
                onsubmit: handle_login,

                if let Some(err) = &state.login_error {
                    div { class: "form-error", "{err}" }
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                Input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: state.logging_in,
                    if state.logging_in { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
