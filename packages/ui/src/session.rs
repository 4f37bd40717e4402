//! Session context and hooks for the portal.

use dioxus::prelude::*;
use store::PortalState;

/// Get the shared portal state.
/// Returns a signal that updates as the session and the lists change.
pub fn use_session() -> Signal<PortalState> {
    use_context::<Signal<PortalState>>()
}

/// Provider component that owns the portal state.
/// Wrap the app with this component so every route sees the same session.
/// Nothing is persisted; a page load always starts out anonymous.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(PortalState::default);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}
