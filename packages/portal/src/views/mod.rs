mod login;
pub use login::Login;

mod directory;
pub use directory::Directory;

/// Fixed root of the portal backend.
pub(crate) const API_BASE: &str = "http://localhost:5000";

pub(crate) fn make_api() -> api::PortalApi {
    api::PortalApi::new(API_BASE)
}
