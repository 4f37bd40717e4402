//! # API crate — typed HTTP clients for the campus REST services
//!
//! Both frontends talk to backends that live outside this workspace; this
//! crate is the only place requests get built. One client per app:
//!
//! | Client | Auth | Surface |
//! |--------|------|---------|
//! | [`RosterApi`] | none | student CRUD under a configurable base URL |
//! | [`PortalApi`] | bearer token | login, read-only student and instructor lists, instructor rename |
//!
//! Every call returns `Result<T, ApiError>` with exactly two failure
//! categories: the request never completed, or it completed with a non-2xx
//! status. Callers treat both the same way, so the distinction stays inside
//! the error message.

mod error;
pub use error::ApiError;

mod roster;
pub use roster::RosterApi;

mod portal;
pub use portal::PortalApi;

pub use store::{Credentials, FormStudent, Instructor, Session, Student};
