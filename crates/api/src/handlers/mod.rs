//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `vigil_db` (and to
//! the pure mapping functions in `vigil_core`) and map errors via
//! [`crate::error::AppError`].

pub mod camera;
pub mod incident;
pub mod placeholder;
pub mod timeline;
