//! Reusable view components: application chrome, pagination, and the
//! router-facing guard wrappers.

pub mod layout;
pub mod pagination;
pub mod route_guards;
pub mod status_badge;
