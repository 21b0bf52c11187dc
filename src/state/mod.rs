//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The session store is the only cross-request shared state in the
//! application; everything else lives in page-local signals.

pub mod session;
