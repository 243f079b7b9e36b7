//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (requesting data for its scope,
//! releasing it on teardown) and delegates rendering to `components`.

pub mod home;
pub mod parking;
