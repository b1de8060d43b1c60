//! Administrative services for first-admin setup.
//!
//! When the application starts without any admin account, a temporary registration
//! code is generated and logged so the operator can create the first admin.

pub mod code;
