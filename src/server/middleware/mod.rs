//! Request authentication.
//!
//! - `token` - Bearer token extraction plus JWT issuing and verification
//! - `auth` - `AuthGuard` resolving the token's user and checking permissions

pub mod auth;
pub mod token;

#[cfg(test)]
mod test;
