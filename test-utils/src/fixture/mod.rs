//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and supply the default
//! values used by the factories. Unlike factories, fixtures do NOT insert data into
//! the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let event = fixture::event::entity();
//!
//! let concluded = fixture::event::entity_builder()
//!     .status(EventStatus::Concluded)
//!     .build();
//! ```

pub mod event;
pub mod user;

pub use event::{entity as event_entity, entity_builder as event_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
