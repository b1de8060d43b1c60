//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let event = factory::event::create_event(&db).await?;
//!
//! let concluded = factory::event::EventFactory::new(&db)
//!     .branch_tags(["CSE", "ECE"])
//!     .winner(WinnerPosition::First, "CSE", Some(5.0))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create admin and public users
//! - `event` - Create events with branch tags and winners
//! - `leaderboard_override` - Create manual leaderboard overrides
//! - `announcement` - Create announcements
//! - `comment` - Create announcement comments
//! - `photo` - Create gallery photos
//! - `helpers` - Shared ID counter and multi-entity helpers

pub mod announcement;
pub mod comment;
pub mod event;
pub mod helpers;
pub mod leaderboard_override;
pub mod photo;
pub mod user;

pub use announcement::create_announcement;
pub use comment::create_comment;
pub use event::{create_concluded_event, create_event};
pub use leaderboard_override::create_override;
pub use photo::create_photo;
pub use user::{create_admin, create_user};
