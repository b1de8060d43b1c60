use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Announcement, Comment, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Announcement)
///     .with_table(Comment)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for event and leaderboard operations.
    ///
    /// Adds, in dependency order:
    /// - Event
    /// - EventBranchTag
    /// - EventWinner
    /// - LeaderboardOverride
    pub fn with_event_tables(self) -> Self {
        self.with_table(Event)
            .with_table(EventBranchTag)
            .with_table(EventWinner)
            .with_table(LeaderboardOverride)
    }

    /// Adds all tables required for announcement and comment operations.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Announcement
    /// - Comment
    pub fn with_announcement_tables(self) -> Self {
        self.with_table(User)
            .with_table(Announcement)
            .with_table(Comment)
    }

    /// Adds all tables required for photo gallery operations.
    ///
    /// Equivalent to `with_event_tables()` followed by Photo and PhotoTag.
    pub fn with_photo_tables(self) -> Self {
        self.with_event_tables()
            .with_table(Photo)
            .with_table(PhotoTag)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
