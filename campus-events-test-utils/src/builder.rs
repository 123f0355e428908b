//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use entity::sea_orm_active_enums::Role;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_campus_tables: bool,

    // Database fixtures to insert
    users: Vec<(String, Role)>,
    venues: Vec<(String, i32)>,      // (name, capacity)
    resources: Vec<(String, i32)>,   // (name, total_quantity)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_campus_tables: false,
            users: Vec::new(),
            venues: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Add every campus table to the test database.
    ///
    /// Tables are created in dependency order: CampusUser, Venue, Resource, Event,
    /// EventCoordinator, EventResourceRequest, Registration, Feedback and EventSuccessReport.
    pub fn with_campus_tables(mut self) -> Self {
        self.include_campus_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use campus_events_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), campus_events_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(CampusUser)
    ///     .with_table(Venue)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the given username and role during `build()`.
    pub fn with_user(mut self, username: impl Into<String>, role: Role) -> Self {
        self.users.push((username.into(), role));
        self
    }

    /// Insert a venue during `build()`.
    pub fn with_venue(mut self, name: impl Into<String>, capacity: i32) -> Self {
        self.venues.push((name.into(), capacity));
        self
    }

    /// Insert a resource during `build()`.
    pub fn with_resource(mut self, name: impl Into<String>, total_quantity: i32) -> Self {
        self.resources.push((name.into(), total_quantity));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (campus tables if specified, then custom tables)
    /// 2. Inserts users, venues and resources
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_campus_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::CampusUser),
                schema.create_table_from_entity(entity::prelude::Venue),
                schema.create_table_from_entity(entity::prelude::Resource),
                schema.create_table_from_entity(entity::prelude::Event),
                schema.create_table_from_entity(entity::prelude::EventCoordinator),
                schema.create_table_from_entity(entity::prelude::EventResourceRequest),
                schema.create_table_from_entity(entity::prelude::Registration),
                schema.create_table_from_entity(entity::prelude::Feedback),
                schema.create_table_from_entity(entity::prelude::EventSuccessReport),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert fixtures
        for (username, role) in self.users {
            setup.user().insert_user(&username, role).await?;
        }

        for (name, capacity) in self.venues {
            setup.venue().insert_venue(&name, capacity).await?;
        }

        for (name, total_quantity) in self.resources {
            setup.venue().insert_resource(&name, total_quantity).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
