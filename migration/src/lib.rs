pub use sea_orm_migration::prelude::*;

mod m20261015_000001_campus_user;
mod m20261015_000002_venue;
mod m20261015_000003_resource;
mod m20261015_000004_event;
mod m20261015_000005_event_coordinator;
mod m20261015_000006_event_resource_request;
mod m20261015_000007_registration;
mod m20261015_000008_feedback;
mod m20261015_000009_event_success_report;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261015_000001_campus_user::Migration),
            Box::new(m20261015_000002_venue::Migration),
            Box::new(m20261015_000003_resource::Migration),
            Box::new(m20261015_000004_event::Migration),
            Box::new(m20261015_000005_event_coordinator::Migration),
            Box::new(m20261015_000006_event_resource_request::Migration),
            Box::new(m20261015_000007_registration::Migration),
            Box::new(m20261015_000008_feedback::Migration),
            Box::new(m20261015_000009_event_success_report::Migration),
        ]
    }
}
