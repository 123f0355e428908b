use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::server::{
    admin::{default_descriptors, AdminSite},
    config::Config,
    error::Error,
};

/// Install the global `tracing` subscriber using the configured filter
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log filter {:?} ({}), falling back to \"info\"",
            config.log_filter, e
        );
        EnvFilter::new("info")
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(config.database_sql_logging);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Build the admin registry handed to the admin console
pub fn build_admin_site() -> Result<AdminSite, Error> {
    let site = AdminSite::new(default_descriptors())?;

    for entity in site.entities() {
        tracing::debug!(
            entity = entity.name,
            table = entity.table,
            fields = entity.fields.len(),
            "Registered admin entity"
        );
    }

    Ok(site)
}

#[cfg(test)]
mod tests {
    use sea_orm::DbBackend;

    use super::*;

    fn sqlite_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            database_sql_logging: false,
            log_filter: "info".to_string(),
        }
    }

    /// Expect migrations to apply to an empty database
    #[tokio::test]
    async fn test_connect_runs_migrations() -> Result<(), Error> {
        let db = connect_to_database(&sqlite_config()).await?;

        assert_eq!(db.get_database_backend(), DbBackend::Sqlite);
        let status = Migrator::get_pending_migrations(&db).await?;
        assert!(status.is_empty());

        Ok(())
    }

    /// Expect an unreachable database URL to surface as an error rather than a panic
    #[tokio::test]
    async fn test_connect_invalid_url() {
        let mut config = sqlite_config();
        config.database_url = "notadb://nowhere".to_string();

        let result = connect_to_database(&config).await;

        assert!(matches!(result, Err(Error::DbErr(_))));
    }

    #[test]
    fn test_build_admin_site() {
        let site = build_admin_site().unwrap();

        assert_eq!(site.len(), 7);
    }
}
