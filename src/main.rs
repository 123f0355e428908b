use campus_events::server::{config::Config, model::app::AppState, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_logging(&config);

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to prepare database: {}", e);
            std::process::exit(1);
        }
    };

    let admin = match startup::build_admin_site() {
        Ok(admin) => admin,
        Err(e) => {
            tracing::error!("Failed to build admin registry: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(db, admin);

    let entities: Vec<&str> = state.admin.entities().map(|entity| entity.name).collect();
    tracing::info!(
        "Campus event store ready, admin entities: {}",
        entities.join(", ")
    );
}
