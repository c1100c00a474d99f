//! Products API - REST server over MongoDB, PostgreSQL or memory

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::MongoConfig;
use domain_products::profiling::{MongoProfilingRepository, ProfilingService};
use eyre::WrapErr;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::{Config, StoreBackend};
use state::{AppState, ProductStore};

/// Mongo settings the selected features need, or an error naming what is missing.
fn mongo_config(config: &Config) -> eyre::Result<&MongoConfig> {
    config
        .mongodb
        .as_ref()
        .ok_or_else(|| eyre::eyre!("MongoDB settings are required for store {}", config.store))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env().wrap_err("Failed to load configuration")?;
    init_tracing(&config.environment);

    info!(store = %config.store, "Starting {} v{}", config.app.name, config.app.version);

    let mongo_client = match &config.mongodb {
        Some(mongo) => {
            info!(url = %mongo.redacted_url(), "Connecting to MongoDB");
            let client = database::mongodb::connect_from_config_with_retry(mongo, None)
                .await
                .wrap_err("Failed to connect to MongoDB")?;
            Some(client)
        }
        None => None,
    };

    let store = match config.store {
        StoreBackend::Mongodb => {
            let mongo = mongo_config(&config)?;
            let client = mongo_client
                .as_ref()
                .ok_or_else(|| eyre::eyre!("MongoDB client was not initialised"))?;
            info!(database = mongo.database(), "Using MongoDB product store");
            ProductStore::Mongo(client.database(mongo.database()))
        }
        StoreBackend::Postgres => {
            let postgres = config
                .postgres
                .as_ref()
                .ok_or_else(|| eyre::eyre!("PostgreSQL settings are required for store postgres"))?;
            let db = database::postgres::connect_from_config_with_retry(postgres, None)
                .await
                .wrap_err("Failed to connect to PostgreSQL")?;

            if config.run_migrations {
                database::postgres::run_migrations::<migration::Migrator>(&db)
                    .await
                    .wrap_err("Failed to run migrations")?;
            }
            info!("Using PostgreSQL product store");
            ProductStore::Postgres(db)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory product store; data is lost on restart");
            ProductStore::Memory
        }
    };

    let profiling = match (&mongo_client, config.profiling.enabled) {
        (Some(client), true) => {
            let db = client.database(mongo_config(&config)?.database());
            info!(collection = %config.profiling.collection, "Profiling enabled");
            ProfilingService::new(
                MongoProfilingRepository::with_collection(&db, &config.profiling.collection),
                config.profiling.write_timeout,
            )
        }
        _ => {
            info!("Profiling disabled");
            ProfilingService::disabled()
        }
    };

    let state = AppState {
        config: config.clone(),
        store,
        mongo_client,
        profiling,
    };

    let router = create_router::<openapi::ApiDoc>(api::routes(&state), &config.cors).await?;
    let app = router
        .merge(health_router(config.app))
        .merge(api::health::router(state.clone()));

    info!("Starting Products API on {}", config.server.address());

    create_production_app(app, &config.server, async move {
        if let Some(client) = state.mongo_client {
            info!("Shutting down: closing MongoDB connections");
            client.shutdown().await;
        }
        if let ProductStore::Postgres(db) = state.store {
            info!("Shutting down: closing PostgreSQL pool");
            if let Err(e) = db.close().await {
                warn!(error = %e, "Failed to close PostgreSQL pool");
            }
        }
    })
    .await
    .wrap_err("Server error")?;

    info!("Products API shutdown complete");
    Ok(())
}
