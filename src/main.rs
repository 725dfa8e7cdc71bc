use actix_web::middleware::TrailingSlash;
use actix_web::web::Data;
use actix_web::{middleware, App, HttpServer};
use anyhow::Context;
use mediator::Mediator;
use sales_api::config::Settings;
use sales_api::events::RecordsLoadedEvent;
use sales_api::services::record_store::{lock_store, RecordStore, SharedRecordStore};
use sales_api::services::spreadsheet_loader::SpreadsheetLoader;
use sales_api::{configure, create_mediator_service, SharedMediator};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));

    let settings = Settings::from_env();
    let (store, loaded) = load_record_store(&settings)?;
    let mediator = create_mediator_service(&store);
    publish_loaded(&mediator, &store, loaded);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::new(TrailingSlash::MergeOnly))
            .wrap(middleware::Logger::default())
            .app_data(Data::new(mediator.clone()))
            .configure(configure)
    })
    .bind((settings.host.as_str(), settings.port))
    .with_context(|| format!("Failed to bind {}:{}", settings.host, settings.port))?
    .run();

    // On server start
    tokio::join!(server, on_server_start(&settings)).0?;
    Ok(())
}

async fn on_server_start(settings: &Settings) {
    log::info!("Sales server started at {}", settings.base_url());
}

fn load_record_store(settings: &Settings) -> anyhow::Result<(SharedRecordStore, usize)> {
    let loader = SpreadsheetLoader::new(settings.data_file.clone());
    let mut store = RecordStore::new();

    let loaded = loader
        .load_into(&mut store)
        .with_context(|| format!("Failed to load sales records from {}", loader.path().display()))?;

    Ok((store.into_shared(), loaded))
}

fn publish_loaded(mediator: &SharedMediator, store: &SharedRecordStore, count: usize) {
    let next_id = lock_store(store).next_id();

    match mediator.lock() {
        Ok(mut mediator) => {
            if let Err(err) = mediator.publish(RecordsLoadedEvent { count, next_id }) {
                log::warn!("Could not publish records loaded event: {}", err);
            }
        }
        Err(_) => log::warn!("Mediator is unavailable, skipping records loaded event"),
    }
}
