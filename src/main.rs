use refind::configuration::get_configuration;
use refind::startup::run;
use refind::storage::{InMemoryStorage, Storage};
use refind::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("refind".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().expect("Failed to read configuration.");

    // The storage collaborator is injected behind a trait; the in-memory
    // backend stands in for a real database.
    let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::new());

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)
        .unwrap_or_else(|_| panic!("failed to bind to {}", settings.app_port));

    run(listener, storage, settings)?.await
}
