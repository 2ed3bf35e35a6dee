use refind::configuration::{AiSettings, Settings};
use refind::startup::run;
use refind::storage::{InMemoryStorage, Storage};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
}

// we have to run the server in another thread
async fn spawn_app() -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let settings = Settings {
        app_host: "127.0.0.1".to_string(),
        app_port: port,
        ai: AiSettings {
            enabled: false,
            base_url: "http://127.0.0.1:0".to_string(),
            model: "gemini-1.5-flash".to_string(),
            timeout_secs: 5,
            api_key: None,
        },
    };

    let storage: Arc<dyn Storage> = Arc::new(InMemoryStorage::new());
    let server = run(listener, storage, settings).expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp { address }
}

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!(Some(0), response.content_length());
}
