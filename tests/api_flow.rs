use async_trait::async_trait;
use refind::configuration::{AiSettings, Settings};
use refind::models::{
    Chat, Item, ItemKind, Message, NewChat, NewItem, NewMessage, NewUser, User,
};
use refind::startup::run;
use refind::storage::{InMemoryStorage, Storage, StorageError};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    async fn login(&self, email: &str) -> String {
        let response = self
            .client
            .post(&format!("{}/auth/login", self.address))
            .json(&json!({"email": email, "password": "secret"}))
            .send()
            .await
            .expect("login request failed");
        assert!(response.status().is_success());
        let body: Value = response.json().await.expect("login body");
        body["item"]["id"].as_str().expect("user id").to_string()
    }

    async fn report_item(&self, scope: &str, user_id: &str, prompt: &str) -> Value {
        let response = self
            .client
            .post(&format!("{}/{}", self.address, scope))
            .json(&json!({"user_id": user_id, "prompt": prompt}))
            .send()
            .await
            .expect("report request failed");
        assert!(response.status().is_success());
        response.json().await.expect("report body")
    }
}

async fn spawn_app() -> TestApp {
    spawn_app_with(Arc::new(InMemoryStorage::new())).await
}

async fn spawn_app_with(storage: Arc<dyn Storage>) -> TestApp {
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

    let server = run(listener, storage, settings).expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        client: reqwest::Client::new(),
    }
}

#[tokio::test]
async fn login_accepts_any_credentials_and_reuses_the_account() {
    let app = spawn_app().await;

    let first = app.login("demo@example.com").await;
    let second = app.login("demo@example.com").await;
    assert_eq!(first, second);

    let other = app.login("other@example.com").await;
    assert_ne!(first, other);
}

#[tokio::test]
async fn lost_item_report_returns_ranked_matches() {
    let app = spawn_app().await;
    let owner = app.login("owner@example.com").await;
    let finder_a = app.login("finder-a@example.com").await;
    let finder_b = app.login("finder-b@example.com").await;

    let a = app
        .report_item("found_items", &finder_a, "wallet leather brown")
        .await;
    let b = app.report_item("found_items", &finder_b, "phone black").await;
    app.report_item("found_items", &finder_b, "bag").await;
    // perfect overlap, but owned by the lost reporter: must never match
    app.report_item("found_items", &owner, "wallet black leather")
        .await;

    let report = app
        .report_item("lost_items", &owner, "wallet black leather")
        .await;

    // the lost-items endpoint wraps the persisted item and its matches
    let reported = &report["item"];
    let keywords: Vec<&str> = reported["item"]["keywords"]
        .as_array()
        .expect("keywords")
        .iter()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert_eq!(keywords, vec!["wallet", "black", "leather"]);

    let matches = reported["matches"].as_array().expect("matches");
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["item"]["id"], a["item"]["id"]);
    assert_eq!(matches[0]["match_score"], 2);
    assert_eq!(matches[1]["item"]["id"], b["item"]["id"]);
    assert_eq!(matches[1]["match_score"], 1);
}

#[tokio::test]
async fn chat_creation_is_idempotent_over_http() {
    let app = spawn_app().await;
    let owner = app.login("owner@example.com").await;
    let finder = app.login("finder@example.com").await;
    let item = app
        .report_item("found_items", &finder, "black leather wallet")
        .await;
    let item_id = item["item"]["id"].as_str().unwrap();

    let open_chat = |participants: Vec<&str>| {
        app.client
            .post(&format!("{}/chats", app.address))
            .json(&json!({
                "participants": participants,
                "item_id": item_id,
                "item_kind": "found",
                "item_description": "black leather wallet",
            }))
            .send()
    };

    let first: Value = open_chat(vec![&owner, &finder])
        .await
        .expect("chat request")
        .json()
        .await
        .expect("chat body");
    // same pair, reversed order
    let second: Value = open_chat(vec![&finder, &owner])
        .await
        .expect("chat request")
        .json()
        .await
        .expect("chat body");

    assert_eq!(first["item"]["id"], second["item"]["id"]);
}

#[tokio::test]
async fn chat_with_duplicate_participants_is_rejected() {
    let app = spawn_app().await;
    let owner = app.login("owner@example.com").await;

    let response = app
        .client
        .post(&format!("{}/chats", app.address))
        .json(&json!({
            "participants": [owner, owner],
            "item_id": uuid::Uuid::new_v4(),
            "item_kind": "found",
            "item_description": "black leather wallet",
        }))
        .send()
        .await
        .expect("chat request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn conversation_detail_aggregates_messages_and_participants() {
    let app = spawn_app().await;
    let owner = app.login("owner@example.com").await;
    let finder = app.login("finder@example.com").await;

    let chat: Value = app
        .client
        .post(&format!("{}/chats", app.address))
        .json(&json!({
            "participants": [owner, finder],
            "item_id": uuid::Uuid::new_v4(),
            "item_kind": "found",
            "item_description": "black leather wallet",
        }))
        .send()
        .await
        .expect("chat request")
        .json()
        .await
        .expect("chat body");
    let chat_id = chat["item"]["id"].as_str().unwrap();

    for (sender, content) in [(&owner, "is this yours?"), (&finder, "yes, it is!")] {
        let response = app
            .client
            .post(&format!("{}/messages", app.address))
            .json(&json!({"chat_id": chat_id, "sender_id": sender, "content": content}))
            .send()
            .await
            .expect("message request");
        assert!(response.status().is_success());
    }

    let detail: Value = app
        .client
        .get(&format!("{}/chats/{}", app.address, chat_id))
        .send()
        .await
        .expect("detail request")
        .json()
        .await
        .expect("detail body");

    let conversation = &detail["item"];
    assert_eq!(conversation["message_count"], 2);
    assert_eq!(conversation["messages"][0]["content"], "is this yours?");
    assert_eq!(conversation["messages"][1]["content"], "yes, it is!");
    assert_eq!(conversation["last_message"]["content"], "yes, it is!");

    let emails: Vec<&str> = conversation["participants_details"]
        .as_array()
        .expect("participants")
        .iter()
        .map(|p| p["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails.len(), 2);
    assert!(emails.contains(&"owner@example.com"));
    assert!(emails.contains(&"finder@example.com"));
}

#[tokio::test]
async fn unknown_chat_and_dead_message_targets_are_not_found() {
    let app = spawn_app().await;
    let owner = app.login("owner@example.com").await;

    let response = app
        .client
        .get(&format!("{}/chats/{}", app.address, uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("detail request");
    assert_eq!(response.status().as_u16(), 404);

    let response = app
        .client
        .post(&format!("{}/messages", app.address))
        .json(&json!({
            "chat_id": uuid::Uuid::new_v4(),
            "sender_id": owner,
            "content": "hello?",
        }))
        .send()
        .await
        .expect("message request");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn found_item_deletion_is_kind_scoped() {
    let app = spawn_app().await;
    let owner = app.login("owner@example.com").await;

    let lost = app.report_item("lost_items", &owner, "house keys").await;
    let lost_id = lost["item"]["item"]["id"].as_str().unwrap();

    // a lost item cannot be deleted through the found-items endpoint
    let response = app
        .client
        .delete(&format!("{}/found_items/{}", app.address, lost_id))
        .send()
        .await
        .expect("delete request");
    assert_eq!(response.status().as_u16(), 404);

    let found = app.report_item("found_items", &owner, "house keys").await;
    let found_id = found["item"]["id"].as_str().unwrap();
    let response = app
        .client
        .delete(&format!("{}/found_items/{}", app.address, found_id))
        .send()
        .await
        .expect("delete request");
    assert!(response.status().is_success());
}

/// Storage whose kind-wide item listing is down while everything else works,
/// so a report can be persisted but its matches cannot be computed.
struct UnlistableStorage {
    inner: InMemoryStorage,
}

#[async_trait]
impl Storage for UnlistableStorage {
    async fn create_user(&self, new: NewUser) -> Result<User, StorageError> {
        self.inner.create_user(new).await
    }
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, StorageError> {
        self.inner.get_user(id).await
    }
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        self.inner.get_user_by_email(email).await
    }
    async fn create_item(&self, new: NewItem) -> Result<Item, StorageError> {
        self.inner.create_item(new).await
    }
    async fn get_item(&self, id: Uuid) -> Result<Option<Item>, StorageError> {
        self.inner.get_item(id).await
    }
    async fn list_items(&self, _: ItemKind) -> Result<Vec<Item>, StorageError> {
        Err(StorageError::Backend("listing down".into()))
    }
    async fn list_items_by_user(
        &self,
        kind: ItemKind,
        user_id: Uuid,
    ) -> Result<Vec<Item>, StorageError> {
        self.inner.list_items_by_user(kind, user_id).await
    }
    async fn delete_item(&self, kind: ItemKind, id: Uuid) -> Result<(), StorageError> {
        self.inner.delete_item(kind, id).await
    }
    async fn create_chat(&self, new: NewChat) -> Result<(Chat, bool), StorageError> {
        self.inner.create_chat(new).await
    }
    async fn get_chat(&self, id: Uuid) -> Result<Option<Chat>, StorageError> {
        self.inner.get_chat(id).await
    }
    async fn list_chats_by_participant(&self, user_id: Uuid) -> Result<Vec<Chat>, StorageError> {
        self.inner.list_chats_by_participant(user_id).await
    }
    async fn find_chat_by_participants(
        &self,
        participants: &[Uuid; 2],
    ) -> Result<Option<Chat>, StorageError> {
        self.inner.find_chat_by_participants(participants).await
    }
    async fn create_message(&self, new: NewMessage) -> Result<Message, StorageError> {
        self.inner.create_message(new).await
    }
    async fn list_messages_by_chat(&self, chat_id: Uuid) -> Result<Vec<Message>, StorageError> {
        self.inner.list_messages_by_chat(chat_id).await
    }
}

#[tokio::test]
async fn lost_item_report_survives_a_failed_match_computation() {
    let app = spawn_app_with(Arc::new(UnlistableStorage {
        inner: InMemoryStorage::new(),
    }))
    .await;
    let owner = app.login("owner@example.com").await;

    // report_item asserts the response is a success
    let report = app
        .report_item("lost_items", &owner, "black leather wallet")
        .await;

    let reported = &report["item"];
    assert_eq!(reported["matches"].as_array().expect("matches").len(), 0);
    let item_id = reported["item"]["id"].as_str().expect("item id");

    // the item stayed persisted despite the failed computation
    let listing: Value = app
        .client
        .get(&format!("{}/lost_items/user/{}", app.address, owner))
        .send()
        .await
        .expect("listing request")
        .json()
        .await
        .expect("listing body");
    let ids: Vec<&str> = listing["list"]
        .as_array()
        .expect("list")
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![item_id]);
}

#[tokio::test]
async fn text_prompt_generation_is_offline() {
    let app = spawn_app().await;

    let body: Value = app
        .client
        .post(&format!("{}/describe/prompt", app.address))
        .json(&json!({"type": "lost", "description": "black leather wallet"}))
        .send()
        .await
        .expect("prompt request")
        .json()
        .await
        .expect("prompt body");

    let prompt = body["item"]["prompt"].as_str().expect("prompt text");
    assert!(prompt.starts_with("Black leather wallet lost on"));
}
