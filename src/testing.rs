//! Scripted stand-in for the payroll backend, served by a real actix-web
//! server on an ephemeral port so the reqwest client is exercised end to end.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::Value;

use crate::api::client::BackendClient;
use crate::auth::credentials::CredentialScope;
use crate::auth::storage::LocalStorage;
use crate::panel::PanelContext;
use crate::utils::format::Locale;
use crate::view::row::DisplaySettings;
use crate::view::screen::Screen;

pub const STAFF_TOKEN: &str = "staff-token";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    /// Path plus query string, as the client asked for it.
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

#[derive(Clone)]
struct Reply {
    status: u16,
    body: String,
}

#[derive(Default)]
pub struct MockState {
    requests: Mutex<Vec<Recorded>>,
    replies: Mutex<HashMap<(String, String), Reply>>,
}

async fn catch_all(req: HttpRequest, body: web::Bytes, state: web::Data<MockState>) -> HttpResponse {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(Recorded {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        authorization: header("Authorization"),
        content_type: header("Content-Type"),
        body: body.to_vec(),
    });

    let key = (req.method().to_string(), req.path().to_string());
    let reply = state.replies.lock().unwrap().get(&key).cloned();
    match reply {
        Some(reply) => HttpResponse::build(StatusCode::from_u16(reply.status).unwrap())
            .content_type("application/json")
            .body(reply.body),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "no such route" })),
    }
}

pub struct MockBackend {
    pub url: String,
    state: web::Data<MockState>,
}

impl MockBackend {
    /// Must run inside the actix runtime (`#[actix_web::test]`).
    pub async fn start() -> Self {
        let state = web::Data::new(MockState::default());
        let data = state.clone();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .default_service(web::to(catch_all))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            url: format!("http://{addr}"),
            state,
        }
    }

    pub fn reply(&self, method: &str, path: &str, status: u16, body: Value) {
        self.reply_raw(method, path, status, &body.to_string());
    }

    pub fn reply_raw(&self, method: &str, path: &str, status: u16, body: &str) {
        self.state.replies.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            Reply {
                status,
                body: body.to_string(),
            },
        );
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

pub fn display() -> DisplaySettings {
    DisplaySettings {
        locale: Locale::En,
        currency_suffix: "KWD".to_string(),
    }
}

/// A panel context against `url` whose storage already holds a staff token.
pub fn context(url: &str) -> (PanelContext, Arc<LocalStorage>) {
    let storage = Arc::new(LocalStorage::in_memory());
    storage.set(CredentialScope::Staff.storage_key(), STAFF_TOKEN).unwrap();

    let client = BackendClient::new(url, CredentialScope::Staff, storage.clone()).unwrap();
    let ctx = PanelContext {
        client,
        screen: Arc::new(Screen::new()),
        display: display(),
        toast_duration: Duration::from_millis(3000),
    };
    (ctx, storage)
}
