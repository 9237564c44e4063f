use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{Method, StatusCode},
    routing::{any, delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

pub mod config;

pub use config::ServerConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Registration {
    pub id: Uuid,
    pub token: String,
}

#[derive(Deserialize)]
pub struct PushToken {
    pub token: String,
}

/// What `/echo` sends back: the method it saw and the JSON body, if any.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Echo {
    pub method: String,
    pub body: Option<serde_json::Value>,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Registration>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/push", post(register).get(list_registrations))
        .route("/push/{id}", delete(unregister))
        .route("/echo", any(echo))
        .route("/plain", get(plain))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// Decoded by hand: clients send the JSON body without a content type.
async fn register(
    State(db): State<Db>,
    body: Bytes,
) -> Result<(StatusCode, Json<bool>), StatusCode> {
    let input: PushToken =
        serde_json::from_slice(&body).map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)?;
    let registration = Registration {
        id: Uuid::new_v4(),
        token: input.token,
    };
    info!(id = %registration.id, "registered push token");
    db.write().await.insert(registration.id, registration);
    Ok((StatusCode::CREATED, Json(true)))
}

async fn list_registrations(State(db): State<Db>) -> Json<Vec<Registration>> {
    let registrations = db.read().await;
    Json(registrations.values().cloned().collect())
}

async fn unregister(State(db): State<Db>, Path(id): Path<Uuid>) -> StatusCode {
    let mut registrations = db.write().await;
    match registrations.remove(&id) {
        Some(_) => {
            info!(%id, "removed push token");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn echo(method: Method, body: Bytes) -> Result<Json<Echo>, StatusCode> {
    let body = if body.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&body).map_err(|_| StatusCode::BAD_REQUEST)?)
    };
    info!(%method, has_body = body.is_some(), "echo");
    Ok(Json(Echo {
        method: method.to_string(),
        body,
    }))
}

async fn plain() -> &'static str {
    "this is not json"
}
