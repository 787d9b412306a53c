//! In-memory stand-in for the trip API, used by the client's integration
//! tests and for trying the CLI locally.
//!
//! Reads are public; every other method requires HTTP Basic credentials,
//! checked before the request body is read.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Request, State},
    http::{header, Method, StatusCode},
    middleware::{from_fn_with_state, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: i64,
    pub destino: String,
    pub descricao: String,
    pub data_partida: String,
    pub data_retorno: String,
    pub preco: f64,
    pub categoria: Option<String>,
    pub vagas_disponiveis: Option<i64>,
    pub ativa: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    #[serde(default)]
    pub destino: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub data_partida: String,
    #[serde(default)]
    pub data_retorno: String,
    pub preco: Option<f64>,
    pub categoria: Option<String>,
    pub vagas_disponiveis: Option<i64>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    erro: String,
}

#[derive(Default)]
struct Store {
    trips: BTreeMap<i64, Trip>,
    next_id: i64,
}

#[derive(Clone)]
struct AppState {
    store: Arc<RwLock<Store>>,
    expected_auth: Arc<String>,
}

type ApiResult<T> = Result<T, (StatusCode, Json<ErrorBody>)>;

pub const DEFAULT_USER: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

/// Router with the default `admin`/`admin` credentials.
pub fn app() -> Router {
    app_with_credentials(DEFAULT_USER, DEFAULT_PASSWORD)
}

pub fn app_with_credentials(user: &str, password: &str) -> Router {
    let state = AppState {
        store: Arc::new(RwLock::new(Store {
            trips: BTreeMap::new(),
            next_id: 1,
        })),
        expected_auth: Arc::new(format!(
            "Basic {}",
            STANDARD.encode(format!("{user}:{password}"))
        )),
    };
    Router::new()
        .route("/api/viagens", get(list_trips).post(create_trip))
        .route("/api/viagens/{id}", get(get_trip).delete(delete_trip))
        .layer(from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_credentials(
    listener: TcpListener,
    user: &str,
    password: &str,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_credentials(user, password)).await
}

fn reject(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            erro: message.to_string(),
        }),
    )
}

async fn require_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if request.method() == Method::GET {
        return next.run(request).await;
    }
    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if provided == Some(state.expected_auth.as_str()) {
        next.run(request).await
    } else {
        reject(StatusCode::UNAUTHORIZED, "credenciais inválidas").into_response()
    }
}

async fn list_trips(State(state): State<AppState>) -> Json<Vec<Trip>> {
    let store = state.store.read().await;
    Json(store.trips.values().cloned().collect())
}

async fn get_trip(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Trip>, StatusCode> {
    let store = state.store.read().await;
    store.trips.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_trip(
    State(state): State<AppState>,
    Json(input): Json<NewTrip>,
) -> ApiResult<(StatusCode, Json<Trip>)> {
    let preco = input
        .preco
        .ok_or_else(|| reject(StatusCode::BAD_REQUEST, "Preço é obrigatório"))?;

    let mut store = state.store.write().await;
    let id = store.next_id;
    store.next_id += 1;
    let trip = Trip {
        id,
        destino: input.destino,
        descricao: input.descricao,
        data_partida: input.data_partida,
        data_retorno: input.data_retorno,
        preco,
        categoria: input.categoria,
        vagas_disponiveis: input.vagas_disponiveis,
        ativa: true,
    };
    store.trips.insert(id, trip.clone());
    info!(id, destino = %trip.destino, "trip created");
    Ok((StatusCode::CREATED, Json(trip)))
}

async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let mut store = state.store.write().await;
    match store.trips.remove(&id) {
        Some(_) => {
            info!(id, "trip deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(reject(StatusCode::NOT_FOUND, "viagem não encontrada")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_serializes_with_camel_case_names() {
        let trip = Trip {
            id: 1,
            destino: "Paris".to_string(),
            descricao: "Louvre".to_string(),
            data_partida: "2024-06-01".to_string(),
            data_retorno: "2024-06-10".to_string(),
            preco: 999.5,
            categoria: Some("ECONOMICA".to_string()),
            vagas_disponiveis: Some(30),
            ativa: true,
        };
        let json = serde_json::to_value(&trip).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["dataPartida"], "2024-06-01");
        assert_eq!(json["vagasDisponiveis"], 30);
        assert_eq!(json["ativa"], true);
    }

    #[test]
    fn new_trip_accepts_null_price() {
        let input: NewTrip = serde_json::from_str(r#"{"destino":"Paris","preco":null}"#).unwrap();
        assert!(input.preco.is_none());
        assert_eq!(input.data_partida, "");
    }

    #[test]
    fn new_trip_ignores_client_supplied_id() {
        let input: NewTrip =
            serde_json::from_str(r#"{"id":99,"destino":"Paris","preco":1.0}"#).unwrap();
        assert_eq!(input.preco, Some(1.0));
    }
}
