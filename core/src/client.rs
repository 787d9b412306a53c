//! Stateless HTTP request builder and response parser for the trip API.
//!
//! # Design
//! `TripClient` holds only its `ClientConfig`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The caller executes the round-trip in between.
//! Reads are anonymous; mutations carry the Basic `Authorization` header.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTrip, Trip, TripId};

/// Path of the trip collection, relative to the base url.
pub const COLLECTION_PATH: &str = "/api/viagens";

#[derive(Debug, Clone)]
pub struct TripClient {
    config: ClientConfig,
}

impl TripClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute url of the collection endpoint.
    pub fn collection_url(&self) -> String {
        format!("{}{COLLECTION_PATH}", self.config.base_url)
    }

    fn item_url(&self, id: &TripId) -> String {
        format!("{}/{id}", self.collection_url())
    }

    pub fn build_list_trips(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_trip(&self, id: &TripId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_trip(&self, input: &NewTrip) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.collection_url(),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("authorization".to_string(), self.config.basic_auth_header()),
            ],
            body: Some(body),
        })
    }

    pub fn build_delete_trip(&self, id: &TripId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.item_url(id),
            headers: vec![("authorization".to_string(), self.config.basic_auth_header())],
            body: None,
        }
    }

    pub fn parse_list_trips(&self, response: HttpResponse) -> Result<Vec<Trip>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_get_trip(&self, response: HttpResponse) -> Result<Trip, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// Any 2xx counts as created. The body is not required to echo the trip.
    pub fn parse_create_trip(&self, response: HttpResponse) -> Result<Option<Trip>, ApiError> {
        check_status(&response)?;
        Ok(serde_json::from_str(&response.body).ok())
    }

    pub fn parse_delete_trip(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    match response.status {
        401 => Err(ApiError::Unauthorized),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
