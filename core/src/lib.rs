//! Client core for the trip (viagem) listing API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `TripListController` drives
//! the list view and the create/delete actions through two host seams:
//! a [`Transport`] that executes requests and a [`TripView`] that shows
//! cards, messages, alerts and confirmations.
//!
//! # Design
//! - `TripClient` is stateless; it holds only its `ClientConfig`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - After every successful mutation the whole list is fetched again.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod http;
pub mod render;
pub mod types;

pub use client::{TripClient, COLLECTION_PATH};
pub use config::ClientConfig;
pub use controller::{DeleteOutcome, TripListController, TripView};
pub use error::{ApiError, ConfigError, ControllerError, Mutation};
pub use events::{delegate_click, ClickTarget, ListIntent};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use render::TripCard;
pub use types::{NewTrip, Trip, TripForm, TripId};
