//! The trip list controller: one load action, two mutating actions.
//!
//! # Design
//! The controller owns a `TripClient`, a [`Transport`] and a [`TripView`].
//! Every action is a single round-trip; a successful mutation is followed by
//! a full reload instead of patching what is on screen. Failures are surfaced
//! through the view (inline message for loads, alert for mutations), logged,
//! and also returned so hosts can set an exit status.

use tracing::{debug, error, info};

use crate::client::TripClient;
use crate::error::{ApiError, ControllerError, Mutation};
use crate::events::{delegate_click, ClickTarget, ListIntent};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::render::{render_cards, TripCard, LOAD_FAILURE_MESSAGE};
use crate::types::{TripForm, TripId};

/// Asked before every delete.
pub const DELETE_CONFIRMATION: &str = "Tem certeza que deseja deletar esta viagem?";

/// The visible surface a host provides.
pub trait TripView {
    /// Replace the list region with these cards.
    fn render_cards(&mut self, cards: &[TripCard]);

    /// Replace the list region with a single message.
    fn render_load_failure(&mut self, message: &str);

    fn reset_form(&mut self);

    /// Blocking notification.
    fn alert(&mut self, message: &str);

    /// Blocking yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

pub struct TripListController<T, V> {
    client: TripClient,
    transport: T,
    view: V,
}

impl<T: Transport, V: TripView> TripListController<T, V> {
    pub fn new(client: TripClient, transport: T, view: V) -> Self {
        Self {
            client,
            transport,
            view,
        }
    }

    pub fn client(&self) -> &TripClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_parts(self) -> (T, V) {
        (self.transport, self.view)
    }

    /// Fetch the collection and redraw the list. Returns the card count.
    pub fn load_all(&mut self) -> Result<usize, ControllerError> {
        let request = self.client.build_list_trips();
        let result = self
            .round_trip(request)
            .and_then(|response| self.client.parse_list_trips(response));

        match result {
            Ok(trips) => {
                let cards = render_cards(&trips);
                self.view.render_cards(&cards);
                debug!(count = cards.len(), "rendered trip list");
                Ok(cards.len())
            }
            Err(err) => {
                error!(error = %err, "failed to load trips");
                self.view.render_load_failure(LOAD_FAILURE_MESSAGE);
                Err(ControllerError::LoadFailure(err))
            }
        }
    }

    /// Submit the create form. On success the form is cleared and the list
    /// reloaded; a failing reload is shown in the list, not reported here.
    pub fn create(&mut self, form: &TripForm) -> Result<(), ControllerError> {
        let payload = form.to_new_trip();
        let result = self
            .client
            .build_create_trip(&payload)
            .and_then(|request| self.round_trip(request))
            .and_then(|response| self.client.parse_create_trip(response));

        match result {
            Ok(created) => {
                let id = created.map(|trip| trip.id);
                info!(destino = %payload.destino, ?id, "trip created");
                self.view.reset_form();
                let _ = self.load_all();
                Ok(())
            }
            Err(err) => Err(self.mutation_failed(Mutation::Create, err)),
        }
    }

    /// Delete after the user confirms. Declining sends nothing.
    pub fn delete(&mut self, id: &TripId) -> Result<DeleteOutcome, ControllerError> {
        if !self.view.confirm(DELETE_CONFIRMATION) {
            debug!(%id, "delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let request = self.client.build_delete_trip(id);
        let result = self
            .round_trip(request)
            .and_then(|response| self.client.parse_delete_trip(response));

        match result {
            Ok(()) => {
                info!(%id, "trip deleted");
                let _ = self.load_all();
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => Err(self.mutation_failed(Mutation::Delete, err)),
        }
    }

    /// Entry point for clicks anywhere inside the list container.
    pub fn handle_list_click(
        &mut self,
        target: &ClickTarget,
    ) -> Result<Option<DeleteOutcome>, ControllerError> {
        match delegate_click(target) {
            Some(ListIntent::Delete(id)) => self.delete(&id).map(Some),
            None => Ok(None),
        }
    }

    fn round_trip(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }

    fn mutation_failed(&mut self, action: Mutation, source: ApiError) -> ControllerError {
        error!(?action, error = %source, "mutation failed");
        let err = ControllerError::MutationFailure { action, source };
        self.view.alert(&err.alert_message());
        err
    }
}
