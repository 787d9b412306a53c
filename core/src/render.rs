//! Card view model and markup for the trip list.
//!
//! Hosts either consume `TripCard` values directly or write the markup from
//! `render_list_html`. Both always describe the whole list region, so a
//! re-render replaces whatever was there before. Markup comes from the askama
//! templates under `templates/`, which escape every interpolated value.

use askama::Template;
use chrono::{NaiveDate, NaiveDateTime};

use crate::types::{Trip, TripId};

/// Shown in place of the list when it cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Não foi possível carregar as viagens.";

/// Class marking the per-card delete control.
pub const DELETE_MARKER_CLASS: &str = "delete-btn";

/// Data attribute on the delete control holding the trip id.
pub const DELETE_ID_ATTRIBUTE: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripCard {
    pub id: TripId,
    pub destination: String,
    pub description: String,
    pub date_range: String,
    pub price: String,
}

impl TripCard {
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            id: trip.id.clone(),
            destination: trip.destino.clone(),
            description: trip.descricao.clone(),
            date_range: format!(
                "{} - {}",
                format_date(&trip.data_partida),
                format_date(&trip.data_retorno)
            ),
            price: format_price(trip.preco),
        }
    }

    pub fn to_html(&self) -> askama::Result<String> {
        CardTemplate {
            card: self,
            marker: DELETE_MARKER_CLASS,
            attr: DELETE_ID_ATTRIBUTE,
        }
        .render()
    }
}

#[derive(Template)]
#[template(path = "card.html")]
struct CardTemplate<'a> {
    card: &'a TripCard,
    marker: &'static str,
    attr: &'static str,
}

#[derive(Template)]
#[template(path = "list.html")]
struct ListTemplate<'a> {
    cards: &'a [TripCard],
    marker: &'static str,
    attr: &'static str,
}

#[derive(Template)]
#[template(path = "load_failure.html")]
struct LoadFailureTemplate<'a> {
    message: &'a str,
}

pub fn render_cards(trips: &[Trip]) -> Vec<TripCard> {
    trips.iter().map(TripCard::from_trip).collect()
}

/// Full contents of the list container for a successful load.
pub fn render_list_html(cards: &[TripCard]) -> askama::Result<String> {
    ListTemplate {
        cards,
        marker: DELETE_MARKER_CLASS,
        attr: DELETE_ID_ATTRIBUTE,
    }
    .render()
}

/// Full contents of the list container after a failed load.
pub fn load_failure_html() -> askama::Result<String> {
    LoadFailureTemplate {
        message: LOAD_FAILURE_MESSAGE,
    }
    .render()
}

/// `DD/MM/YYYY` for ISO dates or datetimes; anything else is shown as sent.
pub fn format_date(raw: &str) -> String {
    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()));
    match parsed {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn format_price(value: f64) -> String {
    format!("R$ {value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(id: i64, destino: &str, preco: f64) -> Trip {
        Trip {
            id: TripId::Number(id),
            destino: destino.to_string(),
            descricao: "Praia e sol".to_string(),
            data_partida: "2024-06-01".to_string(),
            data_retorno: "2024-06-10".to_string(),
            preco,
            categoria: None,
            vagas_disponiveis: None,
            ativa: None,
        }
    }

    #[test]
    fn card_formats_dates_and_price() {
        let card = TripCard::from_trip(&trip(1, "Natal", 999.5));
        assert_eq!(card.destination, "Natal");
        assert_eq!(card.description, "Praia e sol");
        assert_eq!(card.date_range, "01/06/2024 - 10/06/2024");
        assert_eq!(card.price, "R$ 999.50");
    }

    #[test]
    fn price_always_has_two_decimals() {
        assert_eq!(format_price(10.0), "R$ 10.00");
        assert_eq!(format_price(0.126), "R$ 0.13");
        assert_eq!(format_price(1234.5678), "R$ 1234.57");
    }

    #[test]
    fn dates_accept_datetimes_and_pass_through_garbage() {
        assert_eq!(format_date("2024-12-25T10:30:00"), "25/12/2024");
        assert_eq!(format_date("amanhã"), "amanhã");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn html_carries_delete_marker_and_escapes_text() {
        let mut t = trip(42, "<Rio> \"Velho\"", 1.0);
        t.descricao = "a & b".to_string();
        let html = TripCard::from_trip(&t).to_html().unwrap();
        assert!(html.starts_with(r#"<div class="viagem-card">"#));
        assert!(html.contains("<h3>&lt;Rio&gt; &quot;Velho&quot;</h3>"));
        assert!(html.contains("<p>a &amp; b</p>"));
        assert!(html.contains(r#"<button class="delete-btn" data-id="42">Deletar</button>"#));
        assert!(html.contains(r#"<p class="price">R$ 1.00</p>"#));
    }

    #[test]
    fn list_html_has_one_card_per_trip_and_is_stable() {
        let trips = vec![trip(1, "A", 1.0), trip(2, "B", 2.0), trip(3, "C", 3.0)];
        let first = render_list_html(&render_cards(&trips)).unwrap();
        let second = render_list_html(&render_cards(&trips)).unwrap();
        assert_eq!(first.matches("class=\"viagem-card\"").count(), 3);
        assert_eq!(first.matches(r#"class="delete-btn""#).count(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_list_html_is_empty() {
        assert_eq!(render_list_html(&[]).unwrap().trim(), "");
    }

    #[test]
    fn failure_html_is_a_single_message() {
        let html = load_failure_html().unwrap();
        assert_eq!(html.trim(), "<p>Não foi possível carregar as viagens.</p>");
        assert!(!html.contains("viagem-card"));
    }
}
