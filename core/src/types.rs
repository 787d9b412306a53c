//! Domain DTOs for the trip (viagem) API.
//!
//! # Design
//! Records are passed through as JSON and never validated client-side. The
//! types here only pin down the wire names (camelCase) and the two defaults
//! the create form adds. They are defined independently from the
//! mock-server crate; integration tests catch schema drift.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Category sent with every trip created from the form.
pub const DEFAULT_CATEGORY: &str = "ECONOMICA";

/// Seat count sent with every trip created from the form.
pub const DEFAULT_AVAILABLE_SEATS: i64 = 30;

/// Server-assigned identifier. The API uses numeric ids, but ids read back
/// from a rendered card are strings, so both forms are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TripId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripId::Number(n) => write!(f, "{n}"),
            TripId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TripId {
    fn from(value: i64) -> Self {
        TripId::Number(value)
    }
}

impl From<&str> for TripId {
    fn from(value: &str) -> Self {
        TripId::Text(value.to_string())
    }
}

impl From<String> for TripId {
    fn from(value: String) -> Self {
        TripId::Text(value)
    }
}

/// A single trip returned by the API.
///
/// Text fields read as empty when absent or `null`. `preco` is required: a list
/// containing an item without a numeric price cannot be rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: TripId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub destino: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub descricao: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data_partida: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data_retorno: String,
    pub preco: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vagas_disponiveis: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ativa: Option<bool>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request payload for creating a trip. Carries no id.
///
/// `preco` is `None` when the form value is not a number; it is then sent as
/// JSON `null` and the server decides what to do with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    pub destino: String,
    pub data_partida: String,
    pub data_retorno: String,
    pub preco: Option<f64>,
    pub descricao: String,
    pub categoria: String,
    pub vagas_disponiveis: i64,
}

/// Raw values of the create form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripForm {
    pub destino: String,
    pub data_partida: String,
    pub data_retorno: String,
    pub preco: String,
    pub descricao: String,
}

impl TripForm {
    /// Build the create payload: form fields as-is, price parsed leniently,
    /// plus the fixed category and seat defaults.
    pub fn to_new_trip(&self) -> NewTrip {
        NewTrip {
            destino: self.destino.clone(),
            data_partida: self.data_partida.clone(),
            data_retorno: self.data_retorno.clone(),
            preco: parse_float_prefix(&self.preco),
            descricao: self.descricao.clone(),
            categoria: DEFAULT_CATEGORY.to_string(),
            vagas_disponiveis: DEFAULT_AVAILABLE_SEATS,
        }
    }
}

/// Value of the longest decimal prefix of `input` after leading whitespace,
/// e.g. `"12.5abc"` -> `12.5`. Returns `None` if there is no such prefix or
/// its value overflows to infinity.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let end = s
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);

    (1..=end)
        .rev()
        .find_map(|len| s[..len].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
