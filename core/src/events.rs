//! Event delegation for the list container.
//!
//! Cards are created and destroyed on every render, so nothing listens on
//! them directly. The container receives every click from its children and
//! turns the ones that hit a delete control into a delete intent.

use std::collections::BTreeMap;

use crate::render::{DELETE_ID_ATTRIBUTE, DELETE_MARKER_CLASS};
use crate::types::TripId;

/// The element a click landed on, reduced to what delegation inspects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub classes: Vec<String>,
    /// `data-*` attributes, keyed without the `data-` prefix.
    pub data: BTreeMap<String, String>,
}

impl ClickTarget {
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// The delete control a card renders for `id`.
    pub fn delete_button(id: &TripId) -> Self {
        Self::default()
            .with_class(DELETE_MARKER_CLASS)
            .with_data(DELETE_ID_ATTRIBUTE, id.to_string())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListIntent {
    Delete(TripId),
}

/// Map a click inside the list container to what the user asked for.
/// Clicks on anything but a delete control carrying an id are ignored.
pub fn delegate_click(target: &ClickTarget) -> Option<ListIntent> {
    if !target.has_class(DELETE_MARKER_CLASS) {
        return None;
    }
    target
        .data
        .get(DELETE_ID_ATTRIBUTE)
        .map(|id| ListIntent::Delete(TripId::from(id.as_str())))
}
