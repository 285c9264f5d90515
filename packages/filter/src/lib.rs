#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Bilingual filter engine.
//!
//! Builds filter options from loaded survey features, evaluates features
//! against each layer's active criteria, and pushes the filtered collection
//! to a [`MapSink`]. Matching goes through the normalizer's stable codes, so
//! an Arabic selection and its English equivalent select the same features
//! and switching the display language never changes a result.

pub mod driver;
pub mod extract;
pub mod parsing;
pub mod predicate;
pub mod rules;
pub mod session;
pub mod stagger;
pub mod state;

use resolve_map_filter_models::{FieldKind, FilterField};
use resolve_map_survey_models::LayerId;

pub use driver::{ApplyOutcome, MapSink, apply_filters_for_layer, filter_layer};
pub use extract::{FilterOption, filter_options, unique_values};
pub use predicate::{evaluate, filter_features, matches};
pub use session::FilterSession;
pub use stagger::stagger_duplicate_coordinates;
pub use state::FilterStateManager;

/// Errors raised while configuring or evaluating filters.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The field is not filterable on the layer.
    #[error("Field {field} is not filterable on layer {layer}")]
    UnknownField {
        /// Layer the field was used on.
        layer: LayerId,
        /// The offending field.
        field: FilterField,
    },

    /// The criterion does not fit the field.
    #[error("Field {field} expects a {expected} criterion, got {found}")]
    KindMismatch {
        /// The field the criterion was set on.
        field: FilterField,
        /// Kind the field accepts.
        expected: FieldKind,
        /// Kind of the supplied criterion.
        found: FieldKind,
    },

    /// No data is loaded for the layer.
    #[error("No data loaded for layer {0}")]
    UnknownLayer(LayerId),

    /// A field rule table entry is inconsistent.
    #[error("Invalid rule for {field} on {layer}: {reason}")]
    InvalidRule {
        /// Layer of the rule.
        layer: LayerId,
        /// Field of the rule.
        field: FilterField,
        /// What is wrong with it.
        reason: String,
    },

    /// Pushing data to the map failed.
    #[error("Map sink error: {0}")]
    Sink(#[from] SinkError),
}

/// Errors raised by a [`MapSink`].
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// I/O error (file write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The sink refused the update.
    #[error("Map sink rejected update: {0}")]
    Rejected(String),
}
