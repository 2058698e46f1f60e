//! Rule-based place-name candidate extraction
//!
//! This crate finds runs of capitalized words, optionally joined by a small
//! set of lowercase connectors, and keeps the ones that look like place
//! names. It has no gazetteer: every decision comes from surface patterns
//! and part-of-speech evidence.
//!
//! # Architecture
//!
//! - **Domain layer**: character classifier, character and token automata,
//!   POS lookup, filter pipeline and trace log
//! - **API layer**: configuration, input handling and the [`PlaceFinder`]
//!   entry point used by the CLI
//!
//! # Example
//!
//! ```rust
//! use placefinder_core::PlaceFinder;
//!
//! let mut finder = PlaceFinder::new().unwrap();
//! let places = finder.find_places("I went to San Francisco. Then I visited New York City.");
//!
//! assert_eq!(places.get("San Francisco"), Some(&1));
//! assert_eq!(places.get("New York City"), Some(&1));
//! assert!(!places.contains_key("Then"));
//!
//! // Every transition and filter decision of the call is recorded
//! assert!(!finder.trace().is_empty());
//! ```

pub mod api;
pub mod domain;

pub use api::{
    Analysis, AnalysisMetadata, Config, ConfigBuilder, Error as ApiError, Input, PlaceFinder,
    SegmentationMode,
};
pub use domain::*;
