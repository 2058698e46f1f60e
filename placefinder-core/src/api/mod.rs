//! Public API for place-name extraction
//!
//! This module wraps the domain automata and filter pipeline behind a small
//! surface: build a [`Config`], create a [`PlaceFinder`], and analyze text.
//! The CLI is built entirely on top of it.

#[cfg(feature = "parallel")]
mod batch;
pub mod config;
mod error;
mod input;
mod mode;
mod output;
mod processor;


pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use mode::SegmentationMode;
pub use output::{Analysis, AnalysisMetadata};
pub use processor::PlaceFinder;
