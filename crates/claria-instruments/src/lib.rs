//! claria-instruments
//!
//! Clinical assessment instrument definitions and the interpretation engine.
//! Pure data and pure functions, no I/O. Raw subscale scores go in; categories,
//! risk levels, and recommendation lists come out.
//!
//! The pipeline is [`catalog`] lookup, [`classify`] per subscale, [`aggregate`]
//! across subscales, then [`recommend`]. [`engine`] wires them together.

pub mod aggregate;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod instruments;
pub mod recommend;
pub mod scoring;

pub use catalog::ThresholdCatalog;
pub use engine::{Engine, interpret};

use scoring::InstrumentDefinition;

/// Trait implemented by each built-in clinical assessment instrument.
pub trait Instrument: Send + Sync {
    /// The declarative threshold and recommendation tables.
    fn definition(&self) -> &InstrumentDefinition;

    /// Unique identifier for this instrument (e.g., "pcl5", "bdi2").
    fn id(&self) -> &str {
        &self.definition().id
    }

    /// Human-readable name (e.g., "PCL-5", "BDI-II").
    fn name(&self) -> &str {
        &self.definition().display_name
    }
}

/// Return all built-in instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::basc3::Basc3),
        Box::new(instruments::pcl5::Pcl5),
        Box::new(instruments::ctq::Ctq),
        Box::new(instruments::bdi2::Bdi2),
    ]
}
