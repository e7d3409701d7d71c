//! A 52-card deck simulation with optional `no_std` support.
//!
//! The crate provides a [`Deck`] that can be shuffled and drawn from, a
//! hand ordering in [`ordering`] (color, then suit, then rank), and a seeded
//! [`Simulation`] that ties them together.
//!
//! # Example
//!
//! ```
//! use deckofcards::{Simulation, SimulationOptions};
//!
//! let options = SimulationOptions::default();
//! let mut simulation = Simulation::new(options, 42);
//! let report = simulation.run().unwrap();
//! assert_eq!(report.sorted.len(), 20);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod ordering;
pub mod report;
pub mod simulation;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::DrawError;
pub use options::{DEFAULT_DRAW_COUNT, SimulationOptions};
pub use report::SimulationReport;
pub use simulation::Simulation;
