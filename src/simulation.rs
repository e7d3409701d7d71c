//! Seeded shuffle, draw, and sort runs.

use alloc::vec::Vec;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::DrawError;
use crate::options::SimulationOptions;
use crate::ordering;
use crate::report::SimulationReport;

/// A single simulation run over one deck.
///
/// The simulation owns the deck and the random number generator, so two
/// simulations built from the same options and seed produce the same report.
///
/// Each call to [`Simulation::run`] continues on the cards left by the
/// previous one: drawn cards are never returned, so across all runs the
/// cards drawn plus the cards remaining always make up one full deck.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Simulation options.
    options: SimulationOptions,
    /// Cards not yet drawn.
    deck: Deck,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Creates a new simulation with a full deck and the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckofcards::{Simulation, SimulationOptions};
    ///
    /// let mut simulation = Simulation::new(SimulationOptions::default(), 42);
    /// let report = simulation.run().unwrap();
    /// assert_eq!(report.drawn.len(), 20);
    /// assert_eq!(simulation.deck().cards_remaining(), 32);
    /// ```
    #[must_use]
    pub fn new(options: SimulationOptions, seed: u64) -> Self {
        Self {
            options,
            deck: Deck::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the simulation options.
    #[must_use]
    pub const fn options(&self) -> &SimulationOptions {
        &self.options
    }

    /// Returns the deck in its current state.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Shuffles the deck, draws the configured number of cards, and sorts them.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if the deck runs out before the
    /// configured number of cards has been drawn. Cards drawn before the
    /// failure are not returned to the deck.
    ///
    /// A second run shuffles and draws from the cards the first one left,
    /// so it fails once the deck holds fewer cards than the draw count.
    pub fn run(&mut self) -> Result<SimulationReport, DrawError> {
        info!("shuffling the deck");
        self.deck.shuffle(&mut self.rng);

        let count = self.options.draw_count;
        info!("drawing {count} cards");
        let mut drawn = Vec::with_capacity(count.min(self.deck.cards_remaining()));
        for _ in 0..count {
            drawn.push(self.deck.draw()?);
        }

        info!("sorting the drawn cards");
        let mut sorted = drawn.clone();
        ordering::sort_hand(&mut sorted);

        Ok(SimulationReport { drawn, sorted })
    }
}
