//! Simulation configuration options.

/// Number of cards drawn by a default simulation.
pub const DEFAULT_DRAW_COUNT: usize = 20;

/// Configuration options for a simulation run.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckofcards::SimulationOptions;
///
/// let options = SimulationOptions::default().with_draw_count(5);
/// assert_eq!(options.draw_count, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Number of cards to draw from the shuffled deck.
    ///
    /// Values above the deck size are accepted; the run then fails with
    /// [`DrawError::DeckExhausted`](crate::DrawError::DeckExhausted).
    pub draw_count: usize,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            draw_count: DEFAULT_DRAW_COUNT,
        }
    }
}

impl SimulationOptions {
    /// Sets the number of cards to draw.
    #[must_use]
    pub const fn with_draw_count(mut self, draw_count: usize) -> Self {
        self.draw_count = draw_count;
        self
    }
}
