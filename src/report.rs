//! Simulation run output.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// The cards produced by a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    /// Cards in the order they were drawn.
    pub drawn: Vec<Card>,
    /// The same cards sorted by color, suit, and rank.
    pub sorted: Vec<Card>,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Drawn Cards:")?;
        for card in &self.drawn {
            writeln!(f, "{card}")?;
        }

        writeln!(f)?;
        writeln!(f, "Sorted Cards:")?;
        for card in &self.sorted {
            writeln!(f, "{card}")?;
        }

        Ok(())
    }
}
