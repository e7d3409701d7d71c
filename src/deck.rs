//! The deck of undealt cards.

use alloc::vec::Vec;

use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// A standard 52-card deck.
///
/// The top of the deck is the end of the underlying vector, so drawing is a
/// constant-time pop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    ///
    /// Cards are laid out suit by suit in [`Suit::ALL`] order, and within a
    /// suit in [`Rank::ALL`] order.
    ///
    /// # Example
    ///
    /// ```
    /// use deckofcards::{Card, DECK_SIZE, Deck, Rank, Suit};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.cards_remaining(), DECK_SIZE);
    /// assert_eq!(deck.cards()[0], Card::new(Suit::Spades, Rank::Two));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        debug!("shuffled {} cards", self.cards.len());
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::DeckExhausted`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        let card = self.cards.pop().ok_or(DrawError::DeckExhausted)?;
        trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns a copy of the remaining cards, bottom to top.
    #[must_use]
    pub fn remaining_cards(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// Returns a read-only view of the remaining cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
