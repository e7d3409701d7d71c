//! Hand ordering by color, suit, and rank.

use core::cmp::Ordering;

use crate::card::Card;

/// Compares two cards for sorting a hand.
///
/// Black cards sort before red ones. Within a color, cards sort by suit
/// (spades, clubs, hearts, diamonds), then by rank from two up to ace.
///
/// Two cards compare [`Ordering::Equal`] only when suit and rank both match.
///
/// # Example
///
/// ```
/// use core::cmp::Ordering;
/// use deckofcards::{Card, Rank, Suit, ordering};
///
/// let ace_of_clubs = Card::new(Suit::Clubs, Rank::Ace);
/// let two_of_hearts = Card::new(Suit::Hearts, Rank::Two);
/// assert_eq!(ordering::compare(&ace_of_clubs, &two_of_hearts), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: &Card, b: &Card) -> Ordering {
    a.color()
        .index()
        .cmp(&b.color().index())
        .then_with(|| a.suit().index().cmp(&b.suit().index()))
        .then_with(|| a.rank().index().cmp(&b.rank().index()))
}

/// Sorts a hand in place using [`compare`].
pub fn sort_hand(cards: &mut [Card]) {
    cards.sort_by(compare);
}
