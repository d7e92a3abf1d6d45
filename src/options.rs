//! Deck options.
//!
//! An option is a [`Transform`]: it takes the card sequence built so far and
//! returns the next one. Options may add cards ([`jokers`], [`decks`]),
//! remove them ([`filter`]), or reorder them ([`default_sort`], [`sort`],
//! [`shuffle`]). Any `FnMut(Vec<Card>) -> Vec<Card>` closure is an option too,
//! so custom steps mix freely with the built-in ones.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

/// A step in the deck-building pipeline.
pub trait Transform {
    /// Consumes the current sequence and returns the next one.
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> Transform for F
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    fn apply(&mut self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

/// A type-erased option, as accepted by [`crate::deck::new`].
pub type DeckOption<'a> = Box<dyn Transform + 'a>;

/// Sorts cards ascending by [`Card::absolute_rank`].
///
/// The sort is stable, so duplicate cards keep their relative order.
#[must_use]
pub fn default_sort(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(Card::absolute_rank);
    cards
}

/// The comparison rule used by [`default_sort`], in the form [`sort`] accepts.
///
/// Returns `true` if the card at `i` precedes the card at `j` in the
/// canonical absolute order.
#[must_use]
pub fn less(cards: &[Card], i: usize, j: usize) -> bool {
    cards[i].absolute_rank() < cards[j].absolute_rank()
}

/// Sorts cards with a caller-supplied less-than rule over indices.
///
/// The rule receives the whole sequence being sorted together with two
/// indices into it, so it can compare by anything reachable from those
/// positions. The sort is stable.
///
/// The rule must describe a strict weak order; an inconsistent rule leaves
/// the cards in an unspecified order.
///
/// # Panics
///
/// The returned option may panic when applied if `less` is not a strict
/// weak order.
///
/// # Example
///
/// ```
/// use deckrs::options::sort;
/// use deckrs::{DeckBuilder, Rank};
///
/// // Kings first, then queens, and so on; suits stay in base order.
/// let cards = DeckBuilder::new()
///     .with_option(sort(|cards: &[_], i, j| {
///         cards[i].rank() > cards[j].rank()
///     }))
///     .build();
/// assert_eq!(cards[0].rank(), Some(Rank::King));
/// ```
pub fn sort<L>(mut less: L) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    L: FnMut(&[Card], usize, usize) -> bool,
{
    move |cards| {
        let mut order: Vec<usize> = (0..cards.len()).collect();
        order.sort_by(|&i, &j| {
            if less(&cards, i, j) {
                Ordering::Less
            } else if less(&cards, j, i) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        order.into_iter().map(|i| cards[i]).collect()
    }
}

/// Shuffles cards into a uniformly random permutation drawn from `rng`.
///
/// The random source is owned by the option, so applying it again continues
/// the same stream and yields a different permutation.
pub fn shuffle<R>(mut rng: R) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    R: Rng,
{
    move |mut cards| {
        cards.shuffle(&mut rng);
        cards
    }
}

/// Shuffles cards with a [`ChaCha8Rng`] seeded from `seed`.
///
/// The same seed over the same input always yields the same permutation.
pub fn shuffle_seeded(seed: u64) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    shuffle(ChaCha8Rng::seed_from_u64(seed))
}

/// Appends `n` jokers indexed `0..n` to the end of the sequence.
pub fn jokers(n: u8) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |mut cards| {
        cards.extend((0..n).map(Card::joker));
        cards
    }
}

/// Removes every card for which `predicate` returns `true`.
///
/// Kept cards stay in their original relative order.
pub fn filter<P>(mut predicate: P) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    P: FnMut(&Card) -> bool,
{
    move |mut cards| {
        cards.retain(|card| !predicate(card));
        cards
    }
}

/// Replaces the sequence with `n` back-to-back copies of itself.
///
/// `decks(0)` yields an empty sequence and `decks(1)` leaves it unchanged.
///
/// # Panics
///
/// Panics if the resulting length overflows `usize`.
pub fn decks(n: usize) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |cards| cards.repeat(n)
}
