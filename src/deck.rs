//! Deck construction.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::options::{self, DeckOption, Transform};

/// Returns the 52 standard cards, suit by suit, each suit Ace to King.
#[must_use]
pub fn standard() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Builds a deck from the standard cards and a sequence of options.
///
/// Options are applied one after another in iteration order, each consuming
/// the output of the previous one.
///
/// # Example
///
/// ```
/// use deckrs::deck;
/// use deckrs::options::{DeckOption, default_sort, jokers};
///
/// let options: [DeckOption<'_>; 2] = [Box::new(jokers(2)), Box::new(default_sort)];
/// let cards = deck::new(options);
/// assert_eq!(cards.len(), 54);
/// ```
pub fn new<'a, I>(options: I) -> Vec<Card>
where
    I: IntoIterator<Item = DeckOption<'a>>,
{
    let mut cards = standard();
    let mut applied = 0_usize;

    for mut option in options {
        cards = option.apply(cards);
        applied += 1;
        trace!(option = applied, cards = cards.len(), "applied deck option");
    }

    debug!(options = applied, cards = cards.len(), "built deck");
    cards
}

/// Builder for a deck.
///
/// Each `with_*` call appends one option; [`DeckBuilder::build`] applies
/// them in the order they were added.
///
/// ```
/// use deckrs::{Card, DeckBuilder, Suit};
///
/// let cards = DeckBuilder::new()
///     .with_decks(2)
///     .with_jokers(2)
///     .with_filter(|card: &Card| card.suit() == Suit::Club)
///     .with_seeded_shuffle(42)
///     .build();
/// assert_eq!(cards.len(), 2 * 39 + 2);
/// ```
#[derive(Default)]
#[must_use]
pub struct DeckBuilder<'a> {
    options: Vec<DeckOption<'a>>,
}

impl fmt::Debug for DeckBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckBuilder")
            .field("options", &self.options.len())
            .finish()
    }
}

impl<'a> DeckBuilder<'a> {
    /// Creates a builder with no options.
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Appends an arbitrary option.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, DeckBuilder};
    ///
    /// let cards = DeckBuilder::new()
    ///     .with_option(|mut cards: Vec<Card>| {
    ///         cards.truncate(5);
    ///         cards
    ///     })
    ///     .build();
    /// assert_eq!(cards.len(), 5);
    /// ```
    pub fn with_option(mut self, option: impl Transform + 'a) -> Self {
        self.options.push(Box::new(option));
        self
    }

    /// Appends `n` jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckBuilder;
    ///
    /// let cards = DeckBuilder::new().with_jokers(3).build();
    /// assert_eq!(cards[54].joker_index(), Some(2));
    /// ```
    pub fn with_jokers(self, n: u8) -> Self {
        self.with_option(options::jokers(n))
    }

    /// Repeats the sequence `n` times.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckBuilder;
    ///
    /// let cards = DeckBuilder::new().with_decks(3).build();
    /// assert_eq!(cards.len(), 156);
    /// ```
    pub fn with_decks(self, n: usize) -> Self {
        self.with_option(options::decks(n))
    }

    /// Removes every card matching `predicate`.
    pub fn with_filter(self, predicate: impl FnMut(&Card) -> bool + 'a) -> Self {
        self.with_option(options::filter(predicate))
    }

    /// Sorts by the canonical absolute order.
    pub fn with_default_sort(self) -> Self {
        self.with_option(options::default_sort)
    }

    /// Sorts with a custom less-than rule over indices, see [`options::sort`].
    ///
    /// # Panics
    ///
    /// [`DeckBuilder::build`] may panic if `less` is not a strict weak order,
    /// for example if it reports both `less(i, j)` and `less(j, i)`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, DeckBuilder, Rank, Suit};
    ///
    /// // Hearts first, each suit still Ace to King.
    /// let cards = DeckBuilder::new()
    ///     .with_sort(|cards: &[Card], i, j| {
    ///         (cards[i].suit() == Suit::Heart) && (cards[j].suit() != Suit::Heart)
    ///     })
    ///     .build();
    /// assert_eq!(cards[0], Card::new(Suit::Heart, Rank::Ace));
    /// assert_eq!(cards[13], Card::new(Suit::Spade, Rank::Ace));
    /// ```
    pub fn with_sort(self, less: impl FnMut(&[Card], usize, usize) -> bool + 'a) -> Self {
        self.with_option(options::sort(less))
    }

    /// Shuffles with the given random source.
    pub fn with_shuffle(self, rng: impl Rng + 'a) -> Self {
        self.with_option(options::shuffle(rng))
    }

    /// Shuffles with a generator seeded from `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckBuilder;
    ///
    /// let a = DeckBuilder::new().with_seeded_shuffle(7).build();
    /// let b = DeckBuilder::new().with_seeded_shuffle(7).build();
    /// assert_eq!(a, b);
    /// ```
    pub fn with_seeded_shuffle(self, seed: u64) -> Self {
        self.with_option(options::shuffle_seeded(seed))
    }

    /// Returns the number of options added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if no options have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Builds the deck, applying every option in order.
    #[must_use]
    pub fn build(self) -> Vec<Card> {
        new(self.options)
    }
}
