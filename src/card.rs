//! Card types, ordering, and rendering.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::{ParseCardError, ParseRankError, ParseSuitError};

/// Number of cards per standard deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per standard suit.
pub const SUIT_SIZE: usize = 13;

/// Card suit.
///
/// The declaration order is the canonical suit order: spades first, jokers last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Marker suit for jokers.
    Joker,
}

impl Suit {
    /// Every suit in canonical order, jokers last.
    pub const ALL: [Self; 5] = [
        Self::Spade,
        Self::Diamond,
        Self::Club,
        Self::Heart,
        Self::Joker,
    ];

    /// The four standard suits in base deck order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Returns the zero-based position of the suit in canonical order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns `true` for the joker marker suit.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::Joker)
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Suit {
    type Error = ParseSuitError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0..=4 => Ok(Self::ALL[usize::from(index)]),
            _ => Err(ParseSuitError),
        }
    }
}

impl FromStr for Suit {
    type Err = ParseSuitError;

    /// Accepts the singular or plural suit name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let singular = s
            .strip_suffix('s')
            .or_else(|| s.strip_suffix('S'))
            .unwrap_or(s);

        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(singular))
            .ok_or(ParseSuitError)
    }
}

/// Card rank, ace low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks in ascending order.
    pub const ALL: [Self; SUIT_SIZE] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the face value (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based position of the rank (Ace = 0, King = 12).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8 - 1
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Rank {
    type Error = ParseRankError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=13 => Ok(Self::ALL[usize::from(value - 1)]),
            _ => Err(ParseRankError),
        }
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|rank| rank.name().eq_ignore_ascii_case(s))
            .ok_or(ParseRankError)
    }
}

/// A playing card.
///
/// Standard cards carry a [`Rank`]. Jokers reuse the rank slot as a
/// disambiguating index with no ordering meaning of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    /// Zero-based rank index, or the joker index for jokers.
    index: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// With [`Suit::Joker`] the rank is reused as an index: the result is
    /// the joker whose index equals [`Rank::index`].
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            index: rank.index(),
        }
    }

    /// Creates a joker with the given index.
    #[must_use]
    pub const fn joker(index: u8) -> Self {
        Self {
            suit: Suit::Joker,
            index,
        }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank, or `None` for jokers.
    #[must_use]
    pub const fn rank(&self) -> Option<Rank> {
        if self.suit.is_joker() {
            None
        } else {
            Some(Rank::ALL[self.index as usize])
        }
    }

    /// Returns the joker index, or `None` for standard cards.
    #[must_use]
    pub const fn joker_index(&self) -> Option<u8> {
        if self.suit.is_joker() {
            Some(self.index)
        } else {
            None
        }
    }

    /// Returns `true` if the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.suit.is_joker()
    }

    /// Returns the position of the card in the canonical absolute order.
    ///
    /// Standard cards map to `suit * 13 + rank`, so the 52 standard cards
    /// occupy `0..52`. Jokers map to `52 + index` and sort after every
    /// standard card.
    #[must_use]
    pub const fn absolute_rank(&self) -> u16 {
        self.suit.index() as u16 * SUIT_SIZE as u16 + self.index as u16
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute_rank().cmp(&other.absolute_rank())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            Some(rank) => write!(f, "{rank} of {}s", self.suit),
            None => write!(f, "{}", self.suit),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the rendered form of a card.
    ///
    /// `"Joker"` parses to the joker with index 0.
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// let card: Card = "Queen of Hearts".parse().unwrap();
    /// assert_eq!(card, Card::new(Suit::Heart, Rank::Queen));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(Suit::Joker.name()) {
            return Ok(Self::joker(0));
        }

        let mut parts = s.split_whitespace();
        let (Some(rank), Some(of), Some(suit), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseCardError::Malformed);
        };
        if !of.eq_ignore_ascii_case("of") {
            return Err(ParseCardError::Malformed);
        }

        let rank: Rank = rank.parse()?;
        let suit: Suit = suit.parse()?;
        if suit.is_joker() {
            return Err(ParseCardError::Suit(ParseSuitError));
        }
        Ok(Self::new(suit, rank))
    }
}
