use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::game::errors::GameError;

/// Pip value of an Ace before any soft-ace downgrade.
pub const ACE_HIGH: u8 = 11;
/// Pip value of an Ace once it has been downgraded.
pub const ACE_LOW: u8 = 1;
/// Pip value of Jack, Queen and King.
pub const FACE_PIP: u8 = 10;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Hearts => "Hearts",
                Suit::Diamonds => "Diamonds",
                Suit::Clubs => "Clubs",
                Suit::Spades => "Spades",
            }
        )
    }
}

impl TryFrom<&str> for Suit {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_uppercase().as_str() {
            "H" | "HEARTS" => Ok(Suit::Hearts),
            "D" | "DIAMONDS" => Ok(Suit::Diamonds),
            "C" | "CLUBS" => Ok(Suit::Clubs),
            "S" | "SPADES" => Ok(Suit::Spades),
            _ => Err(s.to_string()),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Face {
    Jack,
    Queen,
    King,
    Ace,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Face::Jack => "Jack",
                Face::Queen => "Queen",
                Face::King => "King",
                Face::Ace => "Ace",
            }
        )
    }
}

/// A card's rank. Numeric ranks hold their own pip value and are only valid
/// in `2..=10`; build them through `TryFrom` when the value is not a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Rank {
    Numeric(u8),
    Face(Face),
}

impl Rank {
    /// The thirteen ranks of a suit, numbers first.
    pub fn all() -> Vec<Rank> {
        (2..=10)
            .map(Rank::Numeric)
            .chain(Face::iter().map(Rank::Face))
            .collect()
    }

    /// Pip value a freshly dealt card of this rank scores.
    pub fn pip(&self) -> u8 {
        match self {
            Rank::Numeric(value) => *value,
            Rank::Face(Face::Ace) => ACE_HIGH,
            Rank::Face(_) => FACE_PIP,
        }
    }

    pub fn is_face(&self) -> bool {
        matches!(self, Rank::Face(_))
    }

    pub fn is_ace(&self) -> bool {
        matches!(self, Rank::Face(Face::Ace))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Numeric(value) => write!(f, "{}", value),
            Rank::Face(face) => write!(f, "{}", face),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=10 => Ok(Rank::Numeric(value)),
            _ => Err(value.to_string()),
        }
    }
}

impl TryFrom<&str> for Rank {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_uppercase().as_str() {
            "J" | "JACK" => Ok(Rank::Face(Face::Jack)),
            "Q" | "QUEEN" => Ok(Rank::Face(Face::Queen)),
            "K" | "KING" => Ok(Rank::Face(Face::King)),
            "A" | "ACE" => Ok(Rank::Face(Face::Ace)),
            other => other
                .parse::<u8>()
                .map_err(|_| s.to_string())
                .and_then(|value: u8| Rank::try_from(value)),
        }
    }
}

impl FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::try_from(s)
    }
}

/// A playing card. `pip` is scoring state: it starts at the rank's pip value
/// and only ever changes for an Ace, which a hand may downgrade from 11 to 1.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pip: u8,
}

// Identity is suit and rank; the Ace's current pip is not part of it.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            suit,
            rank,
            pip: rank.pip(),
        }
    }

    /// Parses compact notation such as `"AS"`, `"10H"` or `"qd"`:
    /// a rank followed by a one-letter suit.
    pub fn from_string(s: &str) -> Result<Self, GameError> {
        let s = s.trim();
        if s.len() < 2 || !s.is_ascii() {
            return Err(GameError::InvalidCard(s.to_string()));
        }

        let (rank, suit) = s.split_at(s.len() - 1);
        let rank = Rank::try_from(rank).map_err(|_| GameError::InvalidCard(s.to_string()))?;
        let suit = Suit::try_from(suit).map_err(|_| GameError::InvalidCard(s.to_string()))?;

        Ok(Self::new(rank, suit))
    }

    /// One 52-card deck, suit by suit.
    pub fn full_deck() -> Vec<Card> {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::iter() {
            for rank in Rank::all() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    pub fn pip(&self) -> u8 {
        self.pip
    }

    pub fn is_ace(&self) -> bool {
        self.rank.is_ace()
    }

    /// An Ace still counted as 11.
    pub fn is_soft_ace(&self) -> bool {
        self.is_ace() && self.pip == ACE_HIGH
    }

    /// Counts a soft Ace as 1 from now on. Returns false for any other card.
    pub(crate) fn downgrade_ace(&mut self) -> bool {
        if self.is_soft_ace() {
            self.pip = ACE_LOW;
            true
        } else {
            false
        }
    }

    /// Restores the pip value the rank starts with.
    pub fn reset_pip(&mut self) {
        self.pip = self.rank.pip();
    }

    /// Split eligibility. Two face cards match when they share a face, two
    /// number cards match when their pips are equal. A face card never
    /// compares with a number card.
    pub fn split_eq(&self, other: &Card) -> Result<bool, GameError> {
        match (self.rank, other.rank) {
            (Rank::Face(a), Rank::Face(b)) => Ok(a == b),
            (Rank::Numeric(a), Rank::Numeric(b)) => Ok(a == b),
            _ => Err(GameError::IncompatibleCards(*self, *other)),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
