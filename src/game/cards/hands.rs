use std::fmt;

use serde::{Deserialize, Serialize};

use super::basic::Card;
use crate::game::errors::GameError;

/// Highest value a hand can hold without busting.
pub const BLACKJACK: u32 = 21;

/// An ordered set of cards plus the per-hand flags a round tracks.
///
/// Ace pips are settled every time a card is added: while the sum exceeds 21,
/// soft Aces are downgraded to 1 one at a time in deal order, stopping as soon
/// as the sum is 21 or less. Because a hand only grows, a downgraded Ace never
/// needs to go back to 11, so `value` is always the plain sum of pips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    pub bust: bool,
    pub split: bool,
    pub double_down: bool,
    pub win: bool,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut hand = Self {
            cards,
            ..Self::default()
        };
        hand.settle_aces();
        hand
    }

    /// One half of a split pair, completed by a freshly dealt card. The kept
    /// card is rescored from scratch, so a split Ace counts as 11 again.
    pub fn from_split(mut kept: Card, dealt: Card) -> Self {
        kept.reset_pip();
        let mut hand = Self::from_cards(vec![kept, dealt]);
        hand.split = true;
        hand
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
        self.settle_aces();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u32 {
        self.cards.iter().map(|card| card.pip() as u32).sum()
    }

    /// Holds an Ace still counted as 11.
    pub fn is_soft(&self) -> bool {
        self.cards.iter().any(Card::is_soft_ace)
    }

    pub fn is_busted(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Two cards that compare equal for splitting. Fails with
    /// `IncompatibleCards` when a face card meets a number card.
    pub fn can_split(&self) -> Result<bool, GameError> {
        match self.cards.as_slice() {
            [first, second] => first.split_eq(second),
            _ => Ok(false),
        }
    }

    /// Empties the hand, handing its cards back and clearing every flag.
    pub(crate) fn take_cards(&mut self) -> Vec<Card> {
        std::mem::take(self).cards
    }

    fn settle_aces(&mut self) {
        let mut total = self.value();
        if total <= BLACKJACK {
            return;
        }

        for card in self.cards.iter_mut() {
            if card.downgrade_ace() {
                total = total - card.rank.pip() as u32 + card.pip() as u32;
                if total <= BLACKJACK {
                    break;
                }
            }
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{} (value {})", cards, self.value())
    }
}
