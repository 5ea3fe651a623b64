use std::collections::VecDeque;

use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use super::cards::{Card, Hand};
use super::errors::GameError;
use super::player::Decision;

/// The dealer draws until reaching at least this value.
pub const DEALER_STANDS_ON: u32 = 17;

/// Undealt cards. The front is the next card out; reclaimed cards go to the back.
#[derive(Debug, Clone, Default)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    /// A single 52-card deck in random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Card::full_deck();
        cards.shuffle(rng);
        Self {
            cards: cards.into(),
        }
    }

    /// A shoe that deals `cards` in the given order.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Takes `count` cards off the front. Running dry is a fatal error; the
    /// shoe is never reshuffled mid-round.
    pub fn draw(&mut self, count: usize) -> Result<Vec<Card>, GameError> {
        if count > self.cards.len() {
            return Err(GameError::ShoeExhausted {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..count).collect())
    }

    /// Returns used cards to the back of the shoe without reshuffling.
    pub fn reclaim<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards.into_iter().map(|mut card| {
            card.reset_pip();
            card
        }));
    }
}

#[derive(Debug, Clone)]
pub struct Dealer {
    shoe: Shoe,
    hand: Hand,
    winner: bool,
}

impl Dealer {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_shoe(Shoe::shuffled(rng))
    }

    pub fn with_shoe(shoe: Shoe) -> Self {
        Self {
            shoe,
            hand: Hand::new(),
            winner: false,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn is_winner(&self) -> bool {
        self.winner
    }

    /// Deals four cards in casino order: player, dealer, player, dealer.
    /// The dealer keeps its two; the player's two come back as a new hand.
    pub fn deal_initial(&mut self) -> Result<Hand, GameError> {
        let cards = self.shoe.draw(4)?;
        match cards.as_slice() {
            [player_a, dealer_a, player_b, dealer_b] => {
                self.hand = Hand::from_cards(vec![*dealer_a, *dealer_b]);
                Ok(Hand::from_cards(vec![*player_a, *player_b]))
            }
            _ => Err(GameError::ShoeExhausted {
                requested: 4,
                remaining: self.shoe.len(),
            }),
        }
    }

    /// Cards a player decision calls for: one for a hit or double down, one
    /// per resulting hand for a split, none otherwise.
    pub fn deal(&mut self, decision: Decision) -> Result<Vec<Card>, GameError> {
        let count = match decision {
            Decision::Hit | Decision::DoubleDown => 1,
            Decision::Split => 2,
            Decision::Stand | Decision::Bust => 0,
        };
        self.shoe.draw(count)
    }

    /// Draws one card into the dealer's own hand.
    pub fn check_hand(&mut self) -> Result<&Hand, GameError> {
        let cards = self.shoe.draw(1)?;
        for card in cards {
            debug!(%card, "Dealer draws");
            self.hand.push(card);
        }
        Ok(&self.hand)
    }

    pub fn must_draw(&self) -> bool {
        self.hand.value() < DEALER_STANDS_ON
    }

    /// Draws until the hand stands on 17 or more, stopping early on a bust.
    pub fn play_out(&mut self) -> Result<u32, GameError> {
        while self.must_draw() {
            self.check_hand()?;
        }
        Ok(self.hand.value())
    }

    pub(crate) fn set_winner(&mut self, winner: bool) {
        self.winner = winner;
    }

    /// Puts the given cards and the dealer's own hand back into the shoe.
    pub(crate) fn reclaim(&mut self, cards: Vec<Card>) {
        let own = self.hand.take_cards();
        self.shoe.reclaim(cards.into_iter().chain(own));
    }
}
