use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::debug;

use super::cards::{Card, Hand};
use super::errors::GameError;

/// Smallest opening bet a player may place.
pub const MINIMUM_BET: u32 = 10;

/// A move typed by the player. Parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Command {
    Hit,
    Stand,
    Split,
    #[strum(serialize = "DOUBLE DOWN")]
    #[serde(rename = "DOUBLE DOWN")]
    DoubleDown,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, GameError> {
        let line = line.trim();
        line.parse()
            .map_err(|_| GameError::UnknownCommand(line.to_string()))
    }
}

/// What happens to a hand on the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Bust,
    Hit,
    Stand,
    Split,
    #[strum(serialize = "DOUBLE DOWN")]
    #[serde(rename = "DOUBLE DOWN")]
    DoubleDown,
}

impl From<Command> for Decision {
    fn from(command: Command) -> Self {
        match command {
            Command::Hit => Decision::Hit,
            Command::Stand => Decision::Stand,
            Command::Split => Decision::Split,
            Command::DoubleDown => Decision::DoubleDown,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    chips: u32,
    placed_bet: u32,
    hands: Vec<Hand>,
    winner: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            chips,
            placed_bet: 0,
            hands: Vec::new(),
            winner: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chips(&self) -> u32 {
        self.chips
    }

    pub fn placed_bet(&self) -> u32 {
        self.placed_bet
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand(&self, index: usize) -> Result<&Hand, GameError> {
        self.hands.get(index).ok_or(GameError::NoSuchHand(index))
    }

    pub fn is_winner(&self) -> bool {
        self.winner
    }

    /// Fails with the session-ending `InsufficientFunds` when the stack cannot
    /// cover the minimum bet.
    pub fn ensure_can_bet(&self) -> Result<(), GameError> {
        if self.chips < MINIMUM_BET {
            return Err(GameError::InsufficientFunds { chips: self.chips });
        }
        Ok(())
    }

    /// Places the opening bet of a round from a line of input. The line must
    /// be exactly two decimal digits naming an amount in `[10, chips]`.
    pub fn bet(&mut self, wager: &str) -> Result<u32, GameError> {
        self.ensure_can_bet()?;

        let wager = wager.trim();
        let invalid = || GameError::InvalidBet {
            input: wager.to_string(),
            min: MINIMUM_BET,
            max: self.chips.min(99),
        };

        if wager.len() != 2 || !wager.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let amount: u32 = wager.parse().map_err(|_| invalid())?;
        if amount < MINIMUM_BET || amount > self.chips {
            return Err(invalid());
        }

        self.chips -= amount;
        self.placed_bet = amount;
        debug!(player = %self.name, amount, chips = self.chips, "Opening bet placed");
        Ok(amount)
    }

    /// Matches the current stake again for a split or double down, doubling
    /// `placed_bet`. Returns the new stake.
    pub fn double_bet(&mut self) -> Result<u32, GameError> {
        if self.chips < self.placed_bet {
            return Err(GameError::BetExceedsStack {
                chips: self.chips,
                needed: self.placed_bet,
            });
        }

        self.chips -= self.placed_bet;
        self.placed_bet *= 2;
        debug!(player = %self.name, stake = self.placed_bet, chips = self.chips, "Stake doubled");
        Ok(self.placed_bet)
    }

    pub fn collect_hand(&mut self, hand: Hand) {
        self.hands.push(hand);
    }

    /// A hand over 21 with no soft Ace left is bust without asking the player.
    pub fn forced_decision(&self, index: usize) -> Result<Option<Decision>, GameError> {
        let hand = self.hand(index)?;
        if hand.is_busted() && !hand.is_soft() {
            return Ok(Some(Decision::Bust));
        }
        Ok(None)
    }

    /// Validates `command` against the hand at `index`.
    ///
    /// A split needs this to be the player's only hand and a matching pair; a
    /// double down needs exactly two cards and no earlier double. Both raise
    /// the stake through `double_bet`, so they fail with `BetExceedsStack`
    /// when the player cannot cover it. Hit and stand are always accepted.
    pub fn check_hand(&mut self, index: usize, command: Command) -> Result<Decision, GameError> {
        if let Some(decision) = self.forced_decision(index)? {
            return Ok(decision);
        }

        let hand = self.hand(index)?;
        match command {
            Command::Split => {
                if self.hands.len() != 1 {
                    return Err(GameError::AlreadySplit);
                }
                if !hand.can_split()? {
                    return Err(GameError::CannotSplit);
                }
                self.double_bet()?;
            }
            Command::DoubleDown => {
                if hand.len() != 2 || hand.double_down {
                    return Err(GameError::CannotDoubleDown);
                }
                self.double_bet()?;
            }
            Command::Hit | Command::Stand => {}
        }

        Ok(command.into())
    }

    pub(crate) fn hand_mut(&mut self, index: usize) -> Result<&mut Hand, GameError> {
        self.hands.get_mut(index).ok_or(GameError::NoSuchHand(index))
    }

    pub(crate) fn hands_mut(&mut self) -> &mut [Hand] {
        &mut self.hands
    }

    /// Replaces the pair at `index` with two split hands, each completed by
    /// one of `dealt`. The first keeps `index`, the second is appended.
    pub(crate) fn split_hand(
        &mut self,
        index: usize,
        dealt: Vec<Card>,
    ) -> Result<[usize; 2], GameError> {
        let hand = self.hand(index)?;
        let (first, second) = match (hand.cards(), dealt.as_slice()) {
            ([kept_a, kept_b], [dealt_a, dealt_b]) => (
                Hand::from_split(*kept_a, *dealt_a),
                Hand::from_split(*kept_b, *dealt_b),
            ),
            _ => return Err(GameError::CannotSplit),
        };

        self.hands[index] = first;
        self.hands.push(second);
        Ok([index, self.hands.len() - 1])
    }

    pub(crate) fn set_winner(&mut self, winner: bool) {
        self.winner = winner;
    }

    /// Credits a payout. The stack is capped at `u32::MAX`.
    pub(crate) fn award(&mut self, payout: u32) {
        self.chips = self.chips.saturating_add(payout);
    }

    /// Ends the round: drops the stake and hands every card back.
    pub(crate) fn clear_round(&mut self) -> Vec<Card> {
        self.placed_bet = 0;
        self.hands
            .drain(..)
            .flat_map(|mut hand| hand.take_cards())
            .collect()
    }
}
