use thiserror::Error;

use super::cards::Card;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Player cannot meet minimum bet, GAME OVER")]
    InsufficientFunds { chips: u32 },

    #[error("Bet of {needed} chips exceeds remaining stack of {chips}")]
    BetExceedsStack { chips: u32, needed: u32 },

    #[error("Cannot compare {0} with {1}: face and number cards never match")]
    IncompatibleCards(Card, Card),

    #[error("Bet must be two digits between {min} and {max}, got '{input}'")]
    InvalidBet { input: String, min: u32, max: u32 },

    #[error("Unknown command '{0}', expected HIT, STAND, SPLIT or DOUBLE DOWN")]
    UnknownCommand(String),

    #[error("Only a pair of matching cards can be split")]
    CannotSplit,

    #[error("Hands can only be split once per round")]
    AlreadySplit,

    #[error("Double down needs a two-card hand that has not already doubled")]
    CannotDoubleDown,

    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Shoe exhausted: {requested} cards requested, {remaining} remaining")]
    ShoeExhausted { requested: usize, remaining: usize },

    #[error("No hand at index {0}")]
    NoSuchHand(usize),

    #[error("Input closed")]
    InputClosed,
}

impl GameError {
    /// Recoverable errors are reported to the player, who is then asked again.
    /// Everything else ends the round.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::BetExceedsStack { .. }
                | GameError::IncompatibleCards(..)
                | GameError::InvalidBet { .. }
                | GameError::UnknownCommand(_)
                | GameError::CannotSplit
                | GameError::AlreadySplit
                | GameError::CannotDoubleDown
        )
    }
}
