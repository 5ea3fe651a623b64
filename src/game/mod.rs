// Public API
pub use cards::{Card, Face, Hand, Rank, Suit, BLACKJACK};
pub use dealer::{Dealer, Shoe, DEALER_STANDS_ON};
pub use errors::GameError;
pub use input::{PlayerInput, TurnView};
pub use player::{Command, Decision, Player, MINIMUM_BET};
pub use round::{play_round, RoundOutcome, Winner};

// Internal modules
pub mod cards;
mod dealer;
mod errors;
mod input;
mod player;
mod round;
