// Single-player Blackjack engine
// This file exposes the public API for the binary and integration tests

pub mod config;
pub mod console;
pub mod game;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use config::GameConfig;
pub use game::{
    play_round, Card, Command, Dealer, Decision, Face, GameError, Hand, Player, PlayerInput,
    Rank, RoundOutcome, Shoe, Suit, TurnView, Winner,
};
pub use stats::SessionStats;
