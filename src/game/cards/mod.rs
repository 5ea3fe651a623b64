pub mod basic;
pub mod hands;


pub use basic::{Card, Face, Rank, Suit, ACE_HIGH, ACE_LOW};
pub use hands::{Hand, BLACKJACK};
