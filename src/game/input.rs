use super::cards::Hand;
use super::errors::GameError;

/// What the player sees while deciding a move for one hand.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub hand: &'a Hand,
    pub hand_index: usize,
    pub hand_count: usize,
    pub dealer: &'a Hand,
    pub chips: u32,
    pub placed_bet: u32,
}

/// Source of player input for a round. Implementations only move lines of
/// text; validation and retrying stay with the round.
pub trait PlayerInput {
    /// Next line offered as an opening bet. `None` when input is closed.
    fn next_bet(&mut self, chips: u32) -> Option<String>;

    /// Next line offered as a move for the hand in `view`. `None` when input
    /// is closed.
    fn next_command(&mut self, view: &TurnView<'_>) -> Option<String>;

    /// Called with every rejected bet or move before asking again.
    fn report(&mut self, error: &GameError);
}
