use std::collections::VecDeque;

use blackjack::{GameError, PlayerInput, TurnView};

/// What the player was shown when asked for a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenTurn {
    pub hand_index: usize,
    pub hand_count: usize,
    pub hand_value: u32,
    pub soft: bool,
}

/// Replays canned bet and move lines, recording every reported error.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    bets: VecDeque<String>,
    commands: VecDeque<String>,
    pub reported: Vec<GameError>,
    pub seen: Vec<SeenTurn>,
}

impl ScriptedInput {
    pub fn new(bets: &[&str], commands: &[&str]) -> Self {
        Self {
            bets: bets.iter().map(|s| s.to_string()).collect(),
            commands: commands.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    #[allow(dead_code)]
    pub fn push_round(&mut self, bet: &str, commands: &[&str]) {
        self.bets.push_back(bet.to_string());
        self.commands.extend(commands.iter().map(|s| s.to_string()));
    }

    pub fn unused_commands(&self) -> usize {
        self.commands.len()
    }
}

impl PlayerInput for ScriptedInput {
    fn next_bet(&mut self, _chips: u32) -> Option<String> {
        self.bets.pop_front()
    }

    fn next_command(&mut self, view: &TurnView<'_>) -> Option<String> {
        self.seen.push(SeenTurn {
            hand_index: view.hand_index,
            hand_count: view.hand_count,
            hand_value: view.hand.value(),
            soft: view.hand.is_soft(),
        });
        self.commands.pop_front()
    }

    fn report(&mut self, error: &GameError) {
        self.reported.push(error.clone());
    }
}
