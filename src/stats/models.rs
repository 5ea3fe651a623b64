use serde::{Deserialize, Serialize};

use crate::game::{RoundOutcome, Winner};

/// Running totals over the rounds of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub current_win_streak: u32,
    pub best_win_streak: u32,
    pub total_wagered: u64,
    pub total_paid_out: u64,
}

impl SessionStats {
    pub fn record(&mut self, outcome: &RoundOutcome) {
        self.rounds_played += 1;
        self.total_wagered += outcome.stake as u64;
        self.total_paid_out += outcome.payout as u64;

        match outcome.winner {
            Winner::Player => {
                self.wins += 1;
                self.current_win_streak += 1;
                self.best_win_streak = self.best_win_streak.max(self.current_win_streak);
            }
            Winner::Dealer => {
                self.losses += 1;
                self.current_win_streak = 0;
            }
        }
    }

    pub fn net_chips(&self) -> i64 {
        self.total_paid_out as i64 - self.total_wagered as i64
    }

    /// Share of rounds won, 0.0 before any round is played.
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            return 0.0;
        }
        self.wins as f64 / self.rounds_played as f64
    }
}
