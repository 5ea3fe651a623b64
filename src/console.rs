use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::warn;

use crate::game::{GameError, PlayerInput, RoundOutcome, TurnView, Winner, MINIMUM_BET};
use crate::stats::SessionStats;

const DIVIDER: &str = "===============";

/// Line-based terminal front end over any reader and writer.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes one line. Output failures are logged, not fatal.
    pub fn say(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.writer, "{}", text) {
            warn!(error = %e, "Failed to write to console");
        }
    }

    fn prompt(&mut self, text: impl Display) -> Option<String> {
        self.say(text);
        if let Err(e) = write!(self.writer, ">>> ").and_then(|_| self.writer.flush()) {
            warn!(error = %e, "Failed to write to console");
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                warn!(error = %e, "Failed to read from console");
                None
            }
        }
    }

    /// Asks until the answer is Y or N. `None` when input is closed.
    pub fn ask_play_again(&mut self) -> Option<bool> {
        loop {
            let answer = self.prompt("Would you like to play another round of Blackjack?")?;
            match answer.to_ascii_uppercase().as_str() {
                "Y" => return Some(true),
                "N" => return Some(false),
                _ => self.say("To continue (or not) press Y(es) or N(o)..."),
            }
        }
    }

    pub fn announce(&mut self, outcome: &RoundOutcome) {
        match outcome.winner {
            Winner::Player => {
                self.say(format!("** Winner: player, paid {} chips **", outcome.payout));
                self.say("Winning hand(s):");
                for hand in outcome.winning_hands() {
                    self.say(DIVIDER);
                    self.say(hand);
                }
            }
            Winner::Dealer => {
                self.say("** Winner: dealer **");
                self.say("Winning hand:");
                self.say(DIVIDER);
                self.say(&outcome.dealer_hand);
            }
        }
        self.say(DIVIDER);
        self.say(format!("Chips: {}", outcome.chips_after));
    }

    pub fn summary(&mut self, stats: &SessionStats) {
        self.say(format!(
            "Rounds: {}  Won: {}  Lost: {}  Best streak: {}  Net chips: {:+}",
            stats.rounds_played,
            stats.wins,
            stats.losses,
            stats.best_win_streak,
            stats.net_chips()
        ));
    }
}

impl<R: BufRead, W: Write> PlayerInput for ConsoleInput<R, W> {
    fn next_bet(&mut self, chips: u32) -> Option<String> {
        self.prompt(format!(
            "You have {} chips. Place a two-digit bet (minimum {}):",
            chips, MINIMUM_BET
        ))
    }

    fn next_command(&mut self, view: &TurnView<'_>) -> Option<String> {
        // The second dealer card stays face down until the dealer plays
        match view.dealer.cards().first() {
            Some(up_card) => self.say(format!("Dealer shows: {}", up_card)),
            None => self.say("Dealer shows nothing yet"),
        }
        self.say(format!(
            "Hand {} of {}: {}",
            view.hand_index + 1,
            view.hand_count,
            view.hand
        ));
        self.prompt(format!(
            "Stake {} / chips {}. HIT, STAND, SPLIT or DOUBLE DOWN?",
            view.placed_bet, view.chips
        ))
    }

    fn report(&mut self, error: &GameError) {
        self.say(error);
    }
}
