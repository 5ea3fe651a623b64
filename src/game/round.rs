use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::cards::Hand;
use super::dealer::Dealer;
use super::errors::GameError;
use super::input::{PlayerInput, TurnView};
use super::player::{Command, Decision, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Dealer,
}

/// Everything a finished round leaves behind once its cards are back in the shoe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub id: Uuid,
    pub completed_at: DateTime<Utc>,
    pub winner: Winner,
    pub opening_bet: u32,
    /// Stake after any split or double down.
    pub stake: u32,
    pub payout: u32,
    pub dealer_bust: bool,
    pub player_hands: Vec<Hand>,
    pub dealer_hand: Hand,
    pub chips_after: u32,
}

impl RoundOutcome {
    pub fn winning_hands(&self) -> Vec<&Hand> {
        self.player_hands.iter().filter(|hand| hand.win).collect()
    }

    /// Chips gained or lost over the round.
    pub fn net(&self) -> i64 {
        self.payout as i64 - self.stake as i64
    }
}

/// Plays one full round: bet, initial deal, the player's hands, the dealer's
/// draw, payout and cleanup. `InsufficientFunds` and the other fatal errors
/// are returned to the caller; rejected bets and moves are reported through
/// `input` and asked for again.
pub fn play_round(
    player: &mut Player,
    dealer: &mut Dealer,
    input: &mut dyn PlayerInput,
) -> Result<RoundOutcome, GameError> {
    Round::new(player, dealer).play(input)
}

struct Round<'a> {
    id: Uuid,
    player: &'a mut Player,
    dealer: &'a mut Dealer,
}

impl<'a> Round<'a> {
    fn new(player: &'a mut Player, dealer: &'a mut Dealer) -> Self {
        Self {
            id: Uuid::new_v4(),
            player,
            dealer,
        }
    }

    #[instrument(skip_all, fields(round_id = %self.id, player = %self.player.name()))]
    fn play(mut self, input: &mut dyn PlayerInput) -> Result<RoundOutcome, GameError> {
        // Cards left over from a round that ended in an error.
        self.cleanup();

        let opening_bet = self.collect_bet(input)?;
        self.initial_deal()?;
        self.player_turns(input)?;
        let dealer_bust = self.dealer_turn()?;
        let outcome = self.settle(opening_bet, dealer_bust);
        self.cleanup();

        info!(
            winner = ?outcome.winner,
            payout = outcome.payout,
            chips = outcome.chips_after,
            "Round complete"
        );
        Ok(outcome)
    }

    fn collect_bet(&mut self, input: &mut dyn PlayerInput) -> Result<u32, GameError> {
        self.player.ensure_can_bet()?;
        loop {
            let line = input
                .next_bet(self.player.chips())
                .ok_or(GameError::InputClosed)?;
            match self.player.bet(&line) {
                Ok(amount) => {
                    info!(amount, chips = self.player.chips(), "Bet placed");
                    return Ok(amount);
                }
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "Rejected bet");
                    input.report(&e);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn initial_deal(&mut self) -> Result<(), GameError> {
        let hand = self.dealer.deal_initial()?;
        debug!(player_hand = %hand, dealer_hand = %self.dealer.hand(), "Initial deal");
        self.player.collect_hand(hand);
        Ok(())
    }

    /// Works through the player's hands with a queue of hand indices. A hit
    /// puts the same hand back at the front; a split puts both resulting
    /// hands at the front, in order, so they are played next.
    fn player_turns(&mut self, input: &mut dyn PlayerInput) -> Result<(), GameError> {
        let mut pending: VecDeque<usize> = VecDeque::from([0]);

        while let Some(index) = pending.pop_front() {
            let decision = self.decide(index, input)?;
            debug!(hand = index, %decision, "Player decision");

            match decision {
                Decision::Stand => {}
                Decision::Hit => {
                    let cards = self.dealer.deal(decision)?;
                    let hand = self.player.hand_mut(index)?;
                    for card in cards {
                        hand.push(card);
                    }
                    pending.push_front(index);
                }
                Decision::DoubleDown => {
                    let cards = self.dealer.deal(decision)?;
                    let hand = self.player.hand_mut(index)?;
                    for card in cards {
                        hand.push(card);
                    }
                    hand.double_down = true;
                    if hand.is_busted() {
                        hand.bust = true;
                    }
                    info!(hand = %hand, "Doubled down");
                }
                Decision::Split => {
                    let cards = self.dealer.deal(decision)?;
                    let [first, second] = self.player.split_hand(index, cards)?;
                    pending.push_front(second);
                    pending.push_front(first);
                    info!(hands = self.player.hands().len(), "Hand split");
                }
                Decision::Bust => {
                    self.player.hand_mut(index)?.bust = true;
                }
            }
        }
        Ok(())
    }

    fn decide(&mut self, index: usize, input: &mut dyn PlayerInput) -> Result<Decision, GameError> {
        if let Some(decision) = self.player.forced_decision(index)? {
            return Ok(decision);
        }

        loop {
            let view = TurnView {
                hand: self.player.hand(index)?,
                hand_index: index,
                hand_count: self.player.hands().len(),
                dealer: self.dealer.hand(),
                chips: self.player.chips(),
                placed_bet: self.player.placed_bet(),
            };
            let line = input.next_command(&view).ok_or(GameError::InputClosed)?;

            match Command::parse(&line).and_then(|command| self.player.check_hand(index, command)) {
                Ok(decision) => return Ok(decision),
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "Rejected move");
                    input.report(&e);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Draws for the dealer while any surviving hand would currently win.
    /// Returns whether the dealer bust.
    fn dealer_turn(&mut self) -> Result<bool, GameError> {
        let best = self
            .player
            .hands()
            .iter()
            .filter(|hand| !hand.bust)
            .map(Hand::value)
            .max();

        let Some(best) = best else {
            debug!("Every player hand bust, dealer does not draw");
            return Ok(false);
        };

        if best >= self.dealer.hand().value() {
            let value = self.dealer.play_out()?;
            debug!(value, "Dealer stands or busts");
        }
        Ok(self.dealer.hand().is_busted())
    }

    /// Marks winning hands and pays the player. Surviving hands win against a
    /// bust dealer or when their value is at least the dealer's; ties go to
    /// the player. A winning round pays twice the final stake.
    fn settle(&mut self, opening_bet: u32, dealer_bust: bool) -> RoundOutcome {
        let dealer_value = self.dealer.hand().value();
        let mut player_won = false;

        for hand in self.player.hands_mut().iter_mut().filter(|hand| !hand.bust) {
            hand.win = dealer_bust || hand.value() >= dealer_value;
            player_won |= hand.win;
        }

        let stake = self.player.placed_bet();
        let payout = if player_won { stake * 2 } else { 0 };
        self.player.award(payout);
        self.player.set_winner(player_won);
        self.dealer.set_winner(!player_won);

        RoundOutcome {
            id: self.id,
            completed_at: Utc::now(),
            winner: if player_won {
                Winner::Player
            } else {
                Winner::Dealer
            },
            opening_bet,
            stake,
            payout,
            dealer_bust,
            player_hands: self.player.hands().to_vec(),
            dealer_hand: self.dealer.hand().clone(),
            chips_after: self.player.chips(),
        }
    }

    fn cleanup(&mut self) {
        let cards = self.player.clear_round();
        self.dealer.reclaim(cards);
        debug!(shoe = self.dealer.shoe().len(), "Cards returned to shoe");
    }
}
