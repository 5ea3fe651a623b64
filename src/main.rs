use std::io;
use std::process::ExitCode;

use blackjack::{console::ConsoleInput, play_round, GameConfig, GameError, SessionStats};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with prompts
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blackjack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = GameConfig::from_env();
    info!(
        player = %config.player_name,
        chips = config.starting_chips,
        seeded = config.seed.is_some(),
        "Starting blackjack session"
    );

    let mut player = config.new_player();
    let mut dealer = config.new_dealer();
    let mut console = ConsoleInput::new(io::stdin().lock(), io::stdout());
    let mut stats = SessionStats::default();

    console.say(format!("Welcome to the table, {}!", player.name()));

    let code = loop {
        match play_round(&mut player, &mut dealer, &mut console) {
            Ok(outcome) => {
                stats.record(&outcome);
                console.announce(&outcome);
            }
            Err(e @ GameError::InsufficientFunds { .. }) => {
                console.say(&e);
                break ExitCode::from(2);
            }
            Err(GameError::InputClosed) => break ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "Round aborted");
                console.say(&e);
                break ExitCode::FAILURE;
            }
        }

        match console.ask_play_again() {
            Some(true) => continue,
            _ => break ExitCode::SUCCESS,
        }
    };

    console.summary(&stats);
    console.say("Goodbye!");
    info!(rounds = stats.rounds_played, net = stats.net_chips(), "Session over");
    code
}
