use std::io::{self, BufRead};
use std::sync::Arc;

use scorekeeper::api::{GameAuthority, HttpGameAuthority};
use scorekeeper::config::Config;
use scorekeeper::services::{GameSession, HighscoreService};

mod telemetry;

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // SCOREKEEPER_API_URL points at the bowling service, e.g.
    // http://localhost:5077/api
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let player = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Player 1".to_string());

    let authority: Arc<dyn GameAuthority> = match HttpGameAuthority::new(&config) {
        Ok(authority) => Arc::new(authority),
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let mut session = GameSession::new(Arc::clone(&authority));
    if let Err(e) = session.start_game(&player).await {
        eprintln!("❌ Failed to start game. Please try again. ({})", e.detail());
        std::process::exit(1);
    }

    println!("🎳 Game on, {player}! Enter pins per roll (0-10), q to quit.");
    print_scoreboard(&session);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("q") {
            break;
        }
        let Ok(pins) = trimmed.parse::<i32>() else {
            println!("Enter a number between 0 and 10, or q to quit.");
            continue;
        };

        match session.roll(pins).await {
            Ok(_) => print_scoreboard(&session),
            Err(e) => println!("{}", e.detail()),
        }

        if session.is_game_over() {
            println!("🏁 Final score: {}", session.total_score());
            print_highscores(Arc::clone(&authority)).await;
            break;
        }
    }
}

fn print_scoreboard(session: &GameSession) {
    let views = session.scoreboard();
    let mut header = String::from("|");
    let mut rolls = String::from("|");
    let mut totals = String::from("|");

    for view in &views {
        let width = if view.is_tenth { 7 } else { 5 };
        let cell = if view.is_tenth {
            format!("{:>1} {:>1} {:>1}", view.roll1, view.roll2, view.roll3)
        } else {
            format!("{:>1} {:>1}", view.roll1, view.roll2)
        };
        let total = view.score.map(|s| s.to_string()).unwrap_or_default();
        header.push_str(&format!("{:^width$}|", view.frame_number));
        rolls.push_str(&format!("{cell:^width$}|"));
        totals.push_str(&format!("{total:^width$}|"));
    }

    println!("{header}");
    println!("{rolls}");
    println!("{totals}");
}

async fn print_highscores(authority: Arc<dyn GameAuthority>) {
    let mut highscores = HighscoreService::new(authority);
    for entry in highscores.load().await {
        println!(
            "{:>5}  {}  ({})",
            entry.score,
            entry.name,
            entry.date_achieved.date()
        );
    }
    if let Some(err) = highscores.last_error() {
        println!("{err}");
    }
}
