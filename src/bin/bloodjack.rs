//! Bloodjack Binary
//!
//! Plays Bloodjack in the terminal, or lets the robot play a batch of games
//! and reports how it fared.
//!
//! Options: --games, --seed, --human, --mulligan, --verbose

use bloodjack::gameplay::Summary;
use bloodjack::players::*;
use clap::Parser;
use colored::Colorize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 1, help = "Number of robot games to play")]
    games: usize,
    #[arg(long, help = "Seed the deals and the robot for reproducible runs")]
    seed: Option<u64>,
    #[arg(long, help = "Play yourself instead of watching the robot")]
    human: bool,
    #[arg(long, help = "Redeal whenever the robot would spend an early Joker")]
    mulligan: bool,
    #[arg(short, long, help = "Log every transition to the terminal")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    bloodjack::log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    });
    if args.human {
        let summary = match args.seed {
            Some(seed) => Session::seeded(Human, seed).run()?,
            None => Session::new(Human).run()?,
        };
        println!("{}", paint(&summary));
        return Ok(());
    }
    let mut wins = 0;
    let mut mulligans = 0;
    for n in 0..args.games {
        let mut session = match args.seed {
            Some(seed) => Session::seeded(Robot::seeded(seed + n as u64), seed + n as u64),
            None => Session::new(Robot::default()),
        }
        .mulligan(args.mulligan);
        let summary = session.run()?;
        log::info!("game {:>4} {}", n + 1, paint(&summary));
        let stats = session.game().stats();
        log::debug!("{} ({:.0}% accuracy)", stats, 100. * stats.accuracy());
        mulligans += session.mulligans();
        if summary.is_win() {
            wins += 1;
        }
    }
    log::info!(
        "won {}/{} ({:.1}%) with {} mulligans",
        wins,
        args.games,
        100. * wins as f32 / args.games.max(1) as f32,
        mulligans
    );
    Ok(())
}

fn paint(summary: &Summary) -> String {
    match summary.is_win() {
        true => summary.to_string().green().to_string(),
        false => summary.to_string().red().to_string(),
    }
}
