//! Tembo Trails - unified CLI
//!
//! Elephant companion: memory game, trivia, journal, expedition log, and
//! sighting pins, all persisted to a local SQLite file.

#![warn(missing_docs)]

mod cli;

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, ExpeditionCommand, JournalCommand, PinCommand};
use tembo_trails::{
    Badge, BadgeBook, DailyFact, ExpeditionKind, ExpeditionLog, FlipResponse, Journal, KvStore,
    MemoryGame, MemoryStats, NewPin, PinRepository, QuizProgress, QuizRound, Resolution, Round,
    content,
};

/// Delay between flipping the second tile and resolving the pair.
const EVALUATION_DELAY: Duration = Duration::from_millis(1000);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    tembo_trails::run_migrations(&cli.db_path)?;
    let store = KvStore::new(cli.db_path.clone())?;

    match cli.command {
        Command::Play { pairs } => play_memory(&store, pairs).await,
        Command::Quiz => run_quiz(&store),
        Command::Fact => show_fact(&store),
        Command::Badges => show_badges(&store),
        Command::Journal { action } => run_journal(&store, action),
        Command::Expedition { action } => run_expedition(&store, action),
        Command::Pins { action } => run_pins(&cli.db_path, action),
    }
}

/// Interactive memory game on stdin.
async fn play_memory(store: &KvStore, pairs: usize) -> Result<()> {
    let symbols = content::standard_symbols();
    let pairs = pairs.clamp(1, symbols.len());

    let mut game = MemoryGame::new();
    let mut rng = rand::rng();
    game.start(&symbols[..pairs], &mut rng);
    println!("Match all {pairs} pairs in as few moves as you can.");
    println!("Enter a tile number to flip it, 'r' to restart, 'q' to quit.\n");

    loop {
        let Some(round) = game.round() else { break };
        render_board(round);
        print!("tile> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "q" => break,
            "r" => {
                game.start(&symbols[..pairs], &mut rng);
                println!("Board reshuffled.\n");
                continue;
            }
            input => {
                let Ok(position) = input.parse::<usize>() else {
                    println!("Enter a tile number, 'r', or 'q'.");
                    continue;
                };
                match game.flip(position) {
                    FlipResponse::Ignored => println!("That tile can't be flipped right now."),
                    FlipResponse::Revealed => {}
                    FlipResponse::EvaluationDue(ticket) => {
                        if let Some(round) = game.round() {
                            render_board(round);
                        }
                        tokio::time::sleep(EVALUATION_DELAY).await;
                        match game.resolve(ticket) {
                            Resolution::Matched => println!("A match!"),
                            Resolution::Mismatched => println!("No match."),
                            Resolution::Won { moves } => {
                                println!(
                                    "\nCongratulations! You completed the game in {moves} moves."
                                );
                                record_memory_win(store, pairs as u32, moves);
                                return Ok(());
                            }
                            Resolution::Stale | Resolution::NotReady => {}
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

/// Prints the board, four tiles per row.
fn render_board(round: &Round) {
    println!(
        "moves: {}  matches: {}/{}",
        round.move_count(),
        round.matched_pairs(),
        round.pair_count()
    );
    for (position, tile) in round.tiles().iter().enumerate() {
        let face = if tile.revealed() {
            content::item_for(tile.symbol())
                .map(|item| item.emoji)
                .unwrap_or("?")
        } else {
            "\u{25A1}"
        };
        print!("{position:>3}:{face:<3}");
        if position % 4 == 3 {
            println!();
        }
    }
    println!();
}

/// Persists a win and announces any badges it earned.
fn record_memory_win(store: &KvStore, pairs: u32, moves: u32) {
    let stats = MemoryStats::new(store.clone());
    if let Err(e) = stats.record_win(pairs, moves) {
        eprintln!("Could not record the win: {e}");
    } else if let Some(best) = stats.best_moves() {
        println!("Best game so far: {best} moves.");
    }

    match BadgeBook::new(store.clone()).record_memory_win() {
        Ok(earned) => announce_badges(&earned),
        Err(e) => eprintln!("Could not update badges: {e}"),
    }
}

/// Interactive trivia quiz on stdin.
fn run_quiz(store: &KvStore) -> Result<()> {
    let mut quiz = QuizRound::new(content::quiz_questions())?;

    while let Some(question) = quiz.current_question().cloned() {
        println!(
            "\nQuestion {}/{}: {}",
            quiz.current_index() + 1,
            quiz.total(),
            question.prompt
        );
        for (index, option) in question.options.iter().enumerate() {
            println!("  {}. {option}", index + 1);
        }
        print!("answer> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let Ok(choice) = line.trim().parse::<usize>() else {
            println!("Enter the number of an option.");
            continue;
        };
        let Some(choice) = choice.checked_sub(1) else {
            println!("Enter the number of an option.");
            continue;
        };

        match quiz.answer(choice) {
            Ok(answered) => {
                if answered.correct {
                    println!("Correct! {}", answered.explanation);
                } else {
                    println!(
                        "Not quite - the answer was {}. {}",
                        question.options[answered.correct_answer], answered.explanation
                    );
                }
                if let QuizProgress::Finished(summary) = quiz.advance()? {
                    println!("\nFinal score: {}/{}", summary.score, summary.total);
                    match BadgeBook::new(store.clone()).record_quiz(summary.perfect()) {
                        Ok(earned) => announce_badges(&earned),
                        Err(e) => eprintln!("Could not update badges: {e}"),
                    }
                }
            }
            Err(e) => println!("{e}"),
        }
    }
    Ok(())
}

/// Prints the fact of the day and a quote.
fn show_fact(store: &KvStore) -> Result<()> {
    let mut rng = rand::rng();
    let fact = DailyFact::new(store.clone()).fact_of_the_day(&mut rng);
    println!("Fact of the day ({}):\n{}\n", fact.category, fact.text);

    let quote = content::random_quote(&mut rng);
    println!("\"{}\"\n  - {}", quote.text, quote.author);
    Ok(())
}

/// Prints badge progress.
fn show_badges(store: &KvStore) -> Result<()> {
    let progress = BadgeBook::new(store.clone()).progress();
    println!(
        "Quizzes taken: {} (perfect: {})  Memory wins: {}  Journal entries: {}\n",
        progress.quizzes_taken,
        progress.perfect_quizzes,
        progress.memory_wins,
        progress.journal_entries
    );
    for badge in tembo_trails::BADGES {
        let earned = progress.earned.iter().any(|id| id == badge.id);
        let mark = if earned { "x" } else { " " };
        println!("[{mark}] {} - {}", badge.name, badge.description);
    }
    Ok(())
}

/// Announces freshly earned badges.
fn announce_badges(earned: &[&'static Badge]) {
    for badge in earned {
        println!("Badge earned: {} ({})", badge.name, badge.description);
    }
}

/// Journal subcommands.
fn run_journal(store: &KvStore, action: JournalCommand) -> Result<()> {
    let journal = Journal::new(store.clone());
    match action {
        JournalCommand::List => {
            let entries = journal.entries();
            if entries.is_empty() {
                println!("No journal entries yet.");
            }
            for entry in entries {
                println!(
                    "[{}] {} ({})\n{}\n",
                    entry.id,
                    entry.title,
                    entry.date.format("%Y-%m-%d"),
                    entry.content
                );
            }
        }
        JournalCommand::Add { title, content } => {
            let entry = journal.add(&title, &content)?;
            println!("Added entry {} - {}", entry.id, entry.title);
            match BadgeBook::new(store.clone()).record_journal_entry() {
                Ok(earned) => announce_badges(&earned),
                Err(e) => eprintln!("Could not update badges: {e}"),
            }
        }
        JournalCommand::Delete { id } => {
            if journal.delete(&id)? {
                println!("Deleted entry {id}.");
            } else {
                println!("No entry with id {id}.");
            }
        }
    }
    Ok(())
}

/// Expedition subcommands.
fn run_expedition(store: &KvStore, action: ExpeditionCommand) -> Result<()> {
    let log = ExpeditionLog::new(store.clone());
    match action {
        ExpeditionCommand::List => {
            let stats = log.stats();
            println!(
                "{} expeditions ({} completed, {} in progress; {} real, {} simulations)\n",
                stats.total, stats.completed, stats.in_progress, stats.real, stats.simulations
            );
            for expedition in log.list() {
                println!(
                    "[{}] {} - {} ({}, started {})",
                    expedition.id,
                    expedition.title,
                    expedition.status,
                    expedition.kind,
                    expedition.start_date.format("%Y-%m-%d")
                );
                for (index, item) in expedition.checklist.iter().enumerate() {
                    let mark = if item.completed { "x" } else { " " };
                    println!("    [{mark}] {index}. {}", item.task);
                }
            }
        }
        ExpeditionCommand::Add {
            title,
            simulation,
            location,
            duration,
        } => {
            let kind = if simulation {
                ExpeditionKind::Simulation
            } else {
                ExpeditionKind::Real
            };
            let expedition = log.add(&title, kind, &location, &duration, Vec::new(), "")?;
            println!("Logged expedition {} - {}", expedition.id, expedition.title);
        }
        ExpeditionCommand::Complete { id } => {
            if log.complete(&id)? {
                println!("Expedition {id} completed.");
            } else {
                println!("No in-progress expedition with id {id}.");
            }
        }
    }
    Ok(())
}

/// Pin subcommands.
fn run_pins(db_path: &str, action: PinCommand) -> Result<()> {
    let repo = PinRepository::new(db_path.to_string())?;
    match action {
        PinCommand::List => {
            repo.seed_demo_pins()?;
            for pin in repo.list_pins()? {
                println!(
                    "[{}] {} at ({:.5}, {:.5}) herd of {} - {}",
                    pin.id(),
                    pin.title(),
                    pin.latitude(),
                    pin.longitude(),
                    pin.herd_size(),
                    pin.description()
                );
            }
        }
        PinCommand::Add {
            latitude,
            longitude,
            title,
            description,
            herd_size,
        } => {
            let pin = repo.insert_pin(NewPin::at(
                latitude,
                longitude,
                title,
                description,
                herd_size,
                chrono::Utc::now(),
            ))?;
            println!("Recorded sighting pin {}.", pin.id());
        }
    }
    Ok(())
}
