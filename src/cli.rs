//! Command-line interface for tembo_trails.

use clap::{Parser, Subcommand};

/// Tembo Trails - elephant companion on the command line
#[derive(Parser, Debug)]
#[command(name = "tembo_trails")]
#[command(about = "Memory game, trivia, journal, and sighting log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the database file (created if it doesn't exist)
    #[arg(long, default_value = "tembo_trails.db")]
    pub db_path: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the memory-matching game
    Play {
        /// Number of pairs on the board (1-8)
        #[arg(long, default_value = "8")]
        pairs: usize,
    },

    /// Take the elephant trivia quiz
    Quiz,

    /// Show the fact of the day
    Fact,

    /// Show badge progress
    Badges,

    /// Manage journal entries
    Journal {
        /// Journal action
        #[command(subcommand)]
        action: JournalCommand,
    },

    /// Manage the expedition log
    Expedition {
        /// Expedition action
        #[command(subcommand)]
        action: ExpeditionCommand,
    },

    /// Manage sighting pins
    Pins {
        /// Pin action
        #[command(subcommand)]
        action: PinCommand,
    },
}

/// Journal subcommands
#[derive(Subcommand, Debug)]
pub enum JournalCommand {
    /// List all entries, newest first
    List,
    /// Add an entry
    Add {
        /// Entry title
        #[arg(long)]
        title: String,
        /// Entry body
        #[arg(long)]
        content: String,
    },
    /// Delete an entry by id
    Delete {
        /// Entry id
        id: String,
    },
}

/// Expedition subcommands
#[derive(Subcommand, Debug)]
pub enum ExpeditionCommand {
    /// List all expeditions with aggregate stats
    List,
    /// Log a new expedition
    Add {
        /// Expedition title
        #[arg(long)]
        title: String,
        /// Log a simulation instead of a real outing
        #[arg(long)]
        simulation: bool,
        /// Where it takes place
        #[arg(long, default_value = "")]
        location: String,
        /// Expected duration, e.g. "3 days"
        #[arg(long, default_value = "")]
        duration: String,
    },
    /// Mark an expedition completed
    Complete {
        /// Expedition id
        id: String,
    },
}

/// Pin subcommands
#[derive(Subcommand, Debug)]
pub enum PinCommand {
    /// List all sighting pins (seeds demo pins on first run)
    List,
    /// Record a sighting
    Add {
        /// Latitude of the sighting
        #[arg(long)]
        latitude: f64,
        /// Longitude of the sighting
        #[arg(long)]
        longitude: f64,
        /// Short title
        #[arg(long)]
        title: String,
        /// What was observed
        #[arg(long, default_value = "")]
        description: String,
        /// How many elephants
        #[arg(long, default_value = "1")]
        herd_size: i32,
    },
}
