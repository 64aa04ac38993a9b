use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pollito", version, about = "A friendly terminal companion for kids' nutrition games and their pet Señor Pollo")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// First-run setup (player name, pet name)
    Setup {
        /// Reset existing configuration and one-time hints
        #[arg(long)]
        reset: bool,
    },
    /// Record a finished mini-game
    Log {
        /// Game name (quiz, memory, foodsort, plate)
        game: String,
        /// Correct answers
        #[arg(long)]
        correct: u32,
        /// Total questions
        #[arg(long)]
        total: u32,
        /// Seconds the round took; earns a time bonus when under the limit
        #[arg(long)]
        seconds: Option<u32>,
        /// Time limit for the bonus
        #[arg(long, default_value = "60")]
        max_seconds: u32,
    },
    /// Feed the pet (needs 4 distinct games today)
    Feed,
    /// Show the pet: mood, happiness, streak
    Pet,
    /// Show the achievement catalog
    Achievements,
    /// Show level, totals and streaks
    Stats {
        /// Show an ASCII grid for the last 7 days
        #[arg(long)]
        week: bool,
    },
    /// Print a weekly summary for parents
    Export {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
