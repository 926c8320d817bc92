//! CLI subcommand definitions

use clap::Subcommand;

use crate::core::Habit;

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Check in today's habits and generate a coach report (default)
    Report {
        /// Habit completed today; repeat for several (see `habitcoach list`)
        #[arg(short, long = "done", value_name = "HABIT")]
        done: Vec<Habit>,
    },
    /// Interactive check-in session; history lasts until you quit
    Session,
    /// List habits, cities and coach personas
    List,
}
