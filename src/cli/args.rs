use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ramadhan", version, author, about = "Track Ramadhan prayers, tilawah and infaq from the terminal")]
pub struct Cli {
    /// Pretend the current local time is this instant (YYYY-MM-DDTHH:MM)
    #[arg(long, global = true, value_name = "DATETIME")]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's entry and the Ramadhan day
    Today,
    /// Show today's imsakiyah (prayer times)
    Times,
    /// Set a prayer's status for today
    Mark {
        /// Prayer name (subuh, dzuhur, ashar, maghrib, isya, tarawih)
        prayer: String,
        /// jamaah, sendiri, missed or none
        status: String,
        /// Clear the prayer if it already has this status
        #[arg(long)]
        toggle: bool,
    },
    /// Update today's Quran progress
    Quran {
        /// Surah number, 1-114 (resets the verse to 1 when it changes)
        #[arg(long)]
        surah: Option<usize>,
        /// Last verse read
        #[arg(long)]
        ayah: Option<String>,
    },
    /// Record today's infaq in rupiah
    Infaq {
        /// Amount, e.g. 25000 or 25.000
        amount: Option<String>,
        /// Add to the current amount instead of replacing it
        #[arg(long)]
        add: bool,
        /// Set today's infaq back to zero
        #[arg(long, conflicts_with = "amount")]
        reset: bool,
    },
    /// List every recorded day, newest first
    History,
    /// Totals across all recorded days
    Summary,
    /// Export every recorded day as CSV
    Export {
        /// Output file or directory (defaults to the current directory)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show or change the colour theme
    Theme {
        #[arg(value_enum)]
        choice: Option<ThemeChoice>,
    },
    /// List the 114 surahs with their verse counts
    Surahs,
    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_mark_with_clock_override() {
        let cli = Cli::parse_from([
            "ramadhan",
            "mark",
            "isya",
            "jamaah",
            "--at",
            "2026-02-20T19:30",
        ]);
        assert_eq!(cli.at.as_deref(), Some("2026-02-20T19:30"));
        match cli.command {
            Some(Commands::Mark { prayer, status, toggle }) => {
                assert_eq!(prayer, "isya");
                assert_eq!(status, "jamaah");
                assert!(!toggle);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_infaq_reset_conflicts_with_amount() {
        assert!(Cli::try_parse_from(["ramadhan", "infaq", "5000", "--reset"]).is_err());
    }
}
