//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "zookeep",
    bin_name = "zookeep",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f43e} Zoo roster and staff payroll at a glance",
    long_about = "Zookeep walks a small zoo: a payroll view over the staff \
                  roster and a tour of the organisms kept in the exhibits.",
    after_help = "EXAMPLES:\n\
        \x20 zookeep payroll\n\
        \x20 zookeep payroll --group\n\
        \x20 zookeep payroll --bracket upper --format json\n\
        \x20 zookeep zoo --sounds\n\
        \x20 zookeep completions bash > /usr/share/bash-completion/completions/zookeep",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the staff roster sorted by salary.
    #[command(
        visible_alias = "pay",
        about = "Show the staff payroll",
        after_help = "EXAMPLES:\n\
            \x20 zookeep payroll\n\
            \x20 zookeep payroll --group\n\
            \x20 zookeep payroll --bracket middle\n\
            \x20 zookeep payroll --format csv"
    )]
    Payroll(PayrollArgs),

    /// Tour the zoo exhibits.
    #[command(
        about = "Present the zoo exhibits",
        after_help = "EXAMPLES:\n\
            \x20 zookeep zoo\n\
            \x20 zookeep zoo --sounds\n\
            \x20 zookeep zoo --respiration\n\
            \x20 zookeep zoo --respire"
    )]
    Zoo(ZooArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 zookeep completions bash > ~/.local/share/bash-completion/completions/zookeep\n\
            \x20 zookeep completions zsh  > ~/.zfunc/_zookeep\n\
            \x20 zookeep completions fish > ~/.config/fish/completions/zookeep.fish"
    )]
    Completions(CompletionsArgs),
}

// ── payroll ───────────────────────────────────────────────────────────────────

/// Arguments for `zookeep payroll`.
#[derive(Debug, Args)]
pub struct PayrollArgs {
    /// Group the roster by salary bracket instead of listing it sorted.
    #[arg(
        short = 'g',
        long = "group",
        conflicts_with = "bracket",
        help = "Group by salary bracket"
    )]
    pub group: bool,

    /// Show only one salary bracket.
    #[arg(
        short = 'b',
        long = "bracket",
        value_name = "BRACKET",
        help = "Filter to one bracket (lower, middle, upper)"
    )]
    pub bracket: Option<String>,

    /// Output format.  Falls back to `defaults.payroll_format` from the
    /// config file, then to `table`.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<PayrollFormat>,
}

/// Output format for the `payroll` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PayrollFormat {
    /// Human-readable listing with a greeting header.
    Table,
    /// One `Name: <name> Salary: <salary>` line per record.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── zoo ───────────────────────────────────────────────────────────────────────

/// Arguments for `zookeep zoo`.
#[derive(Debug, Args)]
pub struct ZooArgs {
    /// Only the animal sounds.
    #[arg(long = "sounds", help = "Only animal sounds")]
    pub sounds: bool,

    /// Only the plant respiration lines.
    #[arg(
        long = "respiration",
        conflicts_with = "sounds",
        help = "Only plant respiration"
    )]
    pub respiration: bool,

    /// Every organism's respiration, animals and plants alike.
    #[arg(
        long = "respire",
        conflicts_with_all = ["sounds", "respiration"],
        help = "Every organism's respiration"
    )]
    pub respire: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `zookeep completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Shells we can generate completions for.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn payroll_group_and_bracket_conflict() {
        assert!(Cli::try_parse_from(["zookeep", "payroll", "--group", "--bracket", "upper"]).is_err());
    }

    #[test]
    fn zoo_selectors_conflict() {
        assert!(Cli::try_parse_from(["zookeep", "zoo", "--sounds", "--respiration"]).is_err());
        assert!(Cli::try_parse_from(["zookeep", "zoo", "--respire", "--sounds"]).is_err());
        assert!(Cli::try_parse_from(["zookeep", "zoo", "--respire", "--respiration"]).is_err());
    }

    #[test]
    fn payroll_alias_parses() {
        let cli = Cli::try_parse_from(["zookeep", "pay"]).unwrap();
        assert!(matches!(cli.command, Commands::Payroll(_)));
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["zookeep", "-v", "-q", "payroll"]).is_err());
    }
}
