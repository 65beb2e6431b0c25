//! Clap argument definitions for the `lex` CLI.

use std::{env, process::exit};

use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};
use lex_index::SortOrder;

/// Parses a sort order name.
fn parse_sort(s: &str) -> Result<SortOrder, String> {
    s.parse::<SortOrder>().map_err(|e| e.to_string())
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "lex")]
#[command(about = "Dictionary lookup for Ukrainian words")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `lex lookup`.
#[derive(Args, Debug, Clone, Default)]
pub struct LookupCommand {
    /// Query words; several words are joined with spaces into one query
    pub query: Vec<String>,

    /// Only show entries with this part-of-speech tag
    #[arg(short = 'p', long)]
    pub pos: Option<String>,

    /// Result order: freq, alpha, alpha_rev [default: freq]
    #[arg(short = 's', long, value_parser = parse_sort)]
    pub sort: Option<SortOrder>,

    /// Maximum entries to show, 1 to 10000 [default: 100]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Only show entries whose headword equals the query, even if configured otherwise
    #[arg(long, overrides_with = "no_exact")]
    pub exact: bool,

    /// Also show entries whose headword differs from the query
    #[arg(long, overrides_with = "exact")]
    pub no_exact: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl LookupCommand {
    /// Returns the query words joined into one string, or `None` if no words were given.
    pub fn joined_query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }

    /// Resolves the exact filter: the last of `--exact`/`--no-exact` wins, otherwise the
    /// configured default applies.
    pub fn exact_or(&self, default: bool) -> bool {
        if self.exact {
            true
        } else if self.no_exact {
            false
        } else {
            default
        }
    }
}

/// Arguments for `lex get`.
#[derive(Args, Debug, Clone)]
pub struct GetCommand {
    /// Entry index
    pub index: u32,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `lex tags`.
#[derive(Args, Debug, Clone, Default)]
pub struct TagsCommand {
    /// Show entry counts per tag
    #[arg(short = 'l', long)]
    pub long: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `lex init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.lex.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `lex` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Look up entries matching a query
    #[command(after_help = "\
QUERY SYNTAX:
  word              Headword or term starting with word
  word1 word2       Entries matching both words
  \"phrase\"          Phrase must appear literally in a definition,
                    or equal a form or the headword

Case and stress marks are ignored. A single Ukrainian word without
quotes also matches inside longer terms.

EXAMPLES:
  lex lookup кіт
  lex lookup --no-exact кіт
  lex lookup --no-exact '\"domestic cat\"'
  lex lookup --no-exact -p noun -s alpha кі")]
    Lookup(LookupCommand),

    /// Show one entry by index
    Get(GetCommand),

    /// List part-of-speech tags
    Tags(TagsCommand),

    /// Initialize lex configuration in current directory
    Init(InitCommand),

    /// Show status and validate configuration
    Status,

    /// Show effective configuration settings
    Config,
}

/// Parses CLI arguments, printing a compact command list for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_command_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints the top-level help with one line per subcommand.
fn print_command_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: lex <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }
        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");
    }

    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("  -h, --help  Print help");
    println!();
    println!("Set LEX_LOG (e.g. LEX_LOG=debug) to log lookup details to stderr.");
}

#[cfg(test)]
mod tests {
    use lex_index::{DEFAULT_LIMIT, MAX_LIMIT};

    use super::*;

    /// Gets help text for a subcommand's argument.
    fn get_arg_help(cmd: &clap::Command, subcmd: &str, arg: &str) -> String {
        cmd.get_subcommands()
            .find(|c| c.get_name() == subcmd)
            .and_then(|c| c.get_arguments().find(|a| a.get_id() == arg))
            .and_then(|a| a.get_help().map(|h| h.to_string()))
            .unwrap_or_default()
    }

    /// Catches drift between the limit constants and the help text.
    #[test]
    fn cli_help_defaults_match_constants() {
        let cmd = Cli::command();

        let limit_help = get_arg_help(&cmd, "lookup", "limit");
        assert!(
            limit_help.contains(&format!("[default: {DEFAULT_LIMIT}]")),
            "lookup --limit help should contain default {DEFAULT_LIMIT}: {limit_help}"
        );
        assert!(limit_help.contains(&format!("1 to {MAX_LIMIT}")));

        let sort_help = get_arg_help(&cmd, "lookup", "sort");
        assert!(sort_help.contains(&format!("[default: {}]", SortOrder::default())));
        assert!(sort_help.contains(&SortOrder::valid_names()));
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn lookup_words_are_joined() {
        let cli = Cli::try_parse_from(["lex", "lookup", "домашній", "кіт", "--no-exact"]).unwrap();
        let Commands::Lookup(cmd) = cli.command else {
            panic!("expected lookup");
        };
        assert_eq!(cmd.joined_query().as_deref(), Some("домашній кіт"));
        assert!(cmd.no_exact);
        assert!(cmd.sort.is_none());
    }

    #[test]
    fn lookup_without_words_has_no_query() {
        let cli = Cli::try_parse_from(["lex", "lookup"]).unwrap();
        let Commands::Lookup(cmd) = cli.command else {
            panic!("expected lookup");
        };
        assert_eq!(cmd.joined_query(), None);
    }

    /// Parses a `lookup` command line.
    fn lookup(args: &[&str]) -> LookupCommand {
        let cli = Cli::try_parse_from(["lex", "lookup"].iter().chain(args).copied()).unwrap();
        let Commands::Lookup(cmd) = cli.command else {
            panic!("expected lookup");
        };
        cmd
    }

    #[test]
    fn exact_flags_override_default() {
        assert!(lookup(&["x"]).exact_or(true));
        assert!(!lookup(&["x"]).exact_or(false));
        assert!(lookup(&["--exact", "x"]).exact_or(false));
        assert!(!lookup(&["--no-exact", "x"]).exact_or(true));
    }

    #[test]
    fn last_exact_flag_wins() {
        assert!(!lookup(&["--exact", "--no-exact", "x"]).exact_or(true));
        assert!(lookup(&["--no-exact", "--exact", "x"]).exact_or(false));
    }

    #[test]
    fn sort_is_parsed() {
        let cli = Cli::try_parse_from(["lex", "lookup", "-s", "alpha_rev", "x"]).unwrap();
        let Commands::Lookup(cmd) = cli.command else {
            panic!("expected lookup");
        };
        assert_eq!(cmd.sort, Some(SortOrder::AlphaRev));
    }

    #[test]
    fn unknown_sort_is_rejected() {
        let err = Cli::try_parse_from(["lex", "lookup", "-s", "random", "x"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("invalid sort value 'random'"));
    }
}
