//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::ThemePreference;

/// Theme override accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    /// Light palette.
    Light,
    /// Dark palette.
    Dark,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemePreference::Light,
            ThemeArg::Dark => ThemePreference::Dark,
        }
    }
}

/// A terminal multi-select tag picker.
///
/// Reads a JSON array of `{id, label, avatar?}` objects, lets you pick any
/// number of them as tags, and prints the chosen ids on exit, one per line.
#[derive(Debug, Parser)]
#[command(name = "tagpick", version, about)]
pub struct Cli {
    /// Path to the JSON items file.
    pub items: PathBuf,

    /// Pre-select an item by id (repeatable).
    #[arg(short, long = "preselect", value_name = "ID")]
    pub preselect: Vec<String>,

    /// Start with this filter text already typed.
    #[arg(short, long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Placeholder shown in the empty filter input.
    #[arg(long, value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// Override the configured theme.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Print labels instead of ids.
    #[arg(long)]
    pub print_labels: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_invocation() {
        let cli = Cli::try_parse_from(["tagpick", "items.json"]).unwrap();
        assert_eq!(cli.items, PathBuf::from("items.json"));
        assert!(cli.preselect.is_empty());
        assert!(cli.filter.is_none());
        assert!(!cli.print_labels);
    }

    #[test]
    fn test_items_path_required() {
        assert!(Cli::try_parse_from(["tagpick"]).is_err());
    }

    #[test]
    fn test_repeatable_preselect() {
        let cli =
            Cli::try_parse_from(["tagpick", "items.json", "-p", "1", "--preselect", "2"]).unwrap();
        assert_eq!(cli.preselect, vec!["1", "2"]);
    }

    #[test]
    fn test_theme_override() {
        let cli = Cli::try_parse_from(["tagpick", "items.json", "--theme", "light"]).unwrap();
        assert_eq!(cli.theme, Some(ThemeArg::Light));
        assert_eq!(
            ThemePreference::from(cli.theme.unwrap()),
            ThemePreference::Light
        );
    }

    #[test]
    fn test_filter_and_placeholder() {
        let cli = Cli::try_parse_from([
            "tagpick",
            "items.json",
            "--filter",
            "al",
            "--placeholder",
            "Pick a person",
        ])
        .unwrap();
        assert_eq!(cli.filter.as_deref(), Some("al"));
        assert_eq!(cli.placeholder.as_deref(), Some("Pick a person"));
    }
}
