//! Runtime configuration for the ChessDuel terminal client.
//!
//! Every value has a built-in default, can be overridden through an
//! environment variable, and again through a command-line flag.

use std::path::{Path, PathBuf};

use chess::Position;
use clap::Parser;

use crate::ui::theme::{GlyphSet, ThemeVariant};

/// Default directory for the rolling log file.
const DEFAULT_LOG_DIR: &str = "logs";

/// Prefix of the daily log file, `chessduel.YYYY-MM-DD`.
pub const LOG_FILE_PREFIX: &str = "chessduel";

/// Two-player chess in the terminal.
#[derive(Debug, Parser)]
#[command(name = "chessduel", version, about)]
pub struct Cli {
    /// Color palette
    #[arg(long, value_enum)]
    pub theme: Option<ThemeVariant>,

    /// How pieces are drawn
    #[arg(long, value_enum)]
    pub glyphs: Option<GlyphSet>,

    /// Start from this position instead of the standard one
    #[arg(long)]
    pub fen: Option<String>,

    /// Directory for log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub theme: ThemeVariant,
    pub glyphs: GlyphSet,
    pub fen: Option<String>,
    pub log_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid --fen {fen:?}: {reason}")]
    InvalidFen { fen: String, reason: String },
    #[error("cannot create log directory {}: {source}", path.display())]
    LogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Config {
    /// Merge flags over environment over defaults, and check the start position.
    pub fn resolve(cli: Cli) -> Result<Self, ConfigError> {
        let theme = cli
            .theme
            .unwrap_or_else(|| ThemeVariant::from_preference(theme_preference().as_deref()));
        let glyphs = cli
            .glyphs
            .unwrap_or_else(|| GlyphSet::from_preference(glyph_preference().as_deref()));
        let log_dir = cli.log_dir.unwrap_or_else(log_dir);

        if let Some(fen) = &cli.fen {
            Position::from_fen(fen).map_err(|e| ConfigError::InvalidFen {
                fen: fen.clone(),
                reason: e.to_string(),
            })?;
        }

        Ok(Self {
            theme,
            glyphs,
            fen: cli.fen,
            log_dir,
        })
    }
}

/// Get the preferred theme name.
///
/// Priority:
/// 1. `CHESSDUEL_THEME` env variable if set
/// 2. `None`, meaning the dark palette
pub fn theme_preference() -> Option<String> {
    std::env::var("CHESSDUEL_THEME").ok()
}

/// Get the preferred glyph set name from `CHESSDUEL_GLYPHS`.
pub fn glyph_preference() -> Option<String> {
    std::env::var("CHESSDUEL_GLYPHS").ok()
}

/// Get the log directory.
///
/// Priority:
/// 1. `CHESSDUEL_LOG_DIR` env variable if set
/// 2. `logs` in the working directory
pub fn log_dir() -> PathBuf {
    if let Ok(path) = std::env::var("CHESSDUEL_LOG_DIR") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}

/// Create the log directory if it does not exist yet.
pub fn ensure_log_dir(path: &Path) -> Result<(), ConfigError> {
    std::fs::create_dir_all(path).map_err(|source| ConfigError::LogDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chessduel").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_log_dir() {
        let path = log_dir();
        match std::env::var("CHESSDUEL_LOG_DIR") {
            Ok(val) => assert_eq!(path, PathBuf::from(val)),
            Err(_) => assert_eq!(path, PathBuf::from(DEFAULT_LOG_DIR)),
        }
    }

    #[test]
    fn flags_take_precedence() {
        let config = Config::resolve(parse(&[
            "--theme",
            "light",
            "--glyphs",
            "letters",
            "--log-dir",
            "/tmp/chessduel-logs",
        ]))
        .unwrap();

        assert_eq!(config.theme, ThemeVariant::Light);
        assert_eq!(config.glyphs, GlyphSet::Letters);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/chessduel-logs"));
        assert_eq!(config.fen, None);
    }

    #[test]
    fn unknown_theme_flag_is_rejected() {
        let result = Cli::try_parse_from(["chessduel", "--theme", "sepia"]);
        assert!(result.is_err());
    }

    #[test]
    fn valid_fen_is_kept() {
        let fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1";
        let config = Config::resolve(parse(&["--fen", fen])).unwrap();
        assert_eq!(config.fen.as_deref(), Some(fen));
    }

    #[test]
    fn invalid_fen_is_a_config_error() {
        let err = Config::resolve(parse(&["--fen", "not a position"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFen { .. }));
    }

    #[test]
    fn ensure_log_dir_creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_log_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
