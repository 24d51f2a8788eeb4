//! Run configuration: verbosity, pretty-vs-raw output, check-only mode. CLI
//! flags (`cli.rs`) always take precedence; an optional `--config FILE` can
//! supply defaults for the ones a flag didn't set.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Info,
    Debug,
}

impl Verbosity {
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Quiet,
            1 => Verbosity::Info,
            _ => Verbosity::Debug,
        }
    }

    pub fn filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Debug,
            Verbosity::Debug => log::LevelFilter::Trace,
        }
    }
}

/// Defaults overridable by `--config FILE`; every field is optional in the
/// file so a config can override just one setting.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct FileConfig {
    pub pretty: Option<bool>,
    pub verbosity: Option<u8>,
    pub check: Option<bool>,
}

impl FileConfig {
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("opening config file {}", path.display()))?;
        serde_json::from_reader(file)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// The engine's resolved run configuration: CLI flags layered over an
/// optional file config's defaults.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub pretty: bool,
    pub verbosity: Verbosity,
    pub check: bool,
}

impl EngineConfig {
    pub fn resolve(file: Option<FileConfig>, verbosity_level: u8, check: bool, raw: bool) -> Self {
        let file = file.unwrap_or_default();
        EngineConfig {
            pretty: !raw && file.pretty.unwrap_or(true),
            verbosity: if verbosity_level > 0 {
                Verbosity::from_level(verbosity_level)
            } else {
                file.verbosity.map(Verbosity::from_level).unwrap_or(Verbosity::Quiet)
            },
            check: check || file.check.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_file_defaults() {
        let file = FileConfig { pretty: Some(false), verbosity: Some(1), check: Some(false) };
        let cfg = EngineConfig::resolve(Some(file), 2, true, false);
        assert_eq!(cfg.verbosity, Verbosity::Debug);
        assert!(cfg.check);
    }

    #[test]
    fn raw_flag_disables_pretty_regardless_of_file() {
        let file = FileConfig { pretty: Some(true), verbosity: None, check: None };
        let cfg = EngineConfig::resolve(Some(file), 0, false, true);
        assert!(!cfg.pretty);
    }

    #[test]
    fn defaults_with_no_file_and_no_flags() {
        let cfg = EngineConfig::resolve(None, 0, false, false);
        assert!(cfg.pretty);
        assert!(!cfg.check);
        assert_eq!(cfg.verbosity, Verbosity::Quiet);
    }
}
