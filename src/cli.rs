//! Command-line surface, built with `clap`'s derive API.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "reconstruct",
    about = "Decide single-head equivalence of a propositional Horn-like formula"
)]
pub struct Cli {
    /// Analyze one formula given as clause arguments: `ab->c`, `a=b`, `abc`.
    #[arg(short = 'f', num_args = 1.., value_name = "CLAUSE")]
    pub formula: Option<Vec<String>>,

    /// Run a labeled test script.
    #[arg(short = 't', value_name = "FILE")]
    pub test_file: Option<PathBuf>,

    /// A bare file argument is equivalent to `-t FILE`.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Raise progress verbosity (repeatable: -v, -vv).
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Parse, simplify, and report single-head-ness without reconstructing.
    #[arg(long)]
    pub check: bool,

    /// Render clauses in raw signed-literal form instead of BODY->HEAD.
    #[arg(long)]
    pub raw: bool,

    /// Load default verbosity/pretty/check-only settings from a JSON file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// What this invocation should do, resolved from the `-f`/`-t`/bare-file
/// arguments (which are mutually exclusive).
pub enum Mode {
    CmdlineFormula(Vec<String>),
    TestScript(PathBuf),
}

impl Cli {
    pub fn mode(&self) -> Result<Mode> {
        match (&self.formula, &self.test_file, &self.file) {
            (Some(clauses), None, None) => Ok(Mode::CmdlineFormula(clauses.clone())),
            (None, Some(path), None) => Ok(Mode::TestScript(path.clone())),
            (None, None, Some(path)) => Ok(Mode::TestScript(path.clone())),
            (None, None, None) => bail!("no argument: pass -f CLAUSE... or a test script file"),
            _ => bail!("-f, -t, and a bare file argument are mutually exclusive"),
        }
    }
}
