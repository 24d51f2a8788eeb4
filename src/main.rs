use anyhow::{Context, Result};
use clap::Parser;

use reconstruct::cli::{Cli, Mode};
use reconstruct::clause::{is_horn, is_single_head};
use reconstruct::config::{EngineConfig, FileConfig};
use reconstruct::intern::Interner;
use reconstruct::parser::parse_formula;
use reconstruct::pretty::{clause_to_string, formula_to_string};
use reconstruct::reconstruct as engine;
use reconstruct::resolution::{detautologize, minimal_of};
use reconstruct::stats::Stats;
use reconstruct::testscript::run_test_script;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => Some(FileConfig::read(path)?),
        None => None,
    };
    let config = EngineConfig::resolve(file_config, cli.verbose, cli.check, cli.raw);

    env_logger::Builder::new().filter_level(config.verbosity.filter()).init();

    match cli.mode()? {
        Mode::CmdlineFormula(clauses) => run_cmdline_formula(&clauses, &config),
        Mode::TestScript(path) => {
            let passed = run_test_script(&path, &config)?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn run_cmdline_formula(clauses: &[String], config: &EngineConfig) -> Result<()> {
    println!("formula: {}", clauses.join(" "));
    let mut interner = Interner::new();
    let f = parse_formula(clauses, &mut interner).context("parsing command-line formula")?;
    if !is_horn(&f) {
        log::warn!("formula contains a disjunctive (non-Horn) clause; it will not gain a head");
    }

    if config.check {
        let simplified = minimal_of(&detautologize(&f));
        println!("simplified: {}", formula_to_string(&simplified, &interner));
        println!("single head: {}", is_single_head(&simplified));
        return Ok(());
    }

    let mut stats = Stats::new();
    let result = engine::reconstruct(&f, &mut stats);
    log::info!("{stats}");

    match result {
        None => {
            println!("not single-head equivalent");
            println!("FALSE");
        }
        Some(g) => {
            let rendered = if config.pretty {
                formula_to_string(&g, &interner)
            } else {
                g.iter().map(|c| clause_to_string(c, &interner)).collect::<Vec<_>>().join(" ")
            };
            println!("single-head form: {rendered}");
            println!("single-head: {}", is_single_head(&g));
            println!("TRUE");
        }
    }
    Ok(())
}
