//! Test-script execution (`-t FILE` / bare `FILE`): parses the labeled
//! `LABEL "..." TRUE|FALSE|CHECK` format and runs each case through
//! `reconstruct`, reporting `TEST PASSED`/`TEST FAILED` per case.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use crate::config::EngineConfig;
use crate::intern::Interner;
use crate::parser::parse_formula;
use crate::pretty::{clause_to_string, formula_to_string};
use crate::reconstruct::reconstruct;
use crate::resolution::{detautologize, equivalent, minimal_of};
use crate::stats::Stats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    True,
    False,
    Check,
}

#[derive(Clone, Debug)]
pub struct TestCase {
    pub label: String,
    pub verdict: Verdict,
    pub clauses: Vec<String>,
}

pub fn parse_test_script(text: &str) -> Result<Vec<TestCase>> {
    let mut cases = Vec::new();
    let mut current: Option<TestCase> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            if let Some(c) = current.take() {
                cases.push(c);
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix("LABEL ") {
            if let Some(c) = current.take() {
                cases.push(c);
            }
            let (label, verdict) = parse_label_line(rest)?;
            current = Some(TestCase { label, verdict, clauses: Vec::new() });
        } else {
            let case = current
                .as_mut()
                .ok_or_else(|| anyhow!("clause line outside of any LABEL block: {line:?}"))?;
            case.clauses.push(line.to_string());
        }
    }
    if let Some(c) = current.take() {
        cases.push(c);
    }
    Ok(cases)
}

fn parse_label_line(rest: &str) -> Result<(String, Verdict)> {
    let rest = rest.trim();
    if !rest.starts_with('"') {
        bail!("LABEL line must start with a quoted label: {rest:?}");
    }
    let close = rest[1..]
        .find('"')
        .ok_or_else(|| anyhow!("unterminated label string: {rest:?}"))?
        + 1;
    let label = rest[1..close].to_string();
    let verdict = match rest[close + 1..].trim() {
        "TRUE" => Verdict::True,
        "FALSE" => Verdict::False,
        "CHECK" => Verdict::Check,
        other => bail!("unrecognized verdict {other:?}, expected TRUE, FALSE, or CHECK"),
    };
    Ok((label, verdict))
}

/// Runs every case in `path`, printing `TEST PASSED`/`TEST FAILED` (or the
/// check-only report) per case. Returns `true` iff every `TRUE`/`FALSE` case
/// matched its expected verdict.
pub fn run_test_script(path: &Path, config: &EngineConfig) -> Result<bool> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading test script {}", path.display()))?;
    let cases = parse_test_script(&text)
        .with_context(|| format!("parsing test script {}", path.display()))?;

    let mut all_passed = true;
    for case in &cases {
        println!("## {} ##", case.label);
        println!("formula: {}", case.clauses.join(" "));

        let mut interner = Interner::new();
        let f = parse_formula(&case.clauses, &mut interner)
            .with_context(|| format!("parsing clauses for test case {:?}", case.label))?;
        if !crate::clause::is_horn(&f) {
            log::warn!("case {:?} contains a disjunctive (non-Horn) clause", case.label);
        }

        if case.verdict == Verdict::Check {
            let simplified = minimal_of(&detautologize(&f));
            println!("single head: {}", crate::clause::is_single_head(&simplified));
            println!();
            continue;
        }

        let mut stats = Stats::new();
        let result = reconstruct(&f, &mut stats);
        print_result(&result, &interner, config);

        let got = result.is_some();
        let expected = case.verdict == Verdict::True;
        let equiv_ok = match &result {
            Some(g) => equivalent(g, &f),
            None => true,
        };
        if !equiv_ok {
            println!("reconstructed formula is not equivalent to the input");
        }
        if got == expected && equiv_ok {
            println!("TEST PASSED");
        } else {
            println!("TEST FAILED");
            all_passed = false;
        }
        println!();
    }
    Ok(all_passed)
}

fn print_result(result: &Option<crate::clause::Formula>, interner: &Interner, config: &EngineConfig) {
    match result {
        None => {
            println!("not single-head equivalent");
            println!("FALSE");
        }
        Some(g) => {
            let rendered = if config.pretty {
                formula_to_string(g, interner)
            } else {
                g.iter().map(|c| clause_to_string(c, interner)).collect::<Vec<_>>().join(" ")
            };
            println!("single-head form: {rendered}");
            println!("TRUE");
        }
    }
}
