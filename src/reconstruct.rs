//! Reconstruction driver (component F): the main search that, given a
//! formula, either builds an equivalent single-head formula or determines
//! none exists. `log::debug!` traces the main loop's state per precondition;
//! `log::trace!` traces the finer combination-search rejections within it.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use crate::clause::{bodies, negative, positive, Clause, Formula};
use crate::hclose::hclose;
use crate::intern::Var;
use crate::minbodies::minbodies;
use crate::rcn::rcnucl;
use crate::resolution::{detautologize, minimal_of};
use crate::stats::Stats;

fn fmt_formula(f: &Formula) -> String {
    f.iter().map(Clause::to_string).collect::<Vec<_>>().join(" ")
}

fn fmt_vars(vs: &BTreeSet<Var>) -> String {
    vs.iter().map(|v| v.0.to_string()).collect::<Vec<_>>().join(" ")
}

/// `itertools.product(items, repeat = n)`, hand-rolled: `n == 0` always
/// yields exactly one (empty) combination regardless of `items`, and an
/// empty `items` with `n > 0` yields none.
fn cartesian_power(items: &[BTreeSet<Var>], n: usize) -> Vec<Vec<BTreeSet<Var>>> {
    if n == 0 {
        return vec![Vec::new()];
    }
    if items.is_empty() {
        return Vec::new();
    }
    let mut combos = vec![Vec::new()];
    for _ in 0..n {
        let mut next = Vec::with_capacity(combos.len() * items.len());
        for combo in &combos {
            for item in items {
                let mut c = combo.clone();
                c.push(item.clone());
                next.push(c);
            }
        }
        combos = next;
    }
    combos
}

/// Attempts to build a single-head formula equivalent to `f`. Returns `None`
/// if no such formula exists (or, for a malformed tautological head as
/// discussed in DESIGN.md, cannot be reached from this search). `stats` is
/// mutated in place with the run's counters.
pub fn reconstruct(f: &Formula, stats: &mut Stats) -> Option<Formula> {
    log::debug!("clausal: {}", fmt_formula(f));
    let f = detautologize(f);
    let f = minimal_of(&f);
    log::debug!("simplified: {}", fmt_formula(&f));
    log::debug!("single head: {}", crate::clause::is_single_head(&f));

    let mut preconditions = bodies(&f);

    let rcnucl_start = Instant::now();
    let mut rcn: BTreeMap<BTreeSet<Var>, BTreeSet<Var>> = BTreeMap::new();
    let mut ucl: BTreeMap<BTreeSet<Var>, Formula> = BTreeMap::new();
    for p in &preconditions {
        let (h, u) = rcnucl(p, &f);
        rcn.insert(p.clone(), h);
        ucl.insert(p.clone(), u);
    }
    stats.add_rcnucl_time(rcnucl_start.elapsed());

    let mut constructed: Formula = Formula::new();
    let mut cbodies: BTreeSet<Var> = BTreeSet::new();
    let mut bodied: BTreeSet<Var> = BTreeSet::new();
    let mut used: Formula = Formula::new();

    while !preconditions.is_empty() {
        stats.increment_iterations();
        log::debug!("constructed: {}", fmt_formula(&constructed));
        log::debug!("used: {}", fmt_formula(&used));
        log::debug!("bodied: {}", fmt_vars(&bodied));

        // Select the precondition minimizing rcn[p] ∪ p under strict inclusion.
        let mut p = preconditions.iter().next().unwrap().clone();
        for t in &preconditions {
            let rt: BTreeSet<Var> = rcn[t].union(t).cloned().collect();
            let rp: BTreeSet<Var> = rcn[&p].union(&p).cloned().collect();
            if rt.is_subset(&rp) && rt.len() < rp.len() {
                p = t.clone();
            }
        }
        let rp_union_p: BTreeSet<Var> = rcn[&p].union(&p).cloned().collect();
        preconditions.retain(|t| !t.is_subset(&rp_union_p));

        log::debug!("precondition: {}", fmt_vars(&p));
        log::debug!("    rcn[p]: {}", fmt_vars(&rcn[&p]));

        let pheads: BTreeSet<Var> = rcn[&p].difference(&bodied).cloned().collect();
        let p_union_pheads: BTreeSet<Var> = p.union(&pheads).cloned().collect();
        let maxit: BTreeSet<Var> = pheads
            .union(&rcnucl(&p_union_pheads, &constructed).0)
            .cloned()
            .collect();
        log::debug!("    maxit: {}", fmt_vars(&maxit));
        if !rcn[&p].is_subset(&maxit) {
            log::debug!("    insufficient heads");
            return None;
        }

        let hclose_start = Instant::now();
        let headbodies = hclose(&pheads, &ucl[&p]);
        stats.add_hclose_time(hclose_start.elapsed());
        log::debug!("    headbodies: {}", fmt_formula(&headbodies));

        let used_in_p: Formula = ucl[&p].intersection(&used).cloned().collect();
        let pbodies = minbodies(&headbodies, &used_in_p);
        let inbodies: BTreeSet<Var> = bodies(&headbodies)
            .into_iter()
            .flatten()
            .collect::<BTreeSet<_>>()
            .difference(&cbodies)
            .cloned()
            .collect();
        log::debug!("    heads: {}", fmt_vars(&pheads));
        log::debug!("    inbody: {}", fmt_vars(&inbodies));

        let headless_seed: BTreeSet<Var> = rcn[&p].intersection(&bodied).cloned().collect();
        let headless = hclose(&headless_seed, &ucl[&p]);
        log::debug!("    headless: {}", fmt_formula(&headless));

        let headlessbodies: BTreeSet<Var> = bodies(&headless)
            .into_iter()
            .flatten()
            .collect::<BTreeSet<_>>()
            .difference(&cbodies.union(&inbodies).cloned().collect())
            .cloned()
            .collect();
        if !headlessbodies.is_empty() {
            log::debug!("    unachievable: {}", fmt_vars(&headlessbodies));
            return None;
        }

        let ptarget: Formula = headbodies.union(&headless).cloned().collect();
        log::debug!("    target: {}", fmt_formula(&ptarget));
        if ptarget.is_empty() {
            log::debug!("    empty target");
            continue;
        }

        let pheads_vec: Vec<Var> = pheads.iter().cloned().collect();
        let pbodies_vec: Vec<BTreeSet<Var>> = pbodies.iter().cloned().collect();
        let combos = cartesian_power(&pbodies_vec, pheads_vec.len());

        let mut accepted: Option<(Formula, BTreeSet<Var>)> = None;
        let mut subiterations: u64 = 0;

        for combo in &combos {
            subiterations += 1;

            let allbodies: BTreeSet<Var> = combo.iter().flatten().cloned().collect();
            let required: BTreeSet<Var> = inbodies.union(&headlessbodies).cloned().collect();
            if !required.is_subset(&allbodies) {
                log::trace!("    insufficient bodies: {}", fmt_vars(&allbodies));
                continue;
            }

            stats.increment_combinations();
            let mut it = Formula::new();
            let mut tautological = false;
            for (h, b) in pheads_vec.iter().zip(combo.iter()) {
                if b.contains(h) {
                    tautological = true;
                    break;
                }
                let mut c = Clause::new();
                for &bv in b {
                    c.insert(negative(bv));
                }
                c.insert(positive(*h));
                it.insert(c);
            }
            if tautological {
                log::trace!("    tautology");
                continue;
            }
            stats.increment_notautology();

            let trial: Formula = constructed.union(&it).cloned().collect();
            let (gitrcn, gitucl) = rcnucl(&p, &trial);
            if gitrcn != rcn[&p] {
                log::trace!("    rcn[precondition] mismatch: {}", fmt_formula(&it));
                continue;
            }
            stats.increment_equalp();

            let mut noteq = false;
            for b in &pbodies_vec {
                if rcnucl(b, &trial).0 != rcn[&p] {
                    noteq = true;
                    break;
                }
            }
            if noteq {
                log::trace!("    rcn[body] mismatch: {}", fmt_formula(&it));
                continue;
            }

            stats.increment_comparisons();
            let cl = hclose(&gitrcn, &gitucl);
            if ptarget == cl {
                log::debug!("    equivalent: {}", fmt_formula(&it));
                accepted = Some((it, allbodies));
                break;
            }
            log::trace!("    not equivalent: {}", fmt_formula(&it));
        }
        stats.record_subiterations(subiterations);

        match accepted {
            Some((it, allbodies)) => {
                used = used.union(&ucl[&p]).cloned().collect();
                bodied = bodied.union(&pheads).cloned().collect();
                cbodies = cbodies.union(&allbodies).cloned().collect();
                constructed = constructed.union(&it).cloned().collect();
                log::debug!("    constructed: {}", fmt_formula(&constructed));
            }
            None => return None,
        }
    }

    Some(constructed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::{negative, positive};
    use crate::resolution::equivalent;

    fn v(n: u32) -> Var {
        Var(n)
    }

    #[test]
    fn already_single_head_formula_is_returned_unchanged() {
        let f = Formula::from([
            Clause::from_literals([positive(v(2)), negative(v(1))]), // a->b
            Clause::from_literals([positive(v(3)), negative(v(1))]), // a->c
        ]);
        let mut stats = Stats::new();
        let g = reconstruct(&f, &mut stats).unwrap();
        assert_eq!(g, f);
    }

    #[test]
    fn empty_formula_reconstructs_to_empty() {
        let f = Formula::new();
        let mut stats = Stats::new();
        assert_eq!(reconstruct(&f, &mut stats), Some(Formula::new()));
    }

    #[test]
    fn equivalence_swap_is_single_head_equivalent() {
        // a=b expands to a->b, b->a: single-head via b as the canonical form's head.
        let f = Formula::from([
            Clause::from_literals([positive(v(2)), negative(v(1))]), // a->b
            Clause::from_literals([positive(v(1)), negative(v(2))]), // b->a
        ]);
        let mut stats = Stats::new();
        let g = reconstruct(&f, &mut stats).expect("single-head form should exist");
        assert!(crate::clause::is_single_head(&g));
        assert!(equivalent(&g, &f));
    }

    #[test]
    fn tautology_only_formula_reconstructs_to_empty() {
        let f = Formula::from([Clause::from_literals([positive(v(1)), negative(v(1))])]);
        let mut stats = Stats::new();
        assert_eq!(reconstruct(&f, &mut stats), Some(Formula::new()));
    }

    #[test]
    fn conflicting_second_head_for_d_is_not_single_head_equivalent() {
        let f = Formula::from([
            Clause::from_literals([positive(v(2)), negative(v(1))]), // a->b
            Clause::from_literals([positive(v(1)), negative(v(2))]), // b->a
            Clause::from_literals([positive(v(3)), negative(v(2))]), // b->c
            Clause::from_literals([positive(v(4)), negative(v(1))]), // a->d
            Clause::from_literals([positive(v(5)), negative(v(1))]), // a->e
            Clause::from_literals([positive(v(4)), negative(v(3))]), // c->d
            Clause::from_literals([positive(v(4)), negative(v(6))]), // f->d
        ]);
        let mut stats = Stats::new();
        assert_eq!(reconstruct(&f, &mut stats), None);
    }
}
