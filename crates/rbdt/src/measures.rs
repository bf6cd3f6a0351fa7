//! Attribute measures used by RBDT-1 to rank split candidates
//! (after A. Abdelhalim et al., "A new method for learning decision trees
//! from rules", ICMLA 2009).
//!
//! Every function takes the rule subset it is evaluated on explicitly, so the
//! same measure can be computed at any depth of the tree.

use crate::conf::{DONT_CARE, MEASURE_EPSILON};
use crate::error::{InductionError, PreconditionKind, Result};
use crate::rules::Rule;
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

pub const AE: &str = "attribute effectiveness";
pub const AA: &str = "attribute autonomy";
pub const MAX_ADS: &str = "maximum attribute disjointness";
pub const MVD: &str = "minimum value distribution";

/// Set relationship between the value sets two classes use for one attribute.
///
/// The discriminant is the ADS score of the paper: 0 when the first class's
/// values are contained in the second's (equal sets included), 1 for the
/// reverse containment, 2 for a partial overlap and 3 when the sets are
/// disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Disjointness {
    Subset = 0,
    Superset = 1,
    Overlap = 2,
    Disjoint = 3,
}

impl Disjointness {
    pub fn score(&self) -> f64 {
        *self as u8 as f64
    }
}

fn value_of(rule: &Rule, attribute: usize) -> Result<&str> {
    rule.value(attribute).ok_or_else(|| {
        PreconditionKind::AttributeOutOfRange {
            attribute,
            arity: rule.arity(),
        }
        .into()
    })
}

fn ensure_non_empty(rules: &[&Rule], measure: &'static str) -> Result<()> {
    if rules.is_empty() {
        Err(PreconditionKind::EmptyRuleSubset { measure }.into())
    } else {
        Ok(())
    }
}

pub fn check_measure(value: f64, lower: f64, upper: f64, measure: &'static str) -> Result<()> {
    if value.is_nan() || value > upper + MEASURE_EPSILON || value < lower - MEASURE_EPSILON {
        return Err(InductionError::MeasureRange {
            measure,
            value,
            lower,
            upper,
        });
    }
    Ok(())
}

/// Distinct consequent classes of `rules`, in order of first occurrence.
pub fn class_universe<'a>(rules: &[&'a Rule]) -> Vec<&'a str> {
    rules.iter().map(|&r| r.class()).unique().collect()
}

/// Distinct values (including `DC`) that `attribute` takes in `rules`.
pub fn distinct_values<'a>(attribute: usize, rules: &[&'a Rule]) -> Result<BTreeSet<&'a str>> {
    rules.iter().map(|&r| value_of(r, attribute)).collect()
}

/// Group `rules` by their value for `attribute`, preserving rule order inside
/// each group.
pub fn partition_by_value<'a>(
    attribute: usize,
    rules: &[&'a Rule],
) -> Result<BTreeMap<&'a str, Vec<&'a Rule>>> {
    let mut groups: BTreeMap<&'a str, Vec<&'a Rule>> = BTreeMap::new();
    for &rule in rules {
        groups.entry(value_of(rule, attribute)?).or_default().push(rule);
    }
    Ok(groups)
}

/// AE(a_j) = (m - #DC) / m over the `m` rules of the subset.
pub fn attribute_effectiveness(attribute: usize, rules: &[&Rule]) -> Result<f64> {
    ensure_non_empty(rules, AE)?;

    let mut dont_care = 0usize;
    for rule in rules {
        if value_of(rule, attribute)? == DONT_CARE {
            dont_care += 1;
        }
    }

    let m = rules.len();
    let value = (m - dont_care) as f64 / m as f64;
    check_measure(value, 0.0, 1.0, AE)?;
    Ok(value)
}

fn class_values<'a>(attribute: usize, class: &str, rules: &[&'a Rule]) -> Result<BTreeSet<&'a str>> {
    rules
        .iter()
        .filter(|r| r.class() == class)
        .map(|&r| value_of(r, attribute))
        .collect()
}

/// ADS(a_j, class_a, class_b) on the given subset.
pub fn attribute_disjointness(
    attribute: usize,
    class_a: &str,
    class_b: &str,
    rules: &[&Rule],
) -> Result<Disjointness> {
    let values_a = class_values(attribute, class_a, rules)?;
    let values_b = class_values(attribute, class_b, rules)?;

    let relation = if values_a.is_subset(&values_b) {
        Disjointness::Subset
    } else if values_b.is_subset(&values_a) {
        Disjointness::Superset
    } else if values_a.is_disjoint(&values_b) {
        Disjointness::Disjoint
    } else {
        Disjointness::Overlap
    };
    Ok(relation)
}

/// Summed ADS of `attribute` between `class` and each of `others`.
fn summed_disjointness(attribute: usize, class: &str, others: &[&str], rules: &[&Rule]) -> Result<f64> {
    let mut total = 0.0;
    for other in others {
        total += attribute_disjointness(attribute, class, other, rules)?.score();
    }
    Ok(total)
}

/// AA(a_j, i): autonomy of `attribute` for one class against the other
/// candidates of the tie set.
///
/// `candidates` is the tie set the attribute competes in (it should contain
/// `attribute` itself); `s` in the paper is its size.
pub fn class_attribute_autonomy(
    attribute: usize,
    class: &str,
    candidates: &[usize],
    rules: &[&Rule],
) -> Result<f64> {
    ensure_non_empty(rules, AA)?;

    let classes = class_universe(rules);
    let others: Vec<&str> = classes.iter().copied().filter(|c| *c != class).collect();

    let mut max_ads = 0.0_f64;
    for other in &others {
        max_ads = max_ads.max(attribute_disjointness(attribute, class, other, rules)?.score());
    }

    let m = classes.len() as f64;
    check_measure(max_ads, 0.0, 3.0 * m * (m - 1.0), MAX_ADS)?;

    let peer_sums: Vec<f64> = candidates
        .iter()
        .filter(|&&peer| peer != attribute)
        .map(|&peer| summed_disjointness(peer, class, &others, rules))
        .collect::<Result<_>>()?;

    let s = candidates.len();
    if max_ads == 0.0 {
        return Ok(0.0);
    }
    if s == 2 || peer_sums.iter().any(|&v| v == max_ads) {
        return Ok(1.0);
    }
    Ok(1.0 + (s as f64 - 1.0) * max_ads - peer_sums.iter().sum::<f64>())
}

fn autonomy_sum(attribute: usize, candidates: &[usize], rules: &[&Rule]) -> Result<f64> {
    ensure_non_empty(rules, AA)?;
    let mut sum = 0.0;
    for class in class_universe(rules) {
        sum += class_attribute_autonomy(attribute, class, candidates, rules)?;
    }
    Ok(sum)
}

/// AA(a_j) = 1 / sum_i AA(a_j, i) over the classes present in `rules`.
///
/// A zero sum (every class uses the same value set, e.g. an all-`DC`
/// attribute) scores 0.0, the least autonomous outcome.
pub fn attribute_autonomy(attribute: usize, candidates: &[usize], rules: &[&Rule]) -> Result<f64> {
    let sum = autonomy_sum(attribute, candidates, rules)?;
    if sum == 0.0 {
        debug!(attribute, "per-class autonomy sums to zero, scoring AA as 0");
        return Ok(0.0);
    }
    Ok(1.0 / sum)
}

/// Like [`attribute_autonomy`] but a zero sum is reported as an error.
pub fn attribute_autonomy_strict(
    attribute: usize,
    candidates: &[usize],
    rules: &[&Rule],
) -> Result<f64> {
    let sum = autonomy_sum(attribute, candidates, rules)?;
    if sum == 0.0 {
        return Err(PreconditionKind::ZeroAutonomySum { attribute }.into());
    }
    Ok(1.0 / sum)
}

/// MVD(a_j): number of distinct values, `DC` included, in the subset.
pub fn minimum_value_distribution(attribute: usize, rules: &[&Rule]) -> Result<usize> {
    ensure_non_empty(rules, MVD)?;
    Ok(distinct_values(attribute, rules)?.len())
}
