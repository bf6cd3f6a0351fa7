use crate::error::{PreconditionKind, Result};
use crate::measures::{attribute_autonomy, attribute_effectiveness, minimum_value_distribution};
use crate::rules::Rule;
use core::fmt;
use std::collections::BTreeSet;
use tracing::debug;

/// Stage of the AE -> AA -> MVD cascade that settled the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionStage {
    Effectiveness,
    Autonomy,
    ValueDistribution,
    /// Several attributes survived every measure; the lowest index wins.
    IndexOrder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub attribute: usize,
    pub stage: SelectionStage,
    /// Candidates still tied when the deciding stage ran, in ascending order.
    pub contenders: Vec<usize>,
}

impl Selection {
    fn new(attribute: usize, stage: SelectionStage, contenders: Vec<usize>) -> Self {
        Self {
            attribute,
            stage,
            contenders,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Selection(attribute: {}, stage: {:?}, contenders: {:?})",
            self.attribute, self.stage, self.contenders
        )
    }
}

fn keep_max(scored: &[(usize, f64)]) -> Vec<usize> {
    let best = scored
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::NEG_INFINITY, f64::max);
    scored
        .iter()
        .filter(|(_, v)| *v == best)
        .map(|(a, _)| *a)
        .collect()
}

fn keep_min(scored: &[(usize, usize)]) -> Vec<usize> {
    let best = scored.iter().map(|(_, v)| *v).min().unwrap_or(0);
    scored
        .iter()
        .filter(|(_, v)| *v == best)
        .map(|(a, _)| *a)
        .collect()
}

/// Pick the attribute to split `rules` on among `available`.
///
/// Exact ties on AE are broken by AA (computed within the AE tie set), ties
/// on AA by the smallest MVD, and anything left by ascending index.
pub fn select_attribute(rules: &[&Rule], available: &BTreeSet<usize>) -> Result<Selection> {
    let candidates: Vec<usize> = available.iter().copied().collect();
    if candidates.is_empty() {
        return Err(PreconditionKind::NoCandidateAttributes.into());
    }

    let ae: Vec<(usize, f64)> = candidates
        .iter()
        .map(|&a| attribute_effectiveness(a, rules).map(|v| (a, v)))
        .collect::<Result<_>>()?;
    let ae_tied = keep_max(&ae);
    if let [attribute] = ae_tied[..] {
        debug!(attribute, ?ae, "selected by attribute effectiveness");
        return Ok(Selection::new(attribute, SelectionStage::Effectiveness, candidates));
    }

    let aa: Vec<(usize, f64)> = ae_tied
        .iter()
        .map(|&a| attribute_autonomy(a, &ae_tied, rules).map(|v| (a, v)))
        .collect::<Result<_>>()?;
    let aa_tied = keep_max(&aa);
    if let [attribute] = aa_tied[..] {
        debug!(attribute, ?aa, "selected by attribute autonomy");
        return Ok(Selection::new(attribute, SelectionStage::Autonomy, ae_tied));
    }

    let mvd: Vec<(usize, usize)> = aa_tied
        .iter()
        .map(|&a| minimum_value_distribution(a, rules).map(|v| (a, v)))
        .collect::<Result<_>>()?;
    let mvd_tied = keep_min(&mvd);
    if let [attribute] = mvd_tied[..] {
        debug!(attribute, ?mvd, "selected by minimum value distribution");
        return Ok(Selection::new(attribute, SelectionStage::ValueDistribution, aa_tied));
    }

    // mvd_tied is never empty: aa_tied is non-empty and keep_min keeps the minimum.
    let attribute = mvd_tied[0];
    debug!(attribute, tied = ?mvd_tied, "measures exhausted, selected lowest index");
    Ok(Selection::new(attribute, SelectionStage::IndexOrder, mvd_tied))
}
