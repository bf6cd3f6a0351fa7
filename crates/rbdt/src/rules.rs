use crate::conf::{attribute_label, DONT_CARE};
use crate::error::{PreconditionKind, Result};
use core::fmt;
use serde::{Deserialize, Serialize};

/// -------------------
/// Rule
/// -------------------
/// A classification rule in RBDT form: one antecedent value per attribute
/// (`DC` where the source rule says nothing) implying a class.
///
/// The three counters are the atomic frequencies the rule was mined with:
/// antecedent alone, consequent alone, and both together. They are carried
/// along but never enter attribute selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    class: String,
    antecedents: Vec<String>,
    freq_antecedent: u32,
    freq_class: u32,
    freq_both: u32,
}

impl Rule {
    pub fn new(
        class: impl Into<String>,
        antecedents: Vec<String>,
        freq_antecedent: u32,
        freq_class: u32,
        freq_both: u32,
    ) -> Self {
        Self {
            class: class.into(),
            antecedents,
            freq_antecedent,
            freq_class,
            freq_both,
        }
    }

    /// Build a rule over `n_attributes` attributes from the (index, value)
    /// pairs it mentions; every other attribute is filled with `DC`.
    /// Pairs whose index is out of range are ignored.
    pub fn with_dont_cares<I, V>(class: impl Into<String>, n_attributes: usize, items: I) -> Self
    where
        I: IntoIterator<Item = (usize, V)>,
        V: Into<String>,
    {
        let mut antecedents = vec![DONT_CARE.to_string(); n_attributes];
        for (attribute, value) in items {
            if let Some(slot) = antecedents.get_mut(attribute) {
                *slot = value.into();
            }
        }
        Self::new(class, antecedents, 0, 0, 0)
    }

    pub fn with_frequencies(mut self, freq_antecedent: u32, freq_class: u32, freq_both: u32) -> Self {
        self.freq_antecedent = freq_antecedent;
        self.freq_class = freq_class;
        self.freq_both = freq_both;
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn antecedents(&self) -> &[String] {
        &self.antecedents
    }

    pub fn arity(&self) -> usize {
        self.antecedents.len()
    }

    pub fn value(&self, attribute: usize) -> Option<&str> {
        self.antecedents.get(attribute).map(String::as_str)
    }

    pub fn is_dont_care(&self, attribute: usize) -> bool {
        self.value(attribute) == Some(DONT_CARE)
    }

    pub fn freq_antecedent(&self) -> u32 {
        self.freq_antecedent
    }

    pub fn freq_class(&self) -> u32 {
        self.freq_class
    }

    pub fn freq_both(&self) -> u32 {
        self.freq_both
    }

    /// Whether the antecedent holds for an instance given as one value per
    /// attribute. `DC` positions match anything; a missing instance value
    /// only matches a `DC` position.
    pub fn covers<S: AsRef<str>>(&self, instance: &[S]) -> bool {
        self.antecedents
            .iter()
            .enumerate()
            .all(|(attribute, expected)| {
                expected == DONT_CARE
                    || instance
                        .get(attribute)
                        .map(|v| AsRef::<str>::as_ref(v) == expected.as_str())
                        .unwrap_or(false)
            })
    }

    /// Vectorised [`Rule::covers`].
    pub fn evaluate<S: AsRef<str>>(&self, instances: &[Vec<S>]) -> Vec<bool> {
        instances.iter().map(|x| self.covers(x)).collect()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .antecedents
            .iter()
            .enumerate()
            .filter(|(_, v)| v.as_str() != DONT_CARE)
            .map(|(a, v)| format!("{}={}", attribute_label(a), v))
            .collect();
        if terms.is_empty() {
            write!(f, "TRUE -> {}", self.class)
        } else {
            write!(f, "{} -> {}", terms.join(" AND "), self.class)
        }
    }
}

/// Check that every rule carries exactly `n_attributes` antecedent values.
pub fn validate_ruleset(rules: &[Rule], n_attributes: usize) -> Result<()> {
    if n_attributes == 0 {
        return Err(PreconditionKind::NoAttributes.into());
    }
    match rules
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.arity() != n_attributes)
    {
        Some((index, rule)) => Err(PreconditionKind::AntecedentArity {
            rule: index,
            expected: n_attributes,
            found: rule.arity(),
        }
        .into()),
        None => Ok(()),
    }
}
