//! Integration tests for rbdt::measures
//!
//! Covers AE, ADS, per-class and aggregated AA, MVD and the range and
//! precondition checks shared by all of them.

use rbdt::error::{InductionError, PreconditionKind};
use rbdt::measures::{
    attribute_autonomy, attribute_autonomy_strict, attribute_disjointness,
    attribute_effectiveness, check_measure, class_attribute_autonomy, class_universe,
    distinct_values, minimum_value_distribution, partition_by_value, Disjointness, AE, MVD,
};
use rbdt::rules::Rule;
use rbdt::DONT_CARE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rule(class: &str, values: &[&str]) -> Rule {
    Rule::new(class, values.iter().map(|v| v.to_string()).collect(), 0, 0, 0)
}

/// Four rules over three attributes:
/// attribute 0 separates the classes, attribute 1 is shared by both classes,
/// attribute 2 is never constrained.
fn fixture() -> Vec<Rule> {
    vec![
        rule("A", &["x", "p", DONT_CARE]),
        rule("A", &["x", "q", DONT_CARE]),
        rule("B", &["y", "p", DONT_CARE]),
        rule("B", &[DONT_CARE, "q", DONT_CARE]),
    ]
}

fn refs(rules: &[Rule]) -> Vec<&Rule> {
    rules.iter().collect()
}

// ---------------------------
// Attribute Effectiveness
// ---------------------------

#[test]
fn effectiveness_counts_dont_cares() {
    let rules = fixture();
    let subset = refs(&rules);

    assert_eq!(attribute_effectiveness(0, &subset).unwrap(), 0.75);
    assert_eq!(attribute_effectiveness(1, &subset).unwrap(), 1.0);
    assert_eq!(attribute_effectiveness(2, &subset).unwrap(), 0.0);
}

/// AE stays within [0, 1], is 1 exactly when no rule has DC and 0 exactly
/// when every rule has DC.
#[test]
fn effectiveness_bounds_on_random_subsets() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let m = rng.random_range(1..12);
        let rules: Vec<Rule> = (0..m)
            .map(|i| {
                let value = if rng.random_bool(0.4) { DONT_CARE } else { "v" };
                rule(if i % 2 == 0 { "A" } else { "B" }, &[value])
            })
            .collect();
        let subset = refs(&rules);
        let ae = attribute_effectiveness(0, &subset).unwrap();
        let dont_cares = rules.iter().filter(|r| r.is_dont_care(0)).count();

        assert!((0.0..=1.0).contains(&ae));
        assert_eq!(ae == 1.0, dont_cares == 0);
        assert_eq!(ae == 0.0, dont_cares == m);
    }
}

#[test]
fn measures_reject_empty_subset() {
    assert_eq!(
        attribute_effectiveness(0, &[]),
        Err(InductionError::Precondition(PreconditionKind::EmptyRuleSubset {
            measure: AE
        }))
    );
    assert_eq!(
        minimum_value_distribution(0, &[]),
        Err(InductionError::Precondition(PreconditionKind::EmptyRuleSubset {
            measure: MVD
        }))
    );
    assert!(attribute_autonomy(0, &[0, 1], &[]).is_err());
    assert!(class_attribute_autonomy(0, "A", &[0, 1], &[]).is_err());
}

#[test]
fn measures_reject_attribute_out_of_range() {
    let rules = fixture();
    let subset = refs(&rules);
    assert_eq!(
        attribute_effectiveness(5, &subset),
        Err(InductionError::Precondition(
            PreconditionKind::AttributeOutOfRange {
                attribute: 5,
                arity: 3
            }
        ))
    );
}

#[test]
fn check_measure_uses_tolerance() {
    assert!(check_measure(1.005, 0.0, 1.0, AE).is_ok());
    assert!(check_measure(-0.005, 0.0, 1.0, AE).is_ok());
    assert!(matches!(
        check_measure(1.02, 0.0, 1.0, AE),
        Err(InductionError::MeasureRange { measure: AE, .. })
    ));
    assert!(check_measure(f64::NAN, 0.0, 1.0, AE).is_err());
}

// ---------------------------
// Attribute Disjointness
// ---------------------------

#[test]
fn disjointness_scores() {
    assert_eq!(Disjointness::Subset.score(), 0.0);
    assert_eq!(Disjointness::Superset.score(), 1.0);
    assert_eq!(Disjointness::Overlap.score(), 2.0);
    assert_eq!(Disjointness::Disjoint.score(), 3.0);
}

#[test]
fn disjointness_relations() {
    let rules = fixture();
    let subset = refs(&rules);

    // {x} vs {y, DC}
    assert_eq!(
        attribute_disjointness(0, "A", "B", &subset).unwrap(),
        Disjointness::Disjoint
    );
    // {p, q} vs {p, q}: equal sets count as contained
    assert_eq!(
        attribute_disjointness(1, "A", "B", &subset).unwrap(),
        Disjointness::Subset
    );
    assert_eq!(
        attribute_disjointness(2, "B", "A", &subset).unwrap(),
        Disjointness::Subset
    );
}

#[test]
fn disjointness_is_directional() {
    let rules = vec![
        rule("A", &["x"]),
        rule("A", &["y"]),
        rule("B", &["x"]),
        rule("C", &["y"]),
        rule("C", &["z"]),
    ];
    let subset = refs(&rules);

    // {x, y} contains {x}
    assert_eq!(
        attribute_disjointness(0, "A", "B", &subset).unwrap(),
        Disjointness::Superset
    );
    assert_eq!(
        attribute_disjointness(0, "B", "A", &subset).unwrap(),
        Disjointness::Subset
    );
    // {x, y} vs {y, z}
    assert_eq!(
        attribute_disjointness(0, "A", "C", &subset).unwrap(),
        Disjointness::Overlap
    );
    // {x} vs {y, z}
    assert_eq!(
        attribute_disjointness(0, "B", "C", &subset).unwrap(),
        Disjointness::Disjoint
    );
}

// ---------------------------
// Attribute Autonomy
// ---------------------------

/// With two candidates any positive MaxADS gives a per-class autonomy of 1.
#[test]
fn class_autonomy_two_candidates() {
    let rules = fixture();
    let subset = refs(&rules);

    assert_eq!(class_attribute_autonomy(0, "A", &[0, 1], &subset).unwrap(), 1.0);
    assert_eq!(class_attribute_autonomy(0, "B", &[0, 1], &subset).unwrap(), 1.0);
    assert_eq!(attribute_autonomy(0, &[0, 1], &subset).unwrap(), 0.5);
}

/// 1 + (s - 1) * MaxADS - sum of the peers' summed ADS.
#[test]
fn class_autonomy_general_formula() {
    let rules = fixture();
    let subset = refs(&rules);

    // MaxADS = 3, peers 1 and 2 both sum to 0: 1 + 2 * 3 - 0
    assert_eq!(
        class_attribute_autonomy(0, "A", &[0, 1, 2], &subset).unwrap(),
        7.0
    );
    assert_eq!(
        class_attribute_autonomy(0, "B", &[0, 1, 2], &subset).unwrap(),
        7.0
    );
    assert_eq!(
        attribute_autonomy(0, &[0, 1, 2], &subset).unwrap(),
        1.0 / 14.0
    );
}

/// A peer whose summed ADS reaches MaxADS caps the autonomy at 1.
#[test]
fn class_autonomy_peer_matches_max() {
    let rules = vec![
        rule("A", &["x", "u", DONT_CARE]),
        rule("B", &["y", "v", DONT_CARE]),
    ];
    let subset = refs(&rules);

    assert_eq!(
        class_attribute_autonomy(0, "A", &[0, 1, 2], &subset).unwrap(),
        1.0
    );
}

/// Every class uses the same value set: MaxADS is 0 for all of them.
#[test]
fn autonomy_zero_sum() {
    let rules = fixture();
    let subset = refs(&rules);

    assert_eq!(class_attribute_autonomy(1, "A", &[0, 1], &subset).unwrap(), 0.0);
    assert_eq!(attribute_autonomy(1, &[0, 1], &subset).unwrap(), 0.0);
    assert_eq!(
        attribute_autonomy_strict(1, &[0, 1], &subset),
        Err(InductionError::Precondition(
            PreconditionKind::ZeroAutonomySum { attribute: 1 }
        ))
    );
    assert_eq!(attribute_autonomy_strict(0, &[0, 1], &subset).unwrap(), 0.5);
}

/// Aggregated AA only sums over the classes present in the subset it is
/// evaluated on.
#[test]
fn autonomy_sums_over_present_classes() {
    let rules = vec![
        rule("A", &["x", "p"]),
        rule("B", &["y", "p"]),
        rule("C", &["z", "q"]),
    ];
    let all = refs(&rules);
    let without_c: Vec<&Rule> = rules.iter().filter(|r| r.class() != "C").collect();

    assert_eq!(class_universe(&all), vec!["A", "B", "C"]);
    assert_eq!(class_universe(&without_c), vec!["A", "B"]);

    // Three pairwise-disjoint classes: each class contributes 1
    assert_eq!(attribute_autonomy(0, &[0, 1], &all).unwrap(), 1.0 / 3.0);
    // Only A and B remain
    assert_eq!(attribute_autonomy(0, &[0, 1], &without_c).unwrap(), 0.5);
}

// ---------------------------
// Minimum Value Distribution
// ---------------------------

#[test]
fn value_distribution_counts_dont_care() {
    let rules = fixture();
    let subset = refs(&rules);

    assert_eq!(minimum_value_distribution(0, &subset).unwrap(), 3);
    assert_eq!(minimum_value_distribution(1, &subset).unwrap(), 2);
    assert_eq!(minimum_value_distribution(2, &subset).unwrap(), 1);

    let values = distinct_values(0, &subset).unwrap();
    assert_eq!(values.into_iter().collect::<Vec<_>>(), vec!["DC", "x", "y"]);
}

#[test]
fn partition_keeps_rule_order() {
    let rules = fixture();
    let subset = refs(&rules);
    let groups = partition_by_value(1, &subset).unwrap();

    assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!["p", "q"]);
    assert_eq!(groups["p"], vec![&rules[0], &rules[2]]);
    assert_eq!(groups["q"], vec![&rules[1], &rules[3]]);
}
