//! Config search cross-checked against exhaustive enumeration.

use std::collections::BTreeSet;

use costwise_harness::contract::ConfigWorldV1;
use costwise_harness::worlds::pc_store::{PcStore, DEFAULT_BUDGET};
use costwise_kernel::model::ConfigSpace;
use costwise_search::config::{search_config, CompleteConfigV1};
use costwise_search::policy::SearchPolicyV1;
use costwise_search::trace::ConfigEventV1;
use lock_tests::oracle::{all_selections, best_ratio, Lcg};

fn random_space(seed: u64) -> ConfigSpace {
    let mut rng = Lcg::new(seed);
    let categories = 2 + usize::try_from(rng.below(3)).unwrap();
    let shares: Vec<u64> = (0..categories).map(|_| 1 + rng.below(9)).collect();
    let total: u64 = shares.iter().sum();

    let mut b = ConfigSpace::builder();
    for (c, share) in shares.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let weight = *share as f64 / total as f64;
        let index = b.add_category(format!("cat{c}"), weight).unwrap();
        for i in 0..1 + rng.below(4) {
            #[allow(clippy::cast_precision_loss)]
            let cost = (1 + rng.below(100)) as f64;
            let performance = u32::try_from(rng.below(101)).unwrap();
            b.add_item(index, format!("item{c}_{i}"), cost, performance)
                .unwrap();
        }
    }
    b.build().unwrap()
}

// ---------------------------------------------------------------------------
// PC store
// ---------------------------------------------------------------------------

#[test]
fn pc_store_best_build() {
    let space = PcStore.space().unwrap();
    let result = search_config(&space, DEFAULT_BUDGET, &SearchPolicyV1::default()).unwrap();
    let best = result.best.unwrap();

    assert_eq!(best.selection, vec![1, 3, 1, 0, 2, 2]);
    let names: Vec<&str> = best.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Intel i5 10400F",
            "GT 1030",
            "16GB DDR4 3200MHz",
            "SSD 480GB",
            "A320M Biostar",
            "Fonte 400W",
        ]
    );
    assert!((best.cost - 2230.0).abs() < 1e-9);
    assert_eq!(best.performance, 56);
    assert_eq!(best.ratio.to_bits(), best_ratio(&space, DEFAULT_BUDGET).unwrap().to_bits());
}

#[test]
fn pc_store_full_budget_scores_every_combination() {
    let space = PcStore.space().unwrap();
    let result = search_config(&space, DEFAULT_BUDGET, &SearchPolicyV1::default()).unwrap();
    assert_eq!(result.stats.complete_evaluated, 2160);
    assert_eq!(result.stats.pruned, 0);
    assert_eq!(
        result.stats.extractions,
        u64::try_from(space.implicit_node_count()).unwrap()
    );
}

#[test]
fn pc_store_budget_sweep_matches_bruteforce() {
    let space = PcStore.space().unwrap();
    let policy = SearchPolicyV1 {
        record_trace: false,
        ..SearchPolicyV1::default()
    };
    for budget in [0.0, 1609.0, 1610.0, 1800.0, 2000.0, 2229.0, 2230.0, 3000.0, 5550.0] {
        let result = search_config(&space, budget, &policy).unwrap();
        let expected = best_ratio(&space, budget);
        assert_eq!(
            result.best.as_ref().map(|b| b.ratio.to_bits()),
            expected.map(f64::to_bits),
            "budget {budget}"
        );
        if let Some(best) = &result.best {
            assert!(best.cost <= budget);
        }
    }
}

#[test]
fn pc_store_zero_budget_is_infeasible() {
    let space = PcStore.space().unwrap();
    let result = search_config(&space, 0.0, &SearchPolicyV1::default()).unwrap();
    assert!(result.best.is_none());
    assert_eq!(result.stats.complete_evaluated, 0);
}

// ---------------------------------------------------------------------------
// Random spaces
// ---------------------------------------------------------------------------

#[test]
fn random_spaces_match_bruteforce() {
    let policy = SearchPolicyV1::default();
    for seed in 0..60 {
        let space = random_space(seed);
        let max_cost: f64 = space
            .categories()
            .iter()
            .map(|c| c.items.iter().map(|i| i.cost).fold(0.0, f64::max))
            .sum();
        for budget in [0.0, space.cheapest_complete_cost(), max_cost / 2.0, max_cost] {
            let result = search_config(&space, budget, &policy).unwrap();
            assert_eq!(
                result.best.as_ref().map(|b| b.ratio.to_bits()),
                best_ratio(&space, budget).map(f64::to_bits),
                "seed {seed} budget {budget}"
            );
        }
    }
}

#[test]
fn feasible_configs_are_all_evaluated() {
    for seed in 0..30 {
        let space = random_space(seed);
        let budget = space.cheapest_complete_cost() * 1.5;
        let result = search_config(&space, budget, &SearchPolicyV1::default()).unwrap();
        // Prefix costs never exceed the full cost, so nothing eligible is pruned.
        let feasible = all_selections(&space)
            .iter()
            .filter_map(|s| CompleteConfigV1::evaluate(&space, s))
            .filter(|c| c.is_eligible(budget))
            .count();
        assert_eq!(
            result.stats.complete_evaluated,
            u64::try_from(feasible).unwrap(),
            "seed {seed}"
        );
    }
}

#[test]
fn trace_never_expands_over_budget() {
    for seed in 0..30 {
        let space = random_space(seed);
        let budget = space.cheapest_complete_cost() * 1.2;
        let result = search_config(&space, budget, &SearchPolicyV1::default()).unwrap();

        let mut pruned = BTreeSet::new();
        let mut visited = BTreeSet::new();
        for event in &result.trace {
            match event {
                ConfigEventV1::Pruned { selection, cost } => {
                    assert!(*cost > budget);
                    pruned.insert(selection.clone());
                }
                ConfigEventV1::Expanded { selection, cost }
                | ConfigEventV1::Evaluated {
                    selection, cost, ..
                } => {
                    assert!(*cost <= budget, "seed {seed}: {selection:?} at {cost}");
                    visited.insert(selection.clone());
                }
                ConfigEventV1::NewBest { cost, .. } => assert!(*cost <= budget),
            }
        }
        assert!(
            pruned.is_disjoint(&visited),
            "seed {seed}: a pruned selection was later visited"
        );
        // No visited selection extends a pruned prefix.
        for v in &visited {
            for p in &pruned {
                assert!(!v.starts_with(p), "seed {seed}: {v:?} extends pruned {p:?}");
            }
        }
    }
}

#[test]
fn new_best_ratios_strictly_increase() {
    let space = PcStore.space().unwrap();
    let result = search_config(&space, DEFAULT_BUDGET, &SearchPolicyV1::default()).unwrap();
    let ratios: Vec<f64> = result
        .trace
        .iter()
        .filter_map(|e| match e {
            ConfigEventV1::NewBest { ratio, .. } => Some(*ratio),
            _ => None,
        })
        .collect();
    assert!(!ratios.is_empty());
    assert!(ratios.windows(2).all(|w| w[1] > w[0]));
}
