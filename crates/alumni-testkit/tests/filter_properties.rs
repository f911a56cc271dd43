// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use alumni_app::{Facet, FacetConstraint, FilterCriteria, FilterEngine};
use alumni_testkit::AlumniFaker;

const SEEDS: std::ops::Range<u64> = 1..40;

fn engine_for(seed: u64) -> (AlumniFaker, FilterEngine) {
    let mut faker = AlumniFaker::new(seed);
    let directory = faker.directory(40);
    (faker, FilterEngine::new(directory.alumni))
}

fn random_criteria(faker: &mut AlumniFaker, engine: &FilterEngine) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();
    for facet in Facet::ALL {
        let options = engine.options(facet);
        // Index 0 stands for "all".
        let pick = faker.int_n(options.len() + 1);
        if pick > 0 {
            criteria.set_facet(facet, FacetConstraint::Only(options[pick - 1].clone()));
        }
    }
    criteria.mentor_only = faker.int_n(2) == 1;
    criteria.query = faker
        .pick(&["", "", "py", "Engineer", "  cloud ", "austin", "zzz"])
        .to_owned();
    criteria
}

#[test]
fn results_match_brute_force_scan() {
    for seed in SEEDS {
        let (mut faker, mut engine) = engine_for(seed);
        let criteria = random_criteria(&mut faker, &engine);
        engine.set_criteria(criteria.clone());

        let expected: Vec<_> = engine
            .dataset()
            .iter()
            .filter(|alumnus| criteria.matches(alumnus))
            .map(|alumnus| alumnus.id)
            .collect();
        assert_eq!(engine.result_ids(), expected, "seed {seed}");
    }
}

#[test]
fn application_order_does_not_matter() {
    for seed in SEEDS {
        let (mut faker, mut forward) = engine_for(seed);
        let target = random_criteria(&mut faker, &forward);
        let mut backward = forward.clone();

        forward.set_query(target.query.clone());
        forward.set_mentor_only(target.mentor_only);
        for facet in Facet::ALL {
            forward.set_facet(facet, target.facet(facet).clone());
        }

        for facet in Facet::ALL.iter().rev() {
            backward.set_facet(*facet, target.facet(*facet).clone());
        }
        backward.set_mentor_only(target.mentor_only);
        backward.set_query(target.query.clone());

        assert_eq!(forward.result_ids(), backward.result_ids(), "seed {seed}");
    }
}

#[test]
fn adding_a_constraint_never_widens_results() {
    for seed in SEEDS {
        let (mut faker, mut engine) = engine_for(seed);
        let base = random_criteria(&mut faker, &engine);
        engine.set_criteria(base.clone());
        let before = engine.result_ids();

        let mut narrower = base;
        narrower.mentor_only = true;
        engine.set_criteria(narrower);
        let after = engine.result_ids();

        assert!(after.len() <= before.len(), "seed {seed}");
        assert!(after.iter().all(|id| before.contains(id)), "seed {seed}");
    }
}

#[test]
fn options_ignore_criteria_and_stay_sorted() {
    for seed in SEEDS {
        let (mut faker, mut engine) = engine_for(seed);
        let snapshot: Vec<Vec<String>> = Facet::ALL
            .iter()
            .map(|facet| engine.options(*facet).to_vec())
            .collect();

        for _ in 0..5 {
            let criteria = random_criteria(&mut faker, &engine);
            engine.set_criteria(criteria);
            for (facet, expected) in Facet::ALL.iter().zip(&snapshot) {
                assert_eq!(engine.options(*facet), expected.as_slice(), "seed {seed}");
            }
        }

        let years: Vec<i32> = snapshot[0]
            .iter()
            .map(|year| year.parse().expect("year option is numeric"))
            .collect();
        assert!(years.windows(2).all(|pair| pair[0] > pair[1]), "seed {seed}");
        for sorted in &snapshot[1..] {
            assert!(sorted.windows(2).all(|pair| pair[0] < pair[1]), "seed {seed}");
        }
    }
}

#[test]
fn results_are_ordered_subsequence_of_dataset() {
    for seed in SEEDS {
        let (mut faker, mut engine) = engine_for(seed);
        let criteria = random_criteria(&mut faker, &engine);
        engine.set_criteria(criteria);

        let ids = engine.result_ids();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]), "seed {seed}");
    }
}

#[test]
fn clear_restores_full_dataset() {
    for seed in SEEDS {
        let (mut faker, mut engine) = engine_for(seed);
        let criteria = random_criteria(&mut faker, &engine);
        engine.set_criteria(criteria);
        engine.clear();
        assert_eq!(engine.result_count(), engine.dataset().len(), "seed {seed}");
    }
}
