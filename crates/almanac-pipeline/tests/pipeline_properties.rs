//! Randomized property checks for range fragmentation
//!
//! Maps are generated with disjoint rules in shuffled order. Every property
//! is checked against a seeded RNG so failures are reproducible.

use almanac_pipeline::{CategoryMap, Pipeline, Range, min_start, traverse_point};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const CASES: usize = 200;

/// Disjoint rules with random gaps, returned in shuffled order
fn random_map(rng: &mut StdRng) -> CategoryMap {
    let rule_count = rng.gen_range(0..8);
    let mut cursor: i64 = rng.gen_range(0..20);
    let mut rows = Vec::with_capacity(rule_count);

    for _ in 0..rule_count {
        let src_start = cursor + rng.gen_range(0..10);
        let length = rng.gen_range(1..15);
        let dest_start = rng.gen_range(0..200);
        rows.push((dest_start, src_start, length));
        cursor = src_start + length;
    }

    rows.shuffle(rng);
    CategoryMap::from_rows(rows).expect("generated rules are valid")
}

fn random_range(rng: &mut StdRng) -> Range {
    Range::new(rng.gen_range(0..120), rng.gen_range(1..60))
}

fn random_stages(rng: &mut StdRng) -> Vec<CategoryMap> {
    let count = rng.gen_range(1..6);
    (0..count).map(|_| random_map(rng)).collect()
}

// =============================================================================
// Single map
// =============================================================================

#[test]
fn test_transform_conserves_length() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..CASES {
        let map = random_map(&mut rng);
        let range = random_range(&mut rng);

        let total: i64 = map.transform(range).iter().map(|r| r.length).sum();
        assert_eq!(total, range.length, "map {:?}, range {}", map, range);
    }
}

#[test]
fn test_fragments_tile_input_range() {
    let mut rng = StdRng::seed_from_u64(0x711e);
    for _ in 0..CASES {
        let map = random_map(&mut rng);
        let range = random_range(&mut rng);

        let mut cursor = range.start;
        for fragment in map.fragments(range) {
            assert_eq!(fragment.source.start, cursor, "gap or overlap in {}", range);
            assert!(fragment.source.length > 0);
            cursor = fragment.source.end();
        }
        assert_eq!(cursor, range.end());
    }
}

#[test]
fn test_fragment_images_match_point_lookup() {
    let mut rng = StdRng::seed_from_u64(0x1006);
    for _ in 0..CASES {
        let map = random_map(&mut rng);
        let range = random_range(&mut rng);

        for fragment in map.fragments(range) {
            for k in 0..fragment.source.length {
                assert_eq!(
                    map.lookup_point(fragment.source.start + k),
                    fragment.image.start + k
                );
            }
        }
    }
}

#[test]
fn test_identity_map_returns_input() {
    let mut rng = StdRng::seed_from_u64(0x1d);
    let map = CategoryMap::identity();
    for _ in 0..CASES {
        let range = random_range(&mut rng);
        assert_eq!(map.transform(range), vec![range]);
    }
}

#[test]
fn test_single_rule_full_coverage() {
    let mut rng = StdRng::seed_from_u64(0xc0);
    for _ in 0..CASES {
        let src_start = rng.gen_range(0..1000);
        let dest_start = rng.gen_range(0..1000);
        let length = rng.gen_range(1..500);
        let map = CategoryMap::from_rows([(dest_start, src_start, length)]).unwrap();

        let offset = rng.gen_range(0..length);
        let inner = Range::new(src_start + offset, rng.gen_range(1..=length - offset));

        assert_eq!(map.transform(inner), vec![inner.shift(dest_start - src_start)]);
    }
}

#[test]
fn test_empty_range_is_noop() {
    let mut rng = StdRng::seed_from_u64(0xe);
    for _ in 0..CASES {
        let map = random_map(&mut rng);
        let start = rng.gen_range(0..120);
        assert!(map.transform(Range::new(start, 0)).is_empty());
        assert!(map.next_range_fragment(Range::new(start, -1)).is_none());
    }
}

// =============================================================================
// Pipeline
// =============================================================================

#[test]
fn test_pipeline_depth_is_monotonic() {
    let mut rng = StdRng::seed_from_u64(0xde97);
    for _ in 0..CASES {
        let stages = random_stages(&mut rng);
        let initial: Vec<Range> = (0..rng.gen_range(1..4)).map(|_| random_range(&mut rng)).collect();

        let mut previous = initial.len();
        Pipeline::new(&stages).run_with_progress(&initial, |progress| {
            assert!(progress.ranges >= previous);
            previous = progress.ranges;
        });
    }
}

#[test]
fn test_point_range_agreement() {
    let mut rng = StdRng::seed_from_u64(0xa9);
    for _ in 0..CASES {
        let stages = random_stages(&mut rng);
        let x = rng.gen_range(0..150);

        let finals = Pipeline::new(&stages).run(&[Range::point(x)]);
        assert_eq!(finals, vec![Range::point(traverse_point(x, &stages))]);
    }
}

#[test]
fn test_min_start_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(0xb7);
    for _ in 0..CASES {
        let stages = random_stages(&mut rng);
        let initial: Vec<Range> = (0..rng.gen_range(1..4)).map(|_| random_range(&mut rng)).collect();

        let brute = initial
            .iter()
            .flat_map(|range| range.start..range.end())
            .map(|x| traverse_point(x, &stages))
            .min();

        let finals = Pipeline::new(&stages).run(&initial);
        assert_eq!(min_start(&finals).ok(), brute);
    }
}
