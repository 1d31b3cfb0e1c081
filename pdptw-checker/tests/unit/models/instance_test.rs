use super::*;
use crate::helpers::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

parameterized_test! {can_derive_pair, (size, index, demand, expected), {
    assert_eq!(derive_pair(size, index, demand), expected);
}}

can_derive_pair! {
    case01_pickup: (7, 1, 10, Some(4)),
    case02_pickup_last: (7, 3, 5, Some(6)),
    case03_delivery: (7, 6, -5, Some(3)),
    case04_depot: (7, 0, 0, None),
    case05_pickup_out_of_range: (7, 4, 10, None),
    case06_delivery_to_depot: (7, 3, -5, None),
    case07_even_size: (6, 2, 1, Some(5)),
}

#[test]
fn can_classify_nodes() {
    let instance = create_tiny_instance();

    assert!(instance.nodes[0].is_depot());
    assert!(instance.nodes[1].is_pickup());
    assert!(instance.nodes[2].is_delivery());
    assert_eq!(instance.get_requests().collect::<Vec<_>>(), vec![(1, 2)]);
    assert_eq!(instance.travel_time(2, 0), Some(8));
    assert_eq!(instance.travel_time(3, 0), None);
}

#[test]
fn can_keep_pairing_symmetry_on_random_layouts() {
    let mut random = SmallRng::seed_from_u64(42);

    (0..20).for_each(|_| {
        let requests = random.gen_range(1..15);
        let instance = create_line_instance(requests, 10);

        instance.nodes.iter().filter(|node| node.is_delivery()).for_each(|delivery| {
            let pickup = instance.get_node(delivery.pair.expect("no pair")).expect("no pickup");

            assert!(pickup.is_pickup());
            assert_eq!(pickup.pair, Some(delivery.index));
        });
        assert!(instance.get_pair_conflicts().is_empty());
    });
}

#[test]
fn can_detect_declared_pair_mismatch() {
    let instance = InstanceBuilder::default()
        .add_node((0, 0, 0, 100, 0))
        .add_node((1, 1, 0, 100, 0))
        .add_node((2, 1, 0, 100, 0))
        .add_node((3, -1, 0, 100, 0))
        .add_node((4, -1, 0, 100, 0))
        .set_pairs(vec![(0, 0), (0, 4), (0, 3), (2, 0), (1, 0)])
        .set_line_matrix()
        .build_instance();

    let conflicts = instance.get_pair_conflicts();

    assert_eq!(instance.nodes[1].pair, Some(4));
    assert_eq!(
        conflicts,
        vec![
            PairConflict::OffsetMismatch { node: 1, declared: 4, derived: Some(3) },
            PairConflict::OffsetMismatch { node: 2, declared: 3, derived: Some(4) },
            PairConflict::OffsetMismatch { node: 3, declared: 2, derived: Some(1) },
            PairConflict::OffsetMismatch { node: 4, declared: 1, derived: Some(2) },
        ]
    );
    assert_eq!(
        conflicts[0].to_string(),
        "node 1 declares pair 4, but index offset gives 3: declared is used"
    );
}

#[test]
fn can_detect_not_complementary_pair() {
    let instance = InstanceBuilder::default()
        .add_node((0, 0, 0, 100, 0))
        .add_node((1, 1, 0, 100, 0))
        .add_node((2, 1, 0, 100, 0))
        .set_pairs(vec![(0, 0), (0, 2), (0, 0)])
        .set_line_matrix()
        .build_instance();

    let conflicts = instance.get_pair_conflicts();

    assert!(conflicts.contains(&PairConflict::NotComplementary { node: 1, pair: Some(2) }));
    assert!(conflicts.contains(&PairConflict::NotComplementary { node: 2, pair: None }));
}
