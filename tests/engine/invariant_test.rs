/*!
 * Engine Invariant Tests
 * Property tests over random create/close sequences
 */

use partition_sim::{AllocationEngine, Cell};
use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Create(usize),
    /// Close the n-th active process (modulo the active count)
    CloseActive(usize),
    /// Close an ID that may never have existed
    CloseRaw(u32),
}

fn op_strategy(partition_kb: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..=partition_kb + 1).prop_map(Op::Create),
        2 => any::<usize>().prop_map(Op::CloseActive),
        1 => (0u32..64).prop_map(Op::CloseRaw),
    ]
}

fn layout_strategy() -> impl Strategy<Value = (usize, usize)> {
    (1usize..40).prop_flat_map(|partition| (Just(partition), partition..partition * 12))
}

/// Checks every cross-structure invariant of a live engine
fn assert_consistent(engine: &AllocationEngine) {
    let partition_kb = engine.partition_kb();
    let memory = engine.memory_snapshot();

    // Occupied partitions <-> active processes
    let occupants: HashSet<u32> = engine
        .partitions()
        .iter()
        .filter_map(|p| p.occupant)
        .collect();
    let active: HashSet<u32> = engine.active().iter().map(|p| p.id).collect();
    assert_eq!(occupants, active);
    assert_eq!(engine.partitions().occupied_count(), engine.active().len());

    for partition in engine.partitions().iter() {
        assert_eq!(partition.size, partition_kb);
        assert_eq!(partition.start_address, partition.id * partition_kb);

        let window = &memory[partition.start_address..partition.end_address()];
        match partition.occupant {
            Some(pid) => {
                let process = engine.active().find(pid).unwrap();
                assert_eq!(process.assigned_address, partition.start_address);

                let owned = window.iter().filter(|c| **c == Cell::Owned(pid)).count();
                let free = window.iter().filter(|c| c.is_free()).count();
                assert_eq!(owned, process.required_size);
                assert_eq!(owned + free, partition_kb);

                let expected =
                    (partition_kb - process.required_size) as f64 * 100.0 / partition_kb as f64;
                let actual = engine.fragmentation_of(partition.id).unwrap();
                assert!((actual - expected).abs() < 1e-9);
            }
            None => {
                assert!(window.iter().all(Cell::is_free));
                assert_eq!(engine.fragmentation_of(partition.id), None);
            }
        }
    }

    // Unaddressable tail never changes
    let addressable = engine.partition_count() * partition_kb;
    assert!(memory[addressable..].iter().all(Cell::is_free));

    // Active and terminated are disjoint, terminated has no duplicates
    let terminated: Vec<u32> = engine.terminated().iter().map(|p| p.id).collect();
    let terminated_set: HashSet<u32> = terminated.iter().copied().collect();
    assert_eq!(terminated.len(), terminated_set.len());
    assert!(active.is_disjoint(&terminated_set));
}

proptest! {
    #[test]
    fn prop_partition_count((total, partition) in layout_strategy()) {
        let engine = AllocationEngine::configure(total, partition).unwrap();
        prop_assert_eq!(engine.partition_count(), total / partition);
        prop_assert!(engine.partition_count() * partition <= total);
        prop_assert_eq!(engine.memory_snapshot().len(), total);
    }

    #[test]
    fn prop_invariants_hold_under_random_ops(
        ((total, partition), ops) in layout_strategy()
            .prop_flat_map(|(total, partition)| {
                (Just((total, partition)), prop::collection::vec(op_strategy(partition), 1..60))
            })
    ) {
        let mut engine = AllocationEngine::configure(total, partition).unwrap();
        let mut last_pid = 0;

        for op in ops {
            match op {
                Op::Create(size) => {
                    let free_before = engine.partitions().find_first_fit(size.max(1));
                    match engine.create_process(size) {
                        Ok(report) => {
                            prop_assert!(report.process_id > last_pid);
                            last_pid = report.process_id;
                            prop_assert_eq!(Some(report.partition_id), free_before);
                        }
                        Err(_) => {
                            prop_assert!(size == 0 || size > partition || free_before.is_none());
                        }
                    }
                }
                Op::CloseActive(n) => {
                    let active = engine.list_active_processes();
                    if active.is_empty() {
                        continue;
                    }
                    let pid = active[n % active.len()].id;
                    let report = engine.close_process(pid).unwrap();
                    prop_assert!(engine.partitions().get(report.partition_id).unwrap().is_free());
                    prop_assert!(engine.terminated().contains(pid));
                    prop_assert!(engine.active().find(pid).is_none());
                }
                Op::CloseRaw(pid) => {
                    let was_active = engine.active().contains(pid);
                    prop_assert_eq!(engine.close_process(pid).is_ok(), was_active);
                }
            }
            assert_consistent(&engine);
        }

        let stats = engine.stats();
        prop_assert_eq!(stats.active_processes + stats.terminated_processes, last_pid as usize);
    }
}
