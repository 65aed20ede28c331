/*!
 * Allocation Scenario Tests
 * Placement, release, and ID assignment through the public engine API
 */

use partition_sim::{
    AllocationEngine, AllocationError, Cell, CloseError, ConfigurationError, PlacementReport,
    Process,
};
use pretty_assertions::assert_eq;

#[test]
fn test_reference_scenario() {
    let mut engine = AllocationEngine::configure(300, 100).unwrap();
    assert_eq!(engine.partition_count(), 3);

    let first = engine.create_process(80).unwrap();
    assert_eq!(
        first,
        PlacementReport {
            process_id: 1,
            partition_id: 0,
            start_address: 0,
            required_size: 80,
            fragmentation_pct: 20.0,
        }
    );

    let second = engine.create_process(100).unwrap();
    assert_eq!(second.process_id, 2);
    assert_eq!(second.partition_id, 1);
    assert_eq!(second.start_address, 100);
    assert_eq!(second.fragmentation_pct, 0.0);

    let release = engine.close_process(1).unwrap();
    assert_eq!(release.partition_id, 0);
    assert_eq!(engine.fragmentation_of(0), None);
    assert_eq!(
        engine.list_terminated_processes(),
        vec![Process::new(1, 80, 0)]
    );
    assert!(engine.active().find(1).is_none());

    // Refill partitions 0 and 2, then the table is full
    assert_eq!(engine.create_process(100).unwrap().partition_id, 0);
    assert_eq!(engine.create_process(100).unwrap().partition_id, 2);
    assert_eq!(
        engine.create_process(100).unwrap_err(),
        AllocationError::NoPartitionAvailable {
            requested: 100,
            partitions: 3,
        }
    );
}

#[test]
fn test_first_fit_reuses_lowest_free_partition() {
    let mut engine = AllocationEngine::configure(400, 100).unwrap();
    for _ in 0..4 {
        engine.create_process(50).unwrap();
    }

    engine.close_process(3).unwrap();
    engine.close_process(2).unwrap();

    let report = engine.create_process(10).unwrap();
    assert_eq!(report.partition_id, 1);
    assert_eq!(report.start_address, 100);

    let report = engine.create_process(10).unwrap();
    assert_eq!(report.partition_id, 2);
}

#[test]
fn test_process_ids_are_never_reused() {
    let mut engine = AllocationEngine::configure(100, 100).unwrap();

    let mut seen = Vec::new();
    for _ in 0..5 {
        let report = engine.create_process(60).unwrap();
        seen.push(report.process_id);
        engine.close_process(report.process_id).unwrap();
    }

    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    let terminated: Vec<_> = engine
        .list_terminated_processes()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(terminated, seen);
}

#[test]
fn test_close_restores_free_cells() {
    let mut engine = AllocationEngine::configure(30, 10).unwrap();
    engine.create_process(10).unwrap();
    engine.create_process(3).unwrap();

    engine.close_process(2).unwrap();

    let memory = engine.memory_snapshot();
    assert!(memory[..10].iter().all(|c| *c == Cell::Owned(1)));
    assert!(memory[10..].iter().all(Cell::is_free));
    assert!(engine.partitions().get(1).unwrap().is_free());
}

#[test]
fn test_close_errors_leave_state_untouched() {
    let mut engine = AllocationEngine::configure(200, 100).unwrap();
    engine.create_process(70).unwrap();
    let before = engine.snapshot();

    assert_eq!(
        engine.close_process(42).unwrap_err(),
        CloseError::ProcessNotFound(42)
    );
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_remainder_is_unaddressable() {
    let mut engine = AllocationEngine::configure(250, 100).unwrap();
    assert_eq!(engine.partition_count(), 2);
    assert_eq!(engine.partitions().unaddressable_kb(), 50);
    assert_eq!(engine.memory_snapshot().len(), 250);

    engine.create_process(100).unwrap();
    engine.create_process(100).unwrap();
    assert!(engine.create_process(1).is_err());
    assert!(engine.memory_snapshot()[200..].iter().all(Cell::is_free));
}

#[test]
fn test_configuration_errors() {
    assert_eq!(
        AllocationEngine::configure(100, 0).unwrap_err(),
        ConfigurationError::ZeroPartitionSize
    );
    assert_eq!(
        AllocationEngine::configure(0, 0).unwrap_err(),
        ConfigurationError::ZeroTotalMemory
    );
    assert_eq!(
        AllocationEngine::configure(99, 100).unwrap_err(),
        ConfigurationError::PartitionLargerThanMemory {
            partition: 100,
            total: 99,
        }
    );
}

#[test]
fn test_unobtainable_memory_is_a_configuration_error() {
    let total = usize::MAX / 2;

    // Partition table itself cannot be reserved
    assert_eq!(
        AllocationEngine::configure(total, 1).unwrap_err(),
        ConfigurationError::BackingStoreUnavailable { cells: total }
    );

    // Two partitions fit, the cell map does not
    assert_eq!(
        AllocationEngine::configure(total, total / 2).unwrap_err(),
        ConfigurationError::BackingStoreUnavailable { cells: total }
    );
}

#[test]
fn test_independent_simulations() {
    let mut a = AllocationEngine::configure(100, 50).unwrap();
    let mut b = AllocationEngine::configure(100, 50).unwrap();

    a.create_process(10).unwrap();
    a.create_process(10).unwrap();
    let report = b.create_process(10).unwrap();

    assert_ne!(a.id(), b.id());
    assert_eq!(report.process_id, 1);
    assert_eq!(b.active().len(), 1);
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = AllocationEngine::configure(20, 10).unwrap();
    engine.create_process(3).unwrap();

    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["stats"]["partition_count"], 2);
    assert_eq!(json["partitions"][0]["occupant"], 1);
    assert_eq!(json["partitions"][0]["fragmentation_pct"], 70.0);
    assert!(json["partitions"][1].get("occupant").is_none());
    assert_eq!(json["memory"][0]["state"], "owned");
    assert_eq!(json["memory"][0]["pid"], 1);
    assert_eq!(json["memory"][5]["state"], "free");
}
