/*!
 * Shared Engine Tests
 * Lock-serialized access from multiple threads
 */

use partition_sim::{MemoryInfo, ProcessAllocator, SharedEngine};
use std::sync::Barrier;
use std::sync::Arc;
use std::thread;

#[test]
fn test_create_and_close_from_many_threads() {
    let engine = SharedEngine::configure(1000, 10).unwrap();
    let barrier = Arc::new(Barrier::new(10));

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let engine = engine.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..20 {
                    let report = engine.create_process(5).unwrap();
                    engine.close_process(report.process_id).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = engine.stats();
    assert_eq!(stats.active_processes, 0);
    assert_eq!(stats.terminated_processes, 200);
    assert_eq!(stats.next_pid, 201);
    assert!(engine.memory_snapshot().iter().all(|c| c.is_free()));
}

/// Drive any allocator through the trait seam
fn fill<A: ProcessAllocator + MemoryInfo>(allocator: &mut A, size: usize) -> usize {
    let mut placed = 0;
    while allocator.create_process(size).is_ok() {
        placed += 1;
    }
    placed
}

#[test]
fn test_trait_seam_is_shared_by_both_engines() {
    let mut shared = SharedEngine::configure(500, 100).unwrap();
    assert_eq!(fill(&mut shared, 30), 5);
    assert_eq!(shared.list_partitions().iter().filter(|p| p.occupied).count(), 5);

    let mut plain = partition_sim::AllocationEngine::configure(500, 100).unwrap();
    assert_eq!(fill(&mut plain, 100), 5);
    assert_eq!(MemoryInfo::fragmentation_of(&plain, 4), Some(0.0));
}
