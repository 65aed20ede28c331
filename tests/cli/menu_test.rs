/*!
 * Menu Tests
 * Scripted end-to-end sessions over the interactive front end
 */

use partition_sim::cli::{setup_engine, FixedSizes, Menu};
use partition_sim::{AllocationEngine, EngineSnapshot, SimulatorConfig};

fn run_session(engine: &mut AllocationEngine, script: &str, sizes: &[usize]) -> String {
    let mut output = Vec::new();
    Menu::new(
        engine,
        script.as_bytes(),
        &mut output,
        FixedSizes::new(sizes.to_vec()),
    )
    .with_row_width(10)
    .run()
    .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_create_close_and_views() {
    let mut engine = AllocationEngine::configure(30, 10).unwrap();
    let text = run_session(&mut engine, "1\n1\n2\n1\n3\n4\n5\n6\n0\n", &[8, 10]);

    assert!(text.contains(">>> PROCESS 1 CREATED <<<"));
    assert!(text.contains("Internal fragmentation: 20.00%"));
    assert!(text.contains(">>> PROCESS 2 CREATED <<<"));
    assert!(text.contains(">>> PROCESS 1 CLOSED <<<"));
    assert!(text.contains("Partition 0 released."));
    assert!(text.contains("Total terminated processes: 1"));
    assert!(text.contains("[--] [--] [--] [--] [--] [--] [--] [--] [--] [--]"));
    assert!(text.contains("[P2] [P2] [P2]"));
    assert!(text.contains("Exiting..."));

    assert_eq!(engine.active().len(), 1);
    assert_eq!(engine.next_pid(), 3);
}

#[test]
fn test_errors_are_reported_not_fatal() {
    let mut engine = AllocationEngine::configure(10, 10).unwrap();
    let text = run_session(&mut engine, "1\n1\n2\n7\n2\nxyz\n9\n0\n", &[4, 4]);

    assert!(text.contains("No partition available"));
    assert!(text.contains("The process could not be created."));
    assert!(text.contains("Process 7 not found"));
    assert!(text.contains("'xyz' is not a valid process ID"));
    assert!(text.contains("Invalid option. Try again."));
    assert_eq!(engine.next_pid(), 2);
}

#[test]
fn test_eof_ends_session() {
    let mut engine = AllocationEngine::configure(10, 5).unwrap();
    let text = run_session(&mut engine, "1\n", &[5]);

    assert!(text.contains("Input closed, exiting..."));
    assert_eq!(engine.active().len(), 1);
}

#[test]
fn test_json_dump_round_trips() {
    let mut engine = AllocationEngine::configure(20, 10).unwrap();
    let text = run_session(&mut engine, "1\n8\n0\n", &[6]);

    let start = text.find('{').unwrap();
    let end = text.rfind('}').unwrap();
    let snapshot: EngineSnapshot = serde_json::from_str(&text[start..=end]).unwrap();

    assert_eq!(snapshot.simulation, engine.id());
    assert_eq!(snapshot.stats.used_kb, 6);
    assert_eq!(snapshot.partitions[0].fragmentation_pct, Some(40.0));
    assert_eq!(snapshot.active.len(), 1);
}

#[test]
fn test_setup_uses_configured_sizes() {
    let config = SimulatorConfig::default().with_memory(1000, 300);
    let mut input = "".as_bytes();
    let mut output = Vec::new();

    let engine = setup_engine(&config, &mut input, &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert_eq!(engine.partition_count(), 3);
    assert!(text.contains("100 KB past the last partition are unusable."));
}
