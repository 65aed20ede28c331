/*!
 * Environment Configuration Tests
 */

use partition_sim::{ConfigurationError, SimulatorConfig};
use serial_test::serial;
use std::env;

const KEYS: [&str; 5] = [
    "PARTSIM_TOTAL_KB",
    "PARTSIM_PARTITION_KB",
    "PARTSIM_TRACE_JSON",
    "PARTSIM_ROW_WIDTH",
    "PARTSIM_SEED",
];

fn clear_env() {
    for key in KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_env();
    env::set_var("PARTSIM_TOTAL_KB", "512");
    env::set_var("PARTSIM_PARTITION_KB", "64");
    env::set_var("PARTSIM_SEED", "7");

    let config = SimulatorConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.total_memory_kb, Some(512));
    assert_eq!(config.partition_kb, Some(64));
    assert_eq!(config.seed, Some(7));
    assert!(!config.trace_json);
}

#[test]
#[serial]
fn test_from_env_rejects_invalid_numbers() {
    clear_env();
    env::set_var("PARTSIM_PARTITION_KB", "-4");

    let result = SimulatorConfig::from_env();
    clear_env();

    assert_eq!(
        result.unwrap_err(),
        ConfigurationError::InvalidSetting {
            key: "PARTSIM_PARTITION_KB".into(),
            value: "-4".into(),
        }
    );
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    assert_eq!(SimulatorConfig::from_env().unwrap(), SimulatorConfig::default());
}
