//! Integration tests for the degradation score

use derelict::{compute_degradation, ComponentIntegrity, TerminalError};

fn score(cpu: i64, memory: i64, storage: i64) -> u32 {
    compute_degradation(&ComponentIntegrity::new(cpu, memory, storage).unwrap()).value()
}

#[test]
fn pristine_hardware_has_no_degradation() {
    assert_eq!(score(100, 100, 100), 0);
}

#[test]
fn known_terminals_score_as_expected() {
    assert_eq!(score(100, 70, 50), 21);
    assert_eq!(score(20, 100, 100), 54);
    assert_eq!(score(62, 89, 100), 21);
}

#[test]
fn critical_components_add_a_penalty() {
    // 0.45 * 70 = 31.5 with no penalty at the threshold itself
    let linear_only = score(30, 100, 100);
    let critical = score(29, 100, 100);
    assert_eq!(linear_only, 32);
    assert!(critical > linear_only + 1);
}

#[test]
fn score_never_improves_as_components_decay() {
    for component in 0..3 {
        let mut previous = 0;
        for value in (0..=100).rev() {
            let mut values = [100, 100, 100];
            values[component] = value;
            let current = score(values[0], values[1], values[2]);
            assert!(current >= previous, "component {} at {}", component, value);
            previous = current;
        }
    }
}

#[test]
fn out_of_range_integrity_is_rejected() {
    for (cpu, memory, storage) in [(-1, 50, 50), (50, 101, 50), (50, 50, 1000)] {
        assert!(matches!(
            ComponentIntegrity::new(cpu, memory, storage),
            Err(TerminalError::InvalidIntegrity { .. })
        ));
    }
}
