//! Tests for the benchmark collaborator

use arbor::bench::{self, OPERATIONS};

#[test]
fn given_sizes_when_running_then_one_row_per_size() {
    let report = bench::run(&[5, 10]);

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].size, 5);
    assert_eq!(report.rows[1].size, 10);
}

#[test]
fn given_a_row_when_inspecting_then_every_operation_is_timed() {
    let report = bench::run(&[10]);

    assert_eq!(report.rows[0].timings.len(), OPERATIONS.len());
}

#[test]
fn given_no_sizes_when_running_then_empty_report() {
    let report = bench::run(&[]);
    assert!(report.rows.is_empty());
}
