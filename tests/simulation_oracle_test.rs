//! Fixed-oracle tests for the FIFO and LRU simulators.
//!
//! Every expected value below was worked out by hand, step by step.

use pagesim::common::pages;
use pagesim::{simulate_fifo, simulate_lru, Error, FrameSnapshot, Policy, SimulationResult};

/// Render every snapshot of a run, e.g. `["[1, -]", "[1, 2]"]`.
fn rendered(result: &SimulationResult) -> Vec<String> {
    result.history().map(FrameSnapshot::to_string).collect()
}

fn final_pages(result: &SimulationResult) -> Vec<i64> {
    result
        .final_snapshot()
        .expect("non-empty trace")
        .pages()
        .map(|p| p.0)
        .collect()
}

// ============================================================================
// Short traces
// ============================================================================

#[test]
fn test_three_distinct_pages_fill_three_frames() {
    let trace = pages(&[1, 2, 3]);
    for policy in Policy::ALL {
        let result = policy.simulate(&trace, 3).unwrap();
        assert_eq!(result.fault_count(), 3, "{policy}");
        assert_eq!(rendered(&result), vec!["[1, -, -]", "[1, 2, -]", "[1, 2, 3]"]);
    }
}

#[test]
fn test_single_frame_repeated_page() {
    let trace = pages(&[1, 1, 1]);
    for policy in Policy::ALL {
        let result = policy.simulate(&trace, 1).unwrap();
        assert_eq!(result.fault_count(), 1, "{policy}");
        assert_eq!(rendered(&result), vec!["[1]", "[1]", "[1]"]);
    }
}

#[test]
fn test_empty_trace_both_policies() {
    for policy in Policy::ALL {
        let result = policy.simulate(&[], 3).unwrap();
        assert_eq!(result.fault_count(), 0);
        assert_eq!(result.history().len(), 0);
    }
}

#[test]
fn test_zero_capacity_both_policies() {
    let trace = pages(&[1, 2, 3]);
    assert!(matches!(
        simulate_fifo(&trace, 0),
        Err(Error::InvalidConfiguration { capacity: 0 })
    ));
    assert!(matches!(
        simulate_lru(&trace, 0),
        Err(Error::InvalidConfiguration { capacity: 0 })
    ));
}

// ============================================================================
// Classic reference string
// ============================================================================

#[test]
fn test_fifo_classic_trace() {
    let result = simulate_fifo(&pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3]), 3).unwrap();

    assert_eq!(result.fault_count(), 8);
    assert_eq!(
        rendered(&result),
        vec![
            "[1, -, -]",
            "[1, 2, -]",
            "[1, 2, 3]",
            "[2, 3, 4]",
            "[3, 4, 1]",
            "[4, 1, 2]",
            "[1, 2, 5]",
            "[1, 2, 5]",
            "[1, 2, 5]",
            "[2, 5, 3]",
        ]
    );
}

#[test]
fn test_lru_classic_trace() {
    let result = simulate_lru(&pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3]), 3).unwrap();

    assert_eq!(result.fault_count(), 8);
    // Least recently used first; hits reorder.
    assert_eq!(
        rendered(&result),
        vec![
            "[1, -, -]",
            "[1, 2, -]",
            "[1, 2, 3]",
            "[2, 3, 4]",
            "[3, 4, 1]",
            "[4, 1, 2]",
            "[1, 2, 5]",
            "[2, 5, 1]",
            "[5, 1, 2]",
            "[1, 2, 3]",
        ]
    );
}

#[test]
fn test_belady_anomaly_fifo() {
    let trace = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);

    let three = simulate_fifo(&trace, 3).unwrap();
    let four = simulate_fifo(&trace, 4).unwrap();

    // More frames, more faults.
    assert_eq!(three.fault_count(), 9);
    assert_eq!(four.fault_count(), 10);
    assert_eq!(final_pages(&three), vec![5, 3, 4]);
    assert_eq!(final_pages(&four), vec![2, 3, 4, 5]);
}

#[test]
fn test_lru_has_no_belady_anomaly_on_classic_trace() {
    let trace = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);

    let three = simulate_lru(&trace, 3).unwrap();
    let four = simulate_lru(&trace, 4).unwrap();

    assert_eq!(three.fault_count(), 10);
    assert_eq!(four.fault_count(), 8);
    assert_eq!(final_pages(&three), vec![3, 4, 5]);
    assert_eq!(final_pages(&four), vec![2, 3, 4, 5]);
}

// ============================================================================
// Where FIFO and LRU diverge
// ============================================================================

#[test]
fn test_hit_distinguishes_lru_from_fifo() {
    let trace = pages(&[1, 2, 1, 3, 2]);

    let fifo = simulate_fifo(&trace, 2).unwrap();
    let lru = simulate_lru(&trace, 2).unwrap();

    // FIFO evicts 1 (oldest arrival) on 3, then 2 hits.
    assert_eq!(fifo.fault_count(), 3);
    assert_eq!(
        rendered(&fifo),
        vec!["[1, -]", "[1, 2]", "[1, 2]", "[2, 3]", "[2, 3]"]
    );

    // LRU evicts 2 (touched least recently) on 3, so 2 faults again.
    assert_eq!(lru.fault_count(), 4);
    assert_eq!(
        rendered(&lru),
        vec!["[1, -]", "[1, 2]", "[2, 1]", "[1, 3]", "[3, 2]"]
    );
}

#[test]
fn test_eviction_sequence() {
    let trace = pages(&[1, 2, 1, 3, 4]);

    let fifo = simulate_fifo(&trace, 2).unwrap();
    let evicted: Vec<_> = fifo.steps().iter().filter_map(|s| s.outcome.evicted()).collect();
    assert_eq!(evicted, pages(&[1, 2]));

    let lru = simulate_lru(&trace, 2).unwrap();
    let evicted: Vec<_> = lru.steps().iter().filter_map(|s| s.outcome.evicted()).collect();
    assert_eq!(evicted, pages(&[2, 1]));
}

#[test]
fn test_negative_and_sparse_page_numbers() {
    let trace = pages(&[-1, 1_000_000, -1, 0]);
    let result = simulate_lru(&trace, 2).unwrap();

    assert_eq!(result.fault_count(), 3);
    assert_eq!(final_pages(&result), vec![-1, 0]);
}
