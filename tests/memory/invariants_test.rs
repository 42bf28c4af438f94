/*!
 * Invariant Properties
 * Ledger invariants hold after every operation in random sequences
 */

use memsim::memory::{FitPolicy, MemoryManager, Snapshot};
use proptest::prelude::*;
use std::collections::HashSet;

const CAPACITY: usize = 64;

#[derive(Debug, Clone)]
enum Op {
    Alloc(usize, FitPolicy),
    FreeId(u32),
    FreeAddr(usize),
}

fn policy_strategy() -> impl Strategy<Value = FitPolicy> {
    prop_oneof![
        Just(FitPolicy::FirstFit),
        Just(FitPolicy::BestFit),
        Just(FitPolicy::WorstFit),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1usize..48, policy_strategy()).prop_map(|(size, policy)| Op::Alloc(size, policy)),
        (0u32..40).prop_map(Op::FreeId),
        (0usize..CAPACITY).prop_map(Op::FreeAddr),
    ]
}

/// The five ledger invariants plus the block-count bound
fn check_invariants(snapshot: &Snapshot) {
    let mut cursor = 0;
    let mut prev_free = false;
    let mut live = 0usize;
    let mut ids = HashSet::new();

    for block in &snapshot.blocks {
        assert_eq!(block.start, cursor, "gap or overlap at {}", block.start);
        assert!(block.size > 0, "zero-size block at {}", block.start);
        assert!(block.used_size <= block.size);

        match block.id {
            None => {
                assert!(!prev_free, "adjacent free blocks at {}", block.start);
                assert_eq!(block.used_size, block.size);
                prev_free = true;
            }
            Some(id) => {
                assert!(ids.insert(id), "duplicate id {}", id);
                live += 1;
                prev_free = false;
            }
        }
        cursor += block.size;
    }

    assert_eq!(cursor, snapshot.capacity, "blocks do not cover the region");
    assert!(!snapshot.blocks.is_empty());
    assert!(snapshot.blocks.len() <= 2 * live + 1, "ledger grew past its bound");
}

proptest! {
    #[test]
    fn invariants_hold_for_random_operation_sequences(
        ops in proptest::collection::vec(op_strategy(), 1..80)
    ) {
        let mut manager = MemoryManager::new();
        manager.init(CAPACITY).unwrap();

        for op in ops {
            let before = manager.snapshot().unwrap();
            let failed = match op {
                Op::Alloc(size, policy) => manager.allocate(size, policy).is_err(),
                Op::FreeId(id) => manager.free_by_id(id).is_err(),
                Op::FreeAddr(addr) => manager.free_by_address(addr).is_err(),
            };

            let after = manager.snapshot().unwrap();
            if failed {
                // Failures are non-mutating.
                prop_assert_eq!(&before, &after);
            }
            check_invariants(&after);
        }
    }

    #[test]
    fn stats_always_balance(
        ops in proptest::collection::vec(op_strategy(), 1..80)
    ) {
        let mut manager = MemoryManager::new();
        manager.init(CAPACITY).unwrap();

        for op in ops {
            match op {
                Op::Alloc(size, policy) => { let _ = manager.allocate(size, policy); }
                Op::FreeId(id) => { let _ = manager.free_by_id(id); }
                Op::FreeAddr(addr) => { let _ = manager.free_by_address(addr); }
            }

            let stats = manager.stats().unwrap();
            prop_assert_eq!(stats.used_space + stats.free_space, CAPACITY);
            prop_assert!(stats.internal_fragmentation <= stats.used_space);
            prop_assert!(stats.usage_percentage >= 0.0 && stats.usage_percentage <= 100.0);
        }
    }
}
