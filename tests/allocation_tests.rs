//! Ownership tests: every value handed to a set is freed exactly once.
//!
//! A counting global allocator tracks live allocations per thread, so tests
//! running in parallel do not disturb each other's counts.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use topdigits::{BoundedTopKSet, EncodedNumber, StorageMode};

struct CountingAlloc;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

fn bump(delta: isize) {
    let _ = LIVE.try_with(|live| live.set(live.get() + delta));
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            bump(1);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        bump(-1);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        System.realloc(ptr, layout, new_size)
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn live() -> isize {
    LIVE.with(Cell::get)
}

/// A number long enough to need external storage.
fn long(lead: char, zeroes: usize) -> EncodedNumber {
    let text = format!("{}{}{}", "0".repeat(zeroes), lead, "5".repeat(40));
    let n: EncodedNumber = text.parse().unwrap();
    assert_eq!(n.storage_mode(), StorageMode::External);
    n
}

/// Run every admission path once so lazily initialized state is in place
/// before counting starts.
fn warm_up() {
    let mut set = BoundedTopKSet::new(1).unwrap();
    set.add(long('5', 0));
    set.add(long('5', 0));
    set.add(long('1', 0));
    set.add(long('9', 0));
}

#[test]
fn external_number_owns_one_allocation() {
    warm_up();
    let before = live();

    let n = long('3', 0);
    assert_eq!(live(), before + 1);

    drop(n);
    assert_eq!(live(), before);
}

#[test]
fn inline_number_allocates_nothing() {
    warm_up();
    let before = live();

    let n: EncodedNumber = "000123456789012".parse().unwrap();
    assert_eq!(n.storage_mode(), StorageMode::Inline);
    assert_eq!(live(), before);
}

#[test]
fn rejection_below_minimum_frees_candidate() {
    warm_up();
    let mut set = BoundedTopKSet::new(2).unwrap();
    set.add(long('7', 0));
    set.add(long('8', 0));

    let before = live();
    set.add(long('2', 0));
    set.add(long('7', 3));

    assert_eq!(live(), before);
    assert_eq!(set.len(), 2);
}

#[test]
fn duplicate_rejection_frees_candidate() {
    warm_up();
    let mut set = BoundedTopKSet::new(5).unwrap();
    set.add(long('4', 0));
    set.add(long('6', 0));

    let before = live();
    set.add(long('4', 2));
    set.add(long('6', 0));

    assert_eq!(live(), before);
    assert_eq!(set.len(), 2);
    assert_eq!(set.min().unwrap().leading_zeroes(), 0);
}

#[test]
fn eviction_frees_old_minimum() {
    warm_up();
    let mut set = BoundedTopKSet::new(2).unwrap();
    set.add(long('3', 0));
    set.add(long('5', 0));

    let before = live();
    set.add(long('9', 0));
    set.add(long('4', 0));

    assert_eq!(live(), before);
    let leads: Vec<char> = set
        .iter()
        .map(|n| n.to_string().chars().next().unwrap())
        .collect();
    assert_eq!(leads, vec!['5', '9']);
}

#[test]
fn dropping_set_frees_everything() {
    warm_up();
    let before = live();

    let mut set = BoundedTopKSet::new(4).unwrap();
    for lead in ['1', '2', '3', '4', '5', '6', '2', '9'] {
        set.add(long(lead, 0));
    }
    assert!(live() > before);

    drop(set);
    assert_eq!(live(), before);
}
