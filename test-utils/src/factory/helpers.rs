//! Shared helper utilities for factory methods.

/// Counter for generating unique ids in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1000);

/// Gets the next unique counter value for test data.
///
/// Starts above the ids used by fixtures so factory records never collide with them.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
