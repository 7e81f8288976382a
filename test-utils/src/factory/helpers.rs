//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
///
/// Ensures each factory-created entity gets unique values for unique columns,
/// preventing collisions between records in the same test.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Empty JSON array column value.
pub fn empty_list() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}
