use core::fmt;

/// Returned by [`HashTable::new`](crate::HashTable::new) when the requested
/// bucket count is zero. A table always has at least one bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError;

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("hash table capacity must be at least 1")
    }
}

impl std::error::Error for CapacityError {}
