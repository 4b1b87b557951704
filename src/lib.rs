//! # chainbook
//!
//! A fixed-capacity hash table mapping contact names to phone numbers,
//! resolving collisions by separate chaining.
//!
//! The bucket count is chosen at construction and never changes: there is
//! no rehashing and no deletion. Keys are hashed by summing their code
//! points modulo the bucket count, so any permutation of the same
//! characters lands in the same bucket; that weakness is part of the
//! table's contract and kept on purpose.
//!
//! ## Example
//!
//! ```rust
//! use chainbook::HashTable;
//!
//! let mut table = HashTable::new(10)?;
//! table.insert("Liam", "314-590-8772");
//! table.insert("Sophia", "636-821-0041");
//!
//! assert_eq!(table.search("Liam").unwrap().number(), "314-590-8772");
//! assert!(table.search("Ali").is_none());
//! # Ok::<(), chainbook::CapacityError>(())
//! ```

mod contact;
mod dump;
mod error;
#[cfg(feature = "serde")]
mod serde;
mod table;

pub use contact::ContactRecord;
pub use dump::Dump;
pub use error::CapacityError;

use table::Table;

/// String-keyed contact table with a fixed bucket count and separate
/// chaining.
///
/// Mutation goes through `&mut self`, so the borrow checker rules out
/// concurrent writers; wrap the whole table in a lock if it must be
/// shared across threads.
#[derive(Debug)]
pub struct HashTable {
    pub(crate) table: Table,
}

impl HashTable {
    /// Creates a table with `capacity` buckets, all empty.
    ///
    /// Fails with [`CapacityError`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        Ok(Self {
            table: Table::new(capacity)?,
        })
    }

    /// The fixed bucket count.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Number of stored contacts. Updates through re-insertion do not
    /// change it.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bucket a key hashes to: the sum of the key's code points modulo
    /// the capacity. Exposed for diagnostics; `insert` and `search` use it
    /// internally.
    pub fn bucket_index(&self, key: &str) -> usize {
        self.table.bucket_index(key)
    }

    /// Inserts a contact, or overwrites the stored number when the name is
    /// already present. The name of an existing record never changes.
    ///
    /// Returns `true` when a new entry was created and `false` on an
    /// in-place update. The distinction is informational; both outcomes
    /// leave the key present with the given number.
    pub fn insert(&mut self, key: impl Into<String>, number: impl Into<String>) -> bool {
        self.table.insert(key.into(), number.into())
    }

    /// Looks up a contact by name.
    ///
    /// Scans only the chain the key hashes to; a miss returns `None` and
    /// is not an error.
    pub fn search(&self, key: &str) -> Option<&ContactRecord> {
        self.table.search(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Length of the chain at `bucket`.
    ///
    /// Panics if `bucket >= capacity()`, like slice indexing.
    pub fn chain_len(&self, bucket: usize) -> usize {
        self.table.chain(bucket).count()
    }

    /// A displayable view of the whole table, one line per bucket.
    ///
    /// ```rust
    /// # use chainbook::HashTable;
    /// let mut table = HashTable::new(2)?;
    /// table.insert("Liam", "314-590-8772");
    /// print!("{}", table.dump());
    /// # Ok::<(), chainbook::CapacityError>(())
    /// ```
    pub fn dump(&self) -> Dump<'_> {
        Dump::new(&self.table)
    }
}
