use crate::contact::ContactRecord;
use crate::error::CapacityError;

/// One arena slot: a chain node holding a contact and the arena index of
/// the next node in the same bucket.
///
/// The key duplicates the contact's name so chain scans compare strings
/// without reaching into the record.
#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) key: String,
    pub(crate) contact: ContactRecord,
    next: Option<usize>,
}

/// Core storage: a fixed-size array of bucket heads plus an entry arena.
///
/// Chains are linked by arena indices rather than owned pointers, so a
/// bucket head and every `next` link is just `Option<usize>` and dropping
/// the table drops the arena in one go.
#[derive(Debug)]
pub(crate) struct Table {
    buckets: Box<[Option<usize>]>,
    entries: Vec<Entry>,
}

impl Table {
    pub(crate) fn new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError);
        }

        Ok(Self {
            buckets: vec![None; capacity].into_boxed_slice(),
            entries: Vec::new(),
        })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sum of the key's code points, reduced modulo the bucket count.
    ///
    /// Deliberately order-insensitive: any permutation of a key lands in
    /// the same bucket. The empty string hashes to 0.
    pub(crate) fn bucket_index(&self, key: &str) -> usize {
        let sum: u64 = key.chars().map(|c| c as u64).sum();
        (sum % self.buckets.len() as u64) as usize
    }

    /// Inserts the pair, or overwrites the number of an existing entry with
    /// the same key. Returns `true` only when a new entry was created.
    pub(crate) fn insert(&mut self, key: String, number: String) -> bool {
        let bucket = self.bucket_index(&key);

        let mut tail = None;
        let mut cursor = self.buckets[bucket];

        while let Some(at) = cursor {
            if self.entries[at].key == key {
                self.entries[at].contact.set_number(number);
                return false;
            }

            tail = Some(at);
            cursor = self.entries[at].next;
        }

        let at = self.entries.len();
        let contact = ContactRecord::new(key.clone(), number);
        self.entries.push(Entry {
            key,
            contact,
            next: None,
        });

        // New entries go at the tail, keeping chains in insertion order.
        match tail {
            Some(prev) => self.entries[prev].next = Some(at),
            None => self.buckets[bucket] = Some(at),
        }

        true
    }

    pub(crate) fn search(&self, key: &str) -> Option<&ContactRecord> {
        let mut cursor = self.buckets[self.bucket_index(key)];

        while let Some(at) = cursor {
            let entry = &self.entries[at];
            if entry.key == key {
                return Some(&entry.contact);
            }
            cursor = entry.next;
        }

        None
    }

    /// In-order traversal of one bucket's chain.
    ///
    /// Panics if `bucket` is out of range, like slice indexing.
    pub(crate) fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            table: self,
            cursor: self.buckets[bucket],
        }
    }
}

pub(crate) struct Chain<'a> {
    table: &'a Table,
    cursor: Option<usize>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<&'a Entry> {
        let entry = &self.table.entries[self.cursor?];
        self.cursor = entry.next;
        Some(entry)
    }
}
