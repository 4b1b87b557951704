use core::fmt;

use serde::de::{Deserialize, Deserializer, Error, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::HashTable;

impl Serialize for HashTable {
    /// Serializes as a `name -> number` map, in bucket-then-chain order.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;

        for bucket in 0..self.capacity() {
            for entry in self.table.chain(bucket) {
                map.serialize_entry(&entry.key, entry.contact.number())?;
            }
        }

        map.end()
    }
}

struct HashTableVisitor;

impl<'de> Visitor<'de> for HashTableVisitor {
    type Value = HashTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of contact names to numbers")
    }

    fn visit_map<M>(self, mut access: M) -> Result<HashTable, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut pairs: Vec<(String, String)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));

        while let Some(pair) = access.next_entry()? {
            pairs.push(pair);
        }

        // No capacity travels on the wire; one bucket per pair keeps the
        // load factor at 1 and rebuilding goes through the insert path.
        let mut table = HashTable::new(pairs.len().max(1)).map_err(M::Error::custom)?;
        for (name, number) in pairs {
            table.insert(name, number);
        }

        Ok(table)
    }
}

impl<'de> Deserialize<'de> for HashTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(HashTableVisitor)
    }
}
