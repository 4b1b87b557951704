use std::collections::HashMap;

use proptest::collection::vec;
use proptest::prelude::*;

use chainbook::HashTable;

proptest! {
    #[test]
    fn hash_stays_in_range(key in any::<String>(), capacity in 1usize..64) {
        let table = HashTable::new(capacity).unwrap();
        prop_assert!(table.bucket_index(&key) < capacity);
    }

    #[test]
    fn hash_is_deterministic(key in any::<String>(), capacity in 1usize..64) {
        let table = HashTable::new(capacity).unwrap();
        prop_assert_eq!(table.bucket_index(&key), table.bucket_index(&key));
    }

    // Rotating a key permutes its characters, and the hash only sees the
    // code-point sum.
    #[test]
    fn permuted_keys_share_a_bucket(
        key in any::<String>(),
        rotate in 0usize..32,
        capacity in 1usize..64,
    ) {
        let table = HashTable::new(capacity).unwrap();

        let mut chars: Vec<char> = key.chars().collect();
        if !chars.is_empty() {
            let by = rotate % chars.len();
            chars.rotate_left(by);
        }
        let rotated: String = chars.into_iter().collect();

        prop_assert_eq!(table.bucket_index(&key), table.bucket_index(&rotated));
    }

    // A small key alphabet and a tiny table force plenty of collisions and
    // updates; the table must still agree with a std::collections model.
    #[test]
    fn matches_a_model_map(
        ops in vec(("[a-f]{0,3}", "[0-9]{3}"), 0..64),
        capacity in 1usize..8,
    ) {
        let mut table = HashTable::new(capacity).unwrap();
        let mut model: HashMap<String, String> = HashMap::new();

        for (key, number) in ops {
            let fresh = table.insert(key.as_str(), number.as_str());
            prop_assert_eq!(fresh, !model.contains_key(&key));
            model.insert(key, number);
        }

        prop_assert_eq!(table.len(), model.len());
        for (key, number) in &model {
            prop_assert_eq!(table.search(key).map(|c| c.number()), Some(number.as_str()));
        }
        prop_assert!(table.search("zzzz").is_none());
    }
}
