//! The contact-book walkthrough end to end: scripted inserts, a hit, a
//! miss, a natural collision, and the exact dump text.

use chainbook::HashTable;

#[test]
fn contact_book_walkthrough() {
    let mut table = HashTable::new(10).unwrap();

    table.insert("Liam", "314-590-8772");
    table.insert("Sophia", "636-821-0041");

    let liam = table.search("Liam").unwrap();
    assert_eq!(liam.to_string(), "Liam: 314-590-8772");
    assert!(table.search("Ali").is_none());

    table.insert("Ethan", "417-233-9044");
    table.insert("Nathan", "618-202-5541");
    table.insert("Lauren", "999-555-9999");

    // "Sophia" and "Nathan" both hash to bucket 2 and chain together.
    assert_eq!(table.bucket_index("Sophia"), table.bucket_index("Nathan"));
    assert_eq!(table.chain_len(2), 2);

    assert_eq!(
        table.dump().to_string(),
        "Index 0: Empty\n\
         Index 1: Empty\n\
         Index 2: - Sophia: 636-821-0041 - Nathan: 618-202-5541\n\
         Index 3: Empty\n\
         Index 4: Empty\n\
         Index 5: - Lauren: 999-555-9999\n\
         Index 6: - Ethan: 417-233-9044\n\
         Index 7: - Liam: 314-590-8772\n\
         Index 8: Empty\n\
         Index 9: Empty\n"
    );
}

#[test]
fn anagram_keys_collide_but_resolve() {
    let mut table = HashTable::new(10).unwrap();
    table.insert("Liam", "314-590-8772");
    table.insert("Mali", "111-222-3333");

    let bucket = table.bucket_index("Liam");
    assert_eq!(table.bucket_index("Mali"), bucket);
    assert_eq!(table.chain_len(bucket), 2);

    assert_eq!(table.search("Liam").unwrap().number(), "314-590-8772");
    assert_eq!(table.search("Mali").unwrap().number(), "111-222-3333");
}
