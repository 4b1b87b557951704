//! Walks the contact table through its public surface: inserts, a lookup
//! hit and miss, colliding keys, and the diagnostic dump.
//!
//! Run with `cargo run --example contacts`.

use chainbook::{CapacityError, HashTable};

fn main() -> Result<(), CapacityError> {
    let mut table = HashTable::new(10)?;
    print!("{}", table.dump());

    println!("\nAdd contact names and numbers");
    table.insert("Liam", "314-590-8772");
    table.insert("Sophia", "636-821-0041");
    print!("{}", table.dump());

    println!("\nSearch for an existing contact");
    match table.search("Liam") {
        Some(contact) => println!("Search result: {contact}"),
        None => println!("Search result: not found"),
    }

    println!("\nCollisions and duplicates");
    table.insert("Ethan", "417-233-9044");
    table.insert("Nathan", "618-202-5541");
    table.insert("Lauren", "999-555-9999");
    print!("{}", table.dump());

    println!("\nSearch for a contact that was never added");
    match table.search("Ali") {
        Some(contact) => println!("Search result: {contact}"),
        None => println!("Search result: not found"),
    }

    Ok(())
}
