use crate::prelude::{
    AppError, ContactStore,
    command::{Cli, Commands},
};
use crate::validation::{validate_name, validate_number};
use clap::Parser;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut store = ContactStore::new(cli.capacity)?;

    match cli.command {
        Commands::Demo => {
            run_demo(&mut store);
            Ok(())
        }

        Commands::Add { name, number } => {
            if name.len() != number.len() {
                return Err(AppError::Validation(
                    "every --name needs a matching --number".to_string(),
                ));
            }

            for (name, number) in name.iter().zip(number.iter()) {
                if !validate_name(name) {
                    return Err(AppError::Validation(format!(
                        "\nInvalid Name input: '{}'.",
                        name
                    )));
                }

                if !validate_number(number) {
                    return Err(AppError::Validation(format!(
                        "\nInvalid Number input: '{}'.",
                        number
                    )));
                }

                store.insert(name, number);
            }

            println!("Table now holds {} contact(s)\n", store.len());
            print_table(&store);
            Ok(())
        }

        Commands::Bucket { key } => {
            println!("'{}' hashes to bucket {}", key, store.bucket_index(&key));
            Ok(())
        }
    }
}

/// One line per bucket, chain rendered in insertion order.
pub fn print_table(store: &ContactStore) {
    for bucket in store.buckets() {
        if bucket.is_empty() {
            println!("Index {}: Empty", bucket.index());
        } else {
            let chain: Vec<String> = bucket.contacts().map(|c| format!("- {}", c)).collect();
            println!("Index {}: {}", bucket.index(), chain.join(" "));
        }
    }
}

// Walkthrough of the table's behaviours, in the order a new reader
// would want to see them.
fn run_demo(store: &mut ContactStore) {
    print_table(store);

    println!("\nAdding Contacts");
    store.insert("John", "909-876-1234");
    store.insert("Rebecca", "111-555-0002");
    print_table(store);

    println!("\nSearch");
    match store.search("John") {
        Some(contact) => println!("Search result: {}", contact),
        None => println!("Search result: not found"),
    }

    println!("\nCollision Handling");
    // Anagrams, so both land in the same bucket
    store.insert("Amy", "111-222-3333");
    store.insert("May", "222-333-1111");
    print_table(store);

    println!("\nUpdate Duplicate Key");
    store.insert("Rebecca", "999-444-9999");
    print_table(store);

    println!("\nSearch for Missing Contact");
    match store.search("Chris") {
        Some(contact) => println!("Search result: {}", contact),
        None => println!("Search result: not found"),
    }
}
