//! people
//!
//! Loads the sample directory, prints it, and runs city/age searches.
//!
//! # Usage
//!
//! ```bash
//! # Run the built-in searches
//! cargo run --bin people
//!
//! # Run custom searches
//! RUST_LOG=binary_collection=trace cargo run --bin people -- "25:Chicago" "30:new york"
//! ```

use std::process::ExitCode;

use people_sample::report::{render_directory, render_people, render_search};
use people_sample::{Address, Person, SearchQuery, ValidationError, sample_directory};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "people=info,people_sample=info,binary_collection=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(std::env::args().skip(1))
}

/// Exit code for a malformed search query argument.
const INVALID_QUERY: u8 = 2;

fn run(arguments: impl Iterator<Item = String>) -> ExitCode {
    let queries = match parse_queries(arguments) {
        Ok(queries) => queries,
        Err(error) => {
            tracing::error!(%error, "invalid search query");
            return ExitCode::from(INVALID_QUERY);
        }
    };

    println!("=== Person Example with Address ===");

    let mut directory = sample_directory();
    println!("All people (sorted by city/age hash):");
    print!("{}", render_directory(&directory));
    println!();

    for query in &queries {
        println!("=== Search: Age {} in {} ===", query.age(), query.city());
        println!("{}", render_search(&directory, query));
    }

    println!("=== Adding new person ===");
    let new_person = Person::new(
        "Helen",
        "Garcia",
        25,
        Address::new("555 Oak St", "New York", "NY", "10005"),
    );
    println!("Added: {new_person}");
    directory.insert(new_person);

    println!("Updated search for age 25 in New York:");
    let criteria = Person::search_criteria(25, "New York");
    println!("{}", render_people(directory.find_all(&criteria)));

    ExitCode::SUCCESS
}

fn parse_queries(
    arguments: impl Iterator<Item = String>,
) -> Result<Vec<SearchQuery>, ValidationError> {
    let queries = arguments
        .map(|argument| argument.parse())
        .collect::<Result<Vec<SearchQuery>, _>>()?;

    if queries.is_empty() {
        return Ok(vec![
            SearchQuery::new(25, "New York"),
            SearchQuery::new(30, "Los Angeles"),
            SearchQuery::new(25, "Chicago"),
        ]);
    }
    Ok(queries)
}
