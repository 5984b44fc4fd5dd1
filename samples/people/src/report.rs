//! Text rendering of the directory and of search results.

use binary_collection::comparer::HashGenerator;

use crate::comparer::PersonCityAgeComparer;
use crate::person::Person;
use crate::query::SearchQuery;
use crate::Directory;

/// Renders every person in storage order, each with its comparer hash.
#[must_use]
pub fn render_directory(directory: &Directory) -> String {
    directory
        .iter()
        .map(|person| {
            let hash = person.hash_with(&PersonCityAgeComparer);
            format!("  {person}. Hash: {hash}.\n")
        })
        .collect()
}

/// Renders the people matching `query`, preceded by a count line.
#[must_use]
pub fn render_search(directory: &Directory, query: &SearchQuery) -> String {
    let criteria = query.to_criteria();
    let found: Vec<&Person> = directory.find_all(&criteria).collect();

    tracing::info!(
        age = query.age(),
        city = query.city(),
        found = found.len(),
        "searched directory"
    );

    let mut output = format!(
        "Found {} people aged {} in {}:\n",
        found.len(),
        query.age(),
        query.city()
    );
    output.push_str(&render_people(found));
    output
}

/// Renders one indented line per person.
#[must_use]
pub fn render_people<'a>(people: impl IntoIterator<Item = &'a Person>) -> String {
    people
        .into_iter()
        .map(|person| format!("  {person}\n"))
        .collect()
}
