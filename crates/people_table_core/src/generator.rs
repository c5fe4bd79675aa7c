//! crates/people_table_core/src/generator.rs
//!
//! Produces batches of random `Person` rows from fixed word tables.

use crate::domain::Person;
use crate::ports::{CoreError, CoreResult};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

const NAME_PREFIXES: &[&str] = &[
    "faisal", "fakir", "janifer", "cristopher", "tausif", "susmita", "momtaz", "koyel", "dipu",
];

const NAME_SUFFIXES: &[&str] = &[
    "ahmed", "hossain", "hasan", "lopez", "bari", "akter", "chowdhury", "sen", "mollick",
];

const MAIL_DOMAINS: &[&str] = &["gmail", "yahoo", "outlook", "hotmail"];

const LOCATIONS: &[&str] = &["dhaka", "khulna", "lithunia"];

const TAGS: &[&str] = &[
    "Customers", "VIP", "CIP", "Agent", "Bankers", "Lecturers", "Teachers", "Engineers", "Doctors",
];

/// Upper bound (inclusive) on tag draws per person.
const MAX_TAG_DRAWS: usize = 4;

/// Generates `count` people using the thread-local RNG.
///
/// Fails with `CoreError::InvalidArgument` for a negative count.
pub fn generate_people(count: i64) -> CoreResult<Vec<Person>> {
    let count = checked_count(count)?;
    Ok(generate_people_with(&mut rand::thread_rng(), count))
}

/// Parses a textual count, rejecting anything that is not a non-negative integer.
pub fn parse_count(text: &str) -> CoreResult<usize> {
    let trimmed = text.trim();
    let value = trimmed.parse::<i64>().map_err(|_| {
        CoreError::InvalidArgument(format!("'{}' is not an integer", trimmed))
    })?;
    checked_count(value)
}

fn checked_count(count: i64) -> CoreResult<usize> {
    if count < 0 {
        return Err(CoreError::InvalidArgument(format!(
            "count must be non-negative, got {}",
            count
        )));
    }
    usize::try_from(count).map_err(|_| {
        CoreError::InvalidArgument(format!("count {} is too large for this platform", count))
    })
}

/// Generates `count` people drawing from `rng`.
///
/// The potato counts of the batch are a shuffled permutation of `1..=count`,
/// so they are pairwise distinct and never need a retry.
pub fn generate_people_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Person> {
    let mut potatoes: Vec<u64> = (1..=count as u64).collect();
    potatoes.shuffle(rng);

    let people: Vec<Person> = potatoes
        .into_iter()
        .map(|potatoes| random_person(rng, potatoes))
        .collect();

    debug!("Generated {} people.", people.len());
    people
}

fn random_person<R: Rng + ?Sized>(rng: &mut R, potatoes: u64) -> Person {
    let first = pick(rng, NAME_PREFIXES);
    let last = pick(rng, NAME_SUFFIXES);
    let domain = pick(rng, MAIL_DOMAINS);

    Person {
        name: format!("{} {}", first, last),
        email: format!(
            "{}.{}@{}.com",
            first.to_lowercase(),
            last.to_lowercase(),
            domain
        ),
        potatoes,
        tags: random_tags(rng),
        location: pick(rng, LOCATIONS).to_string(),
    }
}

// Duplicate draws are dropped, so a person may end up with fewer tags than draws.
fn random_tags<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let draws = rng.gen_range(0..=MAX_TAG_DRAWS);
    let mut tags: Vec<String> = Vec::with_capacity(draws);
    for _ in 0..draws {
        let tag = pick(rng, TAGS);
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

fn pick<R: Rng + ?Sized>(rng: &mut R, table: &[&'static str]) -> &'static str {
    table[rng.gen_range(0..table.len())]
}
