//! Generated people records for the draggable table screen.

use std::fmt;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use serde::Serialize;
use uuid::{Builder, Uuid};

use crate::reorder::Keyed;

const FIRST_NAMES: &[&str] = &[
	"Ada", "Alan", "Barbara", "Claude", "Dennis", "Edsger", "Frances", "Grace", "Hedy", "Ivan",
	"John", "Katherine", "Ken", "Leslie", "Linus", "Margaret", "Niklaus", "Radia", "Rob", "Sophie",
	"Tim", "Whitfield",
];

const LAST_NAMES: &[&str] = &[
	"Allen", "Backus", "Conway", "Dijkstra", "Engelbart", "Hamilton", "Hopper", "Johnson",
	"Kernighan", "Knuth", "Lamport", "Liskov", "Lovelace", "Perlman", "Pike", "Ritchie",
	"Shannon", "Sutherland", "Thompson", "Torvalds", "Turing", "Wirth",
];

/// Stable identity of a person row, used as the drag key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl fmt::Display for UserId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonStatus {
	Relationship,
	Complicated,
	Single,
}

impl PersonStatus {
	const ALL: [Self; 3] = [Self::Relationship, Self::Complicated, Self::Single];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Relationship => "relationship",
			Self::Complicated => "complicated",
			Self::Single => "single",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
	pub user_id: UserId,
	pub first_name: String,
	pub last_name: String,
	pub age: u8,
	pub visits: u32,
	pub status: PersonStatus,
	pub progress: u8,
}

impl Keyed for PersonRecord {
	type Key = UserId;

	fn key(&self) -> &UserId {
		&self.user_id
	}
}

/// Generate `count` people from `seed`. The same seed always yields the same
/// records.
#[must_use]
pub fn generate_people(count: usize, seed: u64) -> Vec<PersonRecord> {
	let mut rng = ChaCha8Rng::seed_from_u64(seed);
	(0..count).map(|_| random_person(&mut rng)).collect()
}

/// A fresh seed for a non-reproducible dataset.
#[must_use]
pub fn random_seed() -> u64 {
	Uuid::new_v4().as_u64_pair().0
}

fn random_person(rng: &mut ChaCha8Rng) -> PersonRecord {
	let mut bytes = [0u8; 16];
	rng.fill_bytes(&mut bytes);
	let user_id = UserId(Builder::from_random_bytes(bytes).into_uuid());

	PersonRecord {
		user_id,
		first_name: pick(rng, FIRST_NAMES).to_string(),
		last_name: pick(rng, LAST_NAMES).to_string(),
		age: below(rng, 41) as u8,
		visits: below(rng, 1001),
		status: PersonStatus::ALL[below(rng, 3) as usize],
		progress: below(rng, 101) as u8,
	}
}

fn pick<'a>(rng: &mut ChaCha8Rng, values: &[&'a str]) -> &'a str {
	values[below(rng, values.len() as u32) as usize]
}

fn below(rng: &mut ChaCha8Rng, bound: u32) -> u32 {
	rng.next_u32() % bound
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn same_seed_same_people() {
		assert_eq!(generate_people(25, 7), generate_people(25, 7));
		assert_ne!(generate_people(25, 7), generate_people(25, 8));
	}

	#[test]
	fn user_ids_are_unique() {
		let people = generate_people(500, 42);
		let ids: HashSet<_> = people.iter().map(|person| person.user_id).collect();
		assert_eq!(ids.len(), people.len());
	}

	#[test]
	fn fields_stay_in_range() {
		for person in generate_people(200, 3) {
			assert!(person.age <= 40);
			assert!(person.visits <= 1000);
			assert!(person.progress <= 100);
			assert!(!person.first_name.is_empty());
		}
	}

	#[test]
	fn serializes_with_camel_case_fields() {
		let person = generate_people(1, 1).remove(0);
		let value = serde_json::to_value(&person).expect("json");
		assert!(value.get("userId").is_some());
		assert!(value.get("firstName").is_some());
		assert_eq!(value["status"], person.status.label());
	}

	#[test]
	fn key_is_user_id() {
		let person = generate_people(1, 9).remove(0);
		assert_eq!(person.key(), &person.user_id);
	}
}
