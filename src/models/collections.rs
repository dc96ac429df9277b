//! Population snapshot collection
//!
//! This module provides the id-indexed, insertion-ordered collection the
//! resolver operates on. A snapshot is immutable for the duration of a
//! resolution pass; iteration order is the order people were supplied in,
//! which is normative for query results.

use std::sync::Arc;

use log::debug;
use rustc_hash::FxHashMap;

use crate::models::person::Person;
use crate::models::types::PersonId;

/// An immutable population snapshot that can be efficiently queried
#[derive(Debug, Clone, Default)]
pub struct Population {
    /// People in insertion order
    people: Vec<Arc<Person>>,
    /// People indexed by id
    by_id: FxHashMap<PersonId, Arc<Person>>,
    /// Ids that were supplied more than once; only the first occurrence
    /// is kept
    duplicate_ids: Vec<PersonId>,
}

impl Population {
    /// Create a new empty `Population`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a population from a list of people.
    ///
    /// Duplicate ids are resolved first-seen-wins; the skipped ids are
    /// recorded and surfaced by the validation pass.
    #[must_use]
    pub fn from_people(people: Vec<Person>) -> Self {
        let mut population = Self::new();
        for person in people {
            population.insert(person);
        }
        population
    }

    fn insert(&mut self, person: Person) {
        if self.by_id.contains_key(&person.id) {
            debug!("skipping duplicate person id {}", person.id);
            self.duplicate_ids.push(person.id);
            return;
        }
        let person = Arc::new(person);
        self.by_id.insert(person.id, Arc::clone(&person));
        self.people.push(person);
    }

    /// Get a person by id
    #[must_use]
    pub fn get(&self, id: PersonId) -> Option<Arc<Person>> {
        self.by_id.get(&id).cloned()
    }

    /// All people in insertion order
    #[must_use]
    pub fn all(&self) -> Vec<Arc<Person>> {
        self.people.clone()
    }

    /// All people in insertion order, borrowed
    #[must_use]
    pub fn people(&self) -> &[Arc<Person>] {
        &self.people
    }

    /// People matching a predicate, in insertion order
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Vec<Arc<Person>>
    where
        F: Fn(&Person) -> bool,
    {
        self.people
            .iter()
            .filter(|person| predicate(person))
            .cloned()
            .collect()
    }

    /// Ids that were dropped during construction because an earlier
    /// person already carried them
    #[must_use]
    pub fn duplicate_ids(&self) -> &[PersonId] {
        &self.duplicate_ids
    }

    /// Number of people in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the snapshot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl FromIterator<Person> for Population {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        let mut population = Self::new();
        for person in iter {
            population.insert(person);
        }
        population
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::Gender;

    #[test]
    fn first_seen_wins_on_duplicate_ids() {
        let population = Population::from_people(vec![
            Person::new(1, "first", Gender::Female),
            Person::new(1, "second", Gender::Male),
            Person::new(2, "other", Gender::Unknown),
        ]);

        assert_eq!(population.len(), 2);
        assert_eq!(population.get(1).map(|p| p.name.clone()).as_deref(), Some("first"));
        assert_eq!(population.duplicate_ids(), &[1]);
    }

    #[test]
    fn filter_keeps_insertion_order() {
        let population = Population::from_people(vec![
            Person::new(1, "a", Gender::Female).with_children(vec![10]),
            Person::new(2, "b", Gender::Male),
            Person::new(3, "c", Gender::Female).with_children(vec![20]),
        ]);

        let with_children = population.filter(|person| !person.children.is_empty());
        let ids: Vec<_> = with_children.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let women = population.filter(|person| person.gender == Gender::Female);
        assert_eq!(women.len(), 2);
    }

    #[test]
    fn preserves_insertion_order() {
        let population: Population = [3, 1, 2]
            .into_iter()
            .map(|id| Person::new(id, format!("p{id}"), Gender::Unknown))
            .collect();

        let ids: Vec<_> = population.people().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
