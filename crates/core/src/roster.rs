//! Roster - the people shown on the explore screen's avatar strip
//!
//! The roster is seed data built once at startup: the local user ("self")
//! followed by a list of contacts.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::models::{Person, PersonId};

/// Id of the built-in local user
pub const SELF_ID: &str = "me";

/// The local user plus their contacts
#[derive(Debug, Clone)]
pub struct Roster {
    me: Person,
    contacts: Vec<Person>,
}

impl Roster {
    /// Build a roster, rejecting blank fields and duplicate ids
    pub fn new(me: Person, contacts: Vec<Person>) -> Result<Self> {
        let mut seen = HashSet::new();

        for person in std::iter::once(&me).chain(contacts.iter()) {
            if person.id.as_str().trim().is_empty() {
                return Err(Error::InvalidRoster(format!(
                    "person '{}' has an empty id",
                    person.name
                )));
            }
            if person.name.trim().is_empty() {
                return Err(Error::InvalidRoster(format!(
                    "person '{}' has an empty name",
                    person.id
                )));
            }
            if !seen.insert(person.id.clone()) {
                return Err(Error::DuplicatePerson(person.id.to_string()));
            }
        }

        Ok(Self { me, contacts })
    }

    /// Built-in roster: the local user and eight online contacts
    pub fn seed() -> Self {
        let contacts = [
            ("1", "Alice Johnson"),
            ("2", "Bob Smith"),
            ("3", "Charlie Brown"),
            ("4", "Diana Prince"),
            ("5", "Ethan Hunt"),
            ("6", "Fiona Glenanne"),
            ("7", "Gabe Logan"),
            ("8", "Hannah Lee"),
        ]
        .into_iter()
        .map(|(id, name)| Person::new(id, name))
        .collect();

        Self {
            me: Person::new(SELF_ID, "Okasha Arshad"),
            contacts,
        }
    }

    pub fn me(&self) -> &Person {
        &self.me
    }

    pub fn contacts(&self) -> &[Person] {
        &self.contacts
    }

    /// Everyone in display order, self first
    pub fn entries(&self) -> impl Iterator<Item = &Person> {
        std::iter::once(&self.me).chain(self.contacts.iter())
    }

    pub fn find(&self, id: &PersonId) -> Option<&Person> {
        self.entries().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len() + 1
    }

    /// Always false: the local user is always present
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_roster() {
        let roster = Roster::seed();
        assert_eq!(roster.len(), 9);
        assert_eq!(roster.me().id.as_str(), SELF_ID);
        assert_eq!(roster.contacts().len(), 8);
        assert!(roster.entries().all(|p| p.online));

        let first: Vec<_> = roster.entries().take(2).map(|p| p.name.as_str()).collect();
        assert_eq!(first, vec!["Okasha Arshad", "Alice Johnson"]);
    }

    #[test]
    fn test_find() {
        let roster = Roster::seed();
        assert_eq!(
            roster.find(&PersonId::from("2")).map(|p| p.name.as_str()),
            Some("Bob Smith")
        );
        assert!(roster.find(&PersonId::from("42")).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Roster::new(
            Person::new("me", "Okasha Arshad"),
            vec![Person::new("1", "Alice"), Person::new("1", "Another Alice")],
        );
        assert!(matches!(result, Err(Error::DuplicatePerson(id)) if id == "1"));
    }

    #[test]
    fn test_contact_cannot_reuse_self_id() {
        let result = Roster::new(
            Person::new("me", "Okasha Arshad"),
            vec![Person::new("me", "Impostor")],
        );
        assert!(matches!(result, Err(Error::DuplicatePerson(_))));
    }

    #[test]
    fn test_blank_fields_rejected() {
        let result = Roster::new(Person::new(" ", "Nobody"), vec![]);
        assert!(matches!(result, Err(Error::InvalidRoster(_))));

        let result = Roster::new(Person::new("me", ""), vec![]);
        assert!(matches!(result, Err(Error::InvalidRoster(_))));
    }
}
