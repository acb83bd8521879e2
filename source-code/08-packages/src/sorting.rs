//! Sorting a `Vec` of structs by different keys.
//!
//! One `sort_by` call with a comparator replaces a separate wrapper type
//! per ordering. Both sorts are stable.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Person { name: name.into(), age }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.name, self.age)
    }
}

pub fn kids() -> Vec<Person> {
    vec![
        Person::new("Jill", 9),
        Person::new("Jack", 8),
        Person::new("A", 4),
        Person::new("B", 11),
    ]
}

pub fn sort_by_name(people: &mut [Person]) {
    people.sort_by(|a, b| a.name.cmp(&b.name));
}

pub fn sort_by_age(people: &mut [Person]) {
    people.sort_by_key(|p| p.age);
}
