//! Composition with explicit delegation.
//!
//! `Employee` and `Android` each hold a `Person`. Implementing
//! `Talker::person` is all either type needs to get `talk`.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Person { name: name.into(), age }
    }

    pub fn talk(&self) -> String {
        format!("Hi, my name is: {}", self.name)
    }
}

pub trait Talker {
    fn person(&self) -> &Person;

    fn talk(&self) -> String {
        self.person().talk()
    }
}

impl Talker for Person {
    fn person(&self) -> &Person {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub person: Person,
    pub employee_id: String,
    pub position: String,
}

impl Talker for Employee {
    fn person(&self) -> &Person {
        &self.person
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Android {
    pub person: Person,
    pub model: String,
}

impl Talker for Android {
    fn person(&self) -> &Person {
        &self.person
    }
}
