//! A small nested lookup table of chemical elements.

use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Gas,
    Solid,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Gas => write!(f, "gas"),
            State::Solid => write!(f, "solid"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: &'static str,
    pub state: State,
}

/// The first seven elements keyed by symbol; iteration is in symbol order.
pub fn periodic_elements() -> BTreeMap<&'static str, Element> {
    [
        ("H", "Hydrogen", State::Gas),
        ("He", "Helium", State::Gas),
        ("Li", "Lithium", State::Solid),
        ("Be", "Beryllium", State::Solid),
        ("B", "Boron", State::Solid),
        ("C", "Carbon", State::Solid),
        ("N", "Nitrogen", State::Gas),
    ]
    .into_iter()
    .map(|(symbol, name, state)| (symbol, Element { name, state }))
    .collect()
}

pub fn lookup<'a>(table: &'a BTreeMap<&'static str, Element>, symbol: &str) -> Option<&'a Element> {
    table.get(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_seven_entries() {
        assert_eq!(periodic_elements().len(), 7);
    }

    #[test]
    fn lookup_present_and_missing() {
        let table = periodic_elements();
        let li = lookup(&table, "Li").unwrap();
        assert_eq!(li.name, "Lithium");
        assert_eq!(li.state, State::Solid);
        assert!(lookup(&table, "Un").is_none());
    }

    #[test]
    fn iteration_is_sorted_by_symbol() {
        let symbols: Vec<_> = periodic_elements().keys().copied().collect();
        assert_eq!(symbols, vec!["B", "Be", "C", "H", "He", "Li", "N"]);
    }

    #[test]
    fn state_display() {
        assert_eq!(State::Gas.to_string(), "gas");
        assert_eq!(State::Solid.to_string(), "solid");
    }
}
