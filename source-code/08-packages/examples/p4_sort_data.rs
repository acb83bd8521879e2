//! Pattern 4: Sorting
//! Example: Sorting Structs by Name, then by Age
//!
//! Run with: cargo run -p packages --example p4_sort_data

use packages::sorting::{kids, sort_by_age, sort_by_name, Person};

fn show(people: &[Person]) {
    let line: Vec<String> = people.iter().map(ToString::to_string).collect();
    println!("[{}]", line.join(" "));
}

fn main() {
    let mut people = kids();
    show(&people);

    sort_by_name(&mut people);
    show(&people);

    sort_by_age(&mut people);
    show(&people);
}
