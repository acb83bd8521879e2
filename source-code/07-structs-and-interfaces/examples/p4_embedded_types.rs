//! Pattern 4: Composition instead of Embedding
//! Example: Employee and Android reuse Person through a trait
//!
//! Run with: cargo run -p structs-and-interfaces --example p4_embedded_types

use structs_and_interfaces::{Android, Employee, Person, Talker};

fn main() {
    println!("=== Employee ===");
    let e = Employee {
        person: Person::new("Alice", 30),
        employee_id: "E12345".into(),
        position: "Software Engineer".into(),
    };
    println!("Name: {}", e.person().name);
    println!("Age: {}", e.person().age);
    println!("Employee ID: {}", e.employee_id);
    println!("Position: {}", e.position);

    println!("\n=== Person ===");
    let p = Person::new("Nitesh", 35);
    println!("{}", p.name);

    println!("\n=== Android ===");
    let mut a = Android::default();
    a.person = Person::new("Nitesh Kumar", 35);
    a.model = "R2".into();
    println!("{}", a.person.talk());
    println!("{}", a.talk());

    println!("\n=== Key Points ===");
    println!("- Fields are not promoted; reach them through .person");
    println!("- A default trait method gives every holder the same behaviour");
}
