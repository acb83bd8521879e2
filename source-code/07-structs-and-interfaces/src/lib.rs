//! Structs & Interfaces - Runnable Examples
//!
//! Chapter 7: from loose `f64` parameters to structs, methods, trait
//! objects, and composition.
//!
//! ```bash
//! cargo run -p structs-and-interfaces --example p1_free_functions
//! cargo run -p structs-and-interfaces --example p2_structs_and_methods
//! cargo run -p structs-and-interfaces --example p3_interfaces
//! cargo run -p structs-and-interfaces --example p4_embedded_types
//! ```

pub mod geometry;
pub mod people;
pub mod shapes;

pub use geometry::{circle_area, distance, rectangle_area};
pub use people::{Android, Employee, Person, Talker};
pub use shapes::{total_area, Circle, MultiShape, Rectangle, Shape};
