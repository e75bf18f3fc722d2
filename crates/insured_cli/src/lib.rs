//! Console front end for the insured persons registry.

pub mod messages;
pub mod shell;
pub mod table;

pub use shell::{MenuChoice, Shell};
pub use table::render_person_table;
