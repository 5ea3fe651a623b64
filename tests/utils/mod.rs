pub mod scripted_input;
pub mod table_builders;

// Re-export main utilities for use by test files
pub use scripted_input::ScriptedInput;
#[allow(unused_imports)]
pub use table_builders::{cards, TableBuilder};
