pub mod cell;
pub mod file;
pub mod grid;
pub mod history;
pub mod index;
pub mod offsets;
pub mod transaction;
