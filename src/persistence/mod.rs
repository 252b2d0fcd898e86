//! JSON and CSV persistence for shape collections
//!
//! Files are named after the kind (`Rectangle.json`, `Square.csv`, ...) and
//! always rewritten whole.

pub mod csv_table;
pub mod json;
mod store;

pub use json::{decode_from_json, encode_to_json};
pub use store::ShapeStore;
