#![warn(clippy::all, rust_2018_idioms)]

//! Rectangles and squares with automatic ids, rebuilt from flat attribute
//! mappings and persisted as per-kind JSON and CSV files.

pub mod app;
pub mod config;
pub mod error;
pub mod id_generator;
pub mod persistence;
pub mod renderer;
pub mod shape;

pub use app::ShapeViewerApp;
pub use config::StoreConfig;
pub use error::{ShapeError, ShapeResult};
pub use id_generator::{IdAllocator, ShapeId};
pub use persistence::{ShapeStore, decode_from_json, encode_to_json};
pub use renderer::Renderer;
pub use shape::{AnyShape, Attributes, Rectangle, Shape, ShapeKind, Square, factory};
