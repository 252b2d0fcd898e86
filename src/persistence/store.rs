use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use super::{csv_table, json};
use crate::config::StoreConfig;
use crate::error::{ShapeError, ShapeResult};
use crate::id_generator::IdAllocator;
use crate::shape::{AnyShape, Shape, ShapeKind, factory};

/// Saves and loads per-kind shape collections under one directory.
///
/// Every shape rebuilt from a file draws one id from the store's
/// allocator; a load that fails draws none.
#[derive(Debug, Clone)]
pub struct ShapeStore<'a> {
    config: StoreConfig,
    ids: &'a IdAllocator,
}

impl ShapeStore<'static> {
    /// Create a store backed by the process-wide id allocator
    pub fn new(config: StoreConfig) -> Self {
        Self::with_allocator(config, IdAllocator::global())
    }
}

impl<'a> ShapeStore<'a> {
    pub fn with_allocator(config: StoreConfig, ids: &'a IdAllocator) -> Self {
        Self { config, ids }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn ids(&self) -> &'a IdAllocator {
        self.ids
    }

    pub fn json_path(&self, kind: ShapeKind) -> PathBuf {
        self.config.directory().join(format!("{}.json", kind.name()))
    }

    pub fn csv_path(&self, kind: ShapeKind) -> PathBuf {
        self.config.directory().join(format!("{}.csv", kind.name()))
    }

    /// Write `shapes` to `<Kind>.json`, replacing any previous contents.
    /// `None` writes an empty list.
    pub fn save_collection(&self, kind: ShapeKind, shapes: Option<&[AnyShape]>) -> ShapeResult<()> {
        let shapes = shapes.unwrap_or_default();
        ensure_kind(kind, shapes)?;

        let dictionaries: Vec<_> = shapes.iter().map(|shape| shape.to_dictionary()).collect();
        let text = json::encode_to_json(Some(dictionaries.as_slice()))?;

        let path = self.json_path(kind);
        fs::create_dir_all(self.config.directory())?;
        fs::write(&path, text)?;

        log::info!("Saved {} {} shape(s) to {}", shapes.len(), kind, path.display());
        Ok(())
    }

    /// Read `<Kind>.json` back into shapes, in file order.
    /// A missing file yields an empty list.
    pub fn load_collection(&self, kind: ShapeKind) -> ShapeResult<Vec<AnyShape>> {
        let path = self.json_path(kind);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No saved {} collection at {}", kind, path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let rows = json::decode_from_json(Some(&text))?;
        let shapes = factory::create_all(kind, &rows, self.ids)?;

        log::info!("Loaded {} {} shape(s) from {}", shapes.len(), kind, path.display());
        Ok(shapes)
    }

    /// Write `shapes` to `<Kind>.csv`, one header-less row each
    pub fn save_collection_csv(&self, kind: ShapeKind, shapes: Option<&[AnyShape]>) -> ShapeResult<()> {
        let shapes = shapes.unwrap_or_default();
        ensure_kind(kind, shapes)?;

        let path = self.csv_path(kind);
        fs::create_dir_all(self.config.directory())?;
        let file = File::create(&path)?;
        csv_table::write_rows(file, kind, shapes)?;

        log::info!("Saved {} {} shape(s) to {}", shapes.len(), kind, path.display());
        Ok(())
    }

    /// Read `<Kind>.csv` back into shapes, in row order.
    /// A missing file yields an empty list.
    pub fn load_collection_csv(&self, kind: ShapeKind) -> ShapeResult<Vec<AnyShape>> {
        let path = self.csv_path(kind);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No saved {} table at {}", kind, path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        // Parse every row before building anything so a bad field yields no shapes
        let rows = csv_table::read_rows(file, kind)?;
        let shapes = factory::create_all(kind, &rows, self.ids)?;

        log::info!("Loaded {} {} shape(s) from {}", shapes.len(), kind, path.display());
        Ok(shapes)
    }
}

fn ensure_kind(expected: ShapeKind, shapes: &[AnyShape]) -> ShapeResult<()> {
    match shapes.iter().find(|shape| shape.kind() != expected) {
        Some(shape) => Err(ShapeError::KindMismatch {
            expected: expected.name(),
            found: shape.kind().name(),
        }),
        None => Ok(()),
    }
}
