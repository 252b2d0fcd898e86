use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub(crate) mod common;
mod rectangle;
mod square;

pub use rectangle::Rectangle;
pub use square::Square;

use crate::error::{ShapeError, ShapeResult};
use crate::id_generator::ShapeId;

/// Flat attribute name -> integer value mapping describing one shape
pub type Attributes = BTreeMap<String, i64>;

/// Common trait that all persisted shapes implement
pub trait Shape {
    /// Get the identifier of this shape
    fn id(&self) -> ShapeId;

    /// Get the kind tag of this shape
    fn kind(&self) -> ShapeKind;

    fn width(&self) -> i64;

    fn height(&self) -> i64;

    fn x(&self) -> i64;

    fn y(&self) -> i64;

    /// Flat attribute mapping, `id` included
    fn to_dictionary(&self) -> Attributes;

    /// Overwrite every attribute present in `attributes`, `id` included.
    ///
    /// Unknown keys and out-of-range values fail the whole update and leave
    /// the shape unchanged.
    fn update(&mut self, attributes: &Attributes) -> ShapeResult<()>;
}

/// Closed set of supported shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Square,
}

/// Everything the persistence layer needs to know about one kind
#[derive(Debug)]
pub struct KindDescriptor {
    pub kind: ShapeKind,
    /// Tag used for file names and lookup
    pub name: &'static str,
    /// Column order for CSV rows, `id` first
    pub attributes: &'static [&'static str],
    placeholder: fn() -> AnyShape,
}

fn rectangle_placeholder() -> AnyShape {
    AnyShape::Rectangle(Rectangle::unit())
}

fn square_placeholder() -> AnyShape {
    AnyShape::Square(Square::unit())
}

const RECTANGLE: KindDescriptor = KindDescriptor {
    kind: ShapeKind::Rectangle,
    name: "Rectangle",
    attributes: &["id", "width", "height", "x", "y"],
    placeholder: rectangle_placeholder,
};

const SQUARE: KindDescriptor = KindDescriptor {
    kind: ShapeKind::Square,
    name: "Square",
    attributes: &["id", "size", "x", "y"],
    placeholder: square_placeholder,
};

/// Every registered kind
pub const REGISTRY: &[&KindDescriptor] = &[&RECTANGLE, &SQUARE];

impl ShapeKind {
    pub fn descriptor(self) -> &'static KindDescriptor {
        match self {
            ShapeKind::Rectangle => &RECTANGLE,
            ShapeKind::Square => &SQUARE,
        }
    }

    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    pub fn attribute_order(self) -> &'static [&'static str] {
        self.descriptor().attributes
    }

    pub fn all() -> impl Iterator<Item = ShapeKind> {
        REGISTRY.iter().map(|d| d.kind)
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(s))
            .map(|d| d.kind)
            .ok_or_else(|| ShapeError::UnsupportedKind(s.to_owned()))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enumeration of all shape types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyShape {
    Rectangle(Rectangle),
    Square(Square),
}

impl AnyShape {
    /// Overwrite attributes positionally, in the kind's attribute order
    pub fn update_positional(&mut self, values: &[i64]) -> ShapeResult<()> {
        let kind = self.kind();
        let attributes =
            common::zip_attributes(kind, values).map_err(|max| ShapeError::TooManyValues {
                kind: kind.name(),
                max,
                found: values.len(),
            })?;
        self.update(&attributes)
    }

    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            AnyShape::Rectangle(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_square(&self) -> Option<&Square> {
        match self {
            AnyShape::Square(s) => Some(s),
            _ => None,
        }
    }
}

impl Shape for AnyShape {
    fn id(&self) -> ShapeId {
        match self {
            AnyShape::Rectangle(r) => r.id(),
            AnyShape::Square(s) => s.id(),
        }
    }

    fn kind(&self) -> ShapeKind {
        match self {
            AnyShape::Rectangle(_) => ShapeKind::Rectangle,
            AnyShape::Square(_) => ShapeKind::Square,
        }
    }

    fn width(&self) -> i64 {
        match self {
            AnyShape::Rectangle(r) => r.width(),
            AnyShape::Square(s) => s.width(),
        }
    }

    fn height(&self) -> i64 {
        match self {
            AnyShape::Rectangle(r) => r.height(),
            AnyShape::Square(s) => s.height(),
        }
    }

    fn x(&self) -> i64 {
        match self {
            AnyShape::Rectangle(r) => r.x(),
            AnyShape::Square(s) => s.x(),
        }
    }

    fn y(&self) -> i64 {
        match self {
            AnyShape::Rectangle(r) => r.y(),
            AnyShape::Square(s) => s.y(),
        }
    }

    fn to_dictionary(&self) -> Attributes {
        match self {
            AnyShape::Rectangle(r) => r.to_dictionary(),
            AnyShape::Square(s) => s.to_dictionary(),
        }
    }

    fn update(&mut self, attributes: &Attributes) -> ShapeResult<()> {
        match self {
            AnyShape::Rectangle(r) => r.update(attributes),
            AnyShape::Square(s) => s.update(attributes),
        }
    }
}

impl fmt::Display for AnyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyShape::Rectangle(r) => fmt::Display::fmt(r, f),
            AnyShape::Square(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl From<Rectangle> for AnyShape {
    fn from(rectangle: Rectangle) -> Self {
        AnyShape::Rectangle(rectangle)
    }
}

impl From<Square> for AnyShape {
    fn from(square: Square) -> Self {
        AnyShape::Square(square)
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;
    use crate::id_generator::IdAllocator;

    /// Build a shape of `kind` from a flat attribute mapping.
    ///
    /// A unit-sized placeholder is constructed first and every attribute in
    /// the mapping is then written over it. The placeholder always draws one
    /// id from `ids`; that id is kept only when the mapping has no `id`.
    pub fn create(kind: ShapeKind, attributes: &Attributes, ids: &IdAllocator) -> ShapeResult<AnyShape> {
        let shape = prepare(kind, attributes)?;
        finish(shape, attributes, ids)
    }

    /// Placeholder with `attributes` applied, before any id is drawn
    pub(crate) fn prepare(kind: ShapeKind, attributes: &Attributes) -> ShapeResult<AnyShape> {
        let mut shape = (kind.descriptor().placeholder)();
        shape.update(attributes)?;
        Ok(shape)
    }

    /// Draw the placeholder's id for a shape built by [`prepare`]
    pub(crate) fn finish(
        mut shape: AnyShape,
        attributes: &Attributes,
        ids: &IdAllocator,
    ) -> ShapeResult<AnyShape> {
        let placeholder_id = ids.next_id();
        if !attributes.contains_key("id") {
            shape.update(&Attributes::from([("id".to_owned(), placeholder_id)]))?;
        }
        Ok(shape)
    }

    /// Build one shape per mapping, drawing ids only once every mapping has
    /// been accepted
    pub fn create_all(kind: ShapeKind, rows: &[Attributes], ids: &IdAllocator) -> ShapeResult<Vec<AnyShape>> {
        let prepared = rows
            .iter()
            .map(|attributes| prepare(kind, attributes))
            .collect::<ShapeResult<Vec<_>>>()?;
        prepared
            .into_iter()
            .zip(rows)
            .map(|(shape, attributes)| finish(shape, attributes, ids))
            .collect()
    }

    /// Same as [`create`], looking the kind up by its tag
    pub fn create_from_attributes(
        kind: &str,
        attributes: &Attributes,
        ids: &IdAllocator,
    ) -> ShapeResult<AnyShape> {
        let kind: ShapeKind = kind.parse()?;
        create(kind, attributes, ids)
    }

    pub fn create_rectangle(
        width: i64,
        height: i64,
        x: i64,
        y: i64,
        id: Option<ShapeId>,
        ids: &IdAllocator,
    ) -> ShapeResult<AnyShape> {
        Rectangle::new(width, height, x, y, id, ids).map(AnyShape::Rectangle)
    }

    pub fn create_square(
        size: i64,
        x: i64,
        y: i64,
        id: Option<ShapeId>,
        ids: &IdAllocator,
    ) -> ShapeResult<AnyShape> {
        Square::new(size, x, y, id, ids).map(AnyShape::Square)
    }
}
