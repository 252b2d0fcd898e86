use std::fmt;

use super::{Attributes, Shape, ShapeKind, common};
use crate::error::{ShapeError, ShapeResult};
use crate::id_generator::{IdAllocator, ShapeId};

/// Axis-aligned rectangle anchored at (x, y)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    id: ShapeId,
    width: i64,
    height: i64,
    x: i64,
    y: i64,
}

impl Rectangle {
    /// Create a rectangle, drawing an id from `ids` when `id` is `None`
    pub fn new(
        width: i64,
        height: i64,
        x: i64,
        y: i64,
        id: Option<ShapeId>,
        ids: &IdAllocator,
    ) -> ShapeResult<Self> {
        let width = common::positive("width", width)?;
        let height = common::positive("height", height)?;
        let x = common::non_negative("x", x)?;
        let y = common::non_negative("y", y)?;
        Ok(Self {
            id: ids.assign(id),
            width,
            height,
            x,
            y,
        })
    }

    /// 1x1 rectangle at the origin, overwritten when rebuilding from attributes
    pub(crate) fn unit() -> Self {
        Self {
            id: 0,
            width: 1,
            height: 1,
            x: 0,
            y: 0,
        }
    }

    pub fn area(&self) -> i64 {
        self.width.saturating_mul(self.height)
    }

    pub fn set_width(&mut self, width: i64) -> ShapeResult<()> {
        self.width = common::positive("width", width)?;
        Ok(())
    }

    pub fn set_height(&mut self, height: i64) -> ShapeResult<()> {
        self.height = common::positive("height", height)?;
        Ok(())
    }

    pub fn set_x(&mut self, x: i64) -> ShapeResult<()> {
        self.x = common::non_negative("x", x)?;
        Ok(())
    }

    pub fn set_y(&mut self, y: i64) -> ShapeResult<()> {
        self.y = common::non_negative("y", y)?;
        Ok(())
    }
}

impl Shape for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn width(&self) -> i64 {
        self.width
    }

    fn height(&self) -> i64 {
        self.height
    }

    fn x(&self) -> i64 {
        self.x
    }

    fn y(&self) -> i64 {
        self.y
    }

    fn to_dictionary(&self) -> Attributes {
        Attributes::from([
            ("id".to_owned(), self.id),
            ("width".to_owned(), self.width),
            ("height".to_owned(), self.height),
            ("x".to_owned(), self.x),
            ("y".to_owned(), self.y),
        ])
    }

    fn update(&mut self, attributes: &Attributes) -> ShapeResult<()> {
        // Work on a copy so a rejected value leaves `self` untouched
        let mut next = self.clone();
        for (name, &value) in attributes {
            match name.as_str() {
                "id" => next.id = value,
                "width" => next.set_width(value)?,
                "height" => next.set_height(value)?,
                "x" => next.set_x(value)?,
                "y" => next.set_y(value)?,
                _ => {
                    return Err(ShapeError::UnknownAttribute {
                        kind: ShapeKind::Rectangle.name(),
                        attribute: name.clone(),
                    });
                }
            }
        }
        *self = next;
        Ok(())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Rectangle] ({}) {}/{} - {}/{}",
            self.id, self.x, self.y, self.width, self.height
        )
    }
}
