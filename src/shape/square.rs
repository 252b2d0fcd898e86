use std::fmt;

use super::{Attributes, Shape, ShapeKind, common};
use crate::error::{ShapeError, ShapeResult};
use crate::id_generator::{IdAllocator, ShapeId};

/// Square anchored at (x, y); width and height are both `size`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    id: ShapeId,
    size: i64,
    x: i64,
    y: i64,
}

impl Square {
    pub fn new(size: i64, x: i64, y: i64, id: Option<ShapeId>, ids: &IdAllocator) -> ShapeResult<Self> {
        let size = common::positive("size", size)?;
        let x = common::non_negative("x", x)?;
        let y = common::non_negative("y", y)?;
        Ok(Self {
            id: ids.assign(id),
            size,
            x,
            y,
        })
    }

    pub(crate) fn unit() -> Self {
        Self { id: 0, size: 1, x: 0, y: 0 }
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn area(&self) -> i64 {
        self.size.saturating_mul(self.size)
    }

    pub fn set_size(&mut self, size: i64) -> ShapeResult<()> {
        self.size = common::positive("size", size)?;
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

impl Shape for Square {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Square
    }

    fn width(&self) -> i64 {
        self.size
    }

    fn height(&self) -> i64 {
        self.size
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
            ("size".to_owned(), self.size),
            ("x".to_owned(), self.x),
            ("y".to_owned(), self.y),
        ])
    }

    fn update(&mut self, attributes: &Attributes) -> ShapeResult<()> {
        let mut next = self.clone();
        for (name, &value) in attributes {
            match name.as_str() {
                "id" => next.id = value,
                "size" => next.set_size(value)?,
                "x" => next.set_x(value)?,
                "y" => next.set_y(value)?,
                _ => {
                    return Err(ShapeError::UnknownAttribute {
                        kind: ShapeKind::Square.name(),
                        attribute: name.clone(),
                    });
                }
            }
        }
        *self = next;
        Ok(())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Square] ({}) {}/{} - {}", self.id, self.x, self.y, self.size)
    }
}
