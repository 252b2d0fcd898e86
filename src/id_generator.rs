use std::sync::atomic::{AtomicI64, Ordering};

/// Identifier carried by every shape. Explicit ids are not validated, so
/// zero, negative and duplicate values are all representable.
pub type ShapeId = i64;

// Default allocator shared by every store that isn't handed its own
static GLOBAL_ALLOCATOR: IdAllocator = IdAllocator::new();

/// Hands out ids for shapes built without an explicit one.
///
/// The counter starts at 0 and each allocation returns the incremented
/// value, so a fresh allocator yields 1, 2, 3, ... The increment and the read
/// happen in one atomic step.
#[derive(Debug, Default)]
pub struct IdAllocator {
    counter: AtomicI64,
}

impl IdAllocator {
    pub const fn new() -> Self {
        Self {
            counter: AtomicI64::new(0),
        }
    }

    /// Process-wide allocator shared across all shape kinds
    pub fn global() -> &'static IdAllocator {
        &GLOBAL_ALLOCATOR
    }

    /// Return `explicit` untouched, or allocate the next id when absent
    pub fn assign(&self, explicit: Option<ShapeId>) -> ShapeId {
        match explicit {
            Some(id) => id,
            None => self.next_id(),
        }
    }

    pub fn next_id(&self) -> ShapeId {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Number of ids allocated so far
    pub fn allocated(&self) -> i64 {
        self.counter.load(Ordering::SeqCst)
    }
}
