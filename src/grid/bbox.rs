use std::ops::Sub;

/// Axis aligned bounding box, inclusive on both ends
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bbox<T> {
    pub min_x: T,
    pub min_y: T,
    pub max_x: T,
    pub max_y: T,
}

impl<T: Copy + PartialOrd> Bbox<T> {
    /// A box holding a single point
    pub fn point(x: T, y: T) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    /// Grow the box to include `(x, y)`. Never shrinks.
    #[inline]
    pub fn expand(&mut self, x: T, y: T) {
        if x < self.min_x {
            self.min_x = x;
        }
        if x > self.max_x {
            self.max_x = x;
        }
        if y < self.min_y {
            self.min_y = y;
        }
        if y > self.max_y {
            self.max_y = y;
        }
    }

    #[inline]
    pub fn contains(&self, x: T, y: T) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    pub fn as_tuple(&self) -> (T, T, T, T) {
        (self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl<T: Copy + Sub<Output = T>> Bbox<T> {
    pub fn width(&self) -> T {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> T {
        self.max_y - self.min_y
    }
}
