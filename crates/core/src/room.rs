//! Room rectangles placed by the generator.

/// An axis-aligned room rectangle with inclusive corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Room {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Room {
    /// Room whose top-left cell is (x, y), spanning `width` x `height` cells.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width - 1,
            y2: y + height - 1,
        }
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1 + 1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1 + 1
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Closed-interval overlap test; rooms sharing an edge cell intersect.
    pub fn intersects(&self, other: &Room) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Strictly inside the rectangle, excluding its own border row/column.
    pub fn interior_contains(&self, x: i32, y: i32) -> bool {
        x > self.x1 && x < self.x2 && y > self.y1 && y < self.y2
    }

    /// Cells one step outside each edge, in door-scan order:
    /// top and bottom for every column, then left and right for every row.
    pub fn perimeter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let horizontal =
            (self.x1..=self.x2).flat_map(move |x| [(x, self.y1 - 1), (x, self.y2 + 1)]);
        let vertical =
            (self.y1..=self.y2).flat_map(move |y| [(self.x1 - 1, y), (self.x2 + 1, y)]);
        horizontal.chain(vertical)
    }
}
