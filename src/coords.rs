use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: i32,
    pub col: i32,
}

impl GridPos {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn manhattan(self, other: GridPos) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// 4-neighborhood in a fixed order (up, down, left, right). The order
    /// matters: pathfinding tie-breaking depends on it being stable.
    pub fn neighbors4(self) -> [GridPos; 4] {
        [
            GridPos::new(self.row - 1, self.col),
            GridPos::new(self.row + 1, self.col),
            GridPos::new(self.row, self.col - 1),
            GridPos::new(self.row, self.col + 1),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRect {
    pub min: GridPos, // inclusive
    pub max: GridPos, // inclusive
}

impl RoomRect {
    pub fn new(min: GridPos, max: GridPos) -> Self {
        assert!(
            min.row <= max.row && min.col <= max.col,
            "Invalid RoomRect bounds"
        );
        Self { min, max }
    }

    pub fn contains(&self, p: GridPos) -> bool {
        p.row >= self.min.row
            && p.row <= self.max.row
            && p.col >= self.min.col
            && p.col <= self.max.col
    }

    pub fn rows(&self) -> i32 {
        self.max.row - self.min.row + 1
    }

    pub fn cols(&self) -> i32 {
        self.max.col - self.min.col + 1
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = GridPos> {
        let min = self.min;
        let max = self.max;
        (min.row..=max.row)
            .flat_map(move |row| (min.col..=max.col).map(move |col| GridPos { row, col }))
    }
}
