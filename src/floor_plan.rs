use crate::cell::{CellKind, Department};
use crate::coords::{GridPos, RoomRect};

/// Immutable hospital layout: a grid of cells plus one anchor coordinate per
/// department. Departments adjoin hallway cells directly; there is no door
/// model.
#[derive(Debug, Clone)]
pub struct FloorPlan {
    width: i32,
    height: i32,
    cells: Vec<CellKind>,
    anchors: Vec<(Department, GridPos)>,
    hub: GridPos,
}

impl FloorPlan {
    /// The fixed 20x20 hospital floor: three vertical and four horizontal
    /// hallway lines carved out of wall, rooms as rectangles in between.
    pub fn hospital() -> Self {
        let mut plan = Self {
            width: 20,
            height: 20,
            cells: vec![CellKind::Wall; 400],
            anchors: Vec::new(),
            hub: GridPos::new(2, 2),
        };

        for row in 0..20 {
            for col in [4, 8, 12] {
                plan.set_cell(GridPos::new(row, col), CellKind::Hallway);
            }
        }
        for col in 0..20 {
            for row in [4, 8, 12, 16] {
                plan.set_cell(GridPos::new(row, col), CellKind::Hallway);
            }
        }

        plan.fill_room(
            RoomRect::new(GridPos::new(0, 0), GridPos::new(3, 3)),
            CellKind::Hub,
        );
        plan.fill_room(
            RoomRect::new(GridPos::new(13, 0), GridPos::new(15, 7)),
            CellKind::Department(Department::Maternity),
        );
        plan.fill_room(
            RoomRect::new(GridPos::new(5, 5), GridPos::new(7, 7)),
            CellKind::Department(Department::Icu),
        );
        plan.fill_room(
            RoomRect::new(GridPos::new(0, 13), GridPos::new(3, 19)),
            CellKind::Department(Department::WaitingRoom),
        );
        plan.fill_room(
            RoomRect::new(GridPos::new(9, 13), GridPos::new(11, 19)),
            CellKind::Department(Department::Er),
        );
        plan.fill_room(
            RoomRect::new(GridPos::new(17, 13), GridPos::new(19, 16)),
            CellKind::Department(Department::OperatingRoom),
        );

        plan.anchors = vec![
            (Department::Maternity, GridPos::new(14, 2)),
            (Department::Icu, GridPos::new(6, 6)),
            (Department::WaitingRoom, GridPos::new(2, 16)),
            (Department::Er, GridPos::new(10, 16)),
            (Department::OperatingRoom, GridPos::new(18, 15)),
        ];
        plan
    }

    /// Uniform grid with a hub position and no departments; crate tests
    /// assemble small layouts from this.
    pub(crate) fn blank(width: i32, height: i32, fill: CellKind, hub: GridPos) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; (width * height) as usize],
            anchors: Vec::new(),
            hub,
        }
    }

    pub(crate) fn set_anchor(&mut self, dept: Department, p: GridPos) {
        self.anchors.retain(|(d, _)| *d != dept);
        self.anchors.push((dept, p));
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn hub_anchor(&self) -> GridPos {
        self.hub
    }

    pub fn anchor(&self, dept: Department) -> Option<GridPos> {
        self.anchors
            .iter()
            .find(|(d, _)| *d == dept)
            .map(|(_, p)| *p)
    }

    pub fn departments(&self) -> impl Iterator<Item = (Department, GridPos)> + '_ {
        self.anchors.iter().copied()
    }

    fn index(&self, p: GridPos) -> Option<usize> {
        if p.row < 0 || p.col < 0 || p.row >= self.height || p.col >= self.width {
            return None;
        }
        Some((p.row * self.width + p.col) as usize)
    }

    pub fn cell(&self, p: GridPos) -> Option<CellKind> {
        self.index(p).map(|i| self.cells[i])
    }

    /// False outside grid bounds or on a wall cell, true otherwise.
    pub fn is_walkable(&self, p: GridPos) -> bool {
        self.cell(p).is_some_and(|c| c.is_walkable())
    }

    pub fn is_hub_cell(&self, p: GridPos) -> bool {
        self.cell(p).is_some_and(|c| c.is_hub())
    }

    pub(crate) fn set_cell(&mut self, p: GridPos, k: CellKind) {
        if let Some(i) = self.index(p) {
            self.cells[i] = k;
        }
    }

    fn fill_room(&mut self, rect: RoomRect, k: CellKind) {
        for p in rect.iter_cells() {
            self.set_cell(p, k);
        }
    }
}
