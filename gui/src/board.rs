use eframe::egui::{pos2, vec2, Pos2, Rect, Vec2};

/// Screen geometry of the grid: where each cell is drawn and which cell
/// lies under a point.
#[derive(Debug, Clone, Copy)]
pub struct BoardLayout {
    origin: Pos2,
    cell_size: f32,
    gap: f32,
    columns: usize,
    rows: usize,
}

impl BoardLayout {
    pub fn new(cell_size: f32, gap: f32, columns: usize, rows: usize) -> Self {
        Self {
            origin: Pos2::ZERO,
            cell_size: cell_size.max(1.0),
            gap: gap.max(0.0),
            columns,
            rows,
        }
    }

    pub fn at(self, origin: Pos2) -> Self {
        Self { origin, ..self }
    }

    fn pitch(&self) -> f32 {
        self.cell_size + self.gap
    }

    pub fn size(&self) -> Vec2 {
        vec2(
            self.pitch() * self.columns as f32 - self.gap,
            self.pitch() * self.rows as f32 - self.gap,
        )
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size())
    }

    pub fn cell_rect(&self, index: usize) -> Rect {
        let (row, column) = (index / self.columns, index % self.columns);
        let min = pos2(
            self.origin.x + column as f32 * self.pitch(),
            self.origin.y + row as f32 * self.pitch(),
        );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Cell under `pos`. Points on the gap belong to the cell before it.
    pub fn cell_at(&self, pos: Pos2) -> Option<usize> {
        if !self.rect().contains(pos) {
            return None;
        }
        let offset = pos - self.origin;
        let column = ((offset.x / self.pitch()) as usize).min(self.columns - 1);
        let row = ((offset.y / self.pitch()) as usize).min(self.rows - 1);
        Some(row * self.columns + column)
    }
}
