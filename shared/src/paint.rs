use crate::error::Result;
use crate::grid::Grid;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum PaintState {
    #[default]
    Idle,
    Painting,
}

/// Click and drag painting.
///
/// Pressing toggles the cell under the pointer and starts a stroke; while
/// the stroke lasts, every newly entered cell is toggled once. Releasing the
/// button or leaving the grid ends the stroke. A press can only land on a
/// cell; hovered cells are `Option<usize>`, `None` meaning the pointer is
/// not over the grid.
#[derive(Debug, Default)]
pub struct Brush {
    state: PaintState,
    last_cell: Option<usize>,
}

impl Brush {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    /// Starts a stroke on `cell`. A bad index leaves the brush idle.
    pub fn press(&mut self, cell: usize, grid: &mut Grid) -> Result<()> {
        grid.toggle(cell)?;
        self.state = PaintState::Painting;
        self.last_cell = Some(cell);
        Ok(())
    }

    pub fn hover(&mut self, cell: Option<usize>, grid: &mut Grid) -> Result<()> {
        if self.state == PaintState::Painting {
            self.paint(cell, grid)?;
        }
        Ok(())
    }

    pub fn release(&mut self) {
        self.state = PaintState::Idle;
        self.last_cell = None;
    }

    /// The pointer left the grid. Same as a release.
    pub fn leave(&mut self) {
        self.release();
    }

    fn paint(&mut self, cell: Option<usize>, grid: &mut Grid) -> Result<()> {
        if cell == self.last_cell {
            return Ok(());
        }
        self.last_cell = cell;
        if let Some(index) = cell {
            grid.toggle(index)?;
        }
        Ok(())
    }
}
