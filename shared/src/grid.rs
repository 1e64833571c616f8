use crate::error::{DimensionsError, GridError, Result};
use crate::grid::CellState::{Alive, Dead};
use rand::Rng;

/// Smallest accepted side length, in cells.
pub const MIN_SIDE: usize = 5;
/// Largest accepted side length, in cells.
pub const MAX_SIDE: usize = 50;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }

    pub fn toggled(self) -> Self {
        match self {
            Alive => Dead,
            Dead => Alive,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            Alive
        } else {
            Dead
        }
    }
}

/// Validated grid size. Both sides lie in `MIN_SIDE..=MAX_SIDE`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GridDimensions {
    columns: usize,
    rows: usize,
}

impl GridDimensions {
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        let side = MIN_SIDE..=MAX_SIDE;
        if !side.contains(&columns) || !side.contains(&rows) {
            return Err(DimensionsError::OutOfRange {
                columns: i64::try_from(columns).unwrap_or(i64::MAX),
                rows: i64::try_from(rows).unwrap_or(i64::MAX),
            }
            .into());
        }
        Ok(Self { columns, rows })
    }

    /// Parses the raw text of the two dimension inputs.
    ///
    /// Surrounding whitespace is ignored. Anything that is not an integer
    /// is rejected as [`DimensionsError::NotANumber`]; integers outside the
    /// accepted range (negative ones included) as [`DimensionsError::OutOfRange`].
    pub fn parse(columns: &str, rows: &str) -> Result<Self> {
        let (Ok(columns), Ok(rows)) = (columns.trim().parse::<i64>(), rows.trim().parse::<i64>())
        else {
            return Err(GridError::InvalidDimensions(DimensionsError::NotANumber));
        };
        match (usize::try_from(columns), usize::try_from(rows)) {
            (Ok(c), Ok(r)) => Self::new(c, r),
            _ => Err(DimensionsError::OutOfRange { columns, rows }.into()),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }
}

/// Fixed-size grid of cells stored row-major: `index = row * columns + column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<CellState>,
}

impl Grid {
    /// All-dead grid of the given size.
    pub fn new(dimensions: GridDimensions) -> Self {
        log::debug!(
            "creating {}x{} grid",
            dimensions.columns(),
            dimensions.rows()
        );
        Grid {
            dimensions,
            cells: vec![Dead; dimensions.cell_count()],
        }
    }

    pub fn create(columns: usize, rows: usize) -> Result<Self> {
        GridDimensions::new(columns, rows).map(Self::new)
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn columns(&self) -> usize {
        self.dimensions.columns
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a valid grid has at least `MIN_SIDE * MIN_SIDE` cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Index of `(row, column)`, or `None` when it lies outside the grid.
    pub fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows() && column < self.columns()).then(|| row * self.columns() + column)
    }

    /// `(row, column)` of `index`.
    pub fn position_of(&self, index: usize) -> Result<(usize, usize)> {
        self.check_index(index)?;
        Ok((index / self.columns(), index % self.columns()))
    }

    pub fn get(&self, index: usize) -> Result<CellState> {
        self.check_index(index)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, index: usize, state: CellState) -> Result<()> {
        self.check_index(index)?;
        self.cells[index] = state;
        Ok(())
    }

    /// Flips the cell and returns its new state.
    pub fn toggle(&mut self, index: usize) -> Result<CellState> {
        self.check_index(index)?;
        let cell = &mut self.cells[index];
        *cell = cell.toggled();
        Ok(*cell)
    }

    /// Swaps in a whole generation at once. On error the grid is untouched.
    pub fn replace_all(&mut self, cells: Vec<CellState>) -> Result<()> {
        if cells.len() != self.cells.len() {
            return Err(GridError::LengthMismatch {
                expected: self.cells.len(),
                actual: cells.len(),
            });
        }
        self.cells = cells;
        Ok(())
    }

    /// Fair coin per cell.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = if rng.random_bool(0.5) { Alive } else { Dead };
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Dead);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_extinct(&self) -> bool {
        self.population() == 0
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.cells.len() {
            return Err(GridError::IndexOutOfRange {
                index,
                len: self.cells.len(),
            });
        }
        Ok(())
    }
}
