/**
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* Edges are hard boundaries: cells beyond them are always dead.
*/
pub mod engine;
pub mod error;
pub mod grid;
pub mod paint;
pub mod scheduler;

pub use error::{DimensionsError, GridError, Result};
pub use grid::{CellState, Grid, GridDimensions};
pub use paint::{Brush, PaintState};
pub use scheduler::{Scheduler, TICK_INTERVAL};
