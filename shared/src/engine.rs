use crate::error::Result;
use crate::grid::CellState::{self, Alive, Dead};
use crate::grid::Grid;

const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count the number of alive neighbors for a cell.
///
/// Rows are bounded by `rows` and columns by `columns`; anything past an
/// edge counts as dead.
pub fn count_alive_neighbors(grid: &Grid, index: usize) -> Result<u8> {
    let (row, column) = grid.position_of(index)?;
    Ok(alive_neighbors(grid, row, column))
}

/// The Game of Life rule for a single cell.
pub fn next_state(cell: CellState, alive_neighbors: u8) -> CellState {
    match (cell, alive_neighbors) {
        (Alive, 2..=3) => Alive, // Survives
        (Dead, 3) => Alive,      // Becomes alive
        _ => Dead,               // Dies or remains dead
    }
}

/// Next generation of `grid`, computed entirely from the current one.
pub fn compute_next_generation(grid: &Grid) -> Vec<CellState> {
    let columns = grid.columns();
    grid.cells()
        .iter()
        .enumerate()
        .map(|(index, &cell)| {
            let neighbors = alive_neighbors(grid, index / columns, index % columns);
            next_state(cell, neighbors)
        })
        .collect()
}

/// Advance the grid by one generation. Returns whether any cell changed.
pub fn step(grid: &mut Grid) -> Result<bool> {
    let next = compute_next_generation(grid);
    let changed = next.as_slice() != grid.cells();
    grid.replace_all(next)?;
    Ok(changed)
}

fn alive_neighbors(grid: &Grid, row: usize, column: usize) -> u8 {
    let cells = grid.cells();
    OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = column.checked_add_signed(dc)?;
            grid.index_of(r, c)
        })
        .filter(|&neighbor| cells[neighbor].is_alive())
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridError;

    fn grid_with(columns: usize, rows: usize, alive: &[usize]) -> Grid {
        let mut grid = Grid::create(columns, rows).unwrap();
        for &index in alive {
            grid.set(index, Alive).unwrap();
        }
        grid
    }

    fn alive_indices(cells: &[CellState]) -> Vec<usize> {
        cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn rule_table() {
        for n in 0..=8 {
            let survives = n == 2 || n == 3;
            assert_eq!(next_state(Alive, n), CellState::from(survives), "alive, {n}");
            assert_eq!(next_state(Dead, n), CellState::from(n == 3), "dead, {n}");
        }
    }

    #[test]
    fn a_cell_never_counts_itself() {
        let grid = grid_with(5, 5, &[12]);
        assert_eq!(count_alive_neighbors(&grid, 12), Ok(0));
        assert_eq!(count_alive_neighbors(&grid, 6), Ok(1));
        assert_eq!(count_alive_neighbors(&grid, 0), Ok(0));
    }

    #[test]
    fn wide_grid_bounds_rows_by_rows() {
        // 10 columns, 5 rows, everything alive.
        let mut grid = Grid::create(10, 5).unwrap();
        grid.replace_all(vec![Alive; 50]).unwrap();

        let bottom_right = grid.index_of(4, 9).unwrap();
        assert_eq!(count_alive_neighbors(&grid, bottom_right), Ok(3));
        let bottom_edge = grid.index_of(4, 5).unwrap();
        assert_eq!(count_alive_neighbors(&grid, bottom_edge), Ok(5));
        let interior = grid.index_of(2, 5).unwrap();
        assert_eq!(count_alive_neighbors(&grid, interior), Ok(8));
    }

    #[test]
    fn tall_grid_bounds_columns_by_columns() {
        // 5 columns, 10 rows, everything alive.
        let mut grid = Grid::create(5, 10).unwrap();
        grid.replace_all(vec![Alive; 50]).unwrap();

        let deep_row = grid.index_of(9, 2).unwrap();
        assert_eq!(count_alive_neighbors(&grid, deep_row), Ok(5));
        let right_edge = grid.index_of(7, 4).unwrap();
        assert_eq!(count_alive_neighbors(&grid, right_edge), Ok(5));
        let top_left = grid.index_of(0, 0).unwrap();
        assert_eq!(count_alive_neighbors(&grid, top_left), Ok(3));
    }

    #[test]
    fn edges_do_not_wrap() {
        // Alive cells on the left edge must not be seen from the right edge.
        let grid = grid_with(5, 5, &[5, 10, 15]);
        assert_eq!(count_alive_neighbors(&grid, 14), Ok(0));
        assert_eq!(count_alive_neighbors(&grid, 11), Ok(3));
    }

    #[test]
    fn counting_outside_the_grid_is_an_error() {
        let grid = Grid::create(5, 5).unwrap();
        assert_eq!(
            count_alive_neighbors(&grid, 25),
            Err(GridError::IndexOutOfRange { index: 25, len: 25 })
        );
    }

    #[test]
    fn dead_grid_stays_dead() {
        let grid = Grid::create(5, 5).unwrap();
        let next = compute_next_generation(&grid);
        assert_eq!(next.len(), 25);
        assert!(next.iter().all(|cell| *cell == Dead));
    }

    #[test]
    fn block_neighbor_counts() {
        // Block on rows 1..=2, columns 1..=2: indices 5, 6, 9, 10 of a 4x4
        // area, placed in the top-left corner of a 5x5 grid.
        let grid = grid_with(5, 5, &[6, 7, 11, 12]);
        #[rustfmt::skip]
        let expected: [[u8; 4]; 4] = [
            [1, 2, 2, 1],
            [2, 3, 3, 2],
            [2, 3, 3, 2],
            [1, 2, 2, 1],
        ];
        for (row, counts) in expected.iter().enumerate() {
            for (column, &count) in counts.iter().enumerate() {
                let index = grid.index_of(row, column).unwrap();
                assert_eq!(
                    count_alive_neighbors(&grid, index),
                    Ok(count),
                    "({row}, {column})"
                );
            }
        }
        assert_eq!(compute_next_generation(&grid), grid.cells());
    }

    #[test]
    fn next_generation_reads_only_the_snapshot() {
        // A vertical blinker: updating in place would corrupt the result.
        let grid = grid_with(5, 5, &[7, 12, 17]);
        let next = compute_next_generation(&grid);
        assert_eq!(alive_indices(&next), vec![11, 12, 13]);
        assert_eq!(alive_indices(grid.cells()), vec![7, 12, 17]);
    }

    #[test]
    fn step_reports_changes() {
        let mut blinker = grid_with(5, 5, &[11, 12, 13]);
        assert_eq!(step(&mut blinker), Ok(true));
        assert_eq!(alive_indices(blinker.cells()), vec![7, 12, 17]);

        let mut block = grid_with(5, 5, &[6, 7, 11, 12]);
        assert_eq!(step(&mut block), Ok(false));
    }
}
