//! Expansion of a rendered window into concrete cell coordinates.

use serde::Serialize;

use crate::types::CellCoordinate;

/// One materialized row of the rendered window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexRow {
    /// Logical row index shared by every cell in `cells`.
    pub y: u32,
    pub cells: Vec<CellCoordinate>,
}

/// The dense rectangle of coordinates to render, in row-major order.
///
/// Array position matches placement in a CSS/layout grid: row `r`, column `c`
/// of `rows` is rendered at track `(r, c)` of the window.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellIndices {
    pub first_row: u32,
    pub first_column: u32,
    pub rows: Vec<IndexRow>,
}

impl CellIndices {
    /// Number of materialized rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of coordinates per row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }

    /// Total number of coordinates.
    pub fn len(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = CellCoordinate> + '_ {
        self.rows.iter().flat_map(|row| row.cells.iter().copied())
    }

    /// Whether `coord` falls inside the materialized rectangle.
    pub fn contains(&self, coord: CellCoordinate) -> bool {
        let rows = u32::try_from(self.row_count()).unwrap_or(u32::MAX);
        let cols = u32::try_from(self.column_count()).unwrap_or(u32::MAX);
        coord.y >= self.first_row
            && coord.y - self.first_row < rows
            && coord.x >= self.first_column
            && coord.x - self.first_column < cols
    }
}

/// Build `rendered_row_count` rows of `rendered_column_count` coordinates,
/// starting at (`first_column`, `first_row`).
pub fn materialize_coordinates(
    first_row: u32,
    first_column: u32,
    rendered_row_count: u32,
    rendered_column_count: u32,
) -> CellIndices {
    let column_end = first_column.saturating_add(rendered_column_count);
    let row_end = first_row.saturating_add(rendered_row_count);

    let rows = (first_row..row_end)
        .map(|y| IndexRow {
            y,
            cells: (first_column..column_end)
                .map(|x| CellCoordinate::new(x, y))
                .collect(),
        })
        .collect();

    CellIndices {
        first_row,
        first_column,
        rows,
    }
}
