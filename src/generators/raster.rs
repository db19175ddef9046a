use crate::{
    error::{MazeError, Result},
    maze::{GridCell, OccupancyGrid},
};

use super::lattice::Lattice;

/// Smallest grid side that still leaves room for one lattice cell inside the border.
pub const MIN_SIDE: u16 = 3;

/// Lattice span that fits inside a grid side of `side` cells.
///
/// Odd sides lose the two border cells. Even sides lose one more, because the
/// lattice always needs an odd span.
pub fn lattice_span(side: u16) -> u16 {
    side - 2 - (1 - side % 2)
}

/// Checks that a `width x height` grid can hold at least one lattice cell.
pub fn check_dimensions(width: u16, height: u16) -> Result<()> {
    if width < MIN_SIDE || height < MIN_SIDE {
        return Err(MazeError::DimensionsTooSmall { width, height });
    }
    Ok(())
}

/// Draws a carved wall lattice into a `width x height` occupancy grid.
///
/// Lattice nodes and carved edges become passages, remaining edges and the
/// pillars between them become walls. The border is closed except for the
/// entrance at `(0, 1)` and the exit at `(width - 1, height - 2)`. For even
/// sides the extra column or row between the lattice and the border is walled
/// and a short spur is opened so the exit still joins the goal.
pub fn rasterize(walls: &Lattice, width: u16, height: u16) -> Result<OccupancyGrid> {
    check_dimensions(width, height)?;

    let expected_width = lattice_span(width);
    let expected_height = lattice_span(height);
    if walls.span_width() != expected_width || walls.span_height() != expected_height {
        return Err(MazeError::LatticeMismatch {
            width,
            height,
            expected_width,
            expected_height,
            actual_width: walls.span_width(),
            actual_height: walls.span_height(),
        });
    }

    let mut maze = OccupancyGrid::new(width, height);

    // Pillars between lattice cells
    for y in (2..height).step_by(2) {
        for x in (2..width).step_by(2) {
            maze.set((x, y), GridCell::Wall);
        }
    }

    for node in walls.nodes() {
        maze.set((node.x, node.y), GridCell::Path);
        for n in node.neighbors().iter() {
            let (nx, ny) = n.coord();
            maze.set((midpoint(node.x, nx), midpoint(node.y, ny)), GridCell::Wall);
        }
    }

    maze.close_border();
    let even_width = width % 2 == 0;
    let even_height = height % 2 == 0;
    if even_width {
        maze.fill_column(width - 2, GridCell::Wall);
    }
    if even_height {
        maze.fill_row(height - 2, GridCell::Wall);
    }

    maze.set(maze.entrance(), GridCell::Path);
    maze.set(maze.exit(), GridCell::Path);
    if even_width {
        maze.set((width - 2, height - 2), GridCell::Path);
        if even_height {
            maze.set((width - 2, height - 3), GridCell::Path);
        }
    }
    if even_height {
        maze.set((width - 2, height - 2), GridCell::Path);
    }

    Ok(maze)
}

/// Midpoint of two lattice coordinates that are at most two apart.
fn midpoint(a: u16, b: u16) -> u16 {
    a.min(b) + a.abs_diff(b) / 2
}
