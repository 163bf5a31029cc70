//! Sheet layout
//!
//! Greedy shelf packing: faces are placed left-to-right in input order and
//! the row wraps once the cursor passes the sheet width. Packing quality is
//! order-sensitive and no sorting is attempted; faces land where the caller
//! sends them. Packer state is explicit and owned per run.

use shaperkit_core::geom::Bounds2;
use tracing::debug;

/// Offset that moves a loop's bounding box to its packed position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub dx: f64,
    pub dy: f64,
}

/// Greedy shelf packer.
///
/// One packer per output run. Feed bounding boxes through [`place`] in
/// order, then read the overall sheet extent from [`viewport`].
///
/// [`place`]: ShelfPacker::place
/// [`viewport`]: ShelfPacker::viewport
#[derive(Debug)]
pub struct ShelfPacker {
    spacing: f64,
    max_width: f64,
    cursor_x: f64,
    cursor_y: f64,
    row_height: f64,
    extent_x: f64,
    extent_y: f64,
}

impl ShelfPacker {
    pub fn new(max_width: f64, spacing: f64) -> Self {
        Self {
            spacing,
            max_width,
            cursor_x: spacing,
            cursor_y: spacing,
            row_height: 0.0,
            extent_x: 0.0,
            extent_y: 0.0,
        }
    }

    /// Assign the next box a position, advancing the cursor.
    ///
    /// The returned offset lands the box's minimum corner exactly on the
    /// cursor. After the cursor advances past `max_width` the next box
    /// starts a new row below the tallest box of the current one.
    pub fn place(&mut self, bounds: &Bounds2) -> Placement {
        let placement = Placement {
            dx: self.cursor_x - bounds.min_x,
            dy: self.cursor_y - bounds.min_y,
        };

        self.cursor_x += self.spacing + bounds.width();
        self.extent_x = self.extent_x.max(self.cursor_x);
        self.row_height = self.row_height.max(bounds.height());
        if self.cursor_x > self.max_width {
            self.cursor_x = self.spacing;
            self.cursor_y += self.row_height + self.spacing;
            self.row_height = 0.0;
        }
        self.extent_y = self.extent_y.max(self.cursor_y + self.row_height);

        debug!(
            dx = placement.dx,
            dy = placement.dy,
            width = bounds.width(),
            height = bounds.height(),
            "placed face"
        );
        placement
    }

    /// Overall sheet extent after the boxes placed so far.
    pub fn viewport(&self) -> Bounds2 {
        Bounds2::new(0.0, 0.0, self.extent_x, self.extent_y)
    }
}
