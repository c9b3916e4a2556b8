//! This module holds the hex coordinate types and the algorithms that operate
//! on them.
//!
//! ## Coordinate Systems
//!
//! There are two coordinate systems in play:
//!
//! ### Hex Coordinates
//!
//! Hex coordinates define space within the grid itself. The system we use is
//! the [cube coordinate system defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! Each coordinate has three components (`q`, `r`, and `s`). **For any cell,
//! all three components are integers and `q + r + s = 0`.** Even though the
//! grid is two-dimensional, the third component makes the math around
//! hexagonal grids much simpler and more symmetric: distance, rotation, and
//! rounding all treat the three axes identically. The two-component `(q, r)`
//! projection is called axial coordinates; `s` can always be derived from it.
//!
//! Points in between cell centers (e.g. the result of converting an arbitrary
//! pixel) are represented with [FractionalHex], which is rounded to a [Hex]
//! to find the containing cell.
//!
//! ### Pixel Coordinates
//!
//! Pixel coordinates ([Point2](crate::Point2)) are used strictly for drawing
//! the grid and for hit-testing. The mapping between the two systems is
//! defined by a [Layout](crate::Layout), which picks an orientation (pointy-
//! or flat-topped), a cell size, and the pixel position of the origin hex.
//!
//! In pixel space, right is `+x` and **down is `+y`**. With pointy-top
//! tiles, `+q` points east and `-r` points up-and-to-the-right:
//!
//! ```text
//!           NW     NE
//!        (0,-1,1) (1,-1,0)
//!   W                     E
//! (-1,0,1)   (0,0,0)   (1,0,-1)
//!        (-1,1,0) (0,1,-1)
//!           SW     SE
//! ```

mod data_structure;
mod direction;
mod line;
mod unit;

pub use self::{data_structure::*, direction::*, unit::*};
