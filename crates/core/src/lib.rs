//! Hexgrid is the coordinate and geometry core of a hexagonal grid widget.
//! It holds all the hex math; presentation layers (drawing cells, wiring up
//! input) are implemented elsewhere and call into this crate to figure out
//! where each cell goes, and which cell is under a given pixel.
//!
//! ```
//! use hexgrid::{Hex, Layout, LayoutConfig};
//!
//! let layout = Layout::from_config(LayoutConfig::default()).unwrap();
//! let hex = Hex::new(1, -1, 0).unwrap();
//! let center = layout.hex_to_pixel(hex);
//! // Hit-testing goes the other way
//! assert_eq!(layout.pixel_to_hex(center), Ok(hex));
//! ```
//!
//! Everything in here is a pure function over small `Copy` values, so it can
//! be called from any number of threads without synchronization.
//!
//! See the [hex] module for details on the coordinate systems, and
//! [LayoutConfig] for how the hex->pixel mapping can be customized.

mod error;
pub mod hex;
mod layout;
mod util;

pub use crate::{
    error::HexError,
    hex::{
        hex_count, DiagonalDirection, FractionalHex, Hex, HexDirection,
        HexIndexSet, HexSet, SideDirection,
    },
    layout::{Layout, LayoutConfig, Orientation, OrientationMatrix},
    util::unit::Point2,
};
