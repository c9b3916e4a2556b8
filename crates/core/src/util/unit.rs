use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};

/// A point in 2D pixel space. Hex coordinates are converted into these (and
/// back) via a [Layout](crate::Layout). Pixel positions aren't useful for
/// much besides drawing and hit-testing, so stick to [Hex](crate::Hex) for
/// stuff like distances, pathfinding, etc.
///
/// ## 2D Coordinates
///
/// The axes follow the usual screen convention: right is positive x, **down
/// is positive y**. Where the hex `(0, 0, 0)` ends up is determined by the
/// layout's origin.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Are both components finite (not NaN or infinite)?
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
