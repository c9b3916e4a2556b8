//! This sub-module contains the basic value types that make up the hex
//! coordinate system. See the parent module documentation for more info on
//! the coordinate system.

use crate::{
    hex::direction::{DiagonalDirection, HexDirection, SideDirection},
    HexError,
};
use derive_more::{
    Add, AddAssign, Display, Mul, MulAssign, Neg, Sub, SubAssign,
};
use serde::{Deserialize, Serialize};

/// A single cell in a hex grid, in cube coordinates. **For any hex, all three
/// components are integers and `q + r + s = 0`.** Two hexes with the same
/// components are interchangeable; there's no identity beyond position.
///
/// See module-level documentation for a description of the coordinate system.
///
/// ## Implementation
///
/// Since `q + r + s = 0` for every hex, this struct only needs to store `q`
/// and `r` and can derive `s` as needed. This also means that the invariant
/// can't be broken after construction, and the arithmetic operators
/// (`+`, `-`, unary `-`, `* i32`) all preserve it.
///
/// ## Range
///
/// [Self::new] only accepts components within `±`[Self::MAX_COORDINATE], so
/// that adding or subtracting any two such hexes fits in an `i32`.
/// [Self::length] and [Self::distance_to] are computed in `i64` and work for
/// any hex. The axial constructors (`new_qr` etc.) are `const` and skip the
/// range check, so arithmetic on hexes built that way is the caller's
/// responsibility.
///
/// ## Serialization
///
/// Hexes serialize as a `{q, r, s}` record. Deserialization checks the
/// invariant, so a bad triple fails to deserialize rather than being silently
/// normalized.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    AddAssign,
    SubAssign,
    MulAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
#[serde(try_from = "CubeCoordinates", into = "CubeCoordinates")]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    pub const ORIGIN: Self = Self::new_qr(0, 0);

    /// The largest absolute value of any component of a hex built with
    /// [Self::new]
    pub const MAX_COORDINATE: i32 = i32::MAX / 2;

    /// Construct a new hex from all three cube components. Fails if the
    /// components don't satisfy `q + r + s = 0`, or if any of them is outside
    /// `±`[Self::MAX_COORDINATE].
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        let range = -Self::MAX_COORDINATE..=Self::MAX_COORDINATE;
        let in_range = |c: i32| range.contains(&c);
        // Sum in i64 so that the check itself can't overflow
        if i64::from(q) + i64::from(r) + i64::from(s) != 0
            || !(in_range(q) && in_range(r) && in_range(s))
        {
            Err(HexError::InvalidCoordinate {
                q: q.into(),
                r: r.into(),
                s: s.into(),
            })
        } else {
            Ok(Self::new_qr(q, r))
        }
    }

    /// Construct a new hex with the given q and r (i.e. axial coordinates).
    /// Since q+r+s=0 for all hexes, we can derive s from q & r.
    pub const fn new_qr(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct a new hex with the given q and s. Since q+r+s=0 for all
    /// hexes, we can derive r from q & s.
    pub const fn new_qs(q: i32, s: i32) -> Self {
        Self::new_qr(q, -q - s)
    }

    /// Construct a new hex with the given r and s. Since q+r+s=0 for all
    /// hexes, we can derive q from r & s.
    pub const fn new_rs(r: i32, s: i32) -> Self {
        Self::new_qr(-r - s, r)
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Multiply each component by a constant. Equivalent to `self * factor`.
    pub fn scale(self, factor: i32) -> Self {
        self * factor
    }

    /// The number of steps between this hex and the origin.
    pub fn length(self) -> usize {
        axial_length(i64::from(self.q), i64::from(self.r))
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they're adjacent, 2 if there is 1 hex between them, etc.
    pub fn distance_to(self, other: Hex) -> usize {
        axial_length(
            i64::from(self.q) - i64::from(other.q),
            i64::from(self.r) - i64::from(other.r),
        )
    }

    /// Get the unit vector for the side direction with the given index. See
    /// [SideDirection] for the index ordering.
    pub fn direction(index: usize) -> Result<Hex, HexError> {
        Ok(SideDirection::from_index(index)?.to_vector())
    }

    /// Get the hex adjacent to this one in the side direction with the given
    /// index. Fails if the index isn't in `[0, 6)`. See [SideDirection] for
    /// the index ordering, or use [Self::adjacent] if you already have a
    /// typed direction.
    pub fn neighbor(self, direction: usize) -> Result<Hex, HexError> {
        Ok(self.adjacent(SideDirection::from_index(direction)?))
    }

    /// Get the diagonal neighbor of this hex in the direction with the given
    /// index. Fails if the index isn't in `[0, 6)`. See [DiagonalDirection]
    /// for the index ordering.
    pub fn diagonal_neighbor(self, direction: usize) -> Result<Hex, HexError> {
        Ok(self.diagonal(DiagonalDirection::from_index(direction)?))
    }

    /// Get the hex that shares the given side with this one
    pub fn adjacent(self, direction: SideDirection) -> Hex {
        self + direction.to_vector()
    }

    /// Get the hex two steps away that sits beyond the given vertex of this
    /// one
    pub fn diagonal(self, direction: DiagonalDirection) -> Hex {
        self + direction.to_vector()
    }

    /// Get an iterator of all the hexes directly adjacent to this one, in
    /// [SideDirection] order. The iterator will always contain exactly 6
    /// values.
    pub fn adjacents(self) -> impl Iterator<Item = Hex> {
        SideDirection::COUNTER_CLOCKWISE
            .iter()
            .map(move |dir| self.adjacent(*dir))
    }

    /// Rotate this hex 60° around the origin, counter-clockwise in
    /// [SideDirection] order (e.g. direction 0 becomes direction 1)
    pub fn rotate_left(self) -> Hex {
        Self::new_qr(-self.s(), -self.q)
    }

    /// Rotate this hex 60° around the origin, clockwise in [SideDirection]
    /// order (e.g. direction 1 becomes direction 0)
    pub fn rotate_right(self) -> Hex {
        Self::new_qr(-self.r, -self.s())
    }
}

/// Length of an axial vector. i64 leaves headroom for any pair of `i32`
/// components, including the derived `s`.
///
/// https://www.redblobgames.com/grids/hexagons/#distances
fn axial_length(q: i64, r: i64) -> usize {
    ((q.abs() + r.abs() + (q + r).abs()) / 2) as usize
}

/// The serialized form of a [Hex]. Carries all three components so that the
/// output is unambiguous to readers that don't know about the q+r+s=0 trick.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
struct CubeCoordinates {
    q: i32,
    r: i32,
    s: i32,
}

impl From<Hex> for CubeCoordinates {
    fn from(hex: Hex) -> Self {
        Self {
            q: hex.q(),
            r: hex.r(),
            s: hex.s(),
        }
    }
}

impl TryFrom<CubeCoordinates> for Hex {
    type Error = HexError;

    fn try_from(value: CubeCoordinates) -> Result<Self, Self::Error> {
        Self::new(value.q, value.r, value.s)
    }
}

/// A point in cube space that isn't necessarily the center of a cell. These
/// come out of pixel->hex conversion and interpolation, and are turned into
/// a concrete [Hex] with [Self::round].
///
/// Unlike [Hex], all three components are stored, because floating point
/// math means `q + r + s` only _approximately_ equals zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Display)]
#[display(fmt = "({}, {}, {})", q, r, s)]
pub struct FractionalHex {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalHex {
    /// The maximum amount that `q + r + s` can differ from zero
    pub const TOLERANCE: f64 = 1e-6;

    /// Construct a new fractional hex. Fails if `q + r + s` isn't within
    /// [Self::TOLERANCE] of zero.
    pub fn new(q: f64, r: f64, s: f64) -> Result<Self, HexError> {
        // This also rejects NaN, because NaN comparisons are always false
        if (q + r + s).abs() <= Self::TOLERANCE {
            Ok(Self { q, r, s })
        } else {
            Err(HexError::InvalidCoordinate { q, r, s })
        }
    }

    /// Construct a fractional hex from axial coordinates, deriving `s`
    pub fn from_axial(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    /// Linearly interpolate between this point and another. `t = 0.0` gives
    /// `self`, `t = 1.0` gives `other`. The output stays on the `q+r+s=0`
    /// plane (give or take float error) because both inputs are on it.
    pub fn lerp(self, other: FractionalHex, t: f64) -> FractionalHex {
        Self {
            q: self.q + (other.q - self.q) * t,
            r: self.r + (other.r - self.r) * t,
            s: self.s + (other.s - self.s) * t,
        }
    }

    /// Translate this point by `(ε, 2ε, -3ε)`. The offset sums to zero, so
    /// the result remains on the plane. No two of its components are equal,
    /// so it isn't parallel to any hex edge, and a point sitting on an edge
    /// gets pushed to one side of it.
    pub(crate) fn nudge(self, epsilon: f64) -> FractionalHex {
        Self {
            q: self.q + epsilon,
            r: self.r + 2.0 * epsilon,
            s: self.s - 3.0 * epsilon,
        }
    }

    /// Round to the hex that contains this point.
    ///
    /// Each component is rounded to the nearest integer independently
    /// (halfway cases round away from zero). That can break `q + r + s = 0`,
    /// so the component that moved the furthest while rounding gets thrown
    /// out and recomputed from the other two.
    ///
    /// ## Ties
    ///
    /// `q` is only recomputed if its rounding error is _strictly_ the
    /// largest. Otherwise `r` is recomputed if its error is strictly larger
    /// than `s`'s, and otherwise `s` is. So when errors are tied, the later
    /// component is the one recomputed. E.g. `(0.5, 0.5, -1.0)` rounds to
    /// `(1, 0, -1)`.
    ///
    /// ## Errors
    ///
    /// Fails with [HexError::InvalidCoordinate] if any component is NaN or
    /// infinite, or rounds to something outside `±`[Hex::MAX_COORDINATE].
    pub fn round(self) -> Result<Hex, HexError> {
        let q = self.q.round();
        let r = self.r.round();
        let s = self.s.round();

        let max = f64::from(Hex::MAX_COORDINATE);
        // Comparisons with NaN are false, so this catches NaN too
        if !(q.abs() <= max && r.abs() <= max && s.abs() <= max) {
            return Err(HexError::InvalidCoordinate {
                q: self.q,
                r: self.r,
                s: self.s,
            });
        }

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        // All three are in range now, so these casts are exact and the
        // recomputed component can't overflow
        let (q, r, s) = (q as i32, r as i32, s as i32);
        if q_diff > r_diff && q_diff > s_diff {
            Hex::new(-r - s, r, s)
        } else if r_diff > s_diff {
            Hex::new(q, -q - s, s)
        } else {
            Hex::new(q, r, -q - r)
        }
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        // Derive s in f64, since -q-r can overflow for unchecked hexes
        Self::from_axial(hex.q.into(), hex.r.into())
    }
}
