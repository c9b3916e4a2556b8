//! Conversion between hex space and pixel space. See the [crate::hex] module
//! docs for a description of both coordinate systems.

mod config;

pub use self::config::LayoutConfig;

use crate::{FractionalHex, Hex, HexError, Point2};
use log::debug;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use strum::{Display, EnumIter, EnumString};

/// sqrt(3), which shows up all over hexagon geometry
const SQRT_3: f64 = 1.7320508075688772;

/// The rotation of every hexagon in a grid. This is a closed set, so each
/// variant just points at a constant [OrientationMatrix].
///
/// See https://www.redblobgames.com/grids/hexagons/#basics
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    /// A vertex points straight up. Rows of hexes line up horizontally.
    Pointy,
    /// A side is flat across the top. Columns of hexes line up vertically.
    Flat,
}

impl Orientation {
    /// Get the transform constants for this orientation
    pub const fn matrix(self) -> &'static OrientationMatrix {
        match self {
            Self::Pointy => &OrientationMatrix::POINTY,
            Self::Flat => &OrientationMatrix::FLAT,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::Pointy
    }
}

/// The constants that define how an [Orientation] maps between hex space and
/// pixel space, for hexes with a size of 1.
///
/// - `f0..f3` are the forward matrix (axial `(q, r)` -> pixel), row-major
/// - `b0..b3` are the inverse of the forward matrix (pixel -> axial)
/// - `start_angle` is the angle of the first corner, in multiples of 60°
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrientationMatrix {
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    pub start_angle: f64,
}

impl OrientationMatrix {
    pub const POINTY: Self = Self {
        f0: SQRT_3,
        f1: SQRT_3 / 2.0,
        f2: 0.0,
        f3: 3.0 / 2.0,
        b0: SQRT_3 / 3.0,
        b1: -1.0 / 3.0,
        b2: 0.0,
        b3: 2.0 / 3.0,
        start_angle: 0.5,
    };

    pub const FLAT: Self = Self {
        f0: 3.0 / 2.0,
        f1: 0.0,
        f2: SQRT_3 / 2.0,
        f3: SQRT_3,
        b0: 2.0 / 3.0,
        b1: 0.0,
        b2: -1.0 / 3.0,
        b3: SQRT_3 / 3.0,
        start_angle: 0.0,
    };

    /// The hex->pixel transform, as a matrix
    pub fn forward(&self) -> Matrix2<f64> {
        Matrix2::new(self.f0, self.f1, self.f2, self.f3)
    }

    /// The pixel->hex transform, as a matrix. This is the inverse of
    /// [Self::forward].
    pub fn inverse(&self) -> Matrix2<f64> {
        Matrix2::new(self.b0, self.b1, self.b2, self.b3)
    }
}

/// Defines how a hex grid is positioned in pixel space. A layout is
/// immutable once created; it's just a bag of constants that gets passed by
/// reference to each conversion. Layouts are very cheap to create, so if you
/// need different settings, just create a new one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    orientation: Orientation,
    /// Distance from the center of a hex to any of its vertices, in pixels.
    /// This can differ between axes to squash/stretch the hexes.
    size: Point2,
    /// Pixel position of the center of the origin hex
    origin: Point2,
    /// Scaling factor applied to the distance between hex centers, but
    /// **not** to the hexes themselves. Anything above 1.0 leaves a gap
    /// between adjacent hexes.
    spacing: f64,
}

impl Layout {
    /// Create a new layout with a spacing of 1.0 (no gaps). Fails if either
    /// size component isn't a finite positive number, or the origin isn't
    /// finite.
    pub fn new(
        orientation: Orientation,
        size: Point2,
        origin: Point2,
    ) -> Result<Self, HexError> {
        if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(HexError::InvalidLayout {
                reason: format!("size must be positive, but was {}", size),
            });
        }
        if !origin.is_finite() {
            return Err(HexError::InvalidLayout {
                reason: format!("origin must be finite, but was {}", origin),
            });
        }

        debug!(
            "Created {} layout with size {} and origin {}",
            orientation, size, origin
        );
        Ok(Self {
            orientation,
            size,
            origin,
            spacing: 1.0,
        })
    }

    /// Copy this layout with a different spacing. Fails if the spacing isn't
    /// a finite positive number.
    pub fn with_spacing(self, spacing: f64) -> Result<Self, HexError> {
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(HexError::InvalidLayout {
                reason: format!("spacing must be positive, but was {}", spacing),
            });
        }
        Ok(Self { spacing, ..self })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn size(&self) -> Point2 {
        self.size
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Get the pixel position of the center of a hex. This is pure float math
    /// with no rounding, so the same inputs always give the same output.
    ///
    /// ```
    /// use hexgrid::{Hex, Layout, Orientation, Point2};
    ///
    /// let layout = Layout::new(
    ///     Orientation::Flat,
    ///     Point2::new(10.0, 10.0),
    ///     Point2::new(100.0, 50.0),
    /// )
    /// .unwrap();
    /// let pixel = layout.hex_to_pixel(Hex::new_qr(2, 0));
    /// assert_eq!(pixel, Point2::new(130.0, 50.0 + 10.0 * 3f64.sqrt()));
    /// ```
    pub fn hex_to_pixel(&self, hex: Hex) -> Point2 {
        let axial = Vector2::new(f64::from(hex.q()), f64::from(hex.r()));
        let unit = self.orientation.matrix().forward() * axial;
        Point2::new(
            unit.x * self.size.x * self.spacing + self.origin.x,
            unit.y * self.size.y * self.spacing + self.origin.y,
        )
    }

    /// Get the exact (unrounded) position in hex space of a pixel. Use
    /// [Self::pixel_to_hex] to find the hex that contains the pixel.
    pub fn pixel_to_fractional_hex(&self, point: Point2) -> FractionalHex {
        let unit = Vector2::new(
            (point.x - self.origin.x) / (self.size.x * self.spacing),
            (point.y - self.origin.y) / (self.size.y * self.spacing),
        );
        let axial = self.orientation.matrix().inverse() * unit;
        FractionalHex::from_axial(axial.x, axial.y)
    }

    /// Get the hex that contains a pixel. This is lossy: a pixel that sits
    /// right on the boundary between two hexes could go either way (see
    /// [FractionalHex::round] for how ties are broken). Every pixel strictly
    /// inside a hex maps back to that hex though, including its center.
    ///
    /// Fails if the point is so far from the origin that the hex would be
    /// outside `±`[Hex::MAX_COORDINATE], or if either component is NaN.
    pub fn pixel_to_hex(&self, point: Point2) -> Result<Hex, HexError> {
        self.pixel_to_fractional_hex(point).round()
    }

    /// Get the offsets of a hex's 6 vertices from its center, in pixels. Corner
    /// `i` sits at an angle of `60° * (start_angle + i)` from the `+x` axis.
    /// Since `+y` points down, that means the corners go clockwise on screen.
    ///
    /// When spacing is above 1.0, corners stay put while centers spread out,
    /// which is what leaves gaps between the hexes.
    pub fn corner_offsets(&self) -> [Point2; 6] {
        let start_angle = self.orientation.matrix().start_angle;
        let mut corners = [Point2::ORIGIN; 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            let angle = 2.0 * PI * (start_angle + i as f64) / 6.0;
            *corner =
                Point2::new(self.size.x * angle.cos(), self.size.y * angle.sin());
        }
        corners
    }

    /// Get the pixel positions of a hex's 6 vertices. See
    /// [Self::corner_offsets] for the ordering.
    pub fn polygon_corners(&self, hex: Hex) -> [Point2; 6] {
        let center = self.hex_to_pixel(hex);
        let mut corners = self.corner_offsets();
        for corner in corners.iter_mut() {
            *corner += center;
        }
        corners
    }
}

/// Pointy-topped 10x10 hexes, with the origin hex centered on the pixel
/// origin and no gaps. This is also what [LayoutConfig::default] gives.
impl Default for Layout {
    fn default() -> Self {
        Self {
            orientation: Orientation::Pointy,
            size: Point2::new(10.0, 10.0),
            origin: Point2::ORIGIN,
            spacing: 1.0,
        }
    }
}
