use crate::{FractionalHex, Hex, HexError};
use log::trace;

impl Hex {
    /// Scale of the offset applied to both endpoints of a line before
    /// interpolating (see [FractionalHex::nudge]). It moves sampled points
    /// that land on a hex edge to one side of it, so rounding doesn't fall
    /// back on its tie-break rule.
    const LINE_NUDGE: f64 = 1e-6;

    /// Get the sequence of hexes that approximates a straight line from this
    /// hex to `other`. Both endpoints are included, and the hexes are ordered
    /// from `self` to `other`. The output always contains exactly
    /// `self.distance_to(other) + 1` hexes, and each one is adjacent to the
    /// one before it.
    ///
    /// Fails only if a sampled point rounds to something outside
    /// `±`[Hex::MAX_COORDINATE], which can't happen when both endpoints came
    /// from [Hex::new].
    ///
    /// https://www.redblobgames.com/grids/hexagons/#line-drawing
    pub fn line_draw(self, other: Hex) -> Result<Vec<Hex>, HexError> {
        let distance = self.distance_to(other);
        let start = FractionalHex::from(self).nudge(Self::LINE_NUDGE);
        let end = FractionalHex::from(other).nudge(Self::LINE_NUDGE);
        // Avoid dividing by zero when the endpoints are the same. The loop
        // below will still run exactly once in that case.
        let step = 1.0 / distance.max(1) as f64;

        let line = (0..=distance)
            .map(|i| start.lerp(end, step * i as f64).round())
            .collect::<Result<Vec<Hex>, HexError>>()?;
        trace!("Line from {} to {} has {} hexes", self, other, line.len());
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_draw() {
        assert_eq!(
            Hex::ORIGIN.line_draw(Hex::new_qr(1, -5)).unwrap(),
            vec![
                Hex::new_qr(0, 0),
                Hex::new_qr(0, -1),
                Hex::new_qr(0, -2),
                Hex::new_qr(1, -3),
                Hex::new_qr(1, -4),
                Hex::new_qr(1, -5),
            ]
        );
    }

    #[test]
    fn test_line_draw_diagonal() {
        // Every other sample sits exactly on the edge between two hexes that
        // differ by (1, -1, 0). The nudge decides which side wins.
        assert_eq!(
            Hex::ORIGIN.line_draw(Hex::new_qr(-2, -2)).unwrap(),
            vec![
                Hex::new(0, 0, 0).unwrap(),
                Hex::new(-1, 0, 1).unwrap(),
                Hex::new(-1, -1, 2).unwrap(),
                Hex::new(-2, -1, 3).unwrap(),
                Hex::new(-2, -2, 4).unwrap(),
            ]
        );
        assert_eq!(
            Hex::ORIGIN.line_draw(Hex::new_qr(2, 2)).unwrap(),
            vec![
                Hex::new(0, 0, 0).unwrap(),
                Hex::new(0, 1, -1).unwrap(),
                Hex::new(1, 1, -2).unwrap(),
                Hex::new(1, 2, -3).unwrap(),
                Hex::new(2, 2, -4).unwrap(),
            ]
        );
    }

    #[test]
    fn test_line_draw_extremes() {
        let max = Hex::MAX_COORDINATE;
        let a = Hex::new(max, -max, 0).unwrap();
        let b = Hex::new(max - 3, -max, 3).unwrap();
        let line = a.line_draw(b).unwrap();
        assert_eq!(line.len(), 4);
        assert_eq!(line.first(), Some(&a));
        assert_eq!(line.last(), Some(&b));

        // Out of range endpoints can only come from the axial constructors
        assert!(Hex::new_qr(i32::MAX, 0)
            .line_draw(Hex::new_qr(i32::MAX - 1, 0))
            .is_err());
    }

    #[test]
    fn test_line_draw_single() {
        let hex = Hex::new_qr(4, -9);
        assert_eq!(hex.line_draw(hex).unwrap(), vec![hex]);
    }

    #[test]
    fn test_line_draw_adjacent() {
        let a = Hex::new_qr(-2, 3);
        let b = Hex::new_qr(-1, 3);
        assert_eq!(a.line_draw(b).unwrap(), vec![a, b]);
    }

    #[test]
    fn test_line_draw_reversed() {
        // Straight lines along an axis have no ambiguity, so reversing the
        // endpoints gives the reversed line
        let a = Hex::new_qr(-3, 0);
        let b = Hex::new_qr(3, 0);
        let mut backward = b.line_draw(a).unwrap();
        backward.reverse();
        assert_eq!(a.line_draw(b).unwrap(), backward);
        assert_eq!(backward.len(), 7);
    }

    #[test]
    fn test_line_draw_contiguous() {
        let a = Hex::new_qr(-4, 7);
        let b = Hex::new_qr(5, -2);
        let line = a.line_draw(b).unwrap();
        assert_eq!(line.len(), a.distance_to(b) + 1);
        assert_eq!(line.first(), Some(&a));
        assert_eq!(line.last(), Some(&b));
        for pair in line.windows(2) {
            assert_eq!(pair[0].distance_to(pair[1]), 1);
        }
    }
}
