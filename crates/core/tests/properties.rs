//! Property checks that should hold for every hex, sampled over a
//! neighborhood of the grid rather than a handful of hand-picked values.

use assert_approx_eq::assert_approx_eq;
use hexgrid::{
    FractionalHex, Hex, HexDirection, Layout, Orientation, Point2,
    SideDirection,
};
use strum::IntoEnumIterator;

/// Every hex within a few steps of a point that's off the origin, so that
/// sign mistakes don't cancel out
fn sample_hexes() -> Vec<Hex> {
    Hex::new_qr(2, -1).spiral(6)
}

fn sample_layouts() -> Vec<Layout> {
    let mut layouts = Vec::new();
    for orientation in Orientation::iter() {
        layouts.push(
            Layout::new(orientation, Point2::new(10.0, 10.0), Point2::ORIGIN)
                .unwrap(),
        );
        layouts.push(
            Layout::new(
                orientation,
                Point2::new(3.5, 17.0),
                Point2::new(-250.0, 31.25),
            )
            .unwrap()
            .with_spacing(1.25)
            .unwrap(),
        );
    }
    layouts
}

#[test]
fn test_axial_reconstruction() {
    for hex in sample_hexes() {
        assert_eq!(Hex::new(hex.q(), hex.r(), -hex.q() - hex.r()), Ok(hex));
        assert_eq!(hex.q() + hex.r() + hex.s(), 0);
    }
}

#[test]
fn test_pixel_round_trip() {
    for layout in sample_layouts() {
        for hex in sample_hexes() {
            let center = layout.hex_to_pixel(hex);
            assert_eq!(
                layout.pixel_to_hex(center),
                Ok(hex),
                "center of {} in {:?}",
                hex,
                layout
            );

            // Anywhere well inside the hex should map back to it too. Half
            // of the inner radius is comfortably inside for any size.
            let size = layout.size();
            let inner = size.x.min(size.y) * 3f64.sqrt() / 4.0;
            for (dx, dy) in &[(inner, 0.0), (0.0, -inner), (-inner, inner)] {
                let point = center + Point2::new(*dx, *dy);
                assert_eq!(layout.pixel_to_hex(point), Ok(hex));
            }
        }
    }
}

#[test]
fn test_hex_to_pixel_is_deterministic() {
    for layout in sample_layouts() {
        for hex in sample_hexes() {
            assert_eq!(layout.hex_to_pixel(hex), layout.hex_to_pixel(hex));
        }
    }
}

#[test]
fn test_pointy_hex_to_pixel() {
    let layout = Layout::new(
        Orientation::Pointy,
        Point2::new(10.0, 10.0),
        Point2::ORIGIN,
    )
    .unwrap();
    let pixel = layout.hex_to_pixel(Hex::new(1, -1, 0).unwrap());
    // x = (sqrt(3) * 1 + sqrt(3)/2 * -1) * 10, y = (0 * 1 + 3/2 * -1) * 10
    assert_approx_eq!(pixel.x, 8.660254037844386);
    assert_approx_eq!(pixel.y, -15.0);
}

#[test]
fn test_distance_properties() {
    let hexes = Hex::ORIGIN.spiral(2);
    for a in &hexes {
        assert_eq!(a.distance_to(*a), 0);
        for b in &hexes {
            assert_eq!(a.distance_to(*b), b.distance_to(*a));
            for c in &hexes {
                assert!(
                    a.distance_to(*c) <= a.distance_to(*b) + b.distance_to(*c),
                    "triangle inequality broken for {} {} {}",
                    a,
                    b,
                    c
                );
            }
        }
    }
}

#[test]
fn test_line_draw_properties() {
    let hexes = sample_hexes();
    let start = Hex::new_qr(-3, 1);
    assert_eq!(start.line_draw(start), Ok(vec![start]));
    for end in hexes {
        let line = start.line_draw(end).unwrap();
        assert_eq!(line.len(), start.distance_to(end) + 1);
        assert_eq!(line.first(), Some(&start));
        assert_eq!(line.last(), Some(&end));
    }
}

#[test]
fn test_neighbor_order() {
    let expected = [
        Hex::new(1, 0, -1).unwrap(),
        Hex::new(1, -1, 0).unwrap(),
        Hex::new(0, -1, 1).unwrap(),
        Hex::new(-1, 0, 1).unwrap(),
        Hex::new(-1, 1, 0).unwrap(),
        Hex::new(0, 1, -1).unwrap(),
    ];
    for (direction, hex) in expected.iter().enumerate() {
        assert_eq!(Hex::ORIGIN.neighbor(direction), Ok(*hex));
    }
    let typed: Vec<Hex> = SideDirection::iter()
        .map(|dir| Hex::ORIGIN.adjacent(dir))
        .collect();
    assert_eq!(typed, expected.to_vec());
    assert_eq!(
        SideDirection::COUNTER_CLOCKWISE.len(),
        expected.len()
    );
}

#[test]
fn test_pixel_to_hex_out_of_range() {
    for layout in sample_layouts() {
        let max = Hex::MAX_COORDINATE;
        let far = layout.hex_to_pixel(Hex::new_qr(max, 0));
        assert_eq!(layout.pixel_to_hex(far), Ok(Hex::new_qr(max, 0)));
        let farther = far * 4.0;
        assert!(layout.pixel_to_hex(farther).is_err(), "{:?}", layout);
        assert!(layout
            .pixel_to_hex(Point2::new(f64::NAN, f64::NAN))
            .is_err());
    }
}

#[test]
fn test_round_tie_break() {
    let frac = FractionalHex::new(0.5, 0.5, -1.0).unwrap();
    assert_eq!(frac.round(), Hex::new(1, 0, -1));
}
