use crate::hex::{
    direction::{HexDirection, SideDirection},
    Hex,
};
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use log::trace;
use std::{
    cmp,
    collections::{HashSet, VecDeque},
};

/// A set of hexes
pub type HexSet = HashSet<Hex, FnvBuildHasher>;
/// An ORDERED set of hexes. This has some extra memory overhead, so we should
/// only use it when we actually need the ordering.
pub type HexIndexSet = IndexSet<Hex, FnvBuildHasher>;

/// Calculate the number of hexes within `radius` steps of a center hex
/// (including the center). Radius 0 means 1 hex, 1 is 7 hexes, 2 is 19, etc.
pub fn hex_count(radius: u32) -> usize {
    // We'll always have 3r^2+3r+1 hexes (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r hexes for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

impl Hex {
    /// Get all hexes that are exactly `radius` steps from this one. The ring
    /// starts at `self + SW * radius`, then walks `radius` steps in each
    /// [SideDirection] in index order, so the hexes come out
    /// counter-clockwise. A radius of 0 gives just this hex, and a negative
    /// radius gives nothing.
    ///
    /// https://www.redblobgames.com/grids/hexagons/#rings
    pub fn ring(self, radius: i32) -> Vec<Hex> {
        match radius.cmp(&0) {
            cmp::Ordering::Less => Vec::new(),
            cmp::Ordering::Equal => vec![self],
            cmp::Ordering::Greater => {
                let mut ring = Vec::with_capacity(6 * radius as usize);
                let mut hex = self + SideDirection::SW.to_vector() * radius;
                for dir in SideDirection::COUNTER_CLOCKWISE {
                    for _ in 0..radius {
                        ring.push(hex);
                        hex = hex.adjacent(*dir);
                    }
                }
                ring
            }
        }
    }

    /// Get all hexes within `radius` steps of this one, ordered by distance.
    /// This is every [Self::ring] from 0 to `radius`, concatenated. A negative
    /// radius gives nothing.
    pub fn spiral(self, radius: i32) -> Vec<Hex> {
        if radius < 0 {
            return Vec::new();
        }
        let mut spiral = Vec::with_capacity(hex_count(radius as u32));
        for r in 0..=radius {
            spiral.extend(self.ring(r));
        }
        spiral
    }

    /// Get all hexes within `radius` steps of this one, in row order. This is
    /// the same set as [Self::spiral], but cheaper to compute when you don't
    /// care about the order. A negative radius gives nothing.
    ///
    /// https://www.redblobgames.com/grids/hexagons/#range
    pub fn range(self, radius: i32) -> Vec<Hex> {
        if radius < 0 {
            return Vec::new();
        }
        let mut range = Vec::with_capacity(hex_count(radius as u32));
        for q in -radius..=radius {
            // If we just do [-radius,radius] for r as well, then we end up
            // with a diamond pattern instead of a hexagon
            let r_min = cmp::max(-radius, -q - radius);
            let r_max = cmp::min(radius, -q + radius);
            for r in r_min..=r_max {
                range.push(self + Hex::new_qr(q, r));
            }
        }
        range
    }

    /// Find every hex that can be reached from this one in at most `steps`
    /// moves, where each move goes to an adjacent hex that isn't in
    /// `blocked`. The start hex is always included (even if it's blocked),
    /// and the output is ordered by when each hex was discovered, which means
    /// it is also sorted by number of moves.
    ///
    /// https://www.redblobgames.com/grids/hexagons/#range-obstacles
    pub fn reachable(self, steps: u32, blocked: &HexSet) -> HexIndexSet {
        let mut visited = HexIndexSet::default();
        visited.insert(self);

        // Standard BFS. Each queue entry holds a hex along with the number of
        // moves it took to get there
        let mut bfs_queue: VecDeque<(Hex, u32)> = VecDeque::new();
        bfs_queue.push_back((self, 0));
        while let Some((hex, moves)) = bfs_queue.pop_front() {
            if moves >= steps {
                continue;
            }
            for adj in hex.adjacents() {
                if !blocked.contains(&adj) && visited.insert(adj) {
                    bfs_queue.push_back((adj, moves + 1));
                }
            }
        }

        trace!(
            "{} hexes reachable from {} in {} steps",
            visited.len(),
            self,
            steps
        );
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_count() {
        assert_eq!(hex_count(0), 1);
        assert_eq!(hex_count(1), 7);
        assert_eq!(hex_count(2), 19);
        assert_eq!(hex_count(3), 37);
    }

    #[test]
    fn test_ring() {
        assert_eq!(Hex::ORIGIN.ring(-1), vec![]);
        assert_eq!(Hex::ORIGIN.ring(0), vec![Hex::ORIGIN]);
        assert_eq!(
            Hex::ORIGIN.ring(1),
            vec![
                Hex::new_qr(-1, 1),
                Hex::new_qr(0, 1),
                Hex::new_qr(1, 0),
                Hex::new_qr(1, -1),
                Hex::new_qr(0, -1),
                Hex::new_qr(-1, 0),
            ]
        );

        let center = Hex::new_qr(3, -1);
        for radius in 1..5 {
            let ring = center.ring(radius);
            assert_eq!(ring.len(), 6 * radius as usize);
            let unique: HexSet = ring.iter().copied().collect();
            assert_eq!(unique.len(), ring.len());
            for hex in ring {
                assert_eq!(center.distance_to(hex), radius as usize);
            }
        }
    }

    #[test]
    fn test_spiral() {
        assert_eq!(Hex::ORIGIN.spiral(-1), vec![]);
        assert_eq!(Hex::ORIGIN.spiral(0), vec![Hex::ORIGIN]);

        let center = Hex::new_qr(-2, 5);
        let spiral = center.spiral(3);
        assert_eq!(spiral.len(), hex_count(3));
        assert_eq!(spiral[0], center);
        assert_eq!(&spiral[1..7], center.ring(1).as_slice());
        // Sorted by distance from the center
        for pair in spiral.windows(2) {
            assert!(
                center.distance_to(pair[0]) <= center.distance_to(pair[1])
            );
        }
    }

    #[test]
    fn test_range() {
        assert_eq!(Hex::ORIGIN.range(-1), vec![]);
        for radius in 0..5 {
            let center = Hex::new_qr(1, 1);
            let range: HexSet = center.range(radius).into_iter().collect();
            let spiral: HexSet = center.spiral(radius).into_iter().collect();
            assert_eq!(range.len(), hex_count(radius as u32));
            assert_eq!(range, spiral);
        }
    }

    #[test]
    fn test_reachable_open() {
        let reachable = Hex::ORIGIN.reachable(2, &HexSet::default());
        assert_eq!(reachable.len(), hex_count(2));
        assert_eq!(reachable.get_index(0), Some(&Hex::ORIGIN));

        assert_eq!(Hex::ORIGIN.reachable(0, &HexSet::default()).len(), 1);
    }

    #[test]
    fn test_reachable_blocked() {
        // Wall off the whole ring around the origin, except for the east side
        let blocked: HexSet = Hex::ORIGIN
            .ring(1)
            .into_iter()
            .filter(|hex| *hex != Hex::new_qr(1, 0))
            .collect();
        let reachable = Hex::ORIGIN.reachable(2, &blocked);

        // Step 1 can only go east, step 2 fans out from there into the 3
        // neighbors of (1, 0) that aren't the origin or blocked
        assert_eq!(reachable.len(), 1 + 1 + 3);
        assert!(reachable.contains(&Hex::new_qr(1, 0)));
        assert!(reachable.contains(&Hex::new_qr(2, 0)));
        assert!(reachable.contains(&Hex::new_qr(2, -1)));
        assert!(reachable.contains(&Hex::new_qr(1, 1)));
        assert!(blocked.iter().all(|hex| !reachable.contains(hex)));
        // Discovery order is also sorted by number of moves
        let moves: Vec<usize> = reachable
            .iter()
            .map(|hex| hex.distance_to(Hex::ORIGIN))
            .collect();
        assert_eq!(moves, vec![0, 1, 2, 2, 2]);
    }
}
