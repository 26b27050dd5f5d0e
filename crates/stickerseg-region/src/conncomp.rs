//! Pixel connectivity
//!
//! Defines which neighbors of a pixel count as connected to it.

/// Axis-aligned neighbor offsets
const FOUR_WAY: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Axis-aligned then diagonal neighbor offsets
const EIGHT_WAY: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Connectivity type for region analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

impl ConnectivityType {
    /// Map the `use8Connectivity` flag onto a connectivity type
    pub fn from_eight_way(use_eight_way: bool) -> Self {
        if use_eight_way {
            ConnectivityType::EightWay
        } else {
            ConnectivityType::FourWay
        }
    }

    /// Neighbor offsets `(dx, dy)` for this connectivity
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            ConnectivityType::FourWay => &FOUR_WAY,
            ConnectivityType::EightWay => &EIGHT_WAY,
        }
    }

    /// Iterate over the in-bounds neighbors of (x, y) on a
    /// `width` x `height` canvas.
    pub fn neighbors(
        self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> impl Iterator<Item = (u32, u32)> {
        self.offsets().iter().filter_map(move |&(dx, dy)| {
            let nx = x as i64 + dx as i64;
            let ny = y as i64 + dy as i64;
            if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                Some((nx as u32, ny as u32))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_eight_way() {
        assert_eq!(ConnectivityType::default(), ConnectivityType::EightWay);
        assert_eq!(
            ConnectivityType::from_eight_way(false),
            ConnectivityType::FourWay
        );
    }

    #[test]
    fn test_neighbors_interior() {
        assert_eq!(
            ConnectivityType::FourWay.neighbors(5, 5, 10, 10).count(),
            4
        );
        assert_eq!(
            ConnectivityType::EightWay.neighbors(5, 5, 10, 10).count(),
            8
        );
    }

    #[test]
    fn test_neighbors_corner_bounds_checked() {
        let mut n: Vec<_> = ConnectivityType::EightWay.neighbors(0, 0, 3, 3).collect();
        n.sort();
        assert_eq!(n, vec![(0, 1), (1, 0), (1, 1)]);

        let mut n: Vec<_> = ConnectivityType::FourWay.neighbors(2, 2, 3, 3).collect();
        n.sort();
        assert_eq!(n, vec![(1, 2), (2, 1)]);

        assert_eq!(ConnectivityType::EightWay.neighbors(0, 0, 1, 1).count(), 0);
    }
}
