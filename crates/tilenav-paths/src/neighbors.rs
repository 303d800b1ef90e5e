use tilenav_core::Point;

/// Cardinal directions in expansion order: down, up, right, left.
///
/// The order only decides which of several equally short paths a search
/// returns.
pub const CARDINALS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(-1, 0),
];

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal (4-way) neighbors of a grid point, filtered by a
/// predicate, into a reused buffer.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return 4-directional neighbors of `p` in [`CARDINALS`] order,
    /// keeping only those for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in CARDINALS {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
