//! Axis-aligned rectangles and quadrant subdivision.
//!
//! A [`Region`] hangs down from its origin: it spans `x` in
//! `(origin.x, origin.x + width)` and `y` in `(origin.y - height, origin.y)`.
//! Every test here is strictly exclusive on all four edges, so a point lying
//! exactly on a boundary is inside nothing that boundary belongs to.

use std::fmt;

use crate::position::{Position, Positioned};

/// One of the four sub-regions produced by [`Region::subdivide`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Same origin as the parent.
    LeftUp,
    /// Origin shifted right by half the width.
    RightUp,
    /// Origin shifted down by half the height.
    LeftDown,
    /// Origin shifted both right and down.
    RightDown,
}

impl Quadrant {
    /// All quadrants, in the order [`Region::subdivide`] returns them.
    pub const ALL: [Self; 4] = [Self::LeftUp, Self::RightUp, Self::LeftDown, Self::RightDown];

    /// Slot of this quadrant in a `[_; 4]` child array.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::LeftUp => 0,
            Self::RightUp => 1,
            Self::LeftDown => 2,
            Self::RightDown => 3,
        }
    }
}

/// Axis-aligned rectangle: an origin plus a width going right and a height
/// going down.
///
/// # Example
/// ```
/// use region_quadtree::{Position, Region};
///
/// let r = Region::new(Position::new(0, 500), 500, 500);
/// assert!(r.contains(Position::new(1, 499)));
/// // edges are excluded
/// assert!(!r.contains(Position::new(0, 250)));
/// assert!(!r.contains(Position::new(250, 500)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    origin: Position,
    width: i32,
    height: i32,
}

impl Region {
    /// Creates a region from its top-left origin, width and height.
    #[inline]
    pub const fn new(origin: Position, width: i32, height: i32) -> Self {
        Self { origin, width, height }
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Position {
        self.origin
    }

    /// Extent along `x`.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Extent along `y`, measured downward from the origin.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Left edge.
    #[inline]
    pub fn min_x(&self) -> i64 {
        i64::from(self.origin.x())
    }

    /// Right edge.
    #[inline]
    pub fn max_x(&self) -> i64 {
        i64::from(self.origin.x()) + i64::from(self.width)
    }

    /// Bottom edge.
    #[inline]
    pub fn min_y(&self) -> i64 {
        i64::from(self.origin.y()) - i64::from(self.height)
    }

    /// Top edge.
    #[inline]
    pub fn max_y(&self) -> i64 {
        i64::from(self.origin.y())
    }

    /// Returns `true` if the point lies strictly inside this region.
    ///
    /// A point on any edge is not contained.
    #[inline]
    pub fn contains<P: Positioned>(&self, point: P) -> bool {
        let x = i64::from(point.x());
        let y = i64::from(point.y());
        self.min_x() < x && x < self.max_x() && self.min_y() < y && y < self.max_y()
    }

    /// Returns `true` if the two regions overlap with positive area.
    ///
    /// Regions that only share an edge or a corner do not intersect.
    ///
    /// # Example
    /// ```
    /// use region_quadtree::{Position, Region};
    ///
    /// let a = Region::new(Position::new(0, 10), 10, 10);
    /// let b = Region::new(Position::new(5, 15), 10, 10);
    /// let touching = Region::new(Position::new(10, 10), 10, 10);
    /// assert!(a.intersects(&b));
    /// assert!(!a.intersects(&touching));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        other.min_x() < self.max_x()
            && other.min_y() < self.max_y()
            && other.max_x() > self.min_x()
            && other.max_y() > self.min_y()
    }

    /// Splits this region into four quadrants, ordered as [`Quadrant::ALL`].
    ///
    /// Width and height are halved with truncating division. For odd sizes
    /// the last unit along that axis belongs to no quadrant, and the
    /// coordinates on the inner dividing lines belong to none either.
    pub fn subdivide(&self) -> [Self; 4] {
        let half_w = self.width / 2;
        let half_h = self.height / 2;
        let x = self.origin.x();
        let y = self.origin.y();
        // saturating: a clamped origin still covers no representable point
        let right = x.saturating_add(half_w);
        let down = y.saturating_sub(half_h);
        [
            Self::new(Position::new(x, y), half_w, half_h),
            Self::new(Position::new(right, y), half_w, half_h),
            Self::new(Position::new(x, down), half_w, half_h),
            Self::new(Position::new(right, down), half_w, half_h),
        ]
    }

    /// Sub-region for a single quadrant.
    #[inline]
    pub fn quadrant(&self, quadrant: Quadrant) -> Self {
        self.subdivide()[quadrant.index()]
    }

    /// Returns `true` if halving this region still leaves every quadrant
    /// with at least one strictly interior integer coordinate on each axis.
    #[inline]
    pub(crate) fn is_divisible(&self) -> bool {
        self.width / 2 >= 2 && self.height / 2 >= 2
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Region(x: {}..{}, y: {}..{})",
            self.min_x(),
            self.max_x(),
            self.min_y(),
            self.max_y()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(x: i32, y: i32, w: i32, h: i32) -> Region {
        Region::new(Position::new(x, y), w, h)
    }

    #[test]
    fn test_bounds_hang_down_from_origin() {
        let r = region(10, 100, 30, 40);
        assert_eq!(r.min_x(), 10);
        assert_eq!(r.max_x(), 40);
        assert_eq!(r.min_y(), 60);
        assert_eq!(r.max_y(), 100);
    }

    #[test]
    fn test_contains_is_strict_on_every_edge() {
        let r = region(0, 10, 10, 10);
        assert!(r.contains(Position::new(5, 5)));
        assert!(r.contains(Position::new(1, 9)));
        assert!(r.contains(Position::new(9, 1)));
        assert!(!r.contains(Position::new(0, 5)), "left edge");
        assert!(!r.contains(Position::new(10, 5)), "right edge");
        assert!(!r.contains(Position::new(5, 0)), "bottom edge");
        assert!(!r.contains(Position::new(5, 10)), "top edge");
        assert!(!r.contains(Position::new(0, 10)), "corner");
    }

    #[test]
    fn test_intersects_requires_positive_overlap() {
        let a = region(0, 10, 10, 10);
        assert!(a.intersects(&a));
        assert!(a.intersects(&region(9, 10, 10, 10)));
        assert!(a.intersects(&region(2, 8, 2, 2)), "nested");
        assert!(region(2, 8, 2, 2).intersects(&a), "nested, reversed");
        assert!(!a.intersects(&region(10, 10, 10, 10)), "shares right edge");
        assert!(!a.intersects(&region(0, 0, 10, 10)), "shares bottom edge");
        assert!(!a.intersects(&region(10, 0, 10, 10)), "shares a corner");
        assert!(!a.intersects(&region(50, 50, 5, 5)));
    }

    #[test]
    fn test_subdivide_even_region() {
        let quads = region(0, 500, 500, 500).subdivide();
        assert_eq!(quads[Quadrant::LeftUp.index()], region(0, 500, 250, 250));
        assert_eq!(quads[Quadrant::RightUp.index()], region(250, 500, 250, 250));
        assert_eq!(quads[Quadrant::LeftDown.index()], region(0, 250, 250, 250));
        assert_eq!(quads[Quadrant::RightDown.index()], region(250, 250, 250, 250));
    }

    #[test]
    fn test_subdivide_odd_region_loses_last_unit() {
        let r = region(0, 5, 5, 5);
        let quads = r.subdivide();
        assert_eq!(quads[Quadrant::RightDown.index()], region(2, 3, 2, 2));
        // (4, 1) is strictly inside the parent but in no quadrant
        let p = Position::new(4, 1);
        assert!(r.contains(p));
        assert!(quads.iter().all(|q| !q.contains(p)));
    }

    #[test]
    fn test_subdivide_dividing_lines_belong_to_no_quadrant() {
        let r = region(0, 8, 8, 8);
        let quads = r.subdivide();
        for p in [Position::new(4, 2), Position::new(2, 4), Position::new(4, 4)] {
            assert!(r.contains(p));
            assert!(quads.iter().all(|q| !q.contains(p)), "{p} should be unroutable");
        }
        let inner = Position::new(3, 3);
        assert_eq!(quads.iter().filter(|q| q.contains(inner)).count(), 1);
    }

    #[test]
    fn test_quadrant_lookup_matches_subdivide() {
        let r = region(-20, 20, 40, 40);
        let quads = r.subdivide();
        for q in Quadrant::ALL {
            assert_eq!(r.quadrant(q), quads[q.index()]);
        }
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let r = region(i32::MAX - 1, i32::MIN + 1, i32::MAX, i32::MAX);
        assert!(r.contains(Position::new(i32::MAX, i32::MIN)));
        let quads = r.subdivide();
        assert_eq!(quads[Quadrant::RightDown.index()].origin(), Position::new(i32::MAX, i32::MIN));
        assert!(r.max_x() > i64::from(i32::MAX));
        assert!(r.min_y() < i64::from(i32::MIN));
    }

    #[test]
    fn test_divisible_needs_two_units_per_half() {
        assert!(region(0, 4, 4, 4).is_divisible());
        assert!(!region(0, 3, 3, 3).is_divisible());
        assert!(!region(0, 10, 10, 3).is_divisible());
    }
}
