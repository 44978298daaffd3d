//! Axis-aligned bounding boxes in longitude/latitude space.

use super::Point2LL;

/// An axis-aligned bounding box.
///
/// Starts out empty (min > max) and grows as points are added. An empty
/// extent contains and overlaps nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent2D {
    pub min: Point2LL,
    pub max: Point2LL,
}

impl Extent2D {
    /// An extent containing no points.
    pub const fn empty() -> Self {
        Self {
            min: Point2LL::new(f32::INFINITY, f32::INFINITY),
            max: Point2LL::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Smallest extent containing all of `points`.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point2LL>,
    {
        let mut extent = Self::empty();
        for p in points {
            extent.add_point(*p);
        }
        extent
    }

    /// Grow to include `p`.
    #[inline]
    pub fn add_point(&mut self, p: Point2LL) {
        self.min.lon = self.min.lon.min(p.lon);
        self.min.lat = self.min.lat.min(p.lat);
        self.max.lon = self.max.lon.max(p.lon);
        self.max.lat = self.max.lat.max(p.lat);
    }

    /// Smallest extent containing both.
    pub fn union(&self, other: &Extent2D) -> Extent2D {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let mut e = *self;
        e.add_point(other.min);
        e.add_point(other.max);
        e
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.lon > self.max.lon || self.min.lat > self.max.lat
    }

    /// True if `p` lies inside or on the boundary.
    pub fn contains(&self, p: Point2LL) -> bool {
        p.lon >= self.min.lon && p.lon <= self.max.lon && p.lat >= self.min.lat && p.lat <= self.max.lat
    }

    /// True if the two extents share at least one point.
    pub fn overlaps(&self, other: &Extent2D) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min.lon <= other.max.lon
            && self.max.lon >= other.min.lon
            && self.min.lat <= other.max.lat
            && self.max.lat >= other.min.lat
    }

    /// Center of the extent, `None` when empty.
    pub fn center(&self) -> Option<Point2LL> {
        if self.is_empty() {
            None
        } else {
            Some(Point2LL::midpoint(self.min, self.max))
        }
    }
}

impl Default for Extent2D {
    fn default() -> Self {
        Self::empty()
    }
}
