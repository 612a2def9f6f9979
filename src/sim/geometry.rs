//! Integer geometry for collision detection
//!
//! Everything in the simulation lives on an integer grid with y growing
//! downward. Collisions are detected between axis-aligned rectangles and
//! reported as one of four unit normals.

use std::ops::{Add, Neg, Sub};

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A location on the playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point(IVec2);

impl Point {
    pub const ORIGIN: Point = Point(IVec2::ZERO);

    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    #[inline]
    pub fn x(self) -> i32 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> i32 {
        self.0.y
    }

    /// `self` is neither right of nor below `other`
    #[inline]
    pub fn is_up_and_left_from(self, other: Point) -> bool {
        self.0.x <= other.0.x && self.0.y <= other.0.y
    }

    /// `self` is strictly left of and strictly above `other`
    #[inline]
    pub fn is_strictly_up_and_left_from(self, other: Point) -> bool {
        self.0.x < other.0.x && self.0.y < other.0.y
    }

    /// Same point with its x coordinate replaced
    #[inline]
    pub fn with_x(self, x: i32) -> Self {
        Self(IVec2::new(x, self.0.y))
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point(self.0 + rhs.0)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        Point(self.0 - rhs.0)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

/// A displacement or velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(IVec2);

impl Vector {
    pub const ZERO: Vector = Vector(IVec2::ZERO);
    pub const UP: Vector = Vector(IVec2::new(0, -1));
    pub const DOWN: Vector = Vector(IVec2::new(0, 1));
    pub const LEFT: Vector = Vector(IVec2::new(-1, 0));
    pub const RIGHT: Vector = Vector(IVec2::new(1, 0));

    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    #[inline]
    pub fn x(self) -> i32 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> i32 {
        self.0.y
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == IVec2::ZERO
    }

    #[inline]
    pub fn scaled(self, factor: i32) -> Vector {
        Vector(self.0 * factor)
    }

    #[inline]
    pub fn dot(self, other: Vector) -> i32 {
        self.0.dot(other.0)
    }

    #[inline]
    pub fn square_length(self) -> i32 {
        self.0.length_squared()
    }

    #[inline]
    pub fn is_unit(self) -> bool {
        self.square_length() == 1
    }

    /// Reflect off a surface with unit normal `normal`
    ///
    /// Standard reflection: v' = v - 2(v·n)n
    #[inline]
    pub fn mirror_over(self, normal: Vector) -> Vector {
        self - normal.scaled(2 * self.dot(normal))
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rect {
    /// # Panics
    /// If `top_left` is not up and left from `bottom_right`.
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        assert!(
            top_left.is_up_and_left_from(bottom_right),
            "rectangle corners out of order: {top_left:?} / {bottom_right:?}"
        );
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Box spanning `center - half_size` to `center + half_size`
    pub fn around(center: Point, half_size: Vector) -> Self {
        Self::new(center - half_size, center + half_size)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.top_left.x()
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.bottom_right.x()
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.top_left.y()
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.bottom_right.y()
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.left() + (self.right() - self.left()) / 2,
            self.top() + (self.bottom() - self.top()) / 2,
        )
    }

    /// Check whether this box has crossed into `other`, and through which side
    ///
    /// Returns the unit normal of the contact side as seen from `self`
    /// (`RIGHT` when our right edge entered `other`'s left face, and so on),
    /// or `None` when there is no face contact.
    ///
    /// A side only counts when our center, projected on the perpendicular
    /// axis, lies within `other`'s extent, which rejects corner clips.
    /// Sides are tested in the order right, left, top of `other`, bottom of
    /// `other`; the first match wins. The order only matters for exact
    /// corner contact, where it resolves in favour of a horizontal bounce.
    pub fn overlap(&self, other: &Rect) -> Option<Vector> {
        let center = self.center();
        let within_rows = center.y() >= other.top() && center.y() <= other.bottom();
        let within_columns = center.x() >= other.left() && center.x() <= other.right();

        if self.right() >= other.left() && self.left() < other.left() && within_rows {
            return Some(Vector::RIGHT);
        }
        if self.left() <= other.right() && self.right() > other.right() && within_rows {
            return Some(Vector::LEFT);
        }
        if self.bottom() >= other.top() && self.top() < other.top() && within_columns {
            return Some(Vector::DOWN);
        }
        if self.top() <= other.bottom() && self.bottom() > other.bottom() && within_columns {
            return Some(Vector::UP);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Rect {
        Rect::new(Point::new(101, 101), Point::new(151, 151))
    }

    #[test]
    fn test_mirror_over() {
        // Ball moving right, hits vertical wall
        let v = Vector::new(10, 3);
        assert_eq!(v.mirror_over(Vector::RIGHT), Vector::new(-10, 3));
        assert_eq!(v.mirror_over(Vector::LEFT), Vector::new(-10, 3));
        assert_eq!(v.mirror_over(Vector::UP), Vector::new(10, -3));
    }

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector::new(2, -3);
        let b = Vector::new(-1, 5);
        assert_eq!(a + b, Vector::new(1, 2));
        assert_eq!(a - b, Vector::new(3, -8));
        assert_eq!(a.scaled(3), Vector::new(6, -9));
        assert_eq!(a.dot(b), -17);
        assert_eq!(a.square_length(), 13);
        assert_eq!(-a, Vector::new(-2, 3));
        assert!(Vector::DOWN.is_unit());
        assert!(!Vector::new(1, 1).is_unit());
    }

    #[test]
    fn test_point_order() {
        let p = Point::new(3, 4);
        assert!(p.is_up_and_left_from(Point::new(3, 4)));
        assert!(!p.is_strictly_up_and_left_from(Point::new(3, 4)));
        assert!(p.is_strictly_up_and_left_from(Point::new(4, 5)));
        assert!(!p.is_up_and_left_from(Point::new(2, 10)));
        assert_eq!(p + Vector::new(1, -1), Point::new(4, 3));
        assert_eq!(Point::new(10, 10) - p, Vector::new(7, 6));
    }

    #[test]
    fn test_overlap_from_each_side() {
        let block = block();
        // Approaching the left face
        let ball = Rect::around(Point::new(95, 125), Vector::new(10, 10));
        assert_eq!(ball.overlap(&block), Some(Vector::RIGHT));
        // Approaching the right face
        let ball = Rect::around(Point::new(155, 125), Vector::new(10, 10));
        assert_eq!(ball.overlap(&block), Some(Vector::LEFT));
        // Approaching from above
        let ball = Rect::around(Point::new(125, 95), Vector::new(10, 10));
        assert_eq!(ball.overlap(&block), Some(Vector::DOWN));
        // Approaching from below
        let ball = Rect::around(Point::new(125, 155), Vector::new(10, 10));
        assert_eq!(ball.overlap(&block), Some(Vector::UP));
    }

    #[test]
    fn test_overlap_miss() {
        let block = block();
        let far = Rect::around(Point::new(300, 300), Vector::new(10, 10));
        assert_eq!(far.overlap(&block), None);
        // Corner clip: center outside both extents
        let corner = Rect::around(Point::new(95, 95), Vector::new(10, 10));
        assert_eq!(corner.overlap(&block), None);
    }

    #[test]
    fn test_overlap_is_antiparallel() {
        let block = block();
        for center in [
            Point::new(95, 125),
            Point::new(155, 125),
            Point::new(125, 95),
            Point::new(125, 155),
        ] {
            let ball = Rect::around(center, Vector::new(10, 10));
            let forward = ball.overlap(&block).expect("ball touches a face");
            let backward = block.overlap(&ball).expect("block touches the ball");
            assert_eq!(forward, -backward);
        }
    }

    #[test]
    #[should_panic(expected = "rectangle corners out of order")]
    fn test_rect_rejects_inverted_corners() {
        Rect::new(Point::new(10, 10), Point::new(0, 0));
    }
}
