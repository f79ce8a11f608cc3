//! Geometric primitives for diagram topologies.
//!
//! This module provides the fundamental geometric types used throughout
//! Odograph for node positions, sizes, and bounding boxes, plus the
//! [`Side`] and [`Axis`] enumerations that classify where a relation
//! attaches to a node.
//!
//! # Coordinate System
//!
//! Odograph uses a coordinate system consistent with screen space:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Node positions refer to the top-left corner of the node's bounding box.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A 2D point representing a position in diagram coordinate space.
///
/// Points use `f32` coordinates and provide operations for basic vector
/// math. The coordinate system has origin at top-left with Y increasing
/// downward (see [module documentation](self) for details).
///
/// # Examples
///
/// ```
/// # use odograph_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let delta = p1.sub_point(p2);
/// assert_eq!(delta.x(), 5.0);
/// assert_eq!(delta.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if either dimension is zero or negative
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the point on the given side at the given offset percentage.
    ///
    /// Offsets run left-to-right on the horizontal sides and top-to-bottom
    /// on the vertical sides, with 0% at one corner and 100% at the other.
    /// Renderers use this to place attachment markers on a node's border.
    ///
    /// # Examples
    ///
    /// ```
    /// # use odograph_core::geometry::{Bounds, Point, Side, Size};
    /// let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 50.0));
    ///
    /// let marker = bounds.point_on_side(Side::Right, 50.0);
    /// assert_eq!(marker.x(), 100.0);
    /// assert_eq!(marker.y(), 25.0);
    /// ```
    pub fn point_on_side(self, side: Side, offset_percent: f32) -> Point {
        let fraction = offset_percent / 100.0;
        match side {
            Side::Top => Point::new(self.min_x + self.width() * fraction, self.min_y),
            Side::Bottom => Point::new(self.min_x + self.width() * fraction, self.max_y),
            Side::Left => Point::new(self.min_x, self.min_y + self.height() * fraction),
            Side::Right => Point::new(self.max_x, self.min_y + self.height() * fraction),
        }
    }
}

/// One of the four cardinal borders of a node's bounding box.
///
/// The names match external configuration strings (snake_case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Returns the side facing this one on the opposite border.
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl FromStr for Side {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            _ => Err("Invalid side"),
        }
    }
}

impl From<Side> for &'static str {
    fn from(val: Side) -> Self {
        match val {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Classification of a relation's dominant direction.
///
/// A relation whose endpoints are further apart horizontally than
/// vertically is `Horizontal` and attaches to left/right sides; otherwise
/// it is `Vertical` and attaches to top/bottom sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl FromStr for Axis {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Axis::Horizontal),
            "vertical" => Ok(Axis::Vertical),
            _ => Err("Invalid axis"),
        }
    }
}

impl From<Axis> for &'static str {
    fn from(val: Axis) -> Self {
        match val {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
