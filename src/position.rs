//! Integer coordinates and the capability a stored value must expose.

use std::fmt;

/// Immutable integer coordinate pair.
///
/// Equality is by coordinate pair; this is the key the tree uses for
/// exact-match lookup and duplicate rejection.
///
/// # Example
/// ```
/// use region_quadtree::Position;
/// let p = Position::new(1, 499);
/// assert_eq!(p, Position::new(1, 499));
/// assert_ne!(p, Position::new(499, 1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Creates a position at `(x, y)`.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate.
    #[inline]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Vertical coordinate.
    #[inline]
    pub const fn y(self) -> i32 {
        self.y
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A value that sits at an integer point.
///
/// This is the only capability the tree needs from what it stores. Two values
/// with the same `x()` and `y()` are the same key as far as the tree is
/// concerned, whatever else they carry.
///
/// # Example
/// ```
/// use region_quadtree::Positioned;
///
/// struct Tower { x: i32, y: i32, name: &'static str }
///
/// impl Positioned for Tower {
///     fn x(&self) -> i32 { self.x }
///     fn y(&self) -> i32 { self.y }
/// }
///
/// let t = Tower { x: 3, y: 4, name: "north" };
/// assert_eq!(t.position().x(), 3);
/// # let _ = t.name;
/// ```
pub trait Positioned {
    /// Horizontal coordinate.
    fn x(&self) -> i32;

    /// Vertical coordinate.
    fn y(&self) -> i32;

    /// Coordinates as a [`Position`].
    #[inline]
    fn position(&self) -> Position {
        Position::new(self.x(), self.y())
    }
}

impl Positioned for Position {
    #[inline]
    fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    fn y(&self) -> i32 {
        self.y
    }

    #[inline]
    fn position(&self) -> Position {
        *self
    }
}

impl Positioned for (i32, i32) {
    #[inline]
    fn x(&self) -> i32 {
        self.0
    }

    #[inline]
    fn y(&self) -> i32 {
        self.1
    }
}

impl<P: Positioned + ?Sized> Positioned for &P {
    #[inline]
    fn x(&self) -> i32 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> i32 {
        (**self).y()
    }
}
