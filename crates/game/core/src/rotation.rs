//! Rotation move descriptors.
//!
//! A move selects a rectangle of tiles and turns it clockwise or counter
//! clockwise. Square selections turn by 90°, non-square ones can only flip
//! by 180°. The reconciler treats moves as opaque payload; geometry helpers
//! exist for consumers that need to replay or render a solution.

/// Axis-aligned rectangle in tile coordinates, corners inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl TileRect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width in tile steps (0 for a single column).
    pub fn width(&self) -> i32 {
        (self.x2 - self.x1).abs()
    }

    /// Height in tile steps (0 for a single row).
    pub fn height(&self) -> i32 {
        (self.y2 - self.y1).abs()
    }

    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }
}

/// One rotation of a tile rectangle, the unit a solution is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMove {
    pub rect: TileRect,
    /// Direction of the turn (true: clockwise).
    pub cw: bool,
}

impl RotationMove {
    pub fn new(rect: TileRect, cw: bool) -> Self {
        Self { rect, cw }
    }

    /// Rotations of just one tile don't make sense.
    pub fn makes_sense(&self) -> bool {
        self.rect.width() > 0 || self.rect.height() > 0
    }

    fn direction(&self) -> i32 {
        if self.cw { -1 } else { 1 }
    }

    /// Signed rotation angle in degrees: ±90 for squares, ±180 otherwise.
    pub fn angle_deg(&self) -> i32 {
        self.direction() * if self.rect.is_square() { 90 } else { 180 }
    }
}
