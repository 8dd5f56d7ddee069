//! Canvas geometry: pointer points, element rectangles and the snap grid.

/// Spacing of the snap grid, in canvas units.
pub const GRID_SIZE: i32 = 10;

/// Rounds a coordinate or dimension to the nearest grid line.
///
/// Halves round up (`35 → 40`, `-5 → 0`), so snapping an already snapped
/// value returns it unchanged. Saturates at the ends of the `i32` range.
pub fn snap_to_grid(value: i32) -> i32 {
    value
        .saturating_add(GRID_SIZE / 2)
        .div_euclid(GRID_SIZE)
        .saturating_mul(GRID_SIZE)
}

/// Pointer position in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whole-unit displacement from `origin` to `self`.
    pub fn delta_from(&self, origin: Point) -> (i32, i32) {
        (
            (self.x - origin.x).round() as i32,
            (self.y - origin.y).round() as i32,
        )
    }
}

/// Axis-aligned element rectangle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Whether the point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x as f64
            && point.x <= self.right() as f64
            && point.y >= self.y as f64
            && point.y <= self.bottom() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_rounds_half_up() {
        assert_eq!(snap_to_grid(35), 40);
        assert_eq!(snap_to_grid(34), 30);
        assert_eq!(snap_to_grid(15), 20);
        assert_eq!(snap_to_grid(0), 0);
        assert_eq!(snap_to_grid(-5), 0);
        assert_eq!(snap_to_grid(-6), -10);
    }

    #[test]
    fn test_delta_rounds_to_units() {
        let start = Point::new(10.0, 10.0);
        assert_eq!(Point::new(25.4, 4.6).delta_from(start), (15, -5));
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(20, 20, 200, 30);
        assert!(r.contains(Point::new(20.0, 20.0)));
        assert!(r.contains(Point::new(220.0, 50.0)));
        assert!(!r.contains(Point::new(220.5, 30.0)));
        assert_eq!((r.right(), r.bottom()), (220, 50));
    }

    #[test]
    fn test_far_coordinates_saturate() {
        let r = Rect::new(i32::MAX - 100, i32::MAX - 5, 200, 30);
        assert_eq!((r.right(), r.bottom()), (i32::MAX, i32::MAX));
        assert_eq!(snap_to_grid(i32::MAX), 2_147_483_640);
        assert_eq!(snap_to_grid(i32::MIN), i32::MIN);
    }
}
