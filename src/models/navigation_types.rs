//! Type-safe wrappers for navigation values

use std::f64::consts::PI;
use std::fmt;

use super::constants::COURSE_VECTORS;
use super::errors::{GameError, GameResult};

/// Course direction (1.0 to 9.0)
///
/// Represents navigation course in the game:
/// - 1 = East
/// - 3 = North
/// - 5 = West
/// - 7 = South
/// - 2, 4, 6, 8 = Diagonal directions
/// - Fractional values interpolate between directions
///
/// Course 9 is the same heading as course 1 and is stored as 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Course(f64);

impl Course {
    /// Create a new course value
    ///
    /// # Returns
    /// Ok(Course) if `value` is in `[1, 9]`, Err otherwise (NaN included)
    pub fn new(value: f64) -> GameResult<Self> {
        if !(1.0..=9.0).contains(&value) {
            return Err(GameError::InvalidInput(format!(
                "course {} outside 1-9",
                value
            )));
        }
        if value == 9.0 {
            Ok(Course(1.0))
        } else {
            Ok(Course(value))
        }
    }

    /// Get the course value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Per-step displacement, interpolated linearly between the two nearest
    /// compass entries. Diagonals come out longer than cardinals.
    pub fn step_vector(&self) -> (f64, f64) {
        let base = self.0.floor() as usize;
        let frac = self.0 - base as f64;
        let (x0, y0) = COURSE_VECTORS[base];
        let (x1, y1) = COURSE_VECTORS[base + 1];
        (x0 + (x1 - x0) * frac, y0 + (y1 - y0) * frac)
    }

    /// True polar heading, used by torpedoes. Course 1 is 0 radians.
    pub fn heading_radians(&self) -> f64 {
        (1.0 - self.0) * PI / 4.0
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Warp factor (0.0 up to the engines' current maximum)
///
/// - 0.0 = No movement
/// - below 1.0 = Sub-warp, time charged in tenths
/// - 1.0 and up = Full warp, one stardate per move
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WarpFactor(f64);

impl WarpFactor {
    /// Create a new warp factor bounded by `max` (8.0, or 0.2 with damaged engines)
    pub fn new(value: f64, max: f64) -> GameResult<Self> {
        if (0.0..=max).contains(&value) {
            Ok(WarpFactor(value))
        } else {
            Err(GameError::InvalidInput(format!(
                "warp {} outside 0-{}",
                value, max
            )))
        }
    }

    /// Get the warp factor value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Number of sector steps taken at this speed.
    pub fn sectors(&self) -> i32 {
        (self.0 * 8.0 + 0.5).floor() as i32
    }

    /// Stardates consumed by a move at this speed.
    pub fn time_cost(&self) -> f64 {
        if self.is_warp() {
            1.0
        } else {
            0.1 * (10.0 * self.0).floor()
        }
    }

    /// Check if this is full warp speed (>= 1.0)
    pub fn is_warp(&self) -> bool {
        self.0 >= 1.0
    }
}

impl fmt::Display for WarpFactor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_valid_range() {
        assert!(Course::new(1.0).is_ok());
        assert!(Course::new(5.5).is_ok());
        assert!(Course::new(9.0).is_ok());
    }

    #[test]
    fn course_invalid_range() {
        assert!(Course::new(0.0).is_err());
        assert!(Course::new(0.5).is_err());
        assert!(Course::new(9.1).is_err());
        assert!(Course::new(f64::NAN).is_err());
    }

    #[test]
    fn course_nine_wraps_to_one() {
        assert_eq!(Course::new(9.0).unwrap(), Course::new(1.0).unwrap());
    }

    #[test]
    fn cardinal_vectors() {
        assert_eq!(Course::new(1.0).unwrap().step_vector(), (1.0, 0.0));
        assert_eq!(Course::new(3.0).unwrap().step_vector(), (0.0, -1.0));
        assert_eq!(Course::new(5.0).unwrap().step_vector(), (-1.0, 0.0));
        assert_eq!(Course::new(7.0).unwrap().step_vector(), (0.0, 1.0));
    }

    #[test]
    fn fractional_course_interpolates() {
        let (dx, dy) = Course::new(1.5).unwrap().step_vector();
        assert!((dx - 1.0).abs() < 1e-9);
        assert!((dy + 0.5).abs() < 1e-9);

        let (dx, dy) = Course::new(8.5).unwrap().step_vector();
        assert!((dx - 1.0).abs() < 1e-9);
        assert!((dy - 0.5).abs() < 1e-9);
    }

    #[test]
    fn heading_for_north_is_negative_quarter_turn() {
        let h = Course::new(3.0).unwrap().heading_radians();
        assert!((h + PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn warp_range_depends_on_max() {
        assert!(WarpFactor::new(0.0, 8.0).is_ok());
        assert!(WarpFactor::new(8.0, 8.0).is_ok());
        assert!(WarpFactor::new(8.1, 8.0).is_err());
        assert!(WarpFactor::new(-0.1, 8.0).is_err());
        assert!(WarpFactor::new(0.3, 0.2).is_err());
        assert!(WarpFactor::new(f64::NAN, 8.0).is_err());
    }

    #[test]
    fn warp_sector_count_rounds() {
        assert_eq!(WarpFactor::new(1.0, 8.0).unwrap().sectors(), 8);
        assert_eq!(WarpFactor::new(0.5, 8.0).unwrap().sectors(), 4);
        assert_eq!(WarpFactor::new(0.2, 8.0).unwrap().sectors(), 2);
    }

    #[test]
    fn subwarp_time_is_tenths() {
        let w = WarpFactor::new(0.55, 8.0).unwrap();
        assert!((w.time_cost() - 0.5).abs() < 1e-9);
        assert_eq!(WarpFactor::new(3.0, 8.0).unwrap().time_cost(), 1.0);
    }
}
