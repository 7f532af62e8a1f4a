use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionParseError {
    WrongFieldCount { found: usize },
    InvalidCoordinate { field: String },
}

impl fmt::Display for SelectionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongFieldCount { found } => {
                write!(f, "selection needs 4 comma separated values x1,y1,x2,y2, found {}", found)
            }
            Self::InvalidCoordinate { field } => {
                write!(f, "selection coordinate '{}' is not an integer", field)
            }
        }
    }
}

impl Error for SelectionParseError {}

/// A rectangle dragged out over the grid, from the press point to the release point.
///
/// The corners may arrive in any order; every accessor normalises them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Selection {
    press: Point,
    release: Point,
}

impl Selection {
    #[must_use]
    pub fn new(press: Point, release: Point) -> Self {
        Self { press, release }
    }

    #[must_use]
    pub fn press(&self) -> Point {
        self.press
    }

    #[must_use]
    pub fn release(&self) -> Point {
        self.release
    }

    #[must_use]
    pub fn left(&self) -> i32 {
        self.press.x.min(self.release.x)
    }

    #[must_use]
    pub fn top(&self) -> i32 {
        self.press.y.min(self.release.y)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.press.x.abs_diff(self.release.x)
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.press.y.abs_diff(self.release.y)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Pulls both corners inside a `grid_size` × `grid_size` grid.
    #[must_use]
    pub fn clamped_to(&self, grid_size: u32) -> Self {
        let max = i32::try_from(grid_size.saturating_sub(1)).unwrap_or(i32::MAX);
        let clamp = |p: Point| Point {
            x: p.x.clamp(0, max),
            y: p.y.clamp(0, max),
        };

        Self {
            press: clamp(self.press),
            release: clamp(self.release),
        }
    }
}

impl FromStr for Selection {
    type Err = SelectionParseError;

    /// Parses `x1,y1,x2,y2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();

        if fields.len() != 4 {
            return Err(SelectionParseError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let mut coords = [0i32; 4];
        for (slot, field) in coords.iter_mut().zip(&fields) {
            *slot = field
                .parse()
                .map_err(|_| SelectionParseError::InvalidCoordinate {
                    field: (*field).to_string(),
                })?;
        }

        Ok(Self::new(
            Point {
                x: coords[0],
                y: coords[1],
            },
            Point {
                x: coords[2],
                y: coords[3],
            },
        ))
    }
}
