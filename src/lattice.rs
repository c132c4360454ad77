//! Bounded 27×27 coordinate lattice and the placement contract.
//!
//! Placement of a ditrune on the lattice is a bijection between the 729
//! values and the 729 cells with x, y ∈ [−13, 13]; the origin always holds
//! value 0. The concrete encoding is injected, not compiled in: any type
//! implementing [`LatticeMapping`] can serve, and [`CoordinateTable`]
//! builds one from externally supplied rows (typically a JSON file),
//! validating the bijection up front.
//!
//! [`CoordinateTable::balanced`] ships a reference instance (each bigram
//! contributes one digit to each axis, read as balanced ternary with the
//! core digits most significant) so lattice-dependent laws such as axial
//! resonance can be exercised without an external file.

use crate::ternary::{Digit, Ditrune};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use thiserror::Error;

/// One coordinate on the bounded lattice, x, y ∈ [−13, 13].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LatticeCell {
    x: i8,
    y: i8,
}

impl fmt::Debug for LatticeCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for LatticeCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl LatticeCell {
    /// Smallest coordinate on either axis.
    pub const MIN_COORD: i8 = -13;

    /// Largest coordinate on either axis.
    pub const MAX_COORD: i8 = 13;

    /// Cells per side.
    pub const SIDE: usize = 27;

    /// The origin, which always holds value 0.
    pub const ORIGIN: LatticeCell = LatticeCell { x: 0, y: 0 };

    /// Create a cell, returning None when either coordinate is out of range.
    #[inline]
    pub const fn new(x: i8, y: i8) -> Option<Self> {
        if x < Self::MIN_COORD || x > Self::MAX_COORD || y < Self::MIN_COORD || y > Self::MAX_COORD
        {
            return None;
        }
        Some(LatticeCell { x, y })
    }

    #[inline]
    pub const fn x(self) -> i8 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> i8 {
        self.y
    }

    /// Axis cells sit on x = 0 or y = 0.
    #[inline]
    pub const fn is_axis(self) -> bool {
        self.x == 0 || self.y == 0
    }

    #[inline]
    pub const fn is_origin(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Dense index in 0..729 for table storage.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.x - Self::MIN_COORD) as usize * Self::SIDE + (self.y - Self::MIN_COORD) as usize
    }
}

/// Placement contract: a bijection between ditrunes and lattice cells.
///
/// Implementations guarantee `ditrune_at(cell_of(d)) == d` for every value
/// and `cell_of(ditrune_at(c)) == c` for every in-range cell, with the
/// origin holding value 0. `CoordinateTable` enforces this at construction;
/// hand-written implementations are expected to pass
/// [`crate::transition::verify_axial_resonance`] and the same round-trip.
pub trait LatticeMapping {
    /// The cell holding this ditrune.
    fn cell_of(&self, ditrune: Ditrune) -> LatticeCell;

    /// The ditrune at this cell.
    fn ditrune_at(&self, cell: LatticeCell) -> Ditrune;
}

/// One injected placement row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub value: u16,
    pub x: i8,
    pub y: i8,
}

/// Errors raised while building a coordinate table from injected rows.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read coordinate table: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed coordinate table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("row value {value} is outside the ditrune domain 0..=728")]
    ValueOutOfRange { value: u16 },

    #[error("row for value {value}: coordinate ({x}, {y}) is outside the 27x27 lattice")]
    CoordinateOutOfRange { value: u16, x: i8, y: i8 },

    #[error("value {value} appears in more than one row")]
    DuplicateValue { value: u16 },

    #[error("cell ({x}, {y}) appears in more than one row")]
    DuplicateCell { x: i8, y: i8 },

    #[error("table covers {count} of 729 values")]
    Incomplete { count: usize },

    #[error("origin (0, 0) holds value {found}, expected 0")]
    OriginMismatch { found: u16 },
}

/// Validated, immutable placement table: the data-driven [`LatticeMapping`].
///
/// Built once from injected rows and shared read-only afterwards; lookups
/// in both directions are constant-time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoordinateTable {
    /// Cell per value, indexed by value.
    forward: Vec<LatticeCell>,
    /// Value per cell, indexed by dense cell index.
    reverse: Vec<u16>,
}

impl CoordinateTable {
    /// Build a table from rows, validating the full bijection contract.
    pub fn from_rows<I>(rows: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = TableRow>,
    {
        let absent = LatticeCell::ORIGIN;
        let mut forward = vec![absent; Ditrune::COUNT as usize];
        let mut seen_value = vec![false; Ditrune::COUNT as usize];
        let mut reverse = vec![0u16; LatticeCell::SIDE * LatticeCell::SIDE];
        let mut seen_cell = vec![false; LatticeCell::SIDE * LatticeCell::SIDE];
        let mut count = 0usize;

        for row in rows {
            if row.value > Ditrune::MAX_VALUE {
                return Err(TableError::ValueOutOfRange { value: row.value });
            }
            let cell = LatticeCell::new(row.x, row.y).ok_or(TableError::CoordinateOutOfRange {
                value: row.value,
                x: row.x,
                y: row.y,
            })?;
            let v = row.value as usize;
            if seen_value[v] {
                return Err(TableError::DuplicateValue { value: row.value });
            }
            if seen_cell[cell.index()] {
                return Err(TableError::DuplicateCell { x: row.x, y: row.y });
            }
            seen_value[v] = true;
            seen_cell[cell.index()] = true;
            forward[v] = cell;
            reverse[cell.index()] = row.value;
            count += 1;
        }

        if count != Ditrune::COUNT as usize {
            return Err(TableError::Incomplete { count });
        }
        let at_origin = reverse[LatticeCell::ORIGIN.index()];
        if at_origin != 0 {
            return Err(TableError::OriginMismatch { found: at_origin });
        }

        #[cfg(feature = "logging")]
        tracing::debug!(rows = count, "coordinate table validated");

        Ok(CoordinateTable { forward, reverse })
    }

    /// Load a table from a JSON reader (an array of `{value, x, y}` rows).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let rows: Vec<TableRow> = serde_json::from_reader(reader)?;
        Self::from_rows(rows)
    }

    /// Load a table from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Write the table as pretty-printed JSON rows, ordered by value.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), TableError> {
        serde_json::to_writer_pretty(writer, &self.rows())?;
        Ok(())
    }

    /// The rows of this table, ordered by value.
    pub fn rows(&self) -> Vec<TableRow> {
        self.forward
            .iter()
            .enumerate()
            .map(|(value, cell)| TableRow {
                value: value as u16,
                x: cell.x(),
                y: cell.y(),
            })
            .collect()
    }

    /// The built-in balanced-ternary reference table.
    ///
    /// Each bigram contributes its first digit to the x axis and its second
    /// to the y axis, digits read as balanced ternary (0 → 0, 1 → +1,
    /// 2 → −1) with the core digits most significant:
    ///
    /// ```text
    /// x = 9·b(d3) + 3·b(d2) + b(d1)
    /// y = 9·b(d4) + 3·b(d5) + b(d6)
    /// ```
    ///
    /// Under this reading the conrune transform is a point reflection
    /// through the origin and the core bigram picks the 3×3 macro sector.
    pub fn balanced() -> Self {
        let rows = Ditrune::domain().map(|d| {
            let g = d.digits();
            TableRow {
                value: d.value(),
                x: 9 * balanced(g[2]) + 3 * balanced(g[1]) + balanced(g[0]),
                y: 9 * balanced(g[3]) + 3 * balanced(g[4]) + balanced(g[5]),
            }
        });
        match Self::from_rows(rows) {
            Ok(table) => table,
            // The generator emits each value once and distinct balanced
            // digit vectors land on distinct cells.
            Err(_) => unreachable!(),
        }
    }
}

/// Balanced reading of a digit: 0 → 0, 1 → +1, 2 → −1.
#[inline]
const fn balanced(d: Digit) -> i8 {
    match d {
        Digit::Zero => 0,
        Digit::One => 1,
        Digit::Two => -1,
    }
}

impl LatticeMapping for CoordinateTable {
    #[inline]
    fn cell_of(&self, ditrune: Ditrune) -> LatticeCell {
        self.forward[ditrune.value() as usize]
    }

    #[inline]
    fn ditrune_at(&self, cell: LatticeCell) -> Ditrune {
        Ditrune::from_value_raw(self.reverse[cell.index()])
    }
}
