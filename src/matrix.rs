use crate::foundation::error::{QrPaintError, QrPaintResult};

/// Smallest symbol side produced by a QR encoder (version 1).
pub const MIN_SIDE: usize = 21;

/// Side of a positional detection pattern, in modules.
pub const EYE_SIDE: usize = 7;

/// Square grid of dark/light modules produced by a symbol encoder.
///
/// Indexed `[row][col]` with the origin at the top-left. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleMatrix {
    side: usize,
    modules: Vec<bool>,
}

impl ModuleMatrix {
    /// Build a matrix from row vectors. `true` marks a dark module.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> QrPaintResult<Self> {
        let side = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != side) {
            return Err(QrPaintError::validation(format!(
                "module matrix must be square: row {i} has {} modules, expected {side}",
                row.len()
            )));
        }
        Self::validate_side(side)?;
        Ok(Self {
            side,
            modules: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a matrix of side `side` by querying `is_dark(row, col)` for every cell.
    pub fn from_fn(side: usize, mut is_dark: impl FnMut(usize, usize) -> bool) -> QrPaintResult<Self> {
        Self::validate_side(side)?;
        let mut modules = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                modules.push(is_dark(row, col));
            }
        }
        Ok(Self { side, modules })
    }

    fn validate_side(side: usize) -> QrPaintResult<()> {
        if side < MIN_SIDE {
            return Err(QrPaintError::validation(format!(
                "module matrix side must be >= {MIN_SIDE} (got {side})"
            )));
        }
        if side % 2 == 0 {
            return Err(QrPaintError::validation(format!(
                "module matrix side must be odd (got {side})"
            )));
        }
        Ok(())
    }

    /// Number of modules per side.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Whether the module at `(row, col)` is dark. Out-of-range cells are light.
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        row < self.side && col < self.side && self.modules[row * self.side + col]
    }

    /// Total number of dark modules.
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }

    /// The three positional-pattern anchors of this matrix.
    pub fn eye_zones(&self) -> [EyeZone; 3] {
        EyeZone::for_side(self.side)
    }
}

/// Top-left anchor of a 7x7 positional block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EyeZone {
    /// Anchor row.
    pub row: usize,
    /// Anchor column.
    pub col: usize,
}

impl EyeZone {
    /// Zones in paint order: top-left, top-right, bottom-left.
    pub fn for_side(side: usize) -> [Self; 3] {
        let far = side.saturating_sub(EYE_SIDE);
        [
            Self { row: 0, col: 0 },
            Self { row: 0, col: far },
            Self { row: far, col: 0 },
        ]
    }

    /// Inclusive containment test used to keep data modules off the eyes.
    ///
    /// The bound is `anchor + 7` on both axes, so the excluded block is 8x8 and also covers
    /// the separator row/column next to the pattern.
    pub fn contains(self, row: usize, col: usize) -> bool {
        row >= self.row
            && row <= self.row + EYE_SIDE
            && col >= self.col
            && col <= self.col + EYE_SIDE
    }
}

/// Whether `(row, col)` falls inside any of `zones`.
pub fn in_any_eye_zone(row: usize, col: usize, zones: &[EyeZone]) -> bool {
    zones.iter().any(|z| z.contains(row, col))
}

#[cfg(test)]
#[path = "../tests/unit/matrix.rs"]
mod tests;
