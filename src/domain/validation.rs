//! Geometric consistency rules for tower sections and their shells

use super::errors::ValidationError;
use super::repositories::{DiameterRange, NewShell};

/// Section-level values derived from its shells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub bottom_diameter: f64,
    pub top_diameter: f64,
    pub length: f64,
}

impl SectionGeometry {
    /// Derive geometry from shells already sorted by position.
    /// Returns `None` for an empty slice.
    pub fn from_shells(shells: &[NewShell]) -> Option<Self> {
        let first = shells.first()?;
        let last = shells.last()?;
        Some(Self {
            bottom_diameter: first.bottom_diameter,
            top_diameter: last.top_diameter,
            length: shells.iter().map(|s| s.height).sum(),
        })
    }
}

/// Sort shells by position and check them against the section rules.
///
/// Rules are checked in order: positions are exactly `1..=N`, adjacent
/// diameters meet, every dimension is a positive number. The first broken
/// rule is returned.
pub fn validate_shells(mut shells: Vec<NewShell>) -> Result<Vec<NewShell>, ValidationError> {
    shells.sort_by_key(|s| s.position);

    let sequential = shells
        .iter()
        .zip(1..)
        .all(|(shell, expected)| shell.position == expected);
    if !sequential {
        return Err(ValidationError::NonSequentialPositions);
    }

    for pair in shells.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        if lower.top_diameter != upper.bottom_diameter {
            return Err(ValidationError::DiscontinuousDiameters {
                lower: lower.position,
                upper: upper.position,
                top: lower.top_diameter,
                bottom: upper.bottom_diameter,
            });
        }
    }

    for shell in &shells {
        let dimensions = [
            ("height", shell.height),
            ("bottom_diameter", shell.bottom_diameter),
            ("top_diameter", shell.top_diameter),
            ("thickness", shell.thickness),
            ("density", shell.density),
        ];
        if let Some((field, _)) = dimensions
            .into_iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            return Err(ValidationError::NonPositiveDimension {
                position: shell.position,
                field,
            });
        }
    }

    Ok(shells)
}

/// Trim a part number and reject it if nothing is left
pub fn validate_part_number(part_number: &str) -> Result<String, ValidationError> {
    let trimmed = part_number.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankPartNumber);
    }
    Ok(trimmed.to_string())
}

impl DiameterRange {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, bound) in [("min_diameter", self.min), ("max_diameter", self.max)] {
            if let Some(value) = bound
                && !(value.is_finite() && value >= 0.0)
            {
                return Err(ValidationError::InvalidDiameterRange(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }

        if let (Some(min), Some(max)) = (self.min, self.max)
            && min > max
        {
            return Err(ValidationError::InvalidDiameterRange(format!(
                "min_diameter {min} is greater than max_diameter {max}"
            )));
        }

        Ok(())
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}
