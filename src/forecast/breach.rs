//! forecast::breach — limit checks on a confidence band.
//!
//! Purpose
//! -------
//! Flag whether the forecast's uncertainty envelope can leave a fixed
//! corridor: the upper band edge against an upper limit, the lower edge
//! against a lower limit. Limits come from configuration; this module
//! never supplies its own.
use crate::forecast::band::ConfidenceBand;

/// Outcome of checking a confidence band against fixed limits.
///
/// Fields
/// ------
/// - `breach_upper`: any upper band value strictly above the upper limit.
/// - `breach_lower`: any lower band value strictly below the lower limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreachReport {
    pub breach_upper: bool,
    pub breach_lower: bool,
}

impl BreachReport {
    /// True if either side of the corridor is breached.
    pub fn any(&self) -> bool {
        self.breach_upper || self.breach_lower
    }
}

/// Check a band against an upper and a lower limit.
pub fn check_breach(band: &ConfidenceBand, upper_limit: f64, lower_limit: f64) -> BreachReport {
    BreachReport {
        breach_upper: band.upper.iter().any(|&u| u > upper_limit),
        breach_lower: band.lower.iter().any(|&l| l < lower_limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Breach detection on each side independently and the strictness
    //   of the comparison at the limit itself.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that each side is flagged independently.
    //
    // Given
    // -----
    // - A band whose upper edge exceeds +1 at one step while the lower
    //   edge stays above -1.
    //
    // Expect
    // ------
    // - breach_upper = true, breach_lower = false, any() = true.
    fn sides_are_checked_independently() {
        // Arrange
        let band = ConfidenceBand { lower: array![-0.5, -0.9], upper: array![0.8, 1.2] };

        // Act
        let report = check_breach(&band, 1.0, -1.0);

        // Assert
        assert_eq!(report, BreachReport { breach_upper: true, breach_lower: false });
        assert!(report.any());
    }

    #[test]
    // Purpose
    // -------
    // Verify that touching a limit exactly is not a breach.
    //
    // Given
    // -----
    // - A band whose edges sit exactly on ±1.
    //
    // Expect
    // ------
    // - No breach on either side.
    fn touching_the_limit_is_not_a_breach() {
        // Arrange
        let band = ConfidenceBand { lower: array![-1.0, 0.0], upper: array![0.0, 1.0] };

        // Act
        let report = check_breach(&band, 1.0, -1.0);

        // Assert
        assert_eq!(report, BreachReport { breach_upper: false, breach_lower: false });
        assert!(!report.any());
    }
}
