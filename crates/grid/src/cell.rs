//! Runtime wind cells and the in-wind classification

use nalgebra::Vector3;

/// Whether a cell takes part in photon transport
///
/// The integer codes are the ones carried by imported model files. After
/// materialization only [InWind::Inwind] and [InWind::Ignore] survive, so
/// the transport loop has a single branch per interaction site.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum InWind {
    /// Cell is entirely in the wind; photons may interact here
    Inwind = 0,
    /// Cell straddles the wind boundary
    PartInwind = 1,
    /// Cell is outside the wind region
    #[default]
    NotInwind = -1,
    /// Cell is to be skipped by transport
    Ignore = -2,
}

impl InWind {
    /// Map a model-file classification code to a variant
    ///
    /// Anything unrecognised is treated as outside the wind.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => InWind::Inwind,
            1 => InWind::PartInwind,
            -2 => InWind::Ignore,
            _ => InWind::NotInwind,
        }
    }

    /// The integer code written back to model files
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// True only for cells photons may interact in
    pub fn is_active(&self) -> bool {
        matches!(self, InWind::Inwind)
    }

    /// Collapse the classification for the runtime grid
    ///
    /// For imported models a cell is either in the wind or not; partial and
    /// not-in-wind cells both become [InWind::Ignore].
    pub fn collapsed(&self) -> Self {
        match self {
            InWind::Inwind => InWind::Inwind,
            _ => InWind::Ignore,
        }
    }
}

/// One cell of the runtime wind grid
///
/// Positions and velocities refer to the edge corner of the cell; `rcen`,
/// `thetacen`, and `xcen` give the cell centre. The wind is axisymmetric
/// and represented in the meridional (x, z) half-plane, so `x[1]` is zero
/// by construction and only the velocity carries a y-component.
#[derive(Debug, Clone, PartialEq)]
pub struct WindCell {
    /// Edge-corner radius \[cm\]
    pub r: f64,
    /// Edge-corner polar angle from +z \[deg\]
    pub theta: f64,
    /// Edge-corner cartesian position \[cm\]
    pub x: Vector3<f64>,
    /// Velocity at the edge corner \[cm/s\]
    pub v: Vector3<f64>,
    /// Cell-centre radius \[cm\]
    pub rcen: f64,
    /// Cell-centre polar angle \[deg\]
    pub thetacen: f64,
    /// Cell-centre cartesian position \[cm\]
    pub xcen: Vector3<f64>,
    /// Transport classification
    pub inwind: InWind,
    /// Geometric nudge distance for the repositioner \[cm\]
    ///
    /// Strictly positive and small relative to the cell size.
    pub dfudge: f64,
    /// Back-index to the owning domain
    pub ndom: usize,
}

impl Default for WindCell {
    fn default() -> Self {
        Self {
            r: 0.0,
            theta: 0.0,
            x: Vector3::zeros(),
            v: Vector3::zeros(),
            rcen: 0.0,
            thetacen: 0.0,
            xcen: Vector3::zeros(),
            inwind: InWind::NotInwind,
            dfudge: 0.0,
            ndom: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for inwind in [
            InWind::Inwind,
            InWind::PartInwind,
            InWind::NotInwind,
            InWind::Ignore,
        ] {
            assert_eq!(InWind::from_code(inwind.code()), inwind);
        }
        // unknown codes fall back to not-in-wind
        assert_eq!(InWind::from_code(7), InWind::NotInwind);
    }

    #[test]
    fn collapse_leaves_two_states() {
        assert_eq!(InWind::Inwind.collapsed(), InWind::Inwind);
        assert_eq!(InWind::PartInwind.collapsed(), InWind::Ignore);
        assert_eq!(InWind::NotInwind.collapsed(), InWind::Ignore);
        assert_eq!(InWind::Ignore.collapsed(), InWind::Ignore);
    }
}
