//! Photon packets

use nalgebra::Vector3;

/// How a photon packet last scattered
///
/// Resonant scatters carry the index of the line that scattered them; the
/// repositioner uses this to know when a geometric nudge is needed so the
/// packet cannot interact with the same transition twice.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ScatterKind {
    /// Electron scattering, free-free, or no scatter yet
    #[default]
    NonResonant,
    /// Scattered by the discrete transition with this line index
    Resonant(usize),
}

impl ScatterKind {
    /// True for resonant line scatters
    pub fn is_resonant(&self) -> bool {
        matches!(self, ScatterKind::Resonant(_))
    }

    /// Line index of a resonant scatter
    pub fn line(&self) -> Option<usize> {
        match self {
            ScatterKind::Resonant(line) => Some(*line),
            ScatterKind::NonResonant => None,
        }
    }
}

/// A weighted Monte Carlo sample of monochromatic radiation
///
/// Packets are owned by the transport driver; the routines here mutate but
/// never allocate them. `grid` caches the last-known cell so spatial
/// resolution can start from the right domain.
///
/// Source tags below 10 are primary sources (star, boundary layer, disk,
/// wind, AGN); tags of 10 and above mark packets reprocessed by the
/// macro-atom machinery, which are exempt from frequency-window checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Photon {
    /// Position \[cm\]
    pub x: Vector3<f64>,
    /// Unit direction of travel
    pub lmn: Vector3<f64>,
    /// Frequency \[Hz\]
    pub freq: f64,
    /// Statistical weight \[erg/s\]
    pub w: f64,
    /// Source tag
    pub origin: u32,
    /// Last-known cell index in the runtime grid
    pub grid: usize,
    /// How the packet last scattered
    pub scatter: ScatterKind,
    /// Packet serial number
    pub np: usize,
}

impl Default for Photon {
    fn default() -> Self {
        Self {
            x: Vector3::zeros(),
            lmn: Vector3::new(0.0, 0.0, 1.0),
            freq: 0.0,
            w: 1.0,
            origin: 0,
            grid: 0,
            scatter: ScatterKind::NonResonant,
            np: 0,
        }
    }
}

impl Photon {
    /// Advance the packet a distance `ds` along its direction of travel
    pub fn move_along(&mut self, ds: f64) {
        self.x += ds * self.lmn;
    }
}
