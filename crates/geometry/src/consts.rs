//! Physical constants in cgs units
//!
//! Everything downstream works in cgs: lengths in cm, masses in g,
//! temperatures in K, time in s. Values match the working precision of the
//! rest of the code rather than CODATA's last digit.

/// Solar mass \[g\]
pub const MSOL: f64 = 1.989e33;

/// Seconds per year
pub const YR: f64 = 3.1556925e7;

/// Planck constant \[erg s\]
pub const PLANCK: f64 = 6.6262e-27;

/// Boltzmann constant \[erg/K\]
pub const BOLTZMANN: f64 = 1.38062e-16;

/// Stefan-Boltzmann constant \[erg cm^-2 s^-1 K^-4\]
pub const STEFAN_BOLTZMANN: f64 = 5.6696e-5;

/// Degrees per radian
pub const RADIAN: f64 = 57.29577951308232;

/// A number larger than any physical length or rate in the problem
///
/// Used to seed running minima before the first comparison.
pub const VERY_BIG: f64 = 1e50;

/// Wien-law peak of x = h nu / kT for a blackbody, used to convert a
/// flux-weighted mean frequency back to a temperature
pub const WIEN_PEAK: f64 = 3.832;
