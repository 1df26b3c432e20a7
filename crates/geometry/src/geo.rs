//! The process-wide geometry record

use crate::consts::{MSOL, YR};
use crate::spectype::{DiskType, IonizationMode, LineMode, RunType, SpecType};

use nalgebra::Vector3;

/// Process-wide geometry and units state
///
/// One record holds every default the downstream routines presume: system
/// dimensions and masses, component temperatures, which sources radiate and
/// with what spectrum, and the coordinate axes. All values are cgs so that
/// restarted runs are consistent with saved state.
///
/// The record is built once at bootstrap (via [Default] plus whatever the
/// parameter file overrides) and passed around as `&Geometry` afterwards.
/// Only the macro-atom totals and the ionizing-photon accumulators are
/// updated later, by the emissivity kernel and the photon checks between
/// cycles.
///
/// The defaults describe the canonical cataclysmic-variable profile: a 0.8
/// solar-mass white dwarf accreting at 1e-8 solar masses per year with the
/// wind extending to 1e11 cm.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    /// Maximum extent of the wind \[cm\]
    pub rmax: f64,
    /// `rmax` squared, cached for the transport inner loop
    pub rmax_sq: f64,
    /// Radius of the central star \[cm\]
    pub rstar: f64,
    /// `rstar` squared
    pub rstar_sq: f64,
    /// Mass of the central star \[g\]
    pub mstar: f64,
    /// Mass of the secondary \[g\]
    pub m_sec: f64,
    /// Orbital period \[s\]
    pub period: f64,
    /// Effective temperature of the star \[K\]
    pub tstar: f64,
    /// Initial wind temperature \[K\]
    pub twind: f64,
    /// Boundary-layer temperature \[K\]
    pub t_bl: f64,

    /// Disk treatment for absorption
    pub disk_type: DiskType,
    /// Outer radius of the disk \[cm\]
    pub diskrad: f64,
    /// Disk accretion rate \[g/s\]
    pub disk_mdot: f64,
    /// Disk height at the inner edge \[cm\]
    pub disk_z0: f64,
    /// Disk height scaling exponent
    pub disk_z1: f64,

    /// Ionization balance treatment
    pub ioniz_mode: IonizationMode,
    /// Line transfer treatment
    pub line_mode: LineMode,
    /// New run or a restart
    pub run_type: RunType,
    /// Include adiabatic cooling in the wind
    pub adiabatic: bool,
    /// Include Auger ionization
    pub auger_ionization: bool,

    /// Star contributes photons
    pub star_radiation: bool,
    /// Disk contributes photons
    pub disk_radiation: bool,
    /// Boundary layer contributes photons
    pub bl_radiation: bool,
    /// Wind itself contributes photons
    pub wind_radiation: bool,

    /// Star spectrum for the spectral cycles
    pub star_spectype: SpecType,
    /// Star spectrum for the ionization cycles
    pub star_ion_spectype: SpecType,
    /// Disk spectrum for the spectral cycles
    pub disk_spectype: SpecType,
    /// Disk spectrum for the ionization cycles
    pub disk_ion_spectype: SpecType,
    /// Boundary-layer spectrum for the spectral cycles
    pub bl_spectype: SpecType,
    /// Boundary-layer spectrum for the ionization cycles
    pub bl_ion_spectype: SpecType,
    /// AGN ionizing continuum
    pub agn_ion_spectype: SpecType,

    /// Total macro-atom luminosity over all cells \[erg/s\]
    pub f_matom: f64,
    /// Total k-packet luminosity over all cells \[erg/s\]
    pub f_kpkt: f64,
    /// Ionizing photon rate accumulated by the photon checks
    pub n_ioniz: f64,
    /// Ionizing luminosity accumulated by the photon checks
    pub lum_ioniz: f64,

    /// Unit vector along x
    pub x_axis: Vector3<f64>,
    /// Unit vector along y
    pub y_axis: Vector3<f64>,
    /// Unit vector along z
    pub z_axis: Vector3<f64>,
}

impl Default for Geometry {
    fn default() -> Self {
        let rmax = 1.0e11;
        let rstar = 7.0e8;
        Self {
            rmax,
            rmax_sq: rmax * rmax,
            rstar,
            rstar_sq: rstar * rstar,
            mstar: 0.8 * MSOL,
            m_sec: 0.4 * MSOL,
            period: 3.2 * 3600.0,
            tstar: 4.0e4,
            twind: 4.0e4,
            t_bl: 1.0e5,

            disk_type: DiskType::Flat,
            diskrad: 2.4e10,
            disk_mdot: 1.0e-8 * MSOL / YR,
            disk_z0: 0.0,
            disk_z1: 0.0,

            ioniz_mode: IonizationMode::Ml93,
            line_mode: LineMode::EscapeProbabilities,
            run_type: RunType::New,
            adiabatic: true,
            auger_ionization: true,

            star_radiation: true,
            disk_radiation: true,
            bl_radiation: false,
            wind_radiation: false,

            star_spectype: SpecType::Blackbody,
            star_ion_spectype: SpecType::Blackbody,
            disk_spectype: SpecType::Blackbody,
            disk_ion_spectype: SpecType::Blackbody,
            bl_spectype: SpecType::Blackbody,
            bl_ion_spectype: SpecType::Blackbody,
            agn_ion_spectype: SpecType::PowerLaw,

            f_matom: 0.0,
            f_kpkt: 0.0,
            n_ioniz: 0.0,
            lum_ioniz: 0.0,

            x_axis: Vector3::new(1.0, 0.0, 0.0),
            y_axis: Vector3::new(0.0, 1.0, 0.0),
            z_axis: Vector3::new(0.0, 0.0, 1.0),
        }
    }
}

impl Geometry {
    /// Reset the ionizing-photon accumulators before a fresh photon check
    pub fn reset_ionizing(&mut self) {
        self.n_ioniz = 0.0;
        self.lum_ioniz = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cv_defaults() {
        let geo = Geometry::default();
        assert_relative_eq!(geo.rmax, 1.0e11);
        assert_relative_eq!(geo.rstar, 7.0e8);
        assert_relative_eq!(geo.mstar, 0.8 * MSOL);
        assert_relative_eq!(geo.diskrad, 2.4e10);
        assert_relative_eq!(geo.tstar, 4.0e4);
        assert_relative_eq!(geo.t_bl, 1.0e5);
        assert_eq!(geo.ioniz_mode, IonizationMode::Ml93);
        assert_eq!(geo.line_mode, LineMode::EscapeProbabilities);
        assert_eq!(geo.disk_type, DiskType::Flat);
    }

    #[test]
    fn radiation_sources() {
        let geo = Geometry::default();
        assert!(geo.star_radiation && geo.disk_radiation);
        assert!(!geo.bl_radiation && !geo.wind_radiation);
        assert_eq!(geo.agn_ion_spectype, SpecType::PowerLaw);
        assert_eq!(geo.bl_ion_spectype, SpecType::Blackbody);
    }

    #[test]
    fn axes_are_unit_vectors() {
        let geo = Geometry::default();
        assert_eq!(geo.x_axis, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(geo.y_axis, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(geo.z_axis, Vector3::new(0.0, 0.0, 1.0));
    }
}
