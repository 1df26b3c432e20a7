//! Sanity checks on freshly generated photon distributions

use crate::error::{Error, Result};
use crate::photon::Photon;

use wtools_geometry::consts::PLANCK;
use wtools_geometry::Geometry;

use log::{debug, error};

/// Bad packets tolerated before the run is abandoned
pub const MAX_BAD_PHOTONS: usize = 100;

/// Source tags at and above this mark macro-atom reprocessed packets
const ORIGIN_MATOM: u32 = 10;

/// Check a photon distribution just after generation
///
/// Doppler shifts can carry packets generated hard against a band edge out
/// of the nominal range, so the window is widened to `[0.6 freqmin,
/// 1.8 freqmax]` before checking. Packets with non-finite frequency or
/// weight, and primary-source packets outside the widened window, are
/// clamped to the window maximum and counted; more than [MAX_BAD_PHOTONS]
/// offenders abandons the run. Macro-atom packets are exempt from the range
/// check since reprocessing routinely shifts them far.
///
/// On the way through, packet serials are assigned and the ionizing-photon
/// accumulators on the geometry are rebuilt for every packet above
/// `ion_threshold` (the ground ionization potential, in erg).
///
/// Returns the number of bad packets.
pub fn photon_checks(
    geo: &mut Geometry,
    photons: &mut [Photon],
    freqmin: f64,
    freqmax: f64,
    ion_threshold: f64,
    comment: &str,
) -> Result<usize> {
    debug!("photon_checks: {comment}");

    geo.reset_ionizing();
    let freqmax = freqmax * 1.8;
    let freqmin = freqmin * 0.6;

    let mut nbad = 0;
    let mut labelled = false;
    let mut label = |nbad: &mut usize| {
        if !labelled {
            error!("photon_checks: nphot  origin  freq     freqmin    freqmax");
            labelled = true;
        }
        *nbad += 1;
    };

    for (nn, photon) in photons.iter_mut().enumerate() {
        photon.np = nn;

        if PLANCK * photon.freq > ion_threshold {
            geo.lum_ioniz += photon.w;
            geo.n_ioniz += photon.w / (PLANCK * photon.freq);
        }

        if !photon.freq.is_finite() || !photon.w.is_finite() {
            label(&mut nbad);
            error!(
                "photon_checks: {:6} {:5} {:10.4e} {:10.4e} {:10.4e} w {:10.4e} undefined",
                nn, photon.origin, photon.freq, freqmin, freqmax, photon.w
            );
            photon.freq = freqmax;
        } else if photon.origin < ORIGIN_MATOM
            && (photon.freq < freqmin || photon.freq > freqmax)
        {
            label(&mut nbad);
            error!(
                "photon_checks: {:6} {:5} {:10.4e} {:10.4e} {:10.4e} freq out of range",
                nn, photon.origin, photon.freq, freqmin, freqmax
            );
            photon.freq = freqmax;
        }

        if nbad > MAX_BAD_PHOTONS {
            return Err(Error::TooManyBadPhotons(nbad));
        }
    }

    if nbad == 0 {
        debug!("photon_checks: all photons passed checks successfully");
    }
    Ok(nbad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn photon(freq: f64) -> Photon {
        Photon {
            freq,
            w: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn window_is_widened_before_checking() {
        let mut geo = Geometry::default();
        // nominal band 1e15 - 2e15; 1.7x the max is inside the widened window
        let mut photons = vec![photon(0.7e15), photon(3.4e15)];
        let nbad = photon_checks(&mut geo, &mut photons, 1.0e15, 2.0e15, f64::MAX, "test")
            .unwrap();
        assert_eq!(nbad, 0);
        assert_relative_eq!(photons[1].freq, 3.4e15);
    }

    #[test]
    fn out_of_range_packets_are_clamped() {
        let mut geo = Geometry::default();
        let mut photons = vec![photon(1.0e15), photon(9.9e15), photon(f64::NAN)];
        let nbad = photon_checks(&mut geo, &mut photons, 1.0e15, 2.0e15, f64::MAX, "test")
            .unwrap();
        assert_eq!(nbad, 2);
        assert_relative_eq!(photons[1].freq, 3.6e15); // widened maximum
        assert_relative_eq!(photons[2].freq, 3.6e15);
        // serials were assigned along the way
        assert_eq!(photons[2].np, 2);
    }

    #[test]
    fn matom_packets_skip_the_range_check() {
        let mut geo = Geometry::default();
        let mut photons = vec![Photon {
            freq: 9.9e15,
            origin: 10,
            ..Default::default()
        }];
        let nbad = photon_checks(&mut geo, &mut photons, 1.0e15, 2.0e15, f64::MAX, "test")
            .unwrap();
        assert_eq!(nbad, 0);
    }

    #[test]
    fn ionizing_accumulators_are_rebuilt() {
        let mut geo = Geometry::default();
        geo.lum_ioniz = 99.0; // stale value from a previous cycle
        let mut photons = vec![photon(1.5e15), photon(1.8e15)];
        // threshold below both packet energies: both count
        let threshold = PLANCK * 1.0e15;
        photon_checks(&mut geo, &mut photons, 1.0e15, 2.0e15, threshold, "test").unwrap();
        assert_relative_eq!(geo.lum_ioniz, 2.0);
        let expected = 1.0 / (PLANCK * 1.5e15) + 1.0 / (PLANCK * 1.8e15);
        assert_relative_eq!(geo.n_ioniz, expected, max_relative = 1e-12);
    }

    #[test]
    fn too_many_bad_packets_is_fatal() {
        let mut geo = Geometry::default();
        let mut photons: Vec<Photon> = (0..MAX_BAD_PHOTONS + 2).map(|_| photon(1.0)).collect();
        let result = photon_checks(&mut geo, &mut photons, 1.0e15, 2.0e15, f64::MAX, "test");
        assert!(matches!(result, Err(Error::TooManyBadPhotons(_))));
    }
}
