//! Repositioning photons off resonant scatter sites

use crate::error::{Error, Result};
use crate::photon::Photon;

use wtools_grid::Wind;

use log::error;

/// Fraction of the distance to the disk plane a rescued photon travels
const DISK_RESCUE_FRACTION: f64 = 0.999;

/// Nudge a photon so it cannot scatter twice off the same transition
///
/// For resonant scatters the photon is advanced by the `dfudge` of the cell
/// it sits in; for non-resonant scatters nothing at all happens. A photon
/// that cannot be resolved to any cell is left untouched and surfaced as
/// [Error::PhotonNotInGrid] for the caller to discard or retry.
pub fn reposition(wind: &Wind, photon: &mut Photon) -> Result<()> {
    if !photon.scatter.is_resonant() {
        return Ok(());
    }

    let n = resolve_cell(wind, photon)?;
    photon.grid = n;
    photon.move_along(wind.cells[n].dfudge);

    Ok(())
}

/// Reposition a photon that `dfudge` would push through the disk
///
/// Advances the photon most of the way to the disk plane instead, so it
/// stays on its starting side. The same non-resonant guard and cell
/// resolution apply as for [reposition].
///
/// The caller must not hand over a photon travelling parallel to the disk
/// or already sitting on it; there is no distance to rescue in either case.
pub fn reposition_lost_disk_photon(wind: &Wind, photon: &mut Photon) -> Result<()> {
    if !photon.scatter.is_resonant() {
        return Ok(());
    }

    assert!(
        photon.lmn[2] != 0.0,
        "disk rescue needs a direction that crosses the disk plane"
    );
    assert!(
        photon.x[2] != 0.0,
        "disk rescue needs a photon off the disk plane"
    );

    let n = resolve_cell(wind, photon)?;
    photon.grid = n;

    let smax = -photon.x[2] / photon.lmn[2] * DISK_RESCUE_FRACTION;
    photon.move_along(smax);

    Ok(())
}

/// Resolve the photon's current cell, logging the anomaly on failure
fn resolve_cell(wind: &Wind, photon: &Photon) -> Result<usize> {
    let ndom = wind.cells[photon.grid].ndom;
    wind.where_in_grid(ndom, &photon.x).map_err(|_| {
        error!(
            "reposition: photon {} not in grid when routine entered",
            photon.np
        );
        Error::PhotonNotInGrid { np: photon.np }
    })
}
