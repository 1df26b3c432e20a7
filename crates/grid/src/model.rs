//! The imported wind model as read from file

use crate::cell::InWind;
use crate::domain::to_polar;
use crate::error::Result;

use wtools_utils::{f, EdgeExt};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nalgebra::Vector3;

/// Hard limit on cells per imported 2D model
///
/// Grids larger than this are almost certainly a malformed file; a genuine
/// model of this size needs the limit raised and a recompile.
pub const NDIM_MAX2D: usize = 500 * 500;

/// Electron temperature assigned when a model omits temperatures \[K\]
///
/// Matches the default wind temperature of the bootstrap profile. The
/// radiation temperature defaults to 1.1x this value.
pub const DEFAULT_IMPORT_TEMPERATURE: f64 = 4.0e4;

/// One record of an imported model
///
/// Positions and velocities are edge-corner quantities; the density and
/// temperatures refer to the cell centre. Velocities are cartesian as
/// measured in the meridional (x, z) plane, with the y-component carried
/// through for rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCell {
    /// Radial cell index
    pub i: usize,
    /// Angular cell index
    pub j: usize,
    /// Wind classification
    pub inwind: InWind,
    /// Edge-corner radius \[cm\]
    pub r: f64,
    /// Edge-corner polar angle from +z \[deg\]
    pub theta: f64,
    /// Velocity at the edge corner \[cm/s\]
    pub v: Vector3<f64>,
    /// Cell-centre density \[g/cm^3\]
    pub rho: f64,
    /// Electron temperature \[K\]
    pub t_e: f64,
    /// Radiation temperature \[K\]
    pub t_r: f64,
}

/// A tabulated wind model in polar (r, theta) coordinates
///
/// Built once by [read_rtheta_model](crate::read_rtheta_model) and immutable
/// afterwards. The edge arrays are recovered from the record order: records
/// with `i == 0` walk the angular edges and records with `j == 0` walk the
/// radial edges. Cell-centre coordinates are derived from the edges, with
/// the outermost midpoint extrapolated by the final spacing to cover the
/// guard layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportedModel {
    /// Cell count in the radial dimension
    pub ndim: usize,
    /// Cell count in the angular dimension
    pub mdim: usize,
    /// All records in file order
    pub cells: Vec<ModelCell>,
    /// Radial cell edges \[cm\]
    pub wind_x: Vec<f64>,
    /// Angular cell edges \[deg\]
    pub wind_z: Vec<f64>,
    /// Cell-centre radial coordinates \[cm\]
    pub wind_midx: Vec<f64>,
    /// Cell-centre angular coordinates \[deg\]
    pub wind_midz: Vec<f64>,
}

impl ImportedModel {
    /// Number of records read
    pub fn ncell(&self) -> usize {
        self.cells.len()
    }

    /// Model density at a position
    ///
    /// Nearest-cell lookup with no interpolation: the position is folded
    /// into (r, theta) and the record below both enclosing edges is
    /// returned. Density seeds the plasma structure once; the transport
    /// step interpolates on derived plasma quantities, never on this table.
    pub fn rho_at(&self, x: &Vector3<f64>) -> f64 {
        let (r, theta) = to_polar(x);
        let i = self.wind_z.find_below(theta).unwrap_or(0);
        let j = self.wind_x.find_below(r).unwrap_or(0);
        self.cells[j * self.mdim + i].rho
    }

    /// Write the model back out in the import format
    ///
    /// Emits the full 11-column form (temperatures included), one cell per
    /// line, so that re-importing reproduces this model.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        writeln!(out, "# i j inwind r theta v_x v_y v_z rho t_e t_r")?;
        for cell in &self.cells {
            writeln!(
                out,
                "{} {} {} {:.8e} {:.8e} {:.8e} {:.8e} {:.8e} {:.8e} {:.8e} {:.8e}",
                cell.i,
                cell.j,
                cell.inwind.code(),
                cell.r,
                cell.theta,
                cell.v[0],
                cell.v[1],
                cell.v[2],
                cell.rho,
                cell.t_e,
                cell.t_r,
            )?;
        }
        Ok(())
    }

    /// Derive the edge and midpoint arrays from the records
    ///
    /// Called by the reader once all records are in. Relies on the records
    /// appearing in natural order so the edges come out monotonic; that is
    /// checked and surfaced as an error rather than assumed.
    pub(crate) fn derive_edges(&mut self) -> Result<()> {
        self.wind_x.clear();
        self.wind_z.clear();
        for cell in &self.cells {
            if cell.i == 0 {
                self.wind_z.push(cell.theta);
            }
            if cell.j == 0 {
                self.wind_x.push(cell.r);
            }
        }
        self.wind_x.ensure_increasing()?;
        self.wind_z.ensure_increasing()?;

        self.wind_midx = midpoints(&self.wind_x);
        self.wind_midz = midpoints(&self.wind_z);
        Ok(())
    }
}

impl std::fmt::Display for ImportedModel {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            fmt,
            "{}",
            f!(
                " > ImportedModel [polar, {} x {} cells, r {:.3e} - {:.3e} cm]",
                self.ndim,
                self.mdim,
                self.wind_x.first().copied().unwrap_or(0.0),
                self.wind_x.last().copied().unwrap_or(0.0)
            )
        )
    }
}

/// Pairwise midpoints, extrapolating the last entry by the final spacing
///
/// The extrapolated entry gives the guard row/column a usable centre even
/// though no outer edge exists for it.
fn midpoints(edges: &[f64]) -> Vec<f64> {
    match edges.len() {
        0 => Vec::new(),
        1 => vec![edges[0]],
        n => {
            let mut mid: Vec<f64> = edges.windows(2).map(|w| 0.5 * (w[0] + w[1])).collect();
            mid.push(edges[n - 1] + 0.5 * (edges[n - 1] - edges[n - 2]));
            mid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn midpoints_extrapolate_the_last_spacing() {
        let mid = midpoints(&[10.0, 45.0, 80.0]);
        assert_eq!(mid.len(), 3);
        assert_relative_eq!(mid[0], 27.5);
        assert_relative_eq!(mid[1], 62.5);
        assert_relative_eq!(mid[2], 97.5);
    }

    #[test]
    fn interior_midpoints_sit_between_their_edges() {
        let edges = [1.0e10, 2.0e10, 3.5e10, 4.0e10];
        let mid = midpoints(&edges);
        for k in 0..edges.len() - 1 {
            assert!(edges[k] < mid[k] && mid[k] < edges[k + 1]);
        }
    }
}
