//! The runtime wind: flat cell array plus its domains

use crate::cell::WindCell;
use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::model::ImportedModel;

use wtools_geometry::consts::RADIAN;
use wtools_utils::EdgeExt;

use log::{error, info};
use nalgebra::Vector3;

/// Fraction of the smallest cell dimension used for the repositioning nudge
const DFUDGE_FRACTION: f64 = 1.0e-3;

/// The runtime wind grid
///
/// A flat array of [WindCell]s shared by every domain, plus the [Domain]
/// records describing each region. Cell `n` of domain `d` lives at
/// `domains[d].nstart + n`.
///
/// Materialization must complete before any field lookup or repositioning;
/// after it the grid is effectively immutable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wind {
    /// Every cell of every domain
    pub cells: Vec<WindCell>,
    /// The wind regions
    pub domains: Vec<Domain>,
}

impl Wind {
    /// An empty wind with no domains
    pub fn new() -> Self {
        Default::default()
    }

    /// Borrow a domain by index
    pub fn domain(&self, ndom: usize) -> Result<&Domain> {
        self.domains.get(ndom).ok_or(Error::DomainIndex(ndom))
    }

    /// Global cell index containing the position `x` in domain `ndom`
    pub fn where_in_grid(&self, ndom: usize, x: &Vector3<f64>) -> Result<usize> {
        let domain = self.domain(ndom)?;
        Ok(domain.nstart + domain.where_in_grid(x)?)
    }

    /// Interpolated wind velocity at a position
    ///
    /// Weighted sum of the neighbour velocities from the domain's
    /// fractional-cell resolver; returns the vector and its magnitude.
    /// Linear in the polar edge basis of the imported model, which is only
    /// used to seed the plasma structure.
    pub fn velocity(&self, ndom: usize, x: &Vector3<f64>) -> Result<(Vector3<f64>, f64)> {
        let domain = self.domain(ndom)?;
        let weights = domain.coord_fraction(x)?;

        let mut v = Vector3::zeros();
        for (n, frac) in weights.iter() {
            v += self.cells[domain.nstart + n].v * frac;
        }
        Ok((v, v.norm()))
    }

    /// Materialize an imported polar model as a new domain
    ///
    /// Projects the model onto the runtime cell array, derives the bounding
    /// box of the in-wind cells, and installs the wind cones. Returns the
    /// index of the new domain.
    pub fn materialize(&mut self, model: &ImportedModel) -> Result<usize> {
        let ndom = self.domains.len();
        let nstart = self.cells.len();

        let mut domain = Domain::polar(model.ndim, model.mdim, nstart);
        domain.wind_x = model.wind_x.clone();
        domain.wind_z = model.wind_z.clone();

        self.cells
            .resize(nstart + domain.ndim2, WindCell::default());
        self.project_cells(model, &domain, ndom);
        self.derive_bounds(model, &mut domain)?;
        domain.make_cones();

        info!("Imported:    rmin    rmax  {:e} {:e}", domain.rmin, domain.rmax);
        info!("Imported:    zmin    zmax  {:e} {:e}", domain.zmin, domain.zmax);
        info!(
            "Imported: rho_min rho_max  {:e} {:e}",
            domain.rho_min, domain.rho_max
        );

        self.domains.push(domain);
        Ok(ndom)
    }

    /// Copy every model record into its runtime cell
    fn project_cells(&mut self, model: &ImportedModel, domain: &Domain, ndom: usize) {
        for record in &model.cells {
            let nn = domain.nstart + domain.ij_to_n(record.i, record.j);
            let cell = &mut self.cells[nn];

            cell.r = record.r;
            cell.theta = record.theta;
            cell.x = polar_to_xyz(record.r, record.theta);
            cell.v = record.v;

            // one is either in the wind or not; everything else is skipped
            cell.inwind = record.inwind.collapsed();

            cell.rcen = model.wind_midx[record.i];
            cell.thetacen = model.wind_midz[record.j];
            cell.xcen = polar_to_xyz(cell.rcen, cell.thetacen);

            cell.dfudge = dfudge(model, record.i, record.j, cell.rcen);
            cell.ndom = ndom;
        }
    }

    /// Bounding box of the in-wind cells, published to the domain
    ///
    /// Outer extents come from the outer-radial neighbour `n + mdim`; if
    /// that neighbour runs past the grid the input file is missing its
    /// guard layer, which is logged but not fatal.
    fn derive_bounds(&self, model: &ImportedModel, domain: &mut Domain) -> Result<()> {
        for record in &model.cells {
            let nn = domain.ij_to_n(record.i, record.j);
            if !self.cells[domain.nstart + nn].inwind.is_active() {
                continue;
            }

            let nn_outer = nn + domain.mdim;
            if nn_outer + 1 >= domain.ndim2 {
                error!(
                    "derive_bounds: cell {} needs neighbour {} outside grid of {}; guard cells missing?",
                    nn,
                    nn_outer + 1,
                    domain.ndim2
                );
            }

            let cell = &self.cells[domain.nstart + nn];
            domain.rmin = domain.rmin.min(cell.x.norm());
            domain.rho_min = domain.rho_min.min(cell.x[0]);

            if nn_outer < domain.ndim2 {
                let outer = &self.cells[domain.nstart + nn_outer];
                domain.rmax = domain.rmax.max(outer.x.norm());
                domain.zmax = domain.zmax.max(outer.x[2]);
            }
            if nn_outer + 1 < domain.ndim2 {
                let corner = &self.cells[domain.nstart + nn_outer + 1];
                domain.rho_max = domain.rho_max.max(corner.x[0]);
            }
            if nn + 1 < domain.ndim2 {
                let below = self.cells[domain.nstart + nn + 1].x[2];
                if below < domain.zmin && below > 0.0 {
                    domain.zmin = below;
                }
            }
        }

        let ordered = domain.rmin <= domain.rmax
            && domain.rho_min <= domain.rho_max
            && domain.zmin <= domain.zmax;
        let bounds = [
            domain.rmin,
            domain.rmax,
            domain.rho_min,
            domain.rho_max,
            domain.zmin,
            domain.zmax,
        ];

        // try_max doubles as the finiteness check on the whole box
        if !ordered || bounds.try_max().is_err() {
            return Err(Error::DegenerateBounds);
        }
        Ok(())
    }
}

/// Edge or centre coordinates to a cartesian point in the meridional plane
fn polar_to_xyz(r: f64, theta: f64) -> Vector3<f64> {
    let theta = theta / RADIAN;
    Vector3::new(r * theta.sin(), 0.0, r * theta.cos())
}

/// Repositioning nudge for cell (i, j)
///
/// A fraction of the smaller of the radial extent and the angular arc at
/// the cell centre, so the nudge can never jump a neighbouring cell. Guard
/// cells at the outer boundary reuse the last interior spacing.
fn dfudge(model: &ImportedModel, i: usize, j: usize, rcen: f64) -> f64 {
    let dr = spacing(&model.wind_x, i);
    let dtheta = spacing(&model.wind_z, j);
    let arc = rcen * dtheta / RADIAN;
    let nudge = DFUDGE_FRACTION * dr.min(arc);
    if nudge > 0.0 {
        nudge
    } else {
        // degenerate single-edge grid; fall back to a fraction of the radius
        DFUDGE_FRACTION * rcen
    }
}

/// Width of interval `i`, falling back to the previous interval at the edge
fn spacing(edges: &[f64], i: usize) -> f64 {
    if i + 1 < edges.len() {
        edges[i + 1] - edges[i]
    } else if edges.len() >= 2 {
        edges[edges.len() - 1] - edges[edges.len() - 2]
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::InWind;
    use crate::model::ModelCell;
    use approx::assert_relative_eq;

    /// Uniform 3x3 polar model, everything in the wind
    fn uniform_model() -> ImportedModel {
        let radii = [1.0e10, 2.0e10, 3.0e10];
        let angles = [10.0, 45.0, 80.0];
        let mut model = ImportedModel {
            ndim: 3,
            mdim: 3,
            ..Default::default()
        };
        for (i, r) in radii.iter().enumerate() {
            for (j, theta) in angles.iter().enumerate() {
                model.cells.push(ModelCell {
                    i,
                    j,
                    inwind: InWind::Inwind,
                    r: *r,
                    theta: *theta,
                    v: Vector3::new(1.0e5, 0.0, 2.0e5),
                    rho: 1.0e-15,
                    t_e: 4.0e4,
                    t_r: 4.4e4,
                });
            }
        }
        model.derive_edges().unwrap();
        model
    }

    #[test]
    fn positions_sit_on_their_radius() {
        let mut wind = Wind::new();
        wind.materialize(&uniform_model()).unwrap();
        for cell in &wind.cells {
            assert_relative_eq!(cell.x.norm(), cell.r, max_relative = 1e-12);
            assert_eq!(cell.x[1], 0.0);
            assert_relative_eq!(cell.xcen.norm(), cell.rcen, max_relative = 1e-12);
        }
    }

    #[test]
    fn classification_collapses_to_two_states() {
        let mut model = uniform_model();
        model.cells[1].inwind = InWind::PartInwind;
        model.cells[2].inwind = InWind::NotInwind;
        let mut wind = Wind::new();
        wind.materialize(&model).unwrap();
        for cell in &wind.cells {
            assert!(matches!(cell.inwind, InWind::Inwind | InWind::Ignore));
        }
    }

    #[test]
    fn dfudge_is_small_and_positive() {
        let mut wind = Wind::new();
        wind.materialize(&uniform_model()).unwrap();
        for cell in &wind.cells {
            assert!(cell.dfudge > 0.0);
            // never more than a thousandth of the radial spacing
            assert!(cell.dfudge <= 1.0e-3 * 1.0e10);
        }
    }

    #[test]
    fn velocity_interpolates_the_constant_field() {
        let mut wind = Wind::new();
        let ndom = wind.materialize(&uniform_model()).unwrap();
        let x = Vector3::new(1.4e10, 0.0, 1.2e10);
        let (v, speed) = wind.velocity(ndom, &x).unwrap();
        assert_relative_eq!(v[0], 1.0e5, max_relative = 1e-12);
        assert_relative_eq!(v[2], 2.0e5, max_relative = 1e-12);
        assert_relative_eq!(speed, v.norm());
    }

    #[test]
    fn second_domain_is_offset_by_nstart() {
        let model = uniform_model();
        let mut wind = Wind::new();
        let first = wind.materialize(&model).unwrap();
        let second = wind.materialize(&model).unwrap();
        assert_eq!((first, second), (0, 1));
        assert_eq!(wind.domain(1).unwrap().nstart, 9);
        assert_eq!(wind.cells.len(), 18);
        assert_eq!(wind.cells[9].ndom, 1);
    }
}
