//! Wind domains and their coordinate-system capabilities

use crate::error::{Error, Result};

use wtools_geometry::consts::{RADIAN, VERY_BIG};
use wtools_utils::{f, EdgeExt, ValueExt};

use nalgebra::Vector3;

/// Coordinate systems a domain can be gridded in
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CoordType {
    /// 1D spherical shells
    Spherical = 0,
    /// Cylindrical (rho, z)
    Cylindrical = 1,
    /// Polar (r, theta)
    Polar = 2,
    /// Imported model with its own native gridding
    Imported = 3,
}

impl std::fmt::Display for CoordType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            CoordType::Spherical => "spherical",
            CoordType::Cylindrical => "cylindrical",
            CoordType::Polar => "polar",
            CoordType::Imported => "imported",
        };
        write!(fmt, "{name}")
    }
}

/// A conic surface bounding the wind volume
///
/// Described by its intercept with the z axis and the slope dz/drho, which
/// is all the distance-to-boundary calculation needs.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Cone {
    /// Intercept of the cone with the z axis \[cm\]
    pub z: f64,
    /// Slope dz/drho of the cone surface
    pub dzdrho: f64,
}

impl Cone {
    /// Cone through the origin at polar angle `theta` (degrees from +z)
    pub fn from_polar_angle(theta: f64) -> Self {
        let theta = theta / RADIAN;
        let dzdrho = if theta.sin() == 0.0 {
            VERY_BIG
        } else {
            theta.cos() / theta.sin()
        };
        Self { z: 0.0, dzdrho }
    }
}

/// Up to four neighbour cells with interpolation weights
///
/// Produced by [Domain::coord_fraction]. The weights always sum to 1; a
/// position clamped to a grid boundary simply collapses some weights to
/// zero rather than reducing the neighbour count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Domain-local cell indices
    pub nnn: [usize; 4],
    /// Fraction of each neighbour
    pub frac: [f64; 4],
    /// Number of valid entries in `nnn`/`frac`
    pub nelem: usize,
}

impl Weights {
    /// Iterate the valid (index, weight) pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.nnn
            .iter()
            .copied()
            .zip(self.frac.iter().copied())
            .take(self.nelem)
    }
}

/// One wind region with its own coordinate system and grid
///
/// The domain owns the cell-edge arrays and the bounding geometry of its
/// in-wind cells; the cells themselves live in the flat runtime array of
/// the [Wind](crate::Wind), starting at `nstart`.
///
/// For a polar grid `wind_x` holds the radial edges \[cm\] and `wind_z`
/// the angular edges \[degrees from +z\], both strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    /// Coordinate system of the grid
    pub coord_type: CoordType,
    /// Cell count in the first (radial) dimension
    pub ndim: usize,
    /// Cell count in the second (angular) dimension
    pub mdim: usize,
    /// Total cell count, `ndim * mdim`
    pub ndim2: usize,
    /// Offset of this domain's first cell in the runtime array
    pub nstart: usize,
    /// Radial cell edges \[cm\]
    pub wind_x: Vec<f64>,
    /// Angular cell edges \[deg\]
    pub wind_z: Vec<f64>,

    /// Innermost in-wind radius \[cm\]
    pub rmin: f64,
    /// Outermost in-wind radius \[cm\]
    pub rmax: f64,
    /// Smallest cylindrical radius of the in-wind region \[cm\]
    pub rho_min: f64,
    /// Largest cylindrical radius of the in-wind region \[cm\]
    pub rho_max: f64,
    /// Smallest positive height of the in-wind region \[cm\]
    pub zmin: f64,
    /// Largest height of the in-wind region \[cm\]
    pub zmax: f64,
    /// Opening angle of the inner wind boundary; zero for imported grids
    pub wind_thetamin: f64,
    /// Opening angle of the outer wind boundary; zero for imported grids
    pub wind_thetamax: f64,

    /// Conic surfaces bounding the wind volume
    pub windcone: [Cone; 2],
}

impl Domain {
    /// An empty polar domain with `ndim` radial and `mdim` angular cells
    pub fn polar(ndim: usize, mdim: usize, nstart: usize) -> Self {
        Self {
            coord_type: CoordType::Polar,
            ndim,
            mdim,
            ndim2: ndim * mdim,
            nstart,
            wind_x: Vec::new(),
            wind_z: Vec::new(),
            rmin: VERY_BIG,
            rmax: 0.0,
            rho_min: VERY_BIG,
            rho_max: 0.0,
            zmin: VERY_BIG,
            zmax: 0.0,
            wind_thetamin: 0.0,
            wind_thetamax: 0.0,
            windcone: [Cone::default(); 2],
        }
    }

    /// Flat domain-local index for cell (i, j)
    ///
    /// Radial index varies slowest, so the outer-radial neighbour of cell
    /// `n` is `n + mdim`.
    pub fn ij_to_n(&self, i: usize, j: usize) -> usize {
        i * self.mdim + j
    }

    /// Domain-local cell index containing the position `x`
    ///
    /// The grid is axisymmetric so only `(|x|, theta)` matter, with theta
    /// folded into the upper meridional quadrant. Positions off the grid are
    /// a recoverable error for the caller to handle; transport treats them
    /// as a lost photon.
    pub fn where_in_grid(&self, x: &Vector3<f64>) -> Result<usize> {
        let (r, theta) = to_polar(x);
        let outside = || Error::PositionOutsideGrid { r, theta };

        let i = self.wind_x.find_below(r).ok_or_else(outside)?;
        let j = self.wind_z.find_below(theta).ok_or_else(outside)?;

        // the last edge closes the grid; beyond it there is no cell
        if i + 1 >= self.ndim || j + 1 >= self.mdim {
            return Err(outside());
        }

        Ok(self.ij_to_n(i, j))
    }

    /// Neighbour cells and weights for linear interpolation at `x`
    ///
    /// Bilinear in the polar edge basis: the enclosing radial and angular
    /// edge intervals each contribute a fraction, and the four corner cells
    /// get the products. Positions outside the edge arrays are clamped to
    /// the boundary, which keeps interpolation total over the guard layer.
    pub fn coord_fraction(&self, x: &Vector3<f64>) -> Result<Weights> {
        if self.coord_type != CoordType::Polar {
            return Err(Error::UnsupportedCoordinates(self.coord_type));
        }

        let (r, theta) = to_polar(x);
        let (i, fx) = bracket(&self.wind_x, r);
        let (j, fz) = bracket(&self.wind_z, theta);

        Ok(Weights {
            nnn: [
                self.ij_to_n(i, j),
                self.ij_to_n(i, j + 1),
                self.ij_to_n(i + 1, j),
                self.ij_to_n(i + 1, j + 1),
            ],
            frac: [
                (1.0 - fx) * (1.0 - fz),
                (1.0 - fx) * fz,
                fx * (1.0 - fz),
                fx * fz,
            ],
            nelem: 4,
        })
    }

    /// Install the conic surfaces bounding the wind volume
    ///
    /// The grid runs from near the pole to the equator; the first and last
    /// angular edges define the two cones needed for distance-to-boundary
    /// calculations in polar coordinates.
    pub fn make_cones(&mut self) {
        if let (Some(first), Some(last)) = (self.wind_z.first(), self.wind_z.last()) {
            self.windcone = [
                Cone::from_polar_angle(*first),
                Cone::from_polar_angle(*last),
            ];
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = f!(
            " > Domain [{}, {} x {} cells]\n",
            self.coord_type,
            self.ndim,
            self.mdim
        );
        s += &f!("rmin    rmax    {} {}\n", self.rmin.sci(3, 2), self.rmax.sci(3, 2));
        s += &f!("zmin    zmax    {} {}\n", self.zmin.sci(3, 2), self.zmax.sci(3, 2));
        s += &f!(
            "rho_min rho_max {} {}",
            self.rho_min.sci(3, 2),
            self.rho_max.sci(3, 2)
        );
        write!(fmt, "{s}")
    }
}

/// Fold a position into (r, theta) with theta in \[0, 90\] degrees
///
/// The wind is symmetric about the disk plane, so the polar angle is
/// measured from the nearer of the two z poles.
pub(crate) fn to_polar(x: &Vector3<f64>) -> (f64, f64) {
    let r = x.norm();
    if r == 0.0 {
        return (0.0, 0.0);
    }
    let theta = (x[2].abs() / r).acos() * RADIAN;
    (r, theta)
}

/// Enclosing edge interval and the fraction across it, clamped to the grid
fn bracket(edges: &[f64], value: f64) -> (usize, f64) {
    let top = edges.len() - 1;
    match edges.find_below(value) {
        None => (0, 0.0),
        Some(i) if i >= top => (top - 1, 1.0),
        Some(i) => {
            let frac = (value - edges[i]) / (edges[i + 1] - edges[i]);
            (i, frac)
        }
    }
}
