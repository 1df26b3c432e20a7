//! Reader for tabulated wind models in polar (r, theta) coordinates
//!
//! One cell per line, whitespace-separated:
//!
//! ```text
//! i j inwind r theta v_x v_y v_z rho [t_e [t_r]]
//! ```
//!
//! with r in cm, theta in degrees from the +z axis, velocities in cm/s
//! (cartesian, as measured in the meridional plane), rho in g/cm^3, and
//! temperatures in K. Lines that do not parse as a record are skipped, so
//! comments and column headers are tolerated anywhere in the file.
//!
//! The **last** record read fixes the grid dimensions: `ndim = i + 1`,
//! `mdim = j + 1`. A record count that disagrees with `ndim * mdim` is
//! fatal. Guard cells are required at the outer boundaries and must be
//! present in the file; the reader does not invent them.

mod parsers;

use crate::cell::InWind;
use crate::error::{Error, Result};
use crate::model::{ImportedModel, ModelCell, DEFAULT_IMPORT_TEMPERATURE, NDIM_MAX2D};
use parsers::{RawRecord, VALUES_BOTH_TEMPS, VALUES_ELECTRON_TEMP, VALUES_NO_TEMP};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use nalgebra::Vector3;

/// Read a wind model in polar (r, theta) coordinates
///
/// Returns the populated [ImportedModel] with edge and cell-centre arrays
/// derived. The model is immutable from here on; grid materialization and
/// the density lookup both borrow it.
///
/// Example
/// ```rust, no_run
/// # use wtools_grid::read_rtheta_model;
/// let model = read_rtheta_model("path/to/model.import.txt").unwrap();
/// println!("{} cells", model.ncell());
/// ```
pub fn read_rtheta_model<P: AsRef<Path>>(path: P) -> Result<ImportedModel> {
    let path = path.as_ref();
    info!("Reading a model {} in polar (r,theta) coordinates", path.display());

    let file = File::open(path).map_err(|_| Error::ModelNotFound(path.display().to_string()))?;
    let reader = BufReader::new(file);

    let mut model = ImportedModel::default();
    for line in reader.lines() {
        let line = line?;
        let Ok((_, raw)) = parsers::record(&line) else {
            continue;
        };
        if raw.values.len() < VALUES_NO_TEMP {
            continue;
        }

        model.cells.push(model_cell(raw));

        if model.ncell() > NDIM_MAX2D {
            return Err(Error::OverCapacity { limit: NDIM_MAX2D });
        }
    }

    let last = model.cells.last().ok_or(Error::EmptyModel)?;
    model.ndim = last.i + 1;
    model.mdim = last.j + 1;

    let inconsistent = model.ncell() != model.ndim * model.mdim
        || model
            .cells
            .iter()
            .any(|c| c.i >= model.ndim || c.j >= model.mdim);
    if inconsistent {
        return Err(Error::DimensionMismatch {
            ndim: model.ndim,
            mdim: model.mdim,
            ncell: model.ncell(),
        });
    }

    model.derive_edges()?;

    info!(
        "Imported {} cells ({} x {})",
        model.ncell(),
        model.ndim,
        model.mdim
    );
    Ok(model)
}

/// Apply the field-count policy and build the record
///
/// Nine columns carry no temperatures, ten carry the electron temperature,
/// eleven carry both. A missing radiation temperature defaults to 1.1x the
/// electron temperature.
fn model_cell(raw: RawRecord) -> ModelCell {
    let (t_e, t_r) = match raw.values.len() {
        VALUES_ELECTRON_TEMP => (raw.values[6], 1.1 * raw.values[6]),
        n if n >= VALUES_BOTH_TEMPS => (raw.values[6], raw.values[7]),
        _ => (
            DEFAULT_IMPORT_TEMPERATURE,
            1.1 * DEFAULT_IMPORT_TEMPERATURE,
        ),
    };

    ModelCell {
        i: raw.i,
        j: raw.j,
        inwind: InWind::from_code(raw.inwind),
        r: raw.values[0],
        theta: raw.values[1],
        v: Vector3::new(raw.values[2], raw.values[3], raw.values[4]),
        rho: raw.values[5],
        t_e,
        t_r,
    }
}
