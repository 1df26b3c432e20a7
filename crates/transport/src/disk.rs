//! Disk-heating diagnostic rings

use crate::error::Result;

use wtools_geometry::consts::{BOLTZMANN, PLANCK, STEFAN_BOLTZMANN, WIEN_PEAK};
use wtools_geometry::{DiskType, Geometry};
use wtools_utils::ValueExt;

use std::f64::consts::PI;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Height of the disk surface at radius `r`
///
/// Zero for a flat disk; a vertically extended disk scales as a power of
/// the fractional radius.
pub fn zdisk(geo: &Geometry, r: f64) -> f64 {
    match geo.disk_type {
        DiskType::VerticallyExtended => {
            geo.disk_z0 * (r / geo.diskrad).powf(geo.disk_z1) * geo.diskrad
        }
        _ => 0.0,
    }
}

/// Ring-by-ring record of photon energy impinging on the disk
///
/// Tracks where and how hard the disk is being irradiated so the effect on
/// the disk temperature can be monitored cycle to cycle. Rings are annuli
/// between consecutive radii; the accumulators are reset at the start of
/// each cycle while the baseline radii and temperatures persist.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiskRings {
    /// Ring edge radii \[cm\]
    pub r: Vec<f64>,
    /// Baseline ring temperatures \[K\]
    pub t: Vec<f64>,
    /// Accumulated photon energy per ring \[erg\]
    pub heat: Vec<f64>,
    /// Photons emitted from each ring
    pub nphot: Vec<usize>,
    /// Photons absorbed by each ring
    pub nhit: Vec<usize>,
    /// Heat-weighted mean frequency of the hits \[Hz\]
    pub ave_freq: Vec<f64>,
    /// Blackbody temperature matching the mean hit frequency \[K\]
    pub t_hit: Vec<f64>,
    /// Dilution factor of the irradiating field
    pub w: Vec<f64>,
}

impl DiskRings {
    /// Rings with the given edge radii and baseline temperatures
    pub fn new(r: &[f64], t: &[f64]) -> Self {
        let n = r.len();
        Self {
            r: r.to_vec(),
            t: t.to_vec(),
            heat: vec![0.0; n],
            nphot: vec![0; n],
            nhit: vec![0; n],
            ave_freq: vec![0.0; n],
            t_hit: vec![0.0; n],
            w: vec![0.0; n],
        }
    }

    /// Number of ring edges
    pub fn nrings(&self) -> usize {
        self.r.len()
    }

    /// Zero the accumulators for a new cycle, keeping the ring structure
    pub fn reset(&mut self) {
        self.heat.fill(0.0);
        self.nphot.fill(0);
        self.nhit.fill(0);
        self.ave_freq.fill(0.0);
        self.t_hit.fill(0.0);
        self.w.fill(0.0);
    }

    /// Record a photon of weight `w` and frequency `freq` hitting `ring`
    pub fn record_hit(&mut self, ring: usize, w: f64, freq: f64) {
        self.heat[ring] += w;
        self.ave_freq[ring] += w * freq;
        self.nhit[ring] += 1;
    }

    /// Write the disk-heating diagnostic file
    ///
    /// One annulus per line. The thermalized temperature `t_heat` is what
    /// the accumulated heat alone would sustain; `t_irrad` and `W_irrad`
    /// characterise the irradiating field for rings that were actually hit.
    /// `ztot` is the total energy emitted over the cycle, making the
    /// `nhit/nemit` column a fractional heating rate.
    ///
    /// Both faces of the disk count towards the annulus area.
    pub fn save<P: AsRef<Path>>(&mut self, path: P, geo: &Geometry, ztot: f64) -> Result<()> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        writeln!(
            out,
            "# r       zdisk     t_disk     heat      nhit nhit/nemit  t_heat    t_irrad  W_irrad"
        )?;

        let nrings = self.nrings();
        for n in 0..nrings.saturating_sub(1) {
            let area = 2.0 * PI * (self.r[n + 1] * self.r[n + 1] - self.r[n] * self.r[n]);
            let t_heat = (self.heat[n] / area / STEFAN_BOLTZMANN).powf(0.25);

            if self.nhit[n] > 0 {
                self.ave_freq[n] /= self.heat[n];
                self.t_hit[n] = PLANCK * self.ave_freq[n] / (BOLTZMANN * WIEN_PEAK);
                self.w[n] = self.heat[n]
                    / (4.0 * PI * STEFAN_BOLTZMANN * area * self.t_hit[n].powi(4));
            }

            writeln!(
                out,
                "{} {} {} {} {:5} {} {} {} {}",
                self.r[n].sci(3, 2),
                zdisk(geo, self.r[n]).sci(3, 2),
                self.t[n].sci(3, 2),
                self.heat[n].sci(3, 2),
                self.nhit[n],
                (self.heat[n] * nrings as f64 / ztot).sci(3, 2),
                t_heat.sci(3, 2),
                self.t_hit[n].sci(3, 2),
                self.w[n].sci(3, 2),
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Read;

    #[test]
    fn flat_disks_have_no_height() {
        let geo = Geometry::default();
        assert_eq!(zdisk(&geo, 1.0e10), 0.0);
    }

    #[test]
    fn extended_disks_scale_with_radius() {
        let geo = Geometry {
            disk_type: DiskType::VerticallyExtended,
            disk_z0: 0.1,
            disk_z1: 1.0,
            ..Default::default()
        };
        // linear flaring: z = 0.1 r
        assert_relative_eq!(zdisk(&geo, 1.0e10), 1.0e9);
    }

    #[test]
    fn reset_keeps_the_ring_structure() {
        let mut rings = DiskRings::new(&[1.0e9, 2.0e9, 3.0e9], &[3.0e4, 2.0e4, 1.0e4]);
        rings.record_hit(0, 1.0e30, 1.0e15);
        rings.reset();
        assert_eq!(rings.heat[0], 0.0);
        assert_eq!(rings.nhit[0], 0);
        assert_relative_eq!(rings.r[1], 2.0e9);
        assert_relative_eq!(rings.t[2], 1.0e4);
    }

    #[test]
    fn save_writes_one_row_per_annulus() {
        let mut rings = DiskRings::new(&[1.0e9, 2.0e9, 3.0e9], &[3.0e4, 2.0e4, 1.0e4]);
        rings.record_hit(0, 1.0e30, 1.0e15);
        rings.record_hit(0, 3.0e30, 2.0e15);

        let file = tempfile::NamedTempFile::new().unwrap();
        rings
            .save(file.path(), &Geometry::default(), 8.0e30)
            .unwrap();

        let mut content = String::new();
        File::open(file.path())
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[0].starts_with("# r"));
        // two annuli from three edges
        assert_eq!(lines.len(), 3);

        // the heat-weighted mean frequency of the two hits
        assert_relative_eq!(rings.ave_freq[0], 1.75e15, max_relative = 1e-12);
        assert!(rings.t_hit[0] > 0.0 && rings.w[0] > 0.0);
        // the unhit ring keeps zeroed diagnostics
        assert_eq!(rings.t_hit[1], 0.0);
    }
}
