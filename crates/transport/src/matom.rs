//! Macro-atom emissivity reporting for the spectral cycles

use wtools_geometry::Geometry;
use wtools_utils::ValueExt;

use log::info;

/// Per-cell macro-atom and k-packet accounting
///
/// Written by the emissivity kernel during the ionization cycles and read
/// here once that kernel has quiesced. Level arrays run over
/// `0..=nlevels_macro` so the ground state and the topmost level are both
/// counted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MacroCounters {
    /// Energy absorbed per level \[erg\]
    pub matom_abs: Vec<f64>,
    /// Energy emitted per level \[erg\]
    pub matom_emiss: Vec<f64>,
    /// Energy absorbed by the thermal pool \[erg\]
    pub kpkt_abs: f64,
    /// Energy emitted by the thermal pool \[erg\]
    pub kpkt_emiss: f64,
}

impl MacroCounters {
    /// Zeroed counters for `nlevels_macro` levels
    pub fn new(nlevels_macro: usize) -> Self {
        Self {
            matom_abs: vec![0.0; nlevels_macro + 1],
            matom_emiss: vec![0.0; nlevels_macro + 1],
            kpkt_abs: 0.0,
            kpkt_emiss: 0.0,
        }
    }
}

/// The table produced by [matom_emiss_report]
///
/// The per-level entries are **running sums across levels**, not per-level
/// values: entry `m` is the total absorption/emission in all levels up to
/// and including `m`, summed over every cell. The log output has always
/// read this way and downstream diagnostics difference the entries when
/// they need a single level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmissReport {
    /// Cumulative (absorbed, emitted) through each level
    pub levels: Vec<(f64, f64)>,
    /// (absorbed, emitted) for the thermal pool, summed over cells
    pub kpkt: (f64, f64),
    /// Geometry-scope totals (`f_matom`, `f_kpkt`)
    pub totals: (f64, f64),
}

/// Report the macro-atom level and k-packet emissivities summed over cells
///
/// Called once per spectral cycle, after the emissivity kernel has
/// completed. One log line per level with the running cumulative sums, then
/// the k-packet sums, then the geometry totals. Read-only throughout.
pub fn matom_emiss_report(cells: &[MacroCounters], geo: &Geometry) -> EmissReport {
    let nlevels = cells.first().map_or(0, |c| c.matom_abs.len());

    let mut report = EmissReport::default();
    let mut abs_sum = 0.0;
    let mut emiss_sum = 0.0;

    for m in 0..nlevels {
        for cell in cells {
            abs_sum += cell.matom_abs[m];
            emiss_sum += cell.matom_emiss[m];
        }
        info!(
            "Macro Atom level emissivities (summed over cells): n {} matom_abs {} matom_emiss {}",
            m,
            abs_sum.sci(4, 2),
            emiss_sum.sci(4, 2)
        );
        report.levels.push((abs_sum, emiss_sum));
    }

    let kpkt_abs: f64 = cells.iter().map(|c| c.kpkt_abs).sum();
    let kpkt_emiss: f64 = cells.iter().map(|c| c.kpkt_emiss).sum();
    info!(
        "Kpkt emissivities (summed over cells): kpkt_abs {} kpkt_emiss {}",
        kpkt_abs.sci(4, 2),
        kpkt_emiss.sci(4, 2)
    );
    report.kpkt = (kpkt_abs, kpkt_emiss);

    info!("Totals: f_matom {:e} f_kpkt {:e}", geo.f_matom, geo.f_kpkt);
    report.totals = (geo.f_matom, geo.f_kpkt);

    report
}
