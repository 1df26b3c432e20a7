//! Diagnostic and advanced mode flags

/// Flat bundle of diagnostic/advanced behaviour switches
///
/// Everything defaults to off except `keep_photoabs`. The driver folds the
/// command-line switches (`-d`, `-f`, `-i`) into the relevant fields before
/// anything else runs; the advanced flags below `iadvanced` are only
/// reachable once `-d` has been given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modes {
    /// Advanced/diagnostic mode, the `-d` switch
    pub iadvanced: bool,
    /// Save per-cell photon statistics
    pub save_cell_stats: bool,
    /// Track photons through a chosen cell
    pub ispy: bool,
    /// Keep a wind save from every ionization cycle
    pub keep_ioncycle_windsaves: bool,
    /// Track resonant scatters
    pub track_resonant_scatters: bool,
    /// Save details on extracted photons
    pub save_extract_photons: bool,
    /// Print the wind radiation summary each cycle
    pub print_windrad_summary: bool,
    /// Allow the user to rescale the grid
    pub adjust_grid: bool,
    /// Extra diagnostics
    pub diag_on_off: bool,
    /// Debug-level logging
    pub use_debug: bool,
    /// Print velocity-gradient information
    pub print_dvds_info: bool,
    /// Exit after reading inputs, the `-i` switch (test-harness hook)
    pub quit_after_inputs: bool,
    /// Do not update cell temperatures between cycles, the `-f` switch
    pub fixed_temp: bool,
    /// Keep photoabsorption in the final spectrum
    pub keep_photoabs: bool,
}

impl Default for Modes {
    fn default() -> Self {
        Self {
            iadvanced: false,
            save_cell_stats: false,
            ispy: false,
            keep_ioncycle_windsaves: false,
            track_resonant_scatters: false,
            save_extract_photons: false,
            print_windrad_summary: false,
            adjust_grid: false,
            diag_on_off: false,
            use_debug: false,
            print_dvds_info: false,
            quit_after_inputs: false,
            fixed_temp: false,
            keep_photoabs: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_photoabs_defaults_on() {
        let modes = Modes::default();
        assert!(modes.keep_photoabs);
        assert!(!modes.iadvanced);
        assert!(!modes.fixed_temp);
        assert!(!modes.quit_after_inputs);
    }
}
