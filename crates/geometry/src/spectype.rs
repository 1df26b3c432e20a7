/// Spectral models available for a radiation source
///
/// Each radiating component (star, disk, boundary layer) carries one slot
/// for photon generation and one for the ionization cycles, so restarted
/// runs reproduce the same source mix.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SpecType {
    /// Component does not radiate
    None = -1,
    /// Blackbody at the component temperature
    Blackbody = 0,
    /// Stellar atmosphere models read from a model list
    Models = 1,
    /// Uniform over the frequency band
    Uniform = 2,
    /// Power law, the usual choice for AGN ionizing continua
    PowerLaw = 3,
    /// Broken power law from a tabulated continuum
    Tabulated = 4,
}

impl SpecType {
    /// Full name for log output
    pub fn long_name(&self) -> &str {
        match self {
            SpecType::None => "none",
            SpecType::Blackbody => "blackbody",
            SpecType::Models => "models",
            SpecType::Uniform => "uniform",
            SpecType::PowerLaw => "power law",
            SpecType::Tabulated => "tabulated",
        }
    }
}

impl std::fmt::Display for SpecType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

/// How the ionization balance is updated between cycles
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum IonizationMode {
    /// Ion abundances held fixed at their seed values
    Fixed = 2,
    /// On-the-spot approximation with the best-fit local temperature
    /// (Mazzali & Lucy 1993)
    Ml93 = 3,
}

/// How line transfer is treated during transport
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LineMode {
    /// Lines absorb only
    Absorb = 0,
    /// Pure scattering
    Scatter = 1,
    /// Single scattering approximation
    SingleScatter = 2,
    /// Escape probabilities
    EscapeProbabilities = 3,
}

/// Disk treatment for absorption and emission
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DiskType {
    /// No disk
    None = 0,
    /// Infinitely thin disk in the z = 0 plane
    Flat = 1,
    /// Vertically extended disk
    VerticallyExtended = 2,
}

/// Whether this run starts fresh or continues from a wind save
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RunType {
    /// A new model
    New = 0,
    /// Restarted from a previous run
    Restart = 1,
}
