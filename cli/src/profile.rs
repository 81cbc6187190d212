//! Profile -- the TOML configuration of `cluster_fusions`.
//!
//! Every field is optional. A value given on the command line overrides the profile.
//! ```toml
//! slop = 100
//! verbose = 1
//! # Overrides the CFF layout detected from the first line.
//! columns = ["chr1", "pos1", "strand1", "chr2", "pos2", "strand2"]
//! ```
use definitions::CffLayout;
use fusion_bench::breakpoint::DEFAULT_SLOP;
use fusion_bench::BreakpointConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterProfile {
    /// Tolerance on both sides of a breakpoint.
    pub slop: Option<u64>,
    /// Column names of the CFF file, in order.
    pub columns: Option<Vec<String>>,
    pub verbose: Option<usize>,
}

impl ClusterProfile {
    pub fn from_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        debug!("Opening {:?}", path.as_ref());
        let file = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&file).map_err(|why| {
            let msg = format!("{:?} is not a valid profile: {}", path.as_ref(), why);
            std::io::Error::new(std::io::ErrorKind::InvalidData, msg)
        })
    }
    pub fn from_toml(profile: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(profile)
    }
    /// Overwrite the fields by the ones given on the command line.
    /// A `verbose` of 0 means no `-v` was given and keeps the profile's level.
    pub fn merge(self, slop: Option<u64>, verbose: usize) -> Self {
        Self {
            slop: slop.or(self.slop),
            verbose: Some(verbose).filter(|&v| v > 0).or(self.verbose),
            ..self
        }
    }
    pub fn breakpoint_config(&self) -> BreakpointConfig {
        BreakpointConfig::new(self.slop.unwrap_or(DEFAULT_SLOP))
    }
    pub fn layout(&self) -> Option<CffLayout> {
        self.columns.clone().map(CffLayout::with_columns)
    }
}
