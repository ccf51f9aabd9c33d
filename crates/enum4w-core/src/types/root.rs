//! Root directory scan result.

/// Root entries worth reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootScan {
    /// Entries on the interesting list
    pub interesting: Vec<String>,
    /// Entries missing from the expected baseline
    pub uncommon: Vec<String>,
}

impl RootScan {
    /// Returns true if nothing was flagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interesting.is_empty() && self.uncommon.is_empty()
    }
}
