//! Coarse facts about the execution environment.

/// Environment inferences drawn from the root listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvironmentFacts {
    /// A Docker marker sits at the filesystem root
    pub containerized: bool,
}

impl EnvironmentFacts {
    /// Human-readable inferences, empty when nothing stands out.
    #[must_use]
    pub fn inferences(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.containerized {
            out.push("Likely a container (Docker)");
        }
        out
    }
}
