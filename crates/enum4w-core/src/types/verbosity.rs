//! Enumeration verbosity level.

/// How much expected data is surfaced next to unexpected data.
///
/// Levels run from 0 to 4. Level 1 (the default) lists users, level 2 also
/// lists default service accounts. Levels 3 and 4 list users without the
/// default accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Verbosity(u8);

impl Verbosity {
    /// Highest accepted level.
    pub const MAX: u8 = 4;

    /// Create a verbosity level, clamping to `MAX`.
    #[must_use]
    pub const fn new(level: u8) -> Self {
        if level > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(level)
        }
    }

    /// Raw level.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Whether the user listing runs at all.
    #[must_use]
    pub const fn shows_users(self) -> bool {
        self.0 >= 1
    }

    /// Whether default service accounts are listed; only level 2 does.
    #[must_use]
    pub const fn shows_default_accounts(self) -> bool {
        self.0 == 2
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Self(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        let v = Verbosity::default();
        assert_eq!(v.level(), 1);
        assert!(v.shows_users());
        assert!(!v.shows_default_accounts());
    }

    #[test]
    fn test_tiers() {
        assert!(!Verbosity::new(0).shows_users());
        assert!(Verbosity::new(2).shows_default_accounts());
        assert!(!Verbosity::new(3).shows_default_accounts());
        assert!(!Verbosity::new(4).shows_default_accounts());
        assert!(Verbosity::new(4).shows_users());
    }

    #[test]
    fn test_clamped() {
        assert_eq!(Verbosity::new(9).level(), Verbosity::MAX);
    }
}
