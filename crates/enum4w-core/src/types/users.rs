//! Account types.

/// One record of the account database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswdEntry {
    /// Login name
    pub name: String,
    /// Numeric user ID, if the field parsed
    pub uid: Option<u32>,
}

/// Accounts split by how notable they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListing {
    /// Accounts absent from the default list, in file order
    pub primary: Vec<String>,
    /// Default accounts, only filled at verbosity 2 and above
    pub secondary: Vec<String>,
}

impl UserListing {
    /// Total number of listed accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    /// Returns true if nothing is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Primary accounts followed by secondary ones.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.primary
            .iter()
            .chain(self.secondary.iter())
            .map(String::as_str)
    }
}
