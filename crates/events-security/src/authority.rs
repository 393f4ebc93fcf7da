//! Granted authority labels.

use std::fmt;

/// A permission label granted to a principal, e.g. `ROLE_ADMIN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GrantedAuthority(String);

impl GrantedAuthority {
    pub fn new(authority: impl Into<String>) -> Self {
        Self(authority.into())
    }
}

impl fmt::Display for GrantedAuthority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
