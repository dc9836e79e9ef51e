//! Function group metadata usable across crates.

/// Typed key for the capability group a function is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupKey(pub &'static str);

impl GroupKey {
    /// Construct a new typed group key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<GroupKey> for &'static str {
    fn from(k: GroupKey) -> Self {
        k.0
    }
}
