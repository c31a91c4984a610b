use wythoff_group::EnumerationLimits;

/// Settings shared by every stage of a polytope build.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildConfig {
    /// Bounds on each coset enumeration.
    pub limits: EnumerationLimits,
}
impl BuildConfig {
    /// Returns a config with a different cap on the number of cosets.
    #[must_use]
    pub fn with_max_cosets(mut self, max_cosets: usize) -> Self {
        self.limits.max_cosets = max_cosets;
        self
    }
}
