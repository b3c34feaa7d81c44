//! Construction-time extraction policy.

/// Policy flags fixed for the lifetime of one extraction run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ExtractionOptions {
    /// Copy documentation text onto descriptors and bound attributes.
    pub include_documentation: bool,
    /// Skip types and properties marked "never visible" in editors.
    pub exclude_hidden: bool,
}

impl ExtractionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether documentation text is copied.
    pub fn with_documentation(mut self, include: bool) -> Self {
        self.include_documentation = include;
        self
    }

    /// Set whether hidden members are excluded.
    pub fn with_exclude_hidden(mut self, exclude: bool) -> Self {
        self.exclude_hidden = exclude;
        self
    }

    /// Parse options from a JSON document, e.g. `{"excludeHidden": true}`.
    #[cfg(feature = "interchange")]
    pub fn from_json(text: &str) -> Result<Self, super::ExtractError> {
        serde_json::from_str(text).map_err(|e| super::ExtractError::Interchange(e.to_string()))
    }
}
