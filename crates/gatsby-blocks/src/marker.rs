//! Marker pairs delimiting a managed block.

use crate::error::{Error, Result};

/// A validated start/end marker pair.
///
/// Markers are matched by exact line equality, so they must be non-empty,
/// fit on a single line, and differ from each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    start: String,
    end: String,
}

impl MarkerPair {
    /// Create a marker pair from literal start and end lines.
    ///
    /// # Errors
    /// Returns `Error::InvalidMarker` if either marker is empty, contains a
    /// line break, or both markers are equal.
    ///
    /// # Example
    /// ```
    /// use gatsby_blocks::MarkerPair;
    ///
    /// let markers = MarkerPair::new("# S", "# E").unwrap();
    /// assert_eq!(markers.start(), "# S");
    /// assert!(MarkerPair::new("# S", "# S").is_err());
    /// ```
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let start = start.into();
        let end = end.into();
        validate(&start)?;
        validate(&end)?;
        if start == end {
            return Err(Error::InvalidMarker {
                marker: start,
                reason: "start and end markers must differ".into(),
            });
        }
        Ok(Self { start, end })
    }

    /// Markers for a named section owned by `namespace`:
    /// `# <namespace> <section> start` / `# <namespace> <section> end`.
    pub fn for_section(namespace: &str, section: &str) -> Result<Self> {
        Self::new(
            format!("# {} {} start", namespace, section),
            format!("# {} {} end", namespace, section),
        )
    }

    /// Markers for the ignore-list block (e.g. in `.gitignore`).
    pub fn ignores(namespace: &str) -> Result<Self> {
        Self::for_section(namespace, "ignores")
    }

    /// Markers for the redirect-rule block (e.g. in `_redirects`).
    pub fn redirects(namespace: &str) -> Result<Self> {
        Self::for_section(namespace, "redirects")
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Render a complete block: start marker, body, end marker.
    pub fn format_block(&self, body: &str) -> String {
        format!("{}\n{}\n{}", self.start, body, self.end)
    }
}

fn validate(marker: &str) -> Result<()> {
    let reason = if marker.is_empty() {
        "marker must not be empty"
    } else if marker.contains(['\n', '\r']) {
        "marker must be a single line"
    } else {
        return Ok(());
    };
    Err(Error::InvalidMarker {
        marker: marker.to_string(),
        reason: reason.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_markers() {
        let markers = MarkerPair::ignores("@netlify/plugin-gatsby").unwrap();
        assert_eq!(markers.start(), "# @netlify/plugin-gatsby ignores start");
        assert_eq!(markers.end(), "# @netlify/plugin-gatsby ignores end");
    }

    #[test]
    fn test_redirects_markers() {
        let markers = MarkerPair::redirects("@netlify/plugin-gatsby").unwrap();
        assert_eq!(markers.start(), "# @netlify/plugin-gatsby redirects start");
        assert_eq!(markers.end(), "# @netlify/plugin-gatsby redirects end");
    }

    #[test]
    fn test_rejects_empty_and_multiline() {
        assert!(MarkerPair::new("", "# E").is_err());
        assert!(MarkerPair::new("# S", "# E\nmore").is_err());
        assert!(MarkerPair::for_section("bad\nns", "ignores").is_err());
    }

    #[test]
    fn test_format_block() {
        let markers = MarkerPair::new("# S", "# E").unwrap();
        assert_eq!(markers.format_block("x/y"), "# S\nx/y\n# E");
    }
}
