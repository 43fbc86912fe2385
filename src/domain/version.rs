use super::VersionInfo;
use std::fmt;

/// Which of the two computed strings gets printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Marker-free tag only
    Light,
    /// Composite version string
    Full,
}

impl OutputMode {
    /// `light` selects [OutputMode::Light]; any other argument, or none, selects [OutputMode::Full].
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("light") => OutputMode::Light,
            _ => OutputMode::Full,
        }
    }
}

/// Removes every occurrence of the marker character from a tag.
///
/// # Example
/// ```ignore
/// assert_eq!(strip_marker("v1.2M", 'M'), "v1.2");
/// ```
pub fn strip_marker(tag: &str, marker: char) -> String {
    tag.chars().filter(|c| *c != marker).collect()
}

/// Composite version of a checkout relative to a reference branch tip.
///
/// Renders as `<head tag>+<reference count>-<reference hash>`, followed by
/// `+<offset>` when the checkout is not the reference tip itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString {
    pub base_tag: String,
    pub reference_commits: i64,
    pub reference_hash: String,
    /// `None` when HEAD and the reference tip are the same commit
    pub offset: Option<i64>,
}

impl VersionString {
    /// Builds the version from the HEAD and reference tip descriptors.
    ///
    /// The offset is the plain difference of the two commit counts. It is not
    /// clamped, so a checkout behind the reference tip gets a negative offset.
    pub fn compose(head: &VersionInfo, reference: &VersionInfo) -> Self {
        let offset = if head.same_commit(reference) {
            None
        } else {
            Some(head.commits_since_tag - reference.commits_since_tag)
        };

        VersionString {
            base_tag: head.base_tag.clone(),
            reference_commits: reference.commits_since_tag,
            reference_hash: reference.commit_hash.clone(),
            offset,
        }
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}+{}-{}",
            self.base_tag, self.reference_commits, self.reference_hash
        )?;
        if let Some(offset) = self.offset {
            write!(f, "+{}", offset)?;
        }
        Ok(())
    }
}
