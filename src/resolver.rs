//! Version resolution
//!
//! Describes `HEAD`, picks a reference branch, describes the reference tip on
//! the remote and composes the printed version from both descriptors.

use crate::config::Config;
use crate::domain::{strip_marker, BranchPolicy, OutputMode, VersionInfo, VersionString};
use crate::error::Result;
use crate::git::Repository;

/// Everything computed by one resolver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Base tag of HEAD without marker characters
    pub tag: String,
    pub version: VersionString,
    /// Reference branch the checkout was measured against
    pub branch: String,
    pub head: VersionInfo,
    pub reference: VersionInfo,
}

impl Resolution {
    /// The single line printed for `mode`
    pub fn render(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Light => self.tag.clone(),
            OutputMode::Full => self.version.to_string(),
        }
    }
}

/// Computes version strings from repository descriptors.
///
/// Holds no mutable state; resolving twice against an unchanged repository
/// yields the same [Resolution].
pub struct VersionResolver<'a, R: Repository> {
    repo: &'a R,
    policy: BranchPolicy,
    remote: String,
    marker: char,
}

impl<'a, R: Repository> VersionResolver<'a, R> {
    /// Creates a resolver with the default policy, remote and marker
    pub fn new(repo: &'a R) -> Self {
        VersionResolver::from_config(repo, &Config::default())
    }

    pub fn from_config(repo: &'a R, config: &Config) -> Self {
        VersionResolver {
            repo,
            policy: config.policy.clone(),
            remote: config.remote.clone(),
            marker: config.marker,
        }
    }

    pub fn with_policy(mut self, policy: BranchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Describes `rev` and parses the descriptor
    pub fn describe(&self, rev: &str) -> Result<VersionInfo> {
        let descriptor = self.repo.describe_tags(rev)?;
        log::debug!("{} described as {}", rev, descriptor.trim());
        VersionInfo::parse(&descriptor)
    }

    /// Picks the reference branch for a checkout whose nearest tag is `base_tag`
    pub fn reference_branch(&self, base_tag: &str) -> Result<String> {
        let current = if self.policy.needs_current_branch() {
            Some(self.repo.current_branch_name()?)
        } else {
            None
        };

        let branch = self
            .policy
            .select(base_tag, self.marker, current.as_deref())
            .to_string();
        log::debug!(
            "{} policy selected reference branch '{}'",
            self.policy.kind(),
            branch
        );
        Ok(branch)
    }

    /// Runs the full resolution.
    ///
    /// # Errors
    /// Any query, parse or numeric failure is returned as is; nothing is
    /// recovered or defaulted.
    pub fn resolve(&self) -> Result<Resolution> {
        let head = self.describe("HEAD")?;
        let branch = self.reference_branch(&head.base_tag)?;
        let reference = self.describe(&format!("{}/{}", self.remote, branch))?;

        let tag = strip_marker(&head.base_tag, self.marker);
        let version = VersionString::compose(&head, &reference);

        Ok(Resolution {
            tag,
            version,
            branch,
            head,
            reference,
        })
    }
}
