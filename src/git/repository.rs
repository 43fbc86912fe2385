use crate::error::{BuildVerError, Result};
use git2::{DescribeFormatOptions, DescribeOptions, Repository as Git2Repo};
use std::path::Path;

use super::DEFAULT_ABBREV;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    abbrev: u32,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo,
            abbrev: DEFAULT_ABBREV,
        }
    }

    /// Set the number of hex digits used for abbreviated hashes
    pub fn with_abbrev(mut self, abbrev: u32) -> Self {
        self.abbrev = abbrev;
        self
    }
}

impl super::Repository for Git2Repository {
    fn describe_tags(&self, rev: &str) -> Result<String> {
        let object = self
            .repo
            .revparse_single(rev)
            .map_err(|e| BuildVerError::query(rev, e))?;

        let mut options = DescribeOptions::new();
        options.describe_tags();

        let describe = object
            .describe(&options)
            .map_err(|e| BuildVerError::query(rev, e))?;

        let mut format = DescribeFormatOptions::new();
        format
            .abbreviated_size(self.abbrev)
            .always_use_long_format(true);

        let descriptor = describe
            .format(Some(&format))
            .map_err(|e| BuildVerError::query(rev, e))?;

        log::trace!("describe {} -> {}", rev, descriptor);
        Ok(descriptor)
    }

    fn current_branch_name(&self) -> Result<String> {
        let head = self
            .repo
            .head()
            .map_err(|e| BuildVerError::query("HEAD", e))?;

        Ok(head.shorthand().unwrap_or("HEAD").to_string())
    }
}
