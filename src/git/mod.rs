//! Git query abstraction layer
//!
//! The resolver only needs two read-only questions answered by the
//! repository: "describe this revision against its nearest tag" and "which
//! branch is checked out". They are modelled by the [Repository] trait.
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for tests
//!
//! ```rust
//! # use buildver::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> buildver::Result<()> {
//! let descriptor = repo.describe_tags("HEAD")?;
//! println!("HEAD is {}", descriptor);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Abbreviated hash length used when none is configured
pub const DEFAULT_ABBREV: u32 = 7;

/// Read-only repository queries used to build a version string.
///
/// Implementations map their failures to [crate::error::BuildVerError::Query]
/// naming the revision that could not be answered.
pub trait Repository {
    /// Describe a revision against the nearest reachable tag
    ///
    /// All tags count, lightweight ones included. The descriptor is always in
    /// long form, so a revision that sits exactly on a tag is reported with a
    /// count of zero.
    ///
    /// # Arguments
    /// * `rev` - Any revision expression (e.g., "HEAD", "origin/stable")
    ///
    /// # Returns
    /// * `Ok(String)` - Descriptor of the form `<tag>-<count>-g<hash>`
    /// * `Err` - If the revision cannot be resolved or no tag is reachable
    fn describe_tags(&self, rev: &str) -> Result<String>;

    /// Short name of the checked-out branch, `"HEAD"` when detached
    fn current_branch_name(&self) -> Result<String>;
}
