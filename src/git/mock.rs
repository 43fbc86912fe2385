use crate::error::{BuildVerError, Result};
use crate::git::Repository;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    descriptors: HashMap<String, String>,
    current_branch: Option<String>,
    queried: RefCell<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            descriptors: HashMap::new(),
            current_branch: None,
            queried: RefCell::new(Vec::new()),
        }
    }

    /// Set the descriptor returned when `rev` is described
    pub fn add_descriptor(&mut self, rev: impl Into<String>, descriptor: impl Into<String>) {
        self.descriptors.insert(rev.into(), descriptor.into());
    }

    /// Set the checked-out branch name
    pub fn set_current_branch(&mut self, branch: impl Into<String>) {
        self.current_branch = Some(branch.into());
    }

    /// Revisions described so far, in call order
    pub fn queried(&self) -> Vec<String> {
        self.queried.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn describe_tags(&self, rev: &str) -> Result<String> {
        self.queried.borrow_mut().push(rev.to_string());
        self.descriptors.get(rev).cloned().ok_or_else(|| {
            BuildVerError::query(rev, git2::Error::from_str("revision not found"))
        })
    }

    fn current_branch_name(&self) -> Result<String> {
        self.current_branch.clone().ok_or_else(|| {
            BuildVerError::query("HEAD", git2::Error::from_str("reference 'HEAD' not found"))
        })
    }
}
