use serde::{Deserialize, Serialize};

fn default_marked_branch() -> String {
    "master".to_string()
}

fn default_unmarked_branch() -> String {
    "stable".to_string()
}

fn default_nickname() -> String {
    "Yuuki".to_string()
}

fn default_matched_branch() -> String {
    "stable".to_string()
}

fn default_fallback_branch() -> String {
    "old-stable".to_string()
}

/// Rule choosing the reference branch a checkout is measured against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BranchPolicy {
    /// Picks `marked_branch` when the base tag carries the marker character.
    Marker {
        #[serde(default = "default_marked_branch")]
        marked_branch: String,
        #[serde(default = "default_unmarked_branch")]
        unmarked_branch: String,
    },
    /// Picks `matched_branch` when the current local branch is named `nickname`.
    Nickname {
        #[serde(default = "default_nickname")]
        nickname: String,
        #[serde(default = "default_matched_branch")]
        matched_branch: String,
        #[serde(default = "default_fallback_branch")]
        fallback_branch: String,
    },
}

impl BranchPolicy {
    pub fn marker() -> Self {
        BranchPolicy::Marker {
            marked_branch: default_marked_branch(),
            unmarked_branch: default_unmarked_branch(),
        }
    }

    pub fn nickname() -> Self {
        BranchPolicy::Nickname {
            nickname: default_nickname(),
            matched_branch: default_matched_branch(),
            fallback_branch: default_fallback_branch(),
        }
    }

    /// Name used in configuration files and on the command line
    pub fn kind(&self) -> &'static str {
        match self {
            BranchPolicy::Marker { .. } => "marker",
            BranchPolicy::Nickname { .. } => "nickname",
        }
    }

    /// Whether selection depends on the name of the checked-out branch
    pub fn needs_current_branch(&self) -> bool {
        matches!(self, BranchPolicy::Nickname { .. })
    }

    /// Selects the reference branch.
    ///
    /// `current_branch` is only consulted by the nickname policy; `None` there
    /// selects the fallback branch.
    pub fn select(&self, base_tag: &str, marker: char, current_branch: Option<&str>) -> &str {
        match self {
            BranchPolicy::Marker {
                marked_branch,
                unmarked_branch,
            } => {
                if base_tag.contains(marker) {
                    marked_branch.as_str()
                } else {
                    unmarked_branch.as_str()
                }
            }
            BranchPolicy::Nickname {
                nickname,
                matched_branch,
                fallback_branch,
            } => {
                if current_branch == Some(nickname.as_str()) {
                    matched_branch.as_str()
                } else {
                    fallback_branch.as_str()
                }
            }
        }
    }
}

impl Default for BranchPolicy {
    fn default() -> Self {
        BranchPolicy::marker()
    }
}
