//! Domain logic - pure version rules independent of git operations

pub mod branch;
pub mod describe;
pub mod version;

pub use branch::BranchPolicy;
pub use describe::VersionInfo;
pub use version::{strip_marker, OutputMode, VersionString};

/// Marker character flagging a tag from the unstable/master lineage
pub const DEFAULT_MARKER: char = 'M';
