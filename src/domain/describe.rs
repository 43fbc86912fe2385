use crate::error::{BuildVerError, Result};
use std::fmt;
use std::str::FromStr;

/// Nearest tag, distance and abbreviated hash of one described revision.
///
/// Produced from a `<tag>-<count>-<hash>` descriptor such as `git describe --tags --long`
/// prints. The hash is kept verbatim, including git's `g` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub base_tag: String,
    pub commits_since_tag: i64,
    pub commit_hash: String,
}

impl VersionInfo {
    pub fn new(
        base_tag: impl Into<String>,
        commits_since_tag: i64,
        commit_hash: impl Into<String>,
    ) -> Self {
        VersionInfo {
            base_tag: base_tag.into(),
            commits_since_tag,
            commit_hash: commit_hash.into(),
        }
    }

    /// Parses a descriptor, trimming surrounding whitespace first.
    ///
    /// The string is split from the right so tags that contain dashes survive
    /// (`v1.0-rc1-3-gabc` has base tag `v1.0-rc1`).
    ///
    /// # Errors
    /// * [BuildVerError::Parse] - fewer than three dash-separated fields, or an empty field
    /// * [BuildVerError::Numeric] - the count field is not an integer
    pub fn parse(descriptor: &str) -> Result<Self> {
        let trimmed = descriptor.trim();

        let mut fields = trimmed.rsplitn(3, '-');
        let (hash, count, tag) = match (fields.next(), fields.next(), fields.next()) {
            (Some(hash), Some(count), Some(tag)) => (hash, count, tag),
            _ => return Err(BuildVerError::parse(trimmed)),
        };

        if tag.is_empty() || count.is_empty() || hash.is_empty() {
            return Err(BuildVerError::parse(trimmed));
        }

        let commits_since_tag = count
            .parse::<i64>()
            .map_err(|_| BuildVerError::numeric("commit count", count))?;

        Ok(VersionInfo::new(tag, commits_since_tag, hash))
    }

    /// Whether both infos describe the same commit
    pub fn same_commit(&self, other: &VersionInfo) -> bool {
        self.commit_hash == other.commit_hash
    }
}

impl FromStr for VersionInfo {
    type Err = BuildVerError;

    fn from_str(s: &str) -> Result<Self> {
        VersionInfo::parse(s)
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.base_tag, self.commits_since_tag, self.commit_hash
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_descriptor() {
        let info = VersionInfo::parse("v1.2M-5-gabc1234").unwrap();
        assert_eq!(info.base_tag, "v1.2M");
        assert_eq!(info.commits_since_tag, 5);
        assert_eq!(info.commit_hash, "gabc1234");
    }

    #[test]
    fn test_parse_trims_newline() {
        let info = VersionInfo::parse("  v1.0-0-gdeadbee\n").unwrap();
        assert_eq!(info, VersionInfo::new("v1.0", 0, "gdeadbee"));
    }

    #[test]
    fn test_parse_tag_with_dashes() {
        let info: VersionInfo = "v2.0-rc1-12-g0a1b2c3".parse().unwrap();
        assert_eq!(info.base_tag, "v2.0-rc1");
        assert_eq!(info.commits_since_tag, 12);
        assert_eq!(info.commit_hash, "g0a1b2c3");
    }

    #[test]
    fn test_parse_too_few_fields() {
        for descriptor in ["v1.0", "v1.0-gabc", "", "   "] {
            let err = VersionInfo::parse(descriptor).unwrap_err();
            assert!(
                matches!(err, BuildVerError::Parse(_)),
                "expected parse error for {:?}, got {:?}",
                descriptor,
                err
            );
        }
    }

    #[test]
    fn test_parse_empty_field() {
        assert!(matches!(
            VersionInfo::parse("-3-gabc"),
            Err(BuildVerError::Parse(_))
        ));
        assert!(matches!(
            VersionInfo::parse("v1.0-3-"),
            Err(BuildVerError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_non_numeric_count() {
        let err = VersionInfo::parse("v1.0-five-gabc").unwrap_err();
        match err {
            BuildVerError::Numeric { value, .. } => assert_eq!(value, "five"),
            other => panic!("expected numeric error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_matches_descriptor() {
        let info = VersionInfo::new("v1.0", 3, "gabc");
        assert_eq!(info.to_string(), "v1.0-3-gabc");
    }

    #[test]
    fn test_same_commit() {
        let a = VersionInfo::new("v1.2M", 5, "abc123");
        let b = VersionInfo::new("v1.0", 9, "abc123");
        let c = VersionInfo::new("v1.0", 5, "def456");
        assert!(a.same_commit(&b));
        assert!(!a.same_commit(&c));
    }
}
