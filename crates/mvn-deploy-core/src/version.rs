//! Maven snapshot version derivation.

use semver::{BuildMetadata, Prerelease, Version};

/// Suffix Maven uses to mark a pre-release artifact.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Derive the snapshot version for a manifest version.
///
/// The version is bumped at the patch level before `-SNAPSHOT` is appended.
/// A version that already carries a pre-release tag is not bumped; the tag
/// is dropped instead, so `1.2.0-beta.1` becomes `1.2.0-SNAPSHOT`.
///
/// # Examples
///
/// ```
/// use mvn_deploy_core::version::snapshot_version;
///
/// assert_eq!(snapshot_version("1.0.0").unwrap(), "1.0.1-SNAPSHOT");
/// assert_eq!(snapshot_version("2.3.0-rc.1").unwrap(), "2.3.0-SNAPSHOT");
/// ```
///
/// # Errors
///
/// - [`Error::InvalidVersion`](crate::Error::InvalidVersion) if `version` is
///   not a semantic version
/// - [`Error::VersionOverflow`](crate::Error::VersionOverflow) if the patch
///   number is already `u64::MAX`
pub fn snapshot_version(version: &str) -> crate::Result<String> {
    let mut parsed = Version::parse(version.trim()).map_err(|e| crate::Error::InvalidVersion {
        version: version.to_owned(),
        source: e,
    })?;

    if parsed.pre.is_empty() {
        parsed.patch = parsed
            .patch
            .checked_add(1)
            .ok_or_else(|| crate::Error::VersionOverflow {
                version: version.to_owned(),
            })?;
    } else {
        parsed.pre = Prerelease::EMPTY;
    }
    parsed.build = BuildMetadata::EMPTY;

    Ok(format!("{parsed}{SNAPSHOT_SUFFIX}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_bumps_patch() {
        assert_eq!(snapshot_version("1.0.0").unwrap(), "1.0.1-SNAPSHOT");
        assert_eq!(snapshot_version("0.9.41").unwrap(), "0.9.42-SNAPSHOT");
    }

    #[test]
    fn prerelease_drops_tag_without_bump() {
        assert_eq!(snapshot_version("1.2.0-beta.1").unwrap(), "1.2.0-SNAPSHOT");
    }

    #[test]
    fn build_metadata_is_dropped() {
        assert_eq!(snapshot_version("1.0.0+build.7").unwrap(), "1.0.1-SNAPSHOT");
    }

    #[test]
    fn invalid_version_errors() {
        let err = snapshot_version("1.0").unwrap_err().to_string();
        assert!(err.contains("'1.0'"), "got: {err}");
    }

    #[test]
    fn max_patch_overflow_is_an_error() {
        let input = format!("1.0.{}", u64::MAX);
        let err = snapshot_version(&input).unwrap_err();
        assert!(
            matches!(&err, crate::Error::VersionOverflow { version } if *version == input),
            "got: {err:?}"
        );
    }

    #[test]
    fn max_patch_prerelease_is_not_bumped() {
        let input = format!("1.0.{}-rc.1", u64::MAX);
        assert_eq!(
            snapshot_version(&input).unwrap(),
            format!("1.0.{}-SNAPSHOT", u64::MAX)
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn release_versions_bump_patch_by_one(
                major in 0u64..1000,
                minor in 0u64..1000,
                patch in 0u64..1000,
            ) {
                let input = format!("{major}.{minor}.{patch}");
                let expected = format!("{major}.{minor}.{}-SNAPSHOT", patch + 1);
                prop_assert_eq!(snapshot_version(&input).unwrap(), expected);
            }

            #[test]
            fn output_is_always_a_snapshot(
                major in 0u64..100,
                minor in 0u64..100,
                patch in 0u64..100,
                pre in proptest::option::of("[a-z]{1,6}"),
            ) {
                let input = match pre {
                    Some(tag) => format!("{major}.{minor}.{patch}-{tag}"),
                    None => format!("{major}.{minor}.{patch}"),
                };
                let out = snapshot_version(&input).unwrap();
                prop_assert!(out.ends_with(SNAPSHOT_SUFFIX));
                prop_assert_eq!(out.matches('-').count(), 1);
            }
        }
    }
}
