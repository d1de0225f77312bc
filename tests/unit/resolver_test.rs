//! Tests for the Resolver module
//!
//! Resolver decides whether a repository identifier names a local directory
//! or a hosted repository.

use pycomply::resolver::{RepoSlug, RepoTarget, ResolveError, Resolver};

use crate::common::TestRepo;

fn resolver() -> Resolver {
    Resolver::new("github.com").unwrap()
}

fn remote(owner: &str, repo: &str) -> RepoTarget {
    RepoTarget::Remote(RepoSlug::new(owner, repo))
}

// =============================================================================
// Remote forms
// =============================================================================

#[test]
fn all_remote_forms_agree() {
    let resolver = resolver();
    for input in [
        "https://github.com/acme/widget",
        "acme/widget",
        "git@github.com:acme/widget.git",
    ] {
        assert_eq!(resolver.resolve(input).unwrap(), remote("acme", "widget"), "{input}");
    }
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(resolver().resolve("  acme/widget \n").unwrap(), remote("acme", "widget"));
}

// =============================================================================
// Local forms
// =============================================================================

#[test]
fn existing_directory_is_local() {
    let repo = TestRepo::new();
    let input = repo.path().to_string_lossy().to_string();
    assert_eq!(
        resolver().resolve(&input).unwrap(),
        RepoTarget::Local(repo.path().to_path_buf())
    );
}

#[test]
fn existing_directory_wins_over_shorthand() {
    // Tests run from the package root, where `src/core` has the owner/repo shape
    assert_eq!(
        resolver().resolve("src/core").unwrap(),
        RepoTarget::Local("src/core".into())
    );
}

#[test]
fn existing_file_is_not_a_directory() {
    let repo = TestRepo::new();
    repo.add_file("pyproject.toml", "");
    let input = repo.path().join("pyproject.toml");
    let err = resolver().resolve(&input.to_string_lossy()).unwrap_err();
    assert!(matches!(err, ResolveError::NotADirectory(_)));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn bare_word_without_slash_is_unresolvable() {
    let err = resolver().resolve("definitely-not-a-directory-xyz").unwrap_err();
    assert!(matches!(err, ResolveError::Unresolvable(..)));
    assert!(err.to_string().contains("definitely-not-a-directory-xyz"));
}

#[test]
fn missing_nested_path_is_unresolvable() {
    let err = resolver().resolve("./no/such/dir").unwrap_err();
    assert!(matches!(err, ResolveError::Unresolvable(..)));
}

#[test]
fn dot_segments_never_name_a_repository() {
    let resolver = resolver();
    for input in [
        "no-such-owner-zz/..",
        "no-such-owner-zz/.",
        "../no-such-repo-zz",
        "https://github.com/acme/..",
        "https://github.com/../widget",
        "git@github.com:acme/...git",
        "github.com/acme/..",
    ] {
        let err = resolver.resolve(input).unwrap_err();
        assert!(matches!(err, ResolveError::Unresolvable(..)), "{input}: {err:?}");
    }
}
