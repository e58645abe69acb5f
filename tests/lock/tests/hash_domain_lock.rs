//! Hash domain governance lock tests.
//!
//! 1. The domain set has the expected size (catches a variant missing from
//!    `ALL`).
//! 2. Domain byte strings are unique.
//! 3. Every domain is null-terminated.
//! 4. Every domain follows `ARBOR::*::V1\0`.
//! 5. No raw `ARBOR::` domain literals in production source outside
//!    `hash_domain.rs`.
//! 6. No `deny_unknown_fields` in production source, so configs and reports
//!    stay extensible.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use arbor_kernel::proof::hash_domain::HashDomain;

const PRODUCTION_DIRS: [&str; 3] = ["kernel/src", "search/src", "harness/src"];

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("workspace root exists")
}

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        4,
        "expected 4 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(seen.insert(domain.as_bytes()), "duplicate domain bytes: {domain}");
    }
}

#[test]
fn hash_domain_all_null_terminated() {
    for domain in HashDomain::ALL {
        assert!(
            domain.as_bytes().ends_with(&[0]),
            "{domain} is not null-terminated"
        );
        assert_eq!(
            domain.as_bytes().iter().filter(|&&b| b == 0).count(),
            1,
            "{domain} has an interior null"
        );
    }
}

#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.starts_with(b"ARBOR::"), "{domain} does not start with ARBOR::");
        assert!(bytes.ends_with(b"::V1\0"), "{domain} does not end with ::V1\\0");
    }
}

#[test]
fn no_raw_domain_literals_outside_authority() {
    let violations = scan_production("b\"ARBOR::", Some("hash_domain.rs"));
    assert!(
        violations.is_empty(),
        "raw ARBOR:: domain literals found outside hash_domain.rs:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_deny_unknown_fields_in_production_code() {
    let violations = scan_production("deny_unknown_fields", None);
    assert!(
        violations.is_empty(),
        "deny_unknown_fields found in production code:\n{}",
        violations.join("\n")
    );
}

fn scan_production(pattern: &str, authority_file: Option<&str>) -> Vec<String> {
    let mut violations = Vec::new();
    for dir in PRODUCTION_DIRS {
        let dir = workspace_root().join(dir);
        assert!(dir.is_dir(), "{} is missing", dir.display());
        for path in walkdir(&dir) {
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            if authority_file.is_some() && path.file_name().and_then(|n| n.to_str()) == authority_file {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            scan_source(&path, &content, pattern, &mut violations);
        }
    }
    violations
}

/// Record non-comment lines containing `pattern`, skipping `#[cfg(test)]`
/// blocks by brace depth.
fn scan_source(path: &Path, content: &str, pattern: &str, violations: &mut Vec<String>) {
    let mut brace_depth: usize = 0;
    let mut skip_depth: Option<usize> = None;
    let mut cfg_test_pending = false;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.contains("#[cfg(test)]") {
            cfg_test_pending = true;
            continue;
        }

        let opens = line.chars().filter(|&c| c == '{').count();
        let closes = line.chars().filter(|&c| c == '}').count();
        if cfg_test_pending && opens > 0 {
            skip_depth = Some(brace_depth);
            cfg_test_pending = false;
        }
        brace_depth = brace_depth.saturating_add(opens).saturating_sub(closes);

        if let Some(depth) = skip_depth {
            if brace_depth <= depth {
                skip_depth = None;
            }
            continue;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        if trimmed.contains(pattern) {
            violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
        }
    }
}

fn walkdir(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(walkdir(&path));
            } else {
                results.push(path);
            }
        }
    }
    results
}
