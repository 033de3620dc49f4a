//! Property-based tests for the path algebra and service.
//!
//! Note: the algebra module already carries the cheap properties
//! (round-trip, absolute/relative exclusivity, idempotence). This module
//! covers composition and resolution with larger case counts.

use super::algebra::{is_absolute, join, normalize};
use super::memory::MemoryFilesystem;
use super::provider::FilesystemProvider;
use super::service::PathService;
use super::value::PathValue;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => name_strategy(),
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

// Non-empty fragments, optionally with leading and trailing separators.
fn fragment_strategy() -> impl Strategy<Value = PathValue> {
    (
        any::<bool>(),
        prop::collection::vec(segment_strategy(), 1..5),
        any::<bool>(),
    )
        .prop_map(|(leading, parts, trailing)| {
            let mut text = parts.join("/");
            if leading {
                text.insert(0, '/');
            }
            if trailing {
                text.push('/');
            }
            PathValue::new(text)
        })
}

fn absolute_dir_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(name_strategy(), 0..5).prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 5000,
        .. ProptestConfig::default()
    })]

    // join is associative once both sides are normalized
    #[test]
    fn join_associative_under_normalize(
        a in fragment_strategy(),
        b in fragment_strategy(),
        c in fragment_strategy(),
    ) {
        let left = normalize(&join(&join(&a, &b), &c));
        let right = normalize(&join(&a, &join(&b, &c)));
        prop_assert_eq!(left, right);
    }

    // exactly one separator separates the operands when neither side doubles up
    #[test]
    fn join_single_separator_at_boundary(a in name_strategy(), b in name_strategy(), l in any::<bool>(), r in any::<bool>()) {
        let lhs = PathValue::new(if l { format!("{a}/") } else { a.clone() });
        let rhs = PathValue::new(if r { format!("/{b}") } else { b.clone() });
        prop_assert_eq!(join(&lhs, &rhs).into_string(), format!("{a}/{b}"));
    }

    // join keeps the absoluteness of its left operand
    #[test]
    fn join_absoluteness_follows_lhs(a in fragment_strategy(), b in fragment_strategy()) {
        prop_assert_eq!(is_absolute(&join(&a, &b)), is_absolute(&a));
    }

    // joining with the empty path is the identity on both sides
    #[test]
    fn join_empty_identity(a in fragment_strategy()) {
        prop_assert_eq!(join(&a, &PathValue::empty()), a.clone());
        prop_assert_eq!(join(&PathValue::empty(), &a), a);
    }

    // normalized output carries no "." segments and no empty segments
    #[test]
    fn normalize_has_no_redundant_segments(p in fragment_strategy()) {
        let normalized = normalize(&p).into_string();
        if normalized != "." && normalized != "/" {
            let body = normalized.strip_prefix('/').unwrap_or(&normalized);
            for segment in body.split('/') {
                prop_assert!(!segment.is_empty());
                prop_assert_ne!(segment, ".");
            }
        }
    }

    // absolute paths resolve identically whatever the current directory is
    #[test]
    fn absolute_of_absolute_ignores_cwd(cwd in absolute_dir_strategy(), p in fragment_strategy()) {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(&cwd).unwrap();
        fs.set_current_directory(&cwd).unwrap();
        let service = PathService::new(fs);

        let absolute = PathValue::new(format!("/{}", p.as_str()));
        prop_assert_eq!(service.absolute(&absolute).unwrap(), normalize(&absolute));
    }

    // relative paths resolve to normalize(cwd + p)
    #[test]
    fn absolute_of_relative_prefixes_cwd(cwd in absolute_dir_strategy(), names in prop::collection::vec(name_strategy(), 1..4)) {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(&cwd).unwrap();
        fs.set_current_directory(&cwd).unwrap();
        let service = PathService::new(fs);

        let relative = PathValue::from_segments(&names);
        let resolved = service.absolute(&relative).unwrap();
        prop_assert!(resolved.is_absolute());
        prop_assert_eq!(resolved, normalize(&join(&PathValue::new(cwd), &relative)));
    }

    // scoped changes always leave the starting directory in place
    #[test]
    fn scoped_change_restores(start in absolute_dir_strategy(), target in absolute_dir_strategy(), fail in any::<bool>()) {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(&start).unwrap();
        fs.create_dir_all(&target).unwrap();
        fs.set_current_directory(&start).unwrap();
        let service = PathService::new(fs);

        let outcome = service.scoped_change_directory(&PathValue::new(target), || {
            if fail { Err("operation failed") } else { Ok(()) }
        });
        prop_assert!(outcome.is_ok());
        prop_assert_eq!(service.current_directory().unwrap(), normalize(&PathValue::new(start)));
    }
}
