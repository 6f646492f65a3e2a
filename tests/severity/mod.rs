//! Integration tests for severity ordering and lookup.

use leveled_logger_rs::severity::Severity;

#[test]
fn test_ranks_are_fixed_and_totally_ordered() {
    assert_eq!(Severity::Error.rank(), 1);
    assert_eq!(Severity::Warn.rank(), 2);
    assert_eq!(Severity::Info.rank(), 3);
    assert_eq!(Severity::Debug.rank(), 4);

    assert!(Severity::Error < Severity::Warn);
    assert!(Severity::Warn < Severity::Info);
    assert!(Severity::Info < Severity::Debug);
}

#[test]
fn test_ordering_matches_rank_comparison() {
    for a in Severity::ALL {
        for b in Severity::ALL {
            assert_eq!(
                a <= b,
                a.rank() <= b.rank(),
                "enum ordering must agree with numeric ranks"
            );
        }
    }
}

#[test]
fn test_from_name_is_case_insensitive() {
    assert_eq!(Severity::from_name("error"), Some(Severity::Error));
    assert_eq!(Severity::from_name("WARN"), Some(Severity::Warn));
    assert_eq!(Severity::from_name("Info"), Some(Severity::Info));
    assert_eq!(Severity::from_name("DeBuG"), Some(Severity::Debug));
}

#[test]
fn test_from_name_rejects_unknown_names() {
    assert_eq!(Severity::from_name("verbose"), None);
    assert_eq!(Severity::from_name(""), None);
    assert_eq!(Severity::from_name("warning"), None);
}

#[test]
fn test_names_round_trip() {
    for severity in Severity::ALL {
        assert_eq!(Severity::from_name(severity.as_str()), Some(severity));
    }
}
