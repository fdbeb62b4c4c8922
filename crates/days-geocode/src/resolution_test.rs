use super::*;

#[test]
fn into_option_collapses_empty_variants() {
    assert_eq!(Resolution::Found(1).into_option(), Some(1));
    assert_eq!(Resolution::<i32>::Miss.into_option(), None);
    assert_eq!(Resolution::<i32>::TransientFailure.into_option(), None);
}

#[test]
fn pass_display() {
    assert_eq!(Pass::Exact.to_string(), "exact");
    assert_eq!(Pass::SuffixStripped.to_string(), "suffix-stripped");
    assert_eq!(Pass::SynonymReversed.to_string(), "synonym-reversed");
}
