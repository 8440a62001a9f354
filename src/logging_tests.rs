use super::*;

#[test]
fn quiet_wins_over_verbose() {
    assert_eq!(level_for(3, true), LevelFilter::ERROR);
}

#[test]
fn verbosity_levels() {
    assert_eq!(level_for(0, false), LevelFilter::WARN);
    assert_eq!(level_for(1, false), LevelFilter::INFO);
    assert_eq!(level_for(2, false), LevelFilter::DEBUG);
    assert_eq!(level_for(3, false), LevelFilter::TRACE);
    assert_eq!(level_for(9, false), LevelFilter::TRACE);
}

#[test]
fn filter_defaults_to_verbosity() {
    let filter = build_filter(None, 1, false);
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
}

#[test]
fn blank_directives_fall_back_to_verbosity() {
    let filter = build_filter(Some("  "), 0, true);
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
}

#[test]
fn directives_override_verbosity() {
    let filter = build_filter(Some("trace"), 0, true);
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
}
