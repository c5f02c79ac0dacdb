use super::*;

#[test]
fn default_is_warn() {
    assert_eq!(default_level(0, false), "warn");
}

#[test]
fn verbosity_raises_level() {
    assert_eq!(default_level(1, false), "debug");
    assert_eq!(default_level(2, false), "trace");
    assert_eq!(default_level(9, false), "trace");
}

#[test]
fn quiet_wins() {
    assert_eq!(default_level(2, true), "error");
}

#[test]
fn init_twice_is_harmless() {
    init(0, true);
    init(1, false);
}
