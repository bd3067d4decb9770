

/// Number of generated cases for each property; larger on CI.
fn quickcheck_tests() -> u64 {
    if cfg!(miri) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}
