use super::*;

#[test]
fn shallow_recursion_returns_value() {
    fn sum_to(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { n + sum_to(n - 1) })
    }

    assert_eq!(sum_to(100), 5050);
}

#[test]
fn deep_recursion_does_not_overflow() {
    // Deeper than a default 8MB main-thread stack allows for this frame size
    fn depth(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(100_000), 100_000);
}

#[test]
fn propagates_result_errors() {
    let result: Result<i32, &str> = ensure_sufficient_stack(|| Err("boom"));
    assert_eq!(result, Err("boom"));
}

#[test]
fn error_at_the_deepest_level_unwinds_through_every_frame() {
    // Each slot is one tree level; a zero is a handler that fails.
    fn walk(levels: &[u8], at: usize) -> Result<usize, usize> {
        ensure_sufficient_stack(|| match levels.get(at) {
            None => Ok(at),
            Some(0) => Err(at),
            Some(_) => walk(levels, at + 1),
        })
    }

    let mut levels = vec![1u8; 200_000];
    assert_eq!(walk(&levels, 0), Ok(200_000));
    levels[199_999] = 0;
    assert_eq!(walk(&levels, 0), Err(199_999));
}
