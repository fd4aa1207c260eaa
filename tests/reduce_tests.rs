//! Unit tests for the folding operator and its accumulator-shape policy.
//!
//! A fold ends in one of two shapes: a scalar accumulator is promoted to a
//! one-element sequence, a `Vec`-shaped accumulator becomes the new wrapped
//! value verbatim. Either way the chain's "current value is a sequence"
//! invariant holds after the step.

use rstest::rstest;
use volute::chain::wrap;

fn progressive_sum(mut acc: Vec<i32>, value: i32) -> Vec<i32> {
    let tail = *acc.last().expect("progressive accumulator starts non-empty");
    acc.push(tail + value);
    acc
}

// =============================================================================
// Scalar Accumulator
// =============================================================================

#[rstest]
#[case::short(vec![0, 1, 2], 3)]
#[case::longer(vec![0, 1, 2, 3, 4, 5], 15)]
#[case::single(vec![41], 41)]
fn scalar_fold_result_becomes_a_singleton(#[case] input: Vec<i32>, #[case] expected: i32) {
    let released = wrap(input).reduce(0, |acc, value| acc + value).release();
    assert_eq!(released, Ok(vec![expected]));
}

#[rstest]
fn scalar_fold_starts_from_the_initial_accumulator() {
    let released = wrap(vec![1, 2, 3]).reduce(10, |acc, value| acc + value).release();
    assert_eq!(released, Ok(vec![16]));
}

#[rstest]
fn string_fold_concatenates_left_to_right() {
    let released = wrap(vec!["a", "b", "c"])
        .reduce(String::new(), |acc, value| acc + value)
        .release();
    assert_eq!(released, Ok(vec!["abc".to_string()]));
}

// =============================================================================
// Sequence Accumulator (progressive accumulation)
// =============================================================================

#[rstest]
fn sequence_fold_result_is_used_verbatim() {
    let released = wrap(vec![0, 1, 2, 3, 4, 5])
        .reduce(vec![0], progressive_sum)
        .release();
    assert_eq!(released, Ok(vec![0, 0, 1, 3, 6, 10, 15]));
}

#[rstest]
fn sequence_fold_may_change_the_element_count() {
    let released = wrap(vec![1, 2, 3])
        .reduce(Vec::new(), |mut acc: Vec<i32>, value| {
            acc.push(value);
            acc.push(value);
            acc
        })
        .release();
    assert_eq!(released, Ok(vec![1, 1, 2, 2, 3, 3]));
}

// =============================================================================
// Empty Input
// =============================================================================

#[rstest]
fn empty_input_skips_the_fold_and_discards_the_initial_scalar() {
    let released = wrap(Vec::<i32>::new())
        .reduce(41, |acc, value| acc + value)
        .release();
    assert_eq!(released, Ok(Vec::new()));
}

#[rstest]
fn empty_input_skips_the_fold_and_discards_the_initial_sequence() {
    let released = wrap(Vec::<i32>::new())
        .reduce(vec![0], progressive_sum)
        .release();
    assert_eq!(released, Ok(Vec::new()));
}

// =============================================================================
// Full Composition
// =============================================================================

#[rstest]
fn progressive_sum_then_filter_map_and_total() {
    let released = wrap(vec![0, 1, 2, 3, 4, 5])
        .concat(6)
        .concat([7, 8])
        .reduce(vec![0], progressive_sum)
        .filter(|value| value % 2 == 0)
        .map(|value| value * 2)
        .reduce(0, |acc, value| acc + value)
        .release();
    assert_eq!(released, Ok(vec![160]));
}
