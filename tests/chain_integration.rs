//! End-to-end chains combining every operator: branch-and-merge through an
//! exported buffer, checkpoints around destructive steps, and the tagged
//! view of a finished stage.

use rstest::rstest;
use volute::chain::{TypeTag, wrap};

/// A stateful predicate keeping only the first `limit` elements.
fn first_n(limit: usize) -> impl FnMut(&i32) -> bool {
    let mut seen = 0;
    move |_| {
        seen += 1;
        seen <= limit
    }
}

#[rstest]
fn branch_and_merge_through_an_exported_buffer() {
    let mut buffer = Vec::new();

    let staged = wrap(vec![0, 1, 2, 3, 4])
        .filter(|value| value % 2 == 0)
        .map(|value| value * 2)
        .export(&mut buffer)
        .filter(first_n(2))
        .concat(wrap(buffer.clone()).filter(first_n(1)).release_or_panic())
        .reduce(8, |acc, value| acc + value);

    let tags = staged.types().release_or_panic();
    let released = staged.push().concat([30]).pop().release_or_panic();

    assert_eq!(buffer, vec![0, 4, 8]);
    assert_eq!(tags, vec![TypeTag::of::<i32>()]);
    assert_eq!(released, vec![12]);
}

#[rstest]
fn checkpoint_guards_a_destructive_filter() {
    let mut narrowed = Vec::new();

    let released = wrap(vec![1, 2, 3, 4])
        .push()
        .filter(|value| *value > 3)
        .export(&mut narrowed)
        .pop()
        .release_or_panic();

    assert_eq!(narrowed, vec![4]);
    assert_eq!(released, vec![1, 2, 3, 4]);
}

#[rstest]
fn a_long_clean_chain_releases_its_final_stage() {
    let released = wrap(1..=10)
        .filter(|value| value % 2 == 1)
        .map(|value| value * value)
        .concat([100])
        .reduce(vec![0], |mut acc: Vec<i32>, value| {
            let tail = *acc.last().expect("seeded accumulator");
            acc.push(tail + value);
            acc
        })
        .filter(|value| *value > 0)
        .release();

    assert_eq!(released, Ok(vec![1, 10, 35, 84, 165, 265]));
}
