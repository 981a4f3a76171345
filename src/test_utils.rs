use std::fmt::Debug;

use proptest::{collection::vec as propvec, prelude::*, test_runner::TestCaseResult};

use crate::{collection::Collection, lazy::LazyCollection};

pub fn num_vec() -> impl Strategy<Value = Vec<i32>> {
    propvec(-50..50_i32, ..=20)
}

/// Sorts so that two vectors compare equal iff they hold the same items.
pub fn multiset<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort_unstable();
    items
}

/// Runs `op` on a copy and checks that `source` is left as it was, keys included.
pub fn proptest_untouched<T, R>(
    source: &Collection<T>,
    op: impl FnOnce(&Collection<T>) -> R,
) -> TestCaseResult
where
    T: Clone + PartialEq + Debug,
{
    let before = source.to_array();
    let _ = op(source);
    prop_assert_eq!(source.to_array(), before);

    Ok(())
}

/// Checks that a pipeline built by `stage` matches the eager result once,
/// then yields nothing.
pub fn proptest_single_pass(
    nums: &[i32],
    expected: impl FnOnce(&Collection<i32>) -> Collection<i32>,
    stage: impl FnOnce(&LazyCollection<'static, i32>) -> LazyCollection<'static, i32>,
) -> TestCaseResult {
    let lazy = stage(&LazyCollection::from(nums.to_vec()));
    let expected = expected(&Collection::from(nums.to_vec()));

    prop_assert_eq!(lazy.to_array(), expected.values());
    prop_assert!(lazy.to_array().is_empty());

    Ok(())
}
