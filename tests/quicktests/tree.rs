use binary_trees::{count_trees, Tree};

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

fn build(xs: &[i8]) -> Tree {
    xs.iter().copied().map(i32::from).collect()
}

fn is_sorted(keys: &[i32]) -> bool {
    keys.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.lookup(i32::from(*x)))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.lookup(i32::from(*x)))
}

#[quickcheck]
fn size_is_number_of_inserts(xs: Vec<i8>) -> bool {
    build(&xs).size() == xs.len()
}

#[quickcheck]
fn inorder_is_sorted_inserts(xs: Vec<i8>) -> bool {
    let mut expected: Vec<i32> = xs.iter().copied().map(i32::from).collect();
    expected.sort_unstable();

    build(&xs).inorder().collect::<Vec<_>>() == expected
}

#[quickcheck]
fn inserted_trees_are_bsts(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.is_bst_naive() && tree.is_bst_linear()
}

#[quickcheck]
fn min_and_max(xs: Vec<i8>) -> TestResult {
    let (Some(min), Some(max)) = (xs.iter().min(), xs.iter().max()) else {
        return TestResult::discard();
    };
    let tree = build(&xs);

    TestResult::from_bool(
        tree.min_value() == Ok(i32::from(*min))
            && tree.max_value() == Ok(i32::from(*max))
            && (xs.len() > 1 || min == max),
    )
}

#[quickcheck]
fn max_depth_is_longest_path(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let longest = tree.paths().map(|path| path.len()).max().unwrap_or(0);

    tree.max_depth() == longest && tree.max_depth() <= tree.size()
}

#[quickcheck]
fn mirror_twice_is_identity(xs: Vec<i8>) -> bool {
    let original = build(&xs);
    let mut tree = build(&xs);
    tree.mirror();
    tree.mirror();

    tree.same_tree(&original)
}

#[quickcheck]
fn mirror_reverses_inorder(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut expected = tree.inorder().collect::<Vec<_>>();
    expected.reverse();
    tree.mirror();

    tree.inorder().collect::<Vec<_>>() == expected
}

/// With distinct keys, a tree is a BST exactly when its keys come out in order.
#[quickcheck]
fn sorted_iff_bst_for_distinct_keys(xs: Vec<i8>, mirror: bool) -> bool {
    let mut seen = HashSet::new();
    let distinct: Vec<i8> = xs.into_iter().filter(|x| seen.insert(*x)).collect();
    let mut tree = build(&distinct);
    if mirror {
        tree.mirror();
    }
    let inorder = tree.inorder().collect::<Vec<_>>();

    is_sorted(&inorder) == tree.is_bst_linear() && tree.is_bst_linear() == tree.is_bst_naive()
}

#[quickcheck]
fn double_tree_doubles_size(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    tree.double_tree();

    tree.size() == 2 * xs.len() && tree.is_bst_naive() && tree.is_bst_linear()
}

#[quickcheck]
fn paths_cover_every_leaf(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    tree.paths().all(|path| {
        let sum: i64 = path.iter().copied().map(i64::from).sum();
        path.first() == tree.preorder().next().as_ref() && tree.has_path_sum(sum)
    })
}

#[quickcheck]
fn count_trees_recurrence(n: u8) -> TestResult {
    let n = i32::from(n % 37);
    if n < 2 {
        return TestResult::from_bool(count_trees(n) == Ok(1));
    }

    let expected = (1..=n)
        .map(|root| count_trees(root - 1).unwrap() * count_trees(n - root).unwrap())
        .sum::<u64>();
    TestResult::from_bool(count_trees(n) == Ok(expected))
}
