use binary_trees::linked_list::{parse_integers, LinkedList};

use quickcheck_macros::quickcheck;

fn bracketed(xs: &[i32]) -> String {
    let body = xs.iter().map(i32::to_string).collect::<Vec<_>>().join(", ");
    format!("[{body}]")
}

#[quickcheck]
fn parses_what_was_written(xs: Vec<i32>) -> bool {
    parse_integers(&bracketed(&xs)) == Ok(xs)
}

#[quickcheck]
fn renders_with_arrows(xs: Vec<i32>) -> bool {
    let list: LinkedList = match bracketed(&xs).parse() {
        Ok(list) => list,
        Err(_) => return false,
    };

    let expected = if xs.is_empty() {
        "Empty LinkedList".to_string()
    } else {
        xs.iter().map(i32::to_string).collect::<Vec<_>>().join("->")
    };
    list.len() == xs.len() && list.to_string() == expected
}
