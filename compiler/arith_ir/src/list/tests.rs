use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_list() {
    let list: List<u32> = List::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.first(), None);
    assert_eq!(list, List::default());
}

#[test]
fn single_holds_one_element() {
    let list = List::single(7);
    assert_eq!(list.len(), 1);
    assert_eq!(list.first(), Some(&7));
    assert_eq!(list.last(), Some(&7));
}

#[test]
fn append_leaves_receiver_untouched() {
    let base = List::from_vec(vec![1, 2]);
    let grown = base.append(3);
    assert_eq!(base.as_slice(), &[1, 2]);
    assert_eq!(grown.as_slice(), &[1, 2, 3]);
}

#[test]
fn branches_from_a_shared_prefix_are_independent() {
    let prefix = List::single('a');
    let left = prefix.append('b');
    let right = prefix.append('c');
    assert_ne!(left, right);
    assert_eq!(left.concat(&right).into_vec(), vec!['a', 'b', 'a', 'c']);
}

#[test]
fn equality_is_by_elements_and_order() {
    let built: List<_> = List::new().append(1).append(2).append(3);
    let collected: List<_> = (1..=3).collect();
    assert_eq!(built, collected);
    assert_eq!(built, List::from(vec![1, 2, 3]));
    assert_ne!(built, List::from(vec![3, 2, 1]));
}

#[test]
fn push_grows_in_place() {
    let mut list = List::with_capacity(2);
    list.push("x");
    list.push("y");
    assert_eq!(list[1], "y");
    assert_eq!(list.get(2), None);
    let items: Vec<_> = list.iter().copied().collect();
    assert_eq!(items, vec!["x", "y"]);
}

#[test]
fn debug_renders_as_a_list() {
    let list = List::from_vec(vec![1, 2]);
    assert_eq!(format!("{list:?}"), "[1, 2]");
}
