use std::collections::LinkedList;

/// Builds a doubly linked list by pushing each value onto the back.
pub fn doubly_linked(values: &[i32]) -> LinkedList<i32> {
    let mut list = LinkedList::new();
    for &v in values {
        list.push_back(v);
    }
    list
}

pub fn front_to_back(list: &LinkedList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

pub fn back_to_front(list: &LinkedList<i32>) -> Vec<i32> {
    list.iter().rev().copied().collect()
}
