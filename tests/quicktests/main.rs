mod linked_list;
mod tree;
