pub mod unsorted_list;
