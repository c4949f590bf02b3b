//! 挿入順を保つ、位置で操作できるリスト
//!
//! ```
//! use unsorted_list::{unsorted_list, Error};
//!
//! let mut list = unsorted_list!["a", "c"];
//! list.insert("b", 1).unwrap();
//! assert_eq!(list, unsorted_list!["a", "b", "c"]);
//! assert_eq!(list.pop(), Ok("a"));
//! assert_eq!(list.remove(5), Err(Error::OutOfBounds { index: 5, size: 2 }));
//! ```

pub mod data_structure;
pub mod error;
pub mod interface;

pub use data_structure::unsorted_list::{IntoIter, Iter, UnsortedList};
pub use error::{Error, Result};
pub use interface::list::List;
