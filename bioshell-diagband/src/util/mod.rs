//! Small utilities treated as external collaborators by the specification (a radix sort
//! primitive, a thread pool) but implemented directly here since no workspace crate already
//! supplies them in the shape this pipeline needs.

mod radix_sort;

pub use radix_sort::radix_sort_by_key;
