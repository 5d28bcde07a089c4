/// Page slicing helpers shared by list endpoints.
pub mod pagination;
/// Pure parser helpers.
pub mod parse;
