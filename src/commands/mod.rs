pub mod profile;
pub mod snippets;
