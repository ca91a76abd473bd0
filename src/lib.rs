//! pokefetch library: PokéAPI client and summary rendering shared by the CLI.

pub mod data;
pub mod model;
pub mod summary;
