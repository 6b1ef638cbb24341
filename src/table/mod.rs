//! History-keyed decision tables.
mod history;
mod peeled;
mod table;

pub use history::*;
pub use peeled::*;
pub use table::*;
