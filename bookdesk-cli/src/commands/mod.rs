//! CLI command implementations

mod add;
mod delete;
mod edit;
mod genres;
mod list;

pub use add::add;
pub use delete::delete;
pub use edit::{edit, Changes};
pub use genres::genres;
pub use list::{list, ListQuery};
