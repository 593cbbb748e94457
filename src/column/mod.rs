//! Column commands

mod add;
mod delete;
mod update;

pub use add::AddColumn;
pub use delete::DeleteColumn;
pub use update::UpdateColumn;
