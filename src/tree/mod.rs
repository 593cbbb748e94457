//! Document tree store and commands

mod add;
mod delete;
mod expand;
mod mv;
mod recolor;
mod rename;
mod store;

pub use add::AddItem;
pub use delete::DeleteItem;
pub use expand::ToggleExpanded;
pub use mv::MoveItem;
pub use recolor::RecolorItem;
pub use rename::RenameItem;
pub use store::TreeStore;
