//! Column commands

mod add;
mod get;
mod list;
mod update;

pub use add::AddColumn;
pub use get::GetColumn;
pub use list::ListColumns;
pub use update::UpdateColumn;
