//! Task commands

mod add;
mod assign;
mod delete;
mod get;
mod list;
mod mv;
mod update;

pub use add::AddTask;
pub use assign::AssignTask;
pub use delete::DeleteTask;
pub use get::GetTask;
pub use list::ListTasks;
pub use mv::MoveTask;
pub use update::UpdateTask;
