//! Entry commands: add, today, show, list, delete.

mod add;
mod delete;
mod list;
mod show;
mod today;

pub use add::handle_add;
pub use delete::handle_delete;
pub use list::handle_list;
pub use show::handle_show;
pub use today::handle_today;
