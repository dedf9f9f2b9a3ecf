//! UI Components

mod clear_button;
mod entry_form;
mod todo_list;

pub use clear_button::ClearListButton;
pub use entry_form::EntryForm;
pub use todo_list::TodoListView;
