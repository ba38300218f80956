mod add_task_form;
mod header;
mod progress_bar;
mod task_board;
mod task_item;
mod theme_toggle;

pub use add_task_form::AddTaskForm;
pub use header::Header;
pub use progress_bar::ProgressBar;
pub use task_board::TaskBoard;
pub use task_item::TaskItem;
pub use theme_toggle::ThemeToggle;
