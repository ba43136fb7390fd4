//! UI Components
//!
//! Leptos components for the auth screen and the task board.

mod auth_panel;
mod error_banner;
mod filter_bar;
mod new_task_form;
mod session_header;
mod task_board;
mod task_item;

pub use auth_panel::AuthPanel;
pub use error_banner::ErrorBanner;
pub use filter_bar::FilterBar;
pub use new_task_form::NewTaskForm;
pub use session_header::SessionHeader;
pub use task_board::TaskBoard;
pub use task_item::TaskItem;
