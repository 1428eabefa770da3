pub mod dialog;
pub mod input;
pub mod model;
pub mod service;
pub mod view;

pub use dialog::{Alert, Answer, Dialogs, RecordingDialogs, RemovalPrompt};
pub use input::{expand_key, parse_command, Command};
pub use model::task::{Task, TaskId};
pub use service::task_store::{AddOutcome, Snapshot, TaskActions, TaskStore};
pub use view::list::{RowBinding, TaskListView};
pub use view::row::{Marker, RowModel, RowView, Trailing};
pub use view::screen::Screen;
pub use view::text_field::TextField;
