mod double_buffer;
mod passes_line;
mod progress_provider;
mod task;

pub use double_buffer::DoubleBuffer;
pub use passes_line::PassesLine;
pub use progress_provider::ProgressProvider;
pub use task::{export_steps, process_file};
