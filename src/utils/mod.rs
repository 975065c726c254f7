pub mod paths;
pub mod terminal;
pub mod timestamps;

pub use paths::{MAX_DATA_FILE_BYTES, format_path_with_tilde, validate_file_size};
pub use terminal::{sanitize_line, strip_control_sequences};
pub use timestamps::{format_absolute_timestamp, format_timestamp};
