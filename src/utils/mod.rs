pub mod environment;

pub use environment::{api_base_url, history_file_path, DEFAULT_API_URL};
