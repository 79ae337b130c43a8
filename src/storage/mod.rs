pub mod json_loader;

pub use json_loader::{load_from_path, parse_batch, parse_reader, LoaderOptions};
