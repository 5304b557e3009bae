pub mod file;
pub mod http;

pub use file::JsonFileSource;
pub use http::HttpQuestionSource;
