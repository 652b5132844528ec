pub mod config;
pub mod error;
pub mod parser;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{AppError, AppResult, ParseError, ParseResult};
pub use parser::{Captured, ParsedOutput, ParserKind, ParserRegistry};
