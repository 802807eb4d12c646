mod arn;
mod glob;
pub mod template;

pub use arn::{ARNParseError, ARN};
pub use glob::{glob_matches, glob_matches_ignore_case};
pub use template::{or_wildcard, ResourceType, TemplateError, WILDCARD};
