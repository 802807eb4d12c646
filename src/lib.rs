#[macro_use]
mod macros;

pub mod aws;
pub mod catalog;
pub mod iam;
pub mod services;

pub use aws::{ARN, ResourceType};
pub use catalog::{Service, SERVICES};
pub use iam::{AccessLevel, ActionEntry, ActionName, ServiceAction};
