use crate::aws::glob_matches_ignore_case;

use std::str::FromStr;

/// The access level AWS assigns to an action in its service authorization
/// reference.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccessLevel {
    List,
    Read,
    Write,
    PermissionsManagement,
    Tagging,
    // Only the `<prefix>:*` entry carries this level.
    Wildcard,
}

impl AccessLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Read => "Read",
            Self::Write => "Write",
            Self::PermissionsManagement => "Permissions management",
            Self::Tagging => "Tagging",
            Self::Wildcard => "*",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAccessLevel(pub String);

impl std::fmt::Display for UnknownAccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown access level '{}'", self.0)
    }
}

impl std::error::Error for UnknownAccessLevel {}

impl FromStr for AccessLevel {
    type Err = UnknownAccessLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        let level = match normalized.as_str() {
            "list" => Self::List,
            "read" => Self::Read,
            "write" => Self::Write,
            "permissionsmanagement" => Self::PermissionsManagement,
            "tagging" => Self::Tagging,
            "*" => Self::Wildcard,
            _ => return Err(UnknownAccessLevel(s.to_string())),
        };
        Ok(level)
    }
}

/// A single row of a service's action table, independent of the service's
/// own `Action` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEntry {
    pub name: &'static str,
    pub access_level: AccessLevel,
}

impl ActionEntry {
    pub fn service(&self) -> &'static str {
        self.name.split_once(':').map_or(self.name, |(service, _)| service)
    }

    pub fn operation(&self) -> &'static str {
        self.name.split_once(':').map_or("", |(_, operation)| operation)
    }

    pub fn is_wildcard(&self) -> bool {
        self.access_level == AccessLevel::Wildcard
    }
}

/// Implemented by the `Action` enum of every module under
/// [`crate::services`].
pub trait ServiceAction: Copy + Eq + std::fmt::Display + 'static {
    const PREFIX: &'static str;
    const VARIANTS: &'static [Self];

    fn as_str(&self) -> &'static str;
    fn access_level(&self) -> AccessLevel;

    fn operation(&self) -> &'static str {
        &self.as_str()[Self::PREFIX.len() + 1 ..]
    }

    fn entry(&self) -> ActionEntry {
        ActionEntry { name: self.as_str(), access_level: self.access_level() }
    }

    fn name(&self) -> ActionName {
        ActionName::new(Self::PREFIX, self.operation())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionParseError {
    InvalidFormat,
    EmptyService,
    UnknownAction,
}

impl std::fmt::Display for ActionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat => f.write_str("expected an action of the form service:Operation"),
            Self::EmptyService => f.write_str("action has an empty service prefix"),
            Self::UnknownAction => f.write_str("action is not part of this service"),
        }
    }
}

impl std::error::Error for ActionParseError {}

/// A `service:operation` string that has not been checked against the
/// catalogue. The operation may be an IAM glob such as `Get*`.
#[derive(Clone)]
pub struct ActionName {
    value: String,
    separator: usize,
}

impl ActionName {
    pub fn new(service: &str, operation: &str) -> Self {
        let separator = service.len();
        let mut value = String::with_capacity(separator + operation.len() + 1);
        value.push_str(service);
        value.push(':');
        value.push_str(operation);
        ActionName { value, separator }
    }

    pub fn service(&self) -> &str {
        &self.value[..self.separator]
    }

    pub fn operation(&self) -> &str {
        &self.value[self.separator + 1 ..]
    }

    pub fn raw(&self) -> &str {
        &self.value
    }

    pub fn is_pattern(&self) -> bool {
        self.value.contains(['*', '?'])
    }

    /// Whether `action` (a full `service:Operation` string) is selected by
    /// this name, treating `*` and `?` as IAM wildcards on either side of the
    /// colon.
    pub fn matches(&self, action: &str) -> bool {
        match action.split_once(':') {
            Some((service, operation)) => {
                glob_matches_ignore_case(self.service(), service)
                    && glob_matches_ignore_case(self.operation(), operation)
            }
            None => false,
        }
    }
}

impl PartialEq for ActionName {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for ActionName {}

impl std::fmt::Debug for ActionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl std::fmt::Display for ActionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for ActionName {
    type Err = ActionParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let separator = value.find(':').ok_or(ActionParseError::InvalidFormat)?;
        if separator == 0 {
            return Err(ActionParseError::EmptyService);
        }
        Ok(ActionName { value: value.into(), separator })
    }
}

impl TryFrom<&str> for ActionName {
    type Error = ActionParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod test {
    use super::{AccessLevel, ActionName, ActionParseError};

    use yare::parameterized;

    #[parameterized(
        list = { "List", AccessLevel::List },
        read = { "read", AccessLevel::Read },
        write = { "Write", AccessLevel::Write },
        permissions_spaced = { "Permissions management", AccessLevel::PermissionsManagement },
        permissions_pascal = { "PermissionsManagement", AccessLevel::PermissionsManagement },
        tagging = { "Tagging", AccessLevel::Tagging },
        wildcard = { "*", AccessLevel::Wildcard },
    )]
    fn access_level_from_str(input: &str, expected: AccessLevel) {
        assert_eq!(input.parse::<AccessLevel>().unwrap(), expected);
    }

    #[test]
    fn access_level_rejects_unknown() {
        assert!("Admin".parse::<AccessLevel>().is_err());
    }

    #[test]
    fn parse_action_name() {
        let name: ActionName = "dynamodb:PutItem".parse().unwrap();
        assert_eq!(name.service(), "dynamodb");
        assert_eq!(name.operation(), "PutItem");
        assert!(!name.is_pattern());
        assert_eq!(name, ActionName::new("dynamodb", "PutItem"));
    }

    #[test]
    fn parse_action_name_errors() {
        assert_eq!("PutItem".parse::<ActionName>().unwrap_err(), ActionParseError::InvalidFormat);
        assert_eq!(":PutItem".parse::<ActionName>().unwrap_err(), ActionParseError::EmptyService);
    }

    #[test]
    fn action_name_matching() {
        let name: ActionName = "dynamodb:Get*".parse().unwrap();
        assert!(name.is_pattern());
        assert!(name.matches("dynamodb:GetItem"));
        assert!(name.matches("DynamoDB:getitem"));
        assert!(!name.matches("dynamodb:BatchGetItem"));
        assert!(!name.matches("sqs:GetQueueUrl"));
        assert!(!name.matches("GetItem"));

        let any: ActionName = "*:List*".parse().unwrap();
        assert!(any.matches("sqs:ListQueues"));
        assert!(any.matches("kms:ListKeys"));
    }
}
