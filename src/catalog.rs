use crate::aws::ResourceType;
use crate::iam::{AccessLevel, ActionEntry, ActionName, ActionParseError};
use crate::services;

use tracing::{debug, trace};

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub prefix: &'static str,
    pub name: &'static str,
    /// The service authorization reference page the tables were taken from.
    pub reference: &'static str,
    pub actions: &'static [ActionEntry],
    pub resource_types: &'static [ResourceType],
}

impl Service {
    pub fn action(&self, operation: &str) -> Option<&'static ActionEntry> {
        self.actions.iter().find(|entry| entry.operation().eq_ignore_ascii_case(operation))
    }

    pub fn actions_with(&self, level: AccessLevel) -> impl Iterator<Item = &'static ActionEntry> {
        self.actions.iter().filter(move |entry| entry.access_level == level)
    }

    pub fn resource_type(&self, name: &str) -> Option<&'static ResourceType> {
        self.resource_types.iter().find(|resource_type| resource_type.name.eq_ignore_ascii_case(name))
    }
}

pub const SERVICES: &[Service] = &[
    services::cloudformation::SERVICE,
    services::codecommit::SERVICE,
    services::dynamodb::SERVICE,
    services::kms::SERVICE,
    services::lambda::SERVICE,
    services::lex::SERVICE,
    services::route53::SERVICE,
    services::secretsmanager::SERVICE,
    services::sns::SERVICE,
    services::sqs::SERVICE,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    InvalidAction(ActionParseError),
    UnknownService(String),
    UnknownAction(String),
    UnknownResourceType(String, String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAction(err) => err.fmt(f),
            Self::UnknownService(prefix) => write!(f, "no service with prefix '{}'", prefix),
            Self::UnknownAction(action) => write!(f, "no action named '{}'", action),
            Self::UnknownResourceType(prefix, name) => {
                write!(f, "service '{}' has no resource type '{}'", prefix, name)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<ActionParseError> for CatalogError {
    fn from(err: ActionParseError) -> Self {
        Self::InvalidAction(err)
    }
}

pub fn service(prefix: &str) -> Result<&'static Service, CatalogError> {
    SERVICES.iter()
        .find(|service| service.prefix.eq_ignore_ascii_case(prefix))
        .ok_or_else(|| CatalogError::UnknownService(prefix.to_string()))
}

pub fn resource_type(prefix: &str, name: &str) -> Result<&'static ResourceType, CatalogError> {
    let service = service(prefix)?;
    service.resource_type(name)
        .ok_or_else(|| CatalogError::UnknownResourceType(service.prefix.to_string(), name.to_string()))
}

/// Resolves one concrete action, ignoring case as IAM does.
pub fn lookup(action: &str) -> Result<&'static ActionEntry, CatalogError> {
    let name: ActionName = action.parse()?;
    let service = service(name.service())?;
    let entry = service.action(name.operation())
        .ok_or_else(|| CatalogError::UnknownAction(action.to_string()))?;
    trace!(action, resolved = entry.name, "looked up action");
    Ok(entry)
}

/// Every catalogued action selected by an IAM action pattern such as
/// `dynamodb:Get*`, `*:List*` or a plain action name. `<prefix>:*` entries
/// are only returned when the pattern names them literally.
pub fn expand(pattern: &ActionName) -> Vec<&'static ActionEntry> {
    let literal_wildcard = pattern.operation() == "*" && !pattern.service().contains(['*', '?']);
    let entries: Vec<_> = SERVICES.iter()
        .flat_map(|service| service.actions.iter())
        .filter(|entry| entry.is_wildcard() == literal_wildcard)
        .filter(|entry| pattern.matches(entry.name))
        .collect();
    debug!(pattern = pattern.raw(), matched = entries.len(), "expanded action pattern");
    entries
}

#[cfg(test)]
mod test {
    use super::{expand, lookup, resource_type, service, CatalogError, SERVICES};
    use crate::iam::{AccessLevel, ActionParseError};

    use yare::parameterized;

    #[test]
    fn services_are_sorted_and_unique() {
        let prefixes: Vec<_> = SERVICES.iter().map(|service| service.prefix).collect();
        let mut sorted = prefixes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(prefixes, sorted);
    }

    #[test]
    fn service_lookup_ignores_case() {
        assert_eq!(service("DynamoDB").unwrap().prefix, "dynamodb");
        assert_eq!(service("s3").unwrap_err(), CatalogError::UnknownService("s3".into()));
    }

    #[parameterized(
        exact = { "dynamodb:PutItem", "dynamodb:PutItem", AccessLevel::Write },
        lowercase = { "sqs:sendmessage", "sqs:SendMessage", AccessLevel::Write },
        wildcard = { "kms:*", "kms:*", AccessLevel::Wildcard },
        tagging = { "lambda:TagResource", "lambda:TagResource", AccessLevel::Tagging },
    )]
    fn lookup_resolves(input: &str, expected: &str, level: AccessLevel) {
        let entry = lookup(input).unwrap();
        assert_eq!(entry.name, expected);
        assert_eq!(entry.access_level, level);
    }

    #[test]
    fn lookup_errors() {
        assert_eq!(lookup("PutItem").unwrap_err(), CatalogError::InvalidAction(ActionParseError::InvalidFormat));
        assert_eq!(lookup("ec2:RunInstances").unwrap_err(), CatalogError::UnknownService("ec2".into()));
        assert_eq!(lookup("sqs:PutItem").unwrap_err(), CatalogError::UnknownAction("sqs:PutItem".into()));
    }

    #[test]
    fn expand_prefix_pattern() {
        let names: Vec<_> = expand(&"dynamodb:Get*".parse().unwrap()).iter().map(|entry| entry.name).collect();
        assert_eq!(names, vec![
            "dynamodb:GetItem",
            "dynamodb:GetRecords",
            "dynamodb:GetResourcePolicy",
            "dynamodb:GetShardIterator",
        ]);
    }

    #[test]
    fn expand_across_services() {
        let entries = expand(&"*:TagResource".parse().unwrap());
        let services: Vec<_> = entries.iter().map(|entry| entry.service()).collect();
        assert!(services.contains(&"dynamodb"));
        assert!(services.contains(&"kms"));
        assert!(!services.contains(&"sqs"));
        assert!(entries.iter().all(|entry| entry.access_level == AccessLevel::Tagging));
    }

    #[test]
    fn expand_service_wildcard() {
        let all = expand(&"sqs:*".parse().unwrap());
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "sqs:*");

        let every = expand(&"sqs:*?".parse().unwrap());
        assert_eq!(every.len(), service("sqs").unwrap().actions.len() - 1);
    }

    #[test]
    fn actions_by_level() {
        let sqs = service("sqs").unwrap();
        let permissions: Vec<_> = sqs.actions_with(AccessLevel::PermissionsManagement)
            .map(|entry| entry.name)
            .collect();
        assert_eq!(permissions, vec!["sqs:AddPermission", "sqs:RemovePermission"]);
    }

    #[test]
    fn resource_type_lookup() {
        let index = resource_type("dynamodb", "index").unwrap();
        assert_eq!(index.fields, &["partition", "region", "account", "table_name", "index_name"]);
        assert!(matches!(resource_type("dynamodb", "bucket"), Err(CatalogError::UnknownResourceType(_, _))));
        assert_eq!(resource_type("DynamoDB", "Index").unwrap().name, "index");
        assert_eq!(service("lambda").unwrap().resource_type("FUNCTION_ALIAS").unwrap().name, "function_alias");
    }
}
