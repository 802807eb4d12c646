pub const WILDCARD: &str = "*";

/// Returns `value`, or [`WILDCARD`] when it is absent or empty.
pub fn or_wildcard(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => WILDCARD,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    UnknownField(String),
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(field) => write!(f, "unknown ARN field '{}'", field),
        }
    }
}

impl std::error::Error for TemplateError {}

/// One kind of resource a service exposes, e.g. a DynamoDB `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceType {
    pub service: &'static str,
    pub name: &'static str,
    pub template: &'static str,
    pub fields: &'static [&'static str],
}

impl ResourceType {
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|name| *name == field)
    }

    /// Substitutes every `{field}` placeholder with `lookup(field)`, or `*`
    /// when the lookup yields nothing.
    pub fn render<'a, F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    out.push_str(or_wildcard(lookup(&after[..end])));
                    rest = &after[end + 1..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    pub fn render_with(&self, values: &[(&str, &str)]) -> Result<String, TemplateError> {
        if let Some((field, _)) = values.iter().find(|(field, _)| !self.has_field(field)) {
            return Err(TemplateError::UnknownField(field.to_string()));
        }
        Ok(self.render(|field| {
            values.iter().rev().find(|(name, _)| *name == field).map(|(_, value)| *value)
        }))
    }
}

#[cfg(test)]
mod test {
    use super::{or_wildcard, ResourceType, TemplateError};

    const INDEX: ResourceType = ResourceType {
        service: "dynamodb",
        name: "index",
        template: "arn:{partition}:dynamodb:{region}:{account}:table/{table_name}/index/{index_name}",
        fields: &["partition", "region", "account", "table_name", "index_name"],
    };

    #[test]
    fn wildcard_defaults() {
        assert_eq!(or_wildcard(None), "*");
        assert_eq!(or_wildcard(Some("")), "*");
        assert_eq!(or_wildcard(Some("aws")), "aws");
    }

    #[test]
    fn render_all_wildcards() {
        assert_eq!(INDEX.render(|_| None), "arn:*:dynamodb:*:*:table/*/index/*");
    }

    #[test]
    fn render_with_values() {
        let arn = INDEX.render_with(&[
            ("partition", "aws"),
            ("region", "us-east-1"),
            ("account", "123456789012"),
            ("table_name", "Orders"),
            ("index_name", "ByDate"),
        ]).unwrap();
        assert_eq!(arn, "arn:aws:dynamodb:us-east-1:123456789012:table/Orders/index/ByDate");
    }

    #[test]
    fn render_with_empty_value_is_wildcard() {
        let arn = INDEX.render_with(&[("table_name", "Orders"), ("index_name", "")]).unwrap();
        assert_eq!(arn, "arn:*:dynamodb:*:*:table/Orders/index/*");
    }

    #[test]
    fn render_with_unknown_field() {
        let err = INDEX.render_with(&[("bucket_name", "logs")]).unwrap_err();
        assert_eq!(err, TemplateError::UnknownField("bucket_name".into()));
    }
}
