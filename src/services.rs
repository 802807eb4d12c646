pub mod cloudformation;
pub mod codecommit;
pub mod dynamodb;
pub mod kms;
pub mod lambda;
pub mod lex;
pub mod route53;
pub mod secretsmanager;
pub mod sns;
pub mod sqs;

#[cfg(test)]
mod test {
    use crate::aws::{ResourceType, ARN};
    use crate::catalog::SERVICES;
    use crate::iam::{AccessLevel, ServiceAction};

    use regex::Regex;
    use std::collections::HashSet;

    #[test]
    fn action_strings_are_well_formed() {
        let shape = Regex::new(r"^[a-z0-9-]+:[A-Za-z*]+$").unwrap();
        for service in SERVICES {
            for entry in service.actions {
                assert!(shape.is_match(entry.name), "malformed action {}", entry.name);
                assert_eq!(entry.service(), service.prefix, "{} outside its service", entry.name);
            }
        }
    }

    #[test]
    fn exactly_one_wildcard_per_service() {
        for service in SERVICES {
            let wildcard = format!("{}:*", service.prefix);
            let matching: Vec<_> = service.actions.iter().filter(|entry| entry.name == wildcard).collect();
            assert_eq!(matching.len(), 1, "{}", service.prefix);
            assert_eq!(matching[0].access_level, AccessLevel::Wildcard);
            assert_eq!(service.actions[0].name, wildcard);
            assert_eq!(service.actions.iter().filter(|entry| entry.is_wildcard()).count(), 1);
        }
    }

    #[test]
    fn action_names_are_unique() {
        for service in SERVICES {
            let mut seen = HashSet::new();
            for entry in service.actions {
                assert!(seen.insert(entry.name.to_lowercase()), "duplicate {}", entry.name);
            }
        }
    }

    #[test]
    fn enum_matches_entries() {
        fn check<A: ServiceAction + std::str::FromStr>() {
            for action in A::VARIANTS {
                assert!(action.as_str().starts_with(A::PREFIX));
                assert_eq!(action.to_string(), action.as_str());
                assert_eq!(action.name().raw(), action.as_str());
                assert!(action.as_str().parse::<A>().is_ok());
            }
            let entries: Vec<_> = A::VARIANTS.iter().map(|action| action.entry()).collect();
            let catalogued = crate::catalog::service(A::PREFIX).unwrap().actions;
            assert_eq!(entries.as_slice(), catalogued, "{}", A::PREFIX);
        }
        check::<super::cloudformation::Action>();
        check::<super::codecommit::Action>();
        check::<super::dynamodb::Action>();
        check::<super::kms::Action>();
        check::<super::lambda::Action>();
        check::<super::lex::Action>();
        check::<super::route53::Action>();
        check::<super::secretsmanager::Action>();
        check::<super::sns::Action>();
        check::<super::sqs::Action>();
    }

    #[test]
    fn all_variant_is_the_wildcard() {
        assert_eq!(super::dynamodb::Action::All.as_str(), "dynamodb:*");
        assert_eq!(super::lex::Action::All.access_level(), AccessLevel::Wildcard);
        assert_eq!(super::sqs::Action::All.operation(), "*");
    }

    #[test]
    fn default_arns_are_wildcarded() {
        for service in SERVICES {
            for resource_type in service.resource_types {
                let arn = resource_type.render(|_| None);
                let parsed: ARN = arn.parse()
                    .unwrap_or_else(|err| panic!("{} did not parse: {:?}", arn, err));
                assert_eq!(parsed.partition(), "*", "{}", arn);
                assert_eq!(parsed.service(), service.prefix, "{}", arn);
                // Global resources leave region and account empty.
                assert!(matches!(parsed.region(), "*" | ""), "{}", arn);
                assert!(matches!(parsed.account(), "*" | ""), "{}", arn);
                assert!(!parsed.resource().is_empty(), "{}", arn);
                assert!(!arn.contains('{') && !arn.contains('}'), "{}", arn);
            }
        }
    }

    #[test]
    fn regional_defaults_start_with_wildcard_header() {
        for service in SERVICES {
            for resource_type in service.resource_types {
                if resource_type.has_field("region") && resource_type.has_field("account") {
                    let prefix = format!("arn:*:{}:*:*:", service.prefix);
                    assert!(resource_type.render(|_| None).starts_with(&prefix), "{}", resource_type.name);
                }
            }
        }
    }

    const HEADER_FIELDS: &[&str] = &["partition", "region", "account"];

    fn placeholder_values(resource_type: &ResourceType) -> Vec<(&'static str, String)> {
        resource_type.fields.iter()
            .map(|field| (*field, format!("<{}>", field)))
            .collect()
    }

    fn render_pairs(resource_type: &ResourceType, values: &[(&'static str, String)]) -> ARN {
        let pairs: Vec<(&str, &str)> = values.iter()
            .map(|(field, value)| (*field, value.as_str()))
            .collect();
        let arn = resource_type.render_with(&pairs).unwrap();
        arn.parse().unwrap_or_else(|err| panic!("{} did not parse: {:?}", arn, err))
    }

    fn expected_segment(resource_type: &ResourceType, field: &str) -> String {
        if resource_type.has_field(field) {
            format!("<{}>", field)
        } else {
            String::new()
        }
    }

    #[test]
    fn supplied_values_land_in_position() {
        for service in SERVICES {
            for resource_type in service.resource_types {
                let arn = render_pairs(resource_type, &placeholder_values(resource_type));
                let name = resource_type.name;
                assert_eq!(arn.partition(), "<partition>", "{}", name);
                assert_eq!(arn.service(), service.prefix, "{}", name);
                assert_eq!(arn.region(), expected_segment(resource_type, "region"), "{}", name);
                assert_eq!(arn.account(), expected_segment(resource_type, "account"), "{}", name);
                assert!(!arn.raw().contains('*'), "{}", arn);

                let mut rest = arn.resource();
                for field in resource_type.fields.iter().filter(|field| !HEADER_FIELDS.contains(field)) {
                    let value = format!("<{}>", field);
                    let at = rest.find(&value)
                        .unwrap_or_else(|| panic!("{} missing or out of order in {}", value, arn));
                    rest = &rest[at + value.len()..];
                }
            }
        }
    }

    #[test]
    fn omitted_account_is_wildcarded() {
        for service in SERVICES {
            for resource_type in service.resource_types.iter().filter(|resource_type| resource_type.has_field("account")) {
                let full = render_pairs(resource_type, &placeholder_values(resource_type));
                let values: Vec<_> = placeholder_values(resource_type).into_iter()
                    .filter(|(field, _)| *field != "account")
                    .collect();
                let arn = render_pairs(resource_type, &values);
                assert_eq!(arn.account(), "*", "{}", arn);
                assert_eq!(arn.partition(), full.partition(), "{}", arn);
                assert_eq!(arn.service(), full.service(), "{}", arn);
                assert_eq!(arn.region(), full.region(), "{}", arn);
                assert_eq!(arn.resource(), full.resource(), "{}", arn);
            }
        }
    }

    #[test]
    fn templates_declare_exactly_their_fields() {
        let placeholder = Regex::new(r"\{([a-z_]+)\}").unwrap();
        for service in SERVICES {
            for resource_type in service.resource_types {
                let used: HashSet<&str> = placeholder.captures_iter(resource_type.template)
                    .map(|caps| caps.get(1).unwrap().as_str())
                    .collect();
                let declared: HashSet<&str> = resource_type.fields.iter().copied().collect();
                assert_eq!(used, declared, "{}", resource_type.name);
                assert_eq!(resource_type.service, service.prefix);
            }
        }
    }

    #[test]
    fn builders_agree_with_templates() {
        use super::{cloudformation, dynamodb, lex};

        let table = dynamodb::resource::table().partition("aws").table_name("Orders");
        let rendered = dynamodb::resource::Table::RESOURCE_TYPE
            .render_with(&[("partition", "aws"), ("table_name", "Orders")])
            .unwrap();
        assert_eq!(table.build(), rendered);

        let stack = cloudformation::resource::stack().stack_name("prod").id("abc-123");
        let rendered = cloudformation::resource::Stack::RESOURCE_TYPE
            .render_with(&[("stack_name", "prod"), ("id", "abc-123")])
            .unwrap();
        assert_eq!(stack.build(), rendered);

        assert_eq!(lex::resource::channel().build(), lex::resource::Channel::RESOURCE_TYPE.render(|_| None));
    }
}
