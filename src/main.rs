use awsiam::aws::ARN;
use awsiam::catalog::{self, Service};
use awsiam::iam::{AccessLevel, ActionName};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(about, version)]
struct Args {
    /// Log at debug level unless RUST_LOG is set
    #[clap(short, long, global = true)]
    verbose: bool,

    /// Print listings as JSON
    #[clap(long, global = true)]
    json: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the catalogued services
    Services,
    /// List the actions of a service
    Actions {
        service: String,

        /// Only show actions with this access level
        #[clap(long)]
        level: Option<String>,
    },
    /// List the actions matched by a pattern such as dynamodb:Get*
    Expand {
        pattern: String,
    },
    /// List the resource types of a service and their ARN formats
    Resources {
        service: String,
    },
    /// Build an ARN from field=value pairs, leaving the rest as *
    Arn {
        service: String,
        resource_type: String,
        fields: Vec<String>,
    },
    /// Print a policy document with one statement
    Statement {
        #[clap(long = "action", required = true)]
        actions: Vec<String>,

        #[clap(long = "resource")]
        resources: Vec<String>,

        #[clap(long)]
        sid: Option<String>,

        #[clap(long)]
        deny: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn object(entries: Vec<(&str, json::JsonValue)>) -> json::JsonValue {
    let mut value = json::JsonValue::new_object();
    for (key, entry) in entries {
        value[key] = entry;
    }
    value
}

fn print_json(value: json::JsonValue) {
    println!("{}", value.pretty(2));
}

fn list_services(as_json: bool) {
    if as_json {
        let services: Vec<json::JsonValue> = catalog::SERVICES.iter().map(|service| object(vec![
            ("prefix", service.prefix.into()),
            ("name", service.name.into()),
            ("reference", service.reference.into()),
            ("actions", service.actions.len().into()),
            ("resource_types", service.resource_types.len().into()),
        ])).collect();
        return print_json(services.into());
    }
    for service in catalog::SERVICES {
        println!("{:<16} {} ({} actions)", service.prefix, service.name, service.actions.len());
    }
}

fn list_actions(service: &Service, level: Option<AccessLevel>, as_json: bool) {
    let entries: Vec<_> = match level {
        Some(level) => service.actions_with(level).collect(),
        None => service.actions.iter().collect(),
    };
    if as_json {
        let entries: Vec<json::JsonValue> = entries.iter().map(|entry| object(vec![
            ("action", entry.name.into()),
            ("access_level", entry.access_level.as_str().into()),
        ])).collect();
        return print_json(entries.into());
    }
    for entry in entries {
        println!("{:<60} {}", entry.name, entry.access_level);
    }
}

fn list_resources(service: &Service, as_json: bool) {
    if as_json {
        let resource_types: Vec<json::JsonValue> = service.resource_types.iter().map(|resource_type| object(vec![
            ("name", resource_type.name.into()),
            ("template", resource_type.template.into()),
            ("fields", resource_type.fields.to_vec().into()),
        ])).collect();
        return print_json(resource_types.into());
    }
    for resource_type in service.resource_types {
        println!("{:<24} {}", resource_type.name, resource_type.template);
    }
}

fn build_arn(service: &str, resource_type: &str, fields: &[String]) -> anyhow::Result<String> {
    let resource_type = catalog::resource_type(service, resource_type)?;
    let pairs = fields.iter()
        .map(|field| field.split_once('=').ok_or_else(|| anyhow!("expected field=value, got '{}'", field)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let arn = resource_type.render_with(&pairs)?;
    debug!(%arn, resource_type = resource_type.name, "built ARN");
    Ok(arn)
}

fn statement_actions(actions: &[String]) -> anyhow::Result<Vec<String>> {
    actions.iter().map(|action| -> anyhow::Result<String> {
        let name: ActionName = action.parse()
            .with_context(|| format!("invalid action '{}'", action))?;
        if name.is_pattern() {
            if catalog::expand(&name).is_empty() {
                warn!(pattern = name.raw(), "action pattern matches nothing in the catalogue");
            }
            return Ok(name.raw().to_string());
        }
        Ok(catalog::lookup(name.raw())?.name.to_string())
    }).collect()
}

fn statement_resources(resources: &[String]) -> anyhow::Result<Vec<String>> {
    if resources.is_empty() {
        return Ok(vec!["*".to_string()]);
    }
    resources.iter().map(|resource| -> anyhow::Result<String> {
        if resource == "*" {
            return Ok(resource.clone());
        }
        let arn: ARN = resource.parse()
            .with_context(|| format!("invalid resource '{}'", resource))?;
        Ok(arn.raw().to_string())
    }).collect()
}

fn statement_document(actions: &[String], resources: &[String], sid: Option<String>, deny: bool) -> anyhow::Result<json::JsonValue> {
    let mut statement = json::JsonValue::new_object();
    if let Some(sid) = sid {
        statement["Sid"] = sid.into();
    }
    statement["Effect"] = if deny { "Deny" } else { "Allow" }.into();
    statement["Action"] = statement_actions(actions)?.into();
    statement["Resource"] = statement_resources(resources)?.into();
    Ok(object(vec![
        ("Version", "2012-10-17".into()),
        ("Statement", vec![statement].into()),
    ]))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    debug!(command = ?args.command, "starting");
    match args.command {
        Command::Services => list_services(args.json),
        Command::Actions { service, level } => {
            let level = level
                .map(|level| level.parse::<AccessLevel>())
                .transpose()?;
            list_actions(catalog::service(&service)?, level, args.json);
        }
        Command::Expand { pattern } => {
            let pattern: ActionName = pattern.parse()
                .with_context(|| format!("invalid action pattern '{}'", pattern))?;
            let entries = catalog::expand(&pattern);
            if args.json {
                print_json(entries.iter().map(|entry| entry.name).collect::<Vec<_>>().into());
            } else {
                entries.iter().for_each(|entry| println!("{}", entry.name));
            }
        }
        Command::Resources { service } => list_resources(catalog::service(&service)?, args.json),
        Command::Arn { service, resource_type, fields } => {
            println!("{}", build_arn(&service, &resource_type, &fields)?);
        }
        Command::Statement { actions, resources, sid, deny } => {
            print_json(statement_document(&actions, &resources, sid, deny)?);
        }
    }
    Ok(())
}
