//! SDK project properties CLI
//!
//! Entry point for the `sdk-props` command-line tool.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use sdk_project_props::apk_config;
use sdk_project_props::properties::check_property;
use sdk_project_props::{DefaultProperties, ProjectProperties, PropertyType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sdk-props")]
#[command(about = "Inspect and edit SDK project property files", version)]
struct Cli {
    /// Project folder holding the property files
    #[arg(long, short = 'p', global = true, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all properties of a file
    Show {
        /// Property file kind (build, default, local)
        #[arg(long, short = 'k', default_value = "default")]
        kind: PropertyType,

        /// Kinds to merge in, in order; existing keys are never overridden
        #[arg(long, value_delimiter = ',')]
        merge: Vec<PropertyType>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the value of one property
    Get {
        key: String,

        #[arg(long, short = 'k', default_value = "default")]
        kind: PropertyType,

        #[arg(long, value_delimiter = ',')]
        merge: Vec<PropertyType>,
    },

    /// Set a property and save the file, creating it if needed
    Set {
        key: String,
        value: String,

        #[arg(long, short = 'k', default_value = "default")]
        kind: PropertyType,
    },

    /// Remove a property and save the file
    Remove {
        key: String,

        #[arg(long, short = 'k', default_value = "default")]
        kind: PropertyType,
    },

    /// Set the project target in default.properties
    SetTarget {
        /// Target hash string, e.g. android-4
        target: String,
    },

    /// List apk configurations
    ApkConfigs {
        #[arg(long, short = 'k', default_value = "default")]
        kind: PropertyType,
    },

    /// Print what saving the file would write, without writing it
    Render {
        #[arg(long, short = 'k', default_value = "default")]
        kind: PropertyType,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let project = cli.project;

    match cli.command {
        Commands::Show { kind, merge, json } => run_show(&project, kind, &merge, json),
        Commands::Get { key, kind, merge } => run_get(&project, kind, &merge, &key),
        Commands::Set { key, value, kind } => run_set(&project, kind, &key, value),
        Commands::Remove { key, kind } => run_remove(&project, kind, &key),
        Commands::SetTarget { target } => run_set_target(&project, &target),
        Commands::ApkConfigs { kind } => run_apk_configs(&project, kind),
        Commands::Render { kind } => run_render(&project, kind),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

/// Load a file that must exist, then merge the given kinds into it.
fn load_merged(project: &Path, kind: PropertyType, merge: &[PropertyType]) -> ProjectProperties {
    let mut props = match ProjectProperties::try_load(project, kind) {
        Ok(Some(props)) => props,
        Ok(None) => fail(format!("No {} in {}", kind.filename(), project.display())),
        Err(e) => fail(format!("Error loading properties: {}", e)),
    };

    for other in merge {
        props.merge(*other);
    }
    props
}

/// Load a file for editing, or start an empty one.
///
/// A file that exists but cannot be parsed is an error here, so it is
/// never overwritten.
fn load_or_create(project: &Path, kind: PropertyType) -> ProjectProperties {
    match ProjectProperties::try_load(project, kind) {
        Ok(Some(props)) => props,
        Ok(None) => ProjectProperties::create(project, kind),
        Err(e) => fail(format!("Error loading properties: {}", e)),
    }
}

fn save(props: &ProjectProperties) {
    if let Err(e) = props.save() {
        fail(format!("Error saving properties: {}", e));
    }
}

fn run_show(project: &Path, kind: PropertyType, merge: &[PropertyType], json_output: bool) {
    let props = load_merged(project, kind, merge);

    if json_output {
        let properties: serde_json::Map<String, serde_json::Value> = props
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        let output = serde_json::json!({
            "kind": props.kind(),
            "path": props.path(),
            "properties": properties,
            "sources": props.sources(),
        });

        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(format!("Error serializing output: {}", e)),
        }
    } else {
        for (key, value) in props.iter() {
            println!("{}={}", key, value);
        }
    }
}

fn run_get(project: &Path, kind: PropertyType, merge: &[PropertyType], key: &str) {
    let props = load_merged(project, kind, merge);

    match props.get_property(key) {
        Some(value) => println!("{}", value),
        None => process::exit(1),
    }
}

fn run_set(project: &Path, kind: PropertyType, key: &str, value: String) {
    if let Err(e) = check_property(key, &value) {
        fail(e);
    }

    let mut props = load_or_create(project, kind);
    props.set_property(key, value);
    save(&props);
}

fn run_remove(project: &Path, kind: PropertyType, key: &str) {
    let mut props = load_merged(project, kind, &[]);

    match props.remove_property(key) {
        Some(previous) => {
            save(&props);
            println!("{}", previous);
        }
        None => fail(format!("{} is not set in {}", key, kind.filename())),
    }
}

fn run_set_target(project: &Path, target: &str) {
    let props = load_or_create(project, PropertyType::Default);
    let mut props = match DefaultProperties::try_from(props) {
        Ok(props) => props,
        Err(e) => fail(e),
    };

    props.set_android_target(target);
    save(&props);
}

fn run_apk_configs(project: &Path, kind: PropertyType) {
    let props = load_merged(project, kind, &[]);
    let configs = apk_config::get_configs(&props);

    if configs.is_empty() {
        println!("No apk configurations.");
        return;
    }

    for (name, filter) in &configs {
        println!("  {}: {}", name, filter);
    }
}

fn run_render(project: &Path, kind: PropertyType) {
    let props = load_or_create(project, kind);
    print!("{}", props.render());
}
