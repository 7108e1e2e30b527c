//! sniffdef CLI entry point.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sniffdef::cli::{Args, OutputTarget};
use sniffdef::config::GenerationConfig;
use sniffdef::generate::generate;
use sniffdef::layouts::load_layouts;
use sniffdef_core::protocol::{definition_name, file_token, topic_token};
use sniffdef_core::{default_registry, Emitter, Encoding, Protocol, SchemaRegistry};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging; stdout carries only the generated program
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(std::io::stderr)
        .init();

    if args.list_protocols {
        list_protocols();
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => GenerationConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => GenerationConfig::default(),
    };
    args.apply(&mut config);
    let plan = config.resolve().context("Invalid configuration")?;

    let mut registry = default_registry();
    if let Some(dir) = &plan.layouts {
        load_layouts(
            &mut registry,
            dir,
            &plan.protocols,
            &plan.versions,
            plan.encoding,
        )
        .with_context(|| format!("Failed to load layouts from {}", dir.display()))?;
    }

    if let Some(protocol) = &args.schema {
        let protocol: Protocol = protocol.parse()?;
        return show_schema(&registry, protocol, &plan);
    }

    let report = generate(&registry, &plan)?;

    let target = OutputTarget::from_args(args.output.as_deref(), args.output_dir.as_deref());
    target
        .write(&Emitter::new(plan.style), &report.definitions)
        .context("Failed to write output")?;

    for skipped in &report.skipped {
        eprintln!("skipped {}: {}", skipped.key, skipped.error);
    }
    if !report.is_complete() {
        bail!(
            "{} of {} definitions skipped",
            report.skipped.len(),
            report.skipped.len() + report.definitions.len()
        );
    }

    Ok(())
}

fn list_protocols() {
    println!(
        "{:<16} {:<22} {:<16} {:<16} {:<16} {:<20} {:<16}",
        "Protocol", "Name", "CSV file", "CSV topic", "CSV definition", "CHB file/topic", "CHB definition"
    );
    println!("{:-<128}", "");

    for protocol in Protocol::ALL {
        println!(
            "{:<16} {:<22} {:<16} {:<16} {:<16} {:<20} {:<16}",
            protocol.name(),
            protocol.display_name(),
            file_token(protocol, Encoding::Csv),
            topic_token(protocol, Encoding::Csv),
            definition_name(protocol, Encoding::Csv),
            file_token(protocol, Encoding::RowBinary),
            definition_name(protocol, Encoding::RowBinary),
        );
    }
}

fn show_schema(
    registry: &SchemaRegistry,
    protocol: Protocol,
    plan: &sniffdef::config::GenerationPlan,
) -> Result<()> {
    for version in &plan.versions {
        let schema = registry.schema_for(protocol, version, plan.encoding)?;

        println!("Schema: {}", schema.key());
        println!("{:-<80}", "");
        println!("{:>4}  {:<32} {:<8} {:<8} {:<16} Notes", "#", "Field", "Type", "Nullable", "Unit");
        println!("{:-<80}", "");

        for (idx, field) in schema.fields().iter().enumerate() {
            let nullable = if field.nullable { "YES" } else { "NO" };
            let unit = field.unit.map(|u| u.to_string()).unwrap_or_default();
            println!(
                "{:>4}  {:<32} {:<8} {:<8} {:<16} {}",
                idx + 1,
                field.name(),
                field.kind.type_name(),
                nullable,
                unit,
                field.description.unwrap_or("")
            );
        }
        println!();
    }
    Ok(())
}
