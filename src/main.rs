mod cli;

use mediacatalog::{config, manifest, resolve_root, CatalogBuilder, CatalogError};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mediacatalog=trace,mediacatalog_probe=debug,mediacatalog_av=debug".to_string()
        } else {
            "mediacatalog=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<CatalogError>()
                .map(CatalogError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.check_tools {
        check_tools(&load_config(cli)?);
        return Ok(());
    }

    // Root errors keep their own exit codes even when the config is broken.
    let root = match cli.root {
        Some(ref root) => root.clone(),
        None => default_root()?,
    };
    let root = resolve_root(&root)?;

    let config = load_config(cli)?;

    let builder = CatalogBuilder::from_config(&config);
    let catalog = builder.build(&root);

    if cli.dry_run {
        print!("{}", manifest::to_json(&catalog)?);
        return Ok(());
    }

    let path = manifest::write_manifest(&root, &catalog)?;
    println!("Found {} media files. Written to {}", catalog.len(), path.display());

    Ok(())
}

/// Load the config file (if any) and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<config::Config> {
    let mut config = config::load_config_or_default(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config::validate_config(&config)?;
    Ok(config)
}

/// Directory containing the running executable.
fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(|p| p.to_path_buf())
        .context("Executable has no parent directory")
}

fn check_tools(config: &config::Config) {
    println!("Checking external tools...\n");

    let tools = mediacatalog_av::check_tools(config.probe.ffprobe_path.as_deref());
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version.lines().next().unwrap_or(""));
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All tools are available!");
    } else {
        println!("ffprobe is missing. Video files will be listed as unknown.");
    }
}
