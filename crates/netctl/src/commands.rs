use std::io;

use clap::ArgMatches;
use tracing::{error, info, warn};

use netctl_core::config::{Config, NetctlConfig};
use netctl_core::events;
use netctl_core::network_ops;
use netctl_core::{AssumeNo, BatchError, ConfirmationPrompt, LocalNetworkStore, StreamPrompt};

use crate::table::TableFormatter;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning(runtime: &Config) -> NetctlConfig {
    match NetctlConfig::load_hierarchy(runtime) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check {} and ./.netctl/config.toml for syntax errors.",
                e,
                runtime.user_config_path().display()
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            NetctlConfig::default()
        }
    }
}

fn open_store() -> (LocalNetworkStore, NetctlConfig) {
    let runtime = Config::new();
    let config = load_config_with_warning(&runtime);
    let store = LocalNetworkStore::new(config.networks_dir(&runtime));
    (store, config)
}

/// Confirmation source for this invocation: stdin/stdout, or an automatic
/// "no" when `[prompt] assume_no` is set.
fn build_prompt(config: &NetctlConfig) -> Box<dyn ConfirmationPrompt> {
    if config.assume_no() {
        Box::new(AssumeNo)
    } else {
        Box::new(StreamPrompt::new(io::stdin().lock(), io::stdout()))
    }
}

fn network_args(matches: &ArgMatches) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let networks: Vec<String> = matches
        .get_many::<String>("networks")
        .ok_or("At least one network argument is required")?
        .cloned()
        .collect();
    Ok(networks)
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("network", sub_matches)) => handle_network_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

fn handle_network_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("rm", sub_matches)) => handle_rm_command(sub_matches),
        Some(("ls", sub_matches)) => handle_ls_command(sub_matches),
        Some(("inspect", sub_matches)) => handle_inspect_command(sub_matches),
        Some(("prune", sub_matches)) => handle_prune_command(sub_matches),
        _ => {
            error!(event = "cli.network.command_unknown");
            Err("Unknown network command".into())
        }
    }
}

fn handle_rm_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let networks = network_args(matches)?;

    info!(event = "cli.network.rm_started", count = networks.len());

    let (store, config) = open_store();
    let mut prompt = build_prompt(&config);
    let mut stdout = io::stdout();

    match network_ops::remove_networks(&store, prompt.as_mut(), &mut stdout, &networks) {
        Ok(()) => {
            info!(event = "cli.network.rm_completed", count = networks.len());
            Ok(())
        }
        Err(e) => {
            error!(
                event = "cli.network.rm_failed",
                failed = ?e.failed_names(),
                error = %e
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_ls_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let quiet = matches.get_flag("quiet");
    let json_output = matches.get_flag("json");

    info!(event = "cli.network.ls_started", quiet = quiet, json_output = json_output);

    let (store, _) = open_store();
    let networks = match network_ops::list_networks(&store) {
        Ok(networks) => networks,
        Err(e) => {
            eprintln!("Failed to list networks: {}", e);
            error!(event = "cli.network.ls_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&networks)?);
    } else if quiet {
        for network in &networks {
            println!("{}", network.id);
        }
    } else if networks.is_empty() {
        println!("No networks found.");
    } else {
        TableFormatter::new(&networks).print_table(&networks);
    }

    info!(event = "cli.network.ls_completed", count = networks.len());
    Ok(())
}

fn handle_inspect_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let names = network_args(matches)?;

    info!(event = "cli.network.inspect_started", count = names.len());

    let (store, _) = open_store();
    let (networks, failures) = network_ops::inspect_networks(&store, &names);

    println!("{}", serde_json::to_string_pretty(&networks)?);

    if let Err(e) = BatchError::from_failures(failures) {
        error!(
            event = "cli.network.inspect_failed",
            failed = ?e.failed_names(),
            error = %e
        );
        return Err(e.into());
    }

    info!(event = "cli.network.inspect_completed", count = networks.len());
    Ok(())
}

fn handle_prune_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let force = matches.get_flag("force");

    info!(event = "cli.network.prune_started", force = force);

    let (store, config) = open_store();
    let mut prompt = build_prompt(&config);

    let report = match network_ops::prune_networks(&store, prompt.as_mut(), force) {
        Ok(Some(report)) => report,
        Ok(None) => {
            info!(event = "cli.network.prune_aborted");
            return Ok(());
        }
        Err(e) => {
            error!(event = "cli.network.prune_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if !report.deleted.is_empty() {
        println!("Deleted Networks:");
        for name in &report.deleted {
            println!("{}", name);
        }
    }

    info!(
        event = "cli.network.prune_completed",
        deleted = report.deleted.len(),
        failed = report.failures.len()
    );

    BatchError::from_failures(report.failures).map_err(|e| {
        error!(event = "cli.network.prune_failed", error = %e);
        e.into()
    })
}
