//! tfviz CLI — catalog lookup, outline printing and disclosure replay.
//!
//! Commands:
//! - `list` — component keys and names
//! - `show` — full detail of one component
//! - `outline` — the component hierarchy
//! - `simulate` — replay activations against a disclosure group
//! - `config` — print the default configuration

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use tfviz_core::catalog::{self, ComponentKey};
use tfviz_core::logging::{self, LogTarget};
use tfviz_core::outline::{transformer_outline, OutlineItem};
use tfviz_core::{
    DetailSection, DisclosureGroup, DisclosureMode, DisclosurePolicy, ExplorerConfig,
};

#[derive(Parser)]
#[command(
    name = "tfviz",
    about = "tfviz CLI — transformer architecture reference and accordion playground"
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog components.
    List {
        /// Emit JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show the full detail of one component.
    Show {
        /// Component key (input, positional, attention, norm, ffn, output).
        component: String,

        /// Emit JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the component outline.
    Outline,
    /// Replay activations against a disclosure group and print each state.
    Simulate {
        #[arg(long, value_enum, default_value_t = ModeArg::Exclusive)]
        mode: ModeArg,

        /// Let the open member collapse when activated again (exclusive mode).
        #[arg(long, default_value_t = false)]
        collapsible: bool,

        /// Comma-separated member keys.
        #[arg(long, value_delimiter = ',', required = true)]
        members: Vec<String>,

        /// Comma-separated initially expanded keys.
        #[arg(long, value_delimiter = ',')]
        initial: Vec<String>,

        /// Comma-separated keys to activate, in order.
        #[arg(long, value_delimiter = ',', required = true)]
        activate: Vec<String>,

        /// Emit JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print configuration.
    Config {
        /// Print the built-in defaults instead of the loaded file.
        #[arg(long, default_value_t = false)]
        default: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Exclusive,
    Independent,
}

impl From<ModeArg> for DisclosureMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Exclusive => DisclosureMode::Exclusive,
            ModeArg::Independent => DisclosureMode::Independent,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = tfviz_core::config::LogSettings {
        level: logging::level_for_verbosity(cli.verbose).to_string(),
        file: None,
    };
    logging::init(&settings, LogTarget::Stderr).context("initialize logging")?;

    match cli.command {
        Commands::List { json } => cmd_list(json),
        Commands::Show { component, json } => cmd_show(&component, json),
        Commands::Outline => {
            cmd_outline();
            Ok(())
        }
        Commands::Simulate {
            mode,
            collapsible,
            members,
            initial,
            activate,
            json,
        } => {
            let policy = DisclosurePolicy {
                mode: mode.into(),
                allow_collapse_last: collapsible,
            };
            cmd_simulate(policy, members, initial, &activate, json)
        }
        Commands::Config { default } => cmd_config(default),
    }
}

fn cmd_list(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog::all())?);
        return Ok(());
    }
    for info in catalog::all() {
        println!("{:<12} {}", info.key.as_str(), info.name);
    }
    Ok(())
}

fn cmd_show(component: &str, json: bool) -> Result<()> {
    let key: ComponentKey = component.parse()?;
    let info = catalog::lookup(key);

    if json {
        println!("{}", serde_json::to_string_pretty(info)?);
        return Ok(());
    }

    println!("{} ({})", info.name, info.key);
    println!();
    for section in DetailSection::ALL {
        println!("{}:", section.title());
        for line in section.body(info) {
            println!("  {line}");
        }
        println!();
    }
    Ok(())
}

fn cmd_outline() {
    for item in &transformer_outline().items {
        match item {
            OutlineItem::Leaf(leaf) => {
                println!("{} [{}]", leaf.name, leaf.component);
            }
            OutlineItem::Group { name, children } => {
                println!("{name}");
                for leaf in children {
                    println!("  {} [{}]", leaf.name, leaf.component);
                }
            }
        }
    }
}

/// One replay step, for JSON output.
#[derive(Debug, Serialize)]
struct SimulationStep {
    activated: String,
    changed: bool,
    expanded: Vec<String>,
}

fn cmd_simulate(
    policy: DisclosurePolicy,
    members: Vec<String>,
    initial: Vec<String>,
    activate: &[String],
    json: bool,
) -> Result<()> {
    let mut group =
        DisclosureGroup::new(policy, members, initial).context("build disclosure group")?;

    let mut steps = Vec::with_capacity(activate.len());
    for key in activate {
        let changed = match group.activate(key) {
            Ok(changed) => changed,
            Err(e) => bail!("step {}: {e}", steps.len() + 1),
        };
        steps.push(SimulationStep {
            activated: key.clone(),
            changed,
            expanded: group.expanded().cloned().collect(),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    println!(
        "mode={} allow_collapse_last={}",
        policy.mode.label(),
        policy.allow_collapse_last
    );
    for (i, step) in steps.iter().enumerate() {
        let marker = if step.changed { "" } else { " (no change)" };
        println!(
            "{:>3}. activate {:<10} -> {{{}}}{marker}",
            i + 1,
            step.activated,
            step.expanded.join(", ")
        );
    }
    Ok(())
}

fn cmd_config(default: bool) -> Result<()> {
    let config = if default {
        ExplorerConfig::default()
    } else {
        match ExplorerConfig::default_path() {
            Some(path) => ExplorerConfig::load(&path)
                .with_context(|| format!("load config {}", path.display()))?,
            None => ExplorerConfig::default(),
        }
    };
    print!("{}", config.to_toml()?);
    Ok(())
}
