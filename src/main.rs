use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use plot_api_bindings::graph::{Figure, GraphState, TraceCount};
use plot_api_bindings::render::{BindingReport, OutputFormat, render_report};
use plot_api_bindings::{Command, Result, binding, compute_bindings};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plot-api-bindings")]
#[command(about = "Resolve restyle/relayout call notations into attribute bindings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the attribute bindings a command invocation touches.
    Bindings {
        /// Command name: restyle or relayout.
        #[arg(long)]
        command: String,

        /// Argument list as a JSON array, e.g. '["marker.size", 7]'.
        #[arg(long, conflicts_with = "args_file", required_unless_present = "args_file")]
        args: Option<String>,

        /// File holding the JSON argument list.
        #[arg(long)]
        args_file: Option<String>,

        /// Number of traces in the graph.
        #[arg(long, conflicts_with = "figure", required_unless_present = "figure")]
        traces: Option<usize>,

        /// Figure JSON ({"data": [...], "layout": {...}}); traces are counted from `data`.
        #[arg(long)]
        figure: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
        format: OutputFormat,
    },

    /// Validate a binding-list file and print its bindings.
    Parse {
        #[arg(long)]
        file: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let out = match cli.cmd {
        Commands::Bindings {
            command,
            args,
            args_file,
            traces,
            figure,
            format,
        } => {
            // 1) Resolve command scope; the CLI only knows the built-ins.
            let Some(cmd) = Command::from_name(&command) else {
                bail!("unknown command {:?} (expected restyle or relayout)", command);
            };

            // 2) Argument list.
            let text = match (args, args_file) {
                (Some(text), _) => text,
                (None, Some(path)) => {
                    std::fs::read_to_string(&path).with_context(|| format!("read args file {}", path))?
                }
                (None, None) => bail!("one of --args or --args-file is required"),
            };
            let args: Vec<Value> = match serde_json::from_str(&text).context("parse argument list")? {
                Value::Array(items) => items,
                other => bail!("argument list must be a JSON array, got {}", other),
            };

            // 3) Graph.
            let trace_count = match (traces, figure) {
                (Some(n), _) => n,
                (None, Some(path)) => Figure::load(&path)?.trace_count(),
                (None, None) => bail!("one of --traces or --figure is required"),
            };

            tracing::debug!(%cmd, trace_count, args = args.len(), "computing bindings");
            let bindings = compute_bindings(&TraceCount(trace_count), cmd.scope(), &args);

            render_report(
                &BindingReport {
                    command: Some(cmd.to_string()),
                    trace_count: Some(trace_count),
                    bindings,
                },
                format,
            )?
        }
        Commands::Parse { file, format } => {
            let bindings = binding::parse_binding_file(&file)?;
            render_report(
                &BindingReport {
                    command: None,
                    trace_count: None,
                    bindings,
                },
                format,
            )?
        }
    };

    print!("{}", out);
    Ok(())
}
