//! graph-exporter - export museum object graphs from a SPARQL endpoint
//!
//! Usage:
//!   graph-exporter                                   # BM20.xml against the research space endpoint
//!   graph-exporter --document BM20.xml --output BM20-expected.n3
//!   graph-exporter --endpoint http://localhost:3030/bm/sparql --on-error skip
//!   graph-exporter --config export.json --format ntriples

use anyhow::Context;
use clap::Parser;
use graph_exporter::{ErrorPolicy, ExportConfig, GraphExporter, ResponseFormat};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "graph-exporter", version)]
#[command(about = "Export museum object graphs from a SPARQL endpoint, rewriting the CRM namespace")]
struct Args {
    /// XML document listing the object identifiers
    #[arg(short, long, default_value = "BM20.xml")]
    document: PathBuf,

    /// JSON config file; explicit flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SPARQL endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Base URI of the per-object named graphs
    #[arg(long)]
    graph_base: Option<String>,

    /// Namespace to replace in every response
    #[arg(long)]
    old_prefix: Option<String>,

    /// Replacement namespace
    #[arg(long)]
    new_prefix: Option<String>,

    /// Name of the elements holding identifiers
    #[arg(long)]
    element: Option<String>,

    /// Response format requested: plain, ntriples, turtle, rdfxml, jsonld, nquads
    #[arg(short, long)]
    format: Option<ResponseFormat>,

    /// On a failed request: fail, skip, or passthrough
    #[arg(long)]
    on_error: Option<ErrorPolicy>,

    /// Per-request timeout in seconds (none by default)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn export_config(&self) -> anyhow::Result<ExportConfig> {
        let mut config = match &self.config {
            Some(path) => ExportConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ExportConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.endpoint_url.clone_from(endpoint);
        }
        if let Some(base) = &self.graph_base {
            config.graph_base_uri.clone_from(base);
        }
        if let Some(prefix) = &self.old_prefix {
            config.old_prefix.clone_from(prefix);
        }
        if let Some(prefix) = &self.new_prefix {
            config.new_prefix.clone_from(prefix);
        }
        if let Some(element) = &self.element {
            config.identifier_element.clone_from(element);
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(policy) = self.on_error {
            config.error_policy = policy;
        }
        if self.timeout_secs.is_some() {
            config.timeout_secs = self.timeout_secs;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only statements.
    // RUST_LOG wins; the info default only applies when it is unset.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("graph_exporter=info"));
    tracing_subscriber::fmt().with_writer(io::stderr).with_env_filter(filter).init();

    let args = Args::parse();
    let config = args.export_config()?;

    info!(
        document = %args.document.display(),
        endpoint = %config.endpoint_url,
        policy = ?config.error_policy,
        "Starting graph export"
    );

    let exporter = GraphExporter::new(config).context("Failed to initialize exporter")?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    exporter
        .write_document(&args.document, &mut out)
        .await
        .with_context(|| format!("Export of {} failed", args.document.display()))?;
    out.flush()?;

    Ok(())
}
