//! The per-identifier export pipeline

pub mod graph_exporter;

pub use graph_exporter::{ExportSummary, GraphBlock, GraphExporter};
