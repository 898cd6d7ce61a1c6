/// CLI argument definitions for the `tagdiff` command.
///
/// Defines the subcommands and their shared arguments using the `clap`
/// derive macros.
use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::engine::DiffRequest;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "tagdiff",
    version,
    about = "Diff analytics for tagged-product snapshots"
)]
pub struct Cli {
    /// Log debug details to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Request parameters. Lists accept repeated flags or comma-separated values.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Read request parameters from a JSON file instead of flags
    #[arg(
        long,
        conflicts_with_all = ["commit_ids", "tag_types", "tags", "products", "data_elements"]
    )]
    pub request: Option<PathBuf>,

    /// Commit ids of the compared snapshots (informational)
    #[arg(long, value_delimiter = ',')]
    pub commit_ids: Vec<String>,

    /// Keep only these tag types
    #[arg(long, value_delimiter = ',')]
    pub tag_types: Vec<String>,

    /// Keep only these tags
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Keep only these product ids (UPCs)
    #[arg(long, value_delimiter = ',')]
    pub products: Vec<String>,

    /// Keep only these data elements
    #[arg(long, value_delimiter = ',')]
    pub data_elements: Vec<String>,
}

impl FilterArgs {
    pub fn to_request(&self) -> Result<DiffRequest, Box<dyn Error>> {
        if let Some(path) = &self.request {
            return Ok(DiffRequest::load(path)?);
        }
        Ok(DiffRequest {
            commit_ids: self.commit_ids.clone(),
            tag_types: self.tag_types.clone(),
            tags: self.tags.clone(),
            products: self.products.clone(),
            data_elements: self.data_elements.clone(),
        })
    }
}

/// Arguments shared by every command.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Change table: JSON array of rows, or JSON Lines (.jsonl)
    #[arg(long)]
    pub changes: PathBuf,

    /// Engine configuration (default: ./tagdiff.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Seed for sampling, overriding the configured one
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Full diff report: metrics, filter options, charts and sampled products
    #[command(long_about = "\
Full diff report for one request.

Metrics are deduplicated counts over the filtered rows, each with its
percentage of the same count over the unfiltered table:
  uniqueTagsAdded / uniqueTagsDeleted     -- distinct tags
  tagsInstancesAdded / tagsInstancesRemoved -- distinct (upc, tag, data_element)
  upcChanged                              -- distinct products

Charts count raw rows per key (tags: top 10 by frequency; tagType and
dataElements: every key). Filter options and the product detail table are
drawn from bounded random samples (100 rows by default).")]
    Report {
        #[command(flatten)]
        common: CommonArgs,

        /// Product detail table: JSON array of objects keyed by the join column
        #[arg(long)]
        details: PathBuf,
    },

    /// Baseline counts and filtered metrics
    Metrics {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Added/deleted series per chart group
    Chart {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Filter values found in a sample of the filtered rows
    Options {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_report_with_filters() {
        let cli = Cli::try_parse_from([
            "tagdiff",
            "report",
            "--changes",
            "c.json",
            "--details",
            "d.json",
            "--tags",
            "X,Y",
            "--tags",
            "Z",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Report { common, details } => {
                assert_eq!(details, PathBuf::from("d.json"));
                assert!(common.json);
                assert_eq!(common.filters.tags, vec!["X", "Y", "Z"]);
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn report_requires_details() {
        let result = Cli::try_parse_from(["tagdiff", "report", "--changes", "c.json"]);
        assert!(result.is_err(), "--details is required for report");
    }

    #[test]
    fn request_file_conflicts_with_filter_flags() {
        let result = Cli::try_parse_from([
            "tagdiff",
            "metrics",
            "--changes",
            "c.json",
            "--request",
            "r.json",
            "--tags",
            "X",
        ]);
        assert!(result.is_err(), "--request and --tags are exclusive");
    }

    #[test]
    fn verbose_is_global() {
        let cli =
            Cli::try_parse_from(["tagdiff", "chart", "--changes", "c.json", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn flags_become_request() {
        let args = FilterArgs {
            commit_ids: vec!["abc".into()],
            products: vec!["0001".into()],
            ..Default::default()
        };
        let req = args.to_request().unwrap();
        assert_eq!(req.commit_ids, vec!["abc"]);
        assert_eq!(req.products, vec!["0001"]);
        assert!(req.tags.is_empty());
    }
}
