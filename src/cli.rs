use crate::types::DeclKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "m4doc-client")]
#[command(about = "Query a documentation index server", long_about = None)]
pub struct Cli {
    /// Backend address (overrides config file and M4DOC_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Prefix for rendered links (overrides config file and M4DOC_SITE_ROOT)
    #[arg(long, global = true)]
    pub site_root: Option<String>,
    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Print link lists as HTML list items instead of JSON
    #[arg(long, global = true)]
    pub html: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search declarations (exact name unless --fuzzy)
    Search {
        pattern: String,
        #[arg(short, long)]
        fuzzy: bool,
        #[arg(short, long = "kind")]
        kinds: Vec<DeclKind>,
        #[arg(short = 'n', long)]
        max: Option<usize>,
    },
    InstancesForClass {
        class_name: String,
    },
    InstancesForType {
        type_name: String,
    },
    AnnotateInstances {
        #[arg(required = true)]
        names: Vec<String>,
    },
    AnnotateInstancesFor {
        #[arg(required = true)]
        names: Vec<String>,
    },
    DeclLink {
        decl_name: String,
    },
    ImportedBy {
        module_name: String,
    },
    ModuleLink {
        module_name: String,
    },
    LinkedImportedBy {
        module_name: String,
    },
}
