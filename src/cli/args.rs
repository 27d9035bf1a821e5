use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the nibeans binary.
#[derive(Parser, Debug)]
#[command(
    name = "nibeans",
    version,
    about = "Generate bean implementation classes from bean interface declarations"
)]
pub struct CliArgs {
    /// Packages whose bean interfaces are processed (comma-separated).
    #[arg(long = "srcpackages", alias = "source-packages", value_delimiter = ',')]
    pub source_packages: Vec<String>,

    /// Qualified name of the generated container class (e.g. org.x.gen.Beans).
    #[arg(long = "tgtclass", alias = "target-class")]
    pub target_class: Option<String>,

    /// Treat every issue as an error and write nothing when one is found.
    #[arg(long)]
    pub strict: bool,

    /// Directory the generated files are written to.
    #[arg(long = "out-dir", alias = "outDir")]
    pub out_dir: Option<PathBuf>,

    /// Path to a nibeans.json config file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Enable color in issue reports.
    #[arg(long)]
    pub pretty: Option<bool>,

    /// Print the generated files instead of writing them.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Declaration files, one per processing round, in round order.
    pub inputs: Vec<PathBuf>,
}
