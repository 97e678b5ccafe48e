use std::path::PathBuf;

use clap::Parser;

/// stagehand - stages legacy JavaScript sources for transpilation
///
/// Moves the source directories named by the rules file into the staging
/// folder, points the project manifest at the staged copies, and hands the
/// staged tree to Babel. Run your build command afterwards, then revert.
#[derive(Parser, Debug)]
#[command(name = "stagehand")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run `stagehand --prepare` before your build, `stagehand --revert` after.")]
pub struct Cli {
    /// Copy mapped source directories into the staging folder, update the
    /// manifest, and transpile the staged tree
    #[arg(short, long, conflicts_with_all = ["revert", "init"])]
    pub prepare: bool,

    /// Restore the manifest paths changed by --prepare
    #[arg(short, long, conflicts_with = "init")]
    pub revert: bool,

    /// Seed the project with the bundled Babel configuration, asking before
    /// overwriting an existing one
    #[arg(short, long)]
    pub init: bool,

    /// Rules file to use, relative to the project root
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Project root to operate on
    #[arg(
        short,
        long,
        visible_alias = "base",
        short_alias = 'b',
        value_name = "DIR"
    )]
    pub dir: Option<PathBuf>,

    /// Strip // and /* */ comments from JSON files before parsing
    #[arg(short, long)]
    pub sanitize: bool,
}
