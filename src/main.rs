use anyhow::{Context, Result};
use boardclean::{boards::default_board_names, report::write_report, BoardNormalizer};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Trim board files to their first nine stripped lines", long_about = None)]
struct Args {
    /// Directory the board files live in
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Board files to normalize, in order (defaults to 03-09 and 11-50)
    #[arg(value_name = "FILES")]
    files: Vec<String>,

    /// Report boards that would change without rewriting them
    #[arg(long, default_value_t = false)]
    check: bool,

    /// Write a JSON summary of the run
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let names = if args.files.is_empty() { default_board_names() } else { args.files };
    let normalizer = BoardNormalizer::new(&args.dir).with_dry_run(args.check);
    let summary = normalizer.normalize(&names)
        .with_context(|| format!("normalizing boards in {}", args.dir.display()))?;

    if let Some(path) = args.report.as_deref() {
        write_report(path, &summary)?;
    }

    if args.check {
        for f in summary.files.iter().filter(|f| f.changed) {
            println!("would normalize {}", f.name);
        }
        if summary.changed_count() > 0 {
            std::process::exit(1);
        }
    }
    Ok(())
}
