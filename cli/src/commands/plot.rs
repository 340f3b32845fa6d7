use std::path::PathBuf;

use anyhow::Result;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::PlotArgs) -> Result<()> {
    let out_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let analysis = super::load(&args.model)?;

    for path in analysis.write_plots(&out_dir)? {
        println!("[plot] wrote {}", path.display());
    }

    Ok(())
}
