use anyhow::Result;
use coalesce::Axis;
use tracing::info;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::AnalyzeArgs) -> Result<()> {
    let analysis = super::load(&args.model)?;
    let model = analysis.model();
    let table = analysis.table();
    let pivot = model.pivot();

    println!(
        "{} parties, {} seats, majority threshold {}",
        table.len(), table.total_seats(), table.majority_threshold(),
    );
    println!(
        "pivot point ({:.3}, {:.3}); economic pivot {}, moral pivot {}",
        pivot.x, pivot.y,
        model.pivot_party(Axis::Economic).id(),
        model.pivot_party(Axis::Moral).id(),
    );
    for (party, radius) in model.parties_with_radii() {
        println!("  {:<12} lr={:>6.2} conlib={:>6.2} seats={:>4} radius={:.3}", party.id(), party.lr(), party.conlib(), party.seats(), radius);
    }

    let grid = analysis.sample().grid();
    println!("sampled {} x {} grid at step {} ({} points)", grid.num_x(), grid.num_y(), grid.step(), grid.len());
    println!();
    println!("{}", analysis.coalitions().ranked_frame()?);
    println!();
    println!("{}", analysis.narrative());

    if let Some(path) = &args.json {
        info!(path = %path.display(), "writing JSON report");
        analysis.write_json(path)?;
    }
    if let Some(path) = &args.csv {
        info!(path = %path.display(), "writing coalition table");
        analysis.coalitions().write_csv(path)?;
    }
    if let Some(path) = &args.points {
        info!(path = %path.display(), "writing grid points");
        analysis.write_points_csv(path)?;
    }

    Ok(())
}
