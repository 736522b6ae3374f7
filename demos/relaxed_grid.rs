//! Build a circular grid, relax it, and print a few mesh statistics.
//!
//! Run with: `cargo run --example relaxed_grid`

use tessella::prelude::*;

fn area_stats(grid: &Grid) -> (f64, f64) {
    let areas: Vec<f64> = grid
        .quads()
        .iter()
        .map(|quad| {
            // Shoelace formula over the four corners.
            let mut area = 0.0;
            for j in 0..4 {
                let a = grid.points()[quad[j]].position;
                let b = grid.points()[quad[(j + 1) % 4]].position;
                area += a.x * b.y - b.x * a.y;
            }
            (area / 2.0).abs()
        })
        .collect();

    let mean = areas.iter().sum::<f64>() / areas.len() as f64;
    let variance =
        areas.iter().map(|a| (a - mean) * (a - mean)).sum::<f64>() / areas.len() as f64;
    (mean, variance)
}

fn main() -> Result<()> {
    let mut source = Lcg::new(2024);
    let mut grid = Grid::builder(10).force_circle(true).build_with(&mut source)?;

    println!("points:     {}", grid.points().len());
    println!("triangles:  {}", grid.triangles().len());
    println!("bases:      {}", grid.bases().len());
    println!("quads:      {}", grid.quads().len());

    let (mean, variance) = area_stats(&grid);
    println!("cell area before relaxation: mean {:.6}, variance {:.2e}", mean, variance);

    for _ in 0..100 {
        grid.relax_weighted();
    }

    let (mean, variance) = area_stats(&grid);
    println!("cell area after  relaxation: mean {:.6}, variance {:.2e}", mean, variance);

    Ok(())
}
