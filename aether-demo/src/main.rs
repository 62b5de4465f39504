//! Two-photon beat: the reference superposition scenario.
//!
//! Builds a 60×80×1×90 lattice at 5 cm per grid step, superposes two
//! massless particles with distinct wavelengths, and writes the plot-data
//! export to `plot_data.json` for the display layer.

use anyhow::{Context, Result};

use aether_math::Event;
use aether_plot::PlotData;
use aether_space::{Massless, Particle, Shape, Space};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mut space = Space::new("2PhotonsBeat");
    space.configure(Shape::new(-30, 30, -10, 70, 0, 1, -20, 70), 0.05, None)?;

    let mut p1 = Massless::new("p1", Event::new(-0.1, 0.0, 0.0, 0.0));
    p1.set_lambda(0.5);
    let mut p2 = Massless::new("p2", Event::new(0.1, 0.0, 0.0, 0.0));
    p2.set_lambda(0.6);

    for line in p1.describe().iter().chain(p2.describe().iter()) {
        println!("{line}");
    }

    space.add_particle(Box::new(p1));
    space.add_particle(Box::new(p2));
    space.apply_all_particles();

    let plot = PlotData::from_space(&space);
    println!(
        "\nexported {} cells x {} attributes",
        plot.len(),
        plot.data.len()
    );
    for (key, meta) in &plot.meta {
        println!(
            "  {key:>6} [{}{}]  coeff {:e}  range <{:.3}, {:.3}>",
            meta.unit, meta.dim, meta.coeff, meta.min, meta.max
        );
    }

    let json = serde_json::to_string(&plot).context("serializing plot data")?;
    std::fs::write("plot_data.json", json).context("writing plot_data.json")?;
    println!("\nwrote plot_data.json");

    // Point lookup at the midpoint between the two sources.
    let probe = space.id_from_position(&Event::new(0.0, 1.0, 0.0, 0.0));
    println!("\n{}", space.describe_cell(&probe)?);

    Ok(())
}
