//! Hydraulic grade line through a surcharged culvert.
//!
//! A 0.5 m pipe carries 0.15 m³/s against 1.5 m of tailwater, so the barrel
//! runs full over the whole 100 m reach. The march accumulates full-bore
//! friction losses upstream and prints the grade line station by station.

use gvf_rs::{CircularSection, Conduit, ProfileOutcome, ReachConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ReachConfig {
        flow: 0.15,
        length: 100.0,
        upstream_invert: 0.2,
        downstream_invert: 0.0,
        roughness: 6.0e-4,
        kinematic_viscosity: 1.141e-6,
        downstream_depth: 1.5,
        open_channel: false,
    };

    println!("Surcharged Culvert Profile");
    println!("==========================");
    println!("Pipe diameter:    0.5 m");
    println!("Discharge:        {} m³/s", config.flow);
    println!("Reach length:     {} m", config.length);
    println!(
        "Invert fall:      {} m",
        config.upstream_invert - config.downstream_invert
    );
    println!("Tailwater depth:  {} m", config.downstream_depth);
    println!();

    let mut culvert = Conduit::new(CircularSection::new(0.5)?);
    culvert.setup(config)?;

    let summary = match culvert.calculate()? {
        ProfileOutcome::Computed(summary) => summary,
        ProfileOutcome::NoProfile {
            normal_depth,
            critical_depth,
        } => {
            println!(
                "Reach is hydraulically steep (normal {:.3} m <= critical {:.3} m); \
                 no backwater profile.",
                normal_depth, critical_depth
            );
            return Ok(());
        }
    };

    let slope = culvert.slope().unwrap_or(0.0);
    println!("Invert slope:     {:.5}", slope);
    println!(
        "Critical depth:   {:.4} m",
        culvert.critical_depth().unwrap_or(f64::NAN)
    );
    if let Some(normal) = culvert.normal_depth() {
        println!(
            "Normal depth:     {:.4} m ({} iterations)",
            normal.depth, normal.iterations
        );
    }
    println!();

    println!("chainage    invert     depth     water    energy");
    println!("     [m]       [m]       [m]       [m]       [m]");
    for station in culvert.profile().stations() {
        let invert = config.downstream_invert + station.chainage * slope;
        println!(
            "{:8.2}  {:8.4}  {:8.4}  {:8.4}  {:8.4}",
            station.chainage, invert, station.water_depth, station.head, station.energy
        );
    }
    println!();
    println!(
        "{} stations, {} hit the iteration cap, upstream specific energy {:.4} m",
        summary.stations, summary.capped_steps, summary.final_energy
    );

    Ok(())
}
