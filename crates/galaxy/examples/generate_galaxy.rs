//! Generate a galaxy and summarize it
//!
//! Usage: cargo run -p galaxy --example generate_galaxy [config.json] [seed]
//!
//! Set `RUST_LOG=debug` to see generation events.

use galaxy::{GalaxyConfig, GalaxyGenerator, RegionPlan};
use stellar::SpectralType;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => match GalaxyConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("❌ {}", err);
                std::process::exit(1);
            }
        },
        None => GalaxyConfig::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let plan = RegionPlan::new(config.star_count, config.arm_count.max(1));
    println!(
        "Galaxy: {} stars, {} arms, tightness {:.2} (seed {})",
        config.star_count, config.arm_count, config.spiral_tightness, seed
    );
    println!(
        "  inner core {}, outer core {}, arms {:?}\n",
        plan.inner_core, plan.outer_core, plan.arms
    );

    let mut generator = GalaxyGenerator::from_seed(seed);
    let cloud = generator.regenerate(&config);

    println!("Spectral mix:");
    let counts = cloud.class_counts();
    for spectral_type in SpectralType::ALL {
        let count = counts[spectral_type.index()];
        let share = if cloud.is_empty() {
            0.0
        } else {
            100.0 * count as f64 / cloud.len() as f64
        };
        println!(
            "  {} {} {:>7} ({:5.2}%)",
            spectral_type,
            spectral_type.color().to_hex(),
            count,
            share
        );
    }

    println!("\nExtent: max radius {:.1}", cloud.max_radius());
    println!(
        "Buffers: {} position floats, {} color floats, {} sizes",
        cloud.flat_positions().len(),
        cloud.flat_colors().len(),
        cloud.sizes().len()
    );
}
