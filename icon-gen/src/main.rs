//! Batch generator for the Weekly placeholder icon set.
//!
//! Writes the 8 PWA icon PNGs into the current directory. Takes no
//! arguments; `RUST_LOG` controls the diagnostic output.

use anyhow::Result;
use env_logger::Env;
use icon_render::{generate_set, IconOutcome, IconStyle, ICON_SIZES};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    println!("🎨 Weekly Icon Generator");
    println!("{}", "=".repeat(50));

    let icons_dir = std::env::current_dir()?;

    println!("\n📁 Icons directory: {}", icons_dir.display());
    println!("📋 Generating {} icon sizes...\n", ICON_SIZES.len());

    let style = IconStyle::new();
    let reports = generate_set(&icons_dir, &style, &ICON_SIZES);

    for report in &reports {
        let name = icon_render::icon_filename(report.size);
        match &report.outcome {
            IconOutcome::Written { .. } => println!("   ✅ Generated: {name}"),
            IconOutcome::Failed(e) => println!("   ❌ Error generating {name}: {e}"),
        }
    }

    println!("\n{}", "=".repeat(50));
    println!("✨ Icon generation complete!");
    println!("\n📝 Next steps:");
    println!("   1. Review the generated icons");
    println!("   2. For production, replace with professionally designed icons");
    println!("   3. Ensure all icons are optimized for web use");

    Ok(())
}
