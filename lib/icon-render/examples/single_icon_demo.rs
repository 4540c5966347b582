/// Single icon example
/// Renders one 256 px placeholder icon and reports which font tier drew the label

use icon_render::{generate, save_png, IconStyle};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let icon = generate(256, &IconStyle::new());

    let path = output_dir.join("icon-256x256.png");
    save_png(&icon.image, &path)?;

    println!("✓ Generated {} (label: {:?})", path.display(), icon.label);

    Ok(())
}
