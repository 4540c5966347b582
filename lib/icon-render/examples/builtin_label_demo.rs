/// Builtin font fallback example
/// Forces the compiled-in bitmap font and tries a few different letters

use icon_render::{generate, save_png, FontSource, IconStyle};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    for letter in ["W", "A", "Z"] {
        let style = IconStyle::new()
            .with_fonts(vec![FontSource::Builtin])
            .with_label(letter.to_string());

        let icon = generate(192, &style);

        let filename = format!("builtin-{letter}.png");
        save_png(&icon.image, &output_dir.join(&filename))?;
        println!("✓ Generated {filename}");
    }

    println!("\n✓ All builtin-font icons generated!");
    println!("  Images saved to: tmp/");

    Ok(())
}
