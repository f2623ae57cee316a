// Example runner for the `chromakey` library crate: builds a small synthetic
// badge in memory, swaps its fill color, keys out its background, and writes
// both results as PNGs.

use anyhow::Result;
use image::{Rgba, RgbaImage};

const OUTPUT_DIR: &str = "demo_output";

#[tokio::main]
async fn main() -> Result<()> {
    println!("chromakey - example runner");

    std::fs::create_dir_all(OUTPUT_DIR)?;

    // A magenta square on a white field, with one softened edge pixel so the
    // tolerance gate has something to chew on.
    let mut badge = RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 255]));
    for y in 16..48 {
        for x in 16..48 {
            badge.put_pixel(x, y, Rgba([255, 0, 255, 255]));
        }
    }
    badge.put_pixel(15, 16, Rgba([251, 4, 250, 255]));

    let recolored = chromakey::replace_color(
        badge.clone(),
        "#ff00ff",
        "#1e90ff",
        chromakey::DEFAULT_DELTA_RANK,
    )?;
    recolored.save(format!("{OUTPUT_DIR}/recolored.png"))?;
    println!("  wrote {OUTPUT_DIR}/recolored.png");

    let keyed = chromakey::task::make_transparent(badge, "#ffffff", 0).await?;
    keyed.save(format!("{OUTPUT_DIR}/keyed.png"))?;
    println!("  wrote {OUTPUT_DIR}/keyed.png");

    Ok(())
}
