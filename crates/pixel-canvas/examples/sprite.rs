//! Example: Procedural space-invader style sprite
//!
//! Run with `RUST_LOG=debug cargo run --example sprite -- out.png`

use pixel_canvas::{shared_mask, Canvas, ComposeMode, Mask, Paintbrush};
use rand::Rng;
use tracing_subscriber::EnvFilter;

const COLS: u32 = 12;
const ROWS: u32 = 12;
const PIXEL_SIZE: u32 = 8;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "sprite.png".to_string());
    let mut rng = rand::thread_rng();

    // Body: random left half mirrored onto the right
    let mut body = Canvas::new(COLS, ROWS, PIXEL_SIZE)?;
    for row in 2..ROWS as i32 - 2 {
        for col in 1..COLS as i32 / 2 {
            if rng.gen_bool(0.5) {
                body.draw_with_reflection_at(col, row, "#44cc66ff");
            }
        }
    }

    // Eyes are protected from the speckle pass below
    let mut eyes = Mask::empty(COLS, ROWS)?;
    eyes.fill_at(4, 4);
    eyes.fill_at(COLS as i32 - 5, 4);
    let eyes = shared_mask(eyes);

    body.apply_stencil(eyes.clone(), 0, 0);
    let speckle = Paintbrush::from_mask(Mask::empty(COLS - 2, ROWS - 4)?);
    let speckled = body.draw_with_mask(&speckle, "#2a8040ff", 1, 2);
    body.remove_stencil();
    body.draw_with_mask(&*eyes.borrow(), "#ffffffff", 0, 0);

    // Backdrop with the body layered on top
    let mut scene = Canvas::new(COLS, ROWS, PIXEL_SIZE)?;
    scene.set_background_gradient("#101030", "#303060");
    scene.fill_rectangle(0, ROWS as i32 - 1, COLS as i32, 1, "#20202080");
    scene.composite_canvas(body.into_shared(), 0, 0, ComposeMode::SourceOver);

    scene.render_to_file(&path)?;
    println!("Wrote {}x{} sprite to {} ({} speckles)", scene.width(), scene.height(), path, speckled);

    Ok(())
}
