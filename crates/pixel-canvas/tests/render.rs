//! Rendering tests for pixel-canvas
//!
//! Materialize and render canvases end to end, then inspect the pixels
//! (directly, or by decoding the PNG the way a file reader would).

use pixel_canvas::*;

fn decode(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());
    assert_eq!(info.color_type, png::ColorType::Rgba);
    (info.width, info.height, buf)
}

fn rgba_at(data: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [data[i], data[i + 1], data[i + 2], data[i + 3]]
}

// ============================================================================
// LAYERS
// ============================================================================

#[test]
fn test_opaque_layer_covers_parent() {
    let mut parent = Canvas::new(4, 4, 2).unwrap();
    parent.set_background_color("#ff0000ff");

    let mut child = Canvas::new(2, 2, 2).unwrap();
    child.set_background_color("#0000ffff");
    parent.composite_canvas(child.into_shared(), 0, 0, ComposeMode::SourceOver);

    let image = parent.image().unwrap();
    for y in 0..8 {
        for x in 0..8 {
            let expected = if x < 4 && y < 4 { Color::BLUE } else { Color::RED };
            assert_eq!(image.pixel(x, y), Some(expected), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_layers_composite_in_insertion_order() {
    let mut parent = Canvas::new(2, 2, 1).unwrap();

    let mut first = Canvas::new(2, 2, 1).unwrap();
    first.set_background_color("red");
    let mut second = Canvas::new(1, 1, 1).unwrap();
    second.set_background_color("lime");

    parent.composite(first.into_shared(), 0, 0);
    parent.composite(second.into_shared(), 1, 1);

    let image = parent.image().unwrap();
    assert_eq!(image.pixel(0, 0), Some(Color::RED));
    assert_eq!(image.pixel(1, 1), Some(Color::GREEN));
}

#[test]
fn test_transparent_layer_keeps_parent() {
    let mut parent = Canvas::new(3, 3, 1).unwrap();
    parent.set_background_color("black");

    let mut child = Canvas::new(3, 3, 1).unwrap();
    child.draw_at(1, 1, "white");
    parent.composite(child.into_shared(), 0, 0);

    let image = parent.image().unwrap();
    assert_eq!(image.pixel(0, 0), Some(Color::BLACK));
    assert_eq!(image.pixel(1, 1), Some(Color::WHITE));
}

#[test]
fn test_layer_changes_after_composite_are_rendered() {
    let child = Canvas::new(2, 2, 1).unwrap().into_shared();
    let mut parent = Canvas::new(2, 2, 1).unwrap();
    parent.composite(child.clone(), 0, 0);

    assert_eq!(parent.image().unwrap().pixel(0, 0).unwrap().a, 0);

    child.borrow_mut().draw_at(0, 0, "blue");
    assert_eq!(parent.image().unwrap().pixel(0, 0), Some(Color::BLUE));
}

#[test]
fn test_nested_layers_use_each_parents_scale() {
    let mut grandchild = Canvas::new(1, 1, 1).unwrap();
    grandchild.set_background_color("blue");

    let mut child = Canvas::new(2, 2, 2).unwrap();
    child.composite(grandchild.into_shared(), 1, 1);

    let mut root = Canvas::new(4, 4, 1).unwrap();
    root.composite(child.into_shared(), 1, 0);

    // grandchild lands at child (2, 2), child lands at root (1, 0)
    let image = root.image().unwrap();
    assert_eq!(image.pixel(3, 2), Some(Color::BLUE));
    assert_eq!(image.pixel(2, 2).unwrap().a, 0);
}

#[test]
fn test_indirect_layer_cycle() {
    let a = Canvas::new(2, 2, 1).unwrap().into_shared();
    let b = Canvas::new(2, 2, 1).unwrap().into_shared();
    a.borrow_mut().composite(b.clone(), 0, 0);
    b.borrow_mut().composite(a.clone(), 0, 0);

    assert!(matches!(a.borrow().image(), Err(CanvasError::LayerCycle)));
}

#[test]
fn test_destination_out_layer_erases() {
    let mut parent = Canvas::new(2, 1, 1).unwrap();
    parent.set_background_color("red");

    let mut cutout = Canvas::new(1, 1, 1).unwrap();
    cutout.set_background_color("black");
    parent.composite_canvas(cutout.into_shared(), 1, 0, ComposeMode::DestinationOut);

    let image = parent.image().unwrap();
    assert_eq!(image.pixel(0, 0), Some(Color::RED));
    assert_eq!(image.pixel(1, 0).unwrap().a, 0);
}

#[test]
fn test_layer_at_negative_offset_is_clipped() {
    let mut parent = Canvas::new(4, 4, 1).unwrap();
    parent.set_background_color("red");

    let mut child = Canvas::new(2, 2, 1).unwrap();
    child.set_background_color("blue");
    parent.composite(child.into_shared(), -1, -1);

    let image = parent.image().unwrap();
    let blue: Vec<_> = (0..4)
        .flat_map(|y| (0..4).map(move |x| (x, y)))
        .filter(|&(x, y)| image.pixel(x, y) == Some(Color::BLUE))
        .collect();
    assert_eq!(blue, vec![(0, 0)]);
}

#[test]
fn test_scaled_layer_at_negative_offset() {
    let mut parent = Canvas::new(3, 3, 2).unwrap();
    parent.set_background_color("red");

    let mut child = Canvas::new(2, 2, 2).unwrap();
    child.set_background_color("blue");
    parent.composite(child.into_shared(), -1, 0);

    // child is 4x4 raster pixels placed at (-2, 0)
    let image = parent.image().unwrap();
    assert_eq!(image.pixel(1, 3), Some(Color::BLUE));
    assert_eq!(image.pixel(2, 0), Some(Color::RED));
    assert_eq!(image.pixel(0, 4), Some(Color::RED));
}

// ============================================================================
// DRAWING
// ============================================================================

#[test]
fn test_fill_rectangle_clipped_in_raster() {
    let mut canvas = Canvas::new(4, 4, 1).unwrap();
    canvas.fill_rectangle(-1, -1, 3, 3, "#000000ff");

    let image = canvas.image().unwrap();
    for y in 0..4 {
        for x in 0..4 {
            let drawn = x <= 1 && y <= 1;
            assert_eq!(image.pixel(x, y).unwrap().a == 255, drawn, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn test_fill_rectangle_flush_edge_in_raster() {
    let mut canvas = Canvas::new(4, 4, 1).unwrap();
    canvas.fill_rectangle(0, 0, 4, 4, "#000000ff");

    let image = canvas.image().unwrap();
    assert_eq!(image.pixel(2, 2), Some(Color::BLACK));
    assert_eq!(image.pixel(3, 0).unwrap().a, 0);
    assert_eq!(image.pixel(0, 3).unwrap().a, 0);
}

#[test]
fn test_draw_at_fills_whole_block() {
    let mut canvas = Canvas::new(3, 3, 4).unwrap();
    canvas.draw_at(1, 1, "#00ff00ff");

    let image = canvas.image().unwrap();
    assert_eq!(image.pixel(4, 4), Some(Color::GREEN));
    assert_eq!(image.pixel(7, 7), Some(Color::GREEN));
    assert_eq!(image.pixel(8, 8).unwrap().a, 0);
    assert_eq!(image.pixel(3, 4).unwrap().a, 0);
}

#[test]
fn test_gradient_background_top_to_bottom() {
    let mut canvas = Canvas::new(1, 32, 1).unwrap();
    canvas.set_background_gradient("#000000", "#ffffff");

    let image = canvas.image().unwrap();
    let top = image.pixel(0, 0).unwrap();
    let middle = image.pixel(0, 16).unwrap();
    let bottom = image.pixel(0, 31).unwrap();
    assert!(top.r < middle.r && middle.r < bottom.r);
}

#[test]
fn test_solid_after_gradient_wins() {
    let mut canvas = Canvas::new(2, 8, 1).unwrap();
    canvas.set_background_gradient("#000000", "#ffffff");
    canvas.set_background_color("red");

    let image = canvas.image().unwrap();
    assert_eq!(image.pixel(0, 0), Some(Color::RED));
    assert_eq!(image.pixel(1, 7), Some(Color::RED));
}

#[test]
fn test_paintbrush_stipple_through_stencil() {
    let stencil = shared_mask(Mask::empty(10, 10).unwrap());
    stencil.borrow_mut().fill_rectangle(0, 0, 4, 9);

    let mut canvas = Canvas::new(10, 10, 1).unwrap();
    canvas.apply_stencil(stencil, 0, 0);

    let brush = Paintbrush::seeded(Mask::filled(10, 10).unwrap(), 99);
    let drawn = canvas.draw_with_mask(&brush, "black", 0, 0);

    assert!(drawn <= 50);
    assert!(canvas.commands().iter().all(|r| r.x1 >= 5));
}

// ============================================================================
// RENDER
// ============================================================================

#[test]
fn test_render_clears_corners() {
    let mut canvas = Canvas::new(3, 2, 2).unwrap();
    canvas.set_background_color("#336699ff");
    canvas.fill_rectangle(0, 0, 3, 2, "#000000ff");

    let mut bytes = Vec::new();
    canvas.render(&mut bytes).unwrap();
    let (width, height, data) = decode(&bytes);

    assert_eq!((width, height), (6, 4));
    for (x, y) in [(0, 0), (5, 0), (0, 3), (5, 3)] {
        assert_eq!(rgba_at(&data, width, x, y)[3], 0, "corner ({x}, {y})");
    }
    assert_eq!(rgba_at(&data, width, 1, 0), [0, 0, 0, 255]);
    assert_eq!(rgba_at(&data, width, 2, 2), [0, 0, 0, 255]);
}

#[test]
fn test_render_keep_corners() {
    let config = CanvasConfig::default()
        .with_background(Background::solid("white"))
        .keep_corners();
    let canvas = Canvas::with_config(2, 2, 1, config).unwrap();

    let (width, _, data) = decode(&canvas.to_png().unwrap());
    assert_eq!(rgba_at(&data, width, 0, 0), [255, 255, 255, 255]);
}

#[test]
fn test_image_leaves_corners_alone() {
    let mut canvas = Canvas::new(2, 2, 1).unwrap();
    canvas.set_background_color("white");
    assert_eq!(canvas.image().unwrap().pixel(0, 0), Some(Color::WHITE));
}

#[test]
fn test_render_to_file_overwrites() {
    let path = std::env::temp_dir().join(format!("pixel-canvas-render-{}.png", std::process::id()));
    std::fs::write(&path, b"stale contents that are not a png").unwrap();

    let mut canvas = Canvas::new(4, 4, 1).unwrap();
    canvas.draw_at(1, 1, "red");
    canvas.render_to_file(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let (width, height, data) = decode(&bytes);
    assert_eq!((width, height), (4, 4));
    assert_eq!(rgba_at(&data, width, 1, 1), [255, 0, 0, 255]);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_render_write_failure() {
    let canvas = Canvas::new(2, 2, 1).unwrap();
    let result = canvas.render_to_file("/nonexistent-dir/for/pixel-canvas/out.png");
    assert!(matches!(result, Err(CanvasError::Write(_))));
}
