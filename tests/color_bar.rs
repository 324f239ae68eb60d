use std::path::PathBuf;
use std::sync::Arc;

use colorlut::*;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("colorlut-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn palette_file_to_png() {
    let json = scratch("fire.json");
    std::fs::write(
        &json,
        r#"{"colors": [[0, 0, 0], [128, 0, 0], [255, 128, 0], [255, 255, 255]]}"#,
    )
    .unwrap();

    let lut = ColorLut::from_palette(Arc::new(Palette::from_file(&json).unwrap())).unwrap();
    assert_eq!(lut.map_size(), 4);
    assert!(!lut.is_grayscale());

    let bar = lut
        .render_bar(BarConfig { width: 8, height: 2, framed: false, mode: BarMode::TrueColor })
        .unwrap();
    let png = scratch("fire.png");
    save_buffer(&bar, &png).unwrap();

    let img = image::open(&png).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (8, 2));
    let row: Vec<[u8; 3]> = (0..8).map(|x| img.get_pixel(x, 1).0).collect();
    assert_eq!(
        row,
        vec![
            [0, 0, 0], [0, 0, 0],
            [128, 0, 0], [128, 0, 0],
            [255, 128, 0], [255, 128, 0],
            [255, 255, 255], [255, 255, 255],
        ]
    );
}

#[test]
fn raw_lut_file_round_trip() {
    let path = scratch("gray.lut");
    std::fs::write(&path, create_grayscale_palette(false).to_raw_lut()).unwrap();

    let loaded = Palette::from_file(&path).unwrap();
    assert_eq!(loaded, create_grayscale_palette(false));
    assert!(ColorLut::from_palette(Arc::new(loaded)).unwrap().is_grayscale());
}

#[test]
fn indexed_bar_resolves_through_palette() {
    let palette = Arc::new(create_grayscale_palette(true));
    let lut = ColorLut::from_palette(Arc::clone(&palette)).unwrap();
    let mut canvas = PixelBuffer::indexed_with_palette(16, 1, palette);
    lut.draw_unscaled_color_bar(&mut canvas, 0, 0, 16, 1).unwrap();

    let again = ColorLut::from_buffer(&canvas).unwrap();
    assert!(Arc::ptr_eq(again.palette(), lut.palette()));

    let rgb = canvas.to_dynamic().to_rgb8();
    assert_eq!(rgb.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(rgb.get_pixel(15, 0).0, [15, 15, 15]);
}

#[test]
fn plain_indexed_buffer_saves_as_gray() {
    let lut = ColorLut::from_palette(Arc::new(create_grayscale_palette(false))).unwrap();
    let mut canvas = PixelBuffer::indexed(4, 4);
    lut.draw_framed_color_bar(&mut canvas, 1, 0, 2, 4).unwrap();

    let img = canvas.to_dynamic();
    let gray = img.as_luma8().unwrap();
    assert_eq!(gray.get_pixel(1, 1).0, [0]);
    assert_eq!(gray.get_pixel(2, 1).0, [128]);
    assert_eq!(gray.get_pixel(3, 1).0, [0]);
}
