use std::sync::Arc;

use super::*;

#[test]
fn get_set_by_coordinate() {
    let mut buffer = PixelBuffer::indexed(4, 2);
    buffer.set(3, 0, 9);
    buffer.set(0, 1, 300);
    assert_eq!(buffer.get(3, 0), 9);
    assert_eq!(buffer.get(0, 1), 300 & 0xFF);
    assert_eq!(buffer.get(2, 1), 0);

    let mut wide = PixelBuffer::gray16(2, 2);
    wide.set(1, 1, 0x1_2345);
    assert_eq!(wide.get(1, 1), 0x2345);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn set_past_row_end_panics() {
    let mut buffer = PixelBuffer::indexed(4, 2);
    buffer.set(4, 0, 9);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn get_past_row_end_panics() {
    let buffer = PixelBuffer::true_color(4, 2);
    buffer.get(4, 0);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn get_below_last_row_panics() {
    let buffer = PixelBuffer::gray16(4, 2);
    buffer.get(0, 2);
}

#[test]
fn contains() {
    let buffer = PixelBuffer::true_color(4, 2);
    assert!(buffer.contains(3, 1));
    assert!(!buffer.contains(4, 0));
    assert!(!buffer.contains(0, 2));
}

#[test]
fn colors_resolve_per_mode() {
    let palette = Arc::new(Palette::from_colors([Color::rgb(1, 2, 3), Color::rgb(4, 5, 6)]).unwrap());
    let mut indexed = PixelBuffer::indexed_with_palette(2, 1, palette);
    indexed.set(1, 0, 1);
    assert_eq!(indexed.color_at(0, 0), Color::rgb(1, 2, 3));
    assert_eq!(indexed.color_at(1, 0), Color::rgb(4, 5, 6));
    assert!(indexed.to_gray8().is_none());

    let mut true_color = PixelBuffer::true_color(1, 1);
    true_color.set(0, 0, 0xFF10_2030);
    assert_eq!(true_color.color_at(0, 0), Color::rgb(0x10, 0x20, 0x30));
}
