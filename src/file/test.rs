use super::*;

#[test]
fn json_channels_and_colors() {
    let channels = Palette::from_json(r#"{"reds": [0, 255], "greens": [0, 128], "blues": [0, 64]}"#).unwrap();
    let colors = Palette::from_json(r#"{"colors": [[0, 0, 0], [255, 128, 64]]}"#).unwrap();
    assert_eq!(channels, colors);
    assert_eq!(colors.get(1), Some(Color::rgb(255, 128, 64)));

    let written = colors.to_json().unwrap();
    assert_eq!(Palette::from_json(&written).unwrap(), colors);
}

#[test]
fn ron_and_yaml() {
    let ron = Palette::from_ron("(reds: [1, 2, 3], greens: [4, 5, 6], blues: [7, 8, 9])").unwrap();
    let yaml = Palette::from_yaml("reds: [1, 2, 3]\ngreens: [4, 5, 6]\nblues: [7, 8, 9]\n").unwrap();
    assert_eq!(ron, yaml);
    assert_eq!(ron.get(2), Some(Color::rgb(3, 6, 9)));
}

#[test]
fn invalid_documents() {
    assert!(matches!(
        Palette::from_json(r#"{"reds": [0, 1], "greens": [0], "blues": [0, 1]}"#),
        Err(PaletteFileError::PaletteError(PaletteError::ChannelMismatch { .. }))
    ));
    assert!(matches!(
        Palette::from_json(r#"{"colors": [[9, 9, 9]]}"#),
        Err(PaletteFileError::PaletteError(PaletteError::Size(1)))
    ));
    assert!(matches!(Palette::from_json("[1, 2"), Err(PaletteFileError::JsonError(_))));
}

#[test]
fn raw_lut() {
    let ramp = Palette::gray_ramp(true);
    let raw = ramp.to_raw_lut();
    assert_eq!(raw.len(), 768);
    assert_eq!(&raw[..3], &[255, 254, 253]);
    assert_eq!(Palette::from_raw_lut(&raw).unwrap(), ramp);

    let mut with_header = b"ICOL".to_vec();
    with_header.resize(32, 0);
    with_header.extend_from_slice(&raw);
    assert_eq!(Palette::from_raw_lut(&with_header).unwrap(), ramp);

    assert!(matches!(
        Palette::from_raw_lut(&raw[..700]),
        Err(PaletteFileError::RawLutLength(700))
    ));
}

#[test]
fn raw_lut_pads_short_palettes() {
    let short = Palette::from_colors([Color::WHITE, Color::rgb(1, 2, 3)]).unwrap();
    let raw = short.to_raw_lut();
    assert_eq!(&raw[0..3], &[255, 1, 0]);
    assert_eq!(&raw[256..259], &[255, 2, 0]);
    assert_eq!(&raw[512..515], &[255, 3, 0]);
}

#[test]
fn unknown_extension() {
    assert!(matches!(
        Palette::from_file("palette.txt"),
        Err(PaletteFileError::ExtensionError)
    ));
    assert!(matches!(Palette::from_file("palette"), Err(PaletteFileError::ExtensionError)));
}
