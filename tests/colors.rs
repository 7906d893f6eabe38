// tests/colors.rs
//
// Colour naming: palette lookups, top-k reduction and sample extraction.
//
use std::io::Cursor;
use std::path::Path;

use team_resolve::color::{samples_from_image, samples_from_styles, Palette, Rgb, SampleSource};
use team_resolve::store::parse_palette;

fn primaries() -> Palette {
    parse_palette(
        r##"{"#FF0000": "red", "#00FF00": "lime", "#0000FF": "blue", "#FFFFFF": "white", "#000000": "black"}"##,
        Path::new("primaries.json"),
    )
    .unwrap()
}

#[test]
fn near_red_is_red() {
    let p = primaries();
    assert_eq!(p.nearest_color_name(Rgb::new(254, 1, 2)), "red");
    assert_eq!(p.nearest_color_name(Rgb::from_hex("#ff0000").unwrap()), "red");
}

#[test]
fn every_entry_names_itself() {
    let css = Palette::css3();
    for e in css.entries() {
        assert_eq!(css.nearest_color_name(e.rgb), e.name);
    }
}

#[test]
fn nearest_is_total() {
    let p = primaries();
    for v in (0..=255u8).step_by(15) {
        let name = p.nearest_color_name(Rgb::new(v, 255 - v, v / 2));
        assert!(!name.is_empty());
    }
}

#[test]
fn top_colors_bounded_and_distinct() {
    let p = primaries();
    let samples: Vec<Rgb> = [
        (250, 0, 0),
        (250, 0, 0),
        (250, 0, 0),
        (255, 5, 5),
        (255, 5, 5),
        (0, 0, 250),
        (10, 10, 10),
    ]
    .into_iter()
    .map(|(r, g, b)| Rgb::new(r, g, b))
    .collect();

    let got = p.top_colors(samples.iter().copied(), 2);
    let names: Vec<&str> = got.iter().map(|c| c.name.as_str()).collect();
    // the two most frequent triplets are both red
    assert_eq!(names, ["red"]);

    let got = p.top_colors(samples.iter().copied(), 4);
    let names: Vec<&str> = got.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["red", "blue", "black"]);

    assert!(p.top_colors(std::iter::empty(), 3).is_empty());
}

#[test]
fn team_colours_from_styles_and_logo() {
    let p = primaries();
    let mut samples = samples_from_styles(
        r#"<td style="background-color:#FE0101"></td><td style="BACKGROUND-COLOR: #ffffff"></td>"#,
    );

    let img = image::RgbaImage::from_fn(4, 4, |x, _| {
        if x < 3 { image::Rgba([0, 0, 240, 255]) } else { image::Rgba([0, 250, 0, 255]) }
    });
    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();
    samples.extend(samples_from_image(&png).unwrap());

    assert_eq!(samples.iter().filter(|s| s.source == SampleSource::Logo).count(), 16);

    let colours = p.team_colors(&samples, 1);
    let kit: Vec<&str> = colours.kit.iter().map(|c| c.name.as_str()).collect();
    let logo: Vec<&str> = colours.logo.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(kit, ["red", "white"]);
    assert_eq!(logo, ["blue"]);
}

#[test]
fn garbage_image_is_an_error() {
    assert!(samples_from_image(b"not an image").is_err());
}

