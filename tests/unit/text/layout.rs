use super::*;

/// Each character is `font_size / 2` wide and lines are `font_size` tall.
struct Mono;

impl MeasureText for Mono {
    fn measure(&mut self, text: &str, font_size: f32) -> (f64, f64) {
        (
            text.chars().count() as f64 * f64::from(font_size) / 2.0,
            f64::from(font_size),
        )
    }
}

fn canvas() -> CanvasSize {
    CanvasSize::new(1600, 900).unwrap()
}

#[test]
fn sizes_and_margin_scale_from_the_short_side() {
    let s = BlockScale::for_canvas(canvas(), 0.07);
    assert_eq!(s.title_size, 76.0);
    assert_eq!(s.subtitle_size, 36.0);
    assert_eq!(s.margin, 63.0);
    assert_eq!(BlockScale::for_canvas(canvas(), 0.5).margin, 108.0);
    assert_eq!(BlockScale::for_canvas(canvas(), 0.0).margin, 36.0);
}

#[test]
fn single_line_left_aligned_block() {
    let m = measure_block(&mut Mono, canvas(), "Hello", None, 0.07, Align::Left);
    assert_eq!(m.title_lines.len(), 1);
    assert_eq!(m.block_width, 190.0);
    assert_eq!(m.block_height, 76.0);
    assert_eq!(m.block_gap, 0.0);
    assert!(m.subtitle_lines.is_empty());
    assert_eq!(m.subtitle_wrap, None);
    // floor(900 * 0.6) - 76 / 2
    assert_eq!(m.origin, Point::new(63.0, 502.0));
    assert_eq!(m.pad_x, 27.0);
    assert_eq!(m.pad_y, 19.0);
    assert_eq!(m.scrim, Rect::new(36.0, 483.0, 280.0, 597.0));
    // bar: floor(190 * 0.18) wide, max(6, 9) tall, bottom at 502 - 15 - 6.
    assert_eq!(m.accent_bar, Rect::new(63.0, 472.0, 97.0, 481.0));
}

#[test]
fn block_height_includes_gaps_and_subtitle() {
    let m = measure_block(
        &mut Mono,
        canvas(),
        "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu",
        Some("a subtitle"),
        0.07,
        Align::Left,
    );
    let n = m.title_lines.len() as f64;
    assert!(n >= 2.0);
    assert_eq!(m.line_gap, 16.0);
    assert_eq!(m.sub_gap, 12.0);
    assert_eq!(m.block_gap, 26.0);
    assert_eq!(m.block_height, n * 76.0 + (n - 1.0) * 16.0 + 26.0 + 36.0);

    let last_title = m.title_lines.last().unwrap();
    let sub = &m.subtitle_lines[0];
    assert_eq!(sub.origin.y, last_title.origin.y + 76.0 + 26.0);
    for line in &m.title_lines {
        assert!(line.width <= m.max_width);
    }
}

#[test]
fn blank_subtitle_is_ignored() {
    let m = measure_block(&mut Mono, canvas(), "Title", Some("  \t "), 0.07, Align::Left);
    assert!(m.subtitle_lines.is_empty());
    assert_eq!(m.subtitle_wrap, None);
    assert_eq!(m.block_gap, 0.0);
}

#[test]
fn alignment_positions_block_and_lines() {
    let c = measure_block(&mut Mono, canvas(), "ab", Some("abcdefgh"), 0.07, Align::Center);
    // subtitle 8 * 18 = 144 wide, title 2 * 38 = 76 wide.
    assert_eq!(c.block_width, 144.0);
    assert_eq!(c.origin.x, 728.0);
    assert_eq!(c.title_lines[0].origin.x, 728.0 + 34.0);

    let r = measure_block(&mut Mono, canvas(), "ab", Some("abcdefgh"), 0.07, Align::Right);
    assert_eq!(r.origin.x, 1600.0 - 63.0 - 144.0);
    assert_eq!(r.title_lines[0].origin.x + 76.0, 1600.0 - 63.0);
}

#[test]
fn tall_blocks_clamp_to_the_top_margin() {
    let long = "word ".repeat(200);
    let m = measure_block(&mut Mono, canvas(), &long, None, 0.07, Align::Left);
    assert_eq!(m.origin.y, 63.0 + 19.0);
}

#[test]
fn unspaced_title_wraps_by_character_within_margins() {
    let title = "包".repeat(60);
    let m = measure_block(&mut Mono, canvas(), &title, None, 0.07, Align::Left);
    assert_eq!(m.title_wrap, WrapMode::Chars);
    assert!(m.title_lines.len() > 1);
    for line in &m.title_lines {
        assert!(line.width <= m.max_width);
    }
}

#[test]
fn drawn_block_has_scrim_and_text() {
    let canvas = CanvasSize::new(640, 360).unwrap();
    let mut engine = TextEngine::builtin();
    let m = measure_block(&mut engine, canvas, "Hello", Some("world"), 0.07, Align::Left);
    let palette = Palette {
        c1: Rgb::new(20, 20, 20),
        c2: Rgb::new(40, 40, 40),
        accent: Rgb::new(250, 100, 0),
        text: Rgb::new(245, 247, 250),
    };
    let layer = draw_block(&mut engine, canvas, &m, &palette, Theme::Dark).unwrap();

    // Scrim corner area (inside padding, away from the rounded corner) is the dark scrim.
    let sx = (m.scrim.x0 + m.pad_x / 2.0) as u32;
    let sy = ((m.scrim.y0 + m.scrim.y1) / 2.0) as u32;
    let px = layer.pixel(sx, sy).unwrap();
    assert!((105..=115).contains(&px[3]), "{px:?}");
    assert_eq!(&px[..3], &[0, 0, 0]);

    // Some title ink is nearly opaque and bright.
    assert!(layer.data().chunks_exact(4).any(|p| p[3] == 255 && p[0] > 200));
    // Far corner untouched.
    assert_eq!(layer.pixel(639, 359), Some([0, 0, 0, 0]));
}
