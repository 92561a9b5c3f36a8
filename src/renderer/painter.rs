//! Frame painting: glyph cloud plus the caption overlay

use glam::DVec2;

use super::surface::Surface;
use crate::sim::{CAPTION_LINES, FieldState};

/// Background gray level
pub const BACKGROUND: u8 = 0;
/// Glyph and caption color
pub const GLYPH_RGB: [u8; 3] = [255, 255, 255];

/// Caption font size relative to the sphere radius
pub const CAPTION_SIZE_FRACTION: f64 = 0.07;
/// Caption box width relative to the sphere radius
pub const CAPTION_WIDTH_FRACTION: f64 = 1.4;
/// Caption box height relative to the sphere radius
pub const CAPTION_HEIGHT_FRACTION: f64 = 1.2;
/// Line height relative to font size
pub const LEADING: f64 = 1.25;

/// Draw one frame of `state` onto `surface`
pub fn draw_frame<S: Surface>(state: &FieldState, surface: &mut S) {
    surface.reset_transform();
    surface.clear(BACKGROUND);
    surface.translate(surface.size_vec() * 0.5);

    surface.set_fill(GLYPH_RGB, 255.0);
    surface.set_font_size(state.text_size);

    let mut buf = [0u8; 4];
    for p in &state.particles {
        surface.fill_text(p.glyph.encode_utf8(&mut buf), p.pos);
    }

    if state.options.caption_reveal && state.reveal_alpha > 0.0 {
        draw_caption(surface, state.radius, state.reveal_alpha);
    }
}

/// Draw the caption block centered on the origin
fn draw_caption<S: Surface>(surface: &mut S, radius: f64, alpha: f64) {
    surface.save();
    surface.set_fill(GLYPH_RGB, alpha);

    let font_size = radius * CAPTION_SIZE_FRACTION;
    surface.set_font_size(font_size);

    let box_size = DVec2::new(radius * CAPTION_WIDTH_FRACTION, radius * CAPTION_HEIGHT_FRACTION);
    let layout = layout_caption(&CAPTION_LINES, box_size, font_size, |s| {
        surface.measure_text(s)
    });
    for (line, pos) in layout {
        surface.fill_text(&line, pos);
    }

    surface.restore();
}

/// Word-wrap `lines` into a box of `box_size` centered on the origin.
///
/// Returns each visual line with its center point. Lines that would not fit
/// vertically are dropped; the kept block is vertically centered.
pub fn layout_caption<F>(
    lines: &[&str],
    box_size: DVec2,
    font_size: f64,
    measure: F,
) -> Vec<(String, DVec2)>
where
    F: Fn(&str) -> f64,
{
    let line_height = font_size * LEADING;
    let max_lines = if line_height > 0.0 {
        (box_size.y / line_height).floor() as usize
    } else {
        0
    };

    let mut wrapped: Vec<String> = lines
        .iter()
        .flat_map(|line| wrap_words(line, box_size.x, &measure))
        .collect();
    wrapped.truncate(max_lines);

    let block_height = wrapped.len() as f64 * line_height;
    let top = -block_height / 2.0 + line_height / 2.0;

    wrapped
        .into_iter()
        .enumerate()
        .map(|(i, line)| (line, DVec2::new(0.0, top + i as f64 * line_height)))
        .collect()
}

/// Greedy word wrap. A single word wider than `max_width` gets a line of its own.
fn wrap_words<F>(text: &str, max_width: f64, measure: &F) -> Vec<String>
where
    F: Fn(&str) -> f64,
{
    let mut out = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CanvasConfig, Tuning};
    use crate::renderer::headless::{DrawOp, HeadlessSurface};
    use crate::sim::SphereOptions;

    /// Monospace measure: 0.6em per char
    fn mono(font_size: f64) -> impl Fn(&str) -> f64 {
        move |s: &str| s.chars().count() as f64 * font_size * 0.6
    }

    fn field(options: SphereOptions) -> FieldState {
        let config = CanvasConfig {
            particle_count: 50,
            ..CanvasConfig::DESKTOP
        };
        FieldState::new(&config, options, Tuning::default(), 5)
    }

    #[test]
    fn test_wrap_words_fits_width() {
        let measure = mono(10.0);
        let lines = wrap_words("From generative systems to interactive environments", 150.0, &measure);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(measure(line) <= 150.0 || !line.contains(' '));
        }
        assert_eq!(
            lines.join(" "),
            "From generative systems to interactive environments"
        );
    }

    #[test]
    fn test_layout_centered_vertically() {
        let layout = layout_caption(&["a", "b"], DVec2::new(100.0, 100.0), 10.0, mono(10.0));
        assert_eq!(layout.len(), 2);
        // Two lines of 12.5 → centers at ±6.25
        assert!((layout[0].1.y + 6.25).abs() < 1e-9);
        assert!((layout[1].1.y - 6.25).abs() < 1e-9);
        assert!(layout.iter().all(|(_, p)| p.x == 0.0));
    }

    #[test]
    fn test_layout_drops_overflowing_lines() {
        // Box fits two lines of 12.5px
        let layout = layout_caption(&["a", "b", "c"], DVec2::new(100.0, 30.0), 10.0, mono(10.0));
        assert_eq!(layout.len(), 2);
    }

    #[test]
    fn test_caption_fits_desktop_sphere() {
        let radius = 250.0;
        let font = radius * CAPTION_SIZE_FRACTION;
        let layout = layout_caption(
            &CAPTION_LINES,
            DVec2::new(radius * CAPTION_WIDTH_FRACTION, radius * CAPTION_HEIGHT_FRACTION),
            font,
            mono(font),
        );
        let text: Vec<&str> = layout.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(text.first(), Some(&"Digital visual artist"));
        assert_eq!(text.last(), Some(&"Open to collaborations"));
    }

    #[test]
    fn test_draw_frame_one_glyph_per_particle() {
        let state = field(SphereOptions::digits());
        let mut surface = HeadlessSurface::new(900, 700);
        draw_frame(&state, &mut surface);
        assert_eq!(surface.glyphs_drawn(), 50);
        assert_eq!(surface.ops()[1], DrawOp::Clear(0));
        assert_eq!(surface.ops()[2], DrawOp::Translate(DVec2::new(450.0, 350.0)));
        // Alpha is zero at rest: no caption
        assert_eq!(surface.caption_lines_drawn(), 0);
    }

    #[test]
    fn test_caption_drawn_after_particles_with_alpha() {
        let mut state = field(SphereOptions::digits());
        state.reveal_alpha = 128.0;
        let mut surface = HeadlessSurface::new(900, 700);
        draw_frame(&state, &mut surface);
        assert!(surface.caption_lines_drawn() >= 4);
        let ops = surface.ops();
        let fill_pos = ops
            .iter()
            .position(|op| *op == DrawOp::SetFill([255, 255, 255], 128.0))
            .unwrap();
        let last_glyph = ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Text(s, _) if s.chars().count() == 1))
            .unwrap();
        assert!(fill_pos > last_glyph);
    }

    #[test]
    fn test_letters_never_draw_caption() {
        let mut state = field(SphereOptions::letters());
        state.reveal_alpha = 255.0;
        let mut surface = HeadlessSurface::new(900, 700);
        draw_frame(&state, &mut surface);
        assert_eq!(surface.caption_lines_drawn(), 0);
    }
}
