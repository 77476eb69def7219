//! Animation effects for the game screen.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use tjd_types::ui::{ease_in_out, ease_out};

/// Horizontal decaying shake of `base`, kept inside `viewport`.
#[must_use]
pub fn shake_rect(progress: f32, base: Rect, viewport: Rect) -> Rect {
    let t = progress.clamp(0.0, 1.0);
    let decay = 1.0 - t;
    let oscillations = 4.0;
    let amplitude = 3.0;
    let offset =
        (f32::sin(t * std::f32::consts::TAU * oscillations) * amplitude * decay).round() as i32;
    let viewport_left = i32::from(viewport.x);
    let viewport_right = i32::from(viewport.x) + i32::from(viewport.width);
    let max_x = (viewport_right - i32::from(base.width)).max(viewport_left);
    let base_x = i32::from(base.x);
    let x = (base_x + offset).clamp(viewport_left, max_x) as u16;
    Rect { x, ..base }
}

/// Rows of space above the game title: starts at `max` and settles to 0.
#[must_use]
pub fn intro_padding(progress: f32, max: u16) -> u16 {
    let eased = ease_in_out(progress);
    ((1.0 - eased) * f32::from(max)).round() as u16
}

/// Dim `style` during the first half of a fade-in.
#[must_use]
pub fn fade_in(style: Style, progress: f32) -> Style {
    if ease_out(progress) < 0.5 {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;
    use ratatui::style::{Modifier, Style};

    use super::{fade_in, intro_padding, shake_rect};

    #[test]
    fn shake_settles_back_to_base() {
        let base = Rect::new(10, 5, 20, 3);
        let viewport = Rect::new(0, 0, 80, 24);
        assert_eq!(shake_rect(1.0, base, viewport), base);
        assert_eq!(shake_rect(0.0, base, viewport), base);
        assert_ne!(shake_rect(0.06, base, viewport).x, base.x);
    }

    #[test]
    fn shake_stays_inside_viewport() {
        let base = Rect::new(0, 0, 20, 3);
        let viewport = Rect::new(0, 0, 20, 24);
        for step in 0..=20 {
            let rect = shake_rect(step as f32 / 20.0, base, viewport);
            assert_eq!(rect.x, 0);
        }
    }

    #[test]
    fn intro_padding_shrinks_to_zero() {
        assert_eq!(intro_padding(0.0, 4), 4);
        assert_eq!(intro_padding(1.0, 4), 0);
    }

    #[test]
    fn fade_in_dims_early_frames_only() {
        let style = Style::default();
        assert!(fade_in(style, 0.0).add_modifier.contains(Modifier::DIM));
        assert!(!fade_in(style, 1.0).add_modifier.contains(Modifier::DIM));
    }
}
