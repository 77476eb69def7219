//! TUI rendering for TJD-Toolkit using ratatui.

mod effects;
mod input;
mod theme;

pub use effects::{fade_in, intro_padding, shake_rect};
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use tjd_engine::home::{
    COMING_SOON_LABEL, GRID_COLUMNS, HOME_SUBTITLE, HOME_TITLE, HomeCard, home_cards,
};
use tjd_engine::quick_type::{SPEED_HINT, format_speed};
use tjd_engine::{
    App, QuickTypeChallenge, Route, SpeedRating, Stage, StatusKind, StatusTone, UiOptions,
};

const CARD_WIDTH: u16 = 32;
const CARD_HEIGHT: u16 = 7;
const CARD_GAP: u16 = 2;
const INPUT_WIDTH: u16 = 40;
const INTRO_MAX_PADDING: u16 = 3;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    draw_at(frame, app, Instant::now());
}

/// Draw the app as it looks at `now`.
pub fn draw_at(frame: &mut Frame, app: &App, now: Instant) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg).fg(palette.text_primary));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    match app.route() {
        Route::Home => draw_home(frame, app, chunks[0], &palette, &glyphs),
        Route::FeatureEins => draw_feature_eins(frame, app, chunks[0], now, &palette, &glyphs),
    }
    draw_status_bar(frame, app, chunks[1], &palette);

    if let Some(loading) = app.home().loading() {
        let tick = (loading.progress(now) * 12.0) as usize;
        draw_loading_overlay(frame, &loading.message(), tick, options, &palette);
    }

    if let Some(pending) = app.pending_confirm() {
        draw_confirm_modal(frame, pending.title(), pending.prompt(), &palette);
    }
}

// ============================================================================
// Launcher
// ============================================================================

fn draw_home(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(HOME_TITLE, styles::title(palette))),
        Line::from(Span::styled(HOME_SUBTITLE, styles::subtitle(palette))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let cards = home_cards();
    let grid = chunks[1];
    let card_width = CARD_WIDTH.min(grid.width.saturating_sub(CARD_GAP) / GRID_COLUMNS as u16);
    let columns = GRID_COLUMNS.min(cards.len()).max(1) as u16;
    let grid_width = card_width * columns + CARD_GAP * columns.saturating_sub(1);
    let left = grid.x + grid.width.saturating_sub(grid_width) / 2;

    for (index, card) in cards.iter().enumerate() {
        let column = (index % GRID_COLUMNS) as u16;
        let row = (index / GRID_COLUMNS) as u16;
        let y = grid.y + 1 + row * (CARD_HEIGHT + 1);
        if y + CARD_HEIGHT > grid.y + grid.height {
            break;
        }
        let rect = Rect {
            x: left + column * (card_width + CARD_GAP),
            y,
            width: card_width,
            height: CARD_HEIGHT,
        }
        .intersection(grid);
        if rect.is_empty() {
            continue;
        }
        let selected = index == app.home().selected();
        draw_card(frame, app, *card, rect, selected, palette, glyphs);
    }
}

fn draw_card(
    frame: &mut Frame,
    app: &App,
    card: HomeCard,
    rect: Rect,
    selected: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let inner_width = usize::from(rect.width.saturating_sub(4));
    let name_style = if selected {
        styles::title(palette).fg(palette.primary)
    } else {
        styles::title(palette)
    };
    let name = if selected {
        format!("{} {}", glyphs.selected, card.name())
    } else {
        card.name().to_string()
    };

    let (icon, detail) = match card {
        HomeCard::Available(tool) => {
            let icon = Span::styled(glyphs.tool, Style::default().fg(palette.peach));
            let detail = if tool.is_enabled(app.config()) {
                Span::styled(
                    truncate_to_width(tool.description, inner_width),
                    Style::default().fg(palette.text_secondary),
                )
            } else {
                Span::styled(
                    "Disabled in settings",
                    Style::default()
                        .fg(palette.text_muted)
                        .add_modifier(Modifier::ITALIC),
                )
            };
            (icon, detail)
        }
        HomeCard::ComingSoon(_) => (
            Span::styled(glyphs.coming_soon, Style::default().fg(palette.text_muted)),
            Span::styled(
                COMING_SOON_LABEL,
                Style::default()
                    .fg(palette.text_muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ),
    };

    let lines = vec![
        Line::from(icon),
        Line::from(Span::styled(truncate_to_width(&name, inner_width), name_style)),
        Line::from(detail),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::card_border(palette, selected))
        .style(Style::default().bg(if selected {
            palette.bg_highlight
        } else {
            palette.bg_panel
        }))
        .padding(Padding::new(1, 1, 1, 0));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}

// ============================================================================
// Feature Eins
// ============================================================================

fn draw_feature_eins(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    now: Instant,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let Some(challenge) = app.challenge() else {
        return;
    };
    let options = app.ui_options();
    let summary = challenge.stage() == Stage::Summary;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tool header
            Constraint::Length(if summary { 0 } else { 2 }), // Banner
            Constraint::Min(1), // Game
            Constraint::Length(1), // Go Home
        ])
        .split(area);

    draw_tool_header(frame, Route::FeatureEins.title(), chunks[0], palette, glyphs);

    if !summary {
        let banner = Paragraph::new(Line::from(Span::styled(
            format!(
                "{g}  !=-->  Page Under Construction  <--=!  {g}",
                g = glyphs.construction
            ),
            Style::default()
                .fg(palette.peach)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[1]);
    }

    if summary {
        draw_summary(frame, challenge, chunks[2], options, palette, glyphs);
    } else {
        draw_game(frame, challenge, chunks[2], now, options, palette, glyphs);
    }

    let go_home = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("[ {} Go Home ]", glyphs.home),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Esc", styles::key_hint(palette)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(go_home, chunks[3]);
}

fn draw_tool_header(frame: &mut Frame, title: &str, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let rule = if glyphs.back.is_ascii() { "-" } else { "─" };
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", glyphs.back), styles::key_hint(palette)),
            Span::styled(title.to_string(), styles::title(palette)),
        ]),
        Line::from(Span::styled(
            rule.repeat(usize::from(area.width)),
            Style::default().fg(palette.bg_border),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_game(
    frame: &mut Frame,
    challenge: &QuickTypeChallenge,
    area: Rect,
    now: Instant,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let stage = challenge.stage();
    let progress = if options.reduced_motion {
        1.0
    } else {
        challenge.intro_progress(now)
    };
    let padding = if stage == Stage::Ready {
        INTRO_MAX_PADDING
    } else {
        intro_padding(progress, INTRO_MAX_PADDING)
    };

    let mut top: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
    top.push(Line::from(Span::styled(
        "Quick Type Challenge",
        Style::default()
            .fg(palette.blue)
            .add_modifier(Modifier::BOLD),
    )));
    top.push(Line::from(Span::styled(
        "Type the given word as fast as you can!",
        Style::default().fg(palette.text_muted),
    )));
    top.push(Line::from(""));

    if stage == Stage::Ready {
        top.push(Line::from(""));
        top.push(Line::from(Span::styled(
            "[  Start Game  ]",
            Style::default()
                .fg(palette.bg)
                .bg(palette.blue)
                .add_modifier(Modifier::BOLD),
        )));
        top.push(Line::from(vec![
            Span::styled("Enter", styles::key_highlight(palette)),
            Span::styled(" to start", styles::key_hint(palette)),
        ]));
        frame.render_widget(Paragraph::new(top).alignment(Alignment::Center), area);
        return;
    }

    let word_style = fade_in(
        Style::default()
            .fg(palette.blue)
            .add_modifier(Modifier::BOLD),
        progress,
    );
    top.push(Line::from(Span::styled(
        challenge.word().unwrap_or(" ").to_string(),
        word_style,
    )));

    let top_height = top.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top_height),
            Constraint::Length(3), // Input
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(top).alignment(Alignment::Center), chunks[0]);

    let base = centered_rect(INPUT_WIDTH, 3, chunks[1]);
    let input_rect = match challenge.shake_progress(now) {
        Some(shake) if !options.reduced_motion => shake_rect(shake, base, chunks[1]),
        _ => base,
    };
    draw_typing_field(frame, challenge, input_rect, progress, palette, glyphs);

    let field_error = match challenge.field_error() {
        Some(error) => Line::from(Span::styled(error, Style::default().fg(palette.error))),
        None => Line::from(""),
    };
    let status = match challenge.status() {
        Some(status) => Line::from(Span::styled(
            status_text(&status.text, status.tone, glyphs),
            fade_in(status_style(status.tone, palette), progress),
        )),
        None => Line::from(""),
    };
    let mut bottom = vec![field_error, status];
    if let Some(best) = challenge.best_speed() {
        let icon = if challenge.is_new_record() {
            glyphs.new_best
        } else {
            glyphs.best
        };
        bottom.push(Line::from(Span::styled(
            format!("{icon} Best: {} char/s", format_speed(best)),
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::ITALIC),
        )));
    } else {
        bottom.push(Line::from(""));
    }
    bottom.push(Line::from(""));

    let misses: Vec<Span> = (0..usize::from(challenge.incorrect_tries()))
        .map(|i| {
            Span::styled(
                format!("{} ", glyphs.miss),
                Style::default()
                    .fg(palette.miss_shade(i))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    bottom.push(Line::from(misses));

    frame.render_widget(
        Paragraph::new(bottom)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        chunks[2],
    );
}

fn draw_typing_field(
    frame: &mut Frame,
    challenge: &QuickTypeChallenge,
    rect: Rect,
    progress: f32,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let locked = challenge.input_locked();
    let border = if challenge.field_error().is_some() {
        Style::default().fg(palette.error)
    } else if locked {
        Style::default().fg(palette.bg_border)
    } else {
        Style::default().fg(palette.primary)
    };

    let inner_width = usize::from(rect.width.saturating_sub(4));
    let typed = tail_to_width(challenge.typed(), inner_width.saturating_sub(1));
    let mut spans = vec![Span::styled(
        typed,
        Style::default().fg(if locked {
            palette.text_muted
        } else {
            palette.text_primary
        }),
    )];
    if !locked {
        spans.push(Span::styled(glyphs.cursor, Style::default().fg(palette.accent)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(fade_in(border, progress))
        .title(Span::styled(
            " Type the word and press Enter ",
            styles::key_hint(palette),
        ))
        .padding(Padding::horizontal(1));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .block(block)
            .style(Style::default().bg(palette.bg_panel)),
        rect,
    );
}

fn status_text(text: &str, tone: StatusTone, glyphs: &Glyphs) -> String {
    match tone {
        StatusTone::Success => format!("{} {text}", glyphs.correct),
        StatusTone::Error | StatusTone::Critical => format!("{} {text}", glyphs.miss),
        StatusTone::Muted => text.to_string(),
    }
}

fn status_style(tone: StatusTone, palette: &Palette) -> Style {
    match tone {
        StatusTone::Muted => Style::default().fg(palette.text_muted),
        StatusTone::Success => Style::default().fg(palette.success),
        StatusTone::Error => Style::default().fg(palette.error),
        StatusTone::Critical => Style::default()
            .fg(palette.error)
            .add_modifier(Modifier::BOLD),
    }
}

fn draw_summary(
    frame: &mut Frame,
    challenge: &QuickTypeChallenge,
    area: Rect,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let summary = challenge.summary();
    let average_color = match summary.rating {
        SpeedRating::Fast => palette.success,
        SpeedRating::Slow => palette.peach,
        SpeedRating::Typical => palette.text_primary,
    };
    let label = Style::default().fg(palette.text_secondary);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Game Over!", glyphs.game_over),
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Final Statistics", glyphs.stats),
            Style::default()
                .fg(palette.blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} Correct answers:  ", glyphs.correct), label),
            Span::styled(
                format!("{:>10}", summary.correct_answers),
                styles::title(palette),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{} Average speed:    ", glyphs.bullet), label),
            Span::styled(
                format!("{:>10}", format!("{} char/s", format_speed(summary.average_speed))),
                Style::default()
                    .fg(average_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{} Best speed:       ", glyphs.best), label),
            Span::styled(
                format!("{:>10}", format!("{} char/s", format_speed(summary.best_speed))),
                styles::title(palette),
            ),
        ]),
        Line::from(""),
    ];

    if options.show_tooltips {
        lines.push(Line::from(Span::styled(
            SPEED_HINT,
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" go home  ", styles::key_hint(palette)),
        Span::styled("r", styles::key_highlight(palette)),
        Span::styled(" play again", styles::key_hint(palette)),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        area,
    );
}

// ============================================================================
// Status bar and overlays
// ============================================================================

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let theme = Span::styled(
        format!("theme: {}", app.ui_options().theme),
        styles::key_hint(palette),
    );
    let theme_width = theme.width() as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(theme_width)])
        .split(area);

    let left = match app.status() {
        Some(status) => Line::from(Span::styled(
            status.text.clone(),
            match status.kind {
                StatusKind::Info => Style::default().fg(palette.text_secondary),
                StatusKind::Error => Style::default()
                    .fg(palette.error)
                    .add_modifier(Modifier::BOLD),
            },
        )),
        None => Line::from(key_hints(app, palette)),
    };

    frame.render_widget(Paragraph::new(left), chunks[0]);
    frame.render_widget(Paragraph::new(Line::from(theme)), chunks[1]);
}

fn key_hints(app: &App, palette: &Palette) -> Vec<Span<'static>> {
    let hints: &[(&'static str, &'static str)] = match app.route() {
        Route::Home => &[
            ("←→", "select"),
            ("Enter", "open"),
            ("t", "theme"),
            ("r", "reset"),
            ("q", "quit"),
        ],
        Route::FeatureEins => match app.challenge().map(QuickTypeChallenge::stage) {
            Some(Stage::Ready) => &[("Enter", "start"), ("Esc", "home"), ("q", "quit")],
            Some(Stage::Summary) => &[("Enter", "home"), ("r", "play again"), ("q", "quit")],
            _ => &[("Enter", "submit"), ("Esc", "home")],
        },
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, desc) in hints {
        spans.push(Span::styled(*key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {desc}  "), styles::key_hint(palette)));
    }
    spans
}

fn draw_loading_overlay(
    frame: &mut Frame,
    message: &str,
    tick: usize,
    options: UiOptions,
    palette: &Palette,
) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            spinner_frame(tick, options),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(palette.text_primary),
        )),
    ];

    let rect = centered_rect(40, 8, frame.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}

fn draw_confirm_modal(frame: &mut Frame, title: &str, prompt: &str, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {prompt}"),
            Style::default().fg(palette.text_muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", styles::key_highlight(palette)),
            Span::styled(" confirm  ", styles::key_hint(palette)),
            Span::styled("n", styles::key_highlight(palette)),
            Span::styled(" cancel", styles::key_hint(palette)),
        ]),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(10) as u16;
    let content_width = content_width.min(frame.area().width.saturating_sub(4));
    let content_height = lines.len() as u16;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::uniform(1));

    let rect = centered_rect(
        content_width.saturating_add(4),
        content_height.saturating_add(4),
        frame.area(),
    );

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

// ============================================================================
// Helpers
// ============================================================================

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Cut `raw` to `max` display columns, ending in `...` when shortened.
fn truncate_to_width(raw: &str, max: usize) -> String {
    if raw.width() <= max {
        return raw.to_string();
    }
    let budget = max.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for c in raw.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Keep the end of `raw` that fits in `max` columns, so the caret stays visible.
fn tail_to_width(raw: &str, max: usize) -> String {
    if raw.width() <= max {
        return raw.to_string();
    }
    let mut used = 0;
    let mut kept: Vec<char> = Vec::new();
    for c in raw.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        kept.push(c);
    }
    kept.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{centered_rect, tail_to_width, truncate_to_width};

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("Wouldn't you like to know...", 10), "Wouldn'...");
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本...");
    }

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail_to_width("keyboard", 4), "oard");
        assert_eq!(tail_to_width("key", 4), "key");
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(40, 40, area), area);
    }
}
