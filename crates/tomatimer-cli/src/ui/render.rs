use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};
use ratatui::Frame;
use tomatimer_core::{Mode, TimerSnapshot};

use super::input::HELP;

fn accent(mode: Mode) -> Color {
    let (r, g, b) = mode.spec().accent_rgb;
    Color::Rgb(r, g, b)
}

pub fn draw(frame: &mut Frame<'_>, snap: &TimerSnapshot, show_help: bool) {
    let color = accent(snap.mode);
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(Line::from(" Pomodoro timer ").alignment(Alignment::Center));
    let area = frame.area();
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [tabs, clock, gauge, buttons, cta, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Min(1),
    ])
    .margin(1)
    .areas(inner);

    draw_mode_tabs(frame, tabs, snap.mode);

    let clock_text = Paragraph::new(Line::from(Span::styled(
        snap.clock(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP | Borders::BOTTOM).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(clock_text, clock);

    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(snap.progress())
            .label(""),
        gauge,
    );

    let button = |label: &'static str, primary: bool| {
        let style = if primary {
            Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        Span::styled(format!(" {label} "), style)
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            button(snap.start_pause_label(), true),
            Span::raw("   "),
            button("Skip", false),
        ]))
        .alignment(Alignment::Center),
        buttons,
    );

    frame.render_widget(
        Paragraph::new(snap.call_to_action()).alignment(Alignment::Center),
        cta,
    );

    if show_help && help.height > 0 {
        let footer = Rect {
            y: help.y + help.height - 1,
            height: 1,
            ..help
        };
        frame.render_widget(
            Paragraph::new(HELP)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            footer,
        );
    }
}

fn draw_mode_tabs(frame: &mut Frame<'_>, area: Rect, current: Mode) {
    let mut spans = Vec::with_capacity(Mode::ALL.len() * 2);
    for mode in Mode::ALL {
        let style = if mode == current {
            Style::default()
                .fg(Color::Black)
                .bg(accent(mode))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", mode.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.pop();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
