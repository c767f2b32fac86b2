//! Pure view: draws a frame from the view model, the input line and the
//! scroll offset. No state lives here.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use docquery_core::{AppViewModel, NoticeKind, NoticeView, Role, UploadStatus};

pub fn render(frame: &mut Frame, view: &AppViewModel, input: &str, scroll: u16) {
    let [header, transcript, notice, input_area, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(header_line(view), header);
    render_transcript(frame, view, transcript, scroll);
    if let Some(banner) = &view.notice {
        frame.render_widget(notice_line(banner), notice);
    }
    render_input(frame, view, input, input_area);
    frame.render_widget(footer_line(), footer);

    if view.confirm_clear {
        render_confirm_prompt(frame);
    }
}

fn status_label(status: UploadStatus) -> &'static str {
    match status {
        UploadStatus::Waiting => "Waiting for PDF",
        UploadStatus::Uploading => "Uploading & Processing...",
        UploadStatus::Ready => "Ready to answer questions",
        UploadStatus::Failed => "Upload failed",
    }
}

fn status_style(status: UploadStatus) -> Style {
    match status {
        UploadStatus::Waiting => Style::default().fg(Color::DarkGray),
        UploadStatus::Uploading => Style::default().fg(Color::Yellow),
        UploadStatus::Ready => Style::default().fg(Color::Green),
        UploadStatus::Failed => Style::default().fg(Color::Red),
    }
}

fn header_line(view: &AppViewModel) -> Paragraph<'_> {
    let line = Line::from(vec![
        Span::styled(" docquery ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("| "),
        Span::styled(status_label(view.upload), status_style(view.upload)),
        Span::raw(format!(
            " | Chunks: {} | Queries: {}",
            view.total_chunks, view.query_count
        )),
    ]);
    Paragraph::new(line)
}

fn render_transcript(frame: &mut Frame, view: &AppViewModel, area: Rect, scroll: u16) {
    let mut lines: Vec<Line> = Vec::with_capacity(view.messages.len() * 2 + 1);
    for message in &view.messages {
        let (prefix, style) = match message.role {
            Role::User => ("You: ", Style::default().fg(Color::Green)),
            Role::Bot => ("Bot: ", Style::default().fg(Color::Cyan)),
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, style.add_modifier(Modifier::BOLD)),
            Span::styled(message.content.clone(), style),
        ]));
        lines.push(Line::default());
    }
    if view.pending_answer {
        lines.push(Line::styled(
            "Bot is thinking...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    // Pin the view to the bottom, then apply the user's scroll-back offset.
    // Wrapping can add lines beyond this count, so deep transcripts may need
    // an extra page of scroll; good enough for a chat log.
    let inner_height = area.height.saturating_sub(2);
    let bottom = (lines.len() as u16).saturating_sub(inner_height);
    let top = bottom.saturating_sub(scroll);

    let transcript = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Conversation"))
        .wrap(Wrap { trim: false })
        .scroll((top, 0));
    frame.render_widget(transcript, area);
}

fn notice_line(notice: &NoticeView) -> Paragraph<'_> {
    let style = match notice.kind {
        NoticeKind::Success => Style::default().fg(Color::Green),
        NoticeKind::Error => Style::default().fg(Color::Red),
    };
    Paragraph::new(Line::styled(format!(" {}", notice.text), style))
}

fn render_input(frame: &mut Frame, view: &AppViewModel, input: &str, area: Rect) {
    let hint = if view.input_enabled {
        "Ask a question"
    } else {
        "Upload a PDF with /upload <path>"
    };
    let content = if input.is_empty() {
        Line::styled(hint, Style::default().fg(Color::DarkGray))
    } else {
        Line::from(format!("{input}_"))
    };
    let widget = Paragraph::new(content).block(Block::default().borders(Borders::ALL).title("> "));
    frame.render_widget(widget, area);
}

fn footer_line() -> Paragraph<'static> {
    Paragraph::new(Line::styled(
        " Enter: send | /upload <path> | /clear | PgUp/PgDn: scroll | Esc: quit",
        Style::default().fg(Color::DarkGray),
    ))
}

fn render_confirm_prompt(frame: &mut Frame) {
    let area = centered_rect(frame.area(), 56, 5);
    let prompt = Paragraph::new(vec![
        Line::from("Clear all chat messages and uploaded documents?"),
        Line::default(),
        Line::styled(
            "[y] yes    [n] no",
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])
    .block(Block::default().borders(Borders::ALL).title("Confirm"));
    frame.render_widget(Clear, area);
    frame.render_widget(prompt, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
