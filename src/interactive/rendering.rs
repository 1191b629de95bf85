//! TUI rendering with ratatui
//!
//! Board, keyboard, statistics and menus for the game interface.

use super::app::{App, MessageStyle, Screen};
use crate::core::{LetterMark, WORD_LENGTH};
use crate::game::{MAX_ATTEMPTS, SessionState};
use crate::output::formatters::{KEYBOARD_ROWS, plural_guesses};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    match app.screen {
        Screen::Menu => render_menu(f, main_chunks[0]),
        Screen::Instructions => render_instructions(f, main_chunks[0]),
        Screen::Statistics => render_statistics(f, app, main_chunks[0]),
        Screen::Playing | Screen::PostGame => render_game(f, app, main_chunks[0]),
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn mark_style(mark: LetterMark) -> Style {
    match mark {
        LetterMark::Exact => Style::default().fg(Color::Black).bg(Color::Green),
        LetterMark::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterMark::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterMark::Unknown => Style::default().fg(Color::White),
    }
}

fn render_menu(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "Welcome to Wordle!!",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("1. Instructions"),
        Line::from("2. Play game"),
        Line::from("3. Statistics"),
        Line::from("4. Exit"),
    ];

    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from("Guess the five letter word."),
        Line::from(""),
        Line::from(format!(
            "You get {MAX_ATTEMPTS} attempts. Type a word and press Enter to submit."
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Y ", mark_style(LetterMark::Present)),
            Span::raw(" yellow: in the word, wrong spot"),
        ]),
        Line::from(vec![
            Span::styled(" G ", mark_style(LetterMark::Exact)),
            Span::raw(" green: in the word, right spot"),
        ]),
        Line::from(vec![
            Span::styled(" X ", mark_style(LetterMark::Absent)),
            Span::raw(" dark gray: not in the word"),
        ]),
        Line::from(""),
        Line::from("Esc during a round leaves without recording it."),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" How to play ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_game(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Board
            Constraint::Min(5),                          // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = (0..MAX_ATTEMPTS)
        .map(|row| {
            let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
            match app.board.get(row) {
                Some(record) => {
                    for col in 0..WORD_LENGTH {
                        let letter = record.word.char_at(col) as char;
                        spans.push(Span::styled(
                            format!(" {letter} "),
                            mark_style(record.result.mark_at(col)).add_modifier(Modifier::BOLD),
                        ));
                        spans.push(Span::raw(" "));
                    }
                }
                // Current row shows what is being typed
                None if row == app.board.len() && app.outcome == SessionState::InProgress => {
                    let typed: Vec<char> = app.input_buffer.chars().collect();
                    for col in 0..WORD_LENGTH {
                        let letter = typed.get(col).copied().unwrap_or('_');
                        spans.push(Span::styled(
                            format!(" {letter} "),
                            Style::default().fg(Color::Yellow),
                        ));
                        spans.push(Span::raw(" "));
                    }
                }
                None => {
                    for _ in 0..WORD_LENGTH {
                        spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                        spans.push(Span::raw(" "));
                    }
                }
            }
            Line::from(spans)
        })
        .collect();

    let title = format!(" Board {}/{MAX_ATTEMPTS} ", app.board.len());
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    [
                        Span::styled(
                            format!(" {} ", letter as char),
                            mark_style(app.keyboard.mark(letter)),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(area);

    let stats = &app.stats;
    let summary = vec![
        Line::from("Played   Win %   Current Streak   Max Streak"),
        Line::from(Span::styled(
            format!(
                "{:<8} {:<7} {:<16} {}",
                stats.games_played,
                format!("{}%", stats.win_percent),
                stats.current_streak,
                stats.max_streak
            ),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(summary).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, chunks[0]);

    let bars: Vec<Bar> = stats
        .guess_distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Bar::default()
                .label(Line::from((i + 1).to_string()))
                .value(u64::from(count))
                .style(Style::default().fg(Color::Green))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Guess Distribution ")
                .borders(Borders::ALL),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, chunks[1]);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Round summary
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_round_summary(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_round_summary(f: &mut Frame, app: &App, area: Rect) {
    let mut content = vec![Line::from(format!(
        "Attempts left: {}",
        MAX_ATTEMPTS.saturating_sub(app.board.len())
    ))];

    match (app.outcome, &app.secret) {
        (SessionState::Won, Some(secret)) => {
            content.push(Line::from(Span::styled(
                format!("Solved {secret} in {}", plural_guesses(app.board.len())),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
        }
        (SessionState::Lost, Some(secret)) => {
            content.push(Line::from(Span::styled(
                format!("The word was {secret}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
        _ => {}
    }

    if app.outcome.is_terminal() {
        content.push(Line::from(""));
        for record in &app.board {
            content.push(Line::from(record.result.to_emoji()));
        }
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Round ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.screen {
        Screen::Menu => (" Press 1-4 to choose ", "", Color::Yellow),
        Screen::Instructions | Screen::Statistics => {
            (" Press any key to continue ", "", Color::Cyan)
        }
        Screen::Playing => (
            " Enter Guess (5 letters) | Enter to submit | Esc to leave ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        Screen::PostGame => (
            " 1/n: Play Again | 2: Reset Stats | 3: Main Menu | 4/q: Quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let stats_text = format!(
        "Games: {} | Win Rate: {}% | Streak: {} (max {})",
        app.stats.games_played, app.stats.win_percent, app.stats.current_streak, app.stats.max_streak
    );

    let status = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
