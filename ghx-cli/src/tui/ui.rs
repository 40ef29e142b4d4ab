//! # Rendering
//!
//! Draws the navigation bar, the current screen and a one-line footer with
//! key hints or the latest status message.

use ghx_core::colors::{DEFAULT_LANGUAGE_COLOR, language_color, to_rgb};
use ghx_core::consts::{HOME_ACTION, HOME_SUBTITLE, HOME_TITLE, USERNAME_PLACEHOLDER};
use ghx_core::{FetchState, NAV_BRAND, NAV_ITEMS, RepositoryCard, RepositoryList, Route, profile_stats};
use ghx_gh::Profile;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{App, Focus};

/// Draw the whole shell
pub fn draw(f: &mut Frame, app: &App) {
  let [nav, body, footer] = Layout::vertical([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
    .areas(f.area());

  render_nav(f, nav, app.route());
  match app.route() {
    Route::Home => render_home(f, body),
    Route::Search => render_search(f, body, app),
    Route::Repositories { .. } => {
      if let Some(list) = app.repos() {
        render_repositories(f, body, list, app);
      }
    }
  }
  render_footer(f, footer, app);
}

fn render_nav(f: &mut Frame, area: Rect, route: &Route) {
  let mut spans = vec![
    Span::styled(
      format!(" {NAV_BRAND} "),
      Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ),
    Span::raw("  "),
  ];

  for item in NAV_ITEMS {
    let style = if item.is_active(route) {
      Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
      Style::default()
    };
    spans.push(Span::styled(format!(" {} ", item.label), style));
    spans.push(Span::raw(" "));
  }

  f.render_widget(
    Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL)),
    area,
  );
}

fn render_home(f: &mut Frame, area: Rect) {
  let [_, content, _] =
    Layout::vertical([Constraint::Fill(1), Constraint::Length(5), Constraint::Fill(1)]).areas(area);

  let lines = vec![
    Line::from(Span::styled(HOME_TITLE, Style::default().add_modifier(Modifier::BOLD))),
    Line::from(""),
    Line::from(Span::styled(HOME_SUBTITLE, Style::default().fg(Color::Gray))),
    Line::from(""),
    Line::from(Span::styled(
      format!("[Enter] {HOME_ACTION} →"),
      Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )),
  ];

  f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
}

fn render_search(f: &mut Frame, area: Rect, app: &App) {
  let [input_area, result_area] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

  let focused = app.focus() == Focus::Input;
  let border_style = if focused {
    Style::default().fg(Color::Yellow)
  } else {
    Style::default()
  };
  let input = if app.input().is_empty() {
    Span::styled(USERNAME_PLACEHOLDER, Style::default().fg(Color::DarkGray))
  } else {
    Span::raw(app.input())
  };

  f.render_widget(
    Paragraph::new(Line::from(input)).block(
      Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Username "),
    ),
    input_area,
  );

  if focused {
    f.set_cursor_position((input_cursor_x(input_area, app.input()), input_area.y + 1));
  }

  let block = Block::default().borders(Borders::ALL).title(" Profile ");
  let body = match app.lookup().state() {
    FetchState::Idle => Paragraph::new(Line::from(Span::styled(
      "Type a username and press Enter",
      Style::default().fg(Color::DarkGray),
    ))),
    FetchState::Loading => Paragraph::new("Searching..."),
    FetchState::Error(message) => error_paragraph(message),
    FetchState::Success(profile) => Paragraph::new(profile_lines(profile)).wrap(Wrap { trim: true }),
  };

  f.render_widget(body.block(block), result_area);
}

/// Lines of the profile card
fn profile_lines(profile: &Profile) -> Vec<Line<'_>> {
  let mut lines = vec![
    Line::from(Span::styled(
      profile.display_name(),
      Style::default().add_modifier(Modifier::BOLD),
    )),
    Line::from(Span::styled(format!("@{}", profile.login), Style::default().fg(Color::Cyan))),
  ];

  if let Some(bio) = profile.bio.as_deref().filter(|bio| !bio.trim().is_empty()) {
    lines.push(Line::from(""));
    lines.push(Line::from(bio.trim()));
  }

  let mut stats = Vec::new();
  for (i, stat) in profile_stats(profile).iter().enumerate() {
    if i > 0 {
      stats.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    }
    stats.push(Span::styled(
      stat.value.to_string(),
      Style::default().add_modifier(Modifier::BOLD),
    ));
    stats.push(Span::raw(format!(" {}", stat.label)));
  }

  lines.push(Line::from(""));
  lines.push(Line::from(stats));
  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled(
    "Press r to view repositories",
    Style::default().fg(Color::Cyan),
  )));
  lines
}

fn render_repositories(f: &mut Frame, area: Rect, list: &RepositoryList, app: &App) {
  let [header_area, list_area] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

  let summary = match list.state() {
    FetchState::Idle | FetchState::Loading => "Loading repositories...".to_string(),
    FetchState::Error(_) => String::new(),
    FetchState::Success(_) => list.summary_line().unwrap_or_default(),
  };
  f.render_widget(
    Paragraph::new(summary).block(
      Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", list.header_title())),
    ),
    header_area,
  );

  let block = Block::default().borders(Borders::ALL);
  match list.state() {
    FetchState::Error(message) => f.render_widget(error_paragraph(message).block(block), list_area),
    FetchState::Success(_) if list.is_empty_state() => f.render_widget(
      Paragraph::new(list.empty_message())
        .alignment(Alignment::Center)
        .block(block),
      list_area,
    ),
    FetchState::Success(_) => {
      let items: Vec<ListItem> = list.cards(app.date_style()).into_iter().map(card_item).collect();
      let widget = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::Blue).fg(Color::White))
        .highlight_symbol("► ");

      let mut state = ListState::default().with_selected(Some(app.selected()));
      f.render_stateful_widget(widget, list_area, &mut state);
    }
    FetchState::Idle | FetchState::Loading => f.render_widget(block, list_area),
  }
}

/// A three-line list entry for one repository
fn card_item(card: RepositoryCard) -> ListItem<'static> {
  let mut title = vec![Span::styled(card.name, Style::default().add_modifier(Modifier::BOLD))];
  if let Some((language, token)) = card.language {
    title.push(Span::raw("  "));
    title.push(Span::styled(format!("● {language}"), Style::default().fg(token_color(token))));
  }

  let description = card.description.unwrap_or_default();
  let meta = format!("★ {}  ⑂ {}  Updated {}", card.stars, card.forks, card.updated);

  ListItem::new(vec![
    Line::from(title),
    Line::from(Span::styled(description, Style::default().fg(Color::Gray))),
    Line::from(Span::styled(meta, Style::default().fg(Color::DarkGray))),
  ])
}

/// Terminal color for a palette token
fn token_color(token: &str) -> Color {
  to_rgb(token)
    .or_else(|| to_rgb(DEFAULT_LANGUAGE_COLOR))
    .map_or(Color::Reset, |(r, g, b)| Color::Rgb(r, g, b))
}

fn error_paragraph(message: &str) -> Paragraph<'_> {
  Paragraph::new(Line::from(Span::styled(
    message,
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
  )))
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
  let text = match app.status() {
    Some(status) => status.to_string(),
    None => key_hints(app).to_string(),
  };

  f.render_widget(Paragraph::new(text).style(Style::default().fg(Color::DarkGray)), area);
}

fn key_hints(app: &App) -> &'static str {
  match app.route() {
    Route::Home => "Enter: get started · Tab/F1/F2: switch screen · q: quit",
    Route::Search => match app.focus() {
      Focus::Input => "Enter: search · Esc: back · Tab/F1/F2: switch screen · Ctrl+C: quit",
      Focus::Result => "r: repositories · /: edit username · Esc: back · q: quit",
    },
    Route::Repositories { .. } => "↑/↓ j/k: move · Enter: open in browser · Esc: back · q: quit",
  }
}

/// Column of the cursor after `input`, clamped inside the field border
fn input_cursor_x(area: Rect, input: &str) -> u16 {
  let typed = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
  area
    .x
    .saturating_add(1)
    .saturating_add(typed)
    .min(area.right().saturating_sub(2))
}

#[cfg(test)]
mod tests {
  use crossterm::event::{KeyCode, KeyModifiers};
  use ghx_core::{DateStyle, Ticket};
  use ghx_test_utils::fixtures::{profile_json, repo_json};
  use ratatui::Terminal;
  use ratatui::backend::TestBackend;
  use ratatui::buffer::Buffer;
  use serde_json::json;

  use super::*;
  use crate::tui::app::{Action, Completion};

  fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
      .content
      .chunks(width)
      .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
      .collect::<Vec<_>>()
      .join("\n")
  }

  fn render(app: &App) -> anyhow::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(100, 30))?;
    terminal.draw(|f| draw(f, app))?;
    Ok(buffer_text(terminal.backend().buffer()))
  }

  fn search(app: &mut App, username: &str) -> Ticket {
    match app.search_for(username) {
      Action::FetchProfile(request) => request.ticket,
      other => panic!("Expected a profile request, got {other:?}"),
    }
  }

  #[test]
  fn test_home_screen() -> anyhow::Result<()> {
    let app = App::new(DateStyle::Iso);
    let screen = render(&app)?;

    assert!(screen.contains("GitHub Explorer"));
    assert!(screen.contains("Home"));
    assert!(screen.contains("Search"));
    assert!(screen.contains(HOME_TITLE));
    assert!(screen.contains(HOME_ACTION));

    Ok(())
  }

  #[test]
  fn test_profile_card_shows_counters() -> anyhow::Result<()> {
    let mut app = App::new(DateStyle::Iso);
    let ticket = search(&mut app, "octocat");
    assert!(render(&app)?.contains("Searching..."));

    let profile: Profile = serde_json::from_value(profile_json("octocat", 10, 2, 5))?;
    app.apply(Completion::Profile {
      ticket,
      result: Ok(profile),
    });
    let screen = render(&app)?;

    assert!(screen.contains("@octocat"));
    assert!(screen.contains("10 Followers"));
    assert!(screen.contains("2 Following"));
    assert!(screen.contains("5 Repos"));

    Ok(())
  }

  #[test]
  fn test_lookup_error_is_shown() -> anyhow::Result<()> {
    let mut app = App::new(DateStyle::Iso);
    let ticket = search(&mut app, "doesnotexist123");
    app.apply(Completion::Profile {
      ticket,
      result: Err(ghx_gh::FetchError::NotFound("doesnotexist123".to_string())),
    });

    assert!(render(&app)?.contains("User not found"));

    Ok(())
  }

  #[test]
  fn test_repository_list_and_empty_state() -> anyhow::Result<()> {
    let mut app = App::new(DateStyle::Iso);
    let Action::FetchRepos(request) = app.navigate(Route::repositories("octocat", None)) else {
      panic!("Expected a repository request");
    };
    assert!(render(&app)?.contains("Loading repositories..."));

    let repos = serde_json::from_value(json!([
      repo_json(1, "Hello-World", Some("Ruby"), "2024-01-02T12:00:00Z"),
      repo_json(2, "Spoon-Knife", None, "2023-06-01T12:00:00Z"),
    ]))?;
    app.apply(Completion::Repos {
      username: request.username.clone(),
      ticket: request.ticket,
      result: Ok(repos),
    });
    let screen = render(&app)?;

    assert!(screen.contains("octocat's Repositories"));
    assert!(screen.contains("2 repositories found"));
    assert!(screen.contains("Hello-World"));
    assert!(screen.contains("● Ruby"));
    assert!(screen.find("Hello-World") < screen.find("Spoon-Knife"));

    let Action::FetchRepos(request) = app.navigate(Route::repositories("ghost", None)) else {
      panic!("Expected a repository request");
    };
    app.apply(Completion::Repos {
      username: request.username.clone(),
      ticket: request.ticket,
      result: Ok(Vec::new()),
    });
    let screen = render(&app)?;

    assert!(screen.contains("No public repositories found"));
    assert!(screen.contains("0 repositories found"));

    Ok(())
  }

  #[test]
  fn test_token_color() {
    assert_eq!(token_color("#701516"), Color::Rgb(0x70, 0x15, 0x16));
    assert_eq!(token_color("not-a-color"), Color::Rgb(0x66, 0x7e, 0xea));
  }

  #[test]
  fn test_cursor_stays_inside_input_field() {
    let area = Rect::new(10, 3, 40, 3);

    assert_eq!(input_cursor_x(area, ""), 11);
    assert_eq!(input_cursor_x(area, "octocat"), 18);
    assert_eq!(input_cursor_x(area, &"x".repeat(70_000)), 48);
  }

  #[test]
  fn test_long_pasted_input_renders() -> anyhow::Result<()> {
    let mut app = App::new(DateStyle::Iso);
    app.navigate(Route::Search);
    for _ in 0..70_000 {
      app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
    }

    let screen = render(&app)?;
    assert!(screen.contains("Username"));

    Ok(())
  }
}
