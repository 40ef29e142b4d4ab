//! # Interactive Shell State
//!
//! Everything the shell shows, plus the key handling that moves between its
//! screens. Key handling never performs I/O: it returns an [`Action`] that
//! the event loop carries out, and request outcomes come back as
//! [`Completion`]s.

use crossterm::event::{KeyCode, KeyModifiers};
use ghx_core::{DateStyle, LookupRequest, ProfileLookup, ReposRequest, RepositoryList, Route, Ticket};
use ghx_gh::{FetchError, Profile, RepositorySummary};
use tracing::{debug, warn};

/// Which part of the search screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  /// Keys edit the username field
  Input,
  /// Keys act on the fetched profile card
  Result,
}

/// Work the event loop should carry out after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  None,
  Quit,
  FetchProfile(LookupRequest),
  FetchRepos(ReposRequest),
  Open(RepositorySummary),
}

/// Outcome of a request, sent back to the UI thread
#[derive(Debug)]
pub enum Completion {
  Profile {
    ticket: Ticket,
    result: Result<Profile, FetchError>,
  },
  Repos {
    username: String,
    ticket: Ticket,
    result: Result<Vec<RepositorySummary>, FetchError>,
  },
}

/// State of the interactive shell
#[derive(Debug)]
pub struct App {
  route: Route,
  lookup: ProfileLookup,
  input: String,
  focus: Focus,
  repos: Option<RepositoryList>,
  selected: usize,
  date_style: DateStyle,
  status: Option<String>,
}

impl App {
  pub fn new(date_style: DateStyle) -> Self {
    Self {
      route: Route::Home,
      lookup: ProfileLookup::new(),
      input: String::new(),
      focus: Focus::Input,
      repos: None,
      selected: 0,
      date_style,
      status: None,
    }
  }

  pub const fn route(&self) -> &Route {
    &self.route
  }

  pub const fn lookup(&self) -> &ProfileLookup {
    &self.lookup
  }

  pub fn input(&self) -> &str {
    &self.input
  }

  pub const fn focus(&self) -> Focus {
    self.focus
  }

  pub const fn repos(&self) -> Option<&RepositoryList> {
    self.repos.as_ref()
  }

  pub const fn selected(&self) -> usize {
    self.selected
  }

  pub const fn date_style(&self) -> DateStyle {
    self.date_style
  }

  pub fn status(&self) -> Option<&str> {
    self.status.as_deref()
  }

  pub fn set_status(&mut self, status: impl Into<String>) {
    self.status = Some(status.into());
  }

  /// Show `route`, starting its request when it has one
  pub fn navigate(&mut self, route: Route) -> Action {
    debug!("Navigating to {}", route.path());
    self.status = None;

    let action = match &route {
      Route::Home => Action::None,
      Route::Search => {
        if self.lookup.profile().is_none() {
          self.focus = Focus::Input;
        }
        Action::None
      }
      Route::Repositories { username, profile } => {
        // Reusing the list keeps its tickets increasing across visits
        let list = self
          .repos
          .get_or_insert_with(|| RepositoryList::new(username.clone(), profile.clone()));
        let request = list.set_username(username).unwrap_or_else(|| list.start());
        list.set_profile(profile.clone());
        self.selected = 0;
        Action::FetchRepos(request)
      }
    };

    self.route = route;
    action
  }

  /// Open the search screen with `username` typed in and submitted
  pub fn search_for(&mut self, username: &str) -> Action {
    self.navigate(Route::Search);
    self.input = username.to_string();
    self.submit()
  }

  /// React to one key press
  pub fn handle_key(&mut self, key_code: KeyCode, modifiers: KeyModifiers) -> Action {
    if key_code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
      return Action::Quit;
    }

    match key_code {
      KeyCode::F(1) => return self.navigate(Route::Home),
      KeyCode::F(2) => return self.navigate(Route::Search),
      KeyCode::Tab => {
        let next = match self.route {
          Route::Home => Route::Search,
          Route::Search | Route::Repositories { .. } => Route::Home,
        };
        return self.navigate(next);
      }
      _ => {}
    }

    match self.route {
      Route::Home => self.handle_home_key(key_code),
      Route::Search => match self.focus {
        Focus::Input => self.handle_input_key(key_code, modifiers),
        Focus::Result => self.handle_result_key(key_code),
      },
      Route::Repositories { .. } => self.handle_repos_key(key_code),
    }
  }

  fn handle_home_key(&mut self, key_code: KeyCode) -> Action {
    match key_code {
      KeyCode::Enter | KeyCode::Char('/') | KeyCode::Char('s') => self.navigate(Route::Search),
      KeyCode::Char('q') => Action::Quit,
      _ => Action::None,
    }
  }

  fn handle_input_key(&mut self, key_code: KeyCode, modifiers: KeyModifiers) -> Action {
    match key_code {
      KeyCode::Enter => self.submit(),
      KeyCode::Esc => self.navigate(Route::Home),
      KeyCode::Backspace => {
        self.input.pop();
        Action::None
      }
      KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
        self.input.push(c);
        Action::None
      }
      _ => Action::None,
    }
  }

  fn handle_result_key(&mut self, key_code: KeyCode) -> Action {
    match key_code {
      KeyCode::Char('r') | KeyCode::Enter => match self.lookup.view_repositories() {
        Some(route) => self.navigate(route),
        None => Action::None,
      },
      KeyCode::Char('/') | KeyCode::Char('e') | KeyCode::Char('i') => {
        self.focus = Focus::Input;
        Action::None
      }
      KeyCode::Char('q') => Action::Quit,
      KeyCode::Esc => self.navigate(Route::Home),
      _ => Action::None,
    }
  }

  fn handle_repos_key(&mut self, key_code: KeyCode) -> Action {
    match key_code {
      KeyCode::Down | KeyCode::Char('j') => {
        self.next();
        Action::None
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.previous();
        Action::None
      }
      KeyCode::Enter => self
        .selected_repository()
        .cloned()
        .map_or(Action::None, Action::Open),
      KeyCode::Esc => self.navigate(Route::Search),
      KeyCode::Char('q') => Action::Quit,
      _ => Action::None,
    }
  }

  fn submit(&mut self) -> Action {
    self.status = None;
    match self.lookup.submit(&self.input) {
      Some(request) => Action::FetchProfile(request),
      None => Action::None,
    }
  }

  fn repository_count(&self) -> usize {
    self.repos.as_ref().map_or(0, |list| list.repositories().len())
  }

  /// Move to the next repository, wrapping around
  fn next(&mut self) {
    let count = self.repository_count();
    if count > 0 {
      self.selected = (self.selected + 1) % count;
    }
  }

  /// Move to the previous repository, wrapping around
  fn previous(&mut self) {
    let count = self.repository_count();
    if count > 0 {
      self.selected = if self.selected == 0 { count - 1 } else { self.selected - 1 };
    }
  }

  /// Currently highlighted repository, if the listing has loaded
  pub fn selected_repository(&self) -> Option<&RepositorySummary> {
    self.repos.as_ref()?.repositories().get(self.selected)
  }

  /// Apply a request outcome to the screen that issued it
  pub fn apply(&mut self, completion: Completion) {
    match completion {
      Completion::Profile { ticket, result } => {
        if self.lookup.complete(ticket, result) && self.lookup.profile().is_some() {
          self.focus = Focus::Result;
        }
      }
      Completion::Repos {
        username,
        ticket,
        result,
      } => match self.repos.as_mut() {
        Some(list) if list.username() == username => {
          if list.complete(ticket, result) {
            self.selected = 0;
          }
        }
        _ => debug!("Discarding repositories of {username} for a closed screen"),
      },
    }
  }

  /// Open `repo` in the browser, reporting the outcome in the status line
  pub fn open_repository(&mut self, repo: &RepositorySummary) {
    let Some(list) = &self.repos else {
      return;
    };

    match list.open_repository(repo) {
      Ok(()) => self.set_status(format!("Opened {} in browser", repo.name)),
      Err(e) => {
        warn!("{e:#}");
        self.set_status(format!("{e:#}"));
      }
    }
  }
}
