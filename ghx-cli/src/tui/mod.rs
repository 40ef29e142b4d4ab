//! # Interactive Shell
//!
//! A ratatui front end over the same screen state the one-shot commands use.
//! Key events and request outcomes are both handled on the UI thread;
//! requests run on a Tokio runtime and report back over a channel.

pub mod app;
mod terminal;
pub mod ui;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ghx_core::{LookupRequest, ReposRequest, Settings};
use ghx_gh::GitHubClient;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::info;

use self::app::{Action, App, Completion};
use self::terminal::Tui;

/// How long to wait for a key before checking for finished requests
const TICK: Duration = Duration::from_millis(100);

/// Run the interactive shell until the user quits
pub fn run(settings: &Settings, username: Option<String>) -> Result<()> {
  let (tx, mut rx) = unbounded_channel();
  let dispatcher = Dispatcher {
    rt: Runtime::new()?,
    client: settings.client(),
    tx,
  };

  let mut app = App::new(settings.date_style);
  if let Some(username) = username {
    let action = app.search_for(&username);
    dispatcher.dispatch(&mut app, action);
  }

  info!("Starting interactive shell against {}", dispatcher.client.base_url());
  let mut terminal = terminal::init()?;
  let result = run_app(&mut terminal, &mut app, &dispatcher, &mut rx);
  terminal::restore(&mut terminal)?;

  result
}

/// Main application loop
fn run_app(
  terminal: &mut Tui,
  app: &mut App,
  dispatcher: &Dispatcher,
  rx: &mut UnboundedReceiver<Completion>,
) -> Result<()> {
  loop {
    terminal.draw(|f| ui::draw(f, app))?;

    if event::poll(TICK)? {
      if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
          let action = app.handle_key(key.code, key.modifiers);
          if !dispatcher.dispatch(app, action) {
            return Ok(());
          }
        }
      }
    }

    while let Ok(completion) = rx.try_recv() {
      app.apply(completion);
    }
  }
}

/// Carries out [`Action`]s on behalf of the UI thread
struct Dispatcher {
  rt: Runtime,
  client: GitHubClient,
  tx: UnboundedSender<Completion>,
}

impl Dispatcher {
  /// Returns false when the shell should exit
  fn dispatch(&self, app: &mut App, action: Action) -> bool {
    match action {
      Action::None => {}
      Action::Quit => return false,
      Action::FetchProfile(request) => self.fetch_profile(request),
      Action::FetchRepos(request) => self.fetch_repos(request),
      Action::Open(repo) => app.open_repository(&repo),
    }
    true
  }

  fn fetch_profile(&self, request: LookupRequest) {
    let client = self.client.clone();
    let tx = self.tx.clone();

    self.rt.spawn(async move {
      let result = client.get_user(&request.username).await;
      // The receiver is gone only once the shell has exited
      let _ = tx.send(Completion::Profile {
        ticket: request.ticket,
        result,
      });
    });
  }

  fn fetch_repos(&self, request: ReposRequest) {
    let client = self.client.clone();
    let tx = self.tx.clone();

    self.rt.spawn(async move {
      let result = client.list_user_repos(&request.username).await;
      let _ = tx.send(Completion::Repos {
        username: request.username,
        ticket: request.ticket,
        result,
      });
    });
  }
}
