use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;

use crate::ConsoleOptions;

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;

#[cfg(test)]
mod integration_tests;

use self::application::broker_client::{BrokerClient, HttpBrokerClient};
use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS};
use self::domain::models::{
    ClientPayload, ClientRequest, ClientResponse, ClientWork, OverviewFilter, SnapshotTarget,
};
use self::ui::{
    app_state::AppState, commands::Command, events::Message, renderer::Renderer, router,
};

/// The interactive console: owns the terminal, the state machine, and the
/// worker thread that performs all network I/O. Single-threaded state; at
/// most one request in flight at any time.
pub struct InteractiveConsole {
    state: AppState,
    renderer: Renderer,
    options: ConsoleOptions,
    timeout_secs: u64,
    request_tx: Option<Sender<ClientRequest>>,
    response_rx: Option<Receiver<ClientResponse>>,
    request_seq: u64,
    reload_timer: Option<Instant>,
    reload_delay_ms: u64,
    last_ctrl_c_press: Option<Instant>,
}

impl InteractiveConsole {
    pub fn new(options: ConsoleOptions, timeout_secs: u64) -> Self {
        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            options,
            timeout_secs,
            request_tx: None,
            response_rx: None,
            request_seq: 0,
            reload_timer: None,
            reload_delay_ms: 0,
            last_ctrl_c_press: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let client = HttpBrokerClient::new(self.options.url.clone(), self.timeout_secs);
        self.run_with_client(Box::new(client))
    }

    /// Entry point with a caller-supplied client, so the whole loop can be
    /// driven against a stub.
    pub fn run_with_client(&mut self, client: Box<dyn BrokerClient>) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        let (tx, rx) = start_worker(client);
        self.request_tx = Some(tx);
        self.response_rx = Some(rx);

        // Initial snapshot: either straight into a queue or the overview.
        let initial = match &self.options.queue_id {
            Some(queue_id) => SnapshotTarget::Queue(queue_id.clone()),
            None => SnapshotTarget::Overview(OverviewFilter::All),
        };
        self.state.loading = true;
        self.execute_command(Command::LoadSnapshot(initial));

        let result = self.run_loop(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            // Worker responses
            if let Some(rx) = &self.response_rx {
                if let Ok(response) = rx.try_recv() {
                    let msg = match response.payload {
                        Ok(ClientPayload::Action(result)) => {
                            Message::ActionCompleted(response.id, Ok(result))
                        }
                        Ok(ClientPayload::Snapshot(payload)) => {
                            Message::SnapshotLoaded(response.id, Ok(payload))
                        }
                        Err(e) => {
                            if self.state.in_flight {
                                Message::ActionCompleted(response.id, Err(e))
                            } else {
                                Message::SnapshotLoaded(response.id, Err(e))
                            }
                        }
                    };
                    self.handle_message(msg);
                }
            }

            // Scheduled reconciling reload
            if let Some(timer) = self.reload_timer {
                if timer.elapsed() >= Duration::from_millis(self.reload_delay_ms) {
                    self.reload_timer = None;
                    self.handle_message(Message::ReloadNow);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_input(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns true when the console should exit.
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        // Double Ctrl+C to exit, so a stray one doesn't kill the session.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.status.text = Some("Press Ctrl+C again to exit".to_string());
            return false;
        }

        if let Some(msg) = router::route(&self.state, key) {
            self.handle_message(msg);
        }
        false
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::SubmitAction(intent) => {
                self.request_seq += 1;
                self.state.current_request_id = self.request_seq;
                info!(id = self.request_seq, ?intent, "submitting action");
                if let Some(tx) = &self.request_tx {
                    let _ = tx.send(ClientRequest {
                        id: self.request_seq,
                        work: ClientWork::Action(intent.to_body()),
                    });
                }
            }
            Command::LoadSnapshot(target) => {
                self.request_seq += 1;
                self.state.current_request_id = self.request_seq;
                if let Some(tx) = &self.request_tx {
                    let _ = tx.send(ClientRequest {
                        id: self.request_seq,
                        work: ClientWork::Snapshot(target),
                    });
                }
            }
            Command::ScheduleReload(delay_ms) => {
                self.reload_timer = Some(Instant::now());
                self.reload_delay_ms = delay_ms;
            }
        }
    }
}

/// The network worker: one thread, one request at a time, results flowing
/// back over the response channel tagged with the request id.
fn start_worker(
    client: Box<dyn BrokerClient>,
) -> (Sender<ClientRequest>, Receiver<ClientResponse>) {
    let (request_tx, request_rx) = mpsc::channel::<ClientRequest>();
    let (response_tx, response_rx) = mpsc::channel::<ClientResponse>();

    thread::spawn(move || {
        while let Ok(request) = request_rx.recv() {
            let payload = match &request.work {
                ClientWork::Action(body) => {
                    client.execute_action(body).map(ClientPayload::Action)
                }
                ClientWork::Snapshot(target) => {
                    client.fetch_snapshot(target).map(ClientPayload::Snapshot)
                }
            };
            if response_tx
                .send(ClientResponse {
                    id: request.id,
                    payload,
                })
                .is_err()
            {
                break;
            }
        }
    });

    (request_tx, response_rx)
}
