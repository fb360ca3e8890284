pub mod console;

/// Options handed from the CLI into the interactive console.
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    /// Base URL of the broker monitor endpoint. The GUI pages are served on
    /// GET; actions use PUT and DELETE against the same path with
    /// "Content-Type: application/json".
    pub url: String,
    /// Open this queue's browse view directly instead of the overview.
    pub queue_id: Option<String>,
    pub verbose: bool,
}

pub use console::InteractiveConsole;
pub use console::domain::models::{ActionKind, ActionScope, View};
pub use console::domain::protocol::{ActionBody, ActionResult, ClientError};
