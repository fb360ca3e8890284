use std::time::Duration;

use tracing::{debug, info};

use crate::console::domain::models::{
    BrokerOverviewSnapshot, MessageDetails, OverviewFilter, QueueListing, SnapshotPayload,
    SnapshotTarget,
};
use crate::console::domain::protocol::{ActionBody, ActionResult, ClientError};

/// Seam between the state machine and the network. The interactive loop
/// talks to this from its worker thread; tests substitute a scripted stub.
pub trait BrokerClient: Send {
    fn execute_action(&self, body: &ActionBody) -> Result<ActionResult, ClientError>;
    fn fetch_snapshot(&self, target: &SnapshotTarget) -> Result<SnapshotPayload, ClientError>;
}

/// Blocking HTTP client against the monitor endpoint. Actions go as PUT or
/// DELETE with a JSON body to the base path; snapshots are GETs with the
/// same query parameters the HTML pages use.
pub struct HttpBrokerClient {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpBrokerClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .build();
        Self { base_url, agent }
    }

    pub(crate) fn snapshot_url(&self, target: &SnapshotTarget) -> String {
        match target {
            SnapshotTarget::Overview(OverviewFilter::All) => {
                format!("{}?overview&show=all", self.base_url)
            }
            SnapshotTarget::Overview(OverviewFilter::Bad) => {
                format!("{}?overview&show=bad", self.base_url)
            }
            SnapshotTarget::Queue(queue_id) => {
                format!("{}?browse&destinationId=queue:{}", self.base_url, queue_id)
            }
            SnapshotTarget::Message {
                queue_id,
                msg_sys_msg_id,
            } => format!(
                "{}?examineMessage&destinationId=queue:{}&messageSystemId={}",
                self.base_url, queue_id, msg_sys_msg_id
            ),
        }
    }

    fn read_body(response: ureq::Response) -> Result<String, ClientError> {
        response
            .into_string()
            .map_err(|e| ClientError::Transport(e.to_string()))
    }

    fn map_error(error: ureq::Error) -> ClientError {
        match error {
            ureq::Error::Status(status, response) => ClientError::HttpStatus {
                status,
                status_text: response.status_text().to_string(),
            },
            ureq::Error::Transport(transport) => ClientError::Transport(transport.to_string()),
        }
    }
}

impl BrokerClient for HttpBrokerClient {
    fn execute_action(&self, body: &ActionBody) -> Result<ActionResult, ClientError> {
        let json = serde_json::to_string(body)
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        info!(method = body.method(), body = %json, "executing action");

        let response = self
            .agent
            .request(body.method(), &self.base_url)
            .set("Content-Type", "application/json")
            .send_string(&json)
            .map_err(Self::map_error)?;

        let text = Self::read_body(response)?;
        let result: ActionResult =
            serde_json::from_str(&text).map_err(|e| ClientError::Parse(e.to_string()))?;
        debug!(?result, "action result");
        Ok(result)
    }

    fn fetch_snapshot(&self, target: &SnapshotTarget) -> Result<SnapshotPayload, ClientError> {
        let url = self.snapshot_url(target);
        debug!(%url, "fetching snapshot");

        let response = self.agent.get(&url).call().map_err(Self::map_error)?;
        let text = Self::read_body(response)?;

        let payload = match target {
            SnapshotTarget::Overview(_) => {
                let snapshot: BrokerOverviewSnapshot =
                    serde_json::from_str(&text).map_err(|e| ClientError::Parse(e.to_string()))?;
                SnapshotPayload::Overview(snapshot)
            }
            SnapshotTarget::Queue(_) => {
                let listing: QueueListing =
                    serde_json::from_str(&text).map_err(|e| ClientError::Parse(e.to_string()))?;
                SnapshotPayload::Queue(listing)
            }
            SnapshotTarget::Message { .. } => {
                let details: MessageDetails =
                    serde_json::from_str(&text).map_err(|e| ClientError::Parse(e.to_string()))?;
                SnapshotPayload::Message(details)
            }
        };
        Ok(payload)
    }
}
