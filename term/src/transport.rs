use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};
use tracing::debug;

/// Executes core requests with a blocking ureq agent.
///
/// The agent is built with status-as-error disabled so 4xx/5xx responses
/// come back as data and the core decides what they mean. Only failures that
/// produce no response become `ApiError::Transport`.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = req.method.as_str(), path = %req.path, "sending request");

        let sent = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };
        let mut response = sent.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        debug!(status, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
