//! Client-side state holder and request orchestrator.
//!
//! # Design
//! `TodoController` owns the mirrored list and the pending draft. Every
//! mutation goes through one of four operations, each issuing at most one
//! request through the injected `Transport`. Failures never propagate: they
//! become one fixed message for the `Notifier`, and only the completion
//! toggle has local state to roll back.
//!
//! The toggle is optimistic: the flip is applied before the request goes
//! out and undone if the server does not accept it. Create and delete are
//! not; the list changes only after the server confirms.

use std::fmt;

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{CreateTodo, Todo, UpdateTodo};

pub const DELETE_PROMPT: &str = "Delete this todo?";

/// Blocking yes/no question to the user.
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Fire-and-forget message to the user.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// The user-facing failure for each operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Failure {
    pub fn message(self) -> &'static str {
        match self {
            Failure::Fetch => "Failed to fetch todos",
            Failure::Create => "Failed to create todo",
            Failure::Update => "Failed to update todo",
            Failure::Delete => "Failed to delete todo",
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What the client shows: todos newest first, plus the unsent draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub draft_title: String,
}

impl TodoState {
    pub fn find(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: i64) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == id)
    }
}

pub struct TodoController<T, C, N> {
    client: TodoClient,
    transport: T,
    confirmer: C,
    notifier: N,
    state: TodoState,
}

impl<T, C, N> TodoController<T, C, N>
where
    T: Transport,
    C: Confirmer,
    N: Notifier,
{
    pub fn new(client: TodoClient, transport: T, confirmer: C, notifier: N) -> Self {
        Self {
            client,
            transport,
            confirmer,
            notifier,
            state: TodoState::default(),
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn confirmer(&self) -> &C {
        &self.confirmer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn set_draft(&mut self, title: impl Into<String>) {
        self.state.draft_title = title.into();
    }

    /// Replace the list with the server's. On failure the list is kept.
    pub fn load(&mut self) {
        let request = self.client.build_list_todos();
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_list_todos(response));

        match result {
            Ok(todos) => {
                debug!(count = todos.len(), "loaded todos");
                self.state.todos = todos;
            }
            Err(err) => self.fail(Failure::Fetch, &err),
        }
    }

    /// Send the trimmed draft. A blank draft sends nothing. The draft is
    /// cleared only once the server has created the todo.
    pub fn add(&mut self) {
        let title = self.state.draft_title.trim();
        if title.is_empty() {
            return;
        }
        let input = CreateTodo::titled(title);

        let result = self
            .client
            .build_create_todo(&input)
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_create_todo(response));

        match result {
            Ok(todo) => {
                debug!(id = todo.id, "created todo");
                self.state.todos.insert(0, todo);
                self.state.draft_title.clear();
            }
            Err(err) => self.fail(Failure::Create, &err),
        }
    }

    /// Flip `is_completed` locally, then tell the server. Reverted if the
    /// server does not accept it. Unknown ids are ignored.
    pub fn toggle_completion(&mut self, id: i64) {
        let Some(todo) = self.state.find_mut(id) else {
            return;
        };
        let previous = todo.is_completed;
        todo.is_completed = !previous;

        let result = self
            .client
            .build_update_todo(id, &UpdateTodo::completion(!previous))
            .and_then(|request| self.transport.execute(request))
            .and_then(|response| self.client.parse_update_ack(response));

        match result {
            Ok(()) => debug!(id, is_completed = !previous, "updated todo"),
            Err(err) => {
                if let Some(todo) = self.state.find_mut(id) {
                    todo.is_completed = previous;
                }
                self.fail(Failure::Update, &err);
            }
        }
    }

    /// Ask first; delete only if confirmed, and drop the row only once the
    /// server has deleted it. Unknown ids are ignored.
    pub fn remove(&mut self, id: i64) {
        if self.state.find(id).is_none() {
            return;
        }
        if !self.confirmer.confirm(DELETE_PROMPT) {
            return;
        }

        let request = self.client.build_delete_todo(id);
        let result = self
            .transport
            .execute(request)
            .and_then(|response| self.client.parse_delete_todo(response));

        match result {
            Ok(()) => {
                debug!(id, "deleted todo");
                self.state.todos.retain(|t| t.id != id);
            }
            Err(err) => self.fail(Failure::Delete, &err),
        }
    }

    fn fail(&mut self, failure: Failure, err: &ApiError) {
        warn!(error = %err, "{failure}");
        self.notifier.notify(failure.message());
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Replies with queued responses and records every request.
    #[derive(Default)]
    struct ScriptedTransport {
        replies: VecDeque<Result<HttpResponse, ApiError>>,
        requests: Vec<HttpRequest>,
    }

    impl ScriptedTransport {
        fn reply(mut self, status: u16, body: &str) -> Self {
            self.replies.push_back(Ok(HttpResponse::new(status, body)));
            self
        }

        fn refuse(mut self) -> Self {
            self.replies
                .push_back(Err(ApiError::Transport("connection refused".to_string())));
            self
        }

        fn sent(&self, method: HttpMethod) -> usize {
            self.requests.iter().filter(|r| r.method == method).count()
        }
    }

    impl Transport for ScriptedTransport {
        fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.push(request);
            self.replies
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_string())))
        }
    }

    struct Answer {
        yes: bool,
        prompts: Vec<String>,
    }

    impl Answer {
        fn yes() -> Self {
            Self { yes: true, prompts: Vec::new() }
        }

        fn no() -> Self {
            Self { yes: false, prompts: Vec::new() }
        }
    }

    impl Confirmer for Answer {
        fn confirm(&mut self, prompt: &str) -> bool {
            self.prompts.push(prompt.to_string());
            self.yes
        }
    }

    #[derive(Default)]
    struct Alerts(Vec<String>);

    impl Notifier for Alerts {
        fn notify(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    type Controller = TodoController<ScriptedTransport, Answer, Alerts>;

    fn todo_json(id: i64, title: &str, is_completed: bool) -> String {
        serde_json::json!({
            "id": id,
            "title": title,
            "is_completed": is_completed,
            "created_at": "2026-01-02T03:04:05Z",
            "updated_at": "2026-01-02T03:04:05Z",
        })
        .to_string()
    }

    fn controller(transport: ScriptedTransport, answer: Answer) -> Controller {
        TodoController::new(
            TodoClient::new("http://localhost:3000/api/v1"),
            transport,
            answer,
            Alerts::default(),
        )
    }

    /// A controller already showing one open todo with id 1.
    fn loaded(transport: ScriptedTransport, answer: Answer) -> Controller {
        let mut transport = transport;
        transport
            .replies
            .push_front(Ok(HttpResponse::new(200, format!("[{}]", todo_json(1, "Test todo", false)))));
        let mut c = controller(transport, answer);
        c.load();
        assert_eq!(c.state().todos.len(), 1);
        c
    }

    // --- load ---

    #[test]
    fn load_replaces_the_list() {
        let body = format!("[{},{}]", todo_json(2, "b", false), todo_json(1, "a", true));
        let mut c = controller(ScriptedTransport::default().reply(200, &body), Answer::no());
        c.load();

        let ids: Vec<i64> = c.state().todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, [2, 1]);
        assert_eq!(
            c.state().todos[0].created_at,
            "2026-01-02T03:04:05Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert!(c.notifier().0.is_empty());
    }

    #[test]
    fn load_failure_notifies_and_keeps_list() {
        let mut c = controller(ScriptedTransport::default().reply(500, ""), Answer::no());
        c.load();

        assert!(c.state().todos.is_empty());
        assert_eq!(c.notifier().0, ["Failed to fetch todos"]);
    }

    #[test]
    fn load_network_failure_notifies() {
        let mut c = controller(ScriptedTransport::default().refuse(), Answer::no());
        c.load();
        assert_eq!(c.notifier().0, ["Failed to fetch todos"]);
    }

    // --- add ---

    #[test]
    fn blank_drafts_send_nothing() {
        for draft in ["", "   "] {
            let mut c = controller(ScriptedTransport::default(), Answer::no());
            c.set_draft(draft);
            c.add();

            assert!(c.transport().requests.is_empty(), "{draft:?}");
            assert_eq!(c.state().draft_title, draft);
        }
    }

    #[test]
    fn add_prepends_and_clears_draft() {
        let transport = ScriptedTransport::default().reply(201, &todo_json(2, "New todo", false));
        let mut c = loaded(transport, Answer::no());
        c.set_draft("  New todo  ");
        c.add();

        assert_eq!(c.transport().sent(HttpMethod::Post), 1);
        let sent: serde_json::Value =
            serde_json::from_str(c.transport().requests[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["todo"]["title"], "New todo");

        assert_eq!(c.state().todos[0].id, 2);
        assert_eq!(c.state().todos[0].title, "New todo");
        assert_eq!(c.state().todos.len(), 2);
        assert_eq!(c.state().draft_title, "");
    }

    #[test]
    fn add_failure_keeps_draft_and_list() {
        let mut c = controller(ScriptedTransport::default().reply(500, ""), Answer::no());
        c.set_draft("New todo");
        c.add();

        assert!(c.state().todos.is_empty());
        assert_eq!(c.state().draft_title, "New todo");
        assert_eq!(c.notifier().0, ["Failed to create todo"]);
    }

    #[test]
    fn add_validation_failure_notifies() {
        let transport =
            ScriptedTransport::default().reply(422, r#"{"errors":["Title can't be blank"]}"#);
        let mut c = controller(transport, Answer::no());
        c.set_draft("x");
        c.add();
        assert_eq!(c.notifier().0, ["Failed to create todo"]);
    }

    // --- toggle ---

    #[test]
    fn toggle_applies_and_sends_new_flag() {
        let mut c = loaded(ScriptedTransport::default().reply(200, "{}"), Answer::no());
        c.toggle_completion(1);

        assert!(c.state().todos[0].is_completed);
        let request = &c.transport().requests[1];
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path, "http://localhost:3000/api/v1/todos/1");
        let sent: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, serde_json::json!({ "todo": { "is_completed": true } }));
        assert!(c.notifier().0.is_empty());
    }

    #[test]
    fn toggle_back_to_open() {
        let transport = ScriptedTransport::default().reply(200, "{}").reply(200, "{}");
        let mut c = loaded(transport, Answer::no());
        c.toggle_completion(1);
        c.toggle_completion(1);

        assert!(!c.state().todos[0].is_completed);
        assert_eq!(c.transport().sent(HttpMethod::Put), 2);
    }

    #[test]
    fn toggle_failure_rolls_back_and_notifies_once() {
        let mut c = loaded(ScriptedTransport::default().reply(500, ""), Answer::no());
        c.toggle_completion(1);

        assert!(!c.state().todos[0].is_completed);
        assert_eq!(c.notifier().0, ["Failed to update todo"]);
    }

    #[test]
    fn toggle_network_failure_rolls_back() {
        let mut c = loaded(ScriptedTransport::default().refuse(), Answer::no());
        c.toggle_completion(1);

        assert!(!c.state().todos[0].is_completed);
        assert_eq!(c.notifier().0, ["Failed to update todo"]);
    }

    #[test]
    fn toggle_unknown_id_does_nothing() {
        let mut c = loaded(ScriptedTransport::default(), Answer::no());
        c.toggle_completion(99);
        assert_eq!(c.transport().requests.len(), 1);
    }

    // --- remove ---

    #[test]
    fn remove_asks_for_confirmation() {
        let mut c = loaded(ScriptedTransport::default(), Answer::no());
        c.remove(1);
        assert_eq!(c.confirmer().prompts, ["Delete this todo?"]);
    }

    #[test]
    fn declined_remove_sends_nothing() {
        let mut c = loaded(ScriptedTransport::default(), Answer::no());
        c.remove(1);

        assert_eq!(c.transport().sent(HttpMethod::Delete), 0);
        assert_eq!(c.state().todos.len(), 1);
    }

    #[test]
    fn confirmed_remove_deletes_after_success() {
        let mut c = loaded(ScriptedTransport::default().reply(204, ""), Answer::yes());
        c.remove(1);

        assert_eq!(c.transport().sent(HttpMethod::Delete), 1);
        assert!(c.state().todos.is_empty());
        assert!(c.notifier().0.is_empty());
    }

    #[test]
    fn remove_failure_keeps_row_and_notifies() {
        let mut c = loaded(ScriptedTransport::default().reply(500, ""), Answer::yes());
        c.remove(1);

        assert_eq!(c.state().todos.len(), 1);
        assert_eq!(c.notifier().0, ["Failed to delete todo"]);
    }

    #[test]
    fn remove_unknown_id_does_not_prompt() {
        let mut c = loaded(ScriptedTransport::default(), Answer::yes());
        c.remove(99);
        assert!(c.confirmer().prompts.is_empty());
        assert_eq!(c.transport().requests.len(), 1);
    }
}
