//! Shared fakes for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::nav::navigator::Navigator;
use crate::net::error::HttpError;
use crate::net::http::{RequestContext, Response, Transport};

/// Transport that replays queued results and records every request it saw.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Result<Response, HttpError>>>,
    sent: Mutex<Vec<RequestContext>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, status: u16, body: serde_json::Value) {
        self.replies.lock().unwrap().push_back(Ok(Response::new(status, body)));
    }

    pub fn fail(&self, error: HttpError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub fn sent(&self) -> Vec<RequestContext> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: &RequestContext) -> Result<Response, HttpError> {
        self.sent.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Transport("no mock reply queued".to_owned())))
    }
}

/// Navigator with a fixed current path that records pushes.
pub struct RecordingNavigator {
    current: Mutex<String>,
    pushed: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Arc<Self> {
        Arc::new(Self { current: Mutex::new(path.to_owned()), pushed: Mutex::new(Vec::new()) })
    }

    pub fn pushed(&self) -> Vec<String> {
        self.pushed.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.current.lock().unwrap().clone()
    }

    fn push(&self, path: &str) {
        self.pushed.lock().unwrap().push(path.to_owned());
        *self.current.lock().unwrap() = path.to_owned();
    }
}
