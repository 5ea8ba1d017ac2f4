use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use serie_core::{FetchRequest, FrameSource, RawFrame, SerieError};

/// Instruction for how a fetch should behave for a given ticker.
#[derive(Clone)]
pub enum MockBehavior {
    /// Return the provided frame immediately.
    Return(RawFrame),
    /// Fail immediately with the provided error.
    Fail(SerieError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<String, MockBehavior>,
    requests: Vec<FetchRequest>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for fetches of a specific ticker.
    pub async fn set_behavior(&self, ticker: impl Into<String>, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(ticker.into(), behavior);
    }

    /// Every request the source has received, in arrival order.
    pub async fn requests(&self) -> Vec<FetchRequest> {
        self.state.lock().await.requests.clone()
    }

    /// Clear all configured behaviors and the request log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.requests.clear();
    }
}

/// A frame source that defers all behavior to an external controller.
///
/// Tickers without a configured behavior yield an empty frame.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn FrameSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn FrameSource>, controller)
    }
}

#[async_trait]
impl FrameSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, req: &FetchRequest) -> Result<RawFrame, SerieError> {
        // Snapshot the rule without holding the lock across the hang below
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(req.clone());
            guard.rules.get(req.ticker()).cloned()
        };
        match behavior {
            Some(MockBehavior::Return(frame)) => Ok(frame),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Ok(RawFrame::empty()),
        }
    }
}
