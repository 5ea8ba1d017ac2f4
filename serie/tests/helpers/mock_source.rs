#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serie::{FetchRequest, FrameSource, RawFrame, SerieError};
use tokio::time::{Duration, sleep};

/// Simple in-memory source used by integration tests.
pub struct MockSource {
    pub name: &'static str,
    pub frame: Option<RawFrame>,
    pub error: Option<SerieError>,
    pub delay_ms: u64,
    pub calls: Arc<AtomicUsize>,
}

impl MockSource {
    pub fn builder() -> MockSourceBuilder {
        MockSourceBuilder::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FrameSource for MockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, _req: &FetchRequest) -> Result<RawFrame, SerieError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if let Some(e) = &self.error {
            return Err(e.clone());
        }
        Ok(self.frame.clone().unwrap_or_else(RawFrame::empty))
    }
}

#[derive(Default)]
pub struct MockSourceBuilder {
    name: Option<&'static str>,
    frame: Option<RawFrame>,
    error: Option<SerieError>,
    delay_ms: u64,
}

impl MockSourceBuilder {
    pub fn name(mut self, n: &'static str) -> Self {
        self.name = Some(n);
        self
    }

    pub fn returns_ok(mut self, frame: RawFrame) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn returns_err(mut self, e: SerieError) -> Self {
        self.error = Some(e);
        self
    }

    pub fn delay(mut self, d: Duration) -> Self {
        self.delay_ms = u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn build(self) -> Arc<MockSource> {
        Arc::new(MockSource {
            name: self.name.unwrap_or("mock"),
            frame: self.frame,
            error: self.error,
            delay_ms: self.delay_ms,
            calls: Arc::new(AtomicUsize::new(0)),
        })
    }
}
