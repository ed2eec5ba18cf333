use std::time::Duration;

/// OpenAI-compatible paths served under the gateway base URL
pub(crate) const API_ENDPOINTS: &[&str] = &[
    "/v1/chat/completions",
    "/v1/responses",
    "/v1/messages",
    "/v1beta/models",
    "/v1/embeddings",
    "/v1/rerank",
    "/v1/images/generations",
    "/v1/images/edits",
    "/v1/audio/speech",
    "/v1/audio/transcriptions",
];

pub(crate) const ROTATE_INTERVAL: Duration = Duration::from_secs(3);

/// Cycles through a list of endpoint paths, wrapping at the end
#[derive(Debug, Clone)]
pub(crate) struct EndpointCarousel<'a> {
    items: &'a [&'a str],
    index: usize,
}

impl<'a> EndpointCarousel<'a> {
    pub(crate) fn new(items: &'a [&'a str]) -> Self {
        Self { items, index: 0 }
    }

    pub(crate) fn current(&self) -> Option<&'a str> {
        self.items.get(self.index).copied()
    }

    pub(crate) fn advance(&mut self) -> Option<&'a str> {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
        self.current()
    }

    pub(crate) fn select(&mut self, index: usize) -> Option<&'a str> {
        if !self.items.is_empty() {
            self.index = index % self.items.len();
        }
        self.current()
    }
}
