use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use image::DynamicImage;
use tower::Service;

use crate::error::TriageError;
use crate::triage::engine::TriageEngine;
use crate::triage::types::TriageReport;

/// One report as submitted by the front end.
#[derive(Debug, Clone, Default)]
pub struct TriageRequest {
    pub text: String,
    pub image: Option<DynamicImage>,
}

impl TriageRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: DynamicImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.image.is_none()
    }
}

/// Async front for [`TriageEngine`]. Analysis runs on the blocking pool.
#[derive(Clone)]
pub struct TriageService {
    engine: Arc<TriageEngine>,
}

impl TriageService {
    pub fn new(engine: Arc<TriageEngine>) -> Self {
        Self { engine }
    }
}

impl Service<TriageRequest> for TriageService {
    type Response = TriageReport;
    type Error = TriageError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), TriageError>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: TriageRequest) -> Self::Future {
        let engine = self.engine.clone();

        Box::pin(async move {
            if request.is_empty() {
                tracing::warn!("Rejected report with neither message nor image");
                return Err(TriageError::EmptyReport);
            }

            tokio::task::spawn_blocking(move || {
                engine.predict(&request.text, request.image.as_ref())
            })
            .await?
        })
    }
}
