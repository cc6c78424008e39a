// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cancellation and deadline handling for API calls.

use crate::error::{IngressRouteError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Bounds a single API call. Cloned contexts share the same cancellation state.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    cancel_token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancel_token: CancellationToken::new(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// A context driven by an externally owned token
    pub fn from_token(cancel_token: CancellationToken) -> Self {
        Self {
            cancel_token,
            deadline: None,
        }
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Fails if the context is already cancelled or past its deadline
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(IngressRouteError::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(IngressRouteError::DeadlineExceeded);
        }
        Ok(())
    }

    /// Run `fut` within this context.
    ///
    /// The future is never polled when the context is already done. Otherwise
    /// it is dropped as soon as the context is cancelled or the deadline passes.
    pub async fn run<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.check()?;

        let deadline = async {
            match self.deadline {
                Some(d) => sleep_until(d).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel_token.cancelled() => {
                debug!("Request cancelled before completion");
                Err(IngressRouteError::Cancelled)
            }
            _ = deadline => {
                debug!("Request deadline exceeded");
                Err(IngressRouteError::DeadlineExceeded)
            }
            res = fut => res,
        }
    }
}
