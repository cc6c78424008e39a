// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngressRouteError {
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build REST client: {0}")]
    ClientBuild(#[source] kube::Error),

    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Request deadline exceeded")]
    DeadlineExceeded,
}

impl IngressRouteError {
    /// True when the API server rejected the request because the object already exists
    pub fn is_conflict(&self) -> bool {
        matches!(self, IngressRouteError::KubeError(kube::Error::Api(err)) if err.code == 409)
    }
}

pub type Result<T> = std::result::Result<T, IngressRouteError>;
