// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed create/upsert operations for IngressRoute objects

use crate::context::RequestContext;
use crate::error::{IngressRouteError, Result};
use crate::kubernetes::IngressRoutesGetter;
use crate::types::ingress_route::{IngressRoute, IngressRouteSpec};
use anyhow::Context as _;
use kube::api::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Caller-supplied content for a new IngressRoute
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub spec: IngressRouteSpec,
}

impl Options {
    /// Parse options from a YAML document
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse IngressRoute options")
    }
}

/// Build the IngressRoute object submitted by [`Client::set`] and [`Client::upsert`]
pub fn build_ingress_route(name: &str, namespace: &str, options: &Options) -> IngressRoute {
    IngressRoute {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            annotations: options.annotations.clone(),
            labels: options.labels.clone(),
            ..Default::default()
        },
        spec: options.spec.clone(),
    }
}

/// IngressRoute client over any [`IngressRoutesGetter`]
#[derive(Clone)]
pub struct Client {
    getter: Arc<dyn IngressRoutesGetter>,
}

impl Client {
    pub fn new(getter: impl IngressRoutesGetter + 'static) -> Self {
        Self {
            getter: Arc::new(getter),
        }
    }

    /// Create an IngressRoute.
    ///
    /// This only creates: an existing object with the same name makes the call
    /// fail with a conflict (see [`IngressRouteError::is_conflict`]). Use
    /// [`Client::upsert`] to update in place instead.
    #[instrument(skip(self, ctx, options))]
    pub async fn set(
        &self,
        ctx: &RequestContext,
        name: &str,
        namespace: &str,
        options: &Options,
    ) -> Result<IngressRoute> {
        let route = build_ingress_route(name, namespace, options);
        let routes = self.getter.ingress_routes(namespace);

        let created = ctx
            .run(async { routes.create(&route).await.map_err(IngressRouteError::from) })
            .await?;

        info!("Created IngressRoute {}/{}", namespace, name);
        Ok(created)
    }

    /// Create an IngressRoute, or replace it if one with the same name exists
    #[instrument(skip(self, ctx, options))]
    pub async fn upsert(
        &self,
        ctx: &RequestContext,
        name: &str,
        namespace: &str,
        options: &Options,
    ) -> Result<IngressRoute> {
        let mut route = build_ingress_route(name, namespace, options);
        let routes = self.getter.ingress_routes(namespace);

        match ctx
            .run(async { routes.create(&route).await.map_err(IngressRouteError::from) })
            .await
        {
            Ok(created) => {
                info!("Created IngressRoute {}/{}", namespace, name);
                return Ok(created);
            }
            Err(e) if e.is_conflict() => {
                debug!("IngressRoute {}/{} already exists, replacing", namespace, name);
            }
            Err(e) => return Err(e),
        }

        let existing = ctx
            .run(async { routes.get(name).await.map_err(IngressRouteError::from) })
            .await?;
        route.metadata.resource_version = existing.metadata.resource_version;

        let replaced = ctx
            .run(async { routes.replace(name, &route).await.map_err(IngressRouteError::from) })
            .await?;

        info!("Replaced IngressRoute {}/{}", namespace, name);
        Ok(replaced)
    }
}
