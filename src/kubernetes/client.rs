// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! REST client bound to the Traefik custom resource API group

use crate::constants::{API_PATH, API_VERSION};
use crate::error::{IngressRouteError, Result};
use crate::types::ingress_route::IngressRoute;
use kube::{api::PostParams, Api, Client, Config as KConfig, Resource};
use tracing::{debug, info, instrument};
use url::Url;

/// Namespace-scoped operations on IngressRoute objects
#[async_trait::async_trait]
pub trait IngressRouteInterface: Send + Sync {
    async fn create(&self, route: &IngressRoute) -> kube::Result<IngressRoute>;

    async fn get(&self, name: &str) -> kube::Result<IngressRoute>;

    /// Replace an existing object; `route` must carry the current resourceVersion
    async fn replace(&self, name: &str, route: &IngressRoute) -> kube::Result<IngressRoute>;
}

/// Anything that can hand out an [`IngressRouteInterface`] for a namespace
pub trait IngressRoutesGetter: Send + Sync {
    fn ingress_routes(&self, namespace: &str) -> Box<dyn IngressRouteInterface>;
}

/// Client for the `traefik.containo.us/v1alpha1` API group
#[derive(Clone)]
pub struct CustomResourceClient {
    client: Client,
}

impl CustomResourceClient {
    /// Build a client from a copy of `base`.
    ///
    /// Group, version and the `/apis` prefix come from the [`IngressRoute`]
    /// resource definition, so only the connection settings are taken from
    /// `base`. No request is sent.
    #[instrument(skip(base), fields(cluster_url = %base.cluster_url))]
    pub fn new_for_config(base: &KConfig) -> Result<Self> {
        let config = base.clone();
        let client = Client::try_from(config).map_err(IngressRouteError::ClientBuild)?;

        debug!("Built REST client for {}/{}", API_PATH, API_VERSION);

        Ok(Self { client })
    }

    /// Wrap an already constructed client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl IngressRoutesGetter for CustomResourceClient {
    fn ingress_routes(&self, namespace: &str) -> Box<dyn IngressRouteInterface> {
        Box::new(NamespacedIngressRoutes {
            api: Api::namespaced(self.client.clone(), namespace),
        })
    }
}

/// [`IngressRouteInterface`] backed by the Kubernetes API
pub struct NamespacedIngressRoutes {
    api: Api<IngressRoute>,
}

#[async_trait::async_trait]
impl IngressRouteInterface for NamespacedIngressRoutes {
    async fn create(&self, route: &IngressRoute) -> kube::Result<IngressRoute> {
        self.api.create(&PostParams::default(), route).await
    }

    async fn get(&self, name: &str) -> kube::Result<IngressRoute> {
        self.api.get(name).await
    }

    async fn replace(&self, name: &str, route: &IngressRoute) -> kube::Result<IngressRoute> {
        self.api.replace(name, &PostParams::default(), route).await
    }
}

/// Create a client configuration pointing at the given API server URL
pub fn config_from_url(server: &str) -> Result<KConfig> {
    let url = Url::parse(server).map_err(|e| {
        IngressRouteError::InvalidConfig(format!("Invalid API server URL {}: {}", server, e))
    })?;

    if url.host_str().map_or(true, str::is_empty) {
        return Err(IngressRouteError::InvalidConfig(format!(
            "API server URL {} has no host",
            server
        )));
    }

    let cluster_url: http::Uri = url.as_str().parse().map_err(|e| {
        IngressRouteError::InvalidConfig(format!("Invalid API server URL {}: {}", server, e))
    })?;

    info!("Using API server {}", cluster_url);
    Ok(KConfig::new(cluster_url))
}

/// Collection path for IngressRoutes in a namespace
pub fn ingress_routes_path(namespace: &str) -> String {
    IngressRoute::url_path(&(), Some(namespace))
}
