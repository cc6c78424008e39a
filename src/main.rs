// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::ResourceExt;
use tracing::{info, warn};

use ingressroute::config::Config;
use ingressroute::context::RequestContext;
use ingressroute::ingress_route::{Client, Options};
use ingressroute::kubernetes::CustomResourceClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: ingressroute={}/{}, upsert={}",
        config.namespace, config.name, config.upsert
    );

    let raw = tokio::fs::read_to_string(&config.options_file)
        .await
        .with_context(|| format!("Failed to read {}", config.options_file.display()))?;
    let options = Options::from_yaml(&raw)?;

    let kube_config = kube::Config::infer()
        .await
        .context("Failed to infer Kubernetes configuration")?;
    let client = Client::new(CustomResourceClient::new_for_config(&kube_config)?);

    let ctx = match config.timeout {
        Some(timeout) => RequestContext::with_timeout(timeout),
        None => RequestContext::new(),
    };

    let interrupt = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling request");
            interrupt.cancel();
        }
    });

    let route = if config.upsert {
        client
            .upsert(&ctx, &config.name, &config.namespace, &options)
            .await?
    } else {
        client
            .set(&ctx, &config.name, &config.namespace, &options)
            .await?
    };

    info!(
        "IngressRoute {}/{} stored at resourceVersion {}",
        route.namespace().unwrap_or_default(),
        route.name_any(),
        route.resource_version().unwrap_or_default()
    );
    Ok(())
}
