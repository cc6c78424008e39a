// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes REST client construction for the Traefik custom resource API.

pub mod client;

pub use client::{
    config_from_url, ingress_routes_path, CustomResourceClient, IngressRouteInterface,
    IngressRoutesGetter, NamespacedIngressRoutes,
};
