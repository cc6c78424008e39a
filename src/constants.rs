// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fixed identity of the Traefik IngressRoute custom resource.
//!
//! These must stay in sync with the `#[kube(...)]` attributes on
//! [`crate::types::ingress_route::IngressRouteSpec`].

/// API group served by the Traefik CRDs
pub const GROUP: &str = "traefik.containo.us";
/// CRD version
pub const VERSION: &str = "v1alpha1";
/// `apiVersion` written on every IngressRoute
pub const API_VERSION: &str = "traefik.containo.us/v1alpha1";
/// `kind` written on every IngressRoute
pub const KIND: &str = "IngressRoute";
/// Plural resource name used in request paths
pub const PLURAL: &str = "ingressroutes";
/// Path prefix for non-core API groups
pub const API_PATH: &str = "/apis";

/// Default route kind understood by Traefik
pub const ROUTE_KIND_RULE: &str = "Rule";
