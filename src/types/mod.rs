// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource types managed by this crate.

pub mod ingress_route;

pub use ingress_route::{IngressRoute, IngressRouteSpec, Route, Service};
