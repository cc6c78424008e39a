// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! High-level IngressRoute client.

pub mod client;

pub use client::{build_ingress_route, Client, Options};
