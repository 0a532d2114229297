//! Reflective probing runtime for media player conformance checks.
//!
//! This crate provides a small runtime registry of class descriptors (constructors, methods,
//! declared capabilities) addressed by canonical name, plus the absence-tolerant helpers that
//! probe it. Every lookup answers with `Option` instead of failing, and every construction or
//! invocation failure is contained at the probe boundary and reduced to absence, so a missing
//! or unfinished class under test surfaces as an ordinary red scenario rather than a torn-down
//! run.
//!
//! ## Notes
//!
//! - Registries are plain values: build one per scenario, probe it, drop it. Nothing is global
//!   and nothing is shared between scenarios.
//! - Swallowed failures are reported via `tracing` at debug level; run the suite with
//!   `RUST_LOG=debug` to see why a probe came back empty.

#![deny(clippy::unwrap_used)]

pub mod errors;
pub mod mirror;
pub mod probe;
pub mod testing;
pub mod value;

pub use errors::CallError;
pub use mirror::{ClassSpec, ConstructorSpec, Instance, MethodSpec, Registry, TypeKind};
pub use value::{ParamTy, Value};
