//! Absence-tolerant lookup and invocation helpers.
//!
//! Every helper accepts possibly-absent inputs and threads absence through: `None` in means
//! `None` out, a failed lookup is `None`, and a failed construction or invocation is reduced
//! to `None` at this boundary instead of propagating. The only signal a caller ever has to
//! branch on is absence, which is what lets a scenario turn a missing prerequisite into an
//! explicit, named test failure.
//!
//! Swallowed failures are not silent: each one is reported with `tracing::debug!` so a run
//! under `RUST_LOG=debug` shows exactly which lookup missed or which body failed.

use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::errors::CallError;
use crate::mirror::{ClassSpec, ConstructorSpec, Instance, MethodSpec, Registry};
use crate::value::{ParamTy, Value};

/// Resolve a constructor by exact parameter shape.
///
/// Answers `None` when the class is absent or declares no constructor with that shape.
pub fn constructor_of<'c>(
    class: Option<&'c ClassSpec>,
    params: &[ParamTy],
) -> Option<&'c ConstructorSpec> {
    let class = class?;
    let found = class.find_constructor(params);
    if found.is_none() {
        debug!(class = class.name(), ?params, "constructor lookup missed");
    }
    found
}

/// Resolve a method by exact name and exact parameter shape.
///
/// Answers `None` when the class is absent or declares no such method.
pub fn method_of<'c>(
    class: Option<&'c ClassSpec>,
    name: &str,
    params: &[ParamTy],
) -> Option<&'c MethodSpec> {
    let class = class?;
    let found = class.find_method(name, params);
    if found.is_none() {
        debug!(class = class.name(), method = name, ?params, "method lookup missed");
    }
    found
}

/// Construct an instance through a constructor descriptor.
///
/// Answers `None` when the descriptor is absent or when construction fails for any reason;
/// a panicking construction body is contained here and reduced to absence as well.
pub fn instantiate(constructor: Option<&ConstructorSpec>, args: &[Value]) -> Option<Instance> {
    let constructor = constructor?;
    match panic::catch_unwind(AssertUnwindSafe(|| (constructor.construct)(args))) {
        Ok(Ok(instance)) => Some(instance),
        Ok(Err(err)) => {
            debug!(%err, "construction failed");
            None
        }
        Err(_) => {
            let err = CallError::Panicked;
            debug!(%err, "construction failed");
            None
        }
    }
}

/// Invoke a method on an instance and return its declared result.
///
/// Answers `None` when the instance or method is absent, when the method is a body-less
/// requirement, when the body fails or panics, and for void-returning operations. State
/// mutation on the receiver is observed afterwards through a separate getter invocation.
pub fn call(target: Option<&Instance>, method: Option<&MethodSpec>, args: &[Value]) -> Option<Value> {
    let target = target?;
    let method = method?;
    let Some(body) = method.body() else {
        let err = CallError::NotInvokable {
            name: method.name().to_string(),
        };
        debug!(%err, "invocation failed");
        return None;
    };
    match panic::catch_unwind(AssertUnwindSafe(|| body(target, args))) {
        Ok(Ok(value)) => value,
        Ok(Err(err)) => {
            debug!(method = method.name(), %err, "invocation failed");
            None
        }
        Err(_) => {
            let err = CallError::Panicked;
            debug!(method = method.name(), %err, "invocation failed");
            None
        }
    }
}

/// Report whether a class declares conformance to the named capability.
///
/// Answers `false` (not absence) when the class is absent, when the capability name does
/// not resolve in `registry`, or when it resolves to something other than a capability.
/// Only the class's immediate declared set is consulted.
pub fn implements(class: Option<&ClassSpec>, registry: &Registry, capability: &str) -> bool {
    let Some(class) = class else {
        return false;
    };
    let Some(contract) = registry.class(capability) else {
        debug!(class = class.name(), capability, "capability lookup missed");
        return false;
    };
    if !contract.is_capability() {
        debug!(class = class.name(), capability, "capability target is a class");
        return false;
    }
    class.declared_capabilities().contains(&contract.name())
}
