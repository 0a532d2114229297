//! Guardrails for the absence-tolerant probe layer.
//!
//! These tests lock in the central contract of the runtime: a lookup that finds nothing
//! answers `None`, a construction or invocation that fails for any reason is reduced to
//! `None` at the probe boundary, and the capability check answers `false` on any miss.
//! Nothing here may ever panic out of a helper.

use std::sync::Once;

use jukebox_core::errors::CallError;
use jukebox_core::mirror::{ClassSpec, Instance, Registry};
use jukebox_core::probe::{call, constructor_of, implements, instantiate, method_of};
use jukebox_core::value::{self, ParamTy, Value};

/// Route swallowed-failure diagnostics to the test output when `RUST_LOG` asks for them.
fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// A minimal subject used only by these tests.
struct Counter {
    count: i64,
}

fn construct_counter(args: &[Value]) -> Result<Instance, CallError> {
    value::expect_arity(args, 1)?;
    let count = value::int_arg(args, 0)?;
    Ok(Instance::new(Counter { count }))
}

fn counter_increment(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
    value::expect_arity(args, 0)?;
    recv.with(|c: &mut Counter| c.count += 1)?;
    Ok(None)
}

fn counter_value(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
    value::expect_arity(args, 0)?;
    let count = recv.with(|c: &mut Counter| c.count)?;
    Ok(Some(Value::Int(count)))
}

fn counter_explode(_recv: &Instance, _args: &[Value]) -> Result<Option<Value>, CallError> {
    panic!("counter body panicked on purpose");
}

struct Gauge;

fn gauge_read(recv: &Instance, args: &[Value]) -> Result<Option<Value>, CallError> {
    value::expect_arity(args, 0)?;
    recv.with(|_g: &mut Gauge| ())?;
    Ok(Some(Value::Int(0)))
}

fn test_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(ClassSpec::capability("Resettable").requirement("reset", &[]));
    registry.register(
        ClassSpec::class("Counter")
            .implements("Resettable")
            .constructor(&[ParamTy::Int], construct_counter)
            .method("increment", &[], counter_increment)
            .method("value", &[], counter_value)
            .method("explode", &[], counter_explode),
    );
    registry.register(ClassSpec::class("Gauge").method("read", &[], gauge_read));
    registry
}

#[test]
fn unknown_class_names_resolve_to_absence() {
    let registry = test_registry();
    assert!(registry.class("Accumulator").is_none());
    assert!(registry.class("counter").is_none());
    assert!(registry.class("").is_none());
}

#[test]
fn constructor_lookup_tolerates_an_absent_class() {
    assert!(constructor_of(None, &[ParamTy::Int]).is_none());
}

#[test]
fn constructor_shapes_match_exactly() {
    let registry = test_registry();
    let class = registry.class("Counter");
    assert!(constructor_of(class, &[ParamTy::Int]).is_some());
    assert!(constructor_of(class, &[]).is_none());
    assert!(constructor_of(class, &[ParamTy::Float]).is_none());
    assert!(constructor_of(class, &[ParamTy::Int, ParamTy::Int]).is_none());
}

#[test]
fn method_lookup_tolerates_an_absent_class() {
    assert!(method_of(None, "increment", &[]).is_none());
}

#[test]
fn method_names_and_shapes_match_exactly() {
    let registry = test_registry();
    let class = registry.class("Counter");
    assert!(method_of(class, "increment", &[]).is_some());
    assert!(method_of(class, "Increment", &[]).is_none());
    assert!(method_of(class, "increment", &[ParamTy::Int]).is_none());
    assert!(method_of(class, "decrement", &[]).is_none());
}

#[test]
fn instantiation_tolerates_an_absent_constructor() {
    assert!(instantiate(None, &[Value::Int(1)]).is_none());
}

#[test]
fn construction_failure_reduces_to_absence() {
    init_logging();
    let registry = test_registry();
    let constructor = constructor_of(registry.class("Counter"), &[ParamTy::Int]);

    // Wrong argument shape at invocation time.
    assert!(instantiate(constructor, &[Value::str("three")]).is_none());
    // Wrong arity at invocation time.
    assert!(instantiate(constructor, &[]).is_none());
    // The descriptor itself is still usable afterwards.
    assert!(instantiate(constructor, &[Value::Int(3)]).is_some());
}

#[test]
fn invocation_tolerates_absent_inputs() {
    let registry = test_registry();
    let class = registry.class("Counter");
    let constructor = constructor_of(class, &[ParamTy::Int]);
    let counter = instantiate(constructor, &[Value::Int(0)]);
    let increment = method_of(class, "increment", &[]);

    assert_eq!(call(None, increment, &[]), None);
    assert_eq!(call(counter.as_ref(), None, &[]), None);
    assert_eq!(call(None, None, &[]), None);
}

#[test]
fn invocation_failure_reduces_to_absence() {
    init_logging();
    let registry = test_registry();
    let class = registry.class("Counter");
    let counter = instantiate(constructor_of(class, &[ParamTy::Int]), &[Value::Int(0)]);

    // A panicking body is contained at the probe boundary.
    let explode = method_of(class, "explode", &[]);
    assert_eq!(call(counter.as_ref(), explode, &[]), None);

    // A body that rejects its arguments is reduced to absence too.
    let increment = method_of(class, "increment", &[]);
    assert_eq!(call(counter.as_ref(), increment, &[Value::Int(1)]), None);

    // Neither failure corrupted the subject.
    let observed = call(counter.as_ref(), method_of(class, "value", &[]), &[]);
    assert_eq!(observed, Some(Value::Int(0)));
}

#[test]
fn body_less_requirements_are_not_invokable() {
    let registry = test_registry();
    let contract = registry.class("Resettable");
    let reset = method_of(contract, "reset", &[]);
    assert!(reset.is_some(), "requirement should be resolvable");

    let counter = instantiate(
        constructor_of(registry.class("Counter"), &[ParamTy::Int]),
        &[Value::Int(0)],
    );
    assert_eq!(call(counter.as_ref(), reset, &[]), None);
}

#[test]
fn foreign_receivers_reduce_to_absence() {
    let registry = test_registry();
    let counter = instantiate(
        constructor_of(registry.class("Counter"), &[ParamTy::Int]),
        &[Value::Int(0)],
    );

    // `read` was registered for Gauge; handing it a Counter must not succeed.
    let read = method_of(registry.class("Gauge"), "read", &[]);
    assert_eq!(call(counter.as_ref(), read, &[]), None);
}

#[test]
fn void_invocations_answer_absence_but_mutate() {
    let registry = test_registry();
    let class = registry.class("Counter");
    let counter = instantiate(constructor_of(class, &[ParamTy::Int]), &[Value::Int(0)]);
    let increment = method_of(class, "increment", &[]);
    let value = method_of(class, "value", &[]);

    assert_eq!(call(counter.as_ref(), increment, &[]), None);
    assert_eq!(call(counter.as_ref(), increment, &[]), None);
    assert_eq!(call(counter.as_ref(), value, &[]), Some(Value::Int(2)));
}

#[test]
fn capability_checks_answer_false_on_any_miss() {
    let registry = test_registry();
    let class = registry.class("Counter");

    assert!(!implements(None, &registry, "Resettable"));
    assert!(!implements(class, &registry, "Disposable"));
    // A concrete class is not a capability, even though the name resolves.
    assert!(!implements(class, &registry, "Gauge"));
    assert!(!implements(registry.class("Gauge"), &registry, "Resettable"));
}

#[test]
fn declared_capabilities_are_reported() {
    let registry = test_registry();
    assert!(implements(registry.class("Counter"), &registry, "Resettable"));
}
