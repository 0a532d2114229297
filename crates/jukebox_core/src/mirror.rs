//! Class descriptors and the runtime registry they are looked up in.
//!
//! A [`Registry`] holds one [`ClassSpec`] per registered type: its canonical name, its kind
//! (concrete class or capability contract), the capabilities it declares, and descriptor
//! entries for its constructors and methods. Descriptors are immutable once registered;
//! lookups match names and parameter shapes exactly.
//!
//! Constructed subjects are handed out as [`Instance`]s, shared handles to the concrete
//! value behind `dyn Any`. Method bodies downcast back to the type they were registered for,
//! so a body attached to the wrong class fails with a receiver error instead of touching
//! foreign state.

use core::fmt::Write as _;
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::errors::CallError;
use crate::value::{ParamTy, Value};

/// Construction function stored in a [`ConstructorSpec`].
pub type ConstructFn = fn(&[Value]) -> Result<Instance, CallError>;

/// Method body stored in a [`MethodSpec`]. `Ok(None)` is the void return.
pub type BodyFn = fn(&Instance, &[Value]) -> Result<Option<Value>, CallError>;

/// A reflectively constructed subject instance.
#[derive(Clone)]
pub struct Instance {
    inner: Rc<RefCell<dyn Any>>,
}

impl Instance {
    /// Wrap a concrete subject value.
    pub fn new<T: Any>(value: T) -> Self {
        Instance {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Run `op` against the subject as a `T`.
    ///
    /// Fails with [`CallError::Receiver`] when the instance holds some other concrete type.
    pub fn with<T: Any, R>(&self, op: impl FnOnce(&mut T) -> R) -> Result<R, CallError> {
        let mut inner = self.inner.borrow_mut();
        match inner.downcast_mut::<T>() {
            Some(subject) => Ok(op(subject)),
            None => Err(CallError::Receiver {
                expected: std::any::type_name::<T>(),
            }),
        }
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Instance(..)")
    }
}

/// Runtime kind of a registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// A concrete, constructible class.
    Class,
    /// A capability contract: named requirements, no constructors, no bodies.
    Capability,
}

/// Constructor descriptor: an exact parameter shape plus the construction function.
pub struct ConstructorSpec {
    params: Vec<ParamTy>,
    pub(crate) construct: ConstructFn,
}

impl ConstructorSpec {
    pub fn params(&self) -> &[ParamTy] {
        &self.params
    }
}

/// Method descriptor: canonical name, exact parameter shape, and an optional body.
///
/// Capability requirements are methods without a body; invoking one is an invocation
/// failure, not a lookup miss.
pub struct MethodSpec {
    name: &'static str,
    params: Vec<ParamTy>,
    body: Option<BodyFn>,
}

impl MethodSpec {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn params(&self) -> &[ParamTy] {
        &self.params
    }

    pub fn body(&self) -> Option<BodyFn> {
        self.body
    }
}

/// Descriptor for one registered type.
///
/// Built fluently at registration time:
///
/// ```
/// use jukebox_core::mirror::{ClassSpec, Instance};
/// use jukebox_core::value::ParamTy;
///
/// let spec = ClassSpec::class("Counter")
///     .implements("Resettable")
///     .constructor(&[ParamTy::Int], |_args| Ok(Instance::new(0i64)))
///     .method("value", &[], |recv, _args| {
///         recv.with(|n: &mut i64| Some(jukebox_core::Value::Int(*n)))
///     });
/// assert_eq!(spec.name(), "Counter");
/// ```
pub struct ClassSpec {
    name: &'static str,
    kind: TypeKind,
    capabilities: Vec<&'static str>,
    constructors: Vec<ConstructorSpec>,
    methods: Vec<MethodSpec>,
}

impl ClassSpec {
    /// Start a concrete class descriptor.
    pub fn class(name: &'static str) -> Self {
        ClassSpec {
            name,
            kind: TypeKind::Class,
            capabilities: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Start a capability-contract descriptor.
    pub fn capability(name: &'static str) -> Self {
        ClassSpec {
            name,
            kind: TypeKind::Capability,
            capabilities: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Declare conformance to a capability contract.
    pub fn implements(mut self, capability: &'static str) -> Self {
        self.capabilities.push(capability);
        self
    }

    /// Register a constructor with an exact parameter shape.
    pub fn constructor(mut self, params: &[ParamTy], construct: ConstructFn) -> Self {
        self.constructors.push(ConstructorSpec {
            params: params.to_vec(),
            construct,
        });
        self
    }

    /// Register a method with an exact parameter shape and a body.
    pub fn method(mut self, name: &'static str, params: &[ParamTy], body: BodyFn) -> Self {
        self.methods.push(MethodSpec {
            name,
            params: params.to_vec(),
            body: Some(body),
        });
        self
    }

    /// Register a body-less requirement (used on capability contracts).
    pub fn requirement(mut self, name: &'static str, params: &[ParamTy]) -> Self {
        self.methods.push(MethodSpec {
            name,
            params: params.to_vec(),
            body: None,
        });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_capability(&self) -> bool {
        self.kind == TypeKind::Capability
    }

    /// The capability names this type declares directly.
    pub fn declared_capabilities(&self) -> &[&'static str] {
        &self.capabilities
    }

    pub(crate) fn find_constructor(&self, params: &[ParamTy]) -> Option<&ConstructorSpec> {
        self.constructors.iter().find(|c| c.params == params)
    }

    pub(crate) fn find_method(&self, name: &str, params: &[ParamTy]) -> Option<&MethodSpec> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.params == params)
    }
}

/// Registry of class descriptors addressable by canonical name.
#[derive(Default)]
pub struct Registry {
    classes: Vec<ClassSpec>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Register a class descriptor.
    ///
    /// Names must be unique within one registry; a duplicate indicates a registration bug.
    pub fn register(&mut self, spec: ClassSpec) {
        debug_assert!(
            self.class(spec.name()).is_none(),
            "duplicate class registration: {}",
            spec.name()
        );
        self.classes.push(spec);
    }

    /// Resolve a type by canonical name. Unknown names answer `None`, never a fault.
    pub fn class(&self, name: &str) -> Option<&ClassSpec> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Iterate over the registered descriptors in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassSpec> {
        self.classes.iter()
    }

    /// Render the registered surface as a stable, line-oriented listing.
    ///
    /// One header line per type (`class Name: Cap` / `capability Name`), then one indented
    /// line per constructor (`new(...)`) and per method, in registration order.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for class in self.classes() {
            match class.kind {
                TypeKind::Capability => {
                    let _ = writeln!(&mut out, "capability {}", class.name);
                }
                TypeKind::Class if class.capabilities.is_empty() => {
                    let _ = writeln!(&mut out, "class {}", class.name);
                }
                TypeKind::Class => {
                    let _ = writeln!(&mut out, "class {}: {}", class.name, class.capabilities.join(" + "));
                }
            }
            for constructor in &class.constructors {
                let _ = writeln!(&mut out, "  new({})", render_params(&constructor.params));
            }
            for method in &class.methods {
                let _ = writeln!(&mut out, "  {}({})", method.name, render_params(&method.params));
            }
        }
        out
    }
}

fn render_params(params: &[ParamTy]) -> String {
    let rendered: Vec<String> = params.iter().map(|p| format!("{p:?}")).collect();
    rendered.join(", ")
}
