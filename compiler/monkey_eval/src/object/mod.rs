//! Runtime objects.
//!
//! [`Object`] is the closed set of values a Monkey program can produce.
//! Heap payloads sit behind [`Heap`], so cloning an object never copies a
//! string, array or hash. `Display` is the user-visible inspection.

mod heap;

pub use heap::Heap;

use std::fmt;
use std::rc::Rc;

use monkey_ir::{BlockStatement, Identifier};
use rustc_hash::FxHashMap;

use crate::environment::Environment;
use crate::print_handler::PrintHandlerImpl;

/// Signature shared by every builtin.
pub type BuiltinFn = fn(&[Object], &PrintHandlerImpl) -> Object;

/// Runtime type tag, rendered in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Integer,
    String,
    Boolean,
    Null,
    ReturnValue,
    Error,
    Function,
    Builtin,
    Array,
    Hash,
}

impl ObjectType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ObjectType::Integer => "INTEGER",
            ObjectType::String => "STRING",
            ObjectType::Boolean => "BOOLEAN",
            ObjectType::Null => "NULL",
            ObjectType::ReturnValue => "RETURN_VALUE",
            ObjectType::Error => "ERROR",
            ObjectType::Function => "FUNCTION",
            ObjectType::Builtin => "BUILTIN",
            ObjectType::Array => "ARRAY",
            ObjectType::Hash => "HASH",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Monkey runtime value.
#[derive(Clone, Debug)]
pub enum Object {
    Integer(i64),
    String(Heap<String>),
    Boolean(bool),
    Null,
    /// A `return` travelling up through enclosing blocks.
    ReturnValue(Heap<Object>),
    /// A language-level error travelling up to the top.
    Error(Heap<String>),
    Function(Heap<Function>),
    Builtin(Builtin),
    Array(Heap<Vec<Object>>),
    Hash(Heap<FxHashMap<HashKey, HashPair>>),
}

impl Object {
    pub const TRUE: Object = Object::Boolean(true);
    pub const FALSE: Object = Object::Boolean(false);
    pub const NULL: Object = Object::Null;

    /// Map a host boolean onto the shared boolean constants.
    #[inline]
    pub const fn native_bool(value: bool) -> Object {
        if value {
            Object::TRUE
        } else {
            Object::FALSE
        }
    }

    pub fn string(value: impl Into<String>) -> Object {
        Object::String(Heap::new(value.into()))
    }

    pub fn error(message: impl Into<String>) -> Object {
        Object::Error(Heap::new(message.into()))
    }

    pub fn return_value(value: Object) -> Object {
        Object::ReturnValue(Heap::new(value))
    }

    pub fn array(elements: Vec<Object>) -> Object {
        Object::Array(Heap::new(elements))
    }

    pub fn hash(pairs: FxHashMap<HashKey, HashPair>) -> Object {
        Object::Hash(Heap::new(pairs))
    }

    /// A closure over `env`.
    pub fn function(
        parameters: Rc<[Identifier]>,
        body: Rc<BlockStatement>,
        env: Environment,
    ) -> Object {
        Object::Function(Heap::new(Function {
            parameters,
            body,
            env,
        }))
    }

    pub const fn object_type(&self) -> ObjectType {
        match self {
            Object::Integer(_) => ObjectType::Integer,
            Object::String(_) => ObjectType::String,
            Object::Boolean(_) => ObjectType::Boolean,
            Object::Null => ObjectType::Null,
            Object::ReturnValue(_) => ObjectType::ReturnValue,
            Object::Error(_) => ObjectType::Error,
            Object::Function(_) => ObjectType::Function,
            Object::Builtin(_) => ObjectType::Builtin,
            Object::Array(_) => ObjectType::Array,
            Object::Hash(_) => ObjectType::Hash,
        }
    }

    /// `false` and `null` are falsy; everything else is truthy.
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }

    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// The key this object hashes to, if it can be used as a hash key.
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Object::Integer(n) => Some(HashKey::Integer(*n)),
            Object::Boolean(b) => Some(HashKey::Boolean(*b)),
            Object::String(s) => Some(HashKey::String(s.clone())),
            _ => None,
        }
    }

    /// The user-visible rendering.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::String(a), Object::String(b)) | (Object::Error(a), Object::Error(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::ReturnValue(a), Object::ReturnValue(b)) => a == b,
            // Closures have identity, not structure.
            (Object::Function(a), Object::Function(b)) => Heap::ptr_eq(a, b),
            (Object::Builtin(a), Object::Builtin(b)) => a.name == b.name,
            (Object::Array(a), Object::Array(b)) => a == b,
            (Object::Hash(a), Object::Hash(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(n) => write!(f, "{n}"),
            Object::String(s) => f.write_str(s),
            Object::Boolean(b) => write!(f, "{b}"),
            Object::Null => f.write_str("null"),
            Object::ReturnValue(value) => fmt::Display::fmt(&**value, f),
            Object::Error(message) => write!(f, "ERROR: {message}"),
            Object::Function(function) => fmt::Display::fmt(&**function, f),
            Object::Builtin(_) => f.write_str("builtin function"),
            Object::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(element, f)?;
                }
                f.write_str("]")
            }
            Object::Hash(pairs) => {
                f.write_str("{")?;
                for (i, pair) in pairs.values().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// A user-defined function together with the environment it closed over.
pub struct Function {
    pub parameters: Rc<[Identifier]>,
    pub body: Rc<BlockStatement>,
    pub env: Environment,
}

impl fmt::Debug for Function {
    // The environment may contain this function; leave it out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&param.name)?;
        }
        f.write_str(") {\n")?;
        for stmt in &self.body.statements {
            writeln!(f, "{stmt}")?;
        }
        f.write_str("}")
    }
}

/// A host function callable from Monkey code.
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub(crate) const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke with already-evaluated arguments.
    #[inline]
    pub fn call(&self, args: &[Object], out: &PrintHandlerImpl) -> Object {
        (self.func)(args, out)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Identity of a hashable object: its type plus its value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    String(Heap<String>),
    Boolean(bool),
}

/// An entry of a hash object. The key object is kept for inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct HashPair {
    pub key: Object,
    pub value: Object,
}
