//! Runtime values produced by the evaluator.
//!
//! Every value the evaluator produces, whether a literal, the outcome of an
//! expression, or something bound by `let`, is an [`Object`]. There is no
//! user-visible error type distinct from [`Object`]: errors are ordinary
//! values (`Object::Error`) that short-circuit evaluation by propagating up
//! like a `ReturnValue` does.

use crate::ast::statement::BlockStatement;
use crate::ast::expression::Identifier;
use crate::environment::Environment;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

pub type BuiltinFn = fn(&[Object]) -> Object;

/// The cached `true`/`false`/`null` singletons. Returned by value everywhere
/// rather than compared by identity; equality is ordinary `PartialEq`.
pub const TRUE: Object = Object::Boolean(true);
pub const FALSE: Object = Object::Boolean(false);
pub const NULL: Object = Object::Null;

#[derive(Debug, Clone)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    String(String),
    Null,
    /// Wraps the value produced by a `return` statement so it can be told
    /// apart from an ordinary value while it propagates up through nested
    /// blocks to the nearest function or program boundary.
    ReturnValue(Box<Object>),
    Error(String),
    Function(Rc<FunctionObject>),
    Builtin(BuiltinFn),
}

#[derive(Debug)]
pub struct FunctionObject {
    pub parameters: Rc<[Identifier]>,
    pub body: Rc<BlockStatement>,
    pub env: Rc<RefCell<Environment>>,
}

impl Object {
    /// Short, uppercase name used in error messages (`"INTEGER"`, `"ERROR"`, ...).
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
            Object::Boolean(_) => "BOOLEAN",
            Object::String(_) => "STRING",
            Object::Null => "NULL",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Error(_) => "ERROR",
            Object::Function(_) => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
        }
    }

    /// Human-readable rendering, as printed by the REPL.
    pub fn inspect(&self) -> String {
        match self {
            Object::Integer(v) => v.to_string(),
            Object::Boolean(v) => v.to_string(),
            Object::String(v) => v.clone(),
            Object::Null => "null".to_string(),
            Object::ReturnValue(v) => v.inspect(),
            Object::Error(msg) => format!("ERROR: {}", msg),
            Object::Function(func) => {
                let params: Vec<String> = func.parameters.iter().map(|p| p.value.clone()).collect();
                format!("fn({}) {{\n{}\n}}", params.join(", "), func.body)
            }
            Object::Builtin(_) => "builtin function".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Boolean(false) | Object::Null)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inspect())
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Integer(a), Object::Integer(b)) => a == b,
            (Object::Boolean(a), Object::Boolean(b)) => a == b,
            (Object::String(a), Object::String(b)) => a == b,
            (Object::Null, Object::Null) => true,
            (Object::Error(a), Object::Error(b)) => a == b,
            _ => false,
        }
    }
}
