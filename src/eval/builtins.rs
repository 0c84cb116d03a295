//! Built-in functions available in every environment without needing a `let`.

use crate::object::Object;
use std::collections::HashMap;

fn len(args: &[Object]) -> Object {
    if args.len() != 1 {
        return Object::Error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }

    match &args[0] {
        Object::String(s) => Object::Integer(s.len() as i64),
        other => Object::Error(format!(
            "argument to 'len' not supported, got {}",
            other.type_name()
        )),
    }
}

/// Looks up a builtin by name, e.g. for binding into the global environment
/// or resolving an identifier the evaluator doesn't find in scope.
pub fn lookup(name: &str) -> Option<Object> {
    builtins().get(name).copied().map(Object::Builtin)
}

fn builtins() -> HashMap<&'static str, fn(&[Object]) -> Object> {
    let mut m: HashMap<&'static str, fn(&[Object]) -> Object> = HashMap::new();
    m.insert("len", len);
    m
}
