//! Lexically scoped variable bindings.
//!
//! Each [`Environment`] optionally links to an `outer` environment. A lookup
//! walks outward until it finds the name or runs out of scopes. Function
//! literals capture the environment active at the point they're defined
//! (`Rc<RefCell<Environment>>`, shared rather than copied) so closures see
//! the bindings in effect when they were created, not when they're called.

use crate::object::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: None,
        }))
    }

    /// Creates a new scope nested inside `outer`, as when a function call
    /// binds its parameters.
    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            store: HashMap::new(),
            outer: Some(outer),
        }))
    }

    /// Looks up `name`, checking this scope before walking outward.
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` to `value` in this scope, shadowing any outer binding.
    pub fn set(&mut self, name: String, value: Object) {
        self.store.insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let env = Environment::new();
        env.borrow_mut().set("x".to_string(), Object::Integer(5));
        assert_eq!(env.borrow().get("x"), Some(Object::Integer(5)));
    }

    #[test]
    fn test_get_missing_returns_none() {
        let env = Environment::new();
        assert_eq!(env.borrow().get("missing"), None);
    }

    #[test]
    fn test_enclosed_scope_sees_outer_bindings() {
        let outer = Environment::new();
        outer.borrow_mut().set("x".to_string(), Object::Integer(1));

        let inner = Environment::new_enclosed(Rc::clone(&outer));
        assert_eq!(inner.borrow().get("x"), Some(Object::Integer(1)));
    }

    #[test]
    fn test_enclosed_scope_shadows_outer_without_mutating_it() {
        let outer = Environment::new();
        outer.borrow_mut().set("x".to_string(), Object::Integer(1));

        let inner = Environment::new_enclosed(Rc::clone(&outer));
        inner.borrow_mut().set("x".to_string(), Object::Integer(2));

        assert_eq!(inner.borrow().get("x"), Some(Object::Integer(2)));
        assert_eq!(outer.borrow().get("x"), Some(Object::Integer(1)));
    }
}
