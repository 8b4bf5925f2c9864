//! Handler Registry
//!
//! Page definitions are data, so they can only name the code a select
//! section should call. The registry maps those names to values of whatever
//! type was registered; the select widget checks at runtime that it actually
//! got a change handler.

use std::collections::HashMap;
use std::rc::Rc;

use gpui::{App, Global};
use serde_json::Value;

use crate::app::entities::AppEntities;
use crate::features::select::controller::{ChangeHandler, DynamicValue};

/// Change handler signature used by select sections
pub type PageChangeHandler = ChangeHandler<Value, App>;

/// Named runtime capabilities
#[derive(Default)]
pub struct HandlerRegistry {
    entries: HashMap<String, Rc<DynamicValue>>,
}

impl Global for HandlerRegistry {}

impl HandlerRegistry {
    /// Register any value under `name`, replacing an earlier entry
    pub fn register<T: 'static>(&mut self, name: impl Into<String>, value: T) {
        self.entries
            .insert(name.into(), Rc::new(DynamicValue::new(value)));
    }

    /// Register a select change handler under `name`
    pub fn register_change(
        &mut self,
        name: impl Into<String>,
        handler: impl Fn(&Value, &str, &mut App) + 'static,
    ) {
        let handler: PageChangeHandler = Rc::new(handler);
        self.register(name, handler);
    }

    pub fn get(&self, name: &str) -> Option<Rc<DynamicValue>> {
        self.entries.get(name).cloned()
    }

    /// Registry with the built-in `log` handler, which reports every
    /// selection in the activity log
    pub fn with_defaults(entities: &AppEntities) -> Self {
        let mut registry = Self::default();

        let logs = entities.logs.clone();
        registry.register_change("log", move |value, label, cx| {
            logs.update(cx, |logs, cx| {
                logs.info(format!("Selected {label} ({})", display_value(value)));
                cx.notify();
            });
        });

        registry
    }
}

/// Render a JSON option value the way users typed it
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_value_unquotes_strings() {
        assert_eq!(display_value(&Value::from("workflow!one")), "workflow!one");
        assert_eq!(display_value(&Value::from(2)), "2");
        assert_eq!(display_value(&Value::Null), "null");
    }

    #[test]
    fn registered_change_handler_downcasts() {
        let mut registry = HandlerRegistry::default();
        registry.register_change("noop", |_value, _label, _cx| {});
        registry.register("number", 7_u32);

        let noop = registry.get("noop").expect("registered");
        assert!(noop.downcast_ref::<PageChangeHandler>().is_some());

        let number = registry.get("number").expect("registered");
        assert!(number.downcast_ref::<PageChangeHandler>().is_none());
        assert_eq!(number.type_name(), "u32");

        assert!(registry.get("missing").is_none());
    }
}
