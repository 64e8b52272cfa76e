//! Core data model for stories: prop values, action arguments, and the
//! metadata (`ArgType`) that drives control rendering and action interception.
//!
//! A [`Story`] is a named, fully-specified configuration for exercising one
//! catalog component: an opaque [`Renderable`] reference, the canonical
//! default prop values, and per-prop metadata describing how each prop is
//! edited (control) or intercepted (action).

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::actions::EffectiveProps;

/// Ordered prop bag. Insertion order is display order in the controls panel.
pub type PropBag = IndexMap<String, PropValue>;

/// A real callback supplied for an action prop. The interceptor forwards the
/// original, unfiltered arguments to it after logging.
pub type ActionHandler = Arc<dyn Fn(&[ActionArg]) + Send + Sync>;

/// A value a prop can hold in `default_args` or the live prop bag.
#[derive(Clone)]
pub enum PropValue {
    Text(String),
    Bool(bool),
    Number(f64),
    /// Structured value that doesn't fit the scalar variants.
    Json(Value),
    /// A user-supplied callback for an action prop.
    Handler(ActionHandler),
}

impl PropValue {
    /// The value as display text, the way a text control shows it.
    pub fn display_text(&self) -> String {
        match self {
            PropValue::Text(s) => s.clone(),
            PropValue::Bool(b) => b.to_string(),
            PropValue::Number(n) => n.to_string(),
            PropValue::Json(Value::String(s)) => s.clone(),
            PropValue::Json(v) => v.to_string(),
            PropValue::Handler(_) => "[function]".to_string(),
        }
    }

    /// Truthiness for toggle controls, mirroring the loose `!!value` check
    /// the playground applies to boolean props.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Text(s) => !s.is_empty(),
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => *n != 0.0,
            PropValue::Json(v) => match v {
                Value::Null => false,
                Value::Bool(b) => *b,
                Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
                Value::String(s) => !s.is_empty(),
                _ => true,
            },
            PropValue::Handler(_) => true,
        }
    }

    pub fn as_handler(&self) -> Option<&ActionHandler> {
        match self {
            PropValue::Handler(h) => Some(h),
            _ => None,
        }
    }

    /// JSON description for catalog dumps. Handlers are opaque and render as
    /// a fixed marker.
    pub fn describe(&self) -> Value {
        match self {
            PropValue::Text(s) => Value::String(s.clone()),
            PropValue::Bool(b) => Value::Bool(*b),
            PropValue::Number(n) => serde_json::json!(n),
            PropValue::Json(v) => v.clone(),
            PropValue::Handler(_) => Value::String("[function]".to_string()),
        }
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            PropValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            PropValue::Number(n) => f.debug_tuple("Number").field(n).finish(),
            PropValue::Json(v) => f.debug_tuple("Json").field(v).finish(),
            PropValue::Handler(_) => f.write_str("Handler(..)"),
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropValue::Text(a), PropValue::Text(b)) => a == b,
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Number(a), PropValue::Number(b)) => a == b,
            (PropValue::Json(a), PropValue::Json(b)) => a == b,
            // Handlers compare by identity; two clones of the same Arc are
            // the same handler.
            (PropValue::Handler(a), PropValue::Handler(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<Value> for PropValue {
    fn from(v: Value) -> Self {
        PropValue::Json(v)
    }
}

impl From<ActionHandler> for PropValue {
    fn from(h: ActionHandler) -> Self {
        PropValue::Handler(h)
    }
}

/// An argument passed to an intercepted action invocation.
#[derive(Debug, Clone)]
pub enum ActionArg {
    /// An ordinary serializable value.
    Value(Value),
    /// A UI-event-like object, identified by carrying a native-event payload.
    /// Excluded from log summaries: not meaningful to log and frequently
    /// non-serializable in the systems that produce them.
    UiEvent { kind: String, native_event: Value },
    /// A value that cannot be serialized (circular or foreign data). The
    /// label is only for debugging; serialization fails by construction.
    Opaque(String),
}

impl ActionArg {
    pub fn value(v: impl Into<Value>) -> Self {
        ActionArg::Value(v.into())
    }

    pub fn ui_event(kind: &str) -> Self {
        ActionArg::UiEvent {
            kind: kind.to_string(),
            native_event: serde_json::json!({ "type": kind }),
        }
    }

    /// Whether this argument should be excluded from log summaries. Covers
    /// the dedicated event variant and plain objects that smuggle in a
    /// `nativeEvent` field.
    pub fn is_event_like(&self) -> bool {
        match self {
            ActionArg::UiEvent { .. } => true,
            ActionArg::Value(Value::Object(map)) => map.contains_key("nativeEvent"),
            _ => false,
        }
    }
}

impl Serialize for ActionArg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ActionArg::Value(v) => v.serialize(serializer),
            ActionArg::UiEvent { native_event, .. } => native_event.serialize(serializer),
            ActionArg::Opaque(label) => Err(S::Error::custom(format!(
                "argument is not serializable: {label}"
            ))),
        }
    }
}

/// How a control-typed prop is edited.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ControlSpec {
    Text,
    Boolean,
    /// Enumerated choice. `options` is authored non-empty; this is an
    /// assembly pre-condition, not validated at runtime.
    Select { options: Vec<String> },
    /// Forward-compat arm for control kinds this build doesn't know. Renders
    /// a placeholder instead of breaking the session.
    Unknown { name: String },
}

impl ControlSpec {
    pub fn kind(&self) -> &str {
        match self {
            ControlSpec::Text => "text",
            ControlSpec::Boolean => "boolean",
            ControlSpec::Select { .. } => "select",
            ControlSpec::Unknown { name } => name,
        }
    }
}

/// Per-prop metadata: either an editable control or an intercepted action.
/// A given prop name maps to exactly one variant within a story.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgType {
    Control {
        control: ControlSpec,
    },
    Action {
        #[serde(rename = "actionName")]
        action_name: String,
    },
}

impl ArgType {
    pub fn text() -> Self {
        ArgType::Control {
            control: ControlSpec::Text,
        }
    }

    pub fn boolean() -> Self {
        ArgType::Control {
            control: ControlSpec::Boolean,
        }
    }

    pub fn select<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArgType::Control {
            control: ControlSpec::Select {
                options: options.into_iter().map(Into::into).collect(),
            },
        }
    }

    pub fn action(action_name: &str) -> Self {
        ArgType::Action {
            action_name: action_name.to_string(),
        }
    }

    pub fn is_action(&self) -> bool {
        matches!(self, ArgType::Action { .. })
    }
}

/// An opaque renderable component reference. The core never inspects its
/// internals; it only hands it the intercepted prop bag.
pub trait Renderable: Send + Sync {
    /// Component type name, shown in the canvas header.
    fn name(&self) -> &'static str;
    /// Render a preview of the component from the effective props.
    fn preview(&self, props: &EffectiveProps) -> String;
}

/// A named, fully-specified configuration for one catalog component.
#[derive(Clone)]
pub struct Story {
    /// Opaque renderable reference, supplied by the embedding application.
    pub component: Arc<dyn Renderable>,
    /// Canonical reset target. Immutable once assembled; the session always
    /// seeds its live bag from a fresh copy, never a shared reference.
    pub default_args: PropBag,
    /// Per-prop metadata, in display order.
    pub arg_types: IndexMap<String, ArgType>,
}

impl Story {
    pub fn new(component: Arc<dyn Renderable>) -> Self {
        Story {
            component,
            default_args: PropBag::new(),
            arg_types: IndexMap::new(),
        }
    }

    /// Register an editable prop: default value plus its arg type.
    pub fn arg(mut self, name: &str, value: impl Into<PropValue>, arg_type: ArgType) -> Self {
        self.default_args.insert(name.to_string(), value.into());
        self.arg_types.insert(name.to_string(), arg_type);
        self
    }

    /// Register an action prop with no default handler. The prop has no
    /// `default_args` entry; the interceptor supplies the effective value.
    pub fn action(mut self, name: &str, action_name: &str) -> Self {
        self.arg_types
            .insert(name.to_string(), ArgType::action(action_name));
        self
    }

    /// Register an action prop that also carries a real handler to forward to.
    pub fn action_with_handler(mut self, name: &str, action_name: &str, handler: ActionHandler) -> Self {
        self.default_args
            .insert(name.to_string(), PropValue::Handler(handler));
        self.arg_types
            .insert(name.to_string(), ArgType::action(action_name));
        self
    }
}

impl fmt::Debug for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Story")
            .field("component", &self.component.name())
            .field("default_args", &self.default_args)
            .field("arg_types", &self.arg_types)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prop_value_truthiness() {
        assert!(PropValue::Bool(true).is_truthy());
        assert!(!PropValue::Bool(false).is_truthy());
        assert!(PropValue::Text("x".into()).is_truthy());
        assert!(!PropValue::Text(String::new()).is_truthy());
        assert!(!PropValue::Number(0.0).is_truthy());
        assert!(PropValue::Json(serde_json::json!([1])).is_truthy());
        assert!(!PropValue::Json(Value::Null).is_truthy());
    }

    #[test]
    fn test_handler_equality_is_by_identity() {
        let a: ActionHandler = Arc::new(|_| {});
        let b: ActionHandler = Arc::new(|_| {});
        assert_eq!(
            PropValue::Handler(a.clone()),
            PropValue::Handler(a.clone())
        );
        assert_ne!(PropValue::Handler(a), PropValue::Handler(b));
    }

    #[test]
    fn test_event_like_detection() {
        assert!(ActionArg::ui_event("click").is_event_like());
        let smuggled = ActionArg::value(serde_json::json!({ "nativeEvent": {} }));
        assert!(smuggled.is_event_like());
        assert!(!ActionArg::value(serde_json::json!({ "detail": 2 })).is_event_like());
        assert!(!ActionArg::Opaque("socket".into()).is_event_like());
    }

    #[test]
    fn test_opaque_arg_fails_serialization() {
        let arg = ActionArg::Opaque("circular".into());
        assert!(serde_json::to_string(&arg).is_err());
    }

    #[test]
    fn test_arg_type_serializes_like_authored_metadata() {
        let control = serde_json::to_value(ArgType::select(["a", "b"])).unwrap();
        assert_eq!(
            control,
            serde_json::json!({ "control": { "kind": "select", "options": ["a", "b"] } })
        );
        let action = serde_json::to_value(ArgType::action("clicked")).unwrap();
        assert_eq!(action, serde_json::json!({ "actionName": "clicked" }));
    }

    #[test]
    fn test_story_builder_keeps_insertion_order() {
        struct Null;
        impl Renderable for Null {
            fn name(&self) -> &'static str {
                "Null"
            }
            fn preview(&self, _props: &EffectiveProps) -> String {
                String::new()
            }
        }

        let story = Story::new(Arc::new(Null))
            .arg("label", "Go", ArgType::text())
            .arg("disabled", false, ArgType::boolean())
            .action("onClick", "clicked");

        let keys: Vec<_> = story.arg_types.keys().cloned().collect();
        assert_eq!(keys, vec!["label", "disabled", "onClick"]);
        assert_eq!(story.default_args.len(), 2);
        assert!(story.arg_types["onClick"].is_action());
    }
}
