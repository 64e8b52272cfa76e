//! Action interceptor: wraps action-typed props so invoking them logs the
//! call and then forwards to a user-supplied handler if one is present.
//!
//! The wrapper is an explicit capability object ([`ActionProxy`]) carrying a
//! session handle and the target prop name. It resolves the handler from the
//! live prop bag at invoke time, so it can never close over a stale value,
//! and [`effective_props`] rebuilds the proxy set on every render.

use indexmap::IndexMap;
use tracing::warn;

use crate::session::SessionHandle;
use crate::story::{ActionArg, ArgType, PropValue};

/// Fixed summary substituted when action arguments cannot be serialized.
pub const UNSERIALIZABLE_ARGS: &str = "unserializable args";

/// Wrapper exposed to the rendered component in place of an action prop's
/// raw value.
#[derive(Clone)]
pub struct ActionProxy {
    session: SessionHandle,
    prop_name: String,
    action_name: String,
}

impl ActionProxy {
    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    pub fn prop_name(&self) -> &str {
        &self.prop_name
    }

    /// Invoke the wrapped action: log first, then forward.
    ///
    /// UI-event-like arguments are excluded from the logged summary; the
    /// user handler, if the live bag currently holds one, receives the
    /// original unfiltered arguments. The handler runs outside the session
    /// lock, so it may call back into the session; panics from it are not
    /// caught here.
    pub fn invoke(&self, args: &[ActionArg]) {
        let summary = summarize_args(args);
        self.session.log_action(&self.action_name, &summary);

        let handler = self.session.with(|s| {
            s.live_props()
                .get(&self.prop_name)
                .and_then(PropValue::as_handler)
                .cloned()
        });
        if let Some(handler) = handler {
            handler(args);
        }
    }
}

/// Serialize the loggable arguments to a human-readable summary. Returns an
/// empty string when nothing loggable remains, and the fixed
/// [`UNSERIALIZABLE_ARGS`] marker when serialization fails.
fn summarize_args(args: &[ActionArg]) -> String {
    let loggable: Vec<&ActionArg> = args.iter().filter(|a| !a.is_event_like()).collect();
    if loggable.is_empty() {
        return String::new();
    }
    serde_json::to_string(&loggable).unwrap_or_else(|e| {
        warn!(error = %e, "could not serialize action arguments");
        UNSERIALIZABLE_ARGS.to_string()
    })
}

/// A prop as seen by the rendered component: either a plain value or an
/// action wrapper.
#[derive(Clone)]
pub enum EffectiveProp {
    Value(PropValue),
    Action(ActionProxy),
}

impl EffectiveProp {
    pub fn text(&self) -> Option<String> {
        match self {
            EffectiveProp::Value(v) => Some(v.display_text()),
            EffectiveProp::Action(_) => None,
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            EffectiveProp::Value(v) => v.is_truthy(),
            EffectiveProp::Action(_) => true,
        }
    }

    pub fn as_action(&self) -> Option<&ActionProxy> {
        match self {
            EffectiveProp::Action(proxy) => Some(proxy),
            EffectiveProp::Value(_) => None,
        }
    }

    /// Invoke if this prop is an action wrapper; returns whether it was one.
    pub fn invoke(&self, args: &[ActionArg]) -> bool {
        match self {
            EffectiveProp::Action(proxy) => {
                proxy.invoke(args);
                true
            }
            EffectiveProp::Value(_) => false,
        }
    }
}

/// Ordered effective prop bag handed to [`crate::story::Renderable`].
pub type EffectiveProps = IndexMap<String, EffectiveProp>;

/// Build the prop bag the rendered component sees: live values, with every
/// action-typed prop replaced by a freshly constructed [`ActionProxy`].
/// Called on every render, so proxies always reflect the current story and
/// prop bag. Empty when unselected.
pub fn effective_props(session: &SessionHandle) -> EffectiveProps {
    let story = session.current_story();
    let Some(story) = story else {
        return EffectiveProps::new();
    };

    let mut props: EffectiveProps = session.with(|s| {
        s.live_props()
            .iter()
            .map(|(name, value)| (name.clone(), EffectiveProp::Value(value.clone())))
            .collect()
    });

    for (name, arg_type) in &story.arg_types {
        if let ArgType::Action { action_name } = arg_type {
            props.insert(
                name.clone(),
                EffectiveProp::Action(ActionProxy {
                    session: session.clone(),
                    prop_name: name.clone(),
                    action_name: action_name.clone(),
                }),
            );
        }
    }
    props
}
