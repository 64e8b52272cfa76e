//! Selection & Props State Machine Tests
//!
//! Covers the core runtime invariants:
//! - selection reset atomicity (props seeded, log cleared)
//! - no-op on unresolvable selections
//! - prop update isolation
//! - reset preserves the action log
//! - action logging order, event filtering, serialization fallback
//! - action wrappers never observe stale handlers

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::actions::{effective_props, EffectiveProp, UNSERIALIZABLE_ARGS};
use crate::registry::Registry;
use crate::session::{Session, SessionHandle};
use crate::story::{ActionArg, ActionHandler, ArgType, PropValue, Renderable, Story};
use crate::theme::Theme;

struct Null;

impl Renderable for Null {
    fn name(&self) -> &'static str {
        "Null"
    }
    fn preview(&self, _props: &crate::actions::EffectiveProps) -> String {
        String::new()
    }
}

/// Registry fixture: system "S" with a Button
/// component whose Default story has a label and a logged onClick.
fn fixture_registry() -> Arc<Registry> {
    let button_default = Story::new(Arc::new(Null))
        .arg("label", "Go", ArgType::text())
        .arg("variant", "primary", ArgType::select(["primary", "ghost"]))
        .action("onClick", "clicked");
    let button_loud = Story::new(Arc::new(Null))
        .arg("label", "GO!", ArgType::text())
        .action("onClick", "clicked")
        .action("onHover", "hovered");
    let badge = Story::new(Arc::new(Null)).arg("label", "New", ArgType::text());

    Arc::new(
        Registry::builder()
            .component("S", "Button", vec![("Default", button_default), ("Loud", button_loud)])
            .component("S", "Badge", vec![("Default", badge)])
            .component("T", "Badge", vec![("Default", Story::new(Arc::new(Null)))])
            .build(),
    )
}

fn session() -> SessionHandle {
    SessionHandle::new(Session::new(fixture_registry(), Theme::default()))
}

fn selected_session() -> SessionHandle {
    let handle = session();
    assert!(handle.select_component_story("Button", "Default"));
    handle
}

// Selecting a story seeds props from defaults and clears the log, atomically.
#[test]
fn test_selection_seeds_props_and_clears_log() {
    let handle = session();
    handle.log_action("stale", "");

    assert!(handle.select_component_story("Button", "Default"));

    handle.with(|s| {
        let expected = s
            .registry()
            .lookup("S", "Button", "Default")
            .unwrap()
            .default_args
            .clone();
        assert_eq!(s.live_props(), &expected);
        assert!(s.action_log().is_empty());
    });
}

// The seeded bag is a fresh copy, not a reference to the defaults.
#[test]
fn test_live_props_are_a_copy_of_defaults() {
    let handle = selected_session();
    handle.update_prop("label", PropValue::Text("Stop".into()));

    handle.with(|s| {
        let defaults = &s.registry().lookup("S", "Button", "Default").unwrap().default_args;
        assert_eq!(defaults["label"], PropValue::Text("Go".into()));
        assert_eq!(s.live_props()["label"], PropValue::Text("Stop".into()));
    });
}

// Unresolvable selections leave the session untouched.
#[test]
fn test_unresolvable_selection_is_noop() {
    let handle = selected_session();
    handle.update_prop("label", PropValue::Text("Edited".into()));
    handle.log_action("clicked", "");

    let before = handle.with(|s| {
        (
            s.selection().cloned(),
            s.live_props().clone(),
            s.action_log().to_vec(),
            s.theme(),
        )
    });

    assert!(!handle.select_component_story("Button", "Nope"));
    assert!(!handle.select_component_story("Ghost", "Default"));

    let after = handle.with(|s| {
        (
            s.selection().cloned(),
            s.live_props().clone(),
            s.action_log().to_vec(),
            s.theme(),
        )
    });
    assert_eq!(before, after);
}

#[test]
fn test_unknown_system_selection_is_noop() {
    let handle = selected_session();
    assert!(!handle.select_system("Nope"));
    handle.with(|s| {
        assert_eq!(s.selected_system(), "S");
        assert!(s.selection().is_some());
    });
}

#[test]
fn test_system_switch_clears_selection_props_and_log() {
    let handle = selected_session();
    handle.log_action("clicked", "");

    assert!(handle.select_system("T"));

    handle.with(|s| {
        assert_eq!(s.selected_system(), "T");
        assert!(s.selection().is_none());
        assert!(s.live_props().is_empty());
        assert!(s.action_log().is_empty());
        assert!(s.current_story_data().is_none());
    });
}

// A prop update touches exactly one entry.
#[test]
fn test_update_prop_changes_only_that_prop() {
    let handle = selected_session();
    handle.log_action("clicked", "");

    assert!(handle.update_prop("label", PropValue::Text("Stop".into())));

    handle.with(|s| {
        assert_eq!(s.live_props()["label"], PropValue::Text("Stop".into()));
        assert_eq!(s.live_props()["variant"], PropValue::Text("primary".into()));
        assert_eq!(s.action_log().len(), 1);
    });
}

#[test]
fn test_update_prop_without_selection_is_noop() {
    let handle = session();
    assert!(!handle.update_prop("label", PropValue::Text("x".into())));
    handle.with(|s| assert!(s.live_props().is_empty()));
}

// Reset concerns only edited values, never the interaction history.
#[test]
fn test_reset_restores_defaults_but_keeps_log() {
    let handle = selected_session();
    handle.update_prop("label", PropValue::Text("Stop".into()));
    handle.log_action("clicked", "");
    handle.log_action("clicked", "");

    assert!(handle.reset_props());

    handle.with(|s| {
        assert_eq!(s.live_props()["label"], PropValue::Text("Go".into()));
        assert_eq!(s.action_log().len(), 2);
    });
}

#[test]
fn test_reset_without_selection_is_noop() {
    let handle = session();
    assert!(!handle.reset_props());
}

// Invocations log in call order; event-like args stay out of summaries.
#[test]
fn test_actions_log_in_call_order_and_filter_events() {
    let handle = session();
    assert!(handle.select_component_story("Button", "Loud"));

    let props = effective_props(&handle);
    let click = props["onClick"].as_action().unwrap();
    let hover = props["onHover"].as_action().unwrap();

    click.invoke(&[ActionArg::ui_event("click"), ActionArg::value(json!("first"))]);
    hover.invoke(&[ActionArg::value(json!(2))]);

    handle.with(|s| {
        let log = s.action_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].action_name, "clicked");
        assert_eq!(log[0].args_summary, r#"["first"]"#);
        assert_eq!(log[1].action_name, "hovered");
        assert_eq!(log[1].args_summary, "[2]");
    });
}

// Serialization failure degrades to the fixed marker.
#[test]
fn test_unserializable_args_yield_fixed_marker() {
    let handle = selected_session();
    let props = effective_props(&handle);

    props["onClick"].invoke(&[ActionArg::Opaque("circular".into())]);

    handle.with(|s| {
        assert_eq!(s.action_log().len(), 1);
        assert_eq!(s.action_log()[0].args_summary, UNSERIALIZABLE_ARGS);
    });
}

// Full select / edit / invoke / reset walkthrough.
#[test]
fn test_button_default_end_to_end_scenario() {
    let handle = session();

    assert!(handle.select_component_story("Button", "Default"));
    handle.with(|s| {
        assert_eq!(s.live_props()["label"], PropValue::Text("Go".into()));
        assert!(s.action_log().is_empty());
    });

    handle.update_prop("label", PropValue::Text("Stop".into()));
    handle.with(|s| assert_eq!(s.live_props()["label"], PropValue::Text("Stop".into())));

    let props = effective_props(&handle);
    props["onClick"].invoke(&[]);
    handle.with(|s| {
        assert_eq!(s.action_log().len(), 1);
        assert_eq!(s.action_log()[0].action_name, "clicked");
        assert_eq!(s.action_log()[0].args_summary, "");
    });

    handle.reset_props();
    handle.with(|s| {
        assert_eq!(s.live_props()["label"], PropValue::Text("Go".into()));
        assert_eq!(s.action_log().len(), 1);
    });
}

#[test]
fn test_theme_toggle_is_orthogonal_to_selection() {
    let handle = selected_session();
    handle.update_prop("label", PropValue::Text("Edited".into()));
    handle.log_action("clicked", "");

    assert_eq!(handle.toggle_theme(), Theme::Light);
    assert_eq!(handle.toggle_theme(), Theme::Dark);

    handle.with(|s| {
        assert_eq!(s.live_props()["label"], PropValue::Text("Edited".into()));
        assert_eq!(s.action_log().len(), 1);
        assert!(s.selection().is_some());
    });
}

#[test]
fn test_available_systems_in_registration_order() {
    let handle = session();
    assert_eq!(handle.available_systems(), vec!["S", "T"]);
}

#[test]
fn test_wrapper_forwards_original_args_to_handler() {
    let handle = selected_session();
    let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_by_handler = Arc::clone(&seen);
    let handler: ActionHandler = Arc::new(move |args| {
        seen_by_handler.lock().unwrap().push(args.len());
    });
    handle.update_prop("onClick", PropValue::Handler(handler));

    let props = effective_props(&handle);
    // The event arg is filtered from the log but still reaches the handler.
    props["onClick"].invoke(&[ActionArg::ui_event("click"), ActionArg::value(json!(1))]);

    assert_eq!(*seen.lock().unwrap(), vec![2]);
    handle.with(|s| assert_eq!(s.action_log()[0].args_summary, "[1]"));
}

#[test]
fn test_wrapper_never_observes_a_stale_handler() {
    let handle = selected_session();
    let calls = Arc::new(AtomicUsize::new(0));

    // Build proxies BEFORE any handler exists.
    let props = effective_props(&handle);

    let counter = Arc::clone(&calls);
    let handler: ActionHandler = Arc::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    handle.update_prop("onClick", PropValue::Handler(handler));

    // The proxy resolves the handler at invoke time, so the late-installed
    // handler is still seen.
    props["onClick"].invoke(&[]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // And after the handler is replaced, the old one is never called again.
    let replacement: ActionHandler = Arc::new(|_| {});
    handle.update_prop("onClick", PropValue::Handler(replacement));
    props["onClick"].invoke(&[]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_handler_may_reenter_the_session() {
    let handle = selected_session();
    let reentrant = handle.clone();
    let handler: ActionHandler = Arc::new(move |_| {
        reentrant.update_prop("label", PropValue::Text("from handler".into()));
    });
    handle.update_prop("onClick", PropValue::Handler(handler));

    let props = effective_props(&handle);
    props["onClick"].invoke(&[]);

    handle.with(|s| {
        assert_eq!(s.live_props()["label"], PropValue::Text("from handler".into()));
        assert_eq!(s.action_log().len(), 1);
    });
}

#[test]
fn test_effective_props_empty_when_unselected() {
    let handle = session();
    assert!(effective_props(&handle).is_empty());
}

#[test]
fn test_effective_props_wrap_actions_and_pass_values() {
    let handle = selected_session();
    let props = effective_props(&handle);

    assert!(matches!(props["label"], EffectiveProp::Value(_)));
    assert!(props["onClick"].as_action().is_some());
    assert_eq!(props["onClick"].as_action().unwrap().action_name(), "clicked");
}

#[test]
fn test_log_entry_message_format() {
    let handle = selected_session();
    let props = effective_props(&handle);
    props["onClick"].invoke(&[ActionArg::value(json!("ok"))]);

    let messages = handle.log_messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("clicked with args: [\"ok\"]"), "{}", messages[0]);
}
