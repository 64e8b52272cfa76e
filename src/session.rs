//! Selection & props state machine.
//!
//! The [`Session`] owns all mutable playground state: current selection,
//! live prop bag, action log, and theme. It has exactly two states
//! (unselected and selected), and every transition either applies fully or is
//! rejected as a whole no-op. There are no loading or error states; all
//! registry data is available synchronously.
//!
//! [`SessionHandle`] is the single serialization point: one writer (the
//! state machine), many readers (the presentation layer), all funneled
//! through a non-poisoning mutex.

use std::sync::Arc;

use chrono::{DateTime, Local};
use parking_lot::Mutex;
use tracing::debug;

use crate::registry::Registry;
use crate::story::{PropBag, PropValue, Story};
use crate::theme::Theme;

/// One intercepted callback invocation. Immutable once appended; the log is
/// ordered by append sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub action_name: String,
    /// Serialized argument summary; empty when the call carried no loggable
    /// arguments.
    pub args_summary: String,
}

impl LogEntry {
    pub fn new(action_name: &str, args_summary: &str) -> Self {
        LogEntry {
            timestamp: Local::now(),
            action_name: action_name.to_string(),
            args_summary: args_summary.to_string(),
        }
    }

    /// Display form, e.g. `[10:30:45] clicked with args: ["ok"]`.
    pub fn message(&self) -> String {
        if self.args_summary.is_empty() {
            format!("[{}] {}", self.timestamp.format("%H:%M:%S"), self.action_name)
        } else {
            format!(
                "[{}] {} with args: {}",
                self.timestamp.format("%H:%M:%S"),
                self.action_name,
                self.args_summary
            )
        }
    }
}

/// The currently selected component/story pair. Both names are resolvable in
/// the registry under the selected system for as long as this exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub component: String,
    pub story: String,
}

/// Mutable per-run playground state. Created per mount, discarded at exit;
/// nothing persists across restarts.
pub struct Session {
    registry: Arc<Registry>,
    theme: Theme,
    selected_system: String,
    selection: Option<Selection>,
    live_props: PropBag,
    action_log: Vec<LogEntry>,
}

impl Session {
    /// Create an unselected session rooted at the registry's first system.
    pub fn new(registry: Arc<Registry>, theme: Theme) -> Self {
        let selected_system = registry.first_system().unwrap_or_default().to_string();
        Session {
            registry,
            theme,
            selected_system,
            selection: None,
            live_props: PropBag::new(),
            action_log: Vec::new(),
        }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn selected_system(&self) -> &str {
        &self.selected_system
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn live_props(&self) -> &PropBag {
        &self.live_props
    }

    pub fn action_log(&self) -> &[LogEntry] {
        &self.action_log
    }

    /// Ordered design system names.
    pub fn available_systems(&self) -> Vec<String> {
        self.registry.systems().map(str::to_string).collect()
    }

    /// Registry lookup of the current selection triple. `None` when
    /// unselected or when the triple no longer resolves.
    pub fn current_story_data(&self) -> Option<&Story> {
        let selection = self.selection.as_ref()?;
        self.registry
            .lookup(&self.selected_system, &selection.component, &selection.story)
    }

    /// Switch the selection root to another design system, clearing
    /// component, story, props, and log. Unknown system: no-op.
    pub fn select_system(&mut self, system: &str) -> bool {
        if self.registry.system(system).is_none() {
            debug!(system, "ignoring selection of unknown design system");
            return false;
        }
        self.selected_system = system.to_string();
        self.selection = None;
        self.live_props = PropBag::new();
        self.action_log = Vec::new();
        debug!(system, "selected design system");
        true
    }

    /// Select a component/story pair under the current system. On success
    /// the live props are seeded from a fresh copy of the story defaults and
    /// the action log is cleared, atomically. Unresolvable pair: no-op, the
    /// prior selection (if any) is preserved unchanged.
    pub fn select_component_story(&mut self, component: &str, story: &str) -> bool {
        let registry = Arc::clone(&self.registry);
        let Some(data) = registry.lookup(&self.selected_system, component, story) else {
            debug!(component, story, "ignoring selection of unknown story");
            return false;
        };
        self.selection = Some(Selection {
            component: component.to_string(),
            story: story.to_string(),
        });
        self.live_props = data.default_args.clone();
        self.action_log = Vec::new();
        debug!(component, story, "selected story");
        true
    }

    /// Replace exactly one live prop. Everything else, including the action
    /// log, is untouched. No-op when unselected.
    pub fn update_prop(&mut self, name: &str, value: PropValue) -> bool {
        if self.selection.is_none() {
            debug!(prop = name, "ignoring prop update with no selection");
            return false;
        }
        debug!(prop = name, value = ?value, "updating prop");
        self.live_props.insert(name.to_string(), value);
        true
    }

    /// Restore the live props to the story defaults (fresh copy). Reset
    /// concerns only the edited values: the action log is explicitly kept.
    pub fn reset_props(&mut self) -> bool {
        let registry = Arc::clone(&self.registry);
        let Some(selection) = self.selection.as_ref() else {
            return false;
        };
        let Some(data) =
            registry.lookup(&self.selected_system, &selection.component, &selection.story)
        else {
            return false;
        };
        self.live_props = data.default_args.clone();
        debug!("reset props to story defaults");
        true
    }

    /// Append an action-log entry. Internal transition used by the action
    /// interceptor; never rejected.
    pub fn log_action(&mut self, action_name: &str, args_summary: &str) {
        debug!(action = action_name, "logging action invocation");
        self.action_log.push(LogEntry::new(action_name, args_summary));
    }

    /// Flip Light↔Dark. Orthogonal to selection: never resets props or log.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!(theme = self.theme.label(), "toggled theme");
        self.theme
    }
}

/// Shared handle to a [`Session`]. Clones refer to the same session; all
/// transitions are serialized through the inner mutex, which keeps the
/// single-writer model intact if the embedding runtime is concurrent.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<Session>>,
}

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        SessionHandle {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Read from the session. The closure must not call back into the
    /// handle; the lock is held for its duration.
    pub fn with<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Apply a transition. Same re-entrancy rule as [`Self::with`].
    pub fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn select_system(&self, system: &str) -> bool {
        self.update(|s| s.select_system(system))
    }

    pub fn select_component_story(&self, component: &str, story: &str) -> bool {
        self.update(|s| s.select_component_story(component, story))
    }

    pub fn update_prop(&self, name: &str, value: PropValue) -> bool {
        self.update(|s| s.update_prop(name, value))
    }

    pub fn reset_props(&self) -> bool {
        self.update(|s| s.reset_props())
    }

    pub fn log_action(&self, action_name: &str, args_summary: &str) {
        self.update(|s| s.log_action(action_name, args_summary));
    }

    pub fn toggle_theme(&self) -> Theme {
        self.update(|s| s.toggle_theme())
    }

    pub fn theme(&self) -> Theme {
        self.with(|s| s.theme())
    }

    pub fn available_systems(&self) -> Vec<String> {
        self.with(|s| s.available_systems())
    }

    pub fn selection(&self) -> Option<Selection> {
        self.with(|s| s.selection().cloned())
    }

    /// Clone of the current story data, if any.
    pub fn current_story(&self) -> Option<Story> {
        self.with(|s| s.current_story_data().cloned())
    }

    /// Snapshot of the action log messages, oldest first.
    pub fn log_messages(&self) -> Vec<String> {
        self.with(|s| s.action_log().iter().map(LogEntry::message).collect())
    }
}
