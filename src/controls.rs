//! Control dispatcher: maps a prop's control metadata to an editable widget.
//!
//! [`render_control`] is a pure, stateless function with no memory of past
//! renders. Dispatch is exhaustive over control kinds, and unrecognized
//! kinds degrade to a placeholder widget rather than breaking the session.

use crate::session::SessionHandle;
use crate::story::{ArgType, ControlSpec, PropValue};

/// An editable-widget capability produced for one control-typed prop.
/// Applying input funnels into `Session::update_prop`; the widget itself
/// holds no session state.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlWidget {
    /// Single-line text input. Applied input becomes the prop's value as a
    /// raw string, no coercion.
    TextInput { prop: String, value: String },
    /// Toggle. Applied input becomes a native boolean.
    Toggle { prop: String, checked: bool },
    /// Enumerated choice constrained to `options`. `selected` is `None`
    /// when the current value matches no option; the widget still renders.
    Select {
        prop: String,
        options: Vec<String>,
        selected: Option<usize>,
    },
    /// Neutral placeholder for control kinds this build doesn't know.
    Unsupported { prop: String, kind: String },
}

/// Render one control from its spec and the current live value. A missing
/// current value renders as an empty/unchecked/selection-less widget; that
/// is an authoring gap, not a runtime error.
pub fn render_control(
    prop_name: &str,
    spec: &ControlSpec,
    current: Option<&PropValue>,
) -> ControlWidget {
    match spec {
        ControlSpec::Text => ControlWidget::TextInput {
            prop: prop_name.to_string(),
            value: current.map(PropValue::display_text).unwrap_or_default(),
        },
        ControlSpec::Boolean => ControlWidget::Toggle {
            prop: prop_name.to_string(),
            checked: current.is_some_and(PropValue::is_truthy),
        },
        ControlSpec::Select { options } => {
            let current_text = current.map(PropValue::display_text);
            let selected = current_text
                .as_deref()
                .and_then(|text| options.iter().position(|o| o.as_str() == text));
            ControlWidget::Select {
                prop: prop_name.to_string(),
                options: options.clone(),
                selected,
            }
        }
        ControlSpec::Unknown { name } => ControlWidget::Unsupported {
            prop: prop_name.to_string(),
            kind: name.clone(),
        },
    }
}

impl ControlWidget {
    pub fn prop(&self) -> &str {
        match self {
            ControlWidget::TextInput { prop, .. }
            | ControlWidget::Toggle { prop, .. }
            | ControlWidget::Select { prop, .. }
            | ControlWidget::Unsupported { prop, .. } => prop,
        }
    }

    /// Apply raw user input through the session. Returns whether a prop
    /// update was actually dispatched.
    ///
    /// - Text: the raw string becomes the value.
    /// - Toggle: "true"/"false" (or "on"/"off") set the value, anything
    ///   else flips the rendered state.
    /// - Select: input must name one of the options (or be its index);
    ///   anything else is a no-op.
    /// - Unsupported: always a no-op.
    pub fn apply(&self, session: &SessionHandle, raw: &str) -> bool {
        match self {
            ControlWidget::TextInput { prop, .. } => {
                session.update_prop(prop, PropValue::Text(raw.to_string()))
            }
            ControlWidget::Toggle { prop, checked } => {
                let value = match raw.trim() {
                    "true" | "on" => true,
                    "false" | "off" => false,
                    _ => !checked,
                };
                session.update_prop(prop, PropValue::Bool(value))
            }
            ControlWidget::Select { prop, options, .. } => {
                let chosen = options
                    .iter()
                    .find(|o| o.as_str() == raw.trim())
                    .cloned()
                    .or_else(|| {
                        raw.trim()
                            .parse::<usize>()
                            .ok()
                            .and_then(|i| options.get(i).cloned())
                    });
                match chosen {
                    Some(option) => session.update_prop(prop, PropValue::Text(option)),
                    None => false,
                }
            }
            ControlWidget::Unsupported { .. } => false,
        }
    }

    /// One-line rendering for the controls panel.
    pub fn describe(&self) -> String {
        match self {
            ControlWidget::TextInput { prop, value } => {
                format!("{prop} [text] = {value:?}")
            }
            ControlWidget::Toggle { prop, checked } => {
                format!("{prop} [{}]", if *checked { "x" } else { " " })
            }
            ControlWidget::Select {
                prop,
                options,
                selected,
            } => {
                let rendered: Vec<String> = options
                    .iter()
                    .enumerate()
                    .map(|(i, o)| {
                        if Some(i) == *selected {
                            format!("({o})")
                        } else {
                            o.clone()
                        }
                    })
                    .collect();
                format!("{prop} [select] {}", rendered.join(" | "))
            }
            ControlWidget::Unsupported { prop, kind } => {
                format!("{prop} [unsupported control: {kind}]")
            }
        }
    }
}

/// Widgets for every control-typed prop of the current story, in arg-type
/// order. Action-typed props never appear here. Empty when unselected.
pub fn control_widgets(session: &SessionHandle) -> Vec<ControlWidget> {
    session.with(|s| {
        let Some(story) = s.current_story_data() else {
            return Vec::new();
        };
        story
            .arg_types
            .iter()
            .filter_map(|(name, arg_type)| match arg_type {
                ArgType::Control { control } => {
                    Some(render_control(name, control, s.live_props().get(name)))
                }
                ArgType::Action { .. } => None,
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_dispatch_shows_current_value() {
        let widget = render_control("label", &ControlSpec::Text, Some(&PropValue::Text("Go".into())));
        assert_eq!(
            widget,
            ControlWidget::TextInput {
                prop: "label".into(),
                value: "Go".into()
            }
        );
    }

    #[test]
    fn test_text_dispatch_with_missing_default_renders_empty() {
        let widget = render_control("label", &ControlSpec::Text, None);
        assert_eq!(
            widget,
            ControlWidget::TextInput {
                prop: "label".into(),
                value: String::new()
            }
        );
    }

    #[test]
    fn test_boolean_dispatch_uses_truthiness() {
        let widget = render_control("disabled", &ControlSpec::Boolean, Some(&PropValue::Bool(true)));
        assert_eq!(
            widget,
            ControlWidget::Toggle {
                prop: "disabled".into(),
                checked: true
            }
        );
        let unchecked = render_control("disabled", &ControlSpec::Boolean, None);
        assert_eq!(
            unchecked,
            ControlWidget::Toggle {
                prop: "disabled".into(),
                checked: false
            }
        );
    }

    #[test]
    fn test_select_dispatch_finds_matching_option() {
        let spec = ControlSpec::Select {
            options: vec!["primary".into(), "ghost".into()],
        };
        let widget = render_control("variant", &spec, Some(&PropValue::Text("ghost".into())));
        match widget {
            ControlWidget::Select { selected, .. } => assert_eq!(selected, Some(1)),
            other => panic!("expected select widget, got {other:?}"),
        }
    }

    #[test]
    fn test_select_dispatch_with_unmatched_value_still_renders() {
        let spec = ControlSpec::Select {
            options: vec!["primary".into(), "ghost".into()],
        };
        let widget = render_control("variant", &spec, Some(&PropValue::Text("neon".into())));
        match widget {
            ControlWidget::Select { selected, options, .. } => {
                assert_eq!(selected, None);
                assert_eq!(options.len(), 2);
            }
            other => panic!("expected select widget, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kind_degrades_to_placeholder() {
        let spec = ControlSpec::Unknown {
            name: "color-wheel".into(),
        };
        let widget = render_control("tint", &spec, Some(&PropValue::Text("#fff".into())));
        assert_eq!(
            widget,
            ControlWidget::Unsupported {
                prop: "tint".into(),
                kind: "color-wheel".into()
            }
        );
        assert!(widget.describe().contains("unsupported control"));
    }
}
