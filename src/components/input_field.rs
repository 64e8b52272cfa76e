use super::text_prop;
use crate::actions::EffectiveProps;
use crate::story::Renderable;

/// Single-line text input with label and placeholder.
pub struct InputField;

impl Renderable for InputField {
    fn name(&self) -> &'static str {
        "InputField"
    }

    fn preview(&self, props: &EffectiveProps) -> String {
        let label = text_prop(props, "label", "input");
        let value = text_prop(props, "value", "");
        let shown = if value.is_empty() {
            // Placeholder shows dimly when there's no value
            text_prop(props, "placeholder", "")
        } else {
            value
        };
        format!("{label}: [{shown}]")
    }
}
