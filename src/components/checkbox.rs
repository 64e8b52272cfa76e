use super::{text_prop, truthy_prop};
use crate::actions::EffectiveProps;
use crate::story::Renderable;

/// Labeled checkbox.
pub struct Checkbox;

impl Renderable for Checkbox {
    fn name(&self) -> &'static str {
        "Checkbox"
    }

    fn preview(&self, props: &EffectiveProps) -> String {
        let label = text_prop(props, "label", "checkbox");
        let mark = if truthy_prop(props, "checked") { "x" } else { " " };
        format!("[{mark}] {label}")
    }
}
