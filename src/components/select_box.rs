use super::text_prop;
use crate::actions::EffectiveProps;
use crate::story::Renderable;

/// Dropdown showing the currently selected option.
pub struct SelectBox;

impl Renderable for SelectBox {
    fn name(&self) -> &'static str {
        "Select"
    }

    fn preview(&self, props: &EffectiveProps) -> String {
        let label = text_prop(props, "label", "select");
        let selected = text_prop(props, "selected", "");
        format!("{label}: <{selected} v>")
    }
}
