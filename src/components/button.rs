use super::{text_prop, truthy_prop};
use crate::actions::EffectiveProps;
use crate::story::Renderable;

/// Push button with a label, a visual variant, and a disabled state.
pub struct Button;

impl Renderable for Button {
    fn name(&self) -> &'static str {
        "Button"
    }

    fn preview(&self, props: &EffectiveProps) -> String {
        let label = text_prop(props, "label", "Button");
        let variant = text_prop(props, "variant", "primary");
        let mut line = format!("[ {label} ] ({variant})");
        if truthy_prop(props, "disabled") {
            line.push_str(" (disabled)");
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::EffectiveProp;
    use crate::story::PropValue;

    #[test]
    fn test_button_preview_reflects_props() {
        let mut props = EffectiveProps::new();
        props.insert(
            "label".into(),
            EffectiveProp::Value(PropValue::Text("Go".into())),
        );
        props.insert(
            "variant".into(),
            EffectiveProp::Value(PropValue::Text("ghost".into())),
        );
        props.insert("disabled".into(), EffectiveProp::Value(PropValue::Bool(true)));
        assert_eq!(Button.preview(&props), "[ Go ] (ghost) (disabled)");
    }
}
