use super::text_prop;
use crate::actions::EffectiveProps;
use crate::story::Renderable;

/// Small status label with a color token.
pub struct Badge;

impl Renderable for Badge {
    fn name(&self) -> &'static str {
        "Badge"
    }

    fn preview(&self, props: &EffectiveProps) -> String {
        let label = text_prop(props, "label", "badge");
        let color = text_prop(props, "color", "neutral");
        format!("({label}) [{color}]")
    }
}
