use super::text_prop;
use crate::actions::EffectiveProps;
use crate::story::Renderable;

/// Content card with image, title, duration, and category.
pub struct Card;

impl Renderable for Card {
    fn name(&self) -> &'static str {
        "Card"
    }

    fn preview(&self, props: &EffectiveProps) -> String {
        let title = text_prop(props, "title", "Untitled");
        let duration = text_prop(props, "duration", "");
        let category = text_prop(props, "category", "");
        let image_url = text_prop(props, "imageUrl", "");
        let mut lines = vec![format!("+-- {title} --+")];
        if !category.is_empty() || !duration.is_empty() {
            lines.push(format!("|  {category} · {duration}"));
        }
        if !image_url.is_empty() {
            lines.push(format!("|  img: {image_url}"));
        }
        lines.push("+----+".to_string());
        lines.join("\n")
    }
}
