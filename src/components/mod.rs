//! Demo renderable components backing the built-in catalog.
//!
//! These render plain-text previews for the terminal canvas. The core never
//! looks inside them: each is an opaque [`crate::story::Renderable`] that
//! receives the intercepted prop bag and nothing else.

mod badge;
mod button;
mod card;
mod checkbox;
mod input_field;
mod select_box;

pub use badge::Badge;
pub use button::Button;
pub use card::Card;
pub use checkbox::Checkbox;
pub use input_field::InputField;
pub use select_box::SelectBox;

use crate::actions::EffectiveProps;

/// Text of a value prop, or a fallback when absent or action-typed.
fn text_prop(props: &EffectiveProps, name: &str, fallback: &str) -> String {
    props
        .get(name)
        .and_then(|p| p.text())
        .unwrap_or_else(|| fallback.to_string())
}

/// Truthiness of a prop; absent props read as false.
fn truthy_prop(props: &EffectiveProps, name: &str) -> bool {
    props.get(name).is_some_and(|p| p.is_truthy())
}
