//! Built-in "Serenity" demo catalog.
//!
//! Story definitions are authored per component and assembled once into the
//! process-wide [`Registry`] behind a `OnceLock`. Registration order here is
//! sidebar display order.

mod badge_stories;
mod button_stories;
mod card_stories;
mod checkbox_stories;
mod input_field_stories;
mod select_stories;

use std::sync::{Arc, OnceLock};

use crate::registry::Registry;

/// Name of the built-in design system.
pub const SERENITY: &str = "Serenity";

static REGISTRY: OnceLock<Arc<Registry>> = OnceLock::new();

/// The assembled built-in catalog. Built on first access, immutable for the
/// process lifetime.
pub fn registry() -> Arc<Registry> {
    REGISTRY
        .get_or_init(|| {
            Arc::new(
                Registry::builder()
                    .component(SERENITY, "Badge", badge_stories::stories())
                    .component(SERENITY, "Button", button_stories::stories())
                    .component(SERENITY, "Card", card_stories::stories())
                    .component(SERENITY, "Checkbox", checkbox_stories::stories())
                    .component(SERENITY, "InputField", input_field_stories::stories())
                    .component(SERENITY, "Select", select_stories::stories())
                    .build(),
            )
        })
        .clone()
}
