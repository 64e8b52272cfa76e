//! Button stories

use std::sync::Arc;

use crate::components::Button;
use crate::story::{ArgType, Story};

pub fn stories() -> Vec<(&'static str, Story)> {
    vec![
        (
            "Default",
            Story::new(Arc::new(Button))
                .arg("label", "Click me", ArgType::text())
                .arg(
                    "variant",
                    "primary",
                    ArgType::select(["primary", "secondary", "ghost"]),
                )
                .arg("disabled", false, ArgType::boolean())
                .action("onClick", "clicked"),
        ),
        (
            "Disabled",
            Story::new(Arc::new(Button))
                .arg("label", "Unavailable", ArgType::text())
                .arg(
                    "variant",
                    "secondary",
                    ArgType::select(["primary", "secondary", "ghost"]),
                )
                .arg("disabled", true, ArgType::boolean())
                .action("onClick", "clicked"),
        ),
    ]
}
