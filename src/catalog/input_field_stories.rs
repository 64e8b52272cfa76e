//! InputField stories

use std::sync::Arc;

use crate::components::InputField;
use crate::story::{ArgType, Story};

pub fn stories() -> Vec<(&'static str, Story)> {
    vec![(
        "Default",
        Story::new(Arc::new(InputField))
            .arg("label", "Email", ArgType::text())
            .arg("placeholder", "you@example.com", ArgType::text())
            .arg("value", "", ArgType::text())
            .action("onInput", "input"),
    )]
}
