//! Checkbox stories

use std::sync::Arc;

use crate::components::Checkbox;
use crate::story::{ArgType, Story};

pub fn stories() -> Vec<(&'static str, Story)> {
    vec![
        (
            "Default",
            Story::new(Arc::new(Checkbox))
                .arg("label", "Remember me", ArgType::text())
                .arg("checked", false, ArgType::boolean())
                .action("onChange", "changed"),
        ),
        (
            "Checked",
            Story::new(Arc::new(Checkbox))
                .arg("label", "Subscribed", ArgType::text())
                .arg("checked", true, ArgType::boolean())
                .action("onChange", "changed"),
        ),
    ]
}
