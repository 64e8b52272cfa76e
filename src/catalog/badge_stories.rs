//! Badge stories

use std::sync::Arc;

use crate::components::Badge;
use crate::story::{ArgType, Story};

pub fn stories() -> Vec<(&'static str, Story)> {
    vec![(
        "Default",
        Story::new(Arc::new(Badge))
            .arg("label", "New", ArgType::text())
            .arg(
                "color",
                "sage",
                ArgType::select(["sage", "terracotta", "sand", "neutral"]),
            ),
    )]
}
