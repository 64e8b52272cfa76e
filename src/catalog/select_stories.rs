//! Select stories

use std::sync::Arc;

use crate::components::SelectBox;
use crate::story::{ArgType, Story};

pub fn stories() -> Vec<(&'static str, Story)> {
    vec![(
        "Default",
        Story::new(Arc::new(SelectBox))
            .arg("label", "Session length", ArgType::text())
            .arg(
                "selected",
                "10 min",
                ArgType::select(["5 min", "10 min", "20 min"]),
            )
            .action("onChange", "changed"),
    )]
}
