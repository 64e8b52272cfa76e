//! Card stories

use std::sync::Arc;

use crate::components::Card;
use crate::story::{ArgType, Story};

pub fn stories() -> Vec<(&'static str, Story)> {
    vec![(
        "Default",
        Story::new(Arc::new(Card))
            .arg(
                "imageUrl",
                "https://images.unsplash.com/photo-1502485019203-a7251434b6b6?q=80&w=800",
                ArgType::text(),
            )
            .arg("title", "Morning Gratitude", ArgType::text())
            .arg("duration", "10 min", ArgType::text())
            .arg("category", "Mindfulness", ArgType::text()),
    )]
}
