//! Static catalog registry: design system → component → story.
//!
//! Built once at startup from independently authored story definitions and
//! immutable for the process lifetime. Lookups are total: absent keys return
//! `None` so callers can apply the no-op-on-unknown-selection policy.

use indexmap::IndexMap;
use serde_json::Value;

use crate::story::Story;

/// Stories of one component, keyed by story name in display order.
pub type StoryMap = IndexMap<String, Story>;

/// Components of one design system, keyed by component name in display order.
pub type ComponentCatalog = IndexMap<String, StoryMap>;

/// One design system and its component catalog.
#[derive(Debug, Clone)]
pub struct DesignSystem {
    pub name: String,
    pub components: ComponentCatalog,
}

/// The read-only catalog of design systems. Construction happens through
/// [`RegistryBuilder`]; after `build` the registry is never mutated.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    systems: IndexMap<String, DesignSystem>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Design system names in registration order.
    pub fn systems(&self) -> impl Iterator<Item = &str> {
        self.systems.keys().map(String::as_str)
    }

    /// The first registered system, used as the initial selection root.
    pub fn first_system(&self) -> Option<&str> {
        self.systems.keys().next().map(String::as_str)
    }

    pub fn system(&self, name: &str) -> Option<&DesignSystem> {
        self.systems.get(name)
    }

    /// Total lookup over the nested structure. Never panics for structurally
    /// valid but absent keys.
    pub fn lookup(&self, system: &str, component: &str, story: &str) -> Option<&Story> {
        self.systems
            .get(system)?
            .components
            .get(component)?
            .get(story)
    }

    /// JSON description of the catalog metadata (args + arg types), for the
    /// `dump` command. Renderable references stay opaque.
    pub fn describe(&self) -> Value {
        let mut systems = serde_json::Map::new();
        for (system_name, system) in &self.systems {
            let mut components = serde_json::Map::new();
            for (component_name, stories) in &system.components {
                let mut story_map = serde_json::Map::new();
                for (story_name, story) in stories {
                    let args: serde_json::Map<String, Value> = story
                        .default_args
                        .iter()
                        .map(|(k, v)| (k.clone(), v.describe()))
                        .collect();
                    let arg_types: serde_json::Map<String, Value> = story
                        .arg_types
                        .iter()
                        .map(|(k, t)| (k.clone(), serde_json::json!(t)))
                        .collect();
                    story_map.insert(
                        story_name.clone(),
                        serde_json::json!({
                            "component": story.component.name(),
                            "args": args,
                            "argTypes": arg_types,
                        }),
                    );
                }
                components.insert(component_name.clone(), Value::Object(story_map));
            }
            systems.insert(system_name.clone(), Value::Object(components));
        }
        Value::Object(systems)
    }
}

/// Assembles the nested catalog maps. Assembly is assumed total and correct;
/// cross-consistency between `arg_types` and `default_args` is an authoring
/// pre-condition, not checked here.
#[derive(Default)]
pub struct RegistryBuilder {
    systems: IndexMap<String, DesignSystem>,
}

impl RegistryBuilder {
    /// Register one component's stories under a design system. Systems and
    /// components are created on first mention; registration order is
    /// display order.
    pub fn component(
        mut self,
        system: &str,
        component: &str,
        stories: Vec<(&str, Story)>,
    ) -> Self {
        let entry = self
            .systems
            .entry(system.to_string())
            .or_insert_with(|| DesignSystem {
                name: system.to_string(),
                components: ComponentCatalog::new(),
            });
        let story_map = entry
            .components
            .entry(component.to_string())
            .or_default();
        for (name, story) in stories {
            story_map.insert(name.to_string(), story);
        }
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            systems: self.systems,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::EffectiveProps;
    use crate::story::{ArgType, Renderable};
    use std::sync::Arc;

    struct Null;
    impl Renderable for Null {
        fn name(&self) -> &'static str {
            "Null"
        }
        fn preview(&self, _props: &EffectiveProps) -> String {
            String::new()
        }
    }

    fn story() -> Story {
        Story::new(Arc::new(Null)).arg("label", "Go", ArgType::text())
    }

    fn registry() -> Registry {
        Registry::builder()
            .component("S", "Button", vec![("Default", story()), ("Other", story())])
            .component("S", "Badge", vec![("Default", story())])
            .build()
    }

    #[test]
    fn test_lookup_resolves_registered_story() {
        let reg = registry();
        assert!(reg.lookup("S", "Button", "Default").is_some());
        assert!(reg.lookup("S", "Badge", "Default").is_some());
    }

    #[test]
    fn test_lookup_is_total_over_absent_keys() {
        let reg = registry();
        assert!(reg.lookup("Nope", "Button", "Default").is_none());
        assert!(reg.lookup("S", "Nope", "Default").is_none());
        assert!(reg.lookup("S", "Button", "Nope").is_none());
        assert!(Registry::default().lookup("S", "Button", "Default").is_none());
    }

    #[test]
    fn test_registration_order_is_display_order() {
        let reg = registry();
        assert_eq!(reg.first_system(), Some("S"));
        let components: Vec<_> = reg.system("S").unwrap().components.keys().cloned().collect();
        assert_eq!(components, vec!["Button", "Badge"]);
        let stories: Vec<_> = reg.system("S").unwrap().components["Button"]
            .keys()
            .cloned()
            .collect();
        assert_eq!(stories, vec!["Default", "Other"]);
    }

    #[test]
    fn test_describe_exposes_metadata_not_internals() {
        let reg = registry();
        let dump = reg.describe();
        assert_eq!(dump["S"]["Button"]["Default"]["component"], "Null");
        assert_eq!(dump["S"]["Button"]["Default"]["args"]["label"], "Go");
        assert_eq!(
            dump["S"]["Button"]["Default"]["argTypes"]["label"]["control"]["kind"],
            "text"
        );
    }
}
