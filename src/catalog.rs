// ABOUTME: Deity/mantra catalog and mood definitions.
// ABOUTME: Compiled-in defaults, replaceable via ~/.shanti/catalog.toml.

use std::path::Path;

use serde::Deserialize;

use crate::config::Config;

/// A selectable chant target with its mantra text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Deity {
    pub name: String,
    pub mantra: String,
}

/// User-declared emotional state, used to route into the assistant view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Stressed,
    LowEnergy,
    Peaceful,
    Devotional,
}

impl Mood {
    /// All moods in display order.
    pub const ALL: [Mood; 4] = [
        Mood::Stressed,
        Mood::LowEnergy,
        Mood::Peaceful,
        Mood::Devotional,
    ];

    /// English label shown in the mood grid.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Stressed => "Tensed",
            Mood::LowEnergy => "Low Energy",
            Mood::Peaceful => "Peaceful",
            Mood::Devotional => "Devotional",
        }
    }

    /// Hindi label shown alongside the English one.
    pub fn hindi(&self) -> &'static str {
        match self {
            Mood::Stressed => "तनाव",
            Mood::LowEnergy => "थकान",
            Mood::Peaceful => "शांत",
            Mood::Devotional => "भक्ति",
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "deity")]
    deities: Vec<Deity>,
}

fn default_deities() -> Vec<Deity> {
    [
        ("Ram", "श्री राम जय राम जय जय राम"),
        ("Krishna", "हरे कृष्ण हरे कृष्ण कृष्ण कृष्ण हरे हरे"),
        ("Shiva", "ॐ नमः शिवाय"),
        ("Hanuman", "ॐ हं हनुमते नमः"),
        ("Durga", "ॐ दुं दुर्गायै नमः"),
        ("Ganesha", "ॐ गं गणपतये नमः"),
    ]
    .into_iter()
    .map(|(name, mantra)| Deity {
        name: name.to_string(),
        mantra: mantra.to_string(),
    })
    .collect()
}

/// Load the deity catalog: ~/.shanti/catalog.toml if present and valid,
/// otherwise the compiled-in defaults. An empty or unparsable override
/// falls back to the defaults.
pub fn load_catalog() -> Vec<Deity> {
    load_catalog_from(&Config::catalog_path())
}

/// Load a catalog from an explicit path (for testing).
pub fn load_catalog_from(path: &Path) -> Vec<Deity> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return default_deities();
    };
    match toml::from_str::<CatalogFile>(&content) {
        Ok(file) if !file.deities.is_empty() => file.deities,
        _ => default_deities(),
    }
}
