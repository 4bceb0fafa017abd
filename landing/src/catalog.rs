//! Static content catalog.
//!
//! All page copy lives here, defined at compile time and rendered in list
//! order. The projections (`feature_rows`, `numbered`) are pure: same
//! catalog in, same render plan out. The only failure mode is a malformed
//! entry, which [`validate`] rejects at startup before anything mounts.

use thiserror::Error;

/// One entry in the feature showcase. Display order matters: the image side
/// alternates by index parity and the sequence badge derives from the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// Opaque image locator - local path or remote URL, not validated.
    pub image: &'static str,
}

pub const FEATURES: &[FeatureEntry] = &[
    FeatureEntry {
        title: "Endless Gameplay Levels",
        description: "Let's see how many levels and trashes you can collect and recycle!",
        image: "img/gameplay1.png",
    },
    FeatureEntry {
        title: "Immersive 3D World",
        description: "Explore a vast, low-poly archipelago teeming with environmental challenges.",
        image: "https://placehold.co/600x400/0f172a/f59e0b?text=Immersive+3D+World",
    },
    FeatureEntry {
        title: "Character Switching",
        description: "Adapt to the mission. Switch between pilots to utilize different skills.",
        image: "img/character-switching.png",
    },
    FeatureEntry {
        title: "Picking Up Trash",
        description: "Master the physics-based claw mechanism to clean up the islands.",
        image: "img/heli-pickup-trash.png",
    },
    FeatureEntry {
        title: "Recycle, Craft, Profit",
        description: "Process raw waste into usable materials through the crafting system.",
        image: "img/crafting.png",
    },
    FeatureEntry {
        title: "Adrenaline",
        description: "Keep your eye on the fuel, or else....",
        image: "img/buy-fuel.png",
    },
];

pub const CHALLENGES: &[&str] = &[
    "Built on LibGDX (Java) - A raw coding challenge compared to Unity/Godot engines.",
    "Spontaneous Game Concept - Iterative design process.",
    "Small Squad - Only two developers handling code, art, and design.",
];

pub const OPPORTUNITIES: &[&str] = &[
    "Scalable Gameplay - Potential for larger maps and complex economies.",
    "Multi-Platform Publishing - Targeting Play Store, Steam, and Itch.io.",
    "Online Multiplayer - Future coop rescue missions.",
    "Monetization - Sustainable aesthetic models.",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{list} list is empty")]
    EmptyList { list: &'static str },
    #[error("feature {index} has a blank {field}")]
    BlankFeatureField { index: usize, field: &'static str },
    #[error("{list} entry {index} is blank")]
    BlankEntry { list: &'static str, index: usize },
}

/// Check every list once at startup. A catalog that fails here is a
/// packaging mistake; the caller refuses to mount.
pub fn validate() -> Result<(), CatalogError> {
    validate_features(FEATURES)?;
    validate_list("challenges", CHALLENGES)?;
    validate_list("opportunities", OPPORTUNITIES)
}

fn validate_features(entries: &[FeatureEntry]) -> Result<(), CatalogError> {
    if entries.is_empty() {
        return Err(CatalogError::EmptyList { list: "features" });
    }
    for (index, entry) in entries.iter().enumerate() {
        for (field, value) in [
            ("title", entry.title),
            ("description", entry.description),
            ("image", entry.image),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::BlankFeatureField { index, field });
            }
        }
    }
    Ok(())
}

fn validate_list(list: &'static str, entries: &[&str]) -> Result<(), CatalogError> {
    if entries.is_empty() {
        return Err(CatalogError::EmptyList { list });
    }
    for (index, entry) in entries.iter().enumerate() {
        if entry.trim().is_empty() {
            return Err(CatalogError::BlankEntry { list, index });
        }
    }
    Ok(())
}

/// Which side of a feature row the image lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    ImageLeft,
    ImageRight,
}

impl Side {
    pub fn of(index: usize) -> Self {
        if index % 2 == 0 {
            Side::ImageLeft
        } else {
            Side::ImageRight
        }
    }

    /// Row class; CSS flips the flex direction for the reversed rows.
    pub fn row_class(self) -> &'static str {
        match self {
            Side::ImageLeft => "feature-row",
            Side::ImageRight => "feature-row reverse",
        }
    }
}

/// Render plan for one row of the feature showcase.
#[derive(Clone, Debug)]
pub struct FeatureRow {
    pub label: String,
    pub side: Side,
    pub entry: &'static FeatureEntry,
}

/// Project the feature catalog into its render plan, in catalog order.
pub fn feature_rows() -> Vec<FeatureRow> {
    FEATURES
        .iter()
        .enumerate()
        .map(|(index, entry)| FeatureRow {
            label: sequence_label(index),
            side: Side::of(index),
            entry,
        })
        .collect()
}

/// 1-based, zero-padded sequence badge: "01", "02", ...
pub fn sequence_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Pair every entry of a string list with its sequence badge, in list order.
pub fn numbered(entries: &'static [&'static str]) -> Vec<(String, &'static str)> {
    entries
        .iter()
        .enumerate()
        .map(|(index, text)| (sequence_label(index), *text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shipped_catalog_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn feature_rows_cover_catalog_in_order() {
        let rows = feature_rows();
        assert_eq!(rows.len(), FEATURES.len());
        for (index, row) in rows.iter().enumerate() {
            assert_eq!(row.label, format!("{:02}", index + 1));
            assert_eq!(row.entry, &FEATURES[index]);
        }
    }

    #[test]
    fn feature_sides_alternate_by_parity() {
        for (index, row) in feature_rows().iter().enumerate() {
            let expected = if index % 2 == 0 {
                Side::ImageLeft
            } else {
                Side::ImageRight
            };
            assert_eq!(row.side, expected, "row {index}");
        }
    }

    #[test]
    fn numbered_preserves_order_and_length() {
        let challenges = numbered(CHALLENGES);
        assert_eq!(challenges.len(), CHALLENGES.len());
        for (index, (label, text)) in challenges.iter().enumerate() {
            assert_eq!(label, &format!("{:02}", index + 1));
            assert_eq!(*text, CHALLENGES[index]);
        }

        let opportunities = numbered(OPPORTUNITIES);
        assert_eq!(opportunities.len(), OPPORTUNITIES.len());
        assert_eq!(opportunities[0].0, "01");
        assert_eq!(opportunities[3].0, "04");
    }

    #[test]
    fn sequence_labels_stay_two_digits() {
        assert_eq!(sequence_label(0), "01");
        assert_eq!(sequence_label(8), "09");
        assert_eq!(sequence_label(9), "10");
    }

    #[test]
    fn blank_feature_field_is_rejected() {
        let bad = [FeatureEntry {
            title: "Endless Gameplay Levels",
            description: "   ",
            image: "img/gameplay1.png",
        }];
        assert_eq!(
            validate_features(&bad),
            Err(CatalogError::BlankFeatureField {
                index: 0,
                field: "description",
            })
        );
    }

    #[test]
    fn blank_list_entry_is_rejected() {
        assert_eq!(
            validate_list("challenges", &["fine", ""]),
            Err(CatalogError::BlankEntry {
                list: "challenges",
                index: 1,
            })
        );
    }

    #[test]
    fn empty_lists_are_rejected() {
        assert_eq!(
            validate_features(&[]),
            Err(CatalogError::EmptyList { list: "features" })
        );
        assert_eq!(
            validate_list("opportunities", &[]),
            Err(CatalogError::EmptyList {
                list: "opportunities"
            })
        );
    }
}
