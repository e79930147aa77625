//! Faction categories that group overlays into toggle layers.

/// The faction/grouping an overlay belongs to. Each category corresponds
/// to one toggleable layer group on the geometry surface, and an overlay
/// is a member of exactly one group at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Uncontested locations; also the fallback for anything unrecognized.
    #[default]
    Neutral,
    /// Alliance-held locations.
    Alliance,
    /// Horde-held locations.
    Horde,
    /// World events and seasonal content.
    Events,
}

impl Category {
    /// All categories, in toggle-group display order.
    pub const ALL: [Category; 4] = [
        Category::Neutral,
        Category::Alliance,
        Category::Horde,
        Category::Events,
    ];

    /// The wire/display key for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Neutral => "neutral",
            Category::Alliance => "alliance",
            Category::Horde => "horde",
            Category::Events => "events",
        }
    }

    /// Normalize a raw category string to a known category.
    ///
    /// Total function: any string that is not one of the four known keys
    /// (including empty or `None`-turned-empty input) maps to `Neutral`.
    /// Every boundary that accepts a category string (document load, editor
    /// commit) routes through here, so no raw category string ever reaches
    /// the store or the surface.
    pub fn normalize(raw: &str) -> Category {
        match raw {
            "neutral" => Category::Neutral,
            "alliance" => Category::Alliance,
            "horde" => Category::Horde,
            "events" => Category::Events,
            _ => Category::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_accepts_known_keys() {
        assert_eq!(Category::normalize("neutral"), Category::Neutral);
        assert_eq!(Category::normalize("alliance"), Category::Alliance);
        assert_eq!(Category::normalize("horde"), Category::Horde);
        assert_eq!(Category::normalize("events"), Category::Events);
    }

    #[test]
    fn normalize_is_total() {
        assert_eq!(Category::normalize(""), Category::Neutral);
        assert_eq!(Category::normalize("Alliance"), Category::Neutral);
        assert_eq!(Category::normalize("goblin"), Category::Neutral);
        assert_eq!(Category::normalize("  horde  "), Category::Neutral);
    }

    #[test]
    fn round_trips_through_wire_key() {
        for cat in Category::ALL {
            assert_eq!(Category::normalize(cat.as_str()), cat);
        }
    }
}
