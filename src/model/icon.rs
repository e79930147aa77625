//! Marker icons for point overlays.

/// Icon displayed for a point overlay. Area overlays carry no icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Icon {
    /// Generic location pin; the default for new markers.
    #[default]
    Pin,
    /// Capital city or major settlement.
    City,
    /// Keep, tower or garrison.
    Fort,
    /// Inn or other minor building.
    House,
    /// Raid instance entrance.
    Raid,
    /// World PvP objective.
    Pvp,
    /// Quest hub.
    Quest,
    /// World event location.
    Event,
}

impl Icon {
    /// All icons, in picker display order.
    pub const ALL: [Icon; 8] = [
        Icon::Pin,
        Icon::City,
        Icon::Fort,
        Icon::House,
        Icon::Raid,
        Icon::Pvp,
        Icon::Quest,
        Icon::Event,
    ];

    /// The wire/display key for this icon.
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Pin => "pin",
            Icon::City => "city",
            Icon::Fort => "fort",
            Icon::House => "house",
            Icon::Raid => "raid",
            Icon::Pvp => "pvp",
            Icon::Quest => "quest",
            Icon::Event => "event",
        }
    }

    /// Parse a wire key into an icon. Returns `None` for unknown keys;
    /// callers reading persisted documents fall back to [`Icon::Pin`].
    pub fn from_str(raw: &str) -> Option<Icon> {
        match raw {
            "pin" => Some(Icon::Pin),
            "city" => Some(Icon::City),
            "fort" => Some(Icon::Fort),
            "house" => Some(Icon::House),
            "raid" => Some(Icon::Raid),
            "pvp" => Some(Icon::Pvp),
            "quest" => Some(Icon::Quest),
            "event" => Some(Icon::Event),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_keys_round_trip() {
        for icon in Icon::ALL {
            assert_eq!(Icon::from_str(icon.as_str()), Some(icon));
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert_eq!(Icon::from_str(""), None);
        assert_eq!(Icon::from_str("castle"), None);
        assert_eq!(Icon::from_str("Pin"), None);
    }
}
