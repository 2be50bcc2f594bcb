//! Controlled facility vocabulary.
//!
//! Project records keep facilities as free-form tags so that loaded datasets
//! may carry tags outside this list; those tags still display and filter,
//! they just don't belong to a matrix group.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
pub enum Facility {
    SwimmingPool,
    Gym,
    CoWorking,
    PetFriendly,
    Onsen,
    SteamRoom,
    Sauna,
    Theater,
    GameRoom,
    KidsZone,
    Laundry,
    CoKitchen,
    SkyLounge,
    Library,
    Shuttle,
    MeetingRoom,
}

impl Facility {
    pub const ALL: [Facility; 16] = [
        Self::SwimmingPool,
        Self::Gym,
        Self::CoWorking,
        Self::PetFriendly,
        Self::Onsen,
        Self::SteamRoom,
        Self::Sauna,
        Self::Theater,
        Self::GameRoom,
        Self::KidsZone,
        Self::Laundry,
        Self::CoKitchen,
        Self::SkyLounge,
        Self::Library,
        Self::Shuttle,
        Self::MeetingRoom,
    ];

    /// Canonical tag as stored on projects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SwimmingPool => "Swimming Pool",
            Self::Gym => "Fitness/Gym",
            Self::CoWorking => "Co-Working Space",
            Self::PetFriendly => "Pet Friendly",
            Self::Onsen => "Onsen",
            Self::SteamRoom => "Steam Room",
            Self::Sauna => "Sauna",
            Self::Theater => "Theater/Karaoke",
            Self::GameRoom => "Game Room/Arcade",
            Self::KidsZone => "Kids Zone",
            Self::Laundry => "Laundry Service",
            Self::CoKitchen => "Co-Kitchen",
            Self::SkyLounge => "Sky Lounge/Deck",
            Self::Library => "Library",
            Self::Shuttle => "Shuttle Service",
            Self::MeetingRoom => "Meeting Room",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == tag)
    }

    #[must_use]
    pub const fn group(self) -> FacilityGroup {
        match self {
            Self::SwimmingPool | Self::Gym | Self::Onsen | Self::SteamRoom | Self::Sauna => {
                FacilityGroup::Wellness
            }
            Self::CoWorking
            | Self::CoKitchen
            | Self::SkyLounge
            | Self::Library
            | Self::MeetingRoom => FacilityGroup::Social,
            Self::Theater | Self::GameRoom | Self::KidsZone => FacilityGroup::Entertainment,
            Self::PetFriendly | Self::Laundry | Self::Shuttle => FacilityGroup::Services,
        }
    }
}

/// Display grouping used by the comparison matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityGroup {
    Wellness,
    Social,
    Entertainment,
    Services,
}

impl FacilityGroup {
    pub const ALL: [FacilityGroup; 4] = [
        Self::Wellness,
        Self::Social,
        Self::Entertainment,
        Self::Services,
    ];

    /// Dictionary key for [`crate::i18n::FACILITY_GROUPS`].
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Wellness => "wellness",
            Self::Social => "social",
            Self::Entertainment => "entertainment",
            Self::Services => "services",
        }
    }

    /// Members in matrix row order.
    #[must_use]
    pub const fn members(self) -> &'static [Facility] {
        match self {
            Self::Wellness => &[
                Facility::SwimmingPool,
                Facility::Gym,
                Facility::Onsen,
                Facility::SteamRoom,
                Facility::Sauna,
            ],
            Self::Social => &[
                Facility::CoWorking,
                Facility::CoKitchen,
                Facility::SkyLounge,
                Facility::Library,
                Facility::MeetingRoom,
            ],
            Self::Entertainment => &[Facility::Theater, Facility::GameRoom, Facility::KidsZone],
            Self::Services => &[Facility::PetFriendly, Facility::Laundry, Facility::Shuttle],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for facility in Facility::ALL {
            assert_eq!(Facility::from_tag(facility.as_str()), Some(facility));
        }
        assert_eq!(Facility::from_tag("Helipad"), None);
    }

    #[test]
    fn groups_cover_vocabulary_once() {
        let mut seen: Vec<Facility> = FacilityGroup::ALL
            .iter()
            .flat_map(|g| g.members().iter().copied())
            .collect();
        seen.sort();
        let mut all = Facility::ALL.to_vec();
        all.sort();
        assert_eq!(seen, all);
        for group in FacilityGroup::ALL {
            assert!(group.members().iter().all(|f| f.group() == group));
        }
    }
}
