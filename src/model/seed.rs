//! Embedded dataset: three Phuket developments, their unit inventory and the
//! floor plans that have been surveyed so far.

use super::{
    Building, Coordinates, Dataset, Facility, FeatureCategory, Floor, FloorLevel, FloorPlan,
    LayoutFeature, MasterPlanMetrics, Project, Unit, UnitRange,
};
use crate::i18n::LocalizedString;

pub const CORALINA: &str = "Coralina";
pub const SERENITY: &str = "Serenity";
pub const SIERRA: &str = "Sierra";

impl Dataset {
    /// The dataset compiled into the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            projects: vec![coralina(), serenity(), sierra()],
            units: units(),
            floor_plans: vec![sierra_floors(), coralina_floors()],
        }
    }
}

fn tags(facilities: &[Facility]) -> Vec<String> {
    facilities.iter().map(|f| f.as_str().to_string()).collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn zone(en: &str, ru: &str) -> LocalizedString {
    LocalizedString::new(en, ru)
}

fn feature(category: FeatureCategory, en: &str, ru: &str, icon: &str) -> LayoutFeature {
    LayoutFeature {
        category,
        description: LocalizedString::new(en, ru),
        icon: icon.to_string(),
    }
}

fn coralina() -> Project {
    use Facility::{
        CoKitchen, CoWorking, GameRoom, Gym, KidsZone, Laundry, Library, Onsen, PetFriendly,
        Sauna, SteamRoom, SwimmingPool,
    };
    Project {
        name: CORALINA.to_string(),
        total_units: 564,
        land_area_rai: "11-1-27.58".to_string(),
        land_area_sqm: 18110.0,
        buildings: 8,
        storeys: 7,
        location: LocalizedString::new(
            "Kamala Beach (430m to beach)",
            "Пляж Камала (430м до моря)",
        ),
        coordinates: Coordinates {
            lat: 7.951_933,
            lng: 98.283_483,
        },
        facilities: tags(&[
            SwimmingPool, Gym, CoWorking, PetFriendly, Onsen, SteamRoom, Sauna, GameRoom,
            KidsZone, Laundry, CoKitchen, Library,
        ]),
        unit_types: strings(&[
            "1 Bedroom",
            "1 Bedroom Plus",
            "2 Bedroom",
            "2 Bedroom Plus",
            "2 Bedroom Penthouse",
            "3 Bedroom Penthouse",
        ]),
        master_plan: MasterPlanMetrics {
            units_per_rai: 49.8,
            green_space_ratio: 16.0,
            common_area_per_unit: 9.9,
            total_common_area: 5600.0,
            facility_density: 1.5,
            distinct_zones: vec![
                zone("Quiet Zone", "Тихая зона"),
                zone("Active Zone", "Активная зона"),
                zone("Pet-Friendly Bldgs (A, B)", "Корпуса для питомцев (A, B)"),
            ],
        },
        layout_features: vec![
            feature(
                FeatureCategory::Facilities,
                "Dual-Level: Massive ground lagoon + Rooftop infinity pools",
                "Двухуровневая система: огромная лагуна на земле + инфинити бассейны на крыше",
                "layers",
            ),
            feature(
                FeatureCategory::Zoning,
                "Pet-Friendly restricted to Buildings A & B for noise control",
                "Зона для питомцев ограничена корпусами A и B для контроля шума",
                "paw",
            ),
            feature(
                FeatureCategory::Orientation,
                "Organic building shapes maximizing sea/mountain views",
                "Органические формы зданий, максимизирующие виды на море и горы",
                "compass",
            ),
        ],
    }
}

fn serenity() -> Project {
    use Facility::{
        CoKitchen, CoWorking, GameRoom, Gym, KidsZone, Laundry, Onsen, Sauna, SkyLounge,
        SteamRoom, SwimmingPool, Theater,
    };
    Project {
        name: SERENITY.to_string(),
        total_units: 814,
        land_area_rai: "13-3-13.25".to_string(),
        land_area_sqm: 22053.0,
        buildings: 6,
        storeys: 7,
        location: LocalizedString::new(
            "Naiyang Beach (400m to beach)",
            "Пляж Найянг (400м до моря)",
        ),
        coordinates: Coordinates {
            lat: 8.086_300,
            lng: 98.298_200,
        },
        facilities: tags(&[
            SwimmingPool, Gym, CoWorking, Onsen, SteamRoom, Sauna, Theater, GameRoom, KidsZone,
            Laundry, CoKitchen, SkyLounge,
        ]),
        unit_types: strings(&["1 Bedroom", "2 Bedroom", "3 Bedroom"]),
        master_plan: MasterPlanMetrics {
            units_per_rai: 59.1,
            green_space_ratio: 17.0,
            common_area_per_unit: 4.6,
            total_common_area: 3750.0,
            facility_density: 2.0,
            distinct_zones: vec![
                zone("Lagoon Center", "Центральная лагуна"),
                zone("Separate Parking Bldg", "Отдельное здание парковки"),
                zone("Entrance Clubhouse", "Входной клубный дом"),
            ],
        },
        layout_features: vec![
            feature(
                FeatureCategory::Facilities,
                "Horizontal Focus: 400m long continuous lagoon pool system",
                "Горизонтальный фокус: непрерывная система бассейнов-лагун длиной 400м",
                "minimize",
            ),
            feature(
                FeatureCategory::Parking,
                "Separate Parking Building - Car-free internal zones",
                "Отдельное здание парковки - внутренние зоны без машин",
                "car",
            ),
            feature(
                FeatureCategory::Zoning,
                "Pavilion-based amenities (Theater, Leisure) separated from residential",
                "Павильонные удобства (Театр, Отдых) отделены от жилых зон",
                "map",
            ),
        ],
    }
}

fn sierra() -> Project {
    use Facility::{
        CoWorking, GameRoom, Gym, KidsZone, Laundry, MeetingRoom, PetFriendly, Shuttle,
        SkyLounge, SteamRoom, SwimmingPool, Theater,
    };
    Project {
        name: SIERRA.to_string(),
        total_units: 452,
        land_area_rai: "4-1-29.23".to_string(),
        land_area_sqm: 6917.0,
        buildings: 3,
        storeys: 8,
        location: LocalizedString::new(
            "Bang-Tao (Near Boat Avenue)",
            "Банг-Тао (Рядом с Boat Avenue)",
        ),
        coordinates: Coordinates {
            lat: 7.993_000,
            lng: 98.304_000,
        },
        facilities: tags(&[
            SwimmingPool, Gym, CoWorking, PetFriendly, SteamRoom, Theater, GameRoom, KidsZone,
            Laundry, SkyLounge, Shuttle, MeetingRoom,
        ]),
        unit_types: strings(&["1 Bedroom", "1 Bedroom Plus", "2 Bedroom"]),
        master_plan: MasterPlanMetrics {
            units_per_rai: 104.6,
            green_space_ratio: 25.2,
            common_area_per_unit: 3.4,
            total_common_area: 1525.0,
            facility_density: 4.0,
            distinct_zones: vec![
                zone("Pet Building (C)", "Корпус для питомцев (C)"),
                zone("Sky Facilities", "Удобства на крыше"),
                zone("Hidden Yard", "Скрытый двор"),
            ],
        },
        layout_features: vec![
            feature(
                FeatureCategory::Zoning,
                "Building C explicitly marked as Pet-Friendly",
                "Корпус C специально выделен для проживания с питомцами",
                "paw",
            ),
            feature(
                FeatureCategory::Facilities,
                "Vertical Living: High utility of roof space (Cloud Lounge, Luna Pool)",
                "Вертикальная жизнь: Высокое использование пространства крыши (Cloud Lounge, Luna Pool)",
                "arrow-up",
            ),
            feature(
                FeatureCategory::Orientation,
                "High Density Urban Layout optimized for convenience",
                "Высокоплотная городская планировка, оптимизированная для удобства",
                "grid",
            ),
        ],
    }
}

/// `(id, name, code, category, sub_category, min, max)`
type UnitRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    f64,
    f64,
);

#[rustfmt::skip]
const CORALINA_UNITS: &[UnitRow] = &[
    ("c-1", "1 Bedroom S", "1BSC1", "1 Bedroom", "S", 26.0, 26.0),
    ("c-2", "1 Bedroom S", "1BSC1M", "1 Bedroom", "S", 26.0, 26.0),
    ("c-3", "1 Bedroom S", "1BSC2", "1 Bedroom", "S", 26.0, 26.0),
    ("c-4", "1 Bedroom S", "1BSG1", "1 Bedroom", "S", 26.0, 26.0),
    ("c-5", "1 Bedroom S", "1BS", "1 Bedroom", "S", 27.0, 27.0),
    ("c-6", "1 Bedroom S", "1BSA", "1 Bedroom", "S", 31.0, 31.0),
    ("c-7", "1 Bedroom M", "1BM", "1 Bedroom", "M", 31.0, 31.0),
    ("c-8", "1 Bedroom M", "1BMAC1", "1 Bedroom", "M", 35.0, 35.0),
    ("c-9", "1 Bedroom M", "1BMB", "1 Bedroom", "M", 33.0, 33.0),
    ("c-10", "1 Bedroom M", "1BMC1", "1 Bedroom", "M", 30.0, 30.0),
    ("c-11", "1 Bedroom Plus", "1 Bed Plus", "1 Bedroom Plus", "Standard", 46.0, 49.0),
    ("c-12", "2 Bedroom", "2 Bed", "2 Bedroom", "Standard", 64.0, 68.0),
    ("c-13", "2 Bedroom Plus", "2 Bed Plus", "2 Bedroom Plus", "Plus", 98.0, 107.0),
    ("c-14", "Penthouse", "3 Bed PH", "3 Bedroom Penthouse", "Penthouse", 128.0, 128.0),
];

#[rustfmt::skip]
const SERENITY_UNITS: &[UnitRow] = &[
    ("se-1", "1 Bedroom S", "1 Bedroom SA/S/SX", "1 Bedroom", "S", 26.0, 28.0),
    ("se-2", "1 Bedroom M", "1 Bedroom MA/M/MX", "1 Bedroom", "M", 30.0, 32.0),
    ("se-3", "1 Bedroom L", "1 Bedroom LA/L/LX", "1 Bedroom", "L", 36.0, 39.0),
    ("se-4", "2 Bedroom S", "2 Bedroom SA/S/SX", "2 Bedroom", "S", 56.0, 58.0),
    ("se-5", "2 Bedroom M", "2 Bedroom MA/M/MX", "2 Bedroom", "M", 60.0, 62.0),
    ("se-6", "2 Bedroom L", "2 Bedroom LA/L/LX", "2 Bedroom", "L", 61.0, 65.0),
    ("se-7", "3 Bedroom", "3 Bedroom A", "3 Bedroom", "Standard", 112.0, 117.0),
    ("se-8", "3 Bedroom L", "3 Bedroom LA/L", "3 Bedroom", "L", 119.0, 123.0),
];

#[rustfmt::skip]
const SIERRA_UNITS: &[UnitRow] = &[
    ("si-1", "1 Bedroom S", "1 Bedroom S", "1 Bedroom", "S", 28.38, 28.38),
    ("si-2", "1 Bedroom S (M)", "1 Bedroom S (M)", "1 Bedroom", "S", 28.38, 28.38),
    ("si-3", "1 Bedroom M", "1 Bedroom M", "1 Bedroom", "M", 30.32, 30.32),
    ("si-4", "1 Bedroom MC1", "1 Bedroom MC1", "1 Bedroom", "M", 30.32, 30.32),
    ("si-5", "1 Bedroom MC2", "1 Bedroom MC2", "1 Bedroom", "M", 30.98, 30.98),
    ("si-6", "1 Bedroom Plus", "1 Bedroom Plus", "1 Bedroom Plus", "Standard", 44.00, 44.00),
    ("si-7", "1 Bedroom Plus C", "1 Bedroom Plus C", "1 Bedroom Plus", "C", 46.54, 46.54),
    ("si-8", "2 Bedroom S", "2 Bedroom S", "2 Bedroom", "S", 55.65, 55.65),
    ("si-9", "2 Bedroom M", "2 Bedroom M", "2 Bedroom", "M", 58.07, 58.07),
];

fn units() -> Vec<Unit> {
    [
        (CORALINA, CORALINA_UNITS),
        (SERENITY, SERENITY_UNITS),
        (SIERRA, SIERRA_UNITS),
    ]
    .into_iter()
    .flat_map(|(project, rows)| {
        rows.iter()
            .map(move |&(id, name, code, category, sub_category, min_size, max_size)| Unit {
                id: id.to_string(),
                project: project.to_string(),
                name: name.to_string(),
                code: code.to_string(),
                category: category.to_string(),
                sub_category: sub_category.to_string(),
                min_size,
                max_size,
            })
    })
    .collect()
}

fn ordinal(level: u32) -> String {
    let suffix = match level {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{level}{suffix} Floor")
}

/// A numbered floor holding a single unit range `prefix01..prefix{count}`.
fn floor(level: u32, prefix: &str, count: u32) -> Floor {
    Floor {
        level: FloorLevel::Number(level),
        label: ordinal(level),
        unit_count: count,
        unit_ranges: vec![UnitRange {
            prefix: prefix.to_string(),
            start: 1,
            end: count,
            description: None,
        }],
        notes: None,
    }
}

fn roof(unit_count: u32, ranges: Vec<UnitRange>, notes: Option<LocalizedString>) -> Floor {
    Floor {
        level: FloorLevel::Roof,
        label: "Roof Floor".to_string(),
        unit_count,
        unit_ranges: ranges,
        notes,
    }
}

fn described(prefix: &str, start: u32, end: u32, description: &str) -> UnitRange {
    UnitRange {
        prefix: prefix.to_string(),
        start,
        end,
        description: Some(description.to_string()),
    }
}

/// Floors `first..=last` of building `letter`, `count(level)` units each.
fn stack(letter: char, first: u32, last: u32, count: impl Fn(u32) -> u32) -> Vec<Floor> {
    (first..=last)
        .map(|level| floor(level, &format!("{letter}{level}"), count(level)))
        .collect()
}

fn sierra_floors() -> FloorPlan {
    let mut building_a = stack('A', 2, 8, |_| 26);
    building_a[0].notes = Some(LocalizedString::new(
        "L-shaped single loaded corridor",
        "L-образный коридор с односторонней загрузкой",
    ));

    FloorPlan {
        project: SIERRA.to_string(),
        buildings: vec![
            Building {
                id: "sierra-a".to_string(),
                name: "Building A".to_string(),
                floors: building_a,
            },
            Building {
                id: "sierra-c".to_string(),
                name: "Building C".to_string(),
                floors: stack('C', 2, 8, |level| if level == 8 { 13 } else { 19 }),
            },
        ],
    }
}

fn coralina_floors() -> FloorPlan {
    let mut building_a = vec![Floor {
        unit_ranges: vec![described("SH", 1, 5, "Shop/Garden Units")],
        ..floor(1, "SH", 5)
    }];
    building_a.extend(stack('A', 2, 7, |level| if level == 2 { 6 } else { 10 }));
    building_a.push(roof(
        0,
        Vec::new(),
        Some(LocalizedString::new("Roof Garden & Utilities", "Сад на крыше и коммуникации")),
    ));

    let mut building_b = stack('B', 1, 7, |level| if level == 7 { 6 } else { 8 });
    building_b.push(roof(2, vec![described("B7", 3, 4, "Upper Duplex Part")], None));

    let mut building_c = stack('C', 1, 7, |level| if level == 7 { 5 } else { 10 });
    building_c.push(roof(3, vec![described("C7", 1, 3, "Upper Penthouse Part")], None));

    let mut building_d = stack('D', 1, 7, |level| if level == 7 { 7 } else { 10 });
    building_d.push(roof(3, vec![described("D7", 2, 7, "Upper Penthouse Part")], None));

    let building = |id: &str, name: &str, floors| Building {
        id: id.to_string(),
        name: name.to_string(),
        floors,
    };

    FloorPlan {
        project: CORALINA.to_string(),
        buildings: vec![
            building("coralina-a", "Building A", building_a),
            building("coralina-b", "Building B", building_b),
            building("coralina-c", "Building C", building_c),
            building("coralina-d", "Building D", building_d),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unit_counts_per_project() {
        let dataset = Dataset::builtin();
        assert_eq!(dataset.units_of(CORALINA).len(), 14);
        assert_eq!(dataset.units_of(SERENITY).len(), 8);
        assert_eq!(dataset.units_of(SIERRA).len(), 9);
    }

    #[test]
    fn every_project_has_twelve_facilities() {
        for project in Dataset::builtin().projects {
            assert_eq!(project.facilities.len(), 12, "{}", project.name);
        }
    }

    #[test]
    fn sierra_floor_plan() {
        let dataset = Dataset::builtin();
        let plan = dataset.floor_plan(SIERRA).unwrap();
        let totals: Vec<u32> = plan.buildings.iter().map(Building::total_units).collect();
        assert_eq!(totals, vec![182, 127]);
        let first = &plan.buildings[0].floors[0];
        assert_eq!(first.label, "2nd Floor");
        assert!(first.notes.is_some());
        assert_eq!(first.unit_codes().first().map(String::as_str), Some("A201"));
    }

    #[test]
    fn coralina_roof_floors() {
        let dataset = Dataset::builtin();
        let plan = dataset.floor_plan(CORALINA).unwrap();
        let b = &plan.buildings[1];
        let roof = b.floor(FloorLevel::Roof).unwrap();
        assert_eq!(roof.unit_codes(), vec!["B703", "B704"]);
        let shop = &plan.buildings[0].floors[0];
        let range = &shop.unit_ranges[0];
        assert_eq!(range.description.as_deref(), Some("Shop/Garden Units"));
        assert_eq!(shop.label, "1st Floor");
        assert!(dataset.floor_plan(SERENITY).is_none());
    }
}
