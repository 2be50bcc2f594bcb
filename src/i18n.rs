//! Translation tables.
//!
//! Facility and category tags double as dictionary keys and as displayable
//! English text, so every lookup falls back to the key itself when no entry
//! exists for it.

use serde::{Deserialize, Serialize};

/// Display language.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

/// A static string pair, one per supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: &'static str,
    pub ru: &'static str,
}

impl LocalizedText {
    #[must_use]
    pub const fn new(en: &'static str, ru: &'static str) -> Self {
        Self { en, ru }
    }

    #[must_use]
    pub const fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Ru => self.ru,
        }
    }
}

/// An owned string pair, used by dataset records loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString {
    pub en: String,
    pub ru: String,
}

impl LocalizedString {
    #[must_use]
    pub fn new(en: impl Into<String>, ru: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ru: ru.into(),
        }
    }

    #[must_use]
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Ru => &self.ru,
        }
    }
}

type Entry = (&'static str, LocalizedText);

/// Entry keyed by its English text.
const fn same(en: &'static str, ru: &'static str) -> Entry {
    (en, LocalizedText::new(en, ru))
}

const fn keyed(key: &'static str, en: &'static str, ru: &'static str) -> Entry {
    (key, LocalizedText::new(en, ru))
}

/// Canonical key → per-language record.
#[derive(Debug, Clone, Copy)]
pub struct Dictionary {
    entries: &'static [Entry],
}

impl Dictionary {
    #[must_use]
    pub const fn new(entries: &'static [Entry]) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&'static LocalizedText> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, text)| text)
    }

    /// Translates `key`, returning `key` unchanged when it has no entry.
    #[must_use]
    pub fn translate<'a>(&self, key: &'a str, lang: Language) -> &'a str {
        self.lookup(key).map_or(key, |text| text.get(lang))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub static FACILITIES: Dictionary = Dictionary::new(&[
    same("Swimming Pool", "Бассейн"),
    same("Fitness/Gym", "Фитнес/Зал"),
    same("Co-Working Space", "Коворкинг"),
    same("Pet Friendly", "Можно с питомцами"),
    same("Onsen", "Онсэн"),
    same("Steam Room", "Паровая комната"),
    same("Sauna", "Сауна"),
    same("Theater/Karaoke", "Кинотеатр/Караоке"),
    same("Game Room/Arcade", "Игровая комната"),
    same("Kids Zone", "Детская зона"),
    same("Laundry Service", "Прачечная"),
    same("Co-Kitchen", "Общая кухня"),
    same("Sky Lounge/Deck", "Скай Лаунж"),
    same("Library", "Библиотека"),
    same("Shuttle Service", "Трансфер"),
    same("Meeting Room", "Переговорная"),
]);

pub static CATEGORIES: Dictionary = Dictionary::new(&[
    same("1 Bedroom", "1 Спальня"),
    same("1 Bedroom Plus", "1 Спальня Плюс"),
    same("2 Bedroom", "2 Спальни"),
    same("2 Bedroom Plus", "2 Спальни Плюс"),
    same("3 Bedroom", "3 Спальни"),
    same("2 Bedroom Penthouse", "Пентхаус (2 сп.)"),
    same("3 Bedroom Penthouse", "Пентхаус (3 сп.)"),
    same("Penthouse", "Пентхаус"),
]);

pub static FEATURE_CATEGORIES: Dictionary = Dictionary::new(&[
    same("Orientation", "Ориентация"),
    same("Facilities", "Инфраструктура"),
    same("Parking", "Парковка"),
    same("Zoning", "Зонирование"),
]);

pub static FACILITY_GROUPS: Dictionary = Dictionary::new(&[
    keyed("wellness", "Wellness & Active", "Велнес и Спорт"),
    keyed("social", "Social & Work", "Социум и Работа"),
    keyed("entertainment", "Entertainment", "Развлечения"),
    keyed("services", "Services & Living", "Сервисы"),
]);

pub static PERSONAS: Dictionary = Dictionary::new(&[
    keyed("investor", "Investor", "Инвестор"),
    keyed("nomad", "Digital Nomad", "Цифровой кочевник"),
    keyed("family", "Family", "Семья"),
    keyed("retiree", "Retiree / Wellness", "Пенсионер / Велнес"),
]);

pub static QUADRANTS: Dictionary = Dictionary::new(&[
    keyed("cash_cow", "Cash Cow", "Cash Cow"),
    keyed("unicorn", "The Unicorn", "Единорог"),
    keyed("luxury_residence", "Luxury Residence", "Резиденция Люкс"),
    keyed("niche", "Niche / Speculative", "Спекулятивный"),
]);

pub static RADAR_AXES: Dictionary = Dictionary::new(&[
    keyed("wellness", "Wellness", "Велнес"),
    keyed("family", "Family", "Семья"),
    keyed("work", "Work/Tech", "Работа"),
    keyed("exclusivity", "Exclusivity", "Приватность"),
    keyed("nature", "Nature", "Природа"),
]);

pub static MODES: Dictionary = Dictionary::new(&[
    keyed("facilities", "Facilities", "Удобства"),
    keyed("units", "Unit Types", "Типы юнитов"),
    keyed("masterplan", "Master Plan", "Генплан"),
    keyed("audience", "Audience Fit", "Целевая аудитория"),
    keyed("floorplans", "Floor Plans", "Планировки этажей"),
]);

/// Shown for a persona that no rule fired for.
pub const BASE_LAYOUT_SCORE: LocalizedText =
    LocalizedText::new("Base layout score", "Базовая оценка планировки");

pub const COMMON_ALL: LocalizedText = LocalizedText::new("Common (All 3)", "Общее (Все 3)");

/// Label for a region shared by exactly two projects.
#[must_use]
pub fn pair_only(lang: Language, first: &str, second: &str) -> String {
    match lang {
        Language::En => format!("{first} & {second} Only"),
        Language::Ru => format!("Только {first} и {second}"),
    }
}

/// Label for a region owned by a single project.
#[must_use]
pub fn single_only(lang: Language, name: &str) -> String {
    match lang {
        Language::En => format!("{name} Only"),
        Language::Ru => format!("Только {name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn translate_known_key() {
        assert_eq!(FACILITIES.translate("Sauna", Language::Ru), "Сауна");
        assert_eq!(FACILITIES.translate("Sauna", Language::En), "Sauna");
    }

    #[test]
    fn keyed_entries_translate_from_their_key() {
        assert_eq!(PERSONAS.translate("nomad", Language::En), "Digital Nomad");
        assert_eq!(QUADRANTS.translate("unicorn", Language::Ru), "Единорог");
        assert!(FACILITY_GROUPS.lookup("Services & Living").is_none());
    }

    #[test]
    fn translate_unknown_key_is_identity() {
        let unknown = "Rooftop Bar";
        assert_eq!(FACILITIES.translate(unknown, Language::Ru), unknown);
        assert_eq!(CATEGORIES.translate("4 Bedroom", Language::Ru), "4 Bedroom");
    }

    #[test]
    fn region_labels() {
        assert_eq!(
            pair_only(Language::En, "Coralina", "Serenity"),
            "Coralina & Serenity Only"
        );
        assert_eq!(single_only(Language::Ru, "Sierra"), "Только Sierra");
    }

    #[test]
    fn dictionary_sizes() {
        assert_eq!(FACILITIES.len(), 16);
        assert_eq!(CATEGORIES.len(), 8);
        assert_eq!(FEATURE_CATEGORIES.len(), 4);
    }
}
