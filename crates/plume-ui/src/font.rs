//! Font families offered by the settings dialog.
//!
//! iced resolves fonts by family name through the system font database,
//! and `Font::with_name` wants a `&'static str`. Catalogue names are
//! already static; any other family read from the settings file is
//! interned once and reused.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock, PoisonError};

use iced::Font;

/// Families listed in the settings dialog.
pub const FONT_FAMILIES: &[&str] = &[
    "Arial",
    "Calibri",
    "Cambria",
    "Comic Sans MS",
    "Consolas",
    "Courier New",
    "DejaVu Sans",
    "DejaVu Sans Mono",
    "DejaVu Serif",
    "Georgia",
    "Helvetica",
    "Liberation Mono",
    "Liberation Sans",
    "Liberation Serif",
    "Noto Sans",
    "Noto Serif",
    "Segoe UI",
    "Tahoma",
    "Times New Roman",
    "Trebuchet MS",
    "Ubuntu",
    "Verdana",
];

/// Choices for the family picker. The active family is always present,
/// even when it is not in the catalogue.
pub fn family_choices(active: &str) -> Vec<String> {
    let mut families: Vec<String> = FONT_FAMILIES.iter().map(ToString::to_string).collect();
    if !families.iter().any(|f| f == active) {
        families.push(active.to_string());
        families.sort_by_key(|f| f.to_lowercase());
    }
    families
}

/// The iced font for `family`.
pub fn editor_font(family: &str) -> Font {
    Font::with_name(intern(family))
}

/// Each distinct non-catalogue family leaks one small string for the life
/// of the process. The set only grows with families the user applies.
fn intern(family: &str) -> &'static str {
    if let Some(known) = FONT_FAMILIES.iter().copied().find(|f| *f == family) {
        return known;
    }

    static EXTRA: OnceLock<Mutex<HashSet<&'static str>>> = OnceLock::new();
    let mut extra = EXTRA
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if let Some(name) = extra.get(family).copied() {
        return name;
    }
    let name: &'static str = Box::leak(family.to_owned().into_boxed_str());
    extra.insert(name);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_family_not_duplicated() {
        let choices = family_choices("Arial");
        assert_eq!(choices.len(), FONT_FAMILIES.len());
        assert_eq!(choices.iter().filter(|f| *f == "Arial").count(), 1);
    }

    #[test]
    fn test_unknown_family_is_offered() {
        let choices = family_choices("Fira Code");
        assert_eq!(choices.len(), FONT_FAMILIES.len() + 1);
        assert!(choices.iter().any(|f| f == "Fira Code"));
        assert!(choices.windows(2).all(|w| w[0].to_lowercase() <= w[1].to_lowercase()));
    }

    #[test]
    fn test_intern_reuses_names() {
        let first = intern("Some Custom Face");
        let second = intern(&String::from("Some Custom Face"));
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(intern("Georgia"), FONT_FAMILIES[9]));
    }
}
