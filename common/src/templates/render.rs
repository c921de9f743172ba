//! Placeholder substitution.
//!
//! A placeholder is a `{key}` token: any run of characters other than braces
//! between one opening and one closing brace. Whether it is a variable is up
//! to the resolver; placeholders it does not know are kept verbatim.

use crate::model::language::Language;
use crate::templates::dictionary::VariableDictionary;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern is valid"));

/// Replaces every placeholder for which `resolve` returns a value.
pub fn substitute<F>(template: &str, mut resolve: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            resolve(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

impl VariableDictionary {
    /// Renders `template` with the example values for `language`.
    pub fn render(&self, template: &str, language: Language) -> String {
        substitute(template, |key| {
            self.lookup(key)
                .map(|entry| entry.example(language).to_string())
        })
    }
}

/// Renders `template` with real values, e.g. the data of one student.
pub fn render_with(template: &str, values: &HashMap<String, String>) -> String {
    substitute(template, |key| values.get(key).cloned())
}

/// Distinct placeholder keys in order of first appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut keys: Vec<&str> = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(template) {
        if let Some(key) = caps.get(1).map(|m| m.as_str()) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }
    keys
}

/// Placeholders of `template` that `dictionary` cannot resolve.
pub fn unknown_placeholders<'t>(dictionary: &VariableDictionary, template: &'t str) -> Vec<&'t str> {
    placeholders(template)
        .into_iter()
        .filter(|key| !dictionary.contains(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::variable::VariableEntry;
    use pretty_assertions::assert_eq;

    fn dictionary() -> VariableDictionary {
        VariableDictionary::from_entries([
            (
                "name_ar",
                VariableEntry::new("الاسم", "Name", "person", "ممدوح", "Mamdouh"),
            ),
            (
                "salutation_ar",
                VariableEntry::new("التحية", "Salutation", "waving_hand", "عزيزي", "Dear"),
            ),
        ])
    }

    #[test]
    fn unknown_placeholder_passes_through() {
        assert_eq!(
            dictionary().render("{unknownKey} hello", Language::Ar),
            "{unknownKey} hello"
        );
    }

    #[test]
    fn repeated_key_is_replaced_everywhere() {
        assert_eq!(
            dictionary().render("{salutation_ar} {name_ar}, {name_ar}!", Language::Ar),
            "عزيزي ممدوح, ممدوح!"
        );
        assert_eq!(
            dictionary().render("{salutation_ar} {name_ar}, {name_ar}!", Language::En),
            "Dear Mamdouh, Mamdouh!"
        );
    }

    #[test]
    fn missing_and_known_keys_mix() {
        let only_name = VariableDictionary::from_entries([(
            "name_ar",
            VariableEntry::new("الاسم", "Name", "person", "ممدوح", "Mamdouh"),
        )]);
        assert_eq!(
            only_name.render("{salutation_ar} {name_ar}, {name_ar}!", Language::Ar),
            "{salutation_ar} ممدوح, ممدوح!"
        );
    }

    #[test]
    fn stray_braces_are_literal() {
        let d = dictionary();
        assert_eq!(d.render("{ name_ar }", Language::En), "{ name_ar }");
        assert_eq!(d.render("{name_ar", Language::En), "{name_ar");
        assert_eq!(d.render("name_ar}", Language::En), "name_ar}");
        assert_eq!(d.render("{}", Language::En), "{}");
        assert_eq!(d.render("{name-ar}", Language::En), "{name-ar}");
        assert_eq!(d.render("{{name_ar}}", Language::En), "{Mamdouh}");
    }

    #[test]
    fn any_dictionary_key_is_substituted() {
        let d = VariableDictionary::from_entries([
            (
                "student-name",
                VariableEntry::new("الاسم", "Name", "person", "ممدوح", "Mamdouh"),
            ),
            (
                "اسم",
                VariableEntry::new("الاسم", "Name", "person", "ممدوح", "Mamdouh"),
            ),
            (
                "course name",
                VariableEntry::new("الدورة", "Course", "school", "الفقه", "Fiqh"),
            ),
        ]);
        assert_eq!(d.render("{student-name}", Language::En), "Mamdouh");
        assert_eq!(d.render("{اسم}", Language::En), "Mamdouh");
        assert_eq!(d.render("{اسم} / {course name}", Language::Ar), "ممدوح / الفقه");
        assert_eq!(d.render("{student_name}", Language::En), "{student_name}");
    }

    #[test]
    fn render_is_pure() {
        let d = dictionary();
        let first = d.render("{name_ar} {x}", Language::Ar);
        assert_eq!(first, d.render("{name_ar} {x}", Language::Ar));
    }

    #[test]
    fn real_values_replace_placeholders() {
        let values = HashMap::from([("name_ar".to_string(), "سلمى".to_string())]);
        assert_eq!(
            render_with("مرحبا {name_ar} {course_name}", &values),
            "مرحبا سلمى {course_name}"
        );
    }

    #[test]
    fn placeholders_are_listed_once_in_order() {
        assert_eq!(
            placeholders("{b} {a} {b} {c d} {a} {}"),
            vec!["b", "a", "c d"]
        );
        assert_eq!(
            unknown_placeholders(&dictionary(), "{name_ar} {typo} {salutation_ar} {typo}"),
            vec!["typo"]
        );
    }
}
