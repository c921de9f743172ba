//! The variable dictionary and the per-template variable sets.
//!
//! Both tables are static configuration. The built-in instances are created
//! lazily on first use and never change afterwards; tests and callers with
//! their own configuration build instances through `from_entries`/`from_sets`.

use crate::model::language::Language;
use crate::model::variable::{VariableDescriptor, VariableEntry};
use log::warn;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static BUILTIN_DICTIONARY: Lazy<VariableDictionary> =
    Lazy::new(|| VariableDictionary::from_entries(builtin_entries()));

static BUILTIN_SETS: Lazy<TemplateVariableSets> =
    Lazy::new(|| TemplateVariableSets::from_sets(builtin_sets()));

/// Lookup table from variable key (`student_name_ar`, ...) to its labels and
/// example values.
#[derive(Debug, Clone, Default)]
pub struct VariableDictionary {
    entries: HashMap<String, VariableEntry>,
}

impl VariableDictionary {
    pub fn builtin() -> &'static VariableDictionary {
        &BUILTIN_DICTIONARY
    }

    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, VariableEntry)>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// A miss is not an error. Callers decide whether to pass the placeholder
    /// through (rendering) or drop it (variable listings).
    pub fn lookup(&self, key: &str) -> Option<&VariableEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn describe(&self, key: &str, language: Language) -> Option<VariableDescriptor> {
        self.lookup(key).map(|entry| VariableDescriptor {
            key: key.to_string(),
            label: entry.label.clone(),
            label_en: entry.label_en.clone(),
            icon: entry.icon.clone(),
            example: entry.example(language).to_string(),
        })
    }
}

/// Ordered variable keys offered for each template type.
#[derive(Debug, Clone, Default)]
pub struct TemplateVariableSets {
    sets: Vec<(String, Vec<String>)>,
}

impl TemplateVariableSets {
    pub fn builtin() -> &'static TemplateVariableSets {
        &BUILTIN_SETS
    }

    pub fn from_sets<T, K, I, J>(sets: I) -> Self
    where
        T: Into<String>,
        K: Into<String>,
        J: IntoIterator<Item = K>,
        I: IntoIterator<Item = (T, J)>,
    {
        Self {
            sets: sets
                .into_iter()
                .map(|(t, keys)| (t.into(), keys.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    pub fn keys_for(&self, template_type: &str) -> Option<&[String]> {
        self.sets
            .iter()
            .find(|(t, _)| t == template_type)
            .map(|(_, keys)| keys.as_slice())
    }

    pub fn contains(&self, template_type: &str) -> bool {
        self.keys_for(template_type).is_some()
    }

    /// Template types in declaration order.
    pub fn template_types(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|(t, _)| t.as_str())
    }

    /// Resolves the variables offered for `template_type`, keeping the set's
    /// order. Keys missing from `dictionary` are dropped and logged.
    pub fn variables_for(
        &self,
        dictionary: &VariableDictionary,
        template_type: &str,
        language: Language,
    ) -> Vec<VariableDescriptor> {
        let Some(keys) = self.keys_for(template_type) else {
            return Vec::new();
        };
        keys.iter()
            .filter_map(|key| {
                let descriptor = dictionary.describe(key, language);
                if descriptor.is_none() {
                    warn!(
                        "Variable set of template '{}' references unknown variable '{}'",
                        template_type, key
                    );
                }
                descriptor
            })
            .collect()
    }
}

fn builtin_entries() -> Vec<(&'static str, VariableEntry)> {
    vec![
        ("salutation_ar", VariableEntry::new("التحية", "Salutation", "waving_hand", "عزيزي", "Dear")),
        ("student_name_ar", VariableEntry::new("اسم الطالب (عربي)", "Student name (Arabic)", "person", "ممدوح", "Mamdouh")),
        ("student_name_en", VariableEntry::new("اسم الطالب (إنجليزي)", "Student name (English)", "person_outline", "Mamdouh", "Mamdouh")),
        ("parent_name", VariableEntry::new("اسم ولي الأمر", "Parent name", "family_restroom", "أحمد علي", "Ahmed Ali")),
        ("course_name", VariableEntry::new("اسم الدورة", "Course name", "school", "أساسيات البرمجة", "Programming Basics")),
        ("curriculum_name", VariableEntry::new("المنهج", "Curriculum", "menu_book", "المنهج البريطاني", "British curriculum")),
        ("group_name", VariableEntry::new("اسم المجموعة", "Group name", "groups", "مجموعة أ", "Group A")),
        ("teacher_name", VariableEntry::new("اسم المعلم", "Teacher name", "co_present", "سارة محمد", "Sara Mohamed")),
        ("session_title", VariableEntry::new("عنوان الحصة", "Session title", "event_note", "الحصة الأولى", "Session 1")),
        ("session_date", VariableEntry::new("تاريخ الحصة", "Session date", "event", "١٥ يناير ٢٠٢٦", "15 January 2026")),
        ("session_time", VariableEntry::new("وقت الحصة", "Session time", "schedule", "٥:٠٠ مساءً", "5:00 PM")),
        ("meeting_link", VariableEntry::new("رابط الاجتماع", "Meeting link", "link", "https://zoom.us/j/123456789", "https://zoom.us/j/123456789")),
        ("platform_name", VariableEntry::new("المنصة", "Platform", "videocam", "زوم", "Zoom")),
        ("package_name", VariableEntry::new("اسم الباقة", "Package name", "inventory_2", "باقة ٢٠ ساعة", "20-hour package")),
        ("remaining_hours", VariableEntry::new("الساعات المتبقية", "Remaining hours", "hourglass_bottom", "٣", "3")),
        ("total_hours", VariableEntry::new("إجمالي الساعات", "Total hours", "timer", "٢٠", "20")),
        ("expiry_date", VariableEntry::new("تاريخ الانتهاء", "Expiry date", "event_busy", "٣٠ يونيو ٢٠٢٦", "30 June 2026")),
        ("academy_name", VariableEntry::new("اسم الأكاديمية", "Academy name", "apartment", "أكاديمية المستقبل", "Future Academy")),
        ("support_phone", VariableEntry::new("رقم الدعم", "Support phone", "support_agent", "+966500000000", "+966500000000")),
    ]
}

fn builtin_sets() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        (
            "student_welcome",
            vec!["salutation_ar", "student_name_ar", "student_name_en", "course_name", "curriculum_name", "academy_name", "support_phone"],
        ),
        (
            "parent_welcome",
            vec!["salutation_ar", "parent_name", "student_name_ar", "course_name", "academy_name", "support_phone"],
        ),
        (
            "session_reminder",
            vec!["salutation_ar", "student_name_ar", "session_title", "session_date", "session_time", "meeting_link", "platform_name"],
        ),
        (
            "group_activated",
            vec!["salutation_ar", "student_name_ar", "group_name", "course_name", "teacher_name", "session_date", "session_time"],
        ),
        (
            "session_link_changed",
            vec!["student_name_ar", "session_title", "session_date", "meeting_link", "platform_name"],
        ),
        (
            "package_low_balance",
            vec!["salutation_ar", "parent_name", "student_name_ar", "package_name", "remaining_hours", "support_phone"],
        ),
        (
            "package_renewed",
            vec!["salutation_ar", "student_name_ar", "package_name", "total_hours", "expiry_date"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_sets_only_reference_known_variables() {
        let dictionary = VariableDictionary::builtin();
        for template_type in TemplateVariableSets::builtin().template_types() {
            let keys = TemplateVariableSets::builtin()
                .keys_for(template_type)
                .unwrap_or_default();
            for key in keys {
                assert!(
                    dictionary.contains(key),
                    "{template_type} references unknown variable {key}"
                );
            }
        }
    }

    #[test]
    fn variables_follow_set_order_and_language() {
        let descriptors = TemplateVariableSets::builtin().variables_for(
            VariableDictionary::builtin(),
            "session_reminder",
            Language::En,
        );
        let keys: Vec<&str> = descriptors.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "salutation_ar",
                "student_name_ar",
                "session_title",
                "session_date",
                "session_time",
                "meeting_link",
                "platform_name"
            ]
        );
        assert_eq!(descriptors[1].example, "Mamdouh");
        assert_eq!(descriptors[1].label_en, "Student name (Arabic)");
    }

    #[test]
    fn keys_missing_from_dictionary_are_dropped() {
        let dictionary = VariableDictionary::from_entries([(
            "name_ar",
            VariableEntry::new("الاسم", "Name", "person", "ممدوح", "Mamdouh"),
        )]);
        let sets = TemplateVariableSets::from_sets([("welcome", ["typo_key", "name_ar"])]);

        let descriptors = sets.variables_for(&dictionary, "welcome", Language::Ar);
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].key, "name_ar");
        assert_eq!(descriptors[0].example, "ممدوح");
        assert_eq!(descriptors[0].token(), "{name_ar}");
    }

    #[test]
    fn unknown_template_type_yields_no_variables() {
        let descriptors = TemplateVariableSets::builtin().variables_for(
            VariableDictionary::builtin(),
            "does_not_exist",
            Language::Ar,
        );
        assert!(descriptors.is_empty());
    }
}
