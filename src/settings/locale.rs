//! Locale-resolved UI strings.

use serde::{Deserialize, Serialize};

/// The fixed label set the slicer surface needs from the host locale.
///
/// Resolved once at engine construction. Chinese locales (any `zh` prefix
/// in the tag) get the Chinese set, everything else falls back to English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiStrings {
    pub clear_label: String,
    pub reset_label: String,
    /// Header placeholder shown before any field is bound.
    pub field_placeholder: String,
}

impl UiStrings {
    /// Resolves the label set for a BCP 47 locale tag.
    #[must_use]
    pub fn for_locale(tag: &str) -> Self {
        if is_chinese(tag) {
            Self {
                clear_label: "清除".to_owned(),
                reset_label: "重置".to_owned(),
                field_placeholder: "字段名".to_owned(),
            }
        } else {
            Self {
                clear_label: "Clear".to_owned(),
                reset_label: "Reset".to_owned(),
                field_placeholder: "Field".to_owned(),
            }
        }
    }
}

impl Default for UiStrings {
    fn default() -> Self {
        Self::for_locale("en-US")
    }
}

fn is_chinese(tag: &str) -> bool {
    tag.trim()
        .get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("zh"))
}

#[cfg(test)]
mod tests {
    use super::UiStrings;

    #[test]
    fn chinese_tags_resolve_the_chinese_set() {
        for tag in ["zh", "zh-CN", "zh-TW", "ZH-Hant", " zh-SG"] {
            let strings = UiStrings::for_locale(tag);
            assert_eq!(strings.clear_label, "清除", "tag {tag}");
            assert_eq!(strings.reset_label, "重置", "tag {tag}");
            assert_eq!(strings.field_placeholder, "字段名", "tag {tag}");
        }
    }

    #[test]
    fn everything_else_resolves_english() {
        for tag in ["en-US", "de-DE", "ja-JP", "z", ""] {
            let strings = UiStrings::for_locale(tag);
            assert_eq!(strings.clear_label, "Clear", "tag {tag}");
        }
    }
}
