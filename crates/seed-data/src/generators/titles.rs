//! Per-locale vocabulary for book titles.
//!
//! `fake` only ships Latin lorem words, so titles outside English are composed
//! from these subjects and templates, with `{name}` filled by a localized
//! first name.

use crate::config::ContentLocale;

pub(crate) const SUBJECT: &str = "{subject}";
pub(crate) const NAME: &str = "{name}";

pub(crate) struct TitleVocabulary {
    pub subjects: &'static [&'static str],
    pub templates: &'static [&'static str],
}

static FR_FR: TitleVocabulary = TitleVocabulary {
    subjects: &[
        "Le Secret",
        "La Nuit",
        "Les Mémoires",
        "Le Voyage",
        "La Maison",
        "Le Silence",
        "L'Héritage",
        "La Lettre",
        "Le Jardin",
        "La Mer",
    ],
    templates: &["{subject}", "{subject} de {name}", "{subject} d'hiver"],
};

static PT_BR: TitleVocabulary = TitleVocabulary {
    subjects: &[
        "O Segredo",
        "A Noite",
        "As Memórias",
        "A Viagem",
        "A Casa",
        "O Silêncio",
        "A Herança",
        "A Carta",
        "O Jardim",
        "O Mar",
    ],
    templates: &["{subject}", "{subject} de {name}", "{subject} do sertão"],
};

static ZH_CN: TitleVocabulary = TitleVocabulary {
    subjects: &[
        "秘密", "长夜", "回忆录", "旅程", "老房子", "沉默", "遗产", "来信", "花园", "大海",
    ],
    templates: &["{subject}", "{name}的{subject}"],
};

static JA_JP: TitleVocabulary = TitleVocabulary {
    subjects: &[
        "秘密", "夜", "回想録", "旅", "家", "沈黙", "遺産", "手紙", "庭", "海",
    ],
    templates: &["{subject}", "{name}の{subject}"],
};

impl TitleVocabulary {
    /// Vocabulary for `locale`, or `None` where lorem words already read right.
    pub fn for_locale(locale: ContentLocale) -> Option<&'static TitleVocabulary> {
        match locale {
            ContentLocale::En => None,
            ContentLocale::FrFr => Some(&FR_FR),
            ContentLocale::PtBr => Some(&PT_BR),
            ContentLocale::ZhCn => Some(&ZH_CN),
            ContentLocale::JaJp => Some(&JA_JP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_all_use_a_subject() {
        for locale in [
            ContentLocale::FrFr,
            ContentLocale::PtBr,
            ContentLocale::ZhCn,
            ContentLocale::JaJp,
        ] {
            let vocabulary = TitleVocabulary::for_locale(locale).unwrap();
            assert!(!vocabulary.subjects.is_empty());
            assert!(vocabulary.templates.iter().all(|t| t.contains(SUBJECT)));
        }
        assert!(TitleVocabulary::for_locale(ContentLocale::En).is_none());
    }
}
