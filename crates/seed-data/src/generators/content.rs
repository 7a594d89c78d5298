//! Localized text generation for names, titles, and email addresses.

use fake::Fake;
use fake::faker::internet::raw::SafeEmail;
use fake::faker::lorem::raw::Words;
use fake::faker::name::raw::{FirstName, Name};
use fake::locales::{EN, FR_FR, JA_JP, PT_BR, ZH_CN};
use rand::Rng;

use super::titles::{NAME, SUBJECT, TitleVocabulary};
use crate::config::ContentLocale;

/// Source of the free-text fields of generated rows.
pub trait ContentGenerator {
    /// A full person name, used for authors and borrowers.
    fn person_name<R: Rng>(&self, rng: &mut R) -> String;

    /// A book title.
    fn book_title<R: Rng>(&self, rng: &mut R) -> String;

    /// An email address.
    fn email_address<R: Rng>(&self, rng: &mut R) -> String;
}

/// Expands a raw faker for the given locale.
macro_rules! localized {
    ($locale:expr, $faker:ident($($arg:expr),*), $rng:expr) => {
        match $locale {
            ContentLocale::En => $faker(EN $(, $arg)*).fake_with_rng($rng),
            ContentLocale::FrFr => $faker(FR_FR $(, $arg)*).fake_with_rng($rng),
            ContentLocale::PtBr => $faker(PT_BR $(, $arg)*).fake_with_rng($rng),
            ContentLocale::ZhCn => $faker(ZH_CN $(, $arg)*).fake_with_rng($rng),
            ContentLocale::JaJp => $faker(JA_JP $(, $arg)*).fake_with_rng($rng),
        }
    };
}

/// [`ContentGenerator`] backed by the `fake` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeContent {
    locale: ContentLocale,
}

impl FakeContent {
    pub fn new(locale: ContentLocale) -> Self {
        Self { locale }
    }
}

impl ContentGenerator for FakeContent {
    fn person_name<R: Rng>(&self, rng: &mut R) -> String {
        localized!(self.locale, Name(), rng)
    }

    fn book_title<R: Rng>(&self, rng: &mut R) -> String {
        let Some(vocabulary) = TitleVocabulary::for_locale(self.locale) else {
            let words: Vec<String> = Words(EN, 2..6).fake_with_rng(rng);
            return capitalize_first(&words.join(" "));
        };

        let template = vocabulary.templates[rng.gen_range(0..vocabulary.templates.len())];
        let subject = vocabulary.subjects[rng.gen_range(0..vocabulary.subjects.len())];
        let mut title = template.replace(SUBJECT, subject);
        if title.contains(NAME) {
            let name: String = localized!(self.locale, FirstName(), rng);
            title = title.replace(NAME, &name);
        }
        title
    }

    fn email_address<R: Rng>(&self, rng: &mut R) -> String {
        // Emails stay ASCII regardless of the configured locale.
        SafeEmail(EN).fake_with_rng(rng)
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
