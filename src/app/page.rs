// SPDX-License-Identifier: MPL-2.0
//! The page sections and the order in which they re-read their texts.

use crate::i18n::{fluent::I18n, Localized};
use crate::ui::{about, contact_form, footer, header, main_screen, services};

/// One independently localized region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Services,
    About,
    ContactForm,
    Footer,
    MainScreen,
}

/// Order in which sections are refreshed after a language switch.
///
/// Every [`Section`] appears exactly once.
pub const REFRESH_ORDER: [Section; 6] = [
    Section::Header,
    Section::Services,
    Section::About,
    Section::ContactForm,
    Section::Footer,
    Section::MainScreen,
];

/// State of every section on the page.
#[derive(Debug, Default)]
pub struct Page {
    pub header: header::State,
    pub main_screen: main_screen::State,
    pub services: services::State,
    pub about: about::State,
    pub contact_form: contact_form::State,
    pub footer: footer::State,
}

impl Page {
    #[must_use]
    pub fn new(i18n: &I18n) -> Self {
        let mut page = Self::default();
        page.refresh_texts(i18n);
        page
    }

    pub fn section_mut(&mut self, section: Section) -> &mut dyn Localized {
        match section {
            Section::Header => &mut self.header,
            Section::Services => &mut self.services,
            Section::About => &mut self.about,
            Section::ContactForm => &mut self.contact_form,
            Section::Footer => &mut self.footer,
            Section::MainScreen => &mut self.main_screen,
        }
    }

    /// Re-reads the texts of every section in [`REFRESH_ORDER`].
    pub fn refresh_texts(&mut self, i18n: &I18n) {
        for section in REFRESH_ORDER {
            self.section_mut(section).refresh_texts(i18n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use std::collections::HashSet;

    /// Position of a section in the enum; the match fails to compile when a
    /// variant is added without updating it.
    fn ordinal(section: Section) -> usize {
        match section {
            Section::Header => 0,
            Section::Services => 1,
            Section::About => 2,
            Section::ContactForm => 3,
            Section::Footer => 4,
            Section::MainScreen => 5,
        }
    }

    #[test]
    fn refresh_order_covers_every_section_once() {
        let unique: HashSet<_> = REFRESH_ORDER.iter().copied().collect();
        assert_eq!(unique.len(), REFRESH_ORDER.len());

        let mut seen = [false; REFRESH_ORDER.len()];
        for section in REFRESH_ORDER {
            seen[ordinal(section)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn refresh_order_is_fixed() {
        assert_eq!(REFRESH_ORDER[0], Section::Header);
        assert_eq!(REFRESH_ORDER[5], Section::MainScreen);
    }

    #[test]
    fn page_refresh_reaches_all_sections() {
        let mut i18n = I18n::new(Language::Ru).expect("translations");
        let mut page = Page::new(&i18n);

        i18n.set_language("en");
        page.refresh_texts(&i18n);

        assert_eq!(page.header.texts().language_switch, "RU");
        assert_eq!(page.main_screen.texts().title, "IT THAT DOESN'T DISTURB");
        assert_eq!(page.services.title(), "Our Services");
        assert_eq!(page.about.texts().title, "About Us");
        assert_eq!(page.contact_form.texts().title, "Get in Touch");
        assert_eq!(page.footer.copyright(), "© 2025 Zen-cat. All rights reserved.");
    }
}
