//! Section registry: the ordered, fixed list of card sections.
//!
//! All sections exist for the lifetime of the card; none are created or
//! destroyed at runtime. Sections are addressed by their integer index in
//! `[0, len)`.

use serde::{Deserialize, Serialize};

/// The themed sections of the card, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    Welcome,
    Apology,
    Feelings,
    Importance,
    Birthday,
    Wishes,
    Promises,
    Choice,
    Surprise,
    Finale,
}

impl SectionKind {
    /// Every section kind, in card order.
    pub const ALL: [SectionKind; 10] = [
        SectionKind::Welcome,
        SectionKind::Apology,
        SectionKind::Feelings,
        SectionKind::Importance,
        SectionKind::Birthday,
        SectionKind::Wishes,
        SectionKind::Promises,
        SectionKind::Choice,
        SectionKind::Surprise,
        SectionKind::Finale,
    ];

    /// Short label used for indicator tooltips and ARIA text.
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionKind::Welcome => "Welcome",
            SectionKind::Apology => "From My Heart",
            SectionKind::Feelings => "What You Mean to Me",
            SectionKind::Importance => "Why You Matter",
            SectionKind::Birthday => "Happy Birthday",
            SectionKind::Wishes => "My Wishes for You",
            SectionKind::Promises => "My Promises",
            SectionKind::Choice => "Your Choice",
            SectionKind::Surprise => "A Surprise",
            SectionKind::Finale => "One Last Thing",
        }
    }

    /// Theme class applied to the section's render target.
    pub fn theme_class(&self) -> &'static str {
        match self {
            SectionKind::Welcome => "theme-welcome",
            SectionKind::Apology => "theme-apology",
            SectionKind::Feelings => "theme-feelings",
            SectionKind::Importance => "theme-importance",
            SectionKind::Birthday => "theme-birthday",
            SectionKind::Wishes => "theme-wishes",
            SectionKind::Promises => "theme-promises",
            SectionKind::Choice => "theme-choice",
            SectionKind::Surprise => "theme-surprise",
            SectionKind::Finale => "theme-finale",
        }
    }
}

/// The stable anchor id for a section's render target.
pub fn section_anchor_id(index: usize) -> String {
    format!("section-{index}")
}

/// One entry in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Position in the card, `[0, len)`
    pub index: usize,
    /// Which themed section this is
    pub kind: SectionKind,
}

/// Ordered, fixed-size list of sections.
///
/// Constructed once at startup and never mutated; no dynamic
/// insertion or removal.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// The standard ten-section card.
    pub fn standard() -> Self {
        Self {
            sections: SectionKind::ALL
                .iter()
                .enumerate()
                .map(|(index, &kind)| Section { index, kind })
                .collect(),
        }
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// A card always has at least one section, but keep clippy honest.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether `index` addresses a section.
    pub fn contains(&self, index: usize) -> bool {
        index < self.sections.len()
    }

    /// Look up a section by index.
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Index of the final section.
    pub fn last(&self) -> usize {
        self.sections.len().saturating_sub(1)
    }

    /// Index of the first section of the given kind.
    pub fn index_of(&self, kind: SectionKind) -> Option<usize> {
        self.sections.iter().position(|s| s.kind == kind)
    }

    /// Iterate sections in card order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_ten_sections() {
        let registry = SectionRegistry::standard();
        assert_eq!(registry.len(), 10);
        assert_eq!(registry.last(), 9);
        assert!(!registry.is_empty());
    }

    #[test]
    fn sections_are_indexed_in_order() {
        let registry = SectionRegistry::standard();
        for (i, section) in registry.iter().enumerate() {
            assert_eq!(section.index, i);
            assert_eq!(section.kind, SectionKind::ALL[i]);
        }
    }

    #[test]
    fn contains_matches_bounds() {
        let registry = SectionRegistry::standard();
        assert!(registry.contains(0));
        assert!(registry.contains(9));
        assert!(!registry.contains(10));
        assert!(!registry.contains(usize::MAX));
    }

    #[test]
    fn anchor_ids_are_stable() {
        assert_eq!(section_anchor_id(0), "section-0");
        assert_eq!(section_anchor_id(7), "section-7");
    }

    #[test]
    fn kind_lookup() {
        let registry = SectionRegistry::standard();
        assert_eq!(registry.index_of(SectionKind::Birthday), Some(4));
        assert_eq!(registry.index_of(SectionKind::Choice), Some(7));
        assert_eq!(registry.index_of(SectionKind::Surprise), Some(8));
    }
}
