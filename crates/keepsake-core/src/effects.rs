//! Section-entry effect dispatch.
//!
//! A fixed, total mapping from section index to the effects fired when that
//! section is entered via navigation (not via scroll synchronization). Built
//! once at startup from the registry; most entries are empty.

use serde::{Deserialize, Serialize};

use crate::registry::{SectionKind, SectionRegistry};

/// A fire-and-forget visual effect handle.
///
/// Effects have no return value and no error channel. `ResetChoice` is the
/// one entry the engine also applies internally (resetting the choice
/// machine) before surfacing it to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Restart the confetti shower on the birthday section
    ConfettiBurst,
    /// Reset the choice interaction: buttons re-enabled, response cleared
    ResetChoice,
    /// Start the decorative looping sparkle animation
    SparkleLoop,
}

/// Total mapping from section index to entry effects.
#[derive(Debug, Clone)]
pub struct EffectTable {
    entries: Vec<Vec<EffectKind>>,
}

impl EffectTable {
    /// Build the standard table for a registry: confetti on entering the
    /// birthday section, a choice reset on entering the choice section, the
    /// sparkle loop on entering the surprise section. Every index gets an
    /// entry, empty for unmapped sections.
    pub fn for_registry(registry: &SectionRegistry) -> Self {
        let mut entries = vec![Vec::new(); registry.len()];
        for section in registry.iter() {
            let effects: &[EffectKind] = match section.kind {
                SectionKind::Birthday => &[EffectKind::ConfettiBurst],
                SectionKind::Choice => &[EffectKind::ResetChoice],
                SectionKind::Surprise => &[EffectKind::SparkleLoop],
                _ => &[],
            };
            entries[section.index].extend_from_slice(effects);
        }
        Self { entries }
    }

    /// Entry effects for a section. Out-of-range indices dispatch nothing.
    pub fn for_index(&self, index: usize) -> &[EffectKind] {
        self.entries.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of entries; equals the registry length.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_total_over_registry() {
        let registry = SectionRegistry::standard();
        let table = EffectTable::for_registry(&registry);
        assert_eq!(table.len(), registry.len());
        // every index answers, even if with nothing
        for i in 0..registry.len() {
            let _ = table.for_index(i);
        }
    }

    #[test]
    fn fixed_entries() {
        let registry = SectionRegistry::standard();
        let table = EffectTable::for_registry(&registry);
        assert_eq!(table.for_index(4), &[EffectKind::ConfettiBurst]);
        assert_eq!(table.for_index(7), &[EffectKind::ResetChoice]);
        assert_eq!(table.for_index(8), &[EffectKind::SparkleLoop]);
    }

    #[test]
    fn unmapped_and_out_of_range_dispatch_nothing() {
        let registry = SectionRegistry::standard();
        let table = EffectTable::for_registry(&registry);
        assert!(table.for_index(0).is_empty());
        assert!(table.for_index(9).is_empty());
        assert!(table.for_index(10).is_empty());
    }
}
