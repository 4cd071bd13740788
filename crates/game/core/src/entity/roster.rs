use std::collections::HashSet;

use super::model::Entity;
use super::RosterError;

/// The static list of guessable entities for one game variant.
///
/// A `Roster` is never empty and never holds two entities with the same
/// identifier; both are checked once at construction so the daily selector
/// and the session can index into it without further checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    entities: Vec<Entity>,
}

impl Roster {
    /// # Errors
    ///
    /// - [`RosterError::Empty`] if `entities` is empty
    /// - [`RosterError::DuplicateIdentifier`] if two entities share an id
    pub fn new(entities: Vec<Entity>) -> Result<Self, RosterError> {
        if entities.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut seen = HashSet::with_capacity(entities.len());
        for entity in &entities {
            if !seen.insert(entity.id()) {
                return Err(RosterError::DuplicateIdentifier(entity.id().to_owned()));
            }
        }

        Ok(Self { entities })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Entity at `index`, wrapping around the roster length.
    pub fn at(&self, index: usize) -> &Entity {
        &self.entities[index % self.entities.len()]
    }

    /// Exact, case-sensitive identifier lookup.
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    /// Resolves typed player input to an entity.
    ///
    /// Tries an exact identifier match first, then a case-insensitive match on
    /// the trimmed input.
    pub fn lookup(&self, input: &str) -> Option<&Entity> {
        let input = input.trim();
        self.get(input).or_else(|| {
            let folded = input.to_lowercase();
            self.entities
                .iter()
                .find(|entity| entity.id().to_lowercase() == folded)
        })
    }

    /// Entities whose identifier starts with `prefix` (case-insensitive,
    /// trimmed), in roster order, skipping those for which `exclude` is true.
    pub fn suggest(
        &self,
        prefix: &str,
        exclude: impl Fn(&Entity) -> bool,
        limit: usize,
    ) -> Vec<&Entity> {
        let prefix = prefix.trim().to_lowercase();
        self.entities
            .iter()
            .filter(|entity| entity.id().trim().to_lowercase().starts_with(&prefix))
            .filter(|entity| !exclude(*entity))
            .take(limit)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(vec![
            Entity::new("Knight"),
            Entity::new("Mini P.E.K.K.A"),
            Entity::new("Mega Knight"),
            Entity::new("Musketeer"),
        ])
        .unwrap()
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert_eq!(Roster::new(Vec::new()), Err(RosterError::Empty));
    }

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let err = Roster::new(vec![Entity::new("Knight"), Entity::new("Knight")]).unwrap_err();
        assert_eq!(err, RosterError::DuplicateIdentifier("Knight".into()));
    }

    #[test]
    fn identity_lookup_is_case_sensitive_but_input_lookup_is_not() {
        let roster = roster();
        assert!(roster.get("knight").is_none());
        assert_eq!(roster.lookup("  knight ").map(Entity::id), Some("Knight"));
        assert!(roster.lookup("Archer").is_none());
    }

    #[test]
    fn suggest_filters_by_prefix_and_exclusion_in_roster_order() {
        let roster = roster();

        let names: Vec<_> = roster
            .suggest("M", |_| false, 8)
            .into_iter()
            .map(Entity::id)
            .collect();
        assert_eq!(names, ["Mini P.E.K.K.A", "Mega Knight", "Musketeer"]);

        let names: Vec<_> = roster
            .suggest("m", |e| e.id() == "Mega Knight", 1)
            .into_iter()
            .map(Entity::id)
            .collect();
        assert_eq!(names, ["Mini P.E.K.K.A"]);
    }

    #[test]
    fn at_wraps_around() {
        let roster = roster();
        assert_eq!(roster.at(5).id(), "Mini P.E.K.K.A");
    }
}
