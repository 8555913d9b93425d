use anyhow::Result;
use indexmap::IndexMap;
use innate_data::{
    Id,
    WrapOptionError,
    general_error,
};

use crate::abilities::AbilityDefinition;

/// An immutable collection of ability definitions, keyed by normalized
/// identifier.
///
/// A registry is built once and shared across battles (typically behind an
/// `Arc`). Construction fails fast on duplicate identifiers so that a
/// mistyped catalog cannot silently shadow an ability.
#[derive(Debug)]
pub struct AbilityRegistry {
    abilities: IndexMap<Id, AbilityDefinition>,
}

impl AbilityRegistry {
    pub fn new<I>(abilities: I) -> Result<Self>
    where
        I: IntoIterator<Item = AbilityDefinition>,
    {
        let mut map = IndexMap::new();
        for ability in abilities {
            let id = ability.id().clone();
            if map.insert(id.clone(), ability).is_some() {
                return Err(general_error(format!("ability {id} defined twice")));
            }
        }
        log::debug!("registered {} abilities", map.len());
        Ok(Self { abilities: map })
    }

    pub fn get(&self, id: &Id) -> Result<&AbilityDefinition> {
        self.abilities
            .get(id)
            .wrap_not_found_error_with_format(format_args!("ability {id}"))
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.abilities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// All definitions, in registration order.
    pub fn abilities(&self) -> impl Iterator<Item = &AbilityDefinition> {
        self.abilities.values()
    }
}
