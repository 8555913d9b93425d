use anyhow::Result;
use indexmap::IndexMap;
use innate_data::{
    Id,
    MoveData,
    WrapOptionError,
    general_error,
};

/// The move catalog consumed by a battle, keyed by normalized identifier.
///
/// Move data is host input: the battle only reads it. Construction fails
/// fast on duplicate identifiers.
#[derive(Debug)]
pub struct MoveDex {
    moves: IndexMap<Id, MoveData>,
}

impl MoveDex {
    pub fn new<I>(moves: I) -> Result<Self>
    where
        I: IntoIterator<Item = MoveData>,
    {
        let mut map = IndexMap::new();
        for mov in moves {
            let id = mov.id();
            if map.insert(id.clone(), mov).is_some() {
                return Err(general_error(format!("move {id} defined twice")));
            }
        }
        Ok(Self { moves: map })
    }

    pub fn get(&self, id: &Id) -> Result<&MoveData> {
        self.moves
            .get(id)
            .wrap_not_found_error_with_format(format_args!("move {id}"))
    }

    pub fn contains(&self, id: &Id) -> bool {
        self.moves.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
