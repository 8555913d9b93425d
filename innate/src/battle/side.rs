use ahash::HashMap;
use innate_data::Id;

/// One side of the battle.
///
/// Holds the side conditions (entry hazards and similar) that moves like
/// Spikes accumulate against it.
#[derive(Debug, Default)]
pub struct Side {
    conditions: HashMap<Id, u8>,
}

impl Side {
    /// The number of layers of the given side condition, zero if absent.
    pub fn condition_layers(&self, id: &Id) -> u8 {
        self.conditions.get(id).copied().unwrap_or(0)
    }

    pub fn has_condition(&self, id: &Id) -> bool {
        self.condition_layers(id) > 0
    }

    /// Adds one layer of a side condition, up to `max_layers`.
    ///
    /// Returns the new layer count, or `None` if the condition was already
    /// at its maximum.
    pub(crate) fn add_condition_layer(&mut self, id: &Id, max_layers: u8) -> Option<u8> {
        let layers = self.conditions.entry(id.clone()).or_insert(0);
        if *layers >= max_layers {
            return None;
        }
        *layers += 1;
        Some(*layers)
    }
}
