use std::cmp::Reverse;

use ahash::HashSet;
use innate_data::{
    AbilityFlag,
    Id,
};
use itertools::Itertools;

use crate::{
    attrs::{
        AttrKind,
        Attribute,
    },
    condition::Condition,
    hooks::Hook,
};

/// One attribute attached to an ability, along with its dispatch metadata.
#[derive(Debug)]
pub struct AttributeSpec {
    pub(crate) attr: Box<dyn Attribute>,
    pub(crate) condition: Option<Condition>,
    pub(crate) order: usize,
    pub(crate) priority: i32,
}

impl AttributeSpec {
    pub fn attr(&self) -> &dyn Attribute {
        self.attr.as_ref()
    }

    /// Condition gating this attribute alone, on top of any ability-level
    /// condition.
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Position of the attribute in its ability's definition. Breaks priority
    /// ties during dispatch.
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }
}

/// A complete ability definition: identity, capability flags, and the
/// attributes that implement its behavior.
///
/// Definitions are immutable once built (see
/// [`AbilityBuilder`][crate::abilities::AbilityBuilder]) and are shared
/// across battles through an [`AbilityRegistry`][crate::abilities::AbilityRegistry].
#[derive(Debug)]
pub struct AbilityDefinition {
    pub(crate) id: Id,
    pub(crate) name: String,
    pub(crate) generation: u8,
    pub(crate) condition: Option<Condition>,
    pub(crate) flags: HashSet<AbilityFlag>,
    pub(crate) attrs: Vec<AttributeSpec>,
}

impl AbilityDefinition {
    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Generation the ability was introduced in.
    pub fn generation(&self) -> u8 {
        self.generation
    }

    /// Condition gating every attribute of the ability at once.
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    pub fn flags(&self) -> &HashSet<AbilityFlag> {
        &self.flags
    }

    pub fn has_flag(&self, flag: AbilityFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn attrs(&self) -> &[AttributeSpec] {
        &self.attrs
    }

    pub fn attr_count(&self) -> usize {
        self.attrs.len()
    }

    /// Whether any attribute of the ability has the given kind.
    pub fn has_attr(&self, kind: AttrKind) -> bool {
        self.attrs.iter().any(|spec| spec.attr.kind() == kind)
    }

    /// Attributes registered for the given hook, in dispatch order: higher
    /// priority first, definition order breaking ties.
    pub fn attrs_for_hook(&self, hook: Hook) -> Vec<&AttributeSpec> {
        self.attrs
            .iter()
            .filter(|spec| spec.attr.hook() == hook)
            .sorted_by_key(|spec| (Reverse(spec.priority), spec.order))
            .collect()
    }
}
