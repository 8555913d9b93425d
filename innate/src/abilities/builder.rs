use ahash::HashSet;
use innate_data::{
    AbilityFlag,
    Id,
};

use crate::{
    abilities::{
        AbilityDefinition,
        AttributeSpec,
    },
    attrs::Attribute,
    condition::Condition,
};

/// Builder for [`AbilityDefinition`]s.
///
/// Attributes are attached one at a time and dispatch in attachment order
/// unless given an explicit priority. Capability flags accumulate through
/// the named methods.
pub struct AbilityBuilder {
    name: String,
    generation: u8,
    condition: Option<Condition>,
    flags: HashSet<AbilityFlag>,
    attrs: Vec<AttributeSpec>,
}

impl AbilityBuilder {
    pub fn new(name: impl Into<String>, generation: u8) -> Self {
        Self {
            name: name.into(),
            generation,
            condition: None,
            flags: HashSet::default(),
            attrs: Vec::new(),
        }
    }

    /// Attaches an attribute.
    pub fn attr(self, attr: impl Attribute + 'static) -> Self {
        self.push_attr(Box::new(attr), None, 0)
    }

    /// Attaches an attribute gated by its own condition, separate from any
    /// ability-level condition.
    pub fn conditional_attr(self, attr: impl Attribute + 'static, condition: Condition) -> Self {
        self.push_attr(Box::new(attr), Some(condition), 0)
    }

    /// Attaches an attribute that dispatches before (higher priority) or
    /// after (lower) the default-priority attributes of the same hook.
    pub fn attr_with_priority(self, attr: impl Attribute + 'static, priority: i32) -> Self {
        self.push_attr(Box::new(attr), None, priority)
    }

    fn push_attr(
        mut self,
        attr: Box<dyn Attribute>,
        condition: Option<Condition>,
        priority: i32,
    ) -> Self {
        let order = self.attrs.len();
        self.attrs.push(AttributeSpec {
            attr,
            condition,
            order,
            priority,
        });
        self
    }

    /// Gates every attribute of the ability behind one condition.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    fn flag(mut self, flag: AbilityFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    /// "Ignore abilities" effects bypass this ability.
    pub fn ignorable(self) -> Self {
        self.flag(AbilityFlag::Ignorable)
    }

    pub fn unsuppressable(self) -> Self {
        self.flag(AbilityFlag::Unsuppressable)
    }

    pub fn uncopiable(self) -> Self {
        self.flag(AbilityFlag::Uncopiable)
    }

    pub fn unreplaceable(self) -> Self {
        self.flag(AbilityFlag::Unreplaceable)
    }

    /// The ability's attributes still fire while the holder has just
    /// fainted, such as contact punishment from a lethal hit.
    pub fn bypasses_faint(self) -> Self {
        self.flag(AbilityFlag::BypassesFaint)
    }

    pub fn unimplemented(self) -> Self {
        self.flag(AbilityFlag::Unimplemented)
    }

    pub fn partial(self) -> Self {
        self.flag(AbilityFlag::Partial)
    }

    pub fn edge_case(self) -> Self {
        self.flag(AbilityFlag::EdgeCase)
    }

    pub fn build(self) -> AbilityDefinition {
        AbilityDefinition {
            id: Id::from(self.name.as_str()),
            name: self.name,
            generation: self.generation,
            condition: self.condition,
            flags: self.flags,
            attrs: self.attrs,
        }
    }
}
