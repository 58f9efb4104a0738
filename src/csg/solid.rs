use crate::backend::MaterialRef;
use crate::geometry::BoxSpec;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the store.
    pub struct SolidId;
}

/// A boolean expression over box primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum CsgNode {
    Primitive(BoxSpec),
    /// Left operand minus right operand.
    Difference(Box<CsgNode>, Box<CsgNode>),
    Union(Box<CsgNode>, Box<CsgNode>),
}

impl CsgNode {
    /// Visits every primitive in the tree.
    pub fn for_each_primitive(&self, f: &mut impl FnMut(&BoxSpec)) {
        match self {
            Self::Primitive(spec) => f(spec),
            Self::Difference(a, b) | Self::Union(a, b) => {
                a.for_each_primitive(f);
                b.for_each_primitive(f);
            }
        }
    }

    /// Visits every primitive in the tree mutably.
    pub fn for_each_primitive_mut(&mut self, f: &mut impl FnMut(&mut BoxSpec)) {
        match self {
            Self::Primitive(spec) => f(spec),
            Self::Difference(a, b) | Self::Union(a, b) => {
                a.for_each_primitive_mut(f);
                b.for_each_primitive_mut(f);
            }
        }
    }
}

/// Data associated with a solid.
#[derive(Debug, Clone)]
pub struct SolidData {
    /// The solid's boolean tree.
    pub node: CsgNode,
    pub name: Option<String>,
    pub material: Option<MaterialRef>,
}

impl SolidData {
    /// Unnamed solid without material.
    #[must_use]
    pub fn new(node: CsgNode) -> Self {
        Self {
            node,
            name: None,
            material: None,
        }
    }
}
