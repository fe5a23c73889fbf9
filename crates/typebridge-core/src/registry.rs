//! Append-only type registry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{ExternalType, Origin};
use crate::signature::TypeSig;

/// One JSON metadata dump: an assembly name and its types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Assembly {
    pub name: String,
    pub types: Vec<ExternalType>,
}

impl Assembly {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Stamp every type with `origin` and this assembly's name where missing.
    pub fn into_types(self, origin: Origin) -> impl Iterator<Item = ExternalType> {
        let name = self.name;
        self.types.into_iter().map(move |mut ty| {
            ty.origin = origin;
            if ty.assembly_name.is_empty() {
                ty.assembly_name.clone_from(&name);
            }
            ty
        })
    }
}

/// Registry of every known type for one generation run, keyed by full name.
///
/// Registration order is preserved. A name is defined at most once: the
/// first registration wins and later ones are ignored.
#[derive(Debug, Clone, Default)]
pub struct TypeModel {
    types: IndexMap<String, ExternalType>,
}

impl TypeModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn lookup(&self, full_name: &str) -> Option<&ExternalType> {
        self.types.get(full_name)
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.types.contains_key(full_name)
    }

    /// Returns `false` when the name was already registered.
    pub fn register_if_absent(&mut self, ty: ExternalType) -> bool {
        let full_name = ty.full_name();
        if self.types.contains_key(&full_name) {
            return false;
        }
        self.types.insert(full_name, ty);
        true
    }

    /// Types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ExternalType> {
        self.types.values()
    }

    /// Resolve a signature to its generic definition in the model.
    pub fn resolve(&self, sig: &TypeSig) -> Option<&ExternalType> {
        self.types
            .get(&sig.definition_name())
            .or_else(|| self.types.get(&sig.name))
    }

    /// Definition names of the base types of `full_name`, nearest first.
    ///
    /// The walk stops at the first base that is not in the model (it is still
    /// included) and on any cycle.
    pub fn base_chain(&self, full_name: &str) -> Vec<String> {
        let mut chain: Vec<String> = Vec::new();
        let mut current = self.lookup(full_name);
        while let Some(ty) = current {
            let Some(base) = ty.base_type.as_deref() else {
                break;
            };
            let Ok(sig) = TypeSig::parse(base) else {
                break;
            };
            let base_name = sig.definition_name();
            if base_name == full_name || chain.contains(&base_name) {
                break;
            }
            current = self.resolve(&sig);
            chain.push(base_name);
        }
        chain
    }

    /// `full_name` itself or one of its bases matches `ancestor`, arity ignored.
    pub fn inherits_from(&self, full_name: &str, ancestor: &str) -> bool {
        let strip = crate::utils::strip_arity;
        strip(full_name) == ancestor
            || self
                .base_chain(full_name)
                .iter()
                .any(|base| strip(base) == ancestor)
    }
}

impl FromIterator<ExternalType> for TypeModel {
    fn from_iter<T: IntoIterator<Item = ExternalType>>(iter: T) -> Self {
        let mut model = Self::new();
        for ty in iter {
            model.register_if_absent(ty);
        }
        model
    }
}
