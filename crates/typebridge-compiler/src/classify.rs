//! Declaration kind of a discovered type.

use typebridge_core::{ExternalType, Origin, TypeModel};

use crate::config::Config;

/// What kind of declaration a type is emitted as. Computed once per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Enum,
    /// Server controller, emitted as a service client namespace.
    Service,
    /// Server data row.
    Entity,
    /// Server data transfer object, emitted as an interface.
    PlainObject,
    /// Type reflected from compiled script metadata.
    ScriptDeclaration,
}

impl Classification {
    /// Kinds the server seeds its discovery with.
    pub fn is_seed(self) -> bool {
        matches!(self, Self::Enum | Self::Service | Self::Entity)
    }
}

pub fn classify(ty: &ExternalType, model: &TypeModel, config: &Config) -> Classification {
    if ty.is_enum {
        return Classification::Enum;
    }

    match ty.origin {
        Origin::Server => {
            let full_name = ty.full_name();
            let inherits_any = |bases: &[String]| {
                bases
                    .iter()
                    .any(|base| full_name != *base && model.inherits_from(&full_name, base))
            };
            if inherits_any(&config.controller_bases) {
                Classification::Service
            } else if ty.row.is_some() || inherits_any(&config.row_bases) {
                Classification::Entity
            } else {
                Classification::PlainObject
            }
        }
        Origin::SecondaryRuntime => Classification::ScriptDeclaration,
        Origin::SecondarySource => Classification::PlainObject,
    }
}
