//! Namespace-relative type naming.

use typebridge_core::ExternalType;
use typebridge_core::utils::{split_full_name, strip_arity, strip_namespace_suffix};

use crate::config::Config;

/// Computes how a type is referenced from inside a namespace block.
///
/// Only exact matches shorten: a reference from `App.Orders` to a type in
/// `App` stays fully qualified.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'c> {
    config: &'c Config,
}

impl<'c> Resolver<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Namespace a type is emitted into, with configured suffixes removed.
    pub fn emit_namespace<'n>(&self, namespace: &'n str) -> &'n str {
        strip_namespace_suffix(namespace, &self.config.strip_namespace_suffixes)
    }

    /// Reference to `namespace.name` as seen from `current`.
    pub fn shorten(&self, namespace: &str, name: &str, current: &str) -> String {
        let name = strip_arity(name);
        let namespace = self.emit_namespace(namespace);
        if namespace.is_empty() || namespace == current || self.is_using(namespace) {
            name.to_string()
        } else {
            format!("{}.{}", namespace, name)
        }
    }

    /// [`Resolver::shorten`] for a dotted full name.
    pub fn shorten_full(&self, full_name: &str, current: &str) -> String {
        let (namespace, name) = split_full_name(full_name);
        self.shorten(namespace, name, current)
    }

    pub fn shorten_type(&self, ty: &ExternalType, current: &str) -> String {
        if self.is_widget(&ty.full_name()) {
            return format!("{}<any>", self.config.widget_type);
        }
        self.shorten(&ty.namespace, &ty.name, current)
    }

    /// The widget base's own type parameter cannot be expressed here.
    pub fn is_widget(&self, full_name: &str) -> bool {
        strip_arity(full_name) == self.config.widget_type
    }

    fn is_using(&self, namespace: &str) -> bool {
        self.config.using_namespaces.iter().any(|ns| ns == namespace)
    }
}
