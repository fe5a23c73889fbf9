//! Generation settings, loadable from `typebridge.toml`.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Settings for one generation run.
///
/// Every key is optional in TOML; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Namespaces whose types are always referenced by bare name.
    pub using_namespaces: Vec<String>,

    /// Namespace suffixes dropped when placing a type in the output
    /// (`App.Northwind.Entities` is emitted into `App.Northwind`).
    pub strip_namespace_suffixes: Vec<String>,

    /// Generic widget base, always referenced as `Widget<any>`.
    pub widget_type: String,

    /// Base classes that mark a server type as a service controller.
    pub controller_bases: Vec<String>,

    /// Base classes that mark a server type as a data row.
    pub row_bases: Vec<String>,

    /// Service method parameters supplied by the host, not the client.
    pub service_skip_parameters: Vec<String>,

    /// Assembly name prefixes whose types are never emitted.
    pub exclude_assemblies: Vec<String>,

    /// Server types declared by hand elsewhere, mapped to their script names.
    pub known_types: IndexMap<String, String>,

    pub runtime: RuntimeHooks,
}

/// Script-side helpers the emitted code calls into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeHooks {
    pub service_request: String,
    pub service_options: String,
    pub xhr_type: String,
    pub get_lookup: String,
    pub lookup_type: String,
    pub register_enum: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            using_namespaces: Vec::new(),
            strip_namespace_suffixes: strings(&[".Entities", ".Endpoints"]),
            widget_type: "Serenity.Widget".to_string(),
            controller_bases: strings(&[
                "System.Web.Mvc.Controller",
                "Microsoft.AspNetCore.Mvc.Controller",
            ]),
            row_bases: strings(&["Serenity.Data.Row"]),
            service_skip_parameters: strings(&[
                "System.Data.IDbConnection",
                "Serenity.Data.IUnitOfWork",
            ]),
            exclude_assemblies: strings(&["Serenity.Script"]),
            known_types: default_known_types(),
            runtime: RuntimeHooks::default(),
        }
    }
}

impl Default for RuntimeHooks {
    fn default() -> Self {
        Self {
            service_request: "Q.serviceRequest".to_string(),
            service_options: "Q.ServiceOptions".to_string(),
            xhr_type: "JQueryXHR".to_string(),
            get_lookup: "Q.getLookup".to_string(),
            lookup_type: "Q.Lookup".to_string(),
            register_enum: "Serenity.Decorators.registerEnum".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn using_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.using_namespaces.push(namespace.into());
        self
    }

    pub fn strip_namespace_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.strip_namespace_suffixes.push(suffix.into());
        self
    }

    pub fn widget_type(mut self, full_name: impl Into<String>) -> Self {
        self.widget_type = full_name.into();
        self
    }

    pub fn controller_base(mut self, full_name: impl Into<String>) -> Self {
        self.controller_bases.push(full_name.into());
        self
    }

    pub fn row_base(mut self, full_name: impl Into<String>) -> Self {
        self.row_bases.push(full_name.into());
        self
    }

    pub fn exclude_assembly(mut self, prefix: impl Into<String>) -> Self {
        self.exclude_assemblies.push(prefix.into());
        self
    }

    pub fn known_type(mut self, full_name: impl Into<String>, script_name: impl Into<String>) -> Self {
        self.known_types.insert(full_name.into(), script_name.into());
        self
    }

    pub fn runtime(mut self, hooks: RuntimeHooks) -> Self {
        self.runtime = hooks;
        self
    }

    pub fn is_excluded_assembly(&self, assembly: &str) -> bool {
        self.exclude_assemblies
            .iter()
            .any(|prefix| assembly.starts_with(prefix.as_str()))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_known_types() -> IndexMap<String, String> {
    [
        "ServiceRequest",
        "ServiceResponse",
        "ListRequest",
        "ListResponse`1",
        "RetrieveRequest",
        "RetrieveResponse`1",
        "SaveRequest`1",
        "SaveResponse",
        "DeleteRequest",
        "DeleteResponse",
        "UndeleteRequest",
        "UndeleteResponse",
    ]
    .into_iter()
    .map(|name| {
        let script = typebridge_core::utils::strip_arity(name);
        (
            format!("Serenity.Services.{}", name),
            format!("Serenity.{}", script),
        )
    })
    .collect()
}
