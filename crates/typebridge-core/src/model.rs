//! Type model records.
//!
//! Every record deserializes from the PascalCase JSON emitted by the
//! reflection dumper. All keys are optional; a missing key takes the
//! field's default.

use serde::{Deserialize, Serialize};

use crate::utils::strip_arity;

/// Which extraction pipeline produced a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Origin {
    /// Reflected from the server runtime.
    #[default]
    Server,
    /// Reflected from compiled script assemblies.
    SecondaryRuntime,
    /// Extracted from script source text.
    SecondarySource,
}

impl Origin {
    pub fn is_secondary(self) -> bool {
        !matches!(self, Origin::Server)
    }
}

/// One declared type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExternalType {
    pub assembly_name: String,
    pub namespace: String,
    /// Simple name, possibly carrying a CLR arity suffix (``Grid`1``).
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<ExternalAttribute>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub generic_parameters: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ExternalMember>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<ExternalProperty>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<ExternalMethod>,
    pub is_enum: bool,
    pub is_interface: bool,
    pub is_abstract: bool,
    pub is_sealed: bool,
    pub is_serializable: bool,
    pub is_declaration: bool,
    pub origin: Origin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<RowMetadata>,
}

impl ExternalType {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// `Namespace.Name` with a `` `N `` suffix for generic definitions.
    pub fn full_name(&self) -> String {
        let mut full = if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        };
        if !self.name.contains('`') && !self.generic_parameters.is_empty() {
            full.push('`');
            full.push_str(&self.generic_parameters.len().to_string());
        }
        full
    }

    /// Simple name without the arity suffix.
    pub fn bare_name(&self) -> &str {
        strip_arity(&self.name)
    }

    /// Abstract and sealed: holds only static members.
    pub fn is_static_module(&self) -> bool {
        self.is_abstract && self.is_sealed
    }

    pub fn attribute(&self, name: &str) -> Option<&ExternalAttribute> {
        find_attribute(&self.attributes, name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    pub fn method(&self, name: &str) -> Option<&ExternalMethod> {
        self.methods.iter().find(|m| m.member.name == name)
    }
}

/// Field, or the shared part of a property or method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExternalMember {
    pub name: String,
    /// Textual type signature. Empty when undeclared.
    #[serde(rename = "Type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<ExternalAttribute>,
    pub is_static: bool,
    pub is_protected: bool,
    /// Full name of the type that declares an inherited member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaring_type: Option<String>,
    /// Literal value of an enum member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

impl ExternalMember {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Self::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&ExternalAttribute> {
        find_attribute(&self.attributes, name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExternalProperty {
    #[serde(flatten)]
    pub member: ExternalMember,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_method: Option<String>,
}

impl ExternalProperty {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            member: ExternalMember::new(name, type_name),
            ..Self::default()
        }
    }

    /// Neither accessor is known.
    pub fn has_no_accessors(&self) -> bool {
        is_blank(&self.get_method) && is_blank(&self.set_method)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExternalMethod {
    #[serde(flatten)]
    pub member: ExternalMember,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<ExternalArgument>,
    pub is_constructor: bool,
    pub is_override: bool,
    pub is_getter: bool,
    pub is_setter: bool,
}

impl ExternalMethod {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            member: ExternalMember::new(name, return_type),
            ..Self::default()
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.arguments.push(ExternalArgument {
            name: name.into(),
            type_name: type_name.into(),
            ..ExternalArgument::default()
        });
        self
    }

    pub fn is_accessor_or_special(&self) -> bool {
        self.is_constructor || self.is_override || self.is_getter || self.is_setter
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExternalArgument {
    pub name: String,
    #[serde(rename = "Type")]
    pub type_name: String,
    pub is_optional: bool,
    pub has_default: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExternalAttribute {
    #[serde(rename = "Type")]
    pub type_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<AttributeArgument>,
}

impl ExternalAttribute {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.push(AttributeArgument {
            name: None,
            value: value.into(),
        });
        self
    }

    /// Matches the full attribute name, or its last segment (`RouteAttribute`).
    pub fn is(&self, name: &str) -> bool {
        self.type_name == name
            || self
                .type_name
                .strip_suffix(name)
                .is_some_and(|prefix| prefix.ends_with('.'))
    }

    /// First positional string argument.
    pub fn string_value(&self) -> Option<&str> {
        self.arguments
            .iter()
            .filter(|a| a.name.is_none())
            .find_map(|a| a.value.as_str())
    }

    pub fn named_value(&self, name: &str) -> Option<&serde_json::Value> {
        self.arguments
            .iter()
            .find(|a| a.name.as_deref() == Some(name))
            .map(|a| &a.value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AttributeArgument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: serde_json::Value,
}

/// Row metadata reported by the server for entity types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RowMetadata {
    pub id_property: Option<String>,
    pub is_active_property: Option<String>,
    pub name_property: Option<String>,
    pub local_text_prefix: Option<String>,
    pub lookup_key: Option<String>,
    pub fields: Vec<RowField>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RowField {
    /// Field name in the database row.
    pub name: String,
    /// Empty when the property shares the field name.
    pub property_name: String,
    /// Name on the wire. Defaults to the property name.
    pub wire_name: Option<String>,
    pub value_type: String,
    pub enum_type: Option<String>,
}

impl RowField {
    pub fn property_name(&self) -> &str {
        if self.property_name.is_empty() {
            &self.name
        } else {
            &self.property_name
        }
    }

    pub fn wire_name(&self) -> &str {
        self.wire_name
            .as_deref()
            .filter(|w| !w.is_empty())
            .unwrap_or_else(|| self.property_name())
    }
}

fn find_attribute<'a>(attributes: &'a [ExternalAttribute], name: &str) -> Option<&'a ExternalAttribute> {
    attributes.iter().find(|a| a.is(name))
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
