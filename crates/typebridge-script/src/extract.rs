//! Exported-class extraction from a TypeScript syntax tree.
//!
//! A single top-down walk over module bodies. Each body sees the import
//! aliases of its enclosing bodies plus its own; sibling bodies never see
//! each other's aliases.

use std::collections::HashSet;

use indexmap::IndexMap;
use typebridge_core::{ExternalMethod, ExternalProperty, ExternalType, Origin};

use crate::PassResult;
use crate::parser::{ClassDecl, Member, Parse, Stmt, parse};

/// Import aliases visible at one point of the tree.
///
/// Never mutated in place: [`AliasScope::with`] returns an extended copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasScope {
    aliases: IndexMap<String, String>,
}

impl AliasScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this scope with `alias` bound to `target`, shadowing any
    /// outer binding of the same alias.
    pub fn with(&self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        let mut aliases = self.aliases.clone();
        aliases.insert(alias.into(), target.into());
        Self { aliases }
    }

    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Replace the leading segment of a dotted reference when it names an
    /// alias. Undotted references are returned unchanged.
    ///
    /// ```
    /// use typebridge_script::AliasScope;
    ///
    /// let scope = AliasScope::new().with("M", "Mod.Sub");
    /// assert_eq!(scope.expand("M.X<T>"), "Mod.Sub.X<T>");
    /// assert_eq!(scope.expand("M"), "M");
    /// assert_eq!(scope.expand("N.X"), "N.X");
    /// ```
    pub fn expand(&self, reference: &str) -> String {
        let Some((head, rest)) = reference.split_once('.') else {
            return reference.to_string();
        };
        match self.resolve(head) {
            Some(target) => format!("{}.{}", target, rest),
            None => reference.to_string(),
        }
    }
}

/// Parse `source` and extract its exported classes.
///
/// `label` identifies the source in the model (its `assembly_name`).
pub fn extract_source(source: &str, label: &str) -> PassResult<Vec<ExternalType>> {
    let (parse, diagnostics) = parse(source)?;
    Ok((extract_types(&parse, label), diagnostics))
}

/// Extract every exported class of an already parsed file.
pub fn extract_types(parse: &Parse, label: &str) -> Vec<ExternalType> {
    let mut extractor = Extractor {
        label,
        types: Vec::new(),
    };
    let statements: Vec<Stmt> = parse.root().statements().collect();
    extractor.walk_body(&statements, &[], false, &AliasScope::new());
    extractor.types
}

struct Extractor<'a> {
    label: &'a str,
    types: Vec<ExternalType>,
}

impl Extractor<'_> {
    /// `namespace` holds the enclosing module names, outermost first.
    /// `declared` is set once any enclosing module carries `declare`.
    fn walk_body(
        &mut self,
        statements: &[Stmt],
        namespace: &[String],
        declared: bool,
        outer: &AliasScope,
    ) {
        // An import only affects the statements after it.
        let mut scope = outer.clone();

        for stmt in statements {
            match stmt {
                Stmt::Import(import) if !import.is_external() => {
                    if let (Some(alias), Some(target)) = (import.alias(), import.target()) {
                        scope = scope.with(alias.text(), target);
                    }
                }
                Stmt::Module(module) => {
                    let mut inner = namespace.to_vec();
                    if !module.is_ambient_module()
                        && let Some(name) = module.name()
                    {
                        inner.push(name);
                    }
                    let body: Vec<Stmt> = module.statements().collect();
                    self.walk_body(&body, &inner, declared || module.is_declare(), &scope);
                }
                Stmt::Class(class) => {
                    if let Some(ty) = self.extract_class(class, namespace, declared, &scope) {
                        self.types.push(ty);
                    }
                }
                Stmt::Import(_) | Stmt::Interface(_) | Stmt::Other(_) => {}
            }
        }
    }

    fn extract_class(
        &self,
        class: &ClassDecl,
        namespace: &[String],
        declared: bool,
        scope: &AliasScope,
    ) -> Option<ExternalType> {
        if !class.is_exported() {
            return None;
        }
        let name = class.name()?;

        let mut ty = ExternalType::new(namespace.join("."), name.text());
        ty.assembly_name = self.label.to_string();
        ty.origin = Origin::SecondarySource;
        ty.is_abstract = class.is_abstract();
        ty.is_declaration = declared;
        ty.generic_parameters = class
            .type_params()
            .filter_map(|param| param.name())
            .map(|token| token.text().to_string())
            .collect();
        ty.base_type = class.extends().map(|base| scope.expand(&base.text()));
        ty.interfaces = class
            .implements()
            .iter()
            .map(|iface| scope.expand(&iface.text()))
            .collect();

        let mut seen = HashSet::new();
        for member in class.body().iter().flat_map(|body| body.members()) {
            match member {
                Member::Property(prop) => {
                    let Some(name) = prop.name() else { continue };
                    if !seen.insert(name.clone()) {
                        continue;
                    }
                    let mut property = ExternalProperty::new(name, prop.type_text().unwrap_or_default());
                    property.member.is_static = prop.is_static();
                    property.member.is_protected = prop.is_protected();
                    ty.properties.push(property);
                }
                Member::Method(method) => {
                    let Some(name) = method.name() else { continue };
                    if !seen.insert(name.clone()) {
                        continue;
                    }
                    let mut extracted =
                        ExternalMethod::new(name, method.return_text().unwrap_or_default());
                    extracted.member.is_static = method.is_static();
                    extracted.member.is_protected = method.is_protected();
                    ty.methods.push(extracted);
                }
                Member::Constructor(_) | Member::Accessor(_) | Member::Index(_) => {}
            }
        }

        Some(ty)
    }
}
