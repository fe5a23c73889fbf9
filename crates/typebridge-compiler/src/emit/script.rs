//! Declarations for types reflected from compiled script assemblies.
//!
//! A static module (abstract and sealed) becomes `declare namespace` with
//! `function` and `let` members; an interface becomes `interface`; anything
//! else becomes `declare class`. Member names follow the script compiler's
//! rules: an explicit `ScriptName`, else the name as written under
//! `PreserveCase` or a type-level `PreserveMemberCase`, else camel case.

use typebridge_core::utils::to_camel_case;
use typebridge_core::{ExternalArgument, ExternalMember, ExternalMethod, ExternalProperty, ExternalType};

use super::CodeWriter;
use crate::context::GenerationContext;
use crate::translate::Scope;
use crate::ts::TsType;

const SCRIPT_NAME: &str = "System.Runtime.CompilerServices.ScriptNameAttribute";
const PRESERVE_CASE: &str = "System.Runtime.CompilerServices.PreserveCaseAttribute";
const PRESERVE_MEMBER_CASE: &str = "System.Runtime.CompilerServices.PreserveMemberCaseAttribute";
const INLINE_CODE: &str = "System.Runtime.CompilerServices.InlineCodeAttribute";
const INTRINSIC_PROPERTY: &str = "System.Runtime.CompilerServices.IntrinsicPropertyAttribute";
const SERIALIZABLE: &str = "System.SerializableAttribute";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Class,
    Interface,
    StaticModule,
}

/// Per-declaration settings shared by member emitters.
struct Layout<'s> {
    shape: Shape,
    preserve_case: bool,
    serializable: bool,
    scope: Scope<'s>,
}

impl GenerationContext<'_> {
    pub(super) fn emit_script(&mut self, ty: &ExternalType) -> String {
        let namespace = self.resolver().emit_namespace(&ty.namespace).to_string();
        let shape = if ty.is_interface {
            Shape::Interface
        } else if ty.is_static_module() {
            Shape::StaticModule
        } else {
            Shape::Class
        };
        let layout = Layout {
            shape,
            preserve_case: ty.has_attribute(PRESERVE_MEMBER_CASE),
            serializable: ty.is_serializable || ty.has_attribute(SERIALIZABLE),
            scope: Scope::new(&namespace).with_type_params(&ty.generic_parameters),
        };

        let mut header = match shape {
            Shape::Interface => format!("export interface {}", ty.bare_name()),
            Shape::StaticModule => format!("export declare namespace {}", ty.bare_name()),
            Shape::Class => format!("export declare class {}", ty.bare_name()),
        };
        if shape == Shape::Class {
            if !ty.generic_parameters.is_empty() {
                header.push_str(&format!("<{}>", ty.generic_parameters.join(", ")));
            }
            if let Some(base) = ty.base_type.as_deref().filter(|b| !b.is_empty() && *b != "System.Object")
            {
                let base = self.translator().script(base, &layout.scope, "Object");
                header.push_str(&format!(" extends {}", base));
            }
        }

        let mut w = CodeWriter::new();
        w.open(&header);

        for field in &ty.fields {
            let line = self.script_field(field, &layout);
            w.line(&line);
        }

        if shape == Shape::Class
            && let Some(ctor) = widest_constructor(ty)
        {
            let args = self.script_arguments(&ctor.arguments, &layout.scope);
            w.line(&format!("constructor({});", args));
        }

        for method in &ty.methods {
            if method.is_accessor_or_special() {
                continue;
            }
            if let Some(line) = self.script_method(method, None, &layout) {
                w.line(&line);
            }
        }

        for property in &ty.properties {
            for line in self.script_property(ty, property, &layout) {
                w.line(&line);
            }
        }

        w.close();
        w.finish()
    }

    fn script_field(&mut self, field: &ExternalMember, layout: &Layout<'_>) -> String {
        let name = member_name(field, None, layout.preserve_case);
        let field_type = self.translator().script(&field.type_name, &layout.scope, "any");
        format!("{}{}: {};", static_prefix(layout.shape, field.is_static, "let"), name, field_type)
    }

    /// `renamed` replaces the method's own name before naming rules apply.
    fn script_method(
        &mut self,
        method: &ExternalMethod,
        renamed: Option<&str>,
        layout: &Layout<'_>,
    ) -> Option<String> {
        if method.member.has_attribute(INLINE_CODE) {
            return None;
        }
        let name = member_name(&method.member, renamed, layout.preserve_case);
        let args = self.script_arguments(&method.arguments, &layout.scope);
        let ret = match method.member.type_name.as_str() {
            "" | "System.Void" => TsType::void(),
            text => self.translator().script(text, &layout.scope, "any"),
        };
        Some(format!(
            "{}{}({}): {};",
            static_prefix(layout.shape, method.member.is_static, "function"),
            name,
            args,
            ret
        ))
    }

    /// A data member for serializable types and intrinsic properties,
    /// otherwise `get_x`/`set_x` accessor methods.
    fn script_property(
        &mut self,
        ty: &ExternalType,
        property: &ExternalProperty,
        layout: &Layout<'_>,
    ) -> Vec<String> {
        if property.has_no_accessors() {
            return Vec::new();
        }

        let name = member_name(&property.member, None, layout.preserve_case);
        if layout.serializable || property.member.has_attribute(INTRINSIC_PROPERTY) {
            let property_type = self
                .translator()
                .script(&property.member.type_name, &layout.scope, "any");
            return vec![format!(
                "{}{}: {};",
                static_prefix(layout.shape, property.member.is_static, "let"),
                name,
                property_type
            )];
        }

        let accessors = [
            (property.get_method.as_deref(), "get_"),
            (property.set_method.as_deref(), "set_"),
        ];
        accessors
            .into_iter()
            .filter_map(|(accessor, prefix)| {
                let method = ty.method(accessor.filter(|a| !a.is_empty())?)?;
                let renamed = format!("{}{}", prefix, name);
                self.script_method(method, Some(&renamed), layout)
            })
            .collect()
    }

    fn script_arguments(&mut self, arguments: &[ExternalArgument], scope: &Scope<'_>) -> String {
        arguments
            .iter()
            .map(|arg| {
                let optional = if arg.is_optional || arg.has_default { "?" } else { "" };
                let arg_type = self.translator().script(&arg.type_name, scope, "any");
                format!("{}{}: {}", arg.name, optional, arg_type)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Constructor with the most arguments, when it has any.
fn widest_constructor(ty: &ExternalType) -> Option<&ExternalMethod> {
    ty.methods
        .iter()
        .filter(|m| m.is_constructor)
        .fold(None, |widest: Option<&ExternalMethod>, m| match widest {
            Some(w) if w.arguments.len() >= m.arguments.len() => Some(w),
            _ => Some(m),
        })
        .filter(|ctor| !ctor.arguments.is_empty())
}

fn member_name(member: &ExternalMember, renamed: Option<&str>, preserve_member_case: bool) -> String {
    if let Some(script_name) = member
        .attribute(SCRIPT_NAME)
        .and_then(|attr| attr.string_value())
    {
        return script_name.to_string();
    }
    let name = renamed.unwrap_or(&member.name);
    if preserve_member_case || member.has_attribute(PRESERVE_CASE) {
        name.to_string()
    } else {
        to_camel_case(name)
    }
}

/// `keyword ` for statics of a static module, `static ` for other statics.
fn static_prefix(shape: Shape, is_static: bool, keyword: &str) -> String {
    match (shape, is_static) {
        (Shape::StaticModule, true) => format!("{} ", keyword),
        (_, true) => "static ".to_string(),
        (_, false) => String::new(),
    }
}
