use typebridge_core::utils::strip_arity;
use typebridge_core::{ExternalMember, ExternalType, TypeSig};

use super::CodeWriter;
use crate::context::GenerationContext;
use crate::translate::Scope;

const JSON_IGNORE: &str = "Newtonsoft.Json.JsonIgnoreAttribute";
const JSON_PROPERTY: &str = "Newtonsoft.Json.JsonPropertyAttribute";

impl GenerationContext<'_> {
    pub(super) fn emit_object(&mut self, ty: &ExternalType) -> String {
        let namespace = self.resolver().emit_namespace(&ty.namespace).to_string();
        let scope = Scope::new(&namespace).with_type_params(&ty.generic_parameters);

        let base = ty
            .base_type
            .as_deref()
            .and_then(|text| TypeSig::parse(text).ok())
            .filter(|sig| sig.name != "System.Object")
            .and_then(|sig| {
                let rendered = self.translator().runtime_base(&sig, &scope)?;
                Some((sig, rendered))
            });

        // Members declared on the emitted base chain are inherited from its
        // declaration.
        let inherited: Vec<String> = match &base {
            Some((sig, _)) => {
                let mut chain = vec![sig.definition_name()];
                chain.extend(self.model.base_chain(&sig.definition_name()));
                chain
            }
            None => Vec::new(),
        };
        let is_inherited = |member: &ExternalMember| {
            member.declaring_type.as_deref().is_some_and(|declaring| {
                inherited
                    .iter()
                    .any(|base| base == declaring || strip_arity(base) == strip_arity(declaring))
            })
        };

        let members: Vec<&ExternalMember> = ty
            .fields
            .iter()
            .chain(ty.properties.iter().map(|p| &p.member))
            .filter(|m| !m.is_static && !m.is_protected)
            .filter(|m| !m.has_attribute(JSON_IGNORE))
            .filter(|m| !is_inherited(m))
            .collect();

        let mut header = format!("export interface {}", ty.bare_name());
        if !ty.generic_parameters.is_empty() {
            header.push_str(&format!("<{}>", ty.generic_parameters.join(", ")));
        }
        if let Some((_, rendered)) = &base {
            header.push_str(&format!(" extends {}", rendered));
        }

        let mut w = CodeWriter::new();
        w.open(&header);
        for member in members {
            let member_type = self.translator().runtime_text(&member.type_name, &scope);
            w.line(&format!("{}?: {};", wire_name(member), member_type));
        }
        w.close();
        w.finish()
    }
}

/// `JsonProperty` name when present, else the member name.
fn wire_name(member: &ExternalMember) -> &str {
    member
        .attribute(JSON_PROPERTY)
        .and_then(|attr| {
            attr.string_value()
                .or_else(|| attr.named_value("PropertyName")?.as_str())
        })
        .filter(|name| !name.is_empty())
        .unwrap_or(&member.name)
}
