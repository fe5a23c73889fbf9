use typebridge_core::{ExternalType, RowField, TypeSig};

use super::{CodeWriter, quote};
use crate::context::GenerationContext;
use crate::translate::Scope;
use crate::ts::TsType;

const LOOKUP_SCRIPT: &str = "LookupScriptAttribute";

impl GenerationContext<'_> {
    pub(super) fn emit_entity(&mut self, ty: &ExternalType) -> String {
        let name = ty.bare_name();
        let namespace = self.resolver().emit_namespace(&ty.namespace).to_string();
        let scope = Scope::new(&namespace);
        let row = ty.row.clone().unwrap_or_default();

        let fields: Vec<RowField> = if row.fields.is_empty() {
            property_fields(ty)
        } else {
            row.fields.clone()
        };

        let mut statics = Vec::new();
        let roles = [
            ("idProperty", &row.id_property),
            ("isActiveProperty", &row.is_active_property),
            ("nameProperty", &row.name_property),
            ("localTextPrefix", &row.local_text_prefix),
        ];
        for (constant, value) in roles {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                statics.push(format!("static readonly {} = {};", constant, quote(value)));
            }
        }
        let lookup_key = row
            .lookup_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| self.lookup_key(ty));
        if let Some(key) = &lookup_key {
            statics.push(format!("static readonly lookupKey = {};", quote(key)));
        }

        let mut w = CodeWriter::new();
        w.open(&format!("export class {}", name));
        for line in &statics {
            w.line(line);
        }

        if let Some(key) = &lookup_key {
            let hooks = &self.config.runtime;
            w.blank();
            w.open(&format!(
                "static get Lookup(): {}<{}>",
                hooks.lookup_type, name
            ));
            w.line(&format!(
                "return {}<{}>({});",
                hooks.get_lookup,
                name,
                quote(key)
            ));
            w.close();
        }

        if !statics.is_empty() && !fields.is_empty() {
            w.blank();
        }
        for field in &fields {
            let field_type = self.field_type(field, &scope);
            w.line(&format!("{}?: {};", field.property_name(), field_type));
        }
        w.close();

        w.blank();
        w.open(&format!("export namespace {}", name));
        w.open("export namespace Fields");
        for field in &fields {
            w.line(&format!(
                "export const {} = {};",
                field.property_name(),
                quote(field.wire_name())
            ));
        }
        w.close();
        w.close();
        w.finish()
    }

    /// Enum fields are typed as the enum, explicitly nullable.
    fn field_type(&mut self, field: &RowField, scope: &Scope<'_>) -> TsType {
        if let Some(enum_type) = field.enum_type.as_deref().filter(|e| !e.is_empty()) {
            return TsType::nullable(self.translator().runtime_text(enum_type, scope));
        }
        if field.value_type.is_empty() {
            return TsType::any();
        }
        self.translator().runtime_text(&field.value_type, scope)
    }

    /// Key of the row's own lookup script, or of a lookup script type whose
    /// base has the row as a generic argument.
    fn lookup_key(&self, ty: &ExternalType) -> Option<String> {
        if let Some(attr) = ty.attribute(LOOKUP_SCRIPT) {
            return attr.string_value().map(str::to_string);
        }

        let row_name = ty.full_name();
        self.model
            .iter()
            .filter_map(|script| Some((script, script.attribute(LOOKUP_SCRIPT)?)))
            .find(|(script, _)| {
                script
                    .base_type
                    .as_deref()
                    .and_then(|base| TypeSig::parse(base).ok())
                    .is_some_and(|sig| sig.args.iter().any(|arg| arg.definition_name() == row_name))
            })
            .and_then(|(_, attr)| attr.string_value().map(str::to_string))
    }
}

/// Row fields from public instance properties, for rows without metadata.
fn property_fields(ty: &ExternalType) -> Vec<RowField> {
    ty.properties
        .iter()
        .filter(|p| !p.member.is_static && !p.member.is_protected)
        .map(|p| RowField {
            property_name: p.member.name.clone(),
            value_type: p.member.type_name.clone(),
            ..RowField::default()
        })
        .collect()
}
