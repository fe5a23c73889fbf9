use typebridge_core::ExternalType;

use super::{CodeWriter, quote};
use crate::context::GenerationContext;

/// Backing storage field of a reflected enum.
const STORAGE_FIELD: &str = "value__";

impl GenerationContext<'_> {
    /// Values come from member storage and are written verbatim; duplicates
    /// and gaps are kept.
    pub(super) fn emit_enum(&mut self, ty: &ExternalType) -> String {
        let name = ty.bare_name();
        let key = ty
            .attribute("EnumKeyAttribute")
            .and_then(|attr| attr.string_value())
            .map(str::to_string)
            .unwrap_or_else(|| ty.full_name());

        let members: Vec<String> = ty
            .fields
            .iter()
            .filter(|field| field.name != STORAGE_FIELD)
            .enumerate()
            .map(|(index, field)| {
                let value = field.value.unwrap_or(index as i64);
                format!("{} = {}", field.name, value)
            })
            .collect();

        let mut w = CodeWriter::new();
        w.open(&format!("export enum {}", name));
        let last = members.len().saturating_sub(1);
        for (i, member) in members.iter().enumerate() {
            if i == last {
                w.line(member);
            } else {
                w.line(&format!("{},", member));
            }
        }
        w.close();
        w.line(&format!(
            "{}({}, {});",
            self.config.runtime.register_enum,
            name,
            quote(&key)
        ));
        w.finish()
    }
}
