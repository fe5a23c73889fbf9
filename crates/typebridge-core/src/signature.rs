//! Textual type signatures.
//!
//! Grammar: `Name ('<' Args '>')? ('[]')*`, where `Name` may carry a CLR
//! arity suffix and `Args` is a comma-separated list of signatures. The
//! argument list is found by bracket-depth scanning and split at top-level
//! commas, then each argument is parsed recursively.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("empty type signature")]
    Empty,

    #[error("missing type name at offset {offset} in `{text}`")]
    MissingName { text: String, offset: usize },

    #[error("unbalanced `<` in `{0}`")]
    Unbalanced(String),

    #[error("unexpected `{found}` after type name in `{text}`")]
    Trailing { text: String, found: String },
}

/// A parsed type signature such as ``System.Collections.Generic.List`1<System.Int32>[]``.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSig {
    pub name: String,
    pub args: Vec<TypeSig>,
    /// Number of trailing `[]` suffixes.
    pub array_rank: usize,
}

impl TypeSig {
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            array_rank: 0,
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeSig>) -> Self {
        Self {
            name: name.into(),
            args,
            array_rank: 0,
        }
    }

    pub fn parse(text: &str) -> Result<Self, SignatureError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SignatureError::Empty);
        }

        let name_end = trimmed.find(['<', '[', '>', ',', ']']).unwrap_or(trimmed.len());
        let name = trimmed[..name_end].trim();
        if name.is_empty() {
            return Err(SignatureError::MissingName {
                text: trimmed.to_string(),
                offset: name_end,
            });
        }

        let mut rest = &trimmed[name_end..];
        let mut args = Vec::new();
        if rest.starts_with('<') {
            let close = matching_close(rest)
                .ok_or_else(|| SignatureError::Unbalanced(trimmed.to_string()))?;
            for part in split_generic_arguments(&rest[1..close]) {
                args.push(Self::parse(part)?);
            }
            rest = &rest[close + 1..];
        }

        let mut array_rank = 0;
        let mut tail = rest.trim_start();
        while let Some(after) = tail.strip_prefix('[') {
            let Some(after) = after.trim_start().strip_prefix(']') else {
                break;
            };
            array_rank += 1;
            tail = after.trim_start();
        }
        if !tail.is_empty() {
            return Err(SignatureError::Trailing {
                text: trimmed.to_string(),
                found: tail.to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            args,
            array_rank,
        })
    }

    pub fn is_array(&self) -> bool {
        self.array_rank > 0
    }

    /// The element signature of an array, one rank lower.
    pub fn element(&self) -> Option<TypeSig> {
        if self.array_rank == 0 {
            return None;
        }
        Some(Self {
            array_rank: self.array_rank - 1,
            ..self.clone()
        })
    }

    /// Name of the generic definition: ``List`1`` for `List<T>` or ``List`1<T>``.
    pub fn definition_name(&self) -> String {
        if self.args.is_empty() || self.name.contains('`') {
            self.name.clone()
        } else {
            format!("{}`{}", self.name, self.args.len())
        }
    }

    /// Definition name compared without its arity suffix.
    pub fn is_named(&self, name: &str) -> bool {
        crate::utils::strip_arity(&self.name) == name
    }
}

impl fmt::Display for TypeSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", arg)?;
            }
            f.write_str(">")?;
        }
        for _ in 0..self.array_rank {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

/// Split a generic argument list at commas outside nested brackets.
///
/// # Examples
/// ```
/// use typebridge_core::split_generic_arguments;
/// assert_eq!(
///     split_generic_arguments("System.String, List`1<Dictionary`2<A, B>>"),
///     vec!["System.String", "List`1<Dictionary`2<A, B>>"],
/// );
/// ```
pub fn split_generic_arguments(text: &str) -> Vec<&str> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '<' | '[' => depth += 1,
            '>' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(text[start..].trim());
    parts
}

/// Offset of the `>` closing the `<` at offset 0.
fn matching_close(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
