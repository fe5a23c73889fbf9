//! TypeScript type expressions produced by the translator.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    /// A type name with optional type arguments: `string`, `Serenity.ListRequest`,
    /// `Q.Lookup<OrderRow>`.
    Named { name: String, args: Vec<TsType> },
    Array(Box<TsType>),
    /// `T | null`. Never nested, see [`TsType::nullable`].
    Nullable(Box<TsType>),
    /// `(p1: A, p2: B) => R`
    Function {
        params: Vec<TsType>,
        ret: Box<TsType>,
    },
    /// `{ [key: string]: V }`
    Dictionary {
        numeric_keys: bool,
        value: Box<TsType>,
    },
}

impl TsType {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TsType>) -> Self {
        Self::Named {
            name: name.into(),
            args,
        }
    }

    pub fn any() -> Self {
        Self::named("any")
    }

    pub fn void() -> Self {
        Self::named("void")
    }

    pub fn array(element: TsType) -> Self {
        Self::Array(Box::new(element))
    }

    /// Wrap in `| null` unless already nullable.
    pub fn nullable(inner: TsType) -> Self {
        match inner {
            Self::Nullable(_) => inner,
            other => Self::Nullable(Box::new(other)),
        }
    }

    pub fn function(params: Vec<TsType>, ret: TsType) -> Self {
        Self::Function {
            params,
            ret: Box::new(ret),
        }
    }

    pub fn dictionary(key: &TsType, value: TsType) -> Self {
        Self::Dictionary {
            numeric_keys: key.is_named("number"),
            value: Box::new(value),
        }
    }

    pub fn is_named(&self, expected: &str) -> bool {
        matches!(self, Self::Named { name, args } if args.is_empty() && name == expected)
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Nullable and function types bind looser than `[]` and `|`.
    fn needs_parens(&self) -> bool {
        matches!(self, Self::Nullable(_) | Self::Function { .. })
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.needs_parens() {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, args } => {
                f.write_str(name)?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            Self::Array(element) => {
                element.fmt_operand(f)?;
                f.write_str("[]")
            }
            Self::Nullable(inner) => {
                inner.fmt_operand(f)?;
                f.write_str(" | null")
            }
            Self::Function { params, ret } => {
                f.write_str("(")?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "p{}: {}", i + 1, param)?;
                }
                write!(f, ") => {}", ret)
            }
            Self::Dictionary {
                numeric_keys,
                value,
            } => {
                let key = if *numeric_keys { "number" } else { "string" };
                write!(f, "{{ [key: {}]: {} }}", key, value)
            }
        }
    }
}
