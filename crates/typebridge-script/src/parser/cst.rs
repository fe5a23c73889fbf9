//! Syntax kinds for the TypeScript declaration subset.
//!
//! `SyntaxKind` serves as both token kind (from the lexer) and node kind
//! (from the parser). Logos derives token recognition; node kinds carry no
//! token attributes. `TsLang` implements Rowan's `Language` trait.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then the `__LAST` sentinel.
/// `#[repr(u16)]` enables the transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("<")]
    AngleOpen,

    #[token(">")]
    AngleClose,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("=")]
    Equals,

    #[token("?")]
    Question,

    /// `=>` in function types and arrow functions. Defined before `Equals`.
    #[token("=>")]
    FatArrow,

    #[token("|")]
    Pipe,

    #[token("&")]
    Amp,

    /// Operators that only appear inside skipped bodies and initializers.
    #[regex(r"[+\-*/%!~^@#]")]
    Punct,

    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    #[regex(r"'(?:[^'\\\n]|\\.)*'")]
    StringLit,

    #[regex(r"`(?:[^`\\]|\\.)*`")]
    TemplateLit,

    #[regex(r"[0-9][0-9a-zA-Z_.]*")]
    Number,

    #[token("namespace")]
    KwNamespace,

    #[token("module")]
    KwModule,

    #[token("declare")]
    KwDeclare,

    #[token("export")]
    KwExport,

    #[token("default")]
    KwDefault,

    #[token("import")]
    KwImport,

    #[token("class")]
    KwClass,

    #[token("interface")]
    KwInterface,

    #[token("extends")]
    KwExtends,

    #[token("implements")]
    KwImplements,

    #[token("abstract")]
    KwAbstract,

    #[token("public")]
    KwPublic,

    #[token("private")]
    KwPrivate,

    #[token("protected")]
    KwProtected,

    #[token("static")]
    KwStatic,

    #[token("readonly")]
    KwReadonly,

    #[token("constructor")]
    KwConstructor,

    #[token("enum")]
    KwEnum,

    #[token("function")]
    KwFunction,

    #[token("var")]
    KwVar,

    #[token("let")]
    KwLet,

    #[token("const")]
    KwConst,

    #[token("type")]
    KwType,

    /// Identifier. Defined after keywords so they take precedence.
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Id,

    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*+[^*/])*\*+/")]
    BlockComment,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    SourceFile,
    Decorator,
    ModuleDecl,
    ModuleName,
    ModuleBody,
    ImportAlias,
    ClassDecl,
    InterfaceDecl,
    TypeParams,
    TypeParam,
    ExtendsClause,
    ImplementsClause,
    TypeRef,
    TypeArgs,
    TypeBody,
    PropertyMember,
    MethodMember,
    ConstructorMember,
    AccessorMember,
    IndexMember,
    MemberName,
    TypeAnnotation,
    TypeExpr,
    ParamList,
    Initializer,
    Block,
    OtherStatement,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Newline | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage)
    }

    /// Reserved words; all of them are valid member names.
    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwNamespace as u16..=KwType as u16).contains(&(self as u16))
    }

    /// Tokens that can name a class or interface member.
    #[inline]
    pub fn is_member_name(self) -> bool {
        matches!(self, Id | StringLit | Number) || self.is_keyword()
    }

    #[inline]
    pub fn is_open_delimiter(self) -> bool {
        matches!(self, ParenOpen | BracketOpen | BraceOpen)
    }

    #[inline]
    pub fn is_close_delimiter(self) -> bool {
        matches!(self, ParenClose | BracketClose | BraceClose)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TsLang {}

impl Language for TsLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<TsLang>;
pub type SyntaxToken = rowan::SyntaxToken<TsLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of token kinds for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                // SAFETY: bounded by `__LAST`, SyntaxKind is repr(u16)
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Modifiers that may precede a statement.
    pub const STATEMENT_MODIFIERS: TokenSet =
        TokenSet::new(&[KwExport, KwDeclare, KwDefault, KwAbstract]);

    /// Modifiers that may precede a class member.
    pub const MEMBER_MODIFIERS: TokenSet = TokenSet::new(&[
        KwPublic,
        KwPrivate,
        KwProtected,
        KwStatic,
        KwReadonly,
        KwAbstract,
        KwDeclare,
    ]);

    /// Keywords that start a new statement after a line break.
    pub const STATEMENT_START: TokenSet = TokenSet::new(&[
        KwExport,
        KwDeclare,
        KwNamespace,
        KwModule,
        KwImport,
        KwClass,
        KwInterface,
        KwAbstract,
        KwEnum,
        KwFunction,
        KwVar,
        KwLet,
        KwConst,
        KwType,
    ]);

    /// A line ending in one of these continues on the next line.
    pub const CONTINUES_AFTER: TokenSet = TokenSet::new(&[
        Pipe, Amp, Dot, FatArrow, Equals, Comma, Colon, Question, Punct, AngleOpen, ParenOpen,
        BracketOpen,
    ]);

    /// A line starting with one of these continues the previous line.
    pub const CONTINUES_BEFORE: TokenSet =
        TokenSet::new(&[Pipe, Amp, Dot, FatArrow, Question, Colon]);

    /// Closing tokens and statement terminators that end a type in any context.
    pub const TYPE_END: TokenSet = TokenSet::new(&[
        Semicolon,
        ParenClose,
        BracketClose,
        BraceClose,
        AngleClose,
    ]);

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, Newline, LineComment, BlockComment]);
}
