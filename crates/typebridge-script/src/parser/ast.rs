//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` of one kind and exposes the pieces the
//! extractor reads. Accessors return `None` for parts lost to recovery.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(SourceFile, SourceFile);
ast_node!(ModuleDecl, ModuleDecl);
ast_node!(ImportAlias, ImportAlias);
ast_node!(ClassDecl, ClassDecl);
ast_node!(InterfaceDecl, InterfaceDecl);
ast_node!(OtherStatement, OtherStatement);
ast_node!(TypeParam, TypeParam);
ast_node!(TypeRef, TypeRef);
ast_node!(TypeBody, TypeBody);
ast_node!(PropertyMember, PropertyMember);
ast_node!(MethodMember, MethodMember);
ast_node!(ConstructorMember, ConstructorMember);
ast_node!(AccessorMember, AccessorMember);
ast_node!(IndexMember, IndexMember);

/// Top-level or module-level statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    Module(ModuleDecl),
    Import(ImportAlias),
    Class(ClassDecl),
    Interface(InterfaceDecl),
    Other(OtherStatement),
}

impl Stmt {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::ModuleDecl => ModuleDecl::cast(node).map(Stmt::Module),
            SyntaxKind::ImportAlias => ImportAlias::cast(node).map(Stmt::Import),
            SyntaxKind::ClassDecl => ClassDecl::cast(node).map(Stmt::Class),
            SyntaxKind::InterfaceDecl => InterfaceDecl::cast(node).map(Stmt::Interface),
            SyntaxKind::OtherStatement => OtherStatement::cast(node).map(Stmt::Other),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Stmt::Module(n) => n.as_cst(),
            Stmt::Import(n) => n.as_cst(),
            Stmt::Class(n) => n.as_cst(),
            Stmt::Interface(n) => n.as_cst(),
            Stmt::Other(n) => n.as_cst(),
        }
    }
}

/// Class or interface member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    Property(PropertyMember),
    Method(MethodMember),
    Constructor(ConstructorMember),
    Accessor(AccessorMember),
    Index(IndexMember),
}

impl Member {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::PropertyMember => PropertyMember::cast(node).map(Member::Property),
            SyntaxKind::MethodMember => MethodMember::cast(node).map(Member::Method),
            SyntaxKind::ConstructorMember => ConstructorMember::cast(node).map(Member::Constructor),
            SyntaxKind::AccessorMember => AccessorMember::cast(node).map(Member::Accessor),
            SyntaxKind::IndexMember => IndexMember::cast(node).map(Member::Index),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Member::Property(n) => n.as_cst(),
            Member::Method(n) => n.as_cst(),
            Member::Constructor(n) => n.as_cst(),
            Member::Accessor(n) => n.as_cst(),
            Member::Index(n) => n.as_cst(),
        }
    }
}

impl SourceFile {
    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        self.0.children().filter_map(Stmt::cast)
    }
}

impl ModuleDecl {
    /// `A.B` for `namespace A.B`, unquoted text for `module "x"`.
    pub fn name(&self) -> Option<String> {
        let name = child_node(&self.0, SyntaxKind::ModuleName)?;
        let text = compact_text(&name);
        Some(unquote(&text).to_string())
    }

    /// Declared with a string literal name (`declare module "x"`).
    pub fn is_ambient_module(&self) -> bool {
        child_node(&self.0, SyntaxKind::ModuleName)
            .and_then(|n| n.first_token())
            .is_some_and(|t| t.kind() == SyntaxKind::StringLit)
    }

    pub fn is_declare(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwDeclare)
    }

    pub fn is_exported(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwExport)
    }

    pub fn statements(&self) -> impl Iterator<Item = Stmt> + '_ {
        child_node(&self.0, SyntaxKind::ModuleBody)
            .into_iter()
            .flat_map(|body| body.children().filter_map(Stmt::cast).collect::<Vec<_>>())
    }
}

impl ImportAlias {
    pub fn alias(&self) -> Option<SyntaxToken> {
        direct_tokens(&self.0).find(|t| t.kind() == SyntaxKind::Id)
    }

    /// Dotted entity name on the right of `=`.
    pub fn target(&self) -> Option<String> {
        child_node(&self.0, SyntaxKind::ModuleName).map(|n| compact_text(&n))
    }

    /// `import x = require("...")`
    pub fn is_external(&self) -> bool {
        has_token(&self.0, SyntaxKind::ParenOpen)
    }
}

impl ClassDecl {
    /// `None` for anonymous default exports.
    pub fn name(&self) -> Option<SyntaxToken> {
        direct_tokens(&self.0).find(|t| t.kind() == SyntaxKind::Id)
    }

    pub fn is_exported(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwExport)
    }

    pub fn is_abstract(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwAbstract)
    }

    pub fn type_params(&self) -> impl Iterator<Item = TypeParam> + '_ {
        type_params(&self.0)
    }

    pub fn extends(&self) -> Option<TypeRef> {
        child_node(&self.0, SyntaxKind::ExtendsClause)?
            .children()
            .find_map(TypeRef::cast)
    }

    pub fn implements(&self) -> Vec<TypeRef> {
        child_node(&self.0, SyntaxKind::ImplementsClause)
            .map(|clause| clause.children().filter_map(TypeRef::cast).collect())
            .unwrap_or_default()
    }

    pub fn body(&self) -> Option<TypeBody> {
        self.0.children().find_map(TypeBody::cast)
    }
}

impl InterfaceDecl {
    pub fn name(&self) -> Option<SyntaxToken> {
        direct_tokens(&self.0).find(|t| t.kind() == SyntaxKind::Id)
    }

    pub fn is_exported(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwExport)
    }

    pub fn type_params(&self) -> impl Iterator<Item = TypeParam> + '_ {
        type_params(&self.0)
    }

    pub fn extends(&self) -> Vec<TypeRef> {
        child_node(&self.0, SyntaxKind::ExtendsClause)
            .map(|clause| clause.children().filter_map(TypeRef::cast).collect())
            .unwrap_or_default()
    }

    pub fn body(&self) -> Option<TypeBody> {
        self.0.children().find_map(TypeBody::cast)
    }
}

impl TypeParam {
    pub fn name(&self) -> Option<SyntaxToken> {
        direct_tokens(&self.0).find(|t| t.kind() == SyntaxKind::Id)
    }
}

impl TypeRef {
    /// Source text with trivia collapsed: `Serenity.EntityDialog<Row, any>`.
    pub fn text(&self) -> String {
        compact_text(&self.0)
    }

    /// Dotted name without type arguments.
    pub fn name(&self) -> String {
        child_node(&self.0, SyntaxKind::ModuleName)
            .map(|n| compact_text(&n))
            .unwrap_or_default()
    }
}

impl TypeBody {
    pub fn members(&self) -> impl Iterator<Item = Member> + '_ {
        self.0.children().filter_map(Member::cast)
    }
}

impl PropertyMember {
    pub fn name(&self) -> Option<String> {
        member_name(&self.0)
    }

    /// Annotated type, `None` when the property has no annotation.
    pub fn type_text(&self) -> Option<String> {
        annotation(&self.0)
    }

    pub fn is_static(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwStatic)
    }

    pub fn is_protected(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwProtected)
    }

    pub fn is_optional(&self) -> bool {
        has_token(&self.0, SyntaxKind::Question)
    }
}

impl MethodMember {
    pub fn name(&self) -> Option<String> {
        member_name(&self.0)
    }

    /// Annotated return type.
    pub fn return_text(&self) -> Option<String> {
        annotation(&self.0)
    }

    pub fn is_static(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwStatic)
    }

    pub fn is_protected(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwProtected)
    }

    pub fn has_body(&self) -> bool {
        child_node(&self.0, SyntaxKind::Block).is_some()
    }
}

impl AccessorMember {
    pub fn name(&self) -> Option<String> {
        member_name(&self.0)
    }

    pub fn is_getter(&self) -> bool {
        direct_tokens(&self.0).any(|t| t.kind() == SyntaxKind::Id && t.text() == "get")
    }
}

fn child_node(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    node.children().find(|c| c.kind() == kind)
}

fn direct_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + use<> {
    node.children_with_tokens().filter_map(|it| it.into_token())
}

fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    direct_tokens(node).any(|t| t.kind() == kind)
}

fn type_params(node: &SyntaxNode) -> impl Iterator<Item = TypeParam> + use<> {
    child_node(node, SyntaxKind::TypeParams)
        .into_iter()
        .flat_map(|params| params.children().filter_map(TypeParam::cast).collect::<Vec<_>>())
}

fn member_name(node: &SyntaxNode) -> Option<String> {
    let name = child_node(node, SyntaxKind::MemberName)?;
    Some(unquote(&compact_text(&name)).to_string())
}

fn annotation(node: &SyntaxNode) -> Option<String> {
    let annotation = child_node(node, SyntaxKind::TypeAnnotation)?;
    let expr = child_node(&annotation, SyntaxKind::TypeExpr)?;
    Some(compact_text(&expr))
}

/// Node text with comments dropped and each whitespace run collapsed to
/// a single space.
pub fn compact_text(node: &SyntaxNode) -> String {
    let mut out = String::new();
    let mut pending_space = false;
    for token in node
        .descendants_with_tokens()
        .filter_map(|it| it.into_token())
    {
        if token.kind().is_trivia() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push_str(token.text());
    }
    out
}

fn unquote(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 && matches!(bytes[0], b'"' | b'\'') && bytes[bytes.len() - 1] == bytes[0] {
        &text[1..text.len() - 1]
    } else {
        text
    }
}
