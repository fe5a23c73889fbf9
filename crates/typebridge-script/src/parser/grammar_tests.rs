use indoc::indoc;

use super::lexer::lex;
use super::{Parser, parse, parse_with_parser};
use crate::Error;

fn cst(source: &str) -> String {
    let (parse, diagnostics) = parse(source).expect("no fatal error");
    assert!(diagnostics.is_empty(), "{}", diagnostics.printer().render());
    parse.printer().dump()
}

fn errors(source: &str) -> String {
    let (_, diagnostics) = parse(source).expect("no fatal error");
    diagnostics.printer().render()
}

#[test]
fn namespace_with_exported_class() {
    let input = indoc! {r#"
    namespace App {
        export class A extends B<C> {
            x: number;
        }
    }
    "#};

    insta::assert_snapshot!(cst(input), @r#"
    SourceFile
      ModuleDecl
        KwNamespace "namespace"
        ModuleName
          Id "App"
        ModuleBody
          BraceOpen "{"
          ClassDecl
            KwExport "export"
            KwClass "class"
            Id "A"
            ExtendsClause
              KwExtends "extends"
              TypeRef
                ModuleName
                  Id "B"
                TypeArgs
                  AngleOpen "<"
                  Id "C"
                  AngleClose ">"
            TypeBody
              BraceOpen "{"
              PropertyMember
                MemberName
                  Id "x"
                TypeAnnotation
                  Colon ":"
                  TypeExpr
                    Id "number"
                Semicolon ";"
              BraceClose "}"
          BraceClose "}"
    "#);
}

#[test]
fn import_alias_and_interface() {
    let input = indoc! {r#"
    import Q = Serenity.Q;
    interface Opts extends Base<T> {
        name?: string;
        go(): void;
    }
    "#};

    insta::assert_snapshot!(cst(input), @r#"
    SourceFile
      ImportAlias
        KwImport "import"
        Id "Q"
        Equals "="
        ModuleName
          Id "Serenity"
          Dot "."
          Id "Q"
        Semicolon ";"
      InterfaceDecl
        KwInterface "interface"
        Id "Opts"
        ExtendsClause
          KwExtends "extends"
          TypeRef
            ModuleName
              Id "Base"
            TypeArgs
              AngleOpen "<"
              Id "T"
              AngleClose ">"
        TypeBody
          BraceOpen "{"
          PropertyMember
            MemberName
              Id "name"
            Question "?"
            TypeAnnotation
              Colon ":"
              TypeExpr
                Id "string"
            Semicolon ";"
          MethodMember
            MemberName
              Id "go"
            ParamList
              ParenOpen "("
              ParenClose ")"
            TypeAnnotation
              Colon ":"
              TypeExpr
                Id "void"
            Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn unrelated_statements_are_skipped_whole() {
    let input = indoc! {r#"
    declare var x: number;
    function f(a) { return a; }
    export class A {}
    "#};

    insta::assert_snapshot!(cst(input), @r#"
    SourceFile
      OtherStatement
        KwDeclare "declare"
        KwVar "var"
        Id "x"
        Colon ":"
        Id "number"
        Semicolon ";"
      OtherStatement
        KwFunction "function"
        Id "f"
        ParenOpen "("
        Id "a"
        ParenClose ")"
        BraceOpen "{"
        Id "return"
        Id "a"
        Semicolon ";"
        BraceClose "}"
      ClassDecl
        KwExport "export"
        KwClass "class"
        Id "A"
        TypeBody
          BraceOpen "{"
          BraceClose "}"
    "#);
}

#[test]
fn class_member_shapes() {
    let input = indoc! {r#"
    @Serenity.Decorators.registerClass()
    export class Grid<TItem> extends Base {
        private static readonly key = "x";
        constructor(container: JQuery) { super(container); }
        get value(): number { return 1; }
        [key: string]: any;
        protected getColumns(): Column[] { return []; }
    }
    "#};

    insta::assert_snapshot!(cst(input), @r#"
    SourceFile
      ClassDecl
        Decorator
          Punct "@"
          Id "Serenity"
          Dot "."
          Id "Decorators"
          Dot "."
          Id "registerClass"
          ParenOpen "("
          ParenClose ")"
        KwExport "export"
        KwClass "class"
        Id "Grid"
        TypeParams
          AngleOpen "<"
          TypeParam
            Id "TItem"
          AngleClose ">"
        ExtendsClause
          KwExtends "extends"
          TypeRef
            ModuleName
              Id "Base"
        TypeBody
          BraceOpen "{"
          PropertyMember
            KwPrivate "private"
            KwStatic "static"
            KwReadonly "readonly"
            MemberName
              Id "key"
            Initializer
              Equals "="
              StringLit "\"x\""
            Semicolon ";"
          ConstructorMember
            KwConstructor "constructor"
            ParamList
              ParenOpen "("
              Id "container"
              Colon ":"
              Id "JQuery"
              ParenClose ")"
            Block
              BraceOpen "{"
              Id "super"
              ParenOpen "("
              Id "container"
              ParenClose ")"
              Semicolon ";"
              BraceClose "}"
          AccessorMember
            Id "get"
            MemberName
              Id "value"
            ParamList
              ParenOpen "("
              ParenClose ")"
            TypeAnnotation
              Colon ":"
              TypeExpr
                Id "number"
            Block
              BraceOpen "{"
              Id "return"
              Number "1"
              Semicolon ";"
              BraceClose "}"
          IndexMember
            BracketOpen "["
            Id "key"
            Colon ":"
            Id "string"
            BracketClose "]"
            TypeAnnotation
              Colon ":"
              TypeExpr
                Id "any"
            Semicolon ";"
          MethodMember
            KwProtected "protected"
            MemberName
              Id "getColumns"
            ParamList
              ParenOpen "("
              ParenClose ")"
            TypeAnnotation
              Colon ":"
              TypeExpr
                Id "Column"
                BracketOpen "["
                BracketClose "]"
            Block
              BraceOpen "{"
              Id "return"
              BracketOpen "["
              BracketClose "]"
              Semicolon ";"
              BraceClose "}"
          BraceClose "}"
    "#);
}

#[test]
fn trivia_is_kept_in_tree() {
    let input = "class A {} // done";
    let (parse, _) = parse(input).expect("no fatal error");

    assert_eq!(parse.syntax().to_string(), input);
    insta::assert_snapshot!(parse.printer().with_trivia(true).with_spans(true).dump(), @r#"
    SourceFile [0..18]
      ClassDecl [0..10]
        KwClass [0..5] "class"
        Whitespace [5..6] " "
        Id [6..7] "A"
        Whitespace [7..8] " "
        TypeBody [8..10]
          BraceOpen [8..9] "{"
          BraceClose [9..10] "}"
      Whitespace [10..11] " "
      LineComment [11..18] "// done"
    "#);
}

#[test]
fn unclosed_class_body() {
    let input = indoc! {r#"
    class A {
        x: number;
    "#};

    insta::assert_snapshot!(errors(input), @"error at 8..25: missing closing `}`");
}

#[test]
fn unclosed_type_arguments() {
    insta::assert_snapshot!(
        errors("export class A extends B<C;\n"),
        @"error at 24..27: missing closing `>`"
    );
}

#[test]
fn unclosed_type_arguments_in_member_type() {
    let input = indoc! {r#"
    class A {
        x: Map<string;
        y: number;
    }
    "#};

    let (parse, diagnostics) = parse(input).expect("no fatal error");
    let rendered = diagnostics.printer().render();
    assert!(rendered.contains("missing closing `>`"), "{rendered}");
    assert_eq!(parse.syntax().text().to_string(), input);
}

#[test]
fn stray_closing_brace() {
    insta::assert_snapshot!(
        errors("}\nclass A {}"),
        @"error at 0..1: unmatched closing delimiter: `}`"
    );
}

#[test]
fn unexpected_member_token() {
    let input = indoc! {r#"
    class A {
        = 1;
    }
    "#};

    insta::assert_snapshot!(errors(input), @"error at 14..15: unexpected token: `=`");
}

#[test]
fn import_without_target() {
    insta::assert_snapshot!(
        errors("import X = ;"),
        @"error at 11..12: expected a module reference"
    );
}

#[test]
fn nesting_beyond_limit_is_fatal() {
    let input = "namespace A { namespace B { namespace C {} } }";
    let parser = Parser::new(input, lex(input)).with_recursion_limit(2);

    let err = parse_with_parser(parser).unwrap_err();
    assert_eq!(err, Error::RecursionLimitExceeded);
}

#[test]
fn source_text_round_trips() {
    let input = indoc! {r#"
    /* header */
    namespace A.B {
        import X = C.D;
        export abstract class E<T = string> implements X.I { m?(): void }
        const y = { a: 1 };
    }
    "#};
    let (parse, diagnostics) = parse(input).expect("no fatal error");

    assert!(diagnostics.is_empty(), "{}", diagnostics.printer().render());
    assert_eq!(parse.syntax().to_string(), input);
}
