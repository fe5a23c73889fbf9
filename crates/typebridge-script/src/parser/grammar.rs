//! Grammar productions for the TypeScript declaration subset.
//!
//! Only declaration shapes get structure: modules, import aliases, classes,
//! interfaces and their members. Function bodies, initializers, parameter
//! lists and unrecognized statements are consumed as balanced token runs.

use rowan::{Checkpoint, TextRange};

use super::core::Parser;
use super::cst::SyntaxKind::{self, *};
use super::cst::TokenSet;
use super::cst::token_sets::{
    CONTINUES_AFTER, CONTINUES_BEFORE, MEMBER_MODIFIERS, STATEMENT_MODIFIERS, STATEMENT_START,
    TYPE_END,
};
use crate::diagnostics::DiagnosticKind;

/// Type annotation of a property: ends before an initializer.
const PROPERTY_TYPE_STOP: TokenSet = TokenSet::new(&[Equals, Comma]);

/// Return type of a method or accessor: ends before the body.
const RETURN_TYPE_STOP: TokenSet = TokenSet::new(&[Equals]);

/// Constraint or default of a type parameter.
const TYPE_PARAM_STOP: TokenSet = TokenSet::new(&[Comma, Equals]);

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.start_node(SourceFile);

        while !self.should_stop() {
            if self.current().is_close_delimiter() {
                self.error_and_bump(DiagnosticKind::UnmatchedDelimiter);
                continue;
            }
            self.parse_statement();
        }

        self.eat_trivia();
        self.finish_node();
    }

    fn parse_statement(&mut self) {
        let checkpoint = self.checkpoint();

        while self.at_decorator() {
            self.parse_decorator();
        }

        while self.at_statement_modifier() {
            self.bump();
        }

        match self.current() {
            KwNamespace | KwModule if matches!(self.peek_nth(1), Id | StringLit) => {
                self.parse_module_decl(checkpoint)
            }
            KwImport if self.next_is(Id) && self.peek_nth(2) == Equals => {
                self.parse_import_alias(checkpoint)
            }
            KwClass => self.parse_class_decl(checkpoint),
            KwInterface if self.next_is(Id) => self.parse_interface_decl(checkpoint),
            _ => self.parse_other_statement(checkpoint),
        }
    }

    fn at_statement_modifier(&mut self) -> bool {
        match self.current() {
            KwExport => true,
            kind if STATEMENT_MODIFIERS.contains(kind) => self.peek_nth(1).is_keyword(),
            _ => false,
        }
    }

    fn at_decorator(&mut self) -> bool {
        self.currently_is(Punct) && self.current_text() == "@"
    }

    /// `@Name.Space.decorator(args)`
    fn parse_decorator(&mut self) {
        self.start_node(Decorator);
        self.bump();
        if self.current().is_member_name() {
            self.bump();
            while self.currently_is(Dot) && self.peek_nth(1).is_member_name() {
                self.bump();
                self.bump();
            }
        } else {
            self.error(DiagnosticKind::ExpectedName);
        }
        if self.currently_is(ParenOpen) {
            self.skip_balanced();
        }
        self.finish_node();
    }

    /// `namespace A.B { ... }` or `declare module "name" { ... }`
    fn parse_module_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, ModuleDecl);
        self.bump();

        if self.currently_is(StringLit) {
            self.start_node(ModuleName);
            self.bump();
            self.finish_node();
        } else {
            self.parse_qualified_name(ModuleName);
        }

        if self.currently_is(BraceOpen) {
            self.parse_module_body();
        } else if !self.eat_token(Semicolon) {
            self.error(DiagnosticKind::ExpectedBody);
        }

        self.finish_node();
    }

    fn parse_module_body(&mut self) {
        if !self.enter_recursion() {
            return;
        }

        self.start_node(ModuleBody);
        let open = self.current_span();
        self.bump();

        while !self.should_stop() && !self.currently_is(BraceClose) {
            if self.currently_is_one_of(TokenSet::new(&[ParenClose, BracketClose])) {
                self.error_and_bump(DiagnosticKind::UnmatchedDelimiter);
                continue;
            }
            self.parse_statement();
        }

        if !self.eat_token(BraceClose) {
            self.error_unclosed(DiagnosticKind::UnclosedBrace, open);
        }
        self.finish_node();
        self.exit_recursion();
    }

    /// `import M = A.B;`
    fn parse_import_alias(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, ImportAlias);
        self.bump();
        self.bump();
        self.bump();

        if self.currently_is(Id) {
            self.parse_qualified_name(ModuleName);
            if self.currently_is(ParenOpen) {
                self.skip_balanced();
            }
        } else {
            self.error(DiagnosticKind::ExpectedModuleReference);
        }

        self.eat_token(Semicolon);
        self.finish_node();
    }

    /// Dotted name wrapped in a node of `kind`.
    fn parse_qualified_name(&mut self, kind: SyntaxKind) {
        if !self.current().is_member_name() || self.currently_is(StringLit) {
            self.error(DiagnosticKind::ExpectedName);
            return;
        }

        self.start_node(kind);
        self.bump();
        while self.currently_is(Dot) && self.peek_nth(1).is_member_name() {
            self.bump();
            self.bump();
        }
        self.finish_node();
    }

    fn parse_class_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, ClassDecl);
        self.bump();

        if !self.eat_token(Id) && !self.currently_is_one_of(TokenSet::new(&[
            BraceOpen,
            KwExtends,
            KwImplements,
        ])) {
            self.error(DiagnosticKind::ExpectedName);
        }

        if self.currently_is(AngleOpen) {
            self.parse_type_params();
        }

        loop {
            match self.current() {
                KwExtends => self.parse_heritage_clause(ExtendsClause),
                KwImplements => self.parse_heritage_clause(ImplementsClause),
                _ => break,
            }
        }

        self.parse_type_body();
        self.finish_node();
    }

    fn parse_interface_decl(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, InterfaceDecl);
        self.bump();
        self.bump();

        if self.currently_is(AngleOpen) {
            self.parse_type_params();
        }

        if self.currently_is(KwExtends) {
            self.parse_heritage_clause(ExtendsClause);
        }

        self.parse_type_body();
        self.finish_node();
    }

    /// `extends A.B<C>, D` or `implements E`
    fn parse_heritage_clause(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.parse_type_ref();
        while self.eat_token(Comma) {
            self.parse_type_ref();
        }
        self.finish_node();
    }

    /// Qualified name with optional type arguments.
    fn parse_type_ref(&mut self) {
        if !self.currently_is(Id) {
            self.error(DiagnosticKind::ExpectedType);
            return;
        }

        self.start_node(TypeRef);
        self.parse_qualified_name(ModuleName);
        if self.currently_is(AngleOpen) {
            self.parse_type_args();
        }
        self.finish_node();
    }

    /// `<A, B<C>>`
    fn parse_type_args(&mut self) {
        self.start_node(TypeArgs);
        let open = self.current_span();
        self.bump();

        let mut depth = 1usize;
        loop {
            if self.should_stop() {
                self.error_unclosed(DiagnosticKind::UnclosedTypeArguments, open);
                break;
            }
            match self.current() {
                AngleOpen => {
                    depth += 1;
                    self.bump();
                }
                AngleClose => {
                    depth -= 1;
                    self.bump();
                    if depth == 0 {
                        break;
                    }
                }
                kind if kind.is_open_delimiter() => self.skip_balanced(),
                kind if kind.is_close_delimiter() || kind == Semicolon => {
                    self.error_unclosed(DiagnosticKind::UnclosedTypeArguments, open);
                    break;
                }
                _ => self.bump(),
            }
        }

        self.finish_node();
    }

    /// `<T, U extends Base = Default>`
    fn parse_type_params(&mut self) {
        self.start_node(TypeParams);
        let open = self.current_span();
        self.bump();

        loop {
            if self.should_stop() {
                self.error_unclosed(DiagnosticKind::UnclosedTypeArguments, open);
                break;
            }
            match self.current() {
                Id => self.parse_type_param(),
                Comma => self.bump(),
                AngleClose => {
                    self.bump();
                    break;
                }
                kind if kind.is_open_delimiter() || kind.is_close_delimiter() => {
                    self.error_unclosed(DiagnosticKind::UnclosedTypeArguments, open);
                    break;
                }
                _ => self.error_and_bump(DiagnosticKind::UnexpectedToken),
            }
        }

        self.finish_node();
    }

    fn parse_type_param(&mut self) {
        self.start_node(TypeParam);
        self.bump();
        if self.eat_token(KwExtends) {
            self.parse_type_expr(TYPE_PARAM_STOP);
        }
        if self.eat_token(Equals) {
            self.parse_type_expr(TYPE_PARAM_STOP);
        }
        self.finish_node();
    }

    /// `{ members }` of a class or interface.
    fn parse_type_body(&mut self) {
        if !self.currently_is(BraceOpen) {
            self.error(DiagnosticKind::ExpectedBody);
            return;
        }

        self.start_node(TypeBody);
        let open = self.current_span();
        self.bump();

        while !self.should_stop() && !self.currently_is(BraceClose) {
            self.parse_member();
        }

        if !self.eat_token(BraceClose) {
            self.error_unclosed(DiagnosticKind::UnclosedBrace, open);
        }
        self.finish_node();
    }

    fn parse_member(&mut self) {
        if self.eat_token(Semicolon) || self.eat_token(Comma) {
            return;
        }

        let checkpoint = self.checkpoint();

        while self.at_decorator() {
            self.parse_decorator();
        }

        while self.at_member_modifier() {
            self.bump();
        }

        match self.current() {
            KwConstructor if self.next_is(ParenOpen) => {
                self.start_node_at(checkpoint, ConstructorMember);
                self.bump();
                self.parse_signature_rest();
                self.finish_node();
            }
            Id if self.at_accessor() => {
                self.start_node_at(checkpoint, AccessorMember);
                self.bump();
                self.parse_member_name();
                self.parse_signature_rest();
                self.finish_node();
            }
            BracketOpen | ParenOpen | AngleOpen => {
                self.start_node_at(checkpoint, IndexMember);
                if self.currently_is(BracketOpen) {
                    self.skip_balanced();
                    self.eat_token(Question);
                }
                if self.currently_is_one_of(TokenSet::new(&[ParenOpen, AngleOpen])) {
                    self.parse_signature_rest();
                } else {
                    self.parse_property_rest();
                }
                self.finish_node();
            }
            kind if kind.is_member_name() => {
                let method = {
                    let after = self.peek_nth(1);
                    let after_optional = if after == Question {
                        self.peek_nth(2)
                    } else {
                        after
                    };
                    matches!(after_optional, ParenOpen | AngleOpen)
                };
                let kind = if method { MethodMember } else { PropertyMember };
                self.start_node_at(checkpoint, kind);
                self.parse_member_name();
                self.eat_token(Question);
                if self.currently_is(Punct) && self.current_text() == "!" {
                    self.bump();
                }
                if method {
                    self.parse_signature_rest();
                } else {
                    self.parse_property_rest();
                }
                self.finish_node();
            }
            BraceClose => {
                // Dangling modifiers before the end of the body.
                self.start_node_at(checkpoint, PropertyMember);
                self.error(DiagnosticKind::ExpectedName);
                self.finish_node();
            }
            _ => self.error_and_bump(DiagnosticKind::UnexpectedToken),
        }
    }

    /// A modifier keyword followed by something that can still name a member.
    fn at_member_modifier(&mut self) -> bool {
        let current = self.current();
        let contextual = current == Id && matches!(self.current_text(), "async" | "override");
        if !MEMBER_MODIFIERS.contains(current) && !contextual {
            return false;
        }
        let next = self.peek_nth(1);
        next.is_member_name() || next == BracketOpen
    }

    /// `get name()` / `set name(value)`
    fn at_accessor(&mut self) -> bool {
        matches!(self.current_text(), "get" | "set") && {
            let next = self.peek_nth(1);
            next.is_member_name() || next == BracketOpen
        }
    }

    fn parse_member_name(&mut self) {
        if self.currently_is(BracketOpen) {
            self.start_node(MemberName);
            self.skip_balanced();
            self.finish_node();
        } else if self.current().is_member_name() {
            self.start_node(MemberName);
            self.bump();
            self.finish_node();
        } else {
            self.error(DiagnosticKind::ExpectedName);
        }
    }

    /// `<T>(params): Return { body }` or `;`
    fn parse_signature_rest(&mut self) {
        if self.currently_is(AngleOpen) {
            self.parse_type_params();
        }

        if self.currently_is(ParenOpen) {
            self.start_node(ParamList);
            self.skip_balanced();
            self.finish_node();
        } else {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected `(`");
        }

        self.parse_type_annotation(RETURN_TYPE_STOP);

        if self.currently_is(BraceOpen) {
            self.start_node(Block);
            self.skip_balanced();
            self.finish_node();
        } else {
            self.eat_token(Semicolon);
        }
    }

    /// `: Type = initializer;`
    fn parse_property_rest(&mut self) {
        self.parse_type_annotation(PROPERTY_TYPE_STOP);

        if self.currently_is(Equals) {
            self.start_node(Initializer);
            self.bump();
            self.skip_expression();
            self.finish_node();
        }

        self.eat_token(Semicolon);
    }

    fn parse_type_annotation(&mut self, stop: TokenSet) {
        if !self.currently_is(Colon) {
            return;
        }
        self.start_node(TypeAnnotation);
        self.bump();
        self.parse_type_expr(stop);
        self.finish_node();
    }

    /// Consume a type expression as a balanced token run.
    ///
    /// At nesting depth zero the type ends at `stop`, at a closing token, at
    /// a body `{` following a complete type, or at a line break that neither
    /// the previous nor the next token continues.
    fn parse_type_expr(&mut self, stop: TokenSet) {
        self.start_node(TypeExpr);

        let mut consumed = 0usize;
        let mut angles = 0usize;
        loop {
            if self.should_stop() {
                break;
            }
            let kind = self.current();

            if angles == 0 {
                if stop.contains(kind) || TYPE_END.contains(kind) {
                    break;
                }
                let continues = consumed == 0 || CONTINUES_AFTER.contains(self.previous());
                if kind == BraceOpen && !continues {
                    break;
                }
                if !continues && self.at_line_start() && !CONTINUES_BEFORE.contains(kind) {
                    break;
                }
            }

            match kind {
                AngleOpen => {
                    angles += 1;
                    self.bump();
                }
                AngleClose => {
                    angles = angles.saturating_sub(1);
                    self.bump();
                }
                kind if kind.is_open_delimiter() => self.skip_balanced(),
                kind if kind.is_close_delimiter() || kind == Semicolon => {
                    // Closer of an enclosing construct inside unbalanced `<`.
                    let span = self.current_span();
                    self.error_unclosed(DiagnosticKind::UnclosedTypeArguments, span);
                    break;
                }
                _ => self.bump(),
            }
            consumed += 1;
        }

        if consumed == 0 {
            self.error(DiagnosticKind::ExpectedType);
        }
        self.finish_node();
    }

    /// Skip an initializer expression up to `;`, `}` or the end of its line.
    fn skip_expression(&mut self) {
        let mut consumed = false;
        loop {
            if self.should_stop() {
                break;
            }
            let kind = self.current();
            if matches!(kind, Semicolon | BraceClose | ParenClose | BracketClose) {
                break;
            }
            if consumed
                && self.at_line_start()
                && !CONTINUES_AFTER.contains(self.previous())
                && !CONTINUES_BEFORE.contains(kind)
            {
                break;
            }
            if kind.is_open_delimiter() {
                self.skip_balanced();
            } else {
                self.bump();
            }
            consumed = true;
        }
    }

    /// Anything that is not a module, import alias, class or interface.
    fn parse_other_statement(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, OtherStatement);

        let mut consumed = false;
        loop {
            if self.should_stop() {
                break;
            }
            let kind = self.current();
            if kind == Semicolon {
                self.bump();
                break;
            }
            if kind.is_close_delimiter() {
                break;
            }
            if consumed && self.at_line_start() {
                let previous = self.previous();
                if STATEMENT_START.contains(kind) && !CONTINUES_AFTER.contains(previous) {
                    break;
                }
                if self.at_decorator() && !CONTINUES_AFTER.contains(previous) {
                    break;
                }
                if previous == BraceClose && !CONTINUES_BEFORE.contains(kind) {
                    break;
                }
            }
            if kind.is_open_delimiter() {
                self.skip_balanced();
            } else {
                self.bump();
            }
            consumed = true;
        }

        self.finish_node();
    }

    /// Consume a bracketed group starting at the current open delimiter,
    /// including everything nested in it.
    fn skip_balanced(&mut self) {
        let mut stack: Vec<(SyntaxKind, TextRange)> = Vec::new();
        loop {
            if self.eof() {
                if let Some(&(open, range)) = stack.last() {
                    self.error_unclosed(unclosed_kind(open), range);
                }
                break;
            }

            let kind = self.current();
            if kind.is_open_delimiter() {
                let span = self.current_span();
                stack.push((kind, span));
                self.bump();
            } else if kind.is_close_delimiter() {
                let Some(&(open, range)) = stack.last() else {
                    break;
                };
                if closes(open, kind) {
                    stack.pop();
                    self.bump();
                    if stack.is_empty() {
                        break;
                    }
                } else {
                    self.error_unclosed(unclosed_kind(open), range);
                    stack.pop();
                    if stack.is_empty() {
                        break;
                    }
                }
            } else {
                self.bump();
            }
        }
    }
}

fn closes(open: SyntaxKind, close: SyntaxKind) -> bool {
    matches!(
        (open, close),
        (ParenOpen, ParenClose) | (BracketOpen, BracketClose) | (BraceOpen, BraceClose)
    )
}

fn unclosed_kind(open: SyntaxKind) -> DiagnosticKind {
    match open {
        ParenOpen => DiagnosticKind::UnclosedParen,
        BracketOpen => DiagnosticKind::UnclosedBracket,
        _ => DiagnosticKind::UnclosedBrace,
    }
}
