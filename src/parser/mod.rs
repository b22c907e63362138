//! Recursive-descent parser for Micro C.
//!
//! Consumes the token sequence produced by the lexer and builds a
//! [`Program`]. The grammar is LL(1); a single token of lookahead decides
//! every production. The first error aborts parsing.

use std::{error::Error, fmt::Display};

use crate::ast::*;
use crate::lexer::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub position: Position,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (line, col) = self.position;
        f.write_str(&format!("{} ({line}:{col})", self.message))
    }
}

impl Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// The token sequence must be terminated by an EOF token, which the
    /// lexer guarantees.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    fn kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn kind_at(&self, lookahead: usize) -> TokenKind {
        self.tokens
            .get(self.position + lookahead)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.position += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            self.unexpected(what)
        }
    }

    fn unexpected<T>(&self, what: &str) -> ParseResult<T> {
        let token = self.peek();
        let found = if token.kind == TokenKind::Eof {
            "end of input".to_string()
        } else {
            format!("'{}'", token.value)
        };
        Err(ParseError {
            message: format!("expected {what}, found {found}"),
            position: token.position,
        })
    }

    fn error_at<T>(&self, message: impl ToString, position: Position) -> ParseResult<T> {
        Err(ParseError {
            message: message.to_string(),
            position,
        })
    }

    pub fn parse_program(mut self) -> ParseResult<Program> {
        let mut declarations = vec![];
        while !self.check(TokenKind::Eof) {
            declarations.push(self.parse_declaration()?);
        }
        Ok(Program { declarations })
    }

    fn parse_declaration(&mut self) -> ParseResult<Declaration> {
        let position = self.peek().position;
        let type_spec = self.parse_type_spec()?;
        let name = self.expect(TokenKind::Ident, "a name")?;

        // the token after the identifier disambiguates: `(` starts a
        // function, anything else a global variable
        if self.check(TokenKind::LParen) {
            self.parse_function_tail(type_spec, name.value, position)
        } else {
            let (array_size, init) = self.parse_var_tail(&type_spec, position)?;
            Ok(Declaration::GlobalVar(GlobalVar {
                type_spec,
                name: name.value,
                array_size,
                init,
                position,
            }))
        }
    }

    fn is_type_start(&self) -> bool {
        matches!(
            self.kind(),
            TokenKind::Int | TokenKind::Char | TokenKind::Void | TokenKind::Const
        )
    }

    fn parse_type_spec(&mut self) -> ParseResult<TypeSpec> {
        let is_const = self.eat(TokenKind::Const);
        let base = match self.kind() {
            TokenKind::Int => BaseType::Int,
            TokenKind::Char => BaseType::Char,
            TokenKind::Void => BaseType::Void,
            _ => return self.unexpected("a type"),
        };
        self.advance();

        let mut type_spec = TypeSpec::new(base);
        type_spec.is_const = is_const;
        if self.eat(TokenKind::Star) {
            type_spec.is_pointer = true;
            if self.check(TokenKind::Star) {
                return self.unexpected("a single level of indirection");
            }
        }
        Ok(type_spec)
    }

    fn parse_function_tail(
        &mut self,
        ret: TypeSpec,
        name: String,
        position: Position,
    ) -> ParseResult<Declaration> {
        let params = self.parse_params()?;
        if self.eat(TokenKind::Semicolon) {
            Ok(Declaration::Prototype(FunctionProto {
                ret,
                name,
                params,
                position,
            }))
        } else {
            let body = self.parse_block()?;
            Ok(Declaration::Function(Function {
                ret,
                name,
                params,
                body,
                position,
            }))
        }
    }

    fn parse_params(&mut self) -> ParseResult<Vec<Param>> {
        self.expect(TokenKind::LParen, "'('")?;
        let mut params = vec![];
        if self.eat(TokenKind::RParen) {
            return Ok(params);
        }
        // `(void)` is an empty parameter list
        if self.check(TokenKind::Void) && self.kind_at(1) == TokenKind::RParen {
            self.advance();
            self.advance();
            return Ok(params);
        }

        loop {
            let position = self.peek().position;
            let mut type_spec = self.parse_type_spec()?;
            let name = self.expect(TokenKind::Ident, "a parameter name")?;
            if self.eat(TokenKind::LBracket) {
                self.expect(TokenKind::RBracket, "']'")?;
                if type_spec.is_pointer {
                    return self.error_at("arrays of pointers are not supported", position);
                }
                // array parameters decay to pointers
                type_spec.is_pointer = true;
            }
            if type_spec.base == BaseType::Void && !type_spec.is_pointer {
                return self.error_at("parameter cannot have type void", position);
            }
            params.push(Param {
                type_spec,
                name: name.value,
                position,
            });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen, "')'")?;

        if params.len() > 6 {
            return self.error_at(
                "too many parameters (at most six are supported)",
                params[6].position,
            );
        }
        Ok(params)
    }

    /// The shared tail of global and local variable declarations:
    /// `( '[' Number ']' )? ( '=' Expr )? ';'`
    fn parse_var_tail(
        &mut self,
        type_spec: &TypeSpec,
        position: Position,
    ) -> ParseResult<(Option<i64>, Option<Expression>)> {
        if type_spec.base == BaseType::Void && !type_spec.is_pointer {
            return self.error_at("cannot declare a variable of type void", position);
        }

        let mut array_size = None;
        if self.eat(TokenKind::LBracket) {
            if type_spec.is_pointer {
                return self.error_at("arrays of pointers are not supported", position);
            }
            let size = self.expect(TokenKind::Number, "an array length")?;
            let value = size.value.parse::<i64>().map_err(|_| ParseError {
                message: format!("array length '{}' is out of range", size.value),
                position: size.position,
            })?;
            self.expect(TokenKind::RBracket, "']'")?;
            array_size = Some(value);
        }

        let mut init = None;
        if self.eat(TokenKind::Assign) {
            if array_size.is_some() {
                return self.error_at("array initializers are not supported", position);
            }
            init = Some(self.parse_expression()?);
        }
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok((array_size, init))
    }

    fn parse_block(&mut self) -> ParseResult<Block> {
        let position = self.expect(TokenKind::LBrace, "'{'")?.position;
        let mut statements = vec![];
        while !self.check(TokenKind::RBrace) {
            if self.check(TokenKind::Eof) {
                return self.unexpected("'}'");
            }
            statements.push(self.parse_statement()?);
        }
        self.advance();
        Ok(Block {
            statements,
            position,
        })
    }

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.kind() {
            TokenKind::LBrace => Ok(Statement::Block(self.parse_block()?)),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Semicolon => {
                self.advance();
                Ok(Statement::Expression(None))
            }
            _ if self.is_type_start() => Ok(Statement::VarDecl(self.parse_var_decl()?)),
            _ => {
                let expression = self.parse_expression()?;
                self.expect(TokenKind::Semicolon, "';'")?;
                Ok(Statement::Expression(Some(expression)))
            }
        }
    }

    fn parse_var_decl(&mut self) -> ParseResult<VarDecl> {
        let position = self.peek().position;
        let type_spec = self.parse_type_spec()?;
        let name = self.expect(TokenKind::Ident, "a variable name")?;
        let (array_size, init) = self.parse_var_tail(&type_spec, position)?;
        Ok(VarDecl {
            type_spec,
            name: name.value,
            array_size,
            init,
            position,
        })
    }

    fn parse_if(&mut self) -> ParseResult<Statement> {
        let position = self.advance().position;
        self.expect(TokenKind::LParen, "'('")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen, "')'")?;
        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.eat(TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Statement::If(If {
            condition,
            then_branch,
            else_branch,
            position,
        }))
    }

    fn parse_while(&mut self) -> ParseResult<Statement> {
        let position = self.advance().position;
        self.expect(TokenKind::LParen, "'('")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RParen, "')'")?;
        let body = Box::new(self.parse_statement()?);
        Ok(Statement::While(WhileLoop {
            condition,
            body,
            position,
        }))
    }

    fn parse_for(&mut self) -> ParseResult<Statement> {
        let position = self.advance().position;
        self.expect(TokenKind::LParen, "'('")?;

        let init = if self.eat(TokenKind::Semicolon) {
            None
        } else if self.is_type_start() {
            // the declaration lives in the enclosing function's flat scope
            Some(ForInit::Decl(self.parse_var_decl()?))
        } else {
            let expression = self.parse_expression()?;
            self.expect(TokenKind::Semicolon, "';'")?;
            Some(ForInit::Expression(expression))
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Semicolon, "';'")?;

        let update = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::RParen, "')'")?;

        let body = Box::new(self.parse_statement()?);
        Ok(Statement::For(ForLoop {
            init,
            condition,
            update,
            body,
            position,
        }))
    }

    fn parse_return(&mut self) -> ParseResult<Statement> {
        let position = self.advance().position;
        let value = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Semicolon, "';'")?;
        Ok(Statement::Return(Return { value, position }))
    }

    /// Assignment is the lowest precedence level and right-associative.
    /// Anything parses as a target; the lvalue check is the generator's job.
    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        let target = self.parse_logical_or()?;
        if self.check(TokenKind::Assign) {
            self.advance();
            let value = self.parse_expression()?;
            let position = target.position();
            return Ok(Expression::Assignment(Assignment {
                target: Box::new(target),
                value: Box::new(value),
                position,
            }));
        }
        Ok(target)
    }

    fn binary(op: BinaryOp, lhs: Expression, rhs: Expression) -> Expression {
        let position = lhs.position();
        Expression::Binary(BinaryExpr {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            position,
        })
    }

    fn parse_logical_or(&mut self) -> ParseResult<Expression> {
        let mut lhs = self.parse_logical_and()?;
        while self.eat(TokenKind::OrOr) {
            let rhs = self.parse_logical_and()?;
            lhs = Self::binary(BinaryOp::Or, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_logical_and(&mut self) -> ParseResult<Expression> {
        let mut lhs = self.parse_equality()?;
        while self.eat(TokenKind::AndAnd) {
            let rhs = self.parse_equality()?;
            lhs = Self::binary(BinaryOp::And, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_equality(&mut self) -> ParseResult<Expression> {
        let mut lhs = self.parse_comparison()?;
        loop {
            let op = match self.kind() {
                TokenKind::Equal => BinaryOp::Equal,
                TokenKind::NotEqual => BinaryOp::NotEqual,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_comparison()?;
            lhs = Self::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_comparison(&mut self) -> ParseResult<Expression> {
        let mut lhs = self.parse_additive()?;
        loop {
            let op = match self.kind() {
                TokenKind::Less => BinaryOp::Less,
                TokenKind::Greater => BinaryOp::Greater,
                TokenKind::LessEqual => BinaryOp::LessEqual,
                TokenKind::GreaterEqual => BinaryOp::GreaterEqual,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_additive()?;
            lhs = Self::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_additive(&mut self) -> ParseResult<Expression> {
        let mut lhs = self.parse_multiplicative()?;
        loop {
            let op = match self.kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_multiplicative()?;
            lhs = Self::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Expression> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_unary()?;
            lhs = Self::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> ParseResult<Expression> {
        let position = self.peek().position;
        let op = match self.kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Star => UnaryOp::Deref,
            TokenKind::Ampersand => {
                self.advance();
                let operand = self.parse_unary()?;
                return Ok(Expression::AddressOf(AddressOf {
                    operand: Box::new(operand),
                    position,
                }));
            }
            _ => return self.parse_postfix(),
        };
        self.advance();
        let operand = self.parse_unary()?;
        Ok(Expression::Unary(UnaryExpr {
            op,
            operand: Box::new(operand),
            position,
        }))
    }

    fn parse_postfix(&mut self) -> ParseResult<Expression> {
        let mut expression = self.parse_primary()?;
        loop {
            if self.check(TokenKind::LBracket) {
                let position = expression.position();
                self.advance();
                let index = self.parse_expression()?;
                self.expect(TokenKind::RBracket, "']'")?;
                expression = Expression::Index(Index {
                    array: Box::new(expression),
                    index: Box::new(index),
                    position,
                });
            } else if self.check(TokenKind::LParen) {
                let Expression::Ident(ident) = expression else {
                    return self.unexpected("function name");
                };
                let args = self.parse_args()?;
                expression = Expression::Call(Call {
                    callee: ident.name,
                    args,
                    position: ident.position,
                });
            } else {
                break;
            }
        }
        Ok(expression)
    }

    fn parse_args(&mut self) -> ParseResult<Vec<Expression>> {
        self.advance();
        let mut args = vec![];
        if self.eat(TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_expression()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen, "')'")?;
        Ok(args)
    }

    fn parse_primary(&mut self) -> ParseResult<Expression> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Number => {
                self.advance();
                let value = token.value.parse::<i64>().map_err(|_| ParseError {
                    message: format!("integer literal '{}' is out of range", token.value),
                    position: token.position,
                })?;
                Ok(Expression::Number(Number {
                    value,
                    position: token.position,
                }))
            }
            TokenKind::Str => {
                self.advance();
                Ok(Expression::Str(Str {
                    value: token.value,
                    position: token.position,
                }))
            }
            TokenKind::Ident => {
                self.advance();
                Ok(Expression::Ident(Ident {
                    name: token.value,
                    position: token.position,
                }))
            }
            TokenKind::LParen => {
                self.advance();
                let expression = self.parse_expression()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(expression)
            }
            _ => self.unexpected("an expression"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse(input: &str) -> Program {
        let tokens = Lexer::new(input).lex().unwrap();
        Parser::new(tokens).parse_program().unwrap()
    }

    fn parse_err(input: &str) -> ParseError {
        let tokens = Lexer::new(input).lex().unwrap();
        Parser::new(tokens).parse_program().unwrap_err()
    }

    fn parse_expr(input: &str) -> Expression {
        let tokens = Lexer::new(input).lex().unwrap();
        Parser::new(tokens).parse_expression().unwrap()
    }

    /// Render the expression structure with explicit grouping.
    fn print_expr(expression: &Expression) -> String {
        match expression {
            Expression::Number(number) => number.value.to_string(),
            Expression::Str(string) => format!("{:?}", string.value),
            Expression::Ident(ident) => ident.name.clone(),
            Expression::Binary(binary) => {
                let op = match binary.op {
                    BinaryOp::Add => "+",
                    BinaryOp::Sub => "-",
                    BinaryOp::Mul => "*",
                    BinaryOp::Div => "/",
                    BinaryOp::Mod => "%",
                    BinaryOp::Less => "<",
                    BinaryOp::Greater => ">",
                    BinaryOp::LessEqual => "<=",
                    BinaryOp::GreaterEqual => ">=",
                    BinaryOp::Equal => "==",
                    BinaryOp::NotEqual => "!=",
                    BinaryOp::And => "&&",
                    BinaryOp::Or => "||",
                };
                format!("({} {} {})", print_expr(&binary.lhs), op, print_expr(&binary.rhs))
            }
            Expression::Unary(unary) => {
                let op = match unary.op {
                    UnaryOp::Neg => "-",
                    UnaryOp::Not => "!",
                    UnaryOp::Deref => "*",
                };
                format!("({}{})", op, print_expr(&unary.operand))
            }
            Expression::AddressOf(address_of) => {
                format!("(&{})", print_expr(&address_of.operand))
            }
            Expression::Index(index) => {
                format!("{}[{}]", print_expr(&index.array), print_expr(&index.index))
            }
            Expression::Call(call) => {
                let args = call
                    .args
                    .iter()
                    .map(print_expr)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}({})", call.callee, args)
            }
            Expression::Assignment(assignment) => format!(
                "({} = {})",
                print_expr(&assignment.target),
                print_expr(&assignment.value)
            ),
        }
    }

    #[test]
    fn test_precedence_mul_over_add() {
        assert_eq!(print_expr(&parse_expr("1 + 2 * 3")), "(1 + (2 * 3))");
    }

    #[test]
    fn test_precedence_relational_over_additive() {
        assert_eq!(print_expr(&parse_expr("a < b + 1")), "(a < (b + 1))");
    }

    #[test]
    fn test_precedence_logical() {
        assert_eq!(
            print_expr(&parse_expr("a || b && c == d")),
            "(a || (b && (c == d)))"
        );
    }

    #[test]
    fn test_additive_left_associative() {
        assert_eq!(print_expr(&parse_expr("1 - 2 - 3")), "((1 - 2) - 3)");
    }

    #[test]
    fn test_assignment_right_associative() {
        assert_eq!(print_expr(&parse_expr("a = b = 1")), "(a = (b = 1))");
    }

    #[test]
    fn test_unary_chain() {
        assert_eq!(print_expr(&parse_expr("-!x")), "(-(!x))");
        assert_eq!(print_expr(&parse_expr("*p + 1")), "((*p) + 1)");
    }

    #[test]
    fn test_address_of_index() {
        assert_eq!(print_expr(&parse_expr("&a[i + 1]")), "(&a[(i + 1)])");
    }

    #[test]
    fn test_parenthesized_grouping() {
        assert_eq!(print_expr(&parse_expr("(1 + 2) * 3")), "((1 + 2) * 3)");
    }

    #[test]
    fn test_call_with_args() {
        assert_eq!(
            print_expr(&parse_expr("f(1, g(x), a[2])")),
            "f(1, g(x), a[2])"
        );
    }

    #[test]
    fn test_call_on_non_identifier_fails() {
        let tokens = Lexer::new("a[0]()").lex().unwrap();
        let error = Parser::new(tokens).parse_expression().unwrap_err();
        assert!(error.message.contains("function name"));
    }

    #[test]
    fn test_function_and_prototype() {
        let program = parse("int add(int a, int b); int add(int a, int b) { return a + b; }");
        assert_eq!(program.declarations.len(), 2);
        assert!(matches!(program.declarations[0], Declaration::Prototype(_)));
        assert!(matches!(program.declarations[1], Declaration::Function(_)));
    }

    #[test]
    fn test_void_param_list() {
        let program = parse("int main(void) { return 0; }");
        let Declaration::Function(function) = &program.declarations[0] else {
            panic!("expected a function");
        };
        assert!(function.params.is_empty());
    }

    #[test]
    fn test_array_param_decays() {
        let program = parse("int first(int values[]) { return values[0]; }");
        let Declaration::Function(function) = &program.declarations[0] else {
            panic!("expected a function");
        };
        assert!(function.params[0].type_spec.is_pointer);
    }

    #[test]
    fn test_global_array() {
        let program = parse("int table[16];");
        let Declaration::GlobalVar(global) = &program.declarations[0] else {
            panic!("expected a global");
        };
        assert_eq!(global.array_size, Some(16));
        assert!(global.init.is_none());
    }

    #[test]
    fn test_local_declarations() {
        let program = parse("int main() { int x = 5; char *s; int a[3]; return x; }");
        let Declaration::Function(function) = &program.declarations[0] else {
            panic!("expected a function");
        };
        assert_eq!(function.body.statements.len(), 4);
    }

    #[test]
    fn test_for_init_declaration() {
        let program = parse("int main() { for (int i = 0; i < 10; i = i + 1) ; return 0; }");
        let Declaration::Function(function) = &program.declarations[0] else {
            panic!("expected a function");
        };
        let Statement::For(for_loop) = &function.body.statements[0] else {
            panic!("expected a for loop");
        };
        assert!(matches!(for_loop.init, Some(ForInit::Decl(_))));
        assert!(for_loop.condition.is_some());
        assert!(for_loop.update.is_some());
    }

    #[test]
    fn test_for_all_clauses_empty() {
        let program = parse("int main() { for (;;) ; }");
        let Declaration::Function(function) = &program.declarations[0] else {
            panic!("expected a function");
        };
        let Statement::For(for_loop) = &function.body.statements[0] else {
            panic!("expected a for loop");
        };
        assert!(for_loop.init.is_none());
        assert!(for_loop.condition.is_none());
        assert!(for_loop.update.is_none());
    }

    #[test]
    fn test_dangling_else_binds_to_nearest_if() {
        let program = parse("int main() { if (a) if (b) return 1; else return 2; }");
        let Declaration::Function(function) = &program.declarations[0] else {
            panic!("expected a function");
        };
        let Statement::If(outer) = &function.body.statements[0] else {
            panic!("expected an if");
        };
        assert!(outer.else_branch.is_none());
        let Statement::If(inner) = outer.then_branch.as_ref() else {
            panic!("expected a nested if");
        };
        assert!(inner.else_branch.is_some());
    }

    #[test]
    fn test_bare_semicolon_is_null_statement() {
        let program = parse("int main() { ; }");
        let Declaration::Function(function) = &program.declarations[0] else {
            panic!("expected a function");
        };
        assert!(matches!(
            function.body.statements[0],
            Statement::Expression(None)
        ));
    }

    #[test]
    fn test_reject_double_pointer() {
        let error = parse_err("int **p;");
        assert!(error.message.contains("indirection"));
    }

    #[test]
    fn test_reject_seven_params() {
        let error = parse_err("int f(int a, int b, int c, int d, int e, int g, int h);");
        assert!(error.message.contains("too many parameters"));
    }

    #[test]
    fn test_reject_array_initializer() {
        let error = parse_err("int main() { int a[3] = 0; return 0; }");
        assert!(error.message.contains("array initializers"));
    }

    #[test]
    fn test_reject_void_variable() {
        let error = parse_err("int main() { void x; }");
        assert!(error.message.contains("void"));
    }

    #[test]
    fn test_missing_semicolon() {
        let error = parse_err("int main() { return 0 }");
        assert!(error.message.contains("';'"));
    }

    #[test]
    fn test_unexpected_eof() {
        let error = parse_err("int main() { return 0;");
        assert!(error.message.contains("end of input"));
    }
}
