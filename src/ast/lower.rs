//! oxc-backed parsing, lowered into the script tree.

use crate::ast::tree::{Arg, CallExpr, Literal, Node, NodeKind};
use crate::types::{KeyscoutError, Result};
use oxc_allocator::Allocator;
use oxc_ast::ast as js;
use oxc_parser::Parser;
use oxc_span::SourceType;

/// Parse JavaScript source into a lowered script tree.
///
/// Malformed input is a hard failure: the upstream scripts are
/// machine-generated, and a parse error means the response is not the script
/// this pipeline expects.
pub fn parse(source: &str) -> Result<Node> {
    let allocator = Allocator::default();
    let source_type = SourceType::default();

    let ret = Parser::new(&allocator, source, source_type).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let message = ret
            .errors
            .first()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "parser panicked".to_string());
        return Err(KeyscoutError::Parse(message));
    }

    Ok(Node::with_body(
        NodeKind::Program,
        lower_statements(&ret.program.body),
    ))
}

fn lower_statements(statements: &[js::Statement<'_>]) -> Vec<Node> {
    statements.iter().map(lower_statement).collect()
}

fn lower_statement(statement: &js::Statement<'_>) -> Node {
    match statement {
        js::Statement::ExpressionStatement(stmt) => Node::leaf(NodeKind::Expression {
            call: lower_call(&stmt.expression),
        }),
        js::Statement::VariableDeclaration(decl) => Node::with_declarations(
            NodeKind::VariableDeclaration,
            decl.declarations.iter().map(lower_declarator).collect(),
        ),
        js::Statement::FunctionDeclaration(func) => {
            let nested = func
                .body
                .as_ref()
                .map(|body| vec![lower_function_body(body)])
                .unwrap_or_default();
            Node::with_block(NodeKind::Function, nested)
        }
        js::Statement::BlockStatement(block) => lower_block(block),
        js::Statement::IfStatement(stmt) => {
            let mut nested = vec![lower_statement(&stmt.consequent)];
            if let Some(alternate) = &stmt.alternate {
                nested.push(lower_statement(alternate));
            }
            Node::with_block(NodeKind::Other, nested)
        }
        js::Statement::TryStatement(stmt) => {
            let mut nested = vec![lower_block(&stmt.block)];
            if let Some(handler) = &stmt.handler {
                nested.push(lower_block(&handler.body));
            }
            if let Some(finalizer) = &stmt.finalizer {
                nested.push(lower_block(finalizer));
            }
            Node::with_block(NodeKind::Other, nested)
        }
        js::Statement::ForStatement(stmt) => lower_loop_body(&stmt.body),
        js::Statement::ForInStatement(stmt) => lower_loop_body(&stmt.body),
        js::Statement::ForOfStatement(stmt) => lower_loop_body(&stmt.body),
        js::Statement::WhileStatement(stmt) => lower_loop_body(&stmt.body),
        js::Statement::DoWhileStatement(stmt) => lower_loop_body(&stmt.body),
        js::Statement::LabeledStatement(stmt) => lower_loop_body(&stmt.body),
        _ => Node::leaf(NodeKind::Other),
    }
}

fn lower_block(block: &js::BlockStatement<'_>) -> Node {
    Node::with_body(NodeKind::Block, lower_statements(&block.body))
}

fn lower_function_body(body: &js::FunctionBody<'_>) -> Node {
    Node::with_body(NodeKind::Block, lower_statements(&body.statements))
}

fn lower_loop_body(body: &js::Statement<'_>) -> Node {
    Node::with_block(NodeKind::Other, vec![lower_statement(body)])
}

fn lower_call(expression: &js::Expression<'_>) -> Option<CallExpr> {
    let js::Expression::CallExpression(call) = expression else {
        return None;
    };

    let callee = match &call.callee {
        js::Expression::Identifier(ident) => Some(ident.name.to_string()),
        _ => None,
    };

    let arguments = call.arguments.iter().map(lower_argument).collect();

    Some(CallExpr { callee, arguments })
}

fn lower_argument(argument: &js::Argument<'_>) -> Arg {
    match argument {
        js::Argument::StringLiteral(lit) => Arg::Literal(Literal::String(lit.value.to_string())),
        js::Argument::NumericLiteral(lit) => Arg::Literal(Literal::Number(lit.value)),
        js::Argument::BooleanLiteral(lit) => Arg::Literal(Literal::Boolean(lit.value)),
        js::Argument::NullLiteral(_) => Arg::Literal(Literal::Null),
        js::Argument::Identifier(ident) => Arg::Identifier(ident.name.to_string()),
        _ => Arg::Other,
    }
}

fn lower_declarator(declarator: &js::VariableDeclarator<'_>) -> Node {
    let name = match &declarator.id.kind {
        js::BindingPatternKind::BindingIdentifier(ident) => Some(ident.name.to_string()),
        _ => None,
    };

    let init = declarator.init.as_ref().and_then(lower_literal);

    Node::leaf(NodeKind::VariableDeclarator { name, init })
}

fn lower_literal(expression: &js::Expression<'_>) -> Option<Literal> {
    match expression {
        js::Expression::StringLiteral(lit) => Some(Literal::String(lit.value.to_string())),
        js::Expression::NumericLiteral(lit) => Some(Literal::Number(lit.value)),
        js::Expression::BooleanLiteral(lit) => Some(Literal::Boolean(lit.value)),
        js::Expression::NullLiteral(_) => Some(Literal::Null),
        _ => None,
    }
}
