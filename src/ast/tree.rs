//! Lowered script tree and the generic predicate search.

/// One node of a lowered script tree.
///
/// A node carries up to three child collections: `body` (direct statements),
/// `block` (nested block statements), and `declarations` (declarators of a
/// variable statement). A node with none of the three is a leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub body: Option<Vec<Node>>,
    pub block: Option<Vec<Node>>,
    pub declarations: Option<Vec<Node>>,
}

/// Statement shapes the pipeline distinguishes. Anything else is `Other`.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Whole-script root.
    Program,
    /// Function declaration; its body hangs off `block`.
    Function,
    /// Block statement.
    Block,
    /// Expression statement; `call` is present when the expression is a call.
    Expression { call: Option<CallExpr> },
    /// Variable statement; declarators hang off `declarations`.
    VariableDeclaration,
    /// One declarator of a variable statement.
    VariableDeclarator {
        name: Option<String>,
        init: Option<Literal>,
    },
    /// Statement shape the pipeline has no use for.
    Other,
}

/// A call expression inside an expression statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    /// Callee name, when the callee is a plain identifier.
    pub callee: Option<String>,
    pub arguments: Vec<Arg>,
}

/// One call argument, reduced to what the extractors match on.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Literal(Literal),
    Identifier(String),
    Other,
}

/// A literal value with JavaScript truthiness.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

impl Literal {
    pub fn is_truthy(&self) -> bool {
        match self {
            Literal::String(s) => !s.is_empty(),
            Literal::Number(n) => *n != 0.0 && !n.is_nan(),
            Literal::Boolean(b) => *b,
            Literal::Null => false,
        }
    }

    /// Text rendering used for script keys and credentials.
    pub fn to_text(&self) -> String {
        match self {
            Literal::String(s) => s.clone(),
            Literal::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                format!("{}", *n as i64)
            }
            Literal::Number(n) => n.to_string(),
            Literal::Boolean(b) => b.to_string(),
            Literal::Null => "null".to_string(),
        }
    }
}

impl Node {
    pub fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            body: None,
            block: None,
            declarations: None,
        }
    }

    pub fn with_body(kind: NodeKind, body: Vec<Node>) -> Self {
        Self {
            body: Some(body),
            ..Self::leaf(kind)
        }
    }

    pub fn with_block(kind: NodeKind, block: Vec<Node>) -> Self {
        Self {
            block: Some(block),
            ..Self::leaf(kind)
        }
    }

    pub fn with_declarations(kind: NodeKind, declarations: Vec<Node>) -> Self {
        Self {
            declarations: Some(declarations),
            ..Self::leaf(kind)
        }
    }

    /// Call payload, when this is an expression statement wrapping a call.
    pub fn call(&self) -> Option<&CallExpr> {
        match &self.kind {
            NodeKind::Expression { call: Some(call) } => Some(call),
            _ => None,
        }
    }
}

/// Collect every node under `root` that satisfies `predicate`.
///
/// Children are visited in `body`, `block`, `declarations` order, each
/// defaulted to empty; a node is tested after its subtrees, so matches come
/// out post-order per branch. An absent root yields an empty result.
pub fn search<'a, F>(predicate: &F, root: Option<&'a Node>) -> Vec<&'a Node>
where
    F: Fn(&Node) -> bool,
{
    let mut matches = Vec::new();
    if let Some(node) = root {
        visit(predicate, node, &mut matches);
    }
    matches
}

fn visit<'a, F>(predicate: &F, node: &'a Node, matches: &mut Vec<&'a Node>)
where
    F: Fn(&Node) -> bool,
{
    let children = node
        .body
        .iter()
        .flatten()
        .chain(node.block.iter().flatten())
        .chain(node.declarations.iter().flatten());

    for child in children {
        visit(predicate, child, matches);
    }

    if predicate(node) {
        matches.push(node);
    }
}
