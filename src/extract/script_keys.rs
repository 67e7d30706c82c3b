//! Stage one: candidate script keys from the bootstrap loader.

use crate::ast::{self, Arg, Node};
use crate::config::{Endpoints, KEYLIST_CALLEE};
use crate::fetch::Fetcher;
use crate::types::{Result, ScriptKey};
use std::sync::Arc;
use tracing::debug;

/// Extracts candidate script keys from the bootstrap loader script.
pub struct ScriptKeyExtractor {
    fetcher: Arc<Fetcher>,
    endpoints: Endpoints,
}

impl ScriptKeyExtractor {
    /// Create a new extractor.
    pub fn new(fetcher: Arc<Fetcher>, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    /// Fetch the bootstrap script and extract every candidate key.
    ///
    /// Transport and parse failures both propagate: without the bootstrap
    /// there is nothing to race. An empty key set is not an error here — it
    /// surfaces downstream as an empty race.
    pub async fn fetch_script_keys(&self) -> Result<Vec<ScriptKey>> {
        let url = self.endpoints.bootstrap_url()?;
        let source = self.fetcher.fetch_text(url).await?;

        let tree = ast::parse(&source)?;
        let keys = keys_from_tree(&tree);

        debug!("Bootstrap yielded {} candidate script keys", keys.len());
        Ok(keys)
    }
}

/// Truthy literal arguments of every keylist call, in discovery order then
/// argument order.
fn keys_from_tree(tree: &Node) -> Vec<ScriptKey> {
    let calls = ast::search(
        &|node: &Node| {
            node.call()
                .map_or(false, |call| call.callee.as_deref() == Some(KEYLIST_CALLEE))
        },
        Some(tree),
    );

    calls
        .iter()
        .filter_map(|node| node.call())
        .flat_map(|call| call.arguments.iter())
        .filter_map(|argument| match argument {
            Arg::Literal(lit) if lit.is_truthy() => Some(lit.to_text()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CallExpr, Literal, NodeKind};

    fn keylist_call(arguments: Vec<Arg>) -> Node {
        Node::leaf(NodeKind::Expression {
            call: Some(CallExpr {
                callee: Some(KEYLIST_CALLEE.to_string()),
                arguments,
            }),
        })
    }

    #[test]
    fn test_keeps_only_truthy_literals() {
        let tree = Node::with_body(
            NodeKind::Program,
            vec![keylist_call(vec![
                Arg::Literal(Literal::Number(0.0)),
                Arg::Literal(Literal::String("abc".to_string())),
                Arg::Identifier("x".to_string()),
                Arg::Literal(Literal::String(String::new())),
            ])],
        );

        assert_eq!(keys_from_tree(&tree), vec!["abc"]);
    }

    #[test]
    fn test_ignores_other_calls() {
        let tree = Node::with_body(
            NodeKind::Program,
            vec![Node::leaf(NodeKind::Expression {
                call: Some(CallExpr {
                    callee: Some("somethingElse".to_string()),
                    arguments: vec![Arg::Literal(Literal::String("k1".to_string()))],
                }),
            })],
        );

        assert!(keys_from_tree(&tree).is_empty());
    }

    #[test]
    fn test_flattens_across_multiple_calls() {
        let tree = Node::with_body(
            NodeKind::Program,
            vec![
                keylist_call(vec![Arg::Literal(Literal::String("k1".to_string()))]),
                keylist_call(vec![
                    Arg::Literal(Literal::String("k2".to_string())),
                    Arg::Literal(Literal::String("k3".to_string())),
                ]),
            ],
        );

        assert_eq!(keys_from_tree(&tree), vec!["k1", "k2", "k3"]);
    }

    #[test]
    fn test_extracts_from_parsed_bootstrap() {
        let source = r#"
            var b = window;
            unflattenKeylistIntoAnswers("AB12", "CD34");
        "#;
        let tree = ast::parse(source).unwrap();

        assert_eq!(keys_from_tree(&tree), vec!["AB12", "CD34"]);
    }
}
