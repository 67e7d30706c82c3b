//! Stage two: credential extraction from one keyed cache script.

use crate::ast::{self, Node, NodeKind};
use crate::config::{Endpoints, CREDENTIAL_IDENT};
use crate::fetch::Fetcher;
use crate::types::{Credential, KeyscoutError, Result};
use std::sync::Arc;
use tracing::debug;

/// Extracts the credential from the cache script named by a script key.
pub struct CredentialExtractor {
    fetcher: Arc<Fetcher>,
    endpoints: Endpoints,
}

impl CredentialExtractor {
    /// Create a new extractor.
    pub fn new(fetcher: Arc<Fetcher>, endpoints: Endpoints) -> Self {
        Self { fetcher, endpoints }
    }

    /// Fetch the cache script for `key` and extract its credential.
    ///
    /// Parse failures are scoped to this candidate so a bad cache script
    /// cannot sink its siblings in the race.
    pub async fn fetch_credential(&self, key: &str) -> Result<Credential> {
        let url = self.endpoints.script_url(key)?;
        let source = self.fetcher.fetch_text(url).await?;

        let tree = ast::parse(&source).map_err(|e| KeyscoutError::Extraction {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        match credential_from_tree(&tree) {
            Some(credential) => {
                debug!("Script key [{}] yielded a credential", key);
                Ok(credential)
            }
            None => Err(KeyscoutError::CredentialNotFound(key.to_string())),
        }
    }
}

/// Literal initializer of the last matching declarator.
///
/// The upstream script declares the key more than once; the final declaration
/// is the canonical one.
fn credential_from_tree(tree: &Node) -> Option<Credential> {
    let declarators = ast::search(
        &|node: &Node| {
            matches!(
                &node.kind,
                NodeKind::VariableDeclarator { name: Some(name), .. }
                    if name.as_str() == CREDENTIAL_IDENT
            )
        },
        Some(tree),
    );

    declarators.iter().rev().find_map(|node| match &node.kind {
        NodeKind::VariableDeclarator {
            init: Some(lit), ..
        } => Some(lit.to_text()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Literal;

    fn declarator(name: &str, init: Option<Literal>) -> Node {
        Node::leaf(NodeKind::VariableDeclarator {
            name: Some(name.to_string()),
            init,
        })
    }

    #[test]
    fn test_last_declarator_wins() {
        let tree = Node::with_body(
            NodeKind::Program,
            vec![
                Node::with_declarations(
                    NodeKind::VariableDeclaration,
                    vec![declarator(
                        CREDENTIAL_IDENT,
                        Some(Literal::String("first".to_string())),
                    )],
                ),
                Node::with_declarations(
                    NodeKind::VariableDeclaration,
                    vec![declarator(
                        CREDENTIAL_IDENT,
                        Some(Literal::String("second".to_string())),
                    )],
                ),
            ],
        );

        assert_eq!(credential_from_tree(&tree), Some("second".to_string()));
    }

    #[test]
    fn test_no_matching_declarator() {
        let tree = Node::with_body(
            NodeKind::Program,
            vec![Node::with_declarations(
                NodeKind::VariableDeclaration,
                vec![declarator(
                    "OTHER_KEY",
                    Some(Literal::String("nope".to_string())),
                )],
            )],
        );

        assert_eq!(credential_from_tree(&tree), None);
    }

    #[test]
    fn test_declarator_without_initializer_is_skipped() {
        let tree = Node::with_body(
            NodeKind::Program,
            vec![Node::with_declarations(
                NodeKind::VariableDeclaration,
                vec![
                    declarator(
                        CREDENTIAL_IDENT,
                        Some(Literal::String("value".to_string())),
                    ),
                    declarator(CREDENTIAL_IDENT, None),
                ],
            )],
        );

        assert_eq!(credential_from_tree(&tree), Some("value".to_string()));
    }

    #[test]
    fn test_extracts_from_parsed_cache_script() {
        let source = r#"
            var gwtOnLoad = null;
            var API_KEY = "first";
            var API_KEY = "second";
        "#;
        let tree = ast::parse(source).unwrap();

        assert_eq!(credential_from_tree(&tree), Some("second".to_string()));
    }
}
