//! Named graph references and the `CONSTRUCT` query selecting their contents.

/// `<base><identifier>/graph`, by plain concatenation.
///
/// The identifier is not escaped: registration numbers such as `1947,0414.1`
/// are valid IRI characters and the endpoint stores the graphs under them as-is.
pub fn graph_reference(graph_base_uri: &str, identifier: &str) -> String {
    format!("{}{}/graph", graph_base_uri, identifier)
}

/// A query returning every triple of `graph`
pub fn construct_query(graph: &str) -> String {
    format!("CONSTRUCT {{?s ?p ?o}} WHERE {{GRAPH <{}> {{?s ?p ?o}}}}", graph)
}

/// Query for one identifier record, built fresh per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQuery {
    /// Identifier record the query was built from
    pub identifier: String,
    /// Named graph reference
    pub graph: String,
    /// `CONSTRUCT` query text
    pub text: String,
}

impl GraphQuery {
    /// Build the graph reference and query for `identifier`
    pub fn for_identifier(graph_base_uri: &str, identifier: &str) -> Self {
        let graph = graph_reference(graph_base_uri, identifier);
        let text = construct_query(&graph);
        Self {
            identifier: identifier.to_string(),
            graph,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://collection.britishmuseum.org/id/object/";

    #[test]
    fn test_graph_reference() {
        assert_eq!(
            graph_reference(BASE, "1947,0414.1"),
            "http://collection.britishmuseum.org/id/object/1947,0414.1/graph"
        );
    }

    #[test]
    fn test_construct_query_for_museum_object() {
        let query = GraphQuery::for_identifier(BASE, "1947,0414.1");
        assert_eq!(
            query.text,
            "CONSTRUCT {?s ?p ?o} WHERE {GRAPH <http://collection.britishmuseum.org/id/object/1947,0414.1/graph> {?s ?p ?o}}"
        );
        assert_eq!(query.identifier, "1947,0414.1");
        assert!(query.text.contains(&query.graph));
    }

    #[test]
    fn test_base_without_trailing_slash_is_not_corrected() {
        assert_eq!(graph_reference("urn:obj:", "7"), "urn:obj:7/graph");
    }
}
