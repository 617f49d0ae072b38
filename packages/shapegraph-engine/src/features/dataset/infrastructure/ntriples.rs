//! N-Triples reader
//!
//! Statements are parsed by `oxttl` and fed to a [`DatasetGraphBuilder`]:
//!
//! - `rdf:type` with an IRI object assigns the subject's class (first wins)
//! - `rdfs:label` with a literal object assigns its label (first wins)
//! - any other IRI or blank-node object becomes a directed edge
//! - other literal objects only register the subject
//!
//! Blank nodes become vertices named `_:label`.

use oxrdf::vocab::{rdf, rdfs};
use oxrdf::{Subject, Term, Triple};
use oxttl::{NTriplesParser, TurtleParseError};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{Result, ShapegraphError};
use crate::features::dataset::domain::{DatasetGraph, DatasetGraphBuilder};

/// Loads N-Triples input into a [`DatasetGraph`]
#[derive(Debug, Default, Clone, Copy)]
pub struct NTriplesReader;

impl NTriplesReader {
    pub fn new() -> Self {
        Self
    }

    /// Stops at the first malformed statement
    pub fn read<R: Read>(&self, input: R) -> Result<DatasetGraph> {
        let mut builder = DatasetGraph::builder();
        let mut statements = 0usize;
        let mut ignored_types = 0usize;

        for triple in NTriplesParser::new().for_reader(input) {
            let triple = triple.map_err(parse_error)?;
            statements += 1;
            if !apply(&mut builder, &triple) {
                ignored_types += 1;
            }
        }

        let graph = builder.build();
        if ignored_types > 0 {
            debug!(ignored_types, "kept first class for multiply-typed vertices");
        }
        info!(
            statements,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            classified = graph.catalog().classified_count(),
            "loaded dataset"
        );
        Ok(graph)
    }

    pub fn read_str(&self, input: &str) -> Result<DatasetGraph> {
        self.read(input.as_bytes())
    }

    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<DatasetGraph> {
        let file = std::fs::File::open(path.as_ref())?;
        self.read(std::io::BufReader::new(file))
    }
}

/// Syntax errors keep their 1-based line, I/O errors pass through
fn parse_error(error: TurtleParseError) -> ShapegraphError {
    match error {
        TurtleParseError::Io(error) => ShapegraphError::Io(error),
        TurtleParseError::Syntax(error) => {
            let line = error.location().start.line as usize + 1;
            ShapegraphError::parse(line, error.message())
        }
    }
}

fn subject_vertex(subject: &Subject) -> Option<String> {
    #[allow(unreachable_patterns)]
    match subject {
        Subject::NamedNode(node) => Some(node.as_str().to_string()),
        Subject::BlankNode(node) => Some(format!("_:{}", node.as_str())),
        _ => None,
    }
}

/// Apply one statement; false when a second class was ignored
fn apply(builder: &mut DatasetGraphBuilder, triple: &Triple) -> bool {
    let Some(subject) = subject_vertex(&triple.subject) else {
        return true;
    };
    #[allow(unreachable_patterns)]
    match &triple.object {
        Term::NamedNode(class) if triple.predicate == rdf::TYPE => {
            builder.add_class(&subject, class.as_str())
        }
        Term::Literal(label) if triple.predicate == rdfs::LABEL => {
            builder.add_label(&subject, label.value());
            true
        }
        Term::Literal(_) => {
            builder.add_vertex(&subject);
            true
        }
        Term::NamedNode(target) => {
            builder.add_edge(&subject, target.as_str());
            true
        }
        Term::BlankNode(target) => {
            builder.add_edge(&subject, &format!("_:{}", target.as_str()));
            true
        }
        _ => true,
    }
}
