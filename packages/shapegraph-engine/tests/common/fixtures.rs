//! N-Triples fixture generators

use shapegraph_engine::features::dataset::vocab::{rdf, rdfs};

pub fn iri(local: &str) -> String {
    format!("http://example.org/{local}")
}

/// `<s> <p> <o> .` between two example IRIs
pub fn nt_edge(subject: &str, predicate: &str, object: &str) -> String {
    format!("<{}> <{}> <{}> .\n", iri(subject), iri(predicate), iri(object))
}

pub fn nt_type(subject: &str, class: &str) -> String {
    format!("<{}> <{}> <{}> .\n", iri(subject), rdf::TYPE.as_str(), iri(class))
}

pub fn nt_label(subject: &str, label: &str) -> String {
    format!("<{}> <{}> \"{label}\" .\n", iri(subject), rdfs::LABEL.as_str())
}

/// Directed path `{prefix}0 -> {prefix}1 -> ...` with `n` vertices
pub fn fixture_path(prefix: &str, n: usize) -> String {
    (1..n)
        .map(|i| nt_edge(&format!("{prefix}{}", i - 1), "next", &format!("{prefix}{i}")))
        .collect()
}

/// `hub` employing `n` typed people
pub fn fixture_org_with_people(hub: &str, n: usize) -> String {
    let mut doc = nt_type(hub, "Org");
    for i in 0..n {
        let person = format!("{hub}_p{i}");
        doc.push_str(&nt_type(&person, "Person"));
        doc.push_str(&nt_edge(&person, "worksAt", hub));
    }
    doc
}

/// A small dataset mixing several shape families:
///
/// - `acme` with three employees (inbound star, bag A)
/// - `globex` with one employee (path, bag A)
/// - `r0 -> r1 -> r2 -> r3` untyped chain (directed path)
/// - `t0, t1, t2` untyped triangle (cyclic)
/// - `loner`, only a label (singleton)
pub fn fixture_mixed_dataset() -> String {
    let mut doc = String::new();
    doc.push_str("# mixed shapes\n");
    doc.push_str(&fixture_org_with_people("acme", 3));
    doc.push_str(&fixture_org_with_people("globex", 1));
    doc.push_str(&fixture_path("r", 4));
    doc.push_str(&nt_edge("t0", "link", "t1"));
    doc.push_str(&nt_edge("t1", "link", "t2"));
    doc.push_str(&nt_edge("t2", "link", "t0"));
    doc.push('\n');
    doc.push_str(&nt_label("loner", "Lonely vertex"));
    doc
}
