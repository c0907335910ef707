use nodeviz_core::{EdgeRecord, ErrorKind, GraphMetadata, GraphModel, NodeRecord};
use nodeviz_dot::{RenderStyle, render_graph, render_graph_with_style};
use pretty_assertions::assert_eq;

fn node(name: &str, synopsis: &str, url: &str) -> NodeRecord {
    NodeRecord {
        name: name.to_string(),
        path: format!("./{name}"),
        synopsis: synopsis.to_string(),
        url: url.to_string(),
    }
}

fn edge(from: &str, to: &str, relation: Option<&str>) -> EdgeRecord {
    EdgeRecord {
        from: from.to_string(),
        to: to.to_string(),
        relation: relation.map(str::to_string),
        color: None,
        style: None,
    }
}

fn metadata(name: &str) -> GraphMetadata {
    GraphMetadata {
        name: name.to_string(),
        ..Default::default()
    }
}

#[test]
fn positional_identifiers_follow_input_order() {
    let names = ["delta", "alpha", "charlie", "bravo"];
    let model = GraphModel::build(
        metadata("G"),
        names.iter().map(|n| node(n, "", "")).collect(),
        Vec::new(),
    )
    .unwrap();

    let doc = render_graph(&model).unwrap();
    for (i, name) in names.iter().enumerate() {
        assert!(
            doc.contains(&format!("  n{i} [label=\"{name}\"")),
            "n{i} should be {name} in:\n{doc}"
        );
    }
}

#[test]
fn full_document_for_spec_example() {
    let model = GraphModel::build(
        metadata("MyGraph"),
        vec![
            node("main", "Entry point", "https://example.com/main"),
            node("pkg1", "Helper", "https://example.com/pkg1"),
        ],
        vec![edge("main", "pkg1", Some("depends_on"))],
    )
    .unwrap();

    let doc = render_graph(&model).unwrap();
    let expected = "digraph MyGraph {\n  \
        node [shape=box, style=filled, fillcolor=\"#e0e0e0\", fontname=\"Arial\"];\n  \
        edge [color=\"#555555\", fontname=\"Arial\"];\n  \
        n0 [label=\"main\", URL=\"https://example.com/main\", tooltip=\"Entry point\"];\n  \
        n1 [label=\"pkg1\", URL=\"https://example.com/pkg1\", tooltip=\"Helper\"];\n  \
        n0 -> n1 [label=\"depends_on\"];\n}\n";
    assert_eq!(doc, expected);
}

#[test]
fn metadata_attributes_emitted_when_set() {
    let model = GraphModel::build(
        GraphMetadata {
            name: "Styled".to_string(),
            background_color: Some("lightgray".to_string()),
            font_name: Some("Helvetica".to_string()),
        },
        vec![node("only", "", "")],
        Vec::new(),
    )
    .unwrap();

    let doc = render_graph(&model).unwrap();
    assert!(doc.contains("  bgcolor=\"lightgray\";\n"));
    assert!(doc.contains("  fontname=\"Helvetica\";\n"));
}

#[test]
fn metadata_attributes_omitted_when_unset() {
    let model = GraphModel::build(metadata("Plain"), vec![node("only", "", "")], Vec::new())
        .unwrap();

    let doc = render_graph(&model).unwrap();
    assert!(!doc.contains("bgcolor"));
    // The default node/edge declarations carry fontname; the graph-level
    // attribute line would be the only one at two-space indent ending in ';'.
    assert!(!doc.contains("  fontname=\"Arial\";\n"));
}

#[test]
fn tooltip_quotes_are_escaped() {
    let model = GraphModel::build(
        metadata("G"),
        vec![node("q", r#"the "best" package, truly "best""#, "")],
        Vec::new(),
    )
    .unwrap();

    let doc = render_graph(&model).unwrap();
    assert!(doc.contains(r#"tooltip="the \"best\" package, truly \"best\"""#));
}

#[test]
fn unresolved_edge_fails_with_node_not_found() {
    let err = GraphModel::build(
        metadata("G"),
        vec![node("main", "", "")],
        vec![edge("main", "ghost", None)],
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NodeNotFound);
    assert!(err.message().contains("ghost"));
}

#[test]
fn duplicate_names_resolve_to_first_occurrence() {
    let model = GraphModel::build(
        metadata("G"),
        vec![node("main", "", ""), node("dup", "", ""), node("dup", "", "")],
        vec![edge("main", "dup", None)],
    )
    .unwrap();

    let doc = render_graph(&model).unwrap();
    // Both duplicates keep their own positional id...
    assert!(doc.contains("  n1 [label=\"dup\""));
    assert!(doc.contains("  n2 [label=\"dup\""));
    // ...but the edge binds to the first occurrence.
    assert!(doc.contains("  n0 -> n1;\n"));
}

#[test]
fn self_loops_and_duplicate_edges_render_as_is() {
    let model = GraphModel::build(
        metadata("G"),
        vec![node("a", "", "")],
        vec![edge("a", "a", None), edge("a", "a", None)],
    )
    .unwrap();

    let doc = render_graph(&model).unwrap();
    assert_eq!(doc.matches("  n0 -> n0;\n").count(), 2);
}

#[test]
fn custom_style_replaces_defaults() {
    let model = GraphModel::build(metadata("G"), vec![node("a", "", "")], Vec::new()).unwrap();
    let style = RenderStyle::new()
        .with_node_defaults("shape=ellipse")
        .with_edge_defaults("color=blue");

    let doc = render_graph_with_style(&model, &style).unwrap();
    assert!(doc.contains("  node [shape=ellipse];\n"));
    assert!(doc.contains("  edge [color=blue];\n"));
    assert!(!doc.contains("shape=box"));
}

#[test]
fn rendering_is_deterministic() {
    let model = GraphModel::build(
        metadata("G"),
        vec![node("a", "s", "u"), node("b", "s", "u")],
        vec![edge("a", "b", Some("x")), edge("b", "a", None)],
    )
    .unwrap();

    assert_eq!(render_graph(&model).unwrap(), render_graph(&model).unwrap());
}
