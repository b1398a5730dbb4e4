use mapxml::{mapping, BuildOptions, Config, Declaration, Mapping, Node, XmlBuilder};
use rstest::rstest;

fn suppressed() -> XmlBuilder {
    XmlBuilder::new(Config {
        suppress_empty_node: true,
        ..Default::default()
    })
}

fn empty_attribute() -> Mapping {
    mapping([("x", Node::mapping([("@attr", Node::from("")), ("y", Node::from(1))]))])
}

#[test]
fn test_empty_node_suppressed() {
    let tree = mapping([("x", Node::Mapping(Mapping::default()))]);
    assert_eq!(suppressed().build(&tree), "<x/>");
}

#[test]
fn test_empty_node_not_suppressed() {
    let tree = mapping([("x", Node::Mapping(Mapping::default()))]);
    assert_eq!(XmlBuilder::default().build(&tree), "<x></x>");
}

#[test]
fn test_empty_attribute_dropped() {
    let xml = suppressed().build(&empty_attribute());
    assert!(xml.starts_with("<x>\n"));
}

#[test]
fn test_absent_attribute_dropped() {
    let tree = mapping([("x", Node::mapping([("@attr", Node::Absent)]))]);
    assert_eq!(suppressed().build(&tree), "<x/>");
}

#[test]
fn test_empty_attribute_kept_when_not_suppressed() {
    let builder = XmlBuilder::new(Config {
        suppress_empty_node: true,
        suppress_empty_attribute: false,
        ..Default::default()
    });
    let xml = builder.build(&empty_attribute());
    assert!(xml.starts_with("<x attr=\"\">\n"));
}

#[test]
fn test_empty_attribute_kept_without_node_suppression() {
    let xml = XmlBuilder::default().build(&empty_attribute());
    assert!(xml.starts_with("<x attr=\"\">\n"));
}

#[test]
fn test_null_attribute_is_text() {
    let tree = mapping([("x", Node::mapping([("@attr", Node::Null)]))]);
    assert_eq!(suppressed().build(&tree), "<x attr=\"null\"/>");
}

#[test]
fn test_forced_empty_ignores_suppression() {
    let tree = mapping([("r", Node::mapping([("x", Node::ForcedEmpty)]))]);
    assert_eq!(XmlBuilder::default().build(&tree), "<r>\n <x/>\n</r>");
}

#[test]
fn test_minified() {
    let tree = mapping([(
        "a",
        Node::mapping([
            ("@id", Node::from(1)),
            ("b", Node::mapping([("c", Node::from("x"))])),
            ("d", Node::from(vec![1, 2])),
        ]),
    )]);
    let builder = XmlBuilder::new(Config {
        minify: true,
        ..Default::default()
    });
    let xml = builder.build(&tree);
    assert_eq!(xml, "<a id=\"1\"><b><c>x</c></b><d>1</d><d>2</d></a>");
    assert!(!xml.contains('\n'));
    assert!(!xml.contains("  "));
}

#[test]
fn test_namespace_prefix() {
    let tree = mapping([("a", Node::mapping([("b", Node::from(1))]))]);
    let builder = XmlBuilder::new(Config {
        namespace_prefix: Some("ns".to_string()),
        ..Default::default()
    });
    assert_eq!(builder.build(&tree), "<ns:a>\n <ns:b>1</ns:b>\n</ns:a>");
}

#[test]
fn test_namespace_prefix_not_on_attributes() {
    let tree = mapping([("a", Node::mapping([("@id", Node::from("1"))]))]);
    let builder = XmlBuilder::new(Config {
        namespace_prefix: Some("ds".to_string()),
        suppress_empty_node: true,
        ..Default::default()
    });
    assert_eq!(builder.build(&tree), "<ds:a id=\"1\"/>");
}

#[test]
fn test_namespace_prefix_on_forced_empty() {
    let tree = mapping([("a", Node::mapping([("b", Node::ForcedEmpty)]))]);
    let options = BuildOptions {
        namespace_prefix: Some("ds".to_string()),
        ..Default::default()
    };
    assert_eq!(
        XmlBuilder::default().build_with(&tree, &options),
        "<ds:a>\n <ds:b/>\n</ds:a>"
    );
}

#[rstest]
#[case(false, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a>1</a>")]
#[case(true, "<?xml version=\"1.0\" encoding=\"UTF-8\"?><a>1</a>")]
fn test_declaration(#[case] minify: bool, #[case] expected: &str) {
    let tree = mapping([("a", Node::from(1))]);
    let options = BuildOptions {
        minify: Some(minify),
        declaration: Some(Declaration::default()),
        ..Default::default()
    };
    assert_eq!(XmlBuilder::default().build_with(&tree, &options), expected);
}

#[test]
fn test_declaration_version_and_encoding() {
    let tree = mapping([("a", Node::from(1))]);
    let options = BuildOptions {
        declaration: Some(Declaration::new("1.1", "ISO-8859-1")),
        ..Default::default()
    };
    assert_eq!(
        XmlBuilder::default().build_with(&tree, &options),
        "<?xml version=\"1.1\" encoding=\"ISO-8859-1\"?>\n<a>1</a>"
    );
}

#[test]
fn test_no_declaration_by_default() {
    let tree = mapping([("a", Node::from(1))]);
    assert_eq!(XmlBuilder::default().build(&tree), "<a>1</a>");
}

#[test]
fn test_overrides_do_not_leak() {
    let tree = mapping([("a", Node::mapping([("b", Node::Mapping(Mapping::default()))]))]);
    let builder = XmlBuilder::default();
    let before = builder.build(&tree);

    let overridden = builder.build_with(
        &tree,
        &BuildOptions {
            minify: Some(true),
            suppress_empty_node: Some(true),
            namespace_prefix: Some("ns".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(overridden, "<ns:a><ns:b/></ns:a>");

    assert_eq!(builder.build(&tree), before);
    assert_eq!(before, "<a>\n <b></b>\n</a>");
    assert_eq!(builder.config(), &Config::default());
}

#[test]
fn test_override_can_clear_prefix() {
    let tree = mapping([("a", Node::from(1))]);
    let builder = XmlBuilder::new(Config {
        namespace_prefix: Some("ns".to_string()),
        ..Default::default()
    });
    let options = BuildOptions {
        namespace_prefix: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(builder.build_with(&tree, &options), "<a>1</a>");
    assert_eq!(builder.build(&tree), "<ns:a>1</ns:a>");
}

#[test]
fn test_override_can_disable_suppression() {
    let tree = mapping([("x", Node::Mapping(Mapping::default()))]);
    let options = BuildOptions {
        suppress_empty_node: Some(false),
        ..Default::default()
    };
    assert_eq!(suppressed().build_with(&tree, &options), "<x></x>");
    assert_eq!(suppressed().build(&tree), "<x/>");
}

#[test]
fn test_builder_shared_across_threads() {
    let builder = std::sync::Arc::new(suppressed());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let builder = builder.clone();
            std::thread::spawn(move || {
                let tree = mapping([("x", Node::from(i))]);
                let options = BuildOptions {
                    namespace_prefix: Some(format!("n{}", i)),
                    ..Default::default()
                };
                builder.build_with(&tree, &options)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("<n{i}:x>{i}</n{i}:x>"));
    }
}
