#[cfg(test)]
mod structure {
    use serde_json::json;

    use formwork::composing::{compose, Block, Inline, Options};
    use formwork::grouping::group;
    use formwork::hashing::merkleize;
    use formwork::language::IntegrityError;

    use crate::form;

    #[test]
    fn one_block_per_group() {
        let resolved = form(json!({
            "content": [
                "Preamble ",
                {"definition": "Buyer"},
                {"heading": "Price", "form": {"content": ["Ten dollars."]}},
                {"heading": "Delivery", "form": {"content": ["Tomorrow."]}},
                "In witness whereof.",
                {"form": {"content": ["Signatures."]}}
            ]
        }));
        let tree = merkleize(&resolved);
        let composed = compose(&resolved, &tree, None, &[], &Options::default()).unwrap();

        let groups = group(&resolved.content);
        assert_eq!(groups.len(), 4);
        assert_eq!(composed.body.blocks.len(), groups.len());

        match &composed.body.blocks[..] {
            [Block::Paragraph(first), Block::Series(middle), Block::Paragraph(last), Block::Series(end)] => {
                assert_eq!(first.len(), 2);
                assert_eq!(middle.len(), 2);
                assert_eq!(last.len(), 1);
                assert_eq!(end.len(), 1);
                assert_eq!(middle[0].heading, Some("Price"));
                assert_eq!(middle[1].heading, Some("Delivery"));
                assert_eq!(end[0].heading, None);
            }
            other => panic!("Unexpected blocks {:?}", other),
        }
    }

    #[test]
    fn contents_are_idempotent() {
        let resolved = form(json!({
            "content": [
                {"heading": "Definitions", "form": {"content": [
                    {"form": {"content": [
                        {"heading": "Deep", "form": {"content": ["x"]}}
                    ]}}
                ]}},
                {"form": {"content": ["No heading anywhere."]}},
                {"heading": "Term", "form": {"content": ["y"]}}
            ]
        }));
        let tree = merkleize(&resolved);

        let first = compose(&resolved, &tree, None, &[], &Options::default()).unwrap();
        let second = compose(&resolved, &tree, None, &[], &Options::default()).unwrap();

        assert_eq!(first.contents, second.contents);

        let contents = first.contents.unwrap();
        let headings: Vec<_> = contents
            .entries
            .iter()
            .map(|entry| entry.heading)
            .collect();
        assert_eq!(headings, vec![Some("Definitions"), Some("Term")]);
        assert_eq!(contents.entries[0].entries[0].heading, None);
        assert_eq!(contents.entries[0].entries[0].entries[0].heading, Some("Deep"));
    }

    #[test]
    fn no_contents_without_headings() {
        let resolved = form(json!({
            "content": [{"form": {"content": ["a"]}}, {"form": {"content": ["b"]}}]
        }));
        let tree = merkleize(&resolved);
        let composed = compose(&resolved, &tree, None, &[], &Options::default()).unwrap();
        assert!(composed.contents.is_none());
    }

    #[test]
    fn authored_components_line_up_with_resolved_children() {
        let authored = form(json!({
            "content": [
                "Intro.",
                {
                    "heading": "Warranty",
                    "repository": "api.commonform.org",
                    "publisher": "acme",
                    "project": "warranty",
                    "edition": "2e"
                },
                {"form": {"content": ["Loud."], "conspicuous": "yes"}}
            ]
        }));
        let resolved = form(json!({
            "content": [
                "Intro.",
                {"heading": "Warranty", "form": {"content": ["As is."]}},
                {"form": {"content": ["Loud."]}}
            ]
        }));
        let tree = merkleize(&resolved);

        let composed = compose(&resolved, &tree, Some(&authored), &[], &Options::default()).unwrap();

        let Block::Series(sections) = &composed.body.blocks[1] else {
            panic!("Expected a series");
        };
        assert!(!sections[0].conspicuous);
        assert!(sections[1].conspicuous);
    }

    #[test]
    fn authored_shape_must_match() {
        let authored = form(json!({"content": ["Only text."]}));
        let resolved = form(json!({
            "content": ["Only text.", {"form": {"content": ["Extra."]}}]
        }));
        let tree = merkleize(&resolved);

        let result = compose(&resolved, &tree, Some(&authored), &[], &Options::default());
        assert!(matches!(
            result,
            Err(IntegrityError::AuthoredMismatch {
                resolved: 2,
                authored: 1,
                ..
            })
        ));
    }

    #[test]
    fn address_tree_must_match() {
        let resolved = form(json!({"content": ["a", {"form": {"content": ["b", "c"]}}]}));
        let stale = form(json!({"content": ["a", {"form": {"content": ["b"]}}]}));
        let tree = merkleize(&stale);

        let result = compose(&resolved, &tree, None, &[], &Options::default());
        match result {
            Err(IntegrityError::AddressMismatch {
                path,
                elements,
                addresses,
            }) => {
                assert_eq!(path, formwork::path!["content", 1]);
                assert_eq!(elements, 2);
                assert_eq!(addresses, 1);
            }
            other => panic!("Expected address mismatch, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn uses_link_to_nearest_definition() {
        let resolved = form(json!({
            "content": [
                {"definition": "Seller"},
                " means the vendor. ",
                {"heading": "Inner", "form": {"content": [
                    {"definition": "Seller"},
                    " means something else here, and the ",
                    {"use": "seller"},
                    " agrees."
                ]}},
                {"heading": "Outer", "form": {"content": [
                    "The ",
                    {"use": "SELLER"},
                    " and the ",
                    {"use": "Buyer"},
                    "."
                ]}}
            ]
        }));
        let tree = merkleize(&resolved);
        let composed = compose(&resolved, &tree, None, &[], &Options::default()).unwrap();

        let Block::Series(sections) = &composed.body.blocks[1] else {
            panic!("Expected a series");
        };

        let inner = &sections[0].node.blocks[0];
        let Block::Paragraph(inlines) = inner else {
            panic!("Expected a paragraph");
        };
        assert_eq!(
            inlines[2],
            Inline::Use {
                term: "seller",
                anchor: Some("definition:seller:2".to_string())
            }
        );

        let outer = &sections[1].node.blocks[0];
        let Block::Paragraph(inlines) = outer else {
            panic!("Expected a paragraph");
        };
        assert_eq!(
            inlines[1],
            Inline::Use {
                term: "SELLER",
                anchor: Some("definition:seller".to_string())
            }
        );
        assert_eq!(
            inlines[3],
            Inline::Use {
                term: "Buyer",
                anchor: None
            }
        );
    }

    #[test]
    fn composed_documents_cross_threads() {
        fn shareable<T: Send + Sync>() {}
        shareable::<formwork::composing::Composed<'static>>();
        shareable::<formwork::threading::Forest<'static>>();
    }

    #[test]
    fn documents_compose_in_parallel() {
        let forms: Vec<_> = (0..8)
            .map(|i| {
                form(json!({
                    "content": [
                        format!("Document {}.", i),
                        {"heading": "Body", "form": {"content": ["Same."]}}
                    ]
                }))
            })
            .collect();
        let trees: Vec<_> = forms
            .iter()
            .map(merkleize)
            .collect();

        let digests: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = forms
                .iter()
                .zip(&trees)
                .map(|(resolved, tree)| {
                    scope.spawn(move || {
                        let composed =
                            compose(resolved, tree, None, &[], &Options::default()).unwrap();
                        composed
                            .body
                            .digest
                            .to_string()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        for (digest, tree) in digests.iter().zip(&trees) {
            assert_eq!(digest, &tree.digest);
        }
    }
}
