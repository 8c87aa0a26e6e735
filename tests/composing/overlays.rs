#[cfg(test)]
mod overlays {
    use serde_json::json;

    use formwork::composing::{compose, Block, Inline, Options, Provenance};
    use formwork::hashing::merkleize;
    use formwork::language::*;
    use formwork::path;
    use formwork::rendering::{render, Html};

    use crate::form;

    fn nested() -> Form {
        form(json!({
            "content": [
                {"heading": "Parties", "form": {"content": [
                    "This agreement is between ",
                    {"definition": "Company"},
                    {"blank": ""},
                    " and ",
                    {"form": {"content": ["the customer."]}}
                ]}},
                {"heading": "Terms", "form": {"content": ["Standard terms."]}}
            ]
        }))
    }

    fn blank_value<'a>(blocks: &'a [Block<'a>]) -> Option<&'a Inline<'a>> {
        blocks
            .iter()
            .find_map(|block| match block {
                Block::Paragraph(inlines) => inlines
                    .iter()
                    .find(|inline| matches!(inline, Inline::Blank { .. })),
                Block::Series(_) => None,
            })
    }

    fn sections<'a>(block: &'a Block<'a>) -> &'a [formwork::composing::Section<'a>] {
        match block {
            Block::Series(sections) => sections,
            Block::Paragraph(_) => panic!("Expected a series"),
        }
    }

    #[test]
    fn blank_takes_mapped_value() {
        let resolved = nested();
        let tree = merkleize(&resolved);
        let mappings = vec![BlankMapping {
            blank: path!["content", 0, "content", 2],
            value: "Acme Corp".to_string(),
        }];
        let options = Options {
            mappings: &mappings,
            ..Options::default()
        };

        let composed = compose(&resolved, &tree, None, &[], &options).unwrap();
        let parties = &sections(&composed.body.blocks[0])[0];

        assert_eq!(
            blank_value(&parties.node.blocks),
            Some(&Inline::Blank {
                path: path!["content", 0, "content", 2],
                value: Some("Acme Corp"),
            })
        );
    }

    #[test]
    fn blank_without_mapping_is_empty() {
        let resolved = nested();
        let tree = merkleize(&resolved);
        let mappings = vec![BlankMapping {
            blank: path!["content", 0, "content", 3],
            value: "Wrong place".to_string(),
        }];
        let options = Options {
            mappings: &mappings,
            ..Options::default()
        };

        let composed = compose(&resolved, &tree, None, &[], &options).unwrap();
        let parties = &sections(&composed.body.blocks[0])[0];

        assert!(matches!(
            blank_value(&parties.node.blocks),
            Some(Inline::Blank { value: None, .. })
        ));
    }

    #[test]
    fn blank_paths_may_include_form_steps() {
        let resolved = nested();
        let tree = merkleize(&resolved);
        let mappings = vec![BlankMapping {
            blank: path!["content", 0, "form", "content", 2],
            value: "Acme Corp".to_string(),
        }];
        let options = Options {
            mappings: &mappings,
            ..Options::default()
        };

        let composed = compose(&resolved, &tree, None, &[], &options).unwrap();
        let parties = &sections(&composed.body.blocks[0])[0];

        assert!(matches!(
            blank_value(&parties.node.blocks),
            Some(Inline::Blank {
                value: Some("Acme Corp"),
                ..
            })
        ));
    }

    #[test]
    fn upgraded_component_shows_provenance() {
        let resolved = form(json!({
            "content": [
                "Preamble.",
                {"heading": "Indemnity", "form": {"content": ["Hold harmless."]}}
            ]
        }));
        let tree = merkleize(&resolved);
        let resolutions = vec![Resolution {
            path: path!["content", 1, "form"],
            repository: Some("api.commonform.org".to_string()),
            publisher: "acme".to_string(),
            project: "indemnity".to_string(),
            edition: "3".to_string(),
            specified: Some("2".to_string()),
            upgrade: true,
        }];

        let composed = compose(&resolved, &tree, None, &resolutions, &Options::default()).unwrap();
        let indemnity = &sections(&composed.body.blocks[1])[0];

        assert_eq!(
            indemnity.provenance,
            Some(Provenance {
                publisher: "acme",
                project: "indemnity",
                edition: "3",
                upgraded_from: Some("2"),
            })
        );

        let html = render(&Html::default(), &composed);
        assert!(html.contains("<section class=\"component\">"));
        assert!(html.contains("(upgraded from 2)"));
    }

    #[test]
    fn annotation_attaches_to_its_form() {
        let resolved = form(json!({
            "content": [
                {"form": {"content": [
                    "Outer text.",
                    {"form": {"content": ["Inner text."]}}
                ]}},
                {"form": {"content": ["Sibling."]}}
            ]
        }));
        let tree = merkleize(&resolved);
        let annotations = vec![Annotation {
            path: path!["content", 0, "content", 1, "form"],
            level: Level::Warning,
            message: "Consider rewording.".to_string(),
            url: None,
            source: None,
        }];
        let options = Options {
            annotations: &annotations,
            ..Options::default()
        };

        let composed = compose(&resolved, &tree, None, &[], &options).unwrap();

        assert!(composed.body.annotations.is_empty());

        let top = sections(&composed.body.blocks[0]);
        assert_eq!(top[0].node.path, path!["content", 0]);
        assert_eq!(top[0].node.annotations.len(), 1);
        assert_eq!(top[0].node.annotations[0].message, "Consider rewording.");
        assert!(top[1].node.annotations.is_empty());

        let inner = sections(&top[0].node.blocks[1]);
        assert!(inner[0].node.annotations.is_empty());
    }

    #[test]
    fn comments_thread_by_digest() {
        let resolved = nested();
        let tree = merkleize(&resolved);
        let terms = tree.content[1].digest.clone();

        let comment = |uuid: &str, timestamp: i64, reply_to: &[&str]| Comment {
            uuid: uuid.to_string(),
            publisher: "ana".to_string(),
            timestamp,
            text: format!("Comment {}", uuid),
            form: terms.clone(),
            reply_to: reply_to
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };
        let comments = vec![
            comment("b", 20, &[]),
            comment("a", 10, &[]),
            comment("a1", 15, &["a"]),
            comment("orphan", 5, &["missing"]),
        ];
        let options = Options {
            comments: &comments,
            ..Options::default()
        };

        let composed = compose(&resolved, &tree, None, &[], &options).unwrap();
        assert!(composed.body.comments.is_empty());

        let forest = &sections(&composed.body.blocks[0])[1].node.comments;
        let roots: Vec<_> = forest
            .roots()
            .map(|thread| thread.comment().uuid.as_str())
            .collect();
        assert_eq!(roots, vec!["a", "b"]);

        let first = forest.roots().next().unwrap();
        let replies: Vec<_> = first
            .replies()
            .map(|thread| thread.comment().uuid.as_str())
            .collect();
        assert_eq!(replies, vec!["a1"]);
        assert_eq!(forest.len(), 3);
    }

    #[test]
    fn unmatched_overlays_change_nothing() {
        let resolved = nested();
        let tree = merkleize(&resolved);

        let plain = compose(&resolved, &tree, None, &[], &Options::default()).unwrap();

        let annotations = vec![Annotation {
            path: path!["content", 9, "content", 9, "form"],
            level: Level::Error,
            message: "Nowhere.".to_string(),
            url: None,
            source: None,
        }];
        let comments = vec![Comment {
            uuid: "c".to_string(),
            publisher: "ana".to_string(),
            timestamp: 1,
            text: "About another form.".to_string(),
            form: "0000".to_string(),
            reply_to: Vec::new(),
        }];
        let mappings = vec![BlankMapping {
            blank: path!["content", 7],
            value: "Unused".to_string(),
        }];
        let options = Options {
            annotations: &annotations,
            comments: &comments,
            mappings: &mappings,
            budget: None,
        };
        let overlaid = compose(&resolved, &tree, None, &[], &options).unwrap();

        assert_eq!(plain.contents, overlaid.contents);
        assert_eq!(
            render(&Html::default(), &plain),
            render(&Html::default(), &overlaid)
        );
    }
}
