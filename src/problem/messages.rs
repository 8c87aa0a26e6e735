use formwork::language::IntegrityError;

/// Generate problem and detail messages for integrity errors
pub fn generate_error_message(error: &IntegrityError) -> (String, String) {
    match error {
        IntegrityError::AddressMismatch {
            elements,
            addresses,
            ..
        } => (
            "Content-address tree does not match form".to_string(),
            format!(
                r#"
The form here has {} elements but its node in the content-address tree
has {} entries. The tree was probably computed from a different version
of the form. Recompute it, or omit "tree" from the bundle to have it
computed when rendering.
                "#,
                elements, addresses
            )
            .trim_ascii()
            .to_string(),
        ),
        IntegrityError::AddressLeaf { .. } => (
            "Content-address tree nests below a leaf".to_string(),
            r#"
Text, definitions, uses, references and blanks have no content of their
own, so their nodes in the content-address tree must be empty. The tree
was probably computed from a different version of the form.
            "#
            .trim_ascii()
            .to_string(),
        ),
        IntegrityError::AuthoredMismatch {
            resolved, authored, ..
        } => (
            "Authored form does not match resolved form".to_string(),
            format!(
                r#"
The authored form groups into {} runs of paragraphs and child forms here,
but the resolved form groups into {}. Loading components must replace
each one with a child form, never add or remove content around it.
                "#,
                authored, resolved
            )
            .trim_ascii()
            .to_string(),
        ),
        IntegrityError::AuthoredGroup { index, .. } => (
            "Authored form does not match resolved form".to_string(),
            format!(
                r#"
Group {} is a different kind of group, or holds a different number of
child forms, in the authored form than in the resolved form.
                "#,
                index
            )
            .trim_ascii()
            .to_string(),
        ),
        IntegrityError::Unresolved { .. } => (
            "Unresolved component".to_string(),
            r#"
The resolved form still contains a reference to a published component.
Load the component and substitute its content before rendering.
            "#
            .trim_ascii()
            .to_string(),
        ),
        IntegrityError::ThreadTooDeep { digest, depth } => (
            "Comment thread nested too deeply".to_string(),
            format!(
                "A reply to a comment on form {} is nested {} levels deep, which is more than will be rendered.",
                digest, depth
            ),
        ),
        IntegrityError::BudgetExceeded { millis, .. } => (
            "Rendering took too long".to_string(),
            format!(
                "Composition did not finish within the {}ms allowed by \"budgetMillis\" in the bundle's settings.",
                millis
            ),
        ),
    }
}
