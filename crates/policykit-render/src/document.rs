use policykit_corpus::Corpus;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Clause not found: {0}")]
    ClauseNotFound(String),
}

/// Render a Markdown policy document: the template's name and description, then one
/// numbered section per clause in the order given.
///
/// The template only supplies framing; `clause_ids` (usually a selection's ids in
/// priority order) decides which sections appear.
pub fn render_policy_document<S: AsRef<str>>(
    corpus: &Corpus,
    template_id: &str,
    clause_ids: &[S],
) -> Result<String, RenderError> {
    let template = corpus
        .template(template_id)
        .ok_or_else(|| RenderError::TemplateNotFound(template_id.to_string()))?;

    let mut out = format!("# {}\n\n", template.name);
    let description = template.description.trim();
    if !description.is_empty() {
        out.push_str(description);
        out.push_str("\n\n");
    }

    for (n, id) in clause_ids.iter().enumerate() {
        let id = id.as_ref();
        let clause = corpus
            .clause(id)
            .ok_or_else(|| RenderError::ClauseNotFound(id.to_string()))?;
        out.push_str(&format!("## {}. {}\n\n{}\n\n", n + 1, clause.title, clause.body.trim()));
    }

    // Exactly one trailing newline.
    while out.ends_with("\n\n") {
        out.pop();
    }
    Ok(out)
}
