use crate::error::{ConvertError, Result};

/// Placeholder a template uses to mark where the converted body goes.
pub const MARKER: &str = "INSERT-TEXT-HERE";

/// Insert a converted body into a LaTeX template.
pub fn latex_to_document(body: &str, template: &str) -> Result<String> {
    if !template.contains(MARKER) {
        return Err(ConvertError::TemplateMarkerMissing);
    }
    Ok(template.replace(MARKER, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_marker() {
        let tmpl = "\\documentclass{article}\n\\begin{document}\nINSERT-TEXT-HERE\n\\end{document}\n";
        let out = latex_to_document("Hello.", tmpl).unwrap();
        assert_eq!(
            out,
            "\\documentclass{article}\n\\begin{document}\nHello.\n\\end{document}\n"
        );
    }

    #[test]
    fn missing_marker_is_an_error() {
        let err = latex_to_document("x", "\\begin{document}\\end{document}").unwrap_err();
        assert!(matches!(err, ConvertError::TemplateMarkerMissing));
    }
}
