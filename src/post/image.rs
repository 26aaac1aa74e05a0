use crate::error::{ConvertError, Result, Warning};
use crate::text::Region;
use log::{debug, warn};
use regex::Regex;
use std::sync::LazyLock;

/// A line holding a single image tag and nothing else.
static IMAGE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<img\b[^<]*>(</img>)?$").expect("valid image line regex"));

/// Close an HTML-style `<img ...>` so it parses as XML.
fn close_void_tag(fragment: &str) -> String {
    let trimmed = fragment.trim();
    if trimmed.ends_with("/>") || trimmed.contains("</img>") || !trimmed.ends_with('>') {
        return trimmed.to_string();
    }
    format!("{}/>", &trimmed[..trimmed.len() - 1])
}

/// Convert a single `<img>` tag into a `figure` block.
///
/// Missing `src`/`alt` attributes become empty strings; whether the path
/// exists is left to the LaTeX compiler.
pub fn convert(fragment: &str) -> Result<String> {
    let xml = close_void_tag(fragment);
    let doc = roxmltree::Document::parse(&xml).map_err(|source| ConvertError::MalformedImage {
        fragment: fragment.to_string(),
        source,
    })?;
    let img = doc.root_element();
    let src = img.attribute("src").unwrap_or("");
    let alt = img.attribute("alt").unwrap_or("");

    let mut figure = Region::new();
    figure
        .push_back_line("\\centering")
        .push_back_line(format!("\\includegraphics[width=\\textwidth]{{{}}}", src))
        .push_back_line(format!("\\caption{{{}}}", alt))
        .wrap_environment("figure", None);
    Ok(figure.apply())
}

/// Replace every line that consists of an image tag (optionally inside a
/// paragraph marker) with a figure block. Other lines are kept as they are;
/// an image sharing its line with text stays inline and is reported.
pub fn process_images(text: &str, warnings: &mut Vec<Warning>) -> Result<String> {
    let mut blocks = Vec::new();
    let mut count = 0usize;
    for line in text.split('\n') {
        let stripped = line.trim().replace("<p>", "").replace("</p>", "");
        if IMAGE_LINE.is_match(&stripped) {
            blocks.push(convert(&stripped)?.trim().to_string());
            count += 1;
        } else {
            if stripped.contains("<img") {
                warn!("{}", Warning::ImageNotIsolated);
                warnings.push(Warning::ImageNotIsolated);
            }
            blocks.push(line.to_string());
        }
    }
    debug!("image pass converted {} tag(s)", count);
    Ok(blocks.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_block() {
        assert_eq!(
            convert(r#"<img src="plots/a.png" alt="A plot" />"#).unwrap(),
            "\\begin{figure}\n\\centering\n\\includegraphics[width=\\textwidth]{plots/a.png}\n\\caption{A plot}\n\\end{figure}"
        );
    }

    #[test]
    fn missing_attributes_default_to_empty() {
        for tag in ["<img>", "<img/>", "<img />"] {
            let out = convert(tag).unwrap();
            assert!(out.contains("\\includegraphics[width=\\textwidth]{}"), "{}", tag);
            assert!(out.contains("\\caption{}"), "{}", tag);
        }
    }

    #[test]
    fn html_style_open_tag() {
        let out = convert(r#"<img src="x.png" alt="x">"#).unwrap();
        assert!(out.contains("{x.png}"));
    }

    #[test]
    fn malformed_tag_is_fatal() {
        let err = convert(r#"<img src="x.png>"#).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedImage { .. }));
    }

    #[test]
    fn only_image_lines_are_replaced() {
        let text = "<p>see below\n</p>\n<p>\n<img src=\"a.png\" alt=\"A\" /></p>\ninline <img src=\"b.png\" /> stays";
        let mut warnings = Vec::new();
        let out = process_images(text, &mut warnings).unwrap();
        assert_eq!(warnings, vec![Warning::ImageNotIsolated]);
        assert_eq!(
            out,
            "<p>see below\n</p>\n<p>\n\\begin{figure}\n\\centering\n\\includegraphics[width=\\textwidth]{a.png}\n\\caption{A}\n\\end{figure}\ninline <img src=\"b.png\" /> stays"
        );
    }

    #[test]
    fn image_followed_by_text_stays_inline() {
        let text = "<p>Text with \n<img src=\"b.png\" alt=\"p\" /> inline.</p>";
        let mut warnings = Vec::new();
        let out = process_images(text, &mut warnings).unwrap();
        assert_eq!(out, text);
        assert_eq!(warnings, vec![Warning::ImageNotIsolated]);
    }

    #[test]
    fn lone_malformed_tag_is_still_fatal() {
        let mut warnings = Vec::new();
        let err = process_images("<p>\n<img src=\"x.png></p>", &mut warnings).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedImage { .. }));
    }
}
