//! Document envelopes for HTML and Word exports.

use std::fmt::Write;

use mdpad_renderer::escape_html;

/// Stylesheet embedded when no custom stylesheet is configured.
pub(crate) const DEFAULT_CSS: &str = "\
body { font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif; line-height: 1.6; color: #24292e; max-width: 860px; margin: 0 auto; padding: 2rem; }
h1, h2, h3, h4, h5, h6 { margin-top: 1.5em; margin-bottom: 0.5em; line-height: 1.25; }
h1 { font-size: 2em; border-bottom: 1px solid #eaecef; padding-bottom: 0.3em; }
h2 { font-size: 1.5em; border-bottom: 1px solid #eaecef; padding-bottom: 0.3em; }
code { font-family: Consolas, 'Liberation Mono', Menlo, monospace; background: #f6f8fa; padding: 0.2em 0.4em; border-radius: 3px; }
pre { background: #f6f8fa; padding: 1em; overflow: auto; border-radius: 6px; }
pre code { background: none; padding: 0; }
blockquote { margin: 0; padding: 0 1em; color: #6a737d; border-left: 0.25em solid #dfe2e5; }
table { border-collapse: collapse; margin: 1em 0; }
th, td { border: 1px solid #dfe2e5; padding: 6px 13px; }
th { background: #f6f8fa; }
img { max-width: 100%; }
hr { border: 0; border-top: 1px solid #eaecef; margin: 1.5em 0; }";

/// Everything needed to wrap a rendered body into a document.
pub(crate) struct PageData<'a> {
    pub title: &'a str,
    pub author: Option<&'a str>,
    pub lang: &'a str,
    pub css: &'a str,
    pub body: &'a str,
}

/// Render a complete HTML5 document.
pub(crate) fn html_document(page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(page.body.len() + page.css.len() + 512);

    let _ = writeln!(html, "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>", escape_html(page.lang));
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<meta name=\"generator\" content=\"mdpad\">\n");
    if let Some(author) = page.author {
        let _ = writeln!(html, "<meta name=\"author\" content=\"{}\">", escape_html(author));
    }
    let _ = writeln!(html, "<title>{}</title>", escape_html(page.title));
    let _ = writeln!(html, "<style>\n{}\n</style>", page.css);
    html.push_str("</head>\n<body>\n<article class=\"markdown-body\">\n");
    html.push_str(page.body);
    html.push_str("\n</article>\n</body>\n</html>\n");
    html
}

/// Render an HTML document with the Office namespaces so Word opens it in
/// print layout. Starts with a byte order mark, which Word needs to detect
/// UTF-8.
pub(crate) fn word_document(page: &PageData<'_>) -> String {
    let mut html = String::with_capacity(page.body.len() + page.css.len() + 1024);

    html.push('\u{FEFF}');
    html.push_str(
        "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
         xmlns:w=\"urn:schemas-microsoft-com:office:word\" \
         xmlns=\"http://www.w3.org/TR/REC-html40\">\n",
    );
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(page.title));

    html.push_str("<!--[if gte mso 9]><xml>\n");
    if let Some(author) = page.author {
        let _ = writeln!(
            html,
            "<o:DocumentProperties><o:Author>{}</o:Author></o:DocumentProperties>",
            escape_html(author)
        );
    }
    html.push_str(
        "<w:WordDocument><w:View>Print</w:View><w:Zoom>100</w:Zoom>\
         <w:DoNotOptimizeForBrowser/></w:WordDocument>\n",
    );
    html.push_str("</xml><![endif]-->\n");

    let _ = writeln!(html, "<style>\n{}\n</style>", page.css);
    let _ = writeln!(html, "</head>\n<body lang=\"{}\">", escape_html(page.lang));
    html.push_str(page.body);
    html.push_str("\n</body>\n</html>\n");
    html
}
