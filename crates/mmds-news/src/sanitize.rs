/// Cleans untrusted HTML before it is stored.
///
/// Implementations must remove anything that can execute script (script
/// elements, `on*` attributes, `javascript:` URLs) and keep ordinary
/// formatting markup. Running a sanitizer over its own output must not
/// change it.
pub trait HtmlSanitizer: Send + Sync + 'static {
    fn sanitize(&self, html: &str) -> String;
}

/// Inline style properties the article editor produces.
const STYLE_PROPERTIES: &[&str] = &[
    "text-align",
    "text-decoration",
    "font-weight",
    "font-style",
    "font-size",
    "font-family",
    "color",
    "background-color",
    "width",
    "height",
    "float",
    "margin",
    "margin-left",
    "margin-right",
    "padding-left",
    "border",
    "border-collapse",
    "vertical-align",
];

/// [`HtmlSanitizer`] backed by ammonia's default whitelist, extended with
/// `class` and a filtered `style` on every element.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmmoniaSanitizer;

impl HtmlSanitizer for AmmoniaSanitizer {
    fn sanitize(&self, html: &str) -> String {
        let mut builder = ammonia::Builder::default();
        builder
            .add_generic_attributes(&["style", "class"])
            .filter_style_properties(STYLE_PROPERTIES.iter().copied().collect());
        builder.clean(html).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(html: &str) -> String {
        AmmoniaSanitizer.sanitize(html)
    }

    #[test]
    fn safe_markup_is_unchanged() {
        let html = "<p>Giá <strong>tốt</strong> nhất</p>";
        assert_eq!(clean(html), html);
    }

    #[test]
    fn sanitizing_twice_is_a_no_op() {
        let once = clean(r#"<p onclick="x()">Hi <a href="https://mmds.vn">link</a></p>"#);
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn editor_formatting_is_kept() {
        let out = clean(r#"<p style="text-align: center;">Giá <span class="hl">tốt</span></p>"#);
        assert!(out.contains("text-align"));
        assert!(out.contains("center"));
        assert!(out.contains(r#"class="hl""#));
    }

    #[test]
    fn styled_markup_is_stable() {
        let once = clean(
            r#"<p style="text-align: right; position: fixed" class="lead">A <em style="color: red">B</em></p>"#,
        );
        assert!(!once.contains("position"));
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn script_elements_are_removed() {
        let out = clean("<p>before</p><script>alert(1)</script><p>after</p>");
        assert_eq!(out, "<p>before</p><p>after</p>");
    }

    #[test]
    fn event_handlers_are_removed() {
        let out = clean(r#"<img src="/images/a.png" onerror="alert(1)">"#);
        assert!(!out.contains("onerror"));
        assert!(out.contains(r#"src="/images/a.png""#));
    }

    #[test]
    fn javascript_urls_are_removed() {
        let out = clean(r#"<a href="javascript:alert(1)">click</a>"#);
        assert!(!out.contains("javascript:"));
        assert!(out.contains(">click</a>"));
    }
}
