//! Minimal SVG element builder.
//!
//! Accumulates element markup as strings and wraps the result in an
//! `<svg>` envelope. Only the handful of shapes the heatmap needs.

/// Formats a coordinate compactly: integral values lose the trailing
/// zeros, everything else keeps two decimals.
pub(crate) fn num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v:.2}")
    }
}

/// Escapes text for use in XML content and attribute values.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Accumulates SVG elements for one document.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    elements: Vec<String>,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a `<g>` with a translate transform.
    pub fn open_group(&mut self, tx: f64, ty: f64) {
        self.elements.push(format!(
            r#"<g transform="translate({},{})">"#,
            num(tx),
            num(ty)
        ));
    }

    /// Closes the innermost open `<g>`.
    pub fn close_group(&mut self) {
        self.elements.push("</g>".to_string());
    }

    /// Emits a rectangle, optionally with a `<title>` child (shown as a
    /// tooltip by SVG viewers).
    pub fn rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fill: &str,
        stroke: &str,
        title: Option<&str>,
    ) {
        let open = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}""#,
            num(x),
            num(y),
            num(w),
            num(h),
            escape(fill),
            escape(stroke),
        );
        match title {
            Some(t) => self
                .elements
                .push(format!("{open}><title>{}</title></rect>", escape(t))),
            None => self.elements.push(format!("{open}/>")),
        }
    }

    /// Emits a path from raw path data.
    pub fn path(&mut self, d: &str, fill: &str, stroke: &str, stroke_width: f64) {
        self.elements.push(format!(
            r#"<path d="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            d,
            escape(fill),
            escape(stroke),
            num(stroke_width),
        ));
    }

    /// Emits a text element anchored at its end (right-aligned).
    pub fn text_end_anchored(&mut self, x: f64, y: f64, font_size: f64, content: &str) {
        self.elements.push(format!(
            r##"<text x="{}" y="{}" font-size="{}" font-family="sans-serif" text-anchor="end" fill="#666">{}</text>"##,
            num(x),
            num(y),
            num(font_size),
            escape(content),
        ));
    }

    /// Returns the accumulated markup without an envelope.
    pub fn markup(&self) -> String {
        self.elements.join("\n")
    }

    /// Wraps the accumulated markup in an `<svg>` envelope of the given
    /// pixel dimensions.
    pub fn finish(self, width: f64, height: f64) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
             viewBox=\"0 0 {} {}\">\n{}\n</svg>\n",
            num(width),
            num(height),
            num(width),
            num(height),
            self.markup(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_drops_integral_fraction() {
        assert_eq!(num(17.0), "17");
        assert_eq!(num(8.5), "8.50");
        assert_eq!(num(-3.0), "-3");
    }

    #[test]
    fn escape_xml_specials() {
        assert_eq!(escape("a<b&c>\"d'"), "a&lt;b&amp;c&gt;&quot;d&apos;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn rect_without_title_self_closes() {
        let mut svg = SvgBuilder::new();
        svg.rect(0.0, 0.0, 17.0, 17.0, "#eee", "none", None);
        assert_eq!(
            svg.markup(),
            r##"<rect x="0" y="0" width="17" height="17" fill="#eee" stroke="none"/>"##
        );
    }

    #[test]
    fn rect_with_title_nests_and_escapes() {
        let mut svg = SvgBuilder::new();
        svg.rect(0.0, 0.0, 1.0, 1.0, "#fff", "none", Some("a<b: 1"));
        assert!(svg.markup().contains("<title>a&lt;b: 1</title>"));
    }

    #[test]
    fn finish_wraps_in_envelope() {
        let mut svg = SvgBuilder::new();
        svg.rect(0.0, 0.0, 1.0, 1.0, "#fff", "none", None);
        let doc = svg.finish(100.0, 50.0);
        assert!(doc.starts_with("<svg xmlns="));
        assert!(doc.contains(r#"width="100" height="50""#));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn groups_nest() {
        let mut svg = SvgBuilder::new();
        svg.open_group(10.0, 20.0);
        svg.close_group();
        assert_eq!(
            svg.markup(),
            "<g transform=\"translate(10,20)\">\n</g>"
        );
    }
}
