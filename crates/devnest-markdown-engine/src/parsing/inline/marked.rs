use crate::{escape::escape_html, parsing::span::Span};

use super::kinds::SoftBreak;

/// What an opaque zone holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneKind {
    /// Markup emitted by an inline pass (`<strong>`, `<a href=…>`, `<br />`).
    Tag,
    /// Escaped text that no later pass may format (code span bodies).
    Raw,
}

/// A byte range of a [`MarkedText`] that later passes must not match into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub kind: ZoneKind,
    pub span: Span,
}

/// Escaped text together with its opaque zones.
///
/// This is the only input an inline pass accepts. It can be built from
/// already-escaped text ([`MarkedText::from_escaped`]) or from raw text
/// ([`MarkedText::escape`]); either way escaping happens before formatting.
///
/// # Invariants
///
/// - `zones` are sorted by start and never overlap
/// - every zone lies within `text`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedText {
    text: String,
    zones: Vec<Zone>,
}

impl MarkedText {
    /// Wraps text that has already been through [`escape_html`].
    pub fn from_escaped(escaped: impl Into<String>) -> Self {
        Self {
            text: escaped.into(),
            zones: vec![],
        }
    }

    /// Escapes raw text.
    pub fn escape(raw: &str) -> Self {
        Self::from_escaped(escape_html(raw))
    }

    /// Escapes each raw line and joins them with an opaque soft break.
    pub fn join_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut out = Self::default();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                out.push_tag(SoftBreak::TAG);
            }
            out.push_text(&escape_html(line));
        }
        out
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Appends escaped text that later passes may still format.
    pub fn push_text(&mut self, escaped: &str) {
        self.text.push_str(escaped);
    }

    /// Appends generated markup as an opaque [`ZoneKind::Tag`].
    pub fn push_tag(&mut self, tag: &str) {
        self.push_zone(ZoneKind::Tag, tag);
    }

    /// Appends escaped text as an opaque [`ZoneKind::Raw`] zone.
    pub fn push_raw(&mut self, escaped: &str) {
        self.push_zone(ZoneKind::Raw, escaped);
    }

    /// Copies `span` of `src` (text and zones) onto the end of `self`.
    ///
    /// Zones that only partially overlap `span` are not copied; callers only
    /// pass spans whose boundaries fall outside every zone.
    pub fn push_slice(&mut self, src: &MarkedText, span: Span) {
        if span.is_empty() {
            return;
        }
        let offset = self.text.len();
        self.text.push_str(&src.text[span.start..span.end]);
        self.zones.extend(
            src.zones_overlapping(span)
                .filter(|z| span.contains(z.span))
                .map(|z| Zone {
                    kind: z.kind,
                    span: z.span.shift_back(span.start).shift_forward(offset),
                }),
        );
    }

    /// Text of `span` with every [`ZoneKind::Tag`] removed.
    ///
    /// Used where markup must not appear, such as attribute values.
    pub fn text_without_tags(&self, span: Span) -> String {
        let mut out = String::with_capacity(span.len());
        let mut at = span.start;
        for zone in self.zones_overlapping(span) {
            if zone.kind != ZoneKind::Tag {
                continue;
            }
            let start = zone.span.start.max(span.start);
            if start > at {
                out.push_str(&self.text[at..start]);
            }
            at = at.max(zone.span.end.min(span.end));
        }
        if at < span.end {
            out.push_str(&self.text[at..span.end]);
        }
        out
    }

    /// Zones sharing at least one byte with `span`, in order.
    pub fn zones_overlapping(&self, span: Span) -> impl Iterator<Item = &Zone> {
        let first = self.zones.partition_point(|z| z.span.end <= span.start);
        self.zones[first..]
            .iter()
            .take_while(move |z| z.span.start < span.end)
    }

    fn push_zone(&mut self, kind: ZoneKind, s: &str) {
        if s.is_empty() {
            return;
        }
        let start = self.text.len();
        self.text.push_str(s);
        self.zones.push(Zone {
            kind,
            span: Span::new(start, self.text.len()),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escape_builds_unzoned_text() {
        let m = MarkedText::escape("a < b");
        assert_eq!(m.as_str(), "a &lt; b");
        assert!(m.zones().is_empty());
    }

    #[test]
    fn join_lines_inserts_opaque_breaks() {
        let m = MarkedText::join_lines(["one", "<two>"]);
        assert_eq!(m.as_str(), "one<br />&lt;two&gt;");
        assert_eq!(
            m.zones(),
            &[Zone {
                kind: ZoneKind::Tag,
                span: Span::new(3, 9),
            }]
        );
    }

    #[test]
    fn join_single_line_has_no_break() {
        let m = MarkedText::join_lines(["only"]);
        assert_eq!(m.as_str(), "only");
        assert!(m.zones().is_empty());
    }

    #[test]
    fn push_tag_and_raw_record_zones() {
        let mut m = MarkedText::default();
        m.push_text("x");
        m.push_tag("<code>");
        m.push_raw("*y*");
        m.push_tag("</code>");
        assert_eq!(m.as_str(), "x<code>*y*</code>");
        let kinds: Vec<_> = m.zones().iter().map(|z| (z.kind, z.span)).collect();
        assert_eq!(
            kinds,
            vec![
                (ZoneKind::Tag, Span::new(1, 7)),
                (ZoneKind::Raw, Span::new(7, 10)),
                (ZoneKind::Tag, Span::new(10, 17)),
            ]
        );
    }

    #[test]
    fn empty_zones_are_not_recorded() {
        let mut m = MarkedText::default();
        m.push_raw("");
        assert!(m.zones().is_empty());
    }

    #[test]
    fn push_slice_rebases_contained_zones() {
        let mut src = MarkedText::default();
        src.push_text("ab");
        src.push_tag("<em>");
        src.push_text("c");
        src.push_tag("</em>");

        let mut dst = MarkedText::from_escaped("zz");
        dst.push_slice(&src, Span::new(1, src.len()));

        assert_eq!(dst.as_str(), "zzb<em>c</em>");
        let spans: Vec<_> = dst.zones().iter().map(|z| z.span).collect();
        assert_eq!(spans, vec![Span::new(3, 7), Span::new(8, 13)]);
    }

    #[test]
    fn zones_overlapping_finds_only_touching_zones() {
        let mut m = MarkedText::default();
        m.push_tag("<a>");
        m.push_text("text");
        m.push_tag("</a>");
        let hits: Vec<_> = m.zones_overlapping(Span::new(3, 7)).collect();
        assert!(hits.is_empty());
        let hits: Vec<_> = m.zones_overlapping(Span::new(2, 8)).collect();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn text_without_tags_keeps_raw_and_plain_text() {
        let mut m = MarkedText::default();
        m.push_text("a ");
        m.push_tag("<strong>");
        m.push_text("b");
        m.push_tag("</strong>");
        m.push_text(" ");
        m.push_tag("<code>");
        m.push_raw("c");
        m.push_tag("</code>");
        assert_eq!(m.text_without_tags(Span::new(0, m.len())), "a b c");
    }
}
