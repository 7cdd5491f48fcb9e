use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parsing::span::Span;

use super::{
    kinds::{CodeSpan, Emphasis, Image, Link, Strikethrough},
    marked::{MarkedText, ZoneKind},
};

/// What a pass emits for each accepted match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// `<code>` around a raw-zone body.
    CodeSpan,
    /// `<tag>` around a body that later passes may still format.
    Wrap(&'static str),
    /// Self-closing `<img>` built from the `body` (alt) and `url` groups.
    Image,
    /// `<a>` around the body, pointing at the `url` group.
    Link,
}

impl PassKind {
    /// Passes that run before links must not rewrite a link destination.
    fn guards_destinations(self) -> bool {
        matches!(self, PassKind::CodeSpan | PassKind::Wrap(_))
    }
}

/// Stands in for one opaque piece while a pass matches.
///
/// Link and image destinations exclude it, so a URL never runs into markup.
pub const OPAQUE: char = '\u{FFFC}';

/// One match-and-replace step of the inline formatter.
#[derive(Debug)]
pub struct InlinePass {
    pub name: &'static str,
    pub kind: PassKind,
    pattern: Regex,
}

static DESTINATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(Link::DESTINATION).expect("Invalid link destination regex"));

static PASSES: LazyLock<Vec<InlinePass>> = LazyLock::new(|| {
    vec![
        InlinePass::new("code_span", CodeSpan::PATTERN, PassKind::CodeSpan),
        InlinePass::new("bold_stars", Emphasis::BOLD_STARS, PassKind::Wrap(Emphasis::STRONG_TAG)),
        InlinePass::new(
            "bold_underscores",
            Emphasis::BOLD_UNDERSCORES,
            PassKind::Wrap(Emphasis::STRONG_TAG),
        ),
        InlinePass::new("italic_star", Emphasis::ITALIC_STAR, PassKind::Wrap(Emphasis::EM_TAG)),
        InlinePass::new(
            "italic_underscore",
            Emphasis::ITALIC_UNDERSCORE,
            PassKind::Wrap(Emphasis::EM_TAG),
        ),
        InlinePass::new("strikethrough", Strikethrough::PATTERN, PassKind::Wrap(Strikethrough::TAG)),
        InlinePass::new("image", Image::PATTERN, PassKind::Image),
        InlinePass::new("link", Link::PATTERN, PassKind::Link),
    ]
});

/// The inline passes in the order they run.
pub fn passes() -> &'static [InlinePass] {
    &PASSES
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PieceKind {
    /// Plain escaped text, matched as-is.
    Text,
    /// A zone with no inner content (raw body, `<br />`, `<img />`) or a
    /// guarded link destination.
    Opaque,
    /// An emitted element; its content is its own level.
    Element { open: Span, close: Span },
}

#[derive(Debug, Clone, Copy)]
struct Piece {
    kind: PieceKind,
    src: Span,
    view_start: usize,
}

impl Piece {
    fn new(kind: PieceKind, src: Span) -> Self {
        Self {
            kind,
            src,
            view_start: 0,
        }
    }

    fn view_end(&self) -> usize {
        match self.kind {
            PieceKind::Text => self.view_start + self.src.len(),
            _ => self.view_start + OPAQUE.len_utf8(),
        }
    }
}

/// What a pass needs to see of its input.
struct Scope<'a> {
    input: &'a MarkedText,
    /// For each opening tag zone, the index of its closing zone.
    partners: Vec<Option<usize>>,
}

impl<'a> Scope<'a> {
    fn new(input: &'a MarkedText) -> Self {
        let zones = input.zones();
        let mut partners = vec![None; zones.len()];
        let mut open = vec![];
        for (i, zone) in zones.iter().enumerate() {
            if zone.kind != ZoneKind::Tag {
                continue;
            }
            let tag = &input.as_str()[zone.span.start..zone.span.end];
            if tag.starts_with("</") {
                if let Some(j) = open.pop() {
                    partners[j] = Some(i);
                }
            } else if !tag.ends_with("/>") {
                open.push(i);
            }
        }
        Self { input, partners }
    }
}

/// One nesting level of the input as a pass sees it.
///
/// Every element directly inside the level, every other opaque zone and (for
/// guarding passes) every link destination appears in `view` as a single
/// [`OPAQUE`] character. A match can then hold a piece whole or not at all,
/// and no candidate ever has to be rejected and searched for again.
struct Level {
    content: Span,
    view: String,
    pieces: Vec<Piece>,
}

impl Level {
    fn build(scope: &Scope<'_>, content: Span, guard: bool) -> Self {
        let zones = scope.input.zones();
        let mut pieces = vec![];
        let mut at = content.start;
        let mut i = zones.partition_point(|z| z.span.start < content.start);

        while let Some(zone) = zones.get(i).filter(|z| z.span.start < content.end) {
            if zone.span.start > at {
                pieces.push(Piece::new(PieceKind::Text, Span::new(at, zone.span.start)));
            }
            match scope.partners[i] {
                Some(j) if zones[j].span.end <= content.end => {
                    let close = zones[j].span;
                    pieces.push(Piece::new(
                        PieceKind::Element {
                            open: zone.span,
                            close,
                        },
                        Span::new(zone.span.start, close.end),
                    ));
                    at = close.end;
                    i = j + 1;
                }
                _ => {
                    pieces.push(Piece::new(PieceKind::Opaque, zone.span));
                    at = zone.span.end;
                    i += 1;
                }
            }
        }
        if content.end > at {
            pieces.push(Piece::new(PieceKind::Text, Span::new(at, content.end)));
        }

        let mut level = Self {
            content,
            view: String::new(),
            pieces,
        };
        level.layout(scope.input);
        if guard {
            level.guard_destinations(scope.input);
        }
        level
    }

    fn layout(&mut self, input: &MarkedText) {
        self.view.clear();
        for piece in &mut self.pieces {
            piece.view_start = self.view.len();
            match piece.kind {
                PieceKind::Text => {
                    self.view
                        .push_str(&input.as_str()[piece.src.start..piece.src.end]);
                }
                _ => self.view.push(OPAQUE),
            }
        }
    }

    /// Collapses each `](http…)` destination into an opaque piece.
    ///
    /// Destinations never contain [`OPAQUE`], so each lies inside one text
    /// piece.
    fn guard_destinations(&mut self, input: &MarkedText) {
        let guards: Vec<Span> = DESTINATION
            .captures_iter(&self.view)
            .filter_map(|c| c.name("url"))
            .map(|m| Span::from(m.range()))
            .collect();
        if guards.is_empty() {
            return;
        }

        let mut guards = guards.into_iter().peekable();
        let mut pieces = Vec::with_capacity(self.pieces.len() + 2 * guards.len());
        for piece in &self.pieces {
            if piece.kind != PieceKind::Text {
                pieces.push(*piece);
                continue;
            }
            let mut at = piece.src.start;
            while let Some(g) = guards.next_if(|g| g.start < piece.view_end()) {
                let start = piece.src.start + (g.start - piece.view_start);
                let end = piece.src.start + (g.end - piece.view_start);
                if start > at {
                    pieces.push(Piece::new(PieceKind::Text, Span::new(at, start)));
                }
                pieces.push(Piece::new(PieceKind::Opaque, Span::new(start, end)));
                at = end;
            }
            if piece.src.end > at {
                pieces.push(Piece::new(PieceKind::Text, Span::new(at, piece.src.end)));
            }
        }
        self.pieces = pieces;
        self.layout(input);
    }

    /// Maps a view offset that falls on a piece boundary or inside text back
    /// to the input.
    fn to_src(&self, at: usize) -> usize {
        if at >= self.view.len() {
            return self.content.end;
        }
        let i = self
            .pieces
            .partition_point(|p| p.view_start <= at)
            .saturating_sub(1);
        match self.pieces.get(i) {
            Some(p) if p.kind == PieceKind::Text => p.src.start + (at - p.view_start),
            Some(p) => p.src.start,
            None => self.content.start,
        }
    }

    fn src_span(&self, view: Span) -> Span {
        Span::new(self.to_src(view.start), self.to_src(view.end))
    }
}

impl InlinePass {
    fn new(name: &'static str, pattern: &str, kind: PassKind) -> Self {
        Self {
            name,
            kind,
            pattern: Regex::new(pattern).expect("Invalid inline pass regex"),
        }
    }

    /// Runs this pass over `input`, returning the rewritten text.
    ///
    /// Each nesting level is searched once, left to right. A match may hold
    /// whole elements, zones and guarded destinations in its body, and the
    /// content of every element is searched as a level of its own, so the
    /// work stays linear in the input.
    pub fn apply(&self, input: &MarkedText) -> MarkedText {
        let scope = Scope::new(input);
        let mut out = MarkedText::default();
        self.run(&scope, Span::new(0, input.len()), &mut out);
        out
    }

    fn run(&self, scope: &Scope<'_>, content: Span, out: &mut MarkedText) {
        let level = Level::build(scope, content, self.kind.guards_destinations());
        let mut copied = 0;
        for caps in self.pattern.captures_iter(&level.view) {
            let Some(whole) = caps.get(0) else { continue };
            self.copy(scope, &level, Span::new(copied, whole.start()), out);
            self.emit(scope, &level, &caps, out);
            copied = whole.end();
        }
        self.copy(scope, &level, Span::new(copied, level.view.len()), out);
    }

    /// Copies the pieces of `range` unchanged, running this pass inside any
    /// element they contain.
    fn copy(&self, scope: &Scope<'_>, level: &Level, range: Span, out: &mut MarkedText) {
        if range.is_empty() {
            return;
        }
        let first = level.pieces.partition_point(|p| p.view_end() <= range.start);
        for piece in level.pieces[first..]
            .iter()
            .take_while(|p| p.view_start < range.end)
        {
            match piece.kind {
                PieceKind::Text => {
                    let from = range.start.max(piece.view_start) - piece.view_start;
                    let to = range.end.min(piece.view_end()) - piece.view_start;
                    out.push_slice(
                        scope.input,
                        Span::new(piece.src.start + from, piece.src.start + to),
                    );
                }
                PieceKind::Opaque => out.push_slice(scope.input, piece.src),
                PieceKind::Element { open, close } => {
                    out.push_slice(scope.input, open);
                    self.run(scope, Span::new(open.end, close.start), out);
                    out.push_slice(scope.input, close);
                }
            }
        }
    }

    fn emit(&self, scope: &Scope<'_>, level: &Level, caps: &Captures<'_>, out: &mut MarkedText) {
        let body = caps
            .name("body")
            .map_or(Span::new(0, 0), |m| Span::from(m.range()));
        let url = caps.name("url").map_or("", |m| m.as_str());

        match self.kind {
            PassKind::CodeSpan => {
                let src = level.src_span(body);
                out.push_tag(&format!("<{}>", CodeSpan::TAG));
                out.push_raw(&scope.input.as_str()[src.start..src.end]);
                out.push_tag(&format!("</{}>", CodeSpan::TAG));
            }
            PassKind::Wrap(tag) => {
                out.push_tag(&format!("<{tag}>"));
                self.copy(scope, level, body, out);
                out.push_tag(&format!("</{tag}>"));
            }
            PassKind::Image => {
                let alt = scope.input.text_without_tags(level.src_span(body));
                out.push_tag(&format!(r#"<img src="{url}" alt="{alt}" />"#));
            }
            PassKind::Link => {
                out.push_tag(&format!(
                    r#"<a href="{url}" target="{}" rel="{}">"#,
                    Link::TARGET,
                    Link::REL
                ));
                self.copy(scope, level, body, out);
                out.push_tag("</a>");
            }
        }
    }
}
