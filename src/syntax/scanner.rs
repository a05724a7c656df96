//! Quote- and nesting-aware scanning of workflow expression text.
//!
//! The scanner makes one forward pass over the document. String-literal state
//! (single quotes, backslash escapes) is threaded through the whole pass, and
//! every open parenthesis pushes a frame, so call sites and their top-level
//! arguments fall out of the same pass without re-scanning any prefix.

use std::ops::Range;

/// Byte range into the document text.
pub type Span = Range<usize>;

/// One top-level argument of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// The argument text with surrounding whitespace trimmed.
    pub text: String,
    /// Span of the trimmed text. Diagnostics are reported over this span.
    pub span: Span,
}

/// A recognized `name(args)` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Function name as written.
    pub name: String,
    pub name_span: Span,
    /// Text between the parentheses, exclusive of both.
    pub args_span: Span,
    pub arguments: Vec<Argument>,
}

impl CallSite {
    /// From the start of the name through the closing parenthesis.
    pub fn call_span(&self) -> Span {
        self.name_span.start..self.args_span.end + 1
    }
}

/// Returns true for bytes that may appear in an identifier.
pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// String-literal state: inside/outside a single-quoted region, and whether
/// the previous byte was a backslash. A backslash only affects a quote that
/// follows it directly.
#[derive(Debug, Default, Clone, Copy)]
struct QuoteState {
    in_quote: bool,
    after_backslash: bool,
}

impl QuoteState {
    /// Advance over one byte. Returns true when the byte is structural, i.e.
    /// outside any string literal and not a quote or backslash.
    fn step(&mut self, b: u8) -> bool {
        let after_backslash = std::mem::take(&mut self.after_backslash);
        match b {
            b'\\' => {
                self.after_backslash = true;
                false
            }
            b'\'' => {
                if !after_backslash {
                    self.in_quote = !self.in_quote;
                }
                false
            }
            _ => !self.in_quote,
        }
    }
}

/// Bracket and brace depth. Counters may go negative on stray closers, in
/// which case no comma splits until they balance again.
#[derive(Debug, Default, Clone, Copy)]
struct Nesting {
    parens: i32,
    brackets: i32,
    braces: i32,
}

impl Nesting {
    fn track(&mut self, b: u8) {
        match b {
            b'(' => self.parens += 1,
            b')' => self.parens -= 1,
            b'[' => self.brackets += 1,
            b']' => self.brackets -= 1,
            b'{' => self.braces += 1,
            b'}' => self.braces -= 1,
            _ => {}
        }
    }

    fn is_top_level(&self) -> bool {
        self.parens == 0 && self.brackets == 0 && self.braces == 0
    }
}

fn make_argument(source: &str, raw: Span) -> Argument {
    let segment = &source[raw.clone()];
    let leading = segment.len() - segment.trim_start().len();
    let text = segment.trim();
    let start = raw.start + leading;
    Argument {
        text: text.to_string(),
        span: start..start + text.len(),
    }
}

/// Split the text between a call's parentheses into top-level arguments.
///
/// `base` is the document offset of `args[0]`; spans in the result are
/// document offsets. Whitespace-only input yields no arguments.
pub fn split_arguments(args: &str, base: usize) -> Vec<Argument> {
    if args.trim().is_empty() {
        return Vec::new();
    }

    let mut arguments = Vec::new();
    let mut quote = QuoteState::default();
    let mut nesting = Nesting::default();
    let mut start = 0;

    for (i, b) in args.bytes().enumerate() {
        if !quote.step(b) {
            continue;
        }
        if b == b',' && nesting.is_top_level() {
            arguments.push(make_argument(args, start..i));
            start = i + 1;
            continue;
        }
        nesting.track(b);
    }
    arguments.push(make_argument(args, start..args.len()));

    for argument in &mut arguments {
        argument.span = argument.span.start + base..argument.span.end + base;
    }
    arguments
}

/// An open parenthesis on the scan stack.
#[derive(Debug)]
struct Frame {
    /// Output slot and name span when this parenthesis opens a call.
    call: Option<(usize, Span)>,
    open: usize,
    arg_start: usize,
    nesting: Nesting,
    arguments: Vec<Argument>,
}

impl Frame {
    fn group(open: usize) -> Self {
        Self {
            call: None,
            open,
            arg_start: open + 1,
            nesting: Nesting::default(),
            arguments: Vec::new(),
        }
    }

    fn call(slot: usize, name_span: Span, open: usize) -> Self {
        Self {
            call: Some((slot, name_span)),
            ..Self::group(open)
        }
    }

    fn comma(&mut self, source: &str, at: usize) {
        if self.call.is_some() && self.nesting.is_top_level() {
            self.arguments.push(make_argument(source, self.arg_start..at));
            self.arg_start = at + 1;
        }
    }

    fn close(mut self, source: &str, at: usize) -> Option<(usize, CallSite)> {
        let (slot, name_span) = self.call?;
        let args_span = self.open + 1..at;
        if source[args_span.clone()].trim().is_empty() {
            self.arguments.clear();
        } else {
            self.arguments.push(make_argument(source, self.arg_start..at));
        }
        Some((
            slot,
            CallSite {
                name: source[name_span.clone()].to_string(),
                name_span,
                args_span,
                arguments: self.arguments,
            },
        ))
    }
}

/// Find every complete call site in `source`, ordered by name position.
///
/// Calls written inside string literals are ignored. A call whose closing
/// parenthesis is missing is dropped rather than reported.
pub fn scan_call_sites(source: &str) -> Vec<CallSite> {
    let bytes = source.as_bytes();
    let mut quote = QuoteState::default();
    let mut stack: Vec<Frame> = Vec::new();
    let mut slots: Vec<Option<CallSite>> = Vec::new();

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !quote.step(b) {
            i += 1;
            continue;
        }

        if is_ident_byte(b) {
            let start = i;
            while i < bytes.len() && is_ident_byte(bytes[i]) {
                i += 1;
            }
            let mut paren = i;
            while paren < bytes.len() && bytes[paren].is_ascii_whitespace() {
                paren += 1;
            }
            let is_identifier = !bytes[start].is_ascii_digit()
                && (start == 0 || !is_ident_byte(bytes[start - 1]));
            if is_identifier && bytes.get(paren) == Some(&b'(') {
                slots.push(None);
                stack.push(Frame::call(slots.len() - 1, start..i, paren));
                i = paren + 1;
            }
            continue;
        }

        match b {
            b'(' => stack.push(Frame::group(i)),
            b')' => {
                if let Some((slot, site)) = stack.pop().and_then(|frame| frame.close(source, i)) {
                    slots[slot] = Some(site);
                }
            }
            b',' => {
                if let Some(frame) = stack.last_mut() {
                    frame.comma(source, i);
                }
            }
            b'[' | b']' | b'{' | b'}' => {
                if let Some(frame) = stack.last_mut() {
                    frame.nesting.track(b);
                }
            }
            _ => {}
        }
        i += 1;
    }

    slots.into_iter().flatten().collect()
}

/// Find the identifier the cursor is inside or immediately after.
///
/// Uses the same identifier rules as call-site detection but does not
/// require a following `(`.
pub fn identifier_at(source: &str, offset: usize) -> Option<(Span, &str)> {
    let bytes = source.as_bytes();
    if offset > bytes.len() {
        return None;
    }

    let mut start = offset;
    while start > 0 && is_ident_byte(bytes[start - 1]) {
        start -= 1;
    }
    let mut end = offset;
    while end < bytes.len() && is_ident_byte(bytes[end]) {
        end += 1;
    }

    if start == end || bytes[start].is_ascii_digit() {
        return None;
    }
    Some((start..end, &source[start..end]))
}
