use super::tokens::{Token, TokenKind, TokenStream};
use super::vocabulary::{
    lookup_word, ELEMENT_IDENTIFIER, ONE_CHAR_OPERATORS, TWO_CHAR_OPERATORS,
};

/// Scanner mode. A double quote toggles between the two; no other rule
/// changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Default,
    InString,
}

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    buffer: String,
    line: usize,
    mode: Mode,
    tokens: TokenStream,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            chars: source.chars().collect(),
            pos: 0,
            buffer: String::new(),
            line: 1,
            mode: Mode::Default,
            tokens: Vec::new(),
        }
    }

    /// Runs the single forward pass and returns the tokens in source order.
    ///
    /// The scan cannot fail: unclassifiable text is flushed as `Unknown`
    /// when punctuation is reached, and anything still accumulating at end
    /// of input produces no token at all.
    pub fn tokenize(mut self) -> TokenStream {
        while self.pos < self.chars.len() {
            let ch = self.chars[self.pos];

            // The first rule that handles the character wins. The order of
            // this list is part of the classification contract.
            let handled = self.scan_quote(ch)
                || self.scan_whitespace(ch)
                || self.scan_punctuation(ch)
                || self.scan_digit_run(ch);
            if !handled {
                self.scan_word(ch);
            }

            self.pos += 1;
        }

        self.tokens
    }

    /// Double quotes open and close string literals. Both quotes end up in
    /// the lexeme; the buffer is not flushed on entry, so text already
    /// accumulating becomes part of the literal's token.
    fn scan_quote(&mut self, ch: char) -> bool {
        if ch != '"' {
            return false;
        }
        match self.mode {
            Mode::Default => {
                self.mode = Mode::InString;
                self.buffer.push(ch);
            }
            Mode::InString => {
                self.mode = Mode::Default;
                self.buffer.push(ch);
                self.flush_buffer(TokenKind::Value);
            }
        }
        true
    }

    /// A newline advances the line counter even inside a string literal and
    /// is never accumulated. Other whitespace survives only inside a
    /// literal; outside one it is discarded without flushing the buffer.
    fn scan_whitespace(&mut self, ch: char) -> bool {
        if !ch.is_whitespace() {
            return false;
        }
        if ch == '\n' {
            self.line += 1;
        } else if self.mode == Mode::InString {
            self.buffer.push(ch);
        }
        true
    }

    /// Statement and bracket punctuation. This is the only place an
    /// unclassified buffer is ever flushed, and it applies in string mode
    /// too.
    fn scan_punctuation(&mut self, ch: char) -> bool {
        if !matches!(ch, ';' | '(' | ')' | '{' | '}') {
            return false;
        }
        if !self.buffer.is_empty() {
            self.flush_buffer(TokenKind::Unknown);
        }
        self.emit(TokenKind::Punctuation, ch.to_string());
        true
    }

    /// A digit outside a string literal closes out the buffer: the digit
    /// and every immediately following digit or `.` are appended, then the
    /// whole accumulation (including any earlier unclassified characters)
    /// is tested against the element-identifier pattern. No numeric
    /// validation happens here; `1.2.3` is a Value.
    fn scan_digit_run(&mut self, ch: char) -> bool {
        if !ch.is_ascii_digit() || self.mode == Mode::InString {
            return false;
        }
        self.buffer.push(ch);
        while let Some(next) = self.peek() {
            if next.is_ascii_digit() || next == '.' {
                self.pos += 1;
                self.buffer.push(next);
            } else {
                break;
            }
        }
        if ELEMENT_IDENTIFIER.is_match(&self.buffer) {
            self.flush_buffer(TokenKind::Identifier);
        } else {
            self.flush_buffer(TokenKind::Value);
        }
        true
    }

    /// Default accumulation. After appending the character the buffer is
    /// tested against the word tables, then a two-character operator is
    /// tried by pairing the whole buffer with the next character (so it can
    /// only match when the buffer was empty), then a one-character
    /// operator. Otherwise the buffer keeps accumulating.
    fn scan_word(&mut self, ch: char) {
        self.buffer.push(ch);

        if let Some(kind) = lookup_word(&self.buffer) {
            self.flush_buffer(kind);
            return;
        }

        if let Some(next) = self.peek() {
            let mut candidate = self.buffer.clone();
            candidate.push(next);
            if TWO_CHAR_OPERATORS.contains(candidate.as_str()) {
                self.buffer.clear();
                self.emit(TokenKind::Operator, candidate);
                self.pos += 1;
                return;
            }
        }

        if ONE_CHAR_OPERATORS.contains(self.buffer.as_str()) {
            self.flush_buffer(TokenKind::Operator);
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn emit(&mut self, kind: TokenKind, text: String) {
        self.tokens.push(Token {
            kind,
            text,
            line: self.line,
        });
    }

    fn flush_buffer(&mut self, kind: TokenKind) {
        let text = std::mem::take(&mut self.buffer);
        self.emit(kind, text);
    }
}

/// Scans a complete program text.
pub fn tokenize(source: &str) -> TokenStream {
    Lexer::new(source).tokenize()
}
