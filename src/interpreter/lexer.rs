use logos::Logos;

use crate::error::LexError;

/// Number of characters shown on each side of an invalid character in a
/// [`LexError`] snippet.
pub const SNIPPET_RADIUS: usize = 10;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// The kind of a lexical token.
///
/// This is the closed set of token kinds the language knows about. Every
/// variant except [`TokenKind::Eof`] is produced by the `logos` scanner;
/// `Eof` is synthesised by [`Lexer::next_token`] once the input is exhausted.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `PROGRAM`
    #[token("PROGRAM")]
    Program,
    /// `VAR`
    #[token("VAR")]
    Var,
    /// `PROCEDURE`
    #[token("PROCEDURE")]
    Procedure,
    /// `BEGIN`
    #[token("BEGIN")]
    Begin,
    /// `END`
    #[token("END")]
    End,
    /// The `INTEGER` type keyword.
    #[token("INTEGER")]
    Integer,
    /// The `REAL` type keyword.
    #[token("REAL")]
    Real,
    /// `DIV`, integer division.
    #[token("DIV")]
    IntegerDiv,
    /// Identifier tokens such as `a` or `Part12`. Case is preserved.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Id,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    IntegerConst,
    /// Real literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+")]
    RealConst,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semi,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`, real division.
    #[token("/")]
    FloatDiv,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{ Comments. }` The first `}` closes the comment.
    #[regex(r"\{[^}]*\}", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    }, allow_greedy = true)]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Program => "PROGRAM",
            Self::Var => "VAR",
            Self::Procedure => "PROCEDURE",
            Self::Begin => "BEGIN",
            Self::End => "END",
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::IntegerDiv => "INTEGER_DIV",
            Self::Id => "ID",
            Self::IntegerConst => "INTEGER_CONST",
            Self::RealConst => "REAL_CONST",
            Self::Assign => "ASSIGN",
            Self::Colon => "COLON",
            Self::Semi => "SEMI",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::FloatDiv => "FLOAT_DIV",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "WHITESPACE",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// A single lexical token.
///
/// Tokens are immutable once produced. The lexeme is the exact source text
/// the token was scanned from; only [`TokenKind::Eof`] has no lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The source text of the token.
    pub lexeme: Option<String>,
    /// The source line the token starts on.
    pub line:   usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, lexeme: Option<String>, line: usize) -> Self {
        Self { kind,
               lexeme,
               line }
    }

    /// Creates an end-of-input token.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, None, line)
    }

    /// Returns the lexeme, or an empty string for tokens without one.
    #[must_use]
    pub fn text(&self) -> &str {
        self.lexeme.as_deref().unwrap_or_default()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.lexeme {
            Some(lexeme) => write!(f, "Token({}, '{lexeme}')", self.kind),
            None => write!(f, "Token({})", self.kind),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Pull-based scanner over a source string.
///
/// Each call to [`Lexer::next_token`] produces exactly one token. Once the
/// input is exhausted the lexer keeps returning [`TokenKind::Eof`] without
/// advancing.
///
/// ## Example
/// ```
/// use minipas::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("a := 10 DIV 4");
/// let kinds: Vec<TokenKind> = lexer.tokenize()
///                                  .unwrap()
///                                  .into_iter()
///                                  .map(|t| t.kind)
///                                  .collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Id,
///             TokenKind::Assign,
///             TokenKind::IntegerConst,
///             TokenKind::IntegerDiv,
///             TokenKind::IntegerConst,
///             TokenKind::Eof]);
/// ```
pub struct Lexer<'src> {
    source: &'src str,
    inner:  logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`. Leading and trailing whitespace is
    /// trimmed before scanning begins.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let source = source.trim();
        Self { source,
               inner: TokenKind::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// The line the scanner is currently on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.inner.extras.line
    }

    /// Scans and returns the next token.
    ///
    /// # Errors
    /// Returns [`LexError::InvalidCharacter`] when the input contains a
    /// character that starts no token. This includes an unterminated `{`
    /// comment.
    pub fn next_token(&mut self) -> LexResult<Token> {
        match self.inner.next() {
            Some(Ok(kind)) => {
                Ok(Token::new(kind, Some(self.inner.slice().to_string()), self.line()))
            },
            Some(Err(())) => Err(self.invalid_character()),
            None => Ok(Token::eof(self.line())),
        }
    }

    /// Scans the rest of the input, returning every token up to and including
    /// the single trailing [`TokenKind::Eof`].
    ///
    /// # Errors
    /// Propagates the first [`LexError`] encountered.
    pub fn tokenize(&mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn invalid_character(&self) -> LexError {
        let start = self.inner.span().start;
        let character = self.source[start..].chars().next().unwrap_or_default();

        LexError::InvalidCharacter { character,
                                     snippet: snippet_around(self.source, start),
                                     line: self.line() }
    }
}

/// Returns up to [`SNIPPET_RADIUS`] characters on each side of the byte offset
/// `at`.
///
/// ## Example
/// ```
/// use minipas::interpreter::lexer::snippet_around;
///
/// let source = "BEGIN a = 10; END";
/// assert_eq!(snippet_around(source, 8), "BEGIN a = 10; END");
/// assert_eq!(snippet_around("x ? y", 2), "x ? y");
/// ```
#[must_use]
pub fn snippet_around(source: &str, at: usize) -> String {
    let (before, after) = source.split_at(at);
    let head: String = before.chars()
                             .rev()
                             .take(SNIPPET_RADIUS)
                             .collect::<Vec<_>>()
                             .into_iter()
                             .rev()
                             .collect();
    let tail: String = after.chars().take(SNIPPET_RADIUS).collect();

    head + &tail
}
