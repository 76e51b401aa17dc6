//! Language-independent keyword table.
//!
//! One shared set of reserved words drawn from JavaScript, Java, Ruby,
//! Python, Go, C and C++. Lookup is case-sensitive: `None` and `True`
//! are keywords, `none` is not. No attempt is made to pick a per-language
//! subset; an identifier that is reserved in *any* of these languages is
//! highlighted as a keyword everywhere.

/// Reserved words, sorted by byte order for binary search.
const KEYWORDS: &[&str] = &[
    "BEGIN", "END", "False", "Infinity", "NaN", "None", "True", "abstract",
    "alias", "align_union", "alignof", "and", "append", "as", "asm", "assert",
    "auto", "axiom", "begin", "bool", "boolean", "break", "byte",
    "caller_context", "case", "catch", "cdecl", "chan", "char", "class",
    "concept", "concept_map", "const", "const_cast", "constexpr", "continue",
    "debugger", "decltype", "def", "default", "defer", "defined", "del",
    "delegate", "delete", "die", "do", "double", "dynamic_cast", "elif", "else",
    "elsif", "end", "ensure", "enum", "eval", "except", "exec", "explicit",
    "export", "extends", "extern", "fallthrough", "false", "final", "finally",
    "float", "for", "foreach", "friend", "from", "func", "function", "go",
    "goto", "if", "implements", "import", "in", "inline", "instanceof", "int",
    "interface", "is", "lambda", "last", "late_check", "let", "local", "long",
    "make", "map", "module", "mutable", "my", "namespace", "native", "new",
    "next", "nil", "no", "noexcept", "nonlocal", "not", "null", "nullptr", "or",
    "our", "package", "pass", "print", "private", "protected", "public",
    "raise", "range", "redo", "register", "reinterpret_cast", "require",
    "rescue", "retry", "return", "select", "self", "short", "signed", "sizeof",
    "static", "static_assert", "static_cast", "strictfp", "string", "struct",
    "sub", "super", "switch", "synchronized", "template", "then", "this",
    "thread_local", "throw", "throws", "transient", "true", "try", "type",
    "typedef", "typeid", "typename", "typeof", "undef", "undefined", "union",
    "unless", "unsigned", "until", "use", "using", "var", "virtual", "void",
    "volatile", "wantarray", "when", "where", "while", "with", "yield",
];

/// Returns `true` if `ident` is a reserved word.
#[inline]
pub fn is_keyword(ident: &str) -> bool {
    KEYWORDS.binary_search(&ident).is_ok()
}

/// Byte-slice variant used by the scanner. Non-UTF-8 text is never a keyword.
#[inline]
pub(crate) fn is_keyword_bytes(ident: &[u8]) -> bool {
    std::str::from_utf8(ident).is_ok_and(is_keyword)
}

/// The full keyword table, sorted.
pub fn keywords() -> &'static [&'static str] {
    KEYWORDS
}
