use once_cell::sync::Lazy;
use regex::Regex;

use super::TokenKind;

/// A single lexical rule: an anchored pattern plus the kind it
/// produces. `None` marks a skip rule (whitespace, comments).
pub(super) struct Rule {
    pub pattern: Regex,
    pub kind: Option<TokenKind>,
}

fn rule(pattern: &str, kind: Option<TokenKind>) -> Rule {
    // anchored at the cursor so matching never scans ahead
    let pattern = Regex::new(&format!("^(?:{pattern})")).expect("invalid lexical rule");
    Rule { pattern, kind }
}

/// The rule table, in priority order: the first matching rule wins.
/// Keywords must come before the identifier rule, `==`/`!=` before `=`
/// and `!`, the compound assignments before the plain arithmetic
/// operators.
pub(super) static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    use TokenKind::*;

    vec![
        // whitespace and comments produce no tokens
        rule(r"\s+", None),
        rule(r"//.*", None),
        rule(r"/\*[\s\S]*?\*/", None),
        // strings keep their quotes, with no escape handling
        rule(r"'[^']*'", Some(String)),
        rule(r#""[^"]*""#, Some(String)),
        // punctuation
        rule(r";", Some(Semi)),
        rule(r"\{", Some(LBrace)),
        rule(r"\}", Some(RBrace)),
        rule(r"\(", Some(LParen)),
        rule(r"\)", Some(RParen)),
        rule(r",", Some(Comma)),
        rule(r"\.", Some(Dot)),
        rule(r"\[", Some(LBracket)),
        rule(r"\]", Some(RBracket)),
        // keywords, word-bounded so `lettuce` stays an identifier
        rule(r"\blet\b", Some(Let)),
        rule(r"\bif\b", Some(If)),
        rule(r"\belse\b", Some(Else)),
        rule(r"\btrue\b", Some(True)),
        rule(r"\bfalse\b", Some(False)),
        rule(r"\bnull\b", Some(Null)),
        rule(r"\bwhile\b", Some(While)),
        rule(r"\bdo\b", Some(Do)),
        rule(r"\bfor\b", Some(For)),
        rule(r"\bdef\b", Some(Def)),
        rule(r"\breturn\b", Some(Return)),
        rule(r"\bclass\b", Some(Class)),
        rule(r"\bextends\b", Some(Extends)),
        rule(r"\bsuper\b", Some(Super)),
        rule(r"\bnew\b", Some(New)),
        rule(r"\bthis\b", Some(This)),
        // literals and identifiers, ASCII only
        rule(r"[0-9]+", Some(Number)),
        rule(r"[a-zA-Z_][a-zA-Z0-9_]*", Some(Identifier)),
        // operators
        rule(r"[=!]=", Some(EqualityOperator)),
        rule(r"=", Some(SimpleAssign)),
        rule(r"[*/+\-]=", Some(ComplexAssign)),
        rule(r"[><]=?", Some(RelationalOperator)),
        rule(r"&&", Some(And)),
        rule(r"\|\|", Some(Or)),
        rule(r"!", Some(Not)),
        rule(r"[+\-]", Some(AdditiveOperator)),
        rule(r"[*/]", Some(MultiplicativeOperator)),
    ]
});
