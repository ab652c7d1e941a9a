use alloc::string::String;

const NAMED_ENTITIES: [(&str, char); 12] = [
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("ndash", '\u{2013}'),
    ("mdash", '\u{2014}'),
    ("lsquo", '\u{2018}'),
    ("rsquo", '\u{2019}'),
    ("ldquo", '\u{201c}'),
    ("rdquo", '\u{201d}'),
];

/// Longest entity body we try to resolve, `#x10FFFF` included.
const MAX_ENTITY_LEN: usize = 8;

/// Replaces HTML character references in clue prose. Unknown or malformed
/// references are kept verbatim.
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let resolved = rest[1..]
            .find(';')
            .filter(|&end| end <= MAX_ENTITY_LEN)
            .and_then(|end| Some((resolve_entity(&rest[1..1 + end])?, end)));

        match resolved {
            Some((ch, end)) => {
                out.push(ch);
                rest = &rest[end + 2..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn resolve_entity(body: &str) -> Option<char> {
    if let Some(numeric) = body.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse().ok()?,
        };
        return char::from_u32(code);
    }

    NAMED_ENTITIES
        .iter()
        .find(|(name, _)| *name == body)
        .map(|&(_, ch)| ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_numeric_references_resolve() {
        assert_eq!(unescape_html("Fish &amp; chips"), "Fish & chips");
        assert_eq!(unescape_html("&#39;60s hit"), "'60s hit");
        assert_eq!(unescape_html("caf&#xE9;"), "caf\u{e9}");
        assert_eq!(unescape_html("&lt;b&gt;"), "<b>");
    }

    #[test]
    fn unknown_references_are_kept() {
        assert_eq!(unescape_html("AT&T"), "AT&T");
        assert_eq!(unescape_html("&bogus; & more"), "&bogus; & more");
        assert_eq!(unescape_html("trailing &"), "trailing &");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(unescape_html("Capital of France"), "Capital of France");
    }
}
