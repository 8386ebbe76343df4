/// Remove `<...>` markup tags from `text`.
///
/// Tags whose inner text starts with `keep_prefix` are icon references and
/// are copied through verbatim. An empty prefix keeps nothing. A `<` with no
/// closing `>` is plain text.
pub fn strip_tags(text: &str, keep_prefix: &str) -> String {
    if !text.contains('<') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('>') {
            Some(close) => {
                let inner = &after[..close];
                if !keep_prefix.is_empty() && inner.starts_with(keep_prefix) {
                    out.push('<');
                    out.push_str(inner);
                    out.push('>');
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}
