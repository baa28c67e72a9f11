/// Drop whitespace and `_` grouping separators before any digit parsing.
#[inline]
pub fn strip_separators(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect()
}

#[inline]
pub fn hex_byte(b: u8) -> String {
    format!("{b:02X}")
}

#[inline]
pub fn hex_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push_str(&hex_byte(b));
    }
    out
}
