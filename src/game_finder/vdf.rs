//! Line-oriented reader for Steam's libraryfolders.vdf
//!
//! Every line is read as a sequence of quoted tokens. A line holding exactly the
//! two tokens `"path" "<value>"` declares a library root; everything else
//! (braces, other keys, nested `apps` blocks, `//` comments) is ignored.

/// Split one line into its quoted tokens, unescaping `\\`, `\"`, `\n` and `\t`.
///
/// Returns `None` for an unterminated string. Text outside quotes is skipped,
/// and a `//` outside quotes ends the line.
fn quoted_tokens(line: &str) -> Option<Vec<String>> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                let mut token = String::new();
                loop {
                    match chars.next() {
                        None => return None,
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some('n') => token.push('\n'),
                            Some('t') => token.push('\t'),
                            Some('\\') => token.push('\\'),
                            Some('"') => token.push('"'),
                            Some(other) => {
                                token.push('\\');
                                token.push(other);
                            }
                            None => return None,
                        },
                        Some(other) => token.push(other),
                    }
                }
                tokens.push(token);
            }
            '/' if chars.peek() == Some(&'/') => break,
            _ => {}
        }
    }

    Some(tokens)
}

/// Extract every declared library path from libraryfolders.vdf content, in file order.
pub fn parse_library_paths(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(quoted_tokens)
        .filter_map(|tokens| match tokens.as_slice() {
            [key, value] if key == "path" && !value.is_empty() => Some(value.clone()),
            _ => None,
        })
        .collect()
}
