/// Splits a raw skill line on commas or semicolons, trimming and dropping empties.
/// The pieces are kept as entered; normalization happens later, on every read.
pub fn parse_skill_line(line: &str) -> Vec<String> {
    line.split([',', ';'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolves a 1-based menu choice against `len` items.
pub fn parse_choice(raw: &str, len: usize) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Some(n - 1),
        _ => None,
    }
}

/// Greedy word wrap to `width` columns. The first line starts with `first`,
/// continuation lines with `indent`. A word longer than the width gets a line
/// to itself.
pub fn wrap_text(text: &str, width: usize, first: &str, indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = first.to_string();
    let mut prefix_len = first.chars().count();

    for word in text.split_whitespace() {
        let len = current.chars().count();
        if len > prefix_len && len + 1 + word.chars().count() > width {
            lines.push(std::mem::replace(&mut current, indent.to_string()));
            prefix_len = indent.chars().count();
        }
        if current.chars().count() > prefix_len {
            current.push(' ');
        }
        current.push_str(word);
    }
    lines.push(current);
    lines
}
