/// Split a deck body (frontmatter already removed) into raw slide strings.
///
/// A slide ends at a `---` line with blank lines (or the document edge) on
/// both sides, or right before a `# ` heading once the slide has content.
/// Directive lines directly above such a heading move with it.
pub fn split(body: &str) -> Vec<String> {
    let body = body.replace("\r\n", "\n");
    let lines: Vec<&str> = body.split('\n').collect();

    let mut slides = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut pending_directives: Vec<&str> = Vec::new();
    let mut has_content = false;
    let mut fence: Option<&str> = None;

    for (i, &line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if let Some(marker) = fence {
            current.push(line);
            if trimmed.starts_with(marker) {
                fence = None;
            }
            continue;
        }

        if is_separator(trimmed) {
            let prev_blank = i == 0 || lines[i - 1].trim().is_empty();
            let next_blank = lines.get(i + 1).is_none_or(|l| l.trim().is_empty());
            if prev_blank && next_blank {
                current.append(&mut pending_directives);
                push_slide(&mut slides, &current);
                current.clear();
                has_content = false;
                continue;
            }
        }

        if is_directive(trimmed) {
            pending_directives.push(line);
            continue;
        }

        if line.starts_with("# ") && has_content {
            push_slide(&mut slides, &current);
            current.clear();
        }

        current.append(&mut pending_directives);
        current.push(line);

        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            fence = Some(&trimmed[..3]);
        }
        if !trimmed.is_empty() {
            has_content = true;
        }
    }

    current.append(&mut pending_directives);
    push_slide(&mut slides, &current);
    slides
}

fn push_slide(slides: &mut Vec<String>, lines: &[&str]) {
    let text = lines.join("\n").trim().to_string();
    if !text.is_empty() {
        slides.push(text);
    }
}

fn is_separator(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == '-')
}

/// `@name: value` lines configure the slide rather than adding content.
pub fn is_directive(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('@') else {
        return false;
    };
    match rest.find(':') {
        Some(colon) if colon > 0 => rest[..colon]
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_'),
        _ => false,
    }
}
