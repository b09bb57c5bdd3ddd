//! Text encoding and measurement for the standard Helvetica fonts.

/// Encode `s` as WinAnsiEncoding bytes.
///
/// Latin-1 characters map directly; the few typographic characters WinAnsi
/// places in 0x80..0x9F are translated; anything else becomes `?`.
pub fn encode_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            _ => match c {
                '€' => 0x80,
                '‚' => 0x82,
                '„' => 0x84,
                '…' => 0x85,
                '‘' => 0x91,
                '’' => 0x92,
                '“' => 0x93,
                '”' => 0x94,
                '•' => 0x95,
                '–' => 0x96,
                '—' => 0x97,
                '\t' => b' ',
                _ => b'?',
            },
        })
        .collect()
}

/// Helvetica advance widths (1/1000 em) for printable ASCII, 0x20..=0x7E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Approximate rendered width of `s` in points.
///
/// Non-ASCII characters use the width of a lowercase letter. Bold text runs
/// slightly wider.
pub fn text_width(s: &str, size: f32, bold: bool) -> f32 {
    let units: u32 = s
        .chars()
        .map(|c| match c as u32 {
            code @ 0x20..=0x7E => HELVETICA_WIDTHS[(code - 0x20) as usize] as u32,
            _ => 556,
        })
        .sum();
    let scale = if bold { 1.06 } else { 1.0 };
    units as f32 * size / 1000.0 * scale
}

/// Cut `s` to fit `max_width`, appending "..." when shortened.
pub fn truncate_to_width(s: &str, max_width: f32, size: f32, bold: bool) -> String {
    if text_width(s, size, bold) <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    for c in s.chars() {
        out.push(c);
        if text_width(&format!("{out}..."), size, bold) > max_width {
            out.pop();
            break;
        }
    }
    format!("{}...", out.trim_end())
}

/// Word-wrap `s` into at most `max_lines` lines of `max_width`.
///
/// Overflow on the last line is truncated with "...". A single word wider
/// than the line is truncated rather than split.
pub fn wrap_text(s: &str, max_width: f32, size: f32, bold: bool, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let words: Vec<&str> = s.split_whitespace().collect();

    for (i, word) in words.iter().enumerate() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width(&candidate, size, bold) <= max_width || current.is_empty() {
            current = candidate;
            continue;
        }

        if lines.len() + 1 == max_lines {
            let rest = words[i..].join(" ");
            lines.push(truncate_to_width(
                &format!("{current} {rest}"),
                max_width,
                size,
                bold,
            ));
            return lines;
        }
        lines.push(truncate_to_width(&current, max_width, size, bold));
        current = word.to_string();
    }

    if !current.is_empty() && lines.len() < max_lines.max(1) {
        lines.push(truncate_to_width(&current, max_width, size, bold));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_portuguese_accents_as_latin1() {
        assert_eq!(encode_win_ansi("Ficção"), vec![b'F', b'i', b'c', 0xE7, 0xE3, b'o']);
        assert_eq!(encode_win_ansi("INVENTÁRIO"), b"INVENT\xC1RIO".to_vec());
    }

    #[test]
    fn unrepresentable_characters_become_question_marks() {
        assert_eq!(encode_win_ansi("📖 A"), b"? A".to_vec());
        assert_eq!(encode_win_ansi("“x”"), vec![0x93, b'x', 0x94]);
    }

    #[test]
    fn width_scales_with_size() {
        let w10 = text_width("Hello", 10.0, false);
        let w20 = text_width("Hello", 20.0, false);
        assert!((w20 - 2.0 * w10).abs() < 0.01);
        assert!(text_width("Hello", 10.0, true) > w10);
    }

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_to_width("Brida", 200.0, 10.0, false), "Brida");
    }

    #[test]
    fn truncate_fits_width() {
        let long = "A Very Long Title That Will Certainly Not Fit";
        let cut = truncate_to_width(long, 60.0, 10.0, false);
        assert!(cut.ends_with("..."));
        assert!(text_width(&cut, 10.0, false) <= 60.0);
    }

    #[test]
    fn wrap_respects_line_limit() {
        let title = "O Senhor dos Anéis A Sociedade do Anel Edição Especial Ilustrada";
        let lines = wrap_text(title, 120.0, 10.0, true, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("..."));
        for line in &lines {
            assert!(text_width(line, 10.0, true) <= 120.0);
        }
    }

    #[test]
    fn wrap_short_text_is_one_line() {
        assert_eq!(wrap_text("Sapiens", 200.0, 10.0, true, 2), vec!["Sapiens"]);
        assert!(wrap_text("", 200.0, 10.0, true, 2).is_empty());
    }
}
