//! Style token grammar.
//!
//! A token is a case-insensitive list of words joined by `_`, `-` or spaces:
//!
//! ```text
//! red            bold_yellow        bright_cyan       white_on_blue
//! bold           italic dim green   #ff6b35           208
//! none           (no styling; also "default" and "plain")
//! ```
//!
//! - attributes: `bold`, `dim`, `italic`, `underline`, `blink`, `reverse`,
//!   `hidden`, `strikethrough`
//! - `bright` applies to the color word that follows it
//! - `on` makes the following color the background
//! - at most one foreground and one background color

use console::Style;

use super::color::ColorDef;

/// Words that mean "no styling" when they make up the whole token.
const PLAIN_WORDS: &[&str] = &["none", "default", "plain"];

/// Parses a style token.
///
/// Returns `Ok(None)` for empty tokens and for `none`/`default`/`plain`.
/// Styles are forced on, so the escape sequences are emitted whether or not
/// stdout is a terminal.
///
/// # Example
///
/// ```rust
/// use speedtable_render::style::parse_style;
///
/// let style = parse_style("bold_red").unwrap().unwrap();
/// assert_eq!(style.apply_to("x").to_string(), "\x1b[31m\x1b[1mx\x1b[0m");
///
/// assert!(parse_style("none").unwrap().is_none());
/// assert!(parse_style("ultraviolet").is_err());
/// ```
pub fn parse_style(token: &str) -> Result<Option<Style>, String> {
    let words: Vec<String> = token
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();

    if words.is_empty() {
        return Ok(None);
    }
    if words.len() == 1 && PLAIN_WORDS.contains(&words[0].as_str()) {
        return Ok(None);
    }

    let mut style = Style::new().force_styling(true);
    let mut fg: Option<ColorDef> = None;
    let mut bg: Option<ColorDef> = None;
    let mut bright = false;
    let mut background = false;

    for word in &words {
        match word.as_str() {
            "bright" if !bright => bright = true,
            "on" if !background && !bright => background = true,
            "bold" | "dim" | "italic" | "underline" | "underlined" | "blink" | "reverse"
            | "hidden" | "strikethrough"
                if !bright && !background =>
            {
                style = apply_attribute(style, word);
            }
            _ => {
                let color = if bright {
                    ColorDef::parse_bright(word)?
                } else {
                    ColorDef::parse_word(word)?
                };
                let slot = if background { &mut bg } else { &mut fg };
                if slot.is_some() {
                    let which = if background { "background" } else { "foreground" };
                    return Err(format!("more than one {} color", which));
                }
                *slot = Some(color);
                bright = false;
                background = false;
            }
        }
    }

    if bright {
        return Err("'bright' must be followed by a color".to_string());
    }
    if background {
        return Err("'on' must be followed by a color".to_string());
    }

    if let Some(color) = fg {
        style = style.fg(color.to_console_color());
    }
    if let Some(color) = bg {
        style = style.bg(color.to_console_color());
    }
    Ok(Some(style))
}

fn apply_attribute(style: Style, word: &str) -> Style {
    match word {
        "bold" => style.bold(),
        "dim" => style.dim(),
        "italic" => style.italic(),
        "underline" | "underlined" => style.underlined(),
        "blink" => style.blink(),
        "reverse" => style.reverse(),
        "hidden" => style.hidden(),
        "strikethrough" => style.strikethrough(),
        _ => style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paint(token: &str) -> String {
        parse_style(token)
            .unwrap()
            .expect("token should produce a style")
            .apply_to("x")
            .to_string()
    }

    #[test]
    fn test_named_color() {
        assert_eq!(paint("red"), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn test_case_and_separators() {
        assert_eq!(paint("Bold_Yellow"), paint("bold yellow"));
        assert_eq!(paint("bold-yellow"), paint("BOLD_YELLOW"));
    }

    #[test]
    fn test_bold_only() {
        assert_eq!(paint("bold"), "\x1b[1mx\x1b[0m");
    }

    #[test]
    fn test_bright_color() {
        assert_eq!(paint("bright_red"), "\x1b[38;5;9mx\x1b[0m");
    }

    #[test]
    fn test_background() {
        let painted = paint("white_on_blue");
        assert!(painted.contains("\x1b[37m"));
        assert!(painted.contains("\x1b[44m"));
    }

    #[test]
    fn test_plain_tokens() {
        assert!(parse_style("").unwrap().is_none());
        assert!(parse_style("   ").unwrap().is_none());
        assert!(parse_style("none").unwrap().is_none());
        assert!(parse_style("Default").unwrap().is_none());
    }

    #[test]
    fn test_unknown_word() {
        let err = parse_style("ultraviolet").unwrap_err();
        assert!(err.contains("ultraviolet"));
        assert!(parse_style("bold_ultraviolet").is_err());
    }

    #[test]
    fn test_two_foregrounds() {
        assert!(parse_style("red_blue").is_err());
    }

    #[test]
    fn test_dangling_modifiers() {
        assert!(parse_style("bright").is_err());
        assert!(parse_style("red_on").is_err());
        assert!(parse_style("bright_bold").is_err());
    }

    #[test]
    fn test_none_inside_token_is_rejected() {
        assert!(parse_style("bold_none").is_err());
    }
}
