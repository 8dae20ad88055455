//! Box-drawing border sets.

use serde::{Deserialize, Serialize};

/// Border style for table decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Heavy Unicode box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    #[default]
    Heavy,
    /// Light Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    Light,
    /// Double-line Unicode box-drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    Double,
    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    Rounded,
    /// ASCII borders: +, -, |
    Ascii,
}

impl BorderStyle {
    /// Get the box-drawing characters for this border style.
    pub fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                left_t: '┣',
                cross: '╋',
                right_t: '┫',
                top_t: '┳',
                bottom_t: '┻',
            },
            BorderStyle::Light => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                left_t: '╠',
                cross: '╬',
                right_t: '╣',
                top_t: '╦',
                bottom_t: '╩',
            },
            BorderStyle::Rounded => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
        }
    }
}

impl std::str::FromStr for BorderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "heavy" => Ok(BorderStyle::Heavy),
            "light" => Ok(BorderStyle::Light),
            "double" => Ok(BorderStyle::Double),
            "rounded" => Ok(BorderStyle::Rounded),
            "ascii" => Ok(BorderStyle::Ascii),
            _ => Err(format!(
                "unknown border style '{}' (expected heavy, light, double, rounded or ascii)",
                s
            )),
        }
    }
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left_t: char,
    pub cross: char,
    pub right_t: char,
    pub top_t: char,
    pub bottom_t: char,
}

/// Type of horizontal line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineType {
    Top,
    Middle,
    Bottom,
}

impl BorderChars {
    /// Draws a horizontal rule with joints at every column boundary.
    ///
    /// ```rust
    /// use speedtable_render::tabular::{BorderStyle, LineType};
    ///
    /// let chars = BorderStyle::Heavy.chars();
    /// assert_eq!(chars.horizontal_line(&[3, 2], LineType::Top), "┏━━━┳━━┓");
    /// assert_eq!(chars.horizontal_line(&[3, 2], LineType::Middle), "┣━━━╋━━┫");
    /// ```
    pub fn horizontal_line(&self, widths: &[usize], line_type: LineType) -> String {
        let (left, joint, right) = match line_type {
            LineType::Top => (self.top_left, self.top_t, self.top_right),
            LineType::Middle => (self.left_t, self.cross, self.right_t),
            LineType::Bottom => (self.bottom_left, self.bottom_t, self.bottom_right),
        };

        let mut line = String::new();
        line.push(left);
        for (i, &width) in widths.iter().enumerate() {
            if i > 0 {
                line.push(joint);
            }
            line.extend(std::iter::repeat_n(self.horizontal, width));
        }
        line.push(right);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_style_default_is_heavy() {
        assert_eq!(BorderStyle::default(), BorderStyle::Heavy);
    }

    #[test]
    fn light_bottom_line() {
        let line = BorderStyle::Light
            .chars()
            .horizontal_line(&[2, 1, 3], LineType::Bottom);
        assert_eq!(line, "└──┴─┴───┘");
    }

    #[test]
    fn single_column_has_no_joint() {
        let line = BorderStyle::Ascii
            .chars()
            .horizontal_line(&[4], LineType::Middle);
        assert_eq!(line, "+----+");
    }

    #[test]
    fn parse_border_style() {
        assert_eq!("Double".parse::<BorderStyle>(), Ok(BorderStyle::Double));
        assert!("dotted".parse::<BorderStyle>().is_err());
    }

    #[test]
    fn border_style_serde() {
        let style: BorderStyle = serde_json::from_str("\"rounded\"").unwrap();
        assert_eq!(style, BorderStyle::Rounded);
    }
}
