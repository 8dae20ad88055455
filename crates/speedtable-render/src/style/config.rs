//! Region style configuration.
//!
//! [`StyleConfig`] holds one optional token per region. Every field defaults
//! independently, so configurations written before a region existed keep
//! working. The legacy positional calling convention
//! (`header, border, body, type_label, title_text, title_color`) is accepted
//! only through [`StyleConfig::from_positional`].

use console::Style;
use serde::{Deserialize, Serialize};

use super::token::parse_style;
use crate::error::{Region, Result, TableError};

/// Maximum number of positional style arguments.
pub const MAX_POSITIONAL: usize = 6;

/// Style tokens for each table region.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub header: Option<String>,
    pub border: Option<String>,
    pub body: Option<String>,
    pub type_label: Option<String>,
    pub title_text: Option<String>,
    pub title_color: Option<String>,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps legacy positional arguments onto named regions.
    ///
    /// Order: header, border, body, type_label, title_text, title_color.
    /// Omitted trailing values and empty strings keep their defaults. More than
    /// six values is an error.
    ///
    /// ```rust
    /// use speedtable_render::StyleConfig;
    ///
    /// let styles = StyleConfig::from_positional(["red", "green", "yellow"]).unwrap();
    /// assert_eq!(styles.border.as_deref(), Some("green"));
    /// assert_eq!(styles.type_label, None);
    /// ```
    pub fn from_positional<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        if args.len() > MAX_POSITIONAL {
            return Err(TableError::Arguments(format!(
                "expected at most {} style arguments, got {}",
                MAX_POSITIONAL,
                args.len()
            )));
        }

        let mut config = StyleConfig::default();
        let slots = [
            &mut config.header,
            &mut config.border,
            &mut config.body,
            &mut config.type_label,
            &mut config.title_text,
            &mut config.title_color,
        ];
        for (slot, arg) in slots.into_iter().zip(&args) {
            let value: &str = arg.as_ref();
            if !value.is_empty() {
                *slot = Some(value.to_string());
            }
        }
        Ok(config)
    }

    /// Parses a YAML style document.
    ///
    /// ```rust
    /// use speedtable_render::StyleConfig;
    ///
    /// let styles = StyleConfig::from_yaml("header: bold_blue\ntitle_text: Users\n").unwrap();
    /// assert_eq!(styles.header.as_deref(), Some("bold_blue"));
    /// ```
    pub fn from_yaml(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Parses a JSON style document.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn header(mut self, token: impl Into<String>) -> Self {
        self.header = Some(token.into());
        self
    }

    pub fn border(mut self, token: impl Into<String>) -> Self {
        self.border = Some(token.into());
        self
    }

    pub fn body(mut self, token: impl Into<String>) -> Self {
        self.body = Some(token.into());
        self
    }

    pub fn type_label(mut self, token: impl Into<String>) -> Self {
        self.type_label = Some(token.into());
        self
    }

    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.title_text = Some(text.into());
        self
    }

    pub fn title_color(mut self, token: impl Into<String>) -> Self {
        self.title_color = Some(token.into());
        self
    }

    /// Layers `other` over `self`: regions set in `other` win.
    pub fn merge(self, other: &StyleConfig) -> StyleConfig {
        StyleConfig {
            header: other.header.clone().or(self.header),
            border: other.border.clone().or(self.border),
            body: other.body.clone().or(self.body),
            type_label: other.type_label.clone().or(self.type_label),
            title_text: other.title_text.clone().or(self.title_text),
            title_color: other.title_color.clone().or(self.title_color),
        }
    }

    /// Resolves every token, failing on the first invalid one.
    pub fn resolve(&self) -> Result<ResolvedStyles> {
        let title = self
            .title_text
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(|text| -> Result<Title> {
                if text.chars().any(char::is_control) {
                    return Err(TableError::Arguments(format!(
                        "title text {:?} contains a control character",
                        text
                    )));
                }
                Ok(Title {
                    text: text.to_string(),
                    style: resolve_token(self.title_color.as_deref(), Region::TitleColor)?,
                })
            })
            .transpose()?;

        // A title color with no title text still has to be a valid token.
        if title.is_none() {
            resolve_token(self.title_color.as_deref(), Region::TitleColor)?;
        }

        Ok(ResolvedStyles {
            header: resolve_token(self.header.as_deref(), Region::Header)?,
            border: resolve_token(self.border.as_deref(), Region::Border)?,
            body: resolve_token(self.body.as_deref(), Region::Body)?,
            type_label: resolve_token(self.type_label.as_deref(), Region::TypeLabel)?,
            title,
        })
    }
}

/// Resolves an optional token for `region`, attributing failures to it.
pub fn resolve_token(token: Option<&str>, region: Region) -> Result<Option<Style>> {
    match token {
        None => Ok(None),
        Some(token) => parse_style(token).map_err(|reason| TableError::Style {
            token: token.to_string(),
            region,
            reason,
        }),
    }
}

/// Concrete styles per region, ready for painting.
#[derive(Clone, Debug, Default)]
pub struct ResolvedStyles {
    pub header: Option<Style>,
    pub border: Option<Style>,
    pub body: Option<Style>,
    pub type_label: Option<Style>,
    pub title: Option<Title>,
}

/// Title text with its optional style.
#[derive(Clone, Debug)]
pub struct Title {
    pub text: String,
    pub style: Option<Style>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_empty() {
        let none: [&str; 0] = [];
        assert_eq!(StyleConfig::from_positional(none).unwrap(), StyleConfig::default());
    }

    #[test]
    fn test_positional_full() {
        let styles = StyleConfig::from_positional([
            "blue", "magenta", "white", "cyan", "Test", "red",
        ])
        .unwrap();
        assert_eq!(
            styles,
            StyleConfig::new()
                .header("blue")
                .border("magenta")
                .body("white")
                .type_label("cyan")
                .title("Test")
                .title_color("red")
        );
    }

    #[test]
    fn test_positional_empty_strings_are_skipped() {
        let styles = StyleConfig::from_positional(["", "green"]).unwrap();
        assert_eq!(styles.header, None);
        assert_eq!(styles.border.as_deref(), Some("green"));
    }

    #[test]
    fn test_positional_too_many() {
        let err = StyleConfig::from_positional(["a", "b", "c", "d", "e", "f", "g"]).unwrap_err();
        assert!(matches!(err, TableError::Arguments(_)));
    }

    #[test]
    fn test_resolve_reports_region() {
        let err = StyleConfig::new().border("ultraviolet").resolve().unwrap_err();
        match err {
            TableError::Style { token, region, .. } => {
                assert_eq!(token, "ultraviolet");
                assert_eq!(region, Region::Border);
            }
            other => panic!("expected style error, got {:?}", other),
        }
    }

    #[test]
    fn test_title_color_without_text_is_no_title() {
        let resolved = StyleConfig::new().title_color("red").resolve().unwrap();
        assert!(resolved.title.is_none());
    }

    #[test]
    fn test_title_color_without_text_still_validated() {
        assert!(StyleConfig::new().title_color("nope").resolve().is_err());
    }

    #[test]
    fn test_multiline_title_rejected() {
        let err = StyleConfig::new().title("Top\nBottom").resolve().unwrap_err();
        assert!(matches!(err, TableError::Arguments(_)));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_title_text_without_color() {
        let resolved = StyleConfig::new().title("Users").resolve().unwrap();
        let title = resolved.title.unwrap();
        assert_eq!(title.text, "Users");
        assert!(title.style.is_none());
    }

    #[test]
    fn test_none_tokens_resolve_to_no_style() {
        let resolved = StyleConfig::new().header("none").body("default").resolve().unwrap();
        assert!(resolved.header.is_none());
        assert!(resolved.body.is_none());
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = StyleConfig::new().header("red").border("green");
        let merged = base.merge(&StyleConfig::new().header("blue"));
        assert_eq!(merged.header.as_deref(), Some("blue"));
        assert_eq!(merged.border.as_deref(), Some("green"));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_region() {
        assert!(StyleConfig::from_yaml("footer: red\n").is_err());
    }

    #[test]
    fn test_from_json() {
        let styles = StyleConfig::from_json(r#"{"body": "yellow"}"#).unwrap();
        assert_eq!(styles.body.as_deref(), Some("yellow"));
    }
}
