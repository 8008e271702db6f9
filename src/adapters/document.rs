use crate::core::Container;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::validate_element_id;
use lol_html::html_content::ContentType;
use lol_html::{element, rewrite_str, RewriteStrSettings};
use std::cell::Cell;

/// An HTML page whose elements are addressed by `id` and rewritten in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    html: String,
}

impl HtmlDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        String::from_utf8(bytes)
            .map(Self::new)
            .map_err(|e| PortfolioError::render(format!("page template is not UTF-8: {}", e)))
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_string(self) -> String {
        self.html
    }

    /// 以 `#id` 選擇器改寫元素；`content` 為 None 時只檢查是否存在
    fn rewrite(&self, id: &str, content: Option<(&str, ContentType)>) -> Result<(bool, String)> {
        validate_element_id("element id", id)?;
        let selector = format!("#{}", id);
        let found = Cell::new(false);

        let output = rewrite_str(
            &self.html,
            RewriteStrSettings {
                element_content_handlers: vec![element!(selector, |el| {
                    found.set(true);
                    if let Some((text, content_type)) = content {
                        el.set_inner_content(text, content_type);
                    }
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )
        .map_err(|e| PortfolioError::render(e.to_string()))?;

        Ok((found.get(), output))
    }

    fn replace(&mut self, id: &str, text: &str, content_type: ContentType) -> Result<bool> {
        let (found, output) = self.rewrite(id, Some((text, content_type)))?;
        if found {
            self.html = output;
        }
        Ok(found)
    }
}

impl Container for HtmlDocument {
    fn has_element(&self, id: &str) -> Result<bool> {
        self.rewrite(id, None).map(|(found, _)| found)
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> Result<bool> {
        self.replace(id, html, ContentType::Html)
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<bool> {
        self.replace(id, text, ContentType::Text)
    }
}
