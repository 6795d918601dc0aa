//! HTML parsing and CSS selector queries.
//!
//! This module provides the [`Document`] type, a thin wrapper around
//! `scraper::Html` that parses a page and resolves CSS selectors against it.
//!
//! # Example
//!
//! ```rust
//! use pagemark_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <h1>Title</h1>
//!             <p class="content">Paragraph</p>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html);
//! let paragraphs = doc.select("p.content").unwrap();
//! assert_eq!(paragraphs.len(), 1);
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::{PagemarkError, Result};

/// A parsed HTML document.
///
/// Wraps a page's node tree and provides selector queries against it. The
/// tree is read-only for the lifetime of the document; rendering never
/// mutates it.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parsing is lenient: malformed markup produces a best-effort tree
    /// rather than an error, matching browser behavior.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Gets the underlying `scraper::Html` instance.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`PagemarkError::InvalidSelector`] if the selector is not
    /// valid CSS selector syntax.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pagemark_core::parse::Document;
    ///
    /// let doc = Document::parse(r#"<p class="content">First</p><p class="content">Second</p>"#);
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<ElementRef<'_>>> {
        validate_selector(selector)?;
        let sel = Selector::parse(selector).map_err(|e| PagemarkError::InvalidSelector(e.to_string()))?;

        Ok(self.html.select(&sel).collect())
    }

    /// Gets the document body element.
    ///
    /// The HTML parser synthesizes a `<body>` for every document; the root
    /// element is only used as a fallback for non-HTML trees.
    pub fn body(&self) -> ElementRef<'_> {
        let selector = Selector::parse("body").unwrap();
        self.html
            .select(&selector)
            .next()
            .unwrap_or_else(|| self.html.root_element())
    }

    /// Gets the title of the document.
    ///
    /// Returns the content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }
}

/// Rejects selector strings the CSS parser would silently repair.
///
/// The parser auto-closes an open bracket block, parenthesis, or quoted
/// string at end of input, so truncated user input like `[invalid` would
/// otherwise parse, match nothing, and omit nothing. Truncated text must
/// fail the whole operation instead.
fn validate_selector(selector: &str) -> Result<()> {
    let mut brackets = 0i32;
    let mut parens = 0i32;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for ch in selector.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            q @ ('\'' | '"') => match quote {
                Some(open) if open == q => quote = None,
                Some(_) => {}
                None => quote = Some(q),
            },
            _ if quote.is_some() => {}
            '[' => brackets += 1,
            ']' => brackets -= 1,
            '(' => parens += 1,
            ')' => parens -= 1,
            _ => {}
        }
        if brackets < 0 || parens < 0 {
            return Err(PagemarkError::InvalidSelector(format!(
                "unbalanced '{}' in {:?}",
                ch, selector
            )));
        }
    }

    if quote.is_some() || escaped || brackets != 0 || parens != 0 {
        return Err(PagemarkError::InvalidSelector(format!(
            "unterminated delimiter in {:?}",
            selector
        )));
    }

    if selector.trim_end().ends_with(['>', '+', '~', ',']) {
        return Err(PagemarkError::InvalidSelector(format!(
            "dangling combinator in {:?}",
            selector
        )));
    }

    Ok(())
}
