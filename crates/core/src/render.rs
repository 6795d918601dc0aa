//! Markdown rendering.
//!
//! A recursive depth-first traversal over a document subtree that maps a
//! fixed set of HTML element types to Markdown syntax. For each visited
//! element not in the [`OmitSet`], a fragment is emitted per the tag mapping
//! and children are visited in document order regardless of whether the
//! element itself produced output. An omitted element short-circuits before
//! its children are ever visited, so the whole subtree drops out.
//!
//! The accumulator is built by return-value composition; the traversal never
//! mutates shared state and never mutates the tree.

use std::str::FromStr;

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

use crate::selector::OmitSet;
use crate::{PagemarkError, Result};

/// How inline `code` elements are treated during text extraction.
///
/// Under [`InlineCodePolicy::Baseline`], code spans are only handled at the
/// top-level tag dispatch, so a `code` nested inside a paragraph or list item
/// loses its backticks in the container's text and is then emitted a second
/// time as a stray span when the traversal reaches it.
///
/// Under [`InlineCodePolicy::Refined`] (the default), a `code` element whose
/// immediate parent is a paragraph, list item, or inline span is wrapped in
/// backticks during text extraction, and the top-level dispatch skips those
/// same containers so the span is emitted exactly once, in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InlineCodePolicy {
    Baseline,
    #[default]
    Refined,
}

impl FromStr for InlineCodePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "baseline" => Ok(Self::Baseline),
            "refined" => Ok(Self::Refined),
            _ => Err(format!("Invalid inline-code policy: {}. Valid options: baseline, refined", s)),
        }
    }
}

/// Parents whose inline text already carries backticked code spans under the
/// refined policy.
const CODE_CONTAINERS: [&str; 3] = ["p", "li", "span"];

/// Supported block constructs, one case per mapped tag.
///
/// `Other` is the explicit default for unmapped tags: no fragment, children
/// still visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Heading(usize),
    Paragraph,
    Blockquote,
    Preformatted,
    Code,
    UnorderedList,
    OrderedList,
    Table,
    Other,
}

impl Tag {
    fn from_name(name: &str) -> Self {
        match name {
            "h1" => Self::Heading(1),
            "h2" => Self::Heading(2),
            "h3" => Self::Heading(3),
            "h4" => Self::Heading(4),
            "h5" => Self::Heading(5),
            "h6" => Self::Heading(6),
            "p" => Self::Paragraph,
            "blockquote" => Self::Blockquote,
            "pre" => Self::Preformatted,
            "code" => Self::Code,
            "ul" => Self::UnorderedList,
            "ol" => Self::OrderedList,
            "table" => Self::Table,
            _ => Self::Other,
        }
    }
}

/// Renders a subtree to Markdown, skipping omitted elements.
///
/// Fragments are concatenated in pre-order document order: the parent's
/// fragment first, then each child's output. Every node is visited at most
/// once.
///
/// # Errors
///
/// Returns [`PagemarkError::EmptyTable`] if a visited table has zero rows.
pub fn render(root: ElementRef<'_>, omit: &OmitSet, policy: InlineCodePolicy) -> Result<String> {
    collect(*root, omit, policy)
}

/// Core recursive fold.
///
/// Membership is tested at every level rather than carried down as an
/// ancestor flag; an omitted node returns early, so its children are never
/// visited at all.
fn collect(node: NodeRef<'_, Node>, omit: &OmitSet, policy: InlineCodePolicy) -> Result<String> {
    if omit.contains(node.id()) {
        return Ok(String::new());
    }

    let mut markdown = match ElementRef::wrap(node) {
        Some(element) => format_element(element, policy)?,
        None => String::new(),
    };

    for child in node.children() {
        markdown.push_str(&collect(child, omit, policy)?);
    }

    Ok(markdown)
}

/// Maps one element to its Markdown fragment.
fn format_element(element: ElementRef<'_>, policy: InlineCodePolicy) -> Result<String> {
    let fragment = match Tag::from_name(element.value().name()) {
        Tag::Heading(level) => format!("{} {}\n\n", "#".repeat(level), inline_text(element, policy)),
        Tag::Paragraph => format!("{}\n\n", inline_text(element, policy)),
        Tag::Blockquote => format!("> {}\n\n", inline_text(element, policy)),
        Tag::Preformatted => format!("```\n{}\n```\n\n", inline_text(element, policy)),
        Tag::Code => format_code_span(element, policy),
        Tag::UnorderedList => {
            let items: Vec<String> = child_elements(element)
                .map(|item| format!("- {}", inline_text(item, policy)))
                .collect();
            format!("{}\n\n", items.join("\n"))
        }
        Tag::OrderedList => {
            let items: Vec<String> = child_elements(element)
                .enumerate()
                .map(|(i, item)| format!("{}. {}", i + 1, inline_text(item, policy)))
                .collect();
            format!("{}\n\n", items.join("\n"))
        }
        Tag::Table => format_table(element, policy)?,
        Tag::Other => String::new(),
    };

    Ok(fragment)
}

/// Formats a standalone inline code span.
///
/// Code inside `<pre>` belongs to the fenced block and produces nothing here.
/// Under the refined policy, code whose parent container already rendered it
/// during text extraction also produces nothing, so the span is never
/// duplicated.
fn format_code_span(element: ElementRef<'_>, policy: InlineCodePolicy) -> String {
    let parent = parent_element(*element);
    let parent_name = parent.map(|p| p.value().name());

    if parent_name == Some("pre") {
        return String::new();
    }

    if policy == InlineCodePolicy::Refined
        && parent_name.is_some_and(|name| CODE_CONTAINERS.contains(&name))
    {
        return String::new();
    }

    format!("`{}`", inline_text(element, policy))
}

/// Formats a table: first row as header, `---` separator with the header's
/// column count, remaining rows as the body. A header-only table keeps its
/// empty body line. Row widths are passed through as-is, never padded.
fn format_table(table: ElementRef<'_>, policy: InlineCodePolicy) -> Result<String> {
    let mut rows = table_rows(table);
    if rows.is_empty() {
        return Err(PagemarkError::EmptyTable);
    }

    let header_row = rows.remove(0);
    let header = row_cells(header_row)
        .map(|cell| inline_text(cell, policy))
        .collect::<Vec<_>>()
        .join(" | ");

    let separator = header
        .split(" | ")
        .map(|_| "---")
        .collect::<Vec<_>>()
        .join(" | ");

    let body = rows
        .into_iter()
        .map(|row| {
            row_cells(row)
                .map(|cell| inline_text(cell, policy))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!("{}\n{}\n{}\n\n", header, separator, body))
}

/// All `tr` descendants of a table in document order, wherever the parser
/// placed them (`thead`, `tbody`, or bare).
fn table_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    table
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "tr")
        .collect()
}

/// The `th`/`td` element children of a row.
fn row_cells<'a>(row: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "th" | "td"))
}

fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

fn parent_element<'a>(node: NodeRef<'a, Node>) -> Option<ElementRef<'a>> {
    node.parent().and_then(ElementRef::wrap)
}

/// Concatenated text of all descendant text nodes in document order.
///
/// No separator is inserted and nothing is trimmed; whitespace in the source
/// passes through untouched. Markdown control characters in the text are not
/// escaped.
pub fn inline_text(element: ElementRef<'_>, policy: InlineCodePolicy) -> String {
    node_text(*element, policy)
}

fn node_text(node: NodeRef<'_, Node>, policy: InlineCodePolicy) -> String {
    if let Some(text) = node.value().as_text() {
        return text.to_string();
    }

    let inner: String = node.children().map(|child| node_text(child, policy)).collect();

    if policy == InlineCodePolicy::Refined
        && let Some(element) = ElementRef::wrap(node)
        && element.value().name() == "code"
        && parent_element(node).is_some_and(|p| CODE_CONTAINERS.contains(&p.value().name()))
    {
        return format!("`{}`", inner);
    }

    inner
}
