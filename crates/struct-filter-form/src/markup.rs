//! Form markup builder.
//!
//! [`FormBuilder`] is the imperative API the renderer talks to: open and close
//! tags, add inputs, labels and buttons, then serialise. Every call returns a
//! `&mut Element` so attributes can be chained the same way for all element
//! kinds:
//!
//! ```
//! use struct_filter_form::markup::{FormBuilder, HtmlForm};
//!
//! let mut form = HtmlForm::get();
//! form.tag_open("div").add_class("toggle").id("__filter-author");
//! form.tag_close("div");
//! assert!(form.to_html().unwrap().contains(r#"<div class="toggle" id="__filter-author">"#));
//! ```
//!
//! [`HtmlForm`] is the stock implementation. It escapes every attribute value
//! and text node; only [`FormBuilder::add_html`] and button content are passed
//! through verbatim.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use indexmap::IndexMap;
use struct_filter_core::{FilterError, Result};

// ---------------------------------------------------------------------------
// Elements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// `<tag attrs>` that must be matched by a later [`ElementKind::Close`].
    Open(String),
    Close(String),
    /// A tag without content, e.g. `<input>`.
    Void(String),
    /// `<tag attrs>text</tag>` with escaped text.
    Text { tag: String, text: String },
    /// `<tag attrs>html</tag>` with content passed through verbatim.
    Html { tag: String, html: String },
    /// A bare escaped text node.
    TextNode(String),
    /// Verbatim markup.
    Raw(String),
}

/// One node of a form under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    kind: ElementKind,
    attrs: IndexMap<String, String>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attrs: IndexMap::new(),
        }
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Append a class, keeping existing ones.
    pub fn add_class(&mut self, class: &str) -> &mut Self {
        let classes = self.attrs.entry("class".to_string()).or_default();
        for class in class.split_whitespace() {
            if !classes.split_whitespace().any(|c| c == class) {
                if !classes.is_empty() {
                    classes.push(' ');
                }
                classes.push_str(class);
            }
        }
        self
    }

    pub fn id(&mut self, id: &str) -> &mut Self {
        self.attr("id", id)
    }

    pub fn val(&mut self, value: &str) -> &mut Self {
        self.attr("value", value)
    }

    /// Set an attribute, replacing any previous value.
    pub fn attr(&mut self, name: &str, value: &str) -> &mut Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn write_attrs(&self, out: &mut String) -> fmt::Result {
        for (name, value) in &self.attrs {
            write!(out, r#" {}="{}""#, escape(name), escape(value))?;
        }
        Ok(())
    }

    fn write_html(&self, out: &mut String) -> fmt::Result {
        match &self.kind {
            ElementKind::Open(tag) | ElementKind::Void(tag) => {
                write!(out, "<{tag}")?;
                self.write_attrs(out)?;
                out.write_char('>')
            }
            ElementKind::Close(tag) => write!(out, "</{tag}>"),
            ElementKind::Text { tag, text } => {
                write!(out, "<{tag}")?;
                self.write_attrs(out)?;
                write!(out, ">{}</{tag}>", escape(text))
            }
            ElementKind::Html { tag, html } => {
                write!(out, "<{tag}")?;
                self.write_attrs(out)?;
                write!(out, ">{html}</{tag}>")
            }
            ElementKind::TextNode(text) => out.write_str(&escape(text)),
            ElementKind::Raw(html) => out.write_str(html),
        }
    }
}

// ---------------------------------------------------------------------------
// Builder trait
// ---------------------------------------------------------------------------

/// Imperative form construction.
///
/// Implementors provide storage ([`push`](FormBuilder::push)), the form-level
/// element, hidden fields and serialisation; everything else is built on top.
pub trait FormBuilder {
    /// Append an element and return it for attribute chaining.
    fn push(&mut self, element: Element) -> &mut Element;

    /// The `<form>` element itself.
    fn form(&mut self) -> &mut Element;

    /// Set a hidden input emitted right after the opening `<form>` tag.
    fn set_hidden_field(&mut self, name: &str, value: &str);

    /// Serialise. Fails when opened and closed tags do not pair up.
    fn to_html(&self) -> Result<String>;

    fn tag_open(&mut self, tag: &str) -> &mut Element {
        self.push(Element::new(ElementKind::Open(tag.to_string())))
    }

    fn tag_close(&mut self, tag: &str) {
        self.push(Element::new(ElementKind::Close(tag.to_string())));
    }

    fn fieldset_open(&mut self) -> &mut Element {
        self.tag_open("fieldset")
    }

    fn fieldset_close(&mut self) {
        self.tag_close("fieldset");
    }

    fn add_html(&mut self, html: &str) {
        self.push(Element::new(ElementKind::Raw(html.to_string())));
    }

    fn add_text(&mut self, text: &str) {
        self.push(Element::new(ElementKind::TextNode(text.to_string())));
    }

    fn radio_button(&mut self, name: &str) -> &mut Element {
        self.push(Element::new(ElementKind::Void("input".to_string())))
            .attr("type", "radio")
            .attr("name", name)
    }

    fn label(&mut self, text: &str, for_id: &str) -> &mut Element {
        self.push(Element::new(ElementKind::Text {
            tag: "label".to_string(),
            text: text.to_string(),
        }))
        .attr("for", for_id)
    }

    /// A button whose content is trusted markup.
    fn button(&mut self, name: &str, content: &str) -> &mut Element {
        self.push(Element::new(ElementKind::Html {
            tag: "button".to_string(),
            html: content.to_string(),
        }))
        .attr("name", name)
    }
}

// ---------------------------------------------------------------------------
// HTML implementation
// ---------------------------------------------------------------------------

/// Builds a `<form>` as an HTML string.
#[derive(Debug, Clone)]
pub struct HtmlForm {
    form: Element,
    hidden: IndexMap<String, String>,
    elements: Vec<Element>,
}

impl HtmlForm {
    pub fn new(method: &str) -> Self {
        let mut form = Element::new(ElementKind::Open("form".to_string()));
        form.attr("method", method).attr("accept-charset", "utf-8");
        Self {
            form,
            hidden: IndexMap::new(),
            elements: Vec::new(),
        }
    }

    /// A GET form, the method filter forms use so filters land in the URL.
    pub fn get() -> Self {
        Self::new("get")
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    fn check_balance(&self) -> Result<()> {
        let mut open: Vec<&str> = Vec::new();
        for element in &self.elements {
            match element.kind() {
                ElementKind::Open(tag) => open.push(tag),
                ElementKind::Close(tag) => match open.pop() {
                    Some(top) if top == tag => {}
                    Some(top) => {
                        return Err(FilterError::Markup(format!(
                            "closing </{tag}> while <{top}> is open"
                        )))
                    }
                    None => {
                        return Err(FilterError::Markup(format!(
                            "closing </{tag}> without an open tag"
                        )))
                    }
                },
                _ => {}
            }
        }
        match open.last() {
            Some(tag) => Err(FilterError::Markup(format!("<{tag}> is never closed"))),
            None => Ok(()),
        }
    }
}

impl Default for HtmlForm {
    fn default() -> Self {
        Self::get()
    }
}

impl FormBuilder for HtmlForm {
    fn push(&mut self, element: Element) -> &mut Element {
        self.elements.push(element);
        let last = self.elements.len() - 1;
        &mut self.elements[last]
    }

    fn form(&mut self) -> &mut Element {
        &mut self.form
    }

    fn set_hidden_field(&mut self, name: &str, value: &str) {
        self.hidden.insert(name.to_string(), value.to_string());
    }

    fn to_html(&self) -> Result<String> {
        self.check_balance()?;

        let mut out = String::new();
        self.form.write_html(&mut out)?;
        for (name, value) in &self.hidden {
            let mut hidden = Element::new(ElementKind::Void("input".to_string()));
            hidden.attr("type", "hidden").attr("name", name).val(value);
            hidden.write_html(&mut out)?;
        }
        for element in &self.elements {
            element.write_html(&mut out)?;
        }
        out.push_str("</form>");
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
