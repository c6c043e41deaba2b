//! Document head metadata: title, meta tags, canonical link, JSON-LD.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the head from a [`HeadModel`] so crawlers see the tags
//! without running WASM. After hydration the page applies the same
//! [`PageMetadata`] to the live document through `DomHead`, using the real
//! `window.location`.
//!
//! DESIGN
//! ======
//! Every write is an upsert keyed by what identifies the element in the DOM:
//! `name`/`property` for meta tags, `rel` for links, `id` for scripts.
//! Applying metadata any number of times leaves one element per key.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use serde::Serialize;

use crate::content;

/// Identifier of the JSON-LD organization script.
pub const ORG_SCRIPT_ID: &str = "ld-org";
pub const JSON_LD_TYPE: &str = "application/ld+json";

/// Which attribute keys a `<meta>` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// One managed element in the document head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeadElement {
    Title(String),
    Meta { attr: MetaAttr, key: String, content: String },
    Link { rel: String, href: String },
    Script { id: String, kind: String, text: String },
}

/// Write access to a document head.
pub trait DocumentHead {
    fn set_title(&mut self, title: &str);
    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str);
    fn upsert_link(&mut self, rel: &str, href: &str);
    fn upsert_script(&mut self, id: &str, kind: &str, text: &str);
}

// =============================================================================
// PAGE METADATA
// =============================================================================

/// URL of the page being described.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLocation {
    pub href: String,
    pub origin: String,
}

impl PageLocation {
    /// Join a configured origin (e.g. `https://vorrenti.com`) with a path.
    #[must_use]
    pub fn from_origin(origin: &str, path: &str) -> Self {
        let origin = origin.trim_end_matches('/').to_owned();
        let href = if path.starts_with('/') {
            format!("{origin}{path}")
        } else {
            format!("{origin}/{path}")
        };
        Self { href, origin }
    }

    /// Location of the current browser window.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn current() -> Option<Self> {
        let location = web_sys::window()?.location();
        Some(Self { href: location.href().ok()?, origin: location.origin().ok()? })
    }
}

/// Organization described by the JSON-LD record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
    pub logo: String,
}

/// Schema.org `Organization` record as embedded in the page.
#[derive(Debug, Serialize)]
pub struct OrganizationLd<'a> {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'a str,
    pub url: &'a str,
    pub logo: &'a str,
}

/// Everything the page writes into the head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub og_title: String,
    pub og_description: String,
    pub og_type: String,
    pub organization: Organization,
}

impl PageMetadata {
    /// Metadata for the Vorrenti coming-soon page.
    #[must_use]
    pub fn vorrenti() -> Self {
        Self {
            title: content::PAGE_TITLE.to_owned(),
            description: content::META_DESCRIPTION.to_owned(),
            og_title: content::PAGE_TITLE.to_owned(),
            og_description: content::OG_DESCRIPTION.to_owned(),
            og_type: "website".to_owned(),
            organization: Organization {
                name: content::BRAND_NAME.to_owned(),
                logo: content::LOGO_SRC.to_owned(),
            },
        }
    }

    #[must_use]
    pub fn organization_ld<'a>(&'a self, location: &'a PageLocation) -> OrganizationLd<'a> {
        OrganizationLd {
            context: "https://schema.org",
            kind: "Organization",
            name: &self.organization.name,
            url: &location.origin,
            logo: &self.organization.logo,
        }
    }

    /// Schema.org organization record, serialized.
    #[must_use]
    pub fn organization_json_ld(&self, location: &PageLocation) -> String {
        // Plain string fields; serialization cannot fail.
        serde_json::to_string(&self.organization_ld(location)).unwrap_or_default()
    }

    /// Write the metadata into `head`, updating existing elements in place.
    pub fn apply<H: DocumentHead + ?Sized>(&self, head: &mut H, location: &PageLocation) {
        head.set_title(&self.title);
        head.upsert_meta(MetaAttr::Name, "description", &self.description);
        head.upsert_meta(MetaAttr::Property, "og:title", &self.og_title);
        head.upsert_meta(MetaAttr::Property, "og:description", &self.og_description);
        head.upsert_meta(MetaAttr::Property, "og:type", &self.og_type);
        head.upsert_link("canonical", &location.href);
        head.upsert_script(ORG_SCRIPT_ID, JSON_LD_TYPE, &self.organization_json_ld(location));
    }
}

// =============================================================================
// IN-MEMORY HEAD
// =============================================================================

/// Ordered head elements, rendered by the SSR shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeadModel {
    elements: Vec<HeadElement>,
}

impl HeadModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a head by applying `metadata` once.
    #[must_use]
    pub fn from_metadata(metadata: &PageMetadata, location: &PageLocation) -> Self {
        let mut head = Self::new();
        metadata.apply(&mut head, location);
        head
    }

    #[must_use]
    pub fn elements(&self) -> &[HeadElement] {
        &self.elements
    }

    #[must_use]
    pub fn into_elements(self) -> Vec<HeadElement> {
        self.elements
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.elements.iter().find_map(|el| match el {
            HeadElement::Title(t) => Some(t.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn meta(&self, attr: MetaAttr, key: &str) -> Option<&str> {
        self.elements.iter().find_map(|el| match el {
            HeadElement::Meta { attr: a, key: k, content } if *a == attr && k == key => Some(content.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn link(&self, rel: &str) -> Option<&str> {
        self.elements.iter().find_map(|el| match el {
            HeadElement::Link { rel: r, href } if r == rel => Some(href.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn script(&self, id: &str) -> Option<&str> {
        self.elements.iter().find_map(|el| match el {
            HeadElement::Script { id: i, text, .. } if i == id => Some(text.as_str()),
            _ => None,
        })
    }

    fn upsert(&mut self, matches: impl Fn(&HeadElement) -> bool, element: HeadElement) {
        if let Some(idx) = self.elements.iter().position(|el| matches(el)) {
            self.elements[idx] = element;
        } else {
            self.elements.push(element);
        }
    }
}

impl DocumentHead for HeadModel {
    fn set_title(&mut self, title: &str) {
        self.upsert(|el| matches!(el, HeadElement::Title(_)), HeadElement::Title(title.to_owned()));
    }

    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str) {
        self.upsert(
            |el| matches!(el, HeadElement::Meta { attr: a, key: k, .. } if *a == attr && k == key),
            HeadElement::Meta { attr, key: key.to_owned(), content: content.to_owned() },
        );
    }

    fn upsert_link(&mut self, rel: &str, href: &str) {
        self.upsert(
            |el| matches!(el, HeadElement::Link { rel: r, .. } if r == rel),
            HeadElement::Link { rel: rel.to_owned(), href: href.to_owned() },
        );
    }

    fn upsert_script(&mut self, id: &str, kind: &str, text: &str) {
        self.upsert(
            |el| matches!(el, HeadElement::Script { id: i, .. } if i == id),
            HeadElement::Script { id: id.to_owned(), kind: kind.to_owned(), text: text.to_owned() },
        );
    }
}

// =============================================================================
// LIVE DOCUMENT HEAD
// =============================================================================

/// `DocumentHead` over the browser document. DOM failures skip the element.
#[cfg(feature = "hydrate")]
pub struct DomHead {
    document: web_sys::Document,
    head: web_sys::HtmlHeadElement,
}

#[cfg(feature = "hydrate")]
impl DomHead {
    /// `None` when there is no window, document or `<head>`.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let head = document.head()?;
        Some(Self { document, head })
    }

    fn find_or_create(&self, selector: &str, tag: &str, init: impl FnOnce(&web_sys::Element)) -> Option<web_sys::Element> {
        if let Ok(Some(existing)) = self.document.query_selector(selector) {
            return Some(existing);
        }
        let created = self.document.create_element(tag).ok()?;
        init(&created);
        self.head.append_child(&created).ok()?;
        Some(created)
    }
}

#[cfg(feature = "hydrate")]
impl DocumentHead for DomHead {
    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str) {
        let selector = format!("meta[{}=\"{key}\"]", attr.as_str());
        let tag = self.find_or_create(&selector, "meta", |el| {
            let _ = el.set_attribute(attr.as_str(), key);
        });
        if let Some(tag) = tag {
            let _ = tag.set_attribute("content", content);
        }
    }

    fn upsert_link(&mut self, rel: &str, href: &str) {
        let selector = format!("link[rel=\"{rel}\"]");
        let link = self.find_or_create(&selector, "link", |el| {
            let _ = el.set_attribute("rel", rel);
        });
        if let Some(link) = link {
            let _ = link.set_attribute("href", href);
        }
    }

    fn upsert_script(&mut self, id: &str, kind: &str, text: &str) {
        let script = self.document.get_element_by_id(id).or_else(|| {
            let created = self.document.create_element("script").ok()?;
            created.set_id(id);
            self.head.append_child(&created).ok()?;
            Some(created)
        });
        if let Some(script) = script {
            let _ = script.set_attribute("type", kind);
            script.set_text_content(Some(text));
        }
    }
}

/// Apply `metadata` to the live document at the current location.
#[cfg(feature = "hydrate")]
pub fn apply_to_document(metadata: &PageMetadata) {
    let (Some(mut head), Some(location)) = (DomHead::from_window(), PageLocation::current()) else {
        log::debug!("document head unavailable; skipping metadata");
        return;
    };
    metadata.apply(&mut head, &location);
}

/// No-op outside the browser; the server renders the head instead.
#[cfg(not(feature = "hydrate"))]
pub fn apply_to_document(metadata: &PageMetadata) {
    let _ = metadata;
}
