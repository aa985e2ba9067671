use kuchikiki::iter::NodeIterator;
use kuchikiki::{ElementData, NodeDataRef, NodeRef};

/// Element kinds that carry an asset reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Link,
    Script,
}

impl AssetKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "img" => Some(AssetKind::Image),
            "link" => Some(AssetKind::Link),
            "script" => Some(AssetKind::Script),
            _ => None,
        }
    }

    /// The one attribute holding the reference for this kind of element
    pub fn attribute(self) -> &'static str {
        match self {
            AssetKind::Image | AssetKind::Script => "src",
            AssetKind::Link => "href",
        }
    }

    /// Only `src` references get rewritten, `href` is written back as is
    pub fn rewrites_reference(self) -> bool {
        self.attribute() == "src"
    }
}

/// An element of a parsed document that points at an asset
pub struct LocatedAsset {
    pub element: NodeDataRef<ElementData>,
    pub kind: AssetKind,
    pub reference: String,
}

impl LocatedAsset {
    pub fn attribute(&self) -> &'static str {
        self.kind.attribute()
    }
}

/// Yields the asset-bearing elements of `document` in document order.
/// Elements whose attribute is missing or blank are skipped.
pub fn locate_assets(document: &NodeRef) -> impl Iterator<Item = LocatedAsset> {
    document.descendants().elements().filter_map(|element| {
        let kind = AssetKind::from_tag(&element.name.local)?;
        let reference = element
            .attributes
            .borrow()
            .get(kind.attribute())
            .filter(|value| !value.trim().is_empty())
            .map(str::to_string)?;

        Some(LocatedAsset { element, kind, reference })
    })
}
