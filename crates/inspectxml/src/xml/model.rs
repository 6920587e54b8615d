//! XML element tree

/// A `name="value"` pair, kept in document order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// XML element.
///
/// `content` is set for `<a>text</a>` and `<a><![CDATA[text]]></a>`;
/// elements with children or self-closing elements have no content.
/// Attribute names are not deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub content: Option<String>,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Value of the last attribute called `name`
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// First child called `name`
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Content text, or an empty string
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}
