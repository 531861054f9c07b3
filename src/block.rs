/// A single list item. Content is raw text, escaped only when emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub content: String,
}

/// A list (ordered or unordered)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

impl List {
    pub fn new(ordered: bool) -> Self {
        Self {
            ordered,
            items: Vec::new(),
        }
    }
}

/// Block-level elements reconstructed from plain text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph { text: String },
    List(List),
}
