pub mod from_json;
pub mod group;

pub use group::{ContentGroup, group_blocks};

/// One node of a workspace page's structural tree.
///
/// `children` is populated by the fetch layer for container kinds (toggles,
/// tables); a child belongs to exactly one parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: String,
    pub has_children: bool,
    pub kind: BlockKind,
    pub children: Vec<Block>,
}

/// Payload fields live on the kind they belong to, so rendering code cannot
/// read a field that is invalid for the block's declared kind.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    Paragraph {
        rich_text: Vec<RichText>,
    },
    Heading1 {
        rich_text: Vec<RichText>,
    },
    Heading2 {
        rich_text: Vec<RichText>,
    },
    Heading3 {
        rich_text: Vec<RichText>,
    },
    BulletedListItem {
        rich_text: Vec<RichText>,
    },
    NumberedListItem {
        rich_text: Vec<RichText>,
    },
    ToDo {
        rich_text: Vec<RichText>,
        checked: bool,
    },
    Toggle {
        rich_text: Vec<RichText>,
    },
    Code {
        source: String,
        language: String,
    },
    Quote {
        rich_text: Vec<RichText>,
    },
    Callout {
        rich_text: Vec<RichText>,
        icon: Option<String>,
        color: Palette,
    },
    Table {
        has_row_header: bool,
    },
    /// Only meaningful as a child of `Table`; inert anywhere else.
    TableRow {
        cells: Vec<Vec<RichText>>,
    },
    Image {
        source: FileSource,
        caption: Vec<RichText>,
    },
    Video {
        source: FileSource,
    },
    File {
        source: FileSource,
        name: Option<String>,
    },
    Divider,
    Equation {
        expression: String,
    },
    TableOfContents,
    /// Fail-soft case carrying the raw kind name for the placeholder.
    Unsupported {
        kind: String,
    },
}

/// One styled run of text within a block.
#[derive(Debug, Clone, PartialEq)]
pub struct RichText {
    pub text: String,
    pub annotations: Annotations,
    pub href: Option<String>,
}

/// Annotation flags compose freely, except that `code` is terminal when
/// rendered (it suppresses link and emphasis nesting).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: TextColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextColor {
    #[default]
    Default,
    Foreground(Palette),
    Background(Palette),
}

impl TextColor {
    /// Parse the API's color string, e.g. `"green"` or `"green_background"`.
    /// Unknown names degrade to `Default`.
    pub fn parse(name: &str) -> TextColor {
        if name.is_empty() || name == "default" {
            return TextColor::Default;
        }
        match name.strip_suffix("_background") {
            Some(base) => Palette::parse(base)
                .map(TextColor::Background)
                .unwrap_or_default(),
            None => Palette::parse(name)
                .map(TextColor::Foreground)
                .unwrap_or_default(),
        }
    }
}

/// The fixed color palette shared by text annotations and callouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
}

impl Palette {
    pub fn parse(name: &str) -> Option<Palette> {
        match name {
            "gray" => Some(Palette::Gray),
            "brown" => Some(Palette::Brown),
            "orange" => Some(Palette::Orange),
            "yellow" => Some(Palette::Yellow),
            "green" => Some(Palette::Green),
            "blue" => Some(Palette::Blue),
            "purple" => Some(Palette::Purple),
            "pink" => Some(Palette::Pink),
            "red" => Some(Palette::Red),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Palette::Gray => "gray",
            Palette::Brown => "brown",
            Palette::Orange => "orange",
            Palette::Yellow => "yellow",
            Palette::Green => "green",
            Palette::Blue => "blue",
            Palette::Purple => "purple",
            Palette::Pink => "pink",
            Palette::Red => "red",
        }
    }
}

/// Media and file blocks carry either an external URL or a hosted-file URL;
/// either way the renderer needs exactly one URL.
#[derive(Debug, Clone, PartialEq)]
pub enum FileSource {
    External { url: String },
    Hosted { url: String },
}

impl FileSource {
    pub fn url(&self) -> &str {
        match self {
            FileSource::External { url } => url,
            FileSource::Hosted { url } => url,
        }
    }
}

/// Concatenate the literal text of a span sequence.
pub fn plain_text(spans: &[RichText]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}
