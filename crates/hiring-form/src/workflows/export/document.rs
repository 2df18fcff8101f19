/// Linear block sequence of an exported application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportDocument {
    pub blocks: Vec<Block>,
}

impl ExportDocument {
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Heading(title) => Some(title.as_str()),
            _ => None,
        })
    }

    /// Value of the first label/value line carrying `label`.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::LabelValue { label: found, value } if found == label => Some(value.as_str()),
            _ => None,
        })
    }

    /// First table in the section titled `heading`.
    pub fn table_after(&self, heading: &str) -> Option<&Table> {
        let start = self
            .blocks
            .iter()
            .position(|block| matches!(block, Block::Heading(title) if title == heading))?;
        self.blocks[start + 1..]
            .iter()
            .take_while(|block| !matches!(block, Block::Heading(_)))
            .find_map(|block| match block {
                Block::Table(table) => Some(table),
                _ => None,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title { text: String, size: TitleSize },
    Heading(String),
    LabelValue { label: String, value: String },
    Caption(String),
    Table(Table),
    Attestation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSize {
    Invocation,
    FormName,
}

impl TitleSize {
    /// Font size in half-points.
    pub const fn half_points(self) -> u32 {
        match self {
            TitleSize::Invocation => 32,
            TitleSize::FormName => 36,
        }
    }
}

/// Header row plus one row per repeating entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|header| header.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Vec<String>>) -> Self {
        self.rows.extend(rows);
        self
    }
}
