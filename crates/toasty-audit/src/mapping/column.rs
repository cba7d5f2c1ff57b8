/// A physical column or a formula backing a mapped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selectable {
    Column(Column),
    Formula(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name as stored in the database, without quoting.
    pub name: String,

    /// True if the name was declared quoted in the live mapping.
    pub quoted: bool,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quoted: false,
        }
    }

    pub fn quoted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quoted: true,
        }
    }

    /// The name used in generated fragments. Quoted names keep their quotes
    /// so the historical table matches the live one exactly.
    pub fn fragment_name(&self) -> String {
        if self.quoted {
            format!("`{}`", self.name)
        } else {
            self.name.clone()
        }
    }
}

impl Selectable {
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(Column::new(name))
    }

    pub fn formula(sql: impl Into<String>) -> Self {
        Self::Formula(sql.into())
    }
}

impl From<Column> for Selectable {
    fn from(value: Column) -> Self {
        Self::Column(value)
    }
}
