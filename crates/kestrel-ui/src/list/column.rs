use crate::cropped::CroppedString;

/// Cell data type of a column. Decides alignment and sort comparison.
///
/// Ordered: `Int` and `Double` sort after the left-aligned types, which the
/// draw pass uses to find right-aligned columns.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DataType {
    Null,
    #[default]
    String,
    CheckBox,
    Int,
    Double,
}

impl DataType {
    #[inline]
    pub fn is_right_aligned(self) -> bool {
        self >= DataType::Int
    }
}

/// A list box column, addressed by its index ("column id").
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub(crate) name: CroppedString,
    pub width: i32,
    pub data_type: DataType,
    pub visible: bool,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, width: i32, data_type: DataType) -> Self {
        Self { name: CroppedString::new(name), width, data_type, visible: true }
    }

    /// Placeholder for an unused column id.
    pub fn null() -> Self {
        Self { name: CroppedString::default(), width: 0, data_type: DataType::Null, visible: false }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    #[inline]
    pub fn name(&self) -> &CroppedString {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name.set(name);
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.data_type == DataType::Null
    }
}

impl Default for ColumnDef {
    fn default() -> Self {
        Self::null()
    }
}
