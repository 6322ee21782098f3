use super::SelectOption;

/// A dropdown select widget instance.
///
/// Holds the option catalog and the widget's private interaction state:
/// whether the list is open and which row is highlighted. The selection
/// value is not here — the host owns it and passes it in per frame.
///
/// # Example
///
/// ```
/// use droplist::{Select, SelectOption};
///
/// let mut fruit = Select::new(
///     "fruit",
///     vec![
///         SelectOption::new("Apple", 1),
///         SelectOption::new("Banana", 2),
///     ],
/// );
/// assert!(!fruit.is_open());
/// fruit.open();
/// assert_eq!(fruit.highlighted(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Select {
    id: String,
    options: Vec<SelectOption>,
    placeholder: Option<String>,
    open: bool,
    highlighted: usize,
}

impl Select {
    /// Create a closed select over the given catalog. The catalog may be
    /// empty, in which case navigation and selection are no-ops.
    pub fn new(id: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            id: id.into(),
            options,
            placeholder: None,
            open: false,
            highlighted: 0,
        }
    }

    /// Text shown when nothing is selected.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub(super) fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    // -------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the list. The closed-to-open transition resets the highlight to
    /// the first row; opening an already-open list does nothing.
    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.highlighted = 0;
        }
    }

    /// Close the list. Resets nothing else.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    // -------------------------------------------------------------------
    // Highlight navigation
    // -------------------------------------------------------------------

    /// Index of the highlighted row. Meaningful only while open.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Move the highlight one row up. At the first row (or with an empty
    /// catalog) this is ignored — no wraparound.
    pub fn highlight_up(&mut self) {
        if self.highlighted > 0 {
            self.highlighted -= 1;
        }
    }

    /// Move the highlight one row down. At the last row (or with an empty
    /// catalog) this is ignored — no wraparound.
    pub fn highlight_down(&mut self) {
        if self.highlighted + 1 < self.options.len() {
            self.highlighted += 1;
        }
    }

    /// Jump the highlight to `index` (hover). Out-of-range is ignored.
    pub fn set_highlighted(&mut self, index: usize) {
        if index < self.options.len() {
            self.highlighted = index;
        }
    }

    // -------------------------------------------------------------------
    // Element IDs of the widget's interactive parts
    // -------------------------------------------------------------------

    /// ID of the clear affordance.
    pub fn clear_id(&self) -> String {
        format!("{}-clear", self.id)
    }

    /// ID of the option row at `index`.
    pub fn option_id(&self, index: usize) -> String {
        format!("{}-opt-{}", self.id, index)
    }

    /// ID of the removable value chip at `index` (multiple mode).
    pub fn chip_id(&self, index: usize) -> String {
        format!("{}-chip-{}", self.id, index)
    }

    pub(super) fn option_index(&self, target: &str) -> Option<usize> {
        target
            .strip_prefix(&format!("{}-opt-", self.id))?
            .parse()
            .ok()
    }

    pub(super) fn chip_index(&self, target: &str) -> Option<usize> {
        target
            .strip_prefix(&format!("{}-chip-", self.id))?
            .parse()
            .ok()
    }
}
