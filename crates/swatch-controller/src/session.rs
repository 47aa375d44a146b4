/// Per-editing-session state: the current selection.
///
/// Created when the host loads the plugin and dropped when it unloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    selection: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection. Duplicate ids keep their first position.
    pub fn select<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection.clear();
        for id in ids {
            let id = id.into();
            if !self.selection.contains(&id) {
                self.selection.push(id);
            }
        }
    }

    /// Selected ids in selection order.
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }
}
