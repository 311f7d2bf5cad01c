#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamOutcome {
    /// Records formatted and written to the sink.
    pub records: usize,
    pub chunks: usize,
    pub bytes_read: u64,
    /// Bytes that never decoded into a record; already reported to the sink.
    pub unparsed: Vec<u8>,
    /// The sink went away (e.g. broken pipe) before the source ended.
    pub sink_closed: bool,
}

impl StreamOutcome {
    /// Outcome for a response the server marked as having no content.
    pub fn no_content() -> Self {
        Self::default()
    }

    pub fn has_diagnostic(&self) -> bool {
        !self.unparsed.is_empty()
    }
}
