use crate::model::anchor::Anchor;

/// Downstream consumer of anchor records. The sink is the transaction
/// boundary: either every anchor of a lookup tuple arrives before
/// `end_of_tuple`, or the error aborts the tuple and nothing must be
/// persisted.
pub trait AnchorSink {
    fn accept(&mut self, anchor: Anchor) -> anyhow::Result<()>;

    /// Every anchor of the current lookup tuple has been emitted.
    fn end_of_tuple(&mut self) -> anyhow::Result<()>;
}

/// Buffering sink for callers that want the anchors of a tuple in memory.
impl AnchorSink for Vec<Anchor> {
    fn accept(&mut self, anchor: Anchor) -> anyhow::Result<()> {
        self.push(anchor);
        Ok(())
    }

    fn end_of_tuple(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
