use crate::areas::inventory::Inventory;

impl Inventory {
    /// Scan, filter, refresh, collect and render in one go
    ///
    /// Nothing is written when no repository survives the filter.
    pub async fn status(&self) -> anyhow::Result<()> {
        let options = self.options();

        let tree = self
            .workspace()
            .scan(options.depth, self.backend())?;

        let Some(mut tree) = tree.filter(&options.filter) else {
            log::debug!("no repositories found below {}", self.path().display());
            return Ok(());
        };

        if options.refresh.is_enabled() {
            let report = self.refresh(&tree, options.refresh).await;
            log::debug!(
                "refreshed {} repositories, {} failed",
                report.dispatched,
                report.failed
            );
        }

        let stats = self.collect(&mut tree)?;
        self.render(&tree, &stats)
    }
}
