use crate::areas::workspace::Workspace;
use crate::artifacts::core::options::Options;
use crate::artifacts::status::backend::GitBackend;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// One run over a directory subtree: where to look, how to query git, where to write
pub struct Inventory {
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    backend: Box<dyn GitBackend>,
    options: Options,
}

impl Inventory {
    pub fn new(
        options: Options,
        backend: Box<dyn GitBackend>,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let path = options
            .path
            .canonicalize()
            .with_context(|| format!("cannot open {}", options.path.display()))?;

        if !path.is_dir() {
            anyhow::bail!("not a directory: {}", path.display());
        }

        Ok(Inventory {
            writer: RefCell::new(writer),
            workspace: Workspace::new(path.into_boxed_path()),
            backend,
            options,
        })
    }

    pub fn path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn backend(&self) -> &dyn GitBackend {
        self.backend.as_ref()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}
