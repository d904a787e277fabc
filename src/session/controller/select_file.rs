use std::path::{Path, PathBuf};

use tracing::info;

use crate::session::notice::Notice;
use super::SessionController;

pub(super) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl SessionController {
    /// Select the PDF the next upload will send. Returns whether it was accepted.
    pub fn select_file(&mut self, path: impl Into<PathBuf>) -> bool {
        let path: PathBuf = path.into();

        if path.as_os_str().is_empty() {
            self.push_notice(Notice::error("Enter the path of a PDF."));
            return false;
        }
        if !path.is_file() {
            self.push_notice(Notice::error(format!("File not found: {}", path.display())));
            return false;
        }
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            self.push_notice(Notice::error("Only PDF documents are supported."));
            return false;
        }

        info!("Selected {}", path.display());
        self.selected_file = Some(path);
        true
    }

    pub fn selected_file_name(&self) -> Option<String> {
        self.selected_file.as_deref().map(display_name)
    }
}
