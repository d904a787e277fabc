use crate::session::notice::Notice;
use crate::session::request::PendingRequest;
use super::select_file::display_name;
use super::{DocumentRef, SessionController};

impl SessionController {
    pub fn upload(&mut self) -> Option<PendingRequest> {
        if self.uploading {
            return None;
        }
        let Some(path) = self.selected_file.clone() else {
            self.push_notice(Notice::error("Select a PDF first."));
            return None;
        };

        let file_name = display_name(&path);
        self.uploading = true;
        Some(PendingRequest::Upload { path, file_name })
    }

    pub(super) fn complete_upload(&mut self, file_name: String, result: Result<(), String>) {
        self.uploading = false;
        match result {
            Ok(()) => {
                self.push_notice(Notice::info(format!("{} memorized!", file_name)));
                self.document = Some(DocumentRef {
                    file_name,
                    processed: true,
                });
            }
            Err(_) => self.push_notice(Notice::error("Upload failed.")),
        }
    }
}
