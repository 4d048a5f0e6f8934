use dynalister::{Backend, DocumentItem, Error, FileEntry, InboxItem};

use crate::client::Client;

impl Backend for Client {
    fn list_files(&self) -> dynalister::Result<Vec<FileEntry>> {
        let response = self.file_list().map_err(Error::backend)?;
        Ok(response.files)
    }

    fn read_document(&self, file_id: &str) -> dynalister::Result<Vec<DocumentItem>> {
        let response = self.doc_read(file_id).map_err(Error::backend)?;
        Ok(response.nodes)
    }

    fn add_to_inbox(&self, item: &InboxItem) -> dynalister::Result<()> {
        self.inbox_add(item).map_err(Error::backend)?;
        Ok(())
    }
}
