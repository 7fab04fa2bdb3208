use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::Section;
use crate::artifacts::status::status_info::Status;

// Terminology:
// - staged files: index entries matching their working file
// - removed files: removals staged in the index whose file is gone
// - modified files: tracked files whose working content is changed or missing
// - untracked files: files neither committed nor staged
impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        let status = Status::new(self).initialize(&index)?;

        self.print_branches(status.branches(), status.current_branch())?;

        for section in Section::ALL {
            let changes = status.section(section);
            if changes.is_empty() {
                continue;
            }

            writeln!(self.writer(), "{}", section.header())?;
            for (path, change) in changes {
                writeln!(self.writer(), "{}", change.colored_label(path))?;
            }
            writeln!(self.writer())?;
        }

        Ok(())
    }
}
