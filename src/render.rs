use anyhow::Result;
use crossterm::style::Stylize;
use repoinfo_core::ports::{ProjectBlock, ReportRenderer};
use repoinfo_core::{Commit, DivergenceResult, OverviewEntry};
use std::io::Write;

use crate::config::DEFAULT_BRANCH_COLUMN_WIDTH;

const SEPARATOR: &str = "----------------------------";

/// Text roles; each maps to one terminal style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paint {
    Heading,
    HeadText,
    RedText,
    Sha,
    Text,
    DimText,
}

/// Writes the report as (optionally colored) text
pub struct TextRenderer<W: Write> {
    out: W,
    color: bool,
    branch_width: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            branch_width: DEFAULT_BRANCH_COLUMN_WIDTH,
        }
    }

    pub fn with_branch_width(mut self, width: usize) -> Self {
        self.branch_width = width;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&mut self, paint: Paint, text: &str) -> Result<()> {
        if !self.color || paint == Paint::Text {
            write!(self.out, "{}", text)?;
            return Ok(());
        }

        let styled = match paint {
            Paint::Heading => text.bold(),
            Paint::HeadText | Paint::Sha => text.yellow(),
            Paint::RedText => text.red(),
            Paint::DimText => text.dim(),
            Paint::Text => text.stylize(),
        };
        write!(self.out, "{}", styled)?;
        Ok(())
    }

    fn nl(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    fn labelled(&mut self, heading: &str, value: &str) -> Result<()> {
        self.paint(Paint::Heading, &format!("{}: ", heading))?;
        self.paint(Paint::HeadText, value)?;
        self.nl()
    }

    fn commit_line(&mut self, indent: &str, commit: &Commit) -> Result<()> {
        self.paint(Paint::Text, indent)?;
        self.paint(Paint::Sha, &format!("{} ", commit.hash))?;
        self.paint(Paint::Text, &commit.subject)?;
        self.nl()
    }
}

impl<W: Write> ReportRenderer for TextRenderer<W> {
    fn field(&mut self, heading: &str, value: &str) -> Result<()> {
        self.labelled(heading, value)
    }

    fn project(&mut self, block: &ProjectBlock) -> Result<()> {
        self.labelled("Project", &block.name)?;
        self.labelled("Mount path", &block.mount_path.display().to_string())?;
        self.labelled("Current revision", &block.revision)?;

        self.paint(Paint::Heading, "Local Branches: ")?;
        self.paint(Paint::RedText, &block.branch_count().to_string())?;
        self.paint(Paint::Text, &format!(" [{}]", block.local_branches.join(", ")))?;
        self.nl()
    }

    fn divergence(&mut self, result: &DivergenceResult) -> Result<()> {
        self.paint(Paint::Heading, "Local Commits: ")?;
        self.paint(Paint::RedText, &result.local_only.len().to_string())?;
        self.paint(Paint::DimText, " (on current branch)")?;
        self.nl()?;
        for commit in &result.local_only {
            self.commit_line("", commit)?;
        }

        self.paint(Paint::Text, SEPARATOR)?;
        self.nl()?;

        self.paint(Paint::Heading, "Remote Commits: ")?;
        self.paint(Paint::RedText, &result.remote_only.len().to_string())?;
        if result.target.is_degraded() {
            self.paint(
                Paint::DimText,
                &format!(" (no remote tracking branch, compared with {})", result.target),
            )?;
        }
        self.nl()?;
        for commit in &result.remote_only {
            self.commit_line("", commit)?;
        }

        Ok(())
    }

    fn overview(&mut self, entries: &[OverviewEntry<'_>]) -> Result<()> {
        self.nl()?;
        self.paint(Paint::Heading, "Projects Overview")?;

        let indent = format!("{:width$}- ", "", width = self.branch_width + 5);
        for entry in entries {
            self.nl()?;
            self.paint(Paint::HeadText, &entry.project.relpath)?;
            self.nl()?;

            for branch in &entry.branches {
                self.paint(Paint::Text, &branch.summary_line(self.branch_width))?;
                self.nl()?;

                for commit in &branch.commits {
                    self.commit_line(&indent, commit)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repoinfo_core::{BranchActivity, ComparisonTarget, Project, UploadableBranch};
    use std::path::PathBuf;

    fn render<F>(color: bool, f: F) -> String
    where
        F: FnOnce(&mut TextRenderer<Vec<u8>>) -> Result<()>,
    {
        let mut renderer = TextRenderer::new(Vec::new(), color).with_branch_width(10);
        f(&mut renderer).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_field_plain() {
        let text = render(false, |r| r.field("Manifest branch", "main"));
        assert_eq!(text, "Manifest branch: main\n");
    }

    #[test]
    fn test_field_colored_contains_escape_codes() {
        let text = render(true, |r| r.field("Manifest branch", "main"));
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("main"));
    }

    #[test]
    fn test_project_block() {
        let block = ProjectBlock {
            name: "platform/build".to_string(),
            mount_path: PathBuf::from("/ws/build"),
            revision: "main".to_string(),
            local_branches: vec!["feature".to_string(), "main".to_string()],
        };

        let text = render(false, |r| r.project(&block));

        assert_eq!(
            text,
            "Project: platform/build\n\
             Mount path: /ws/build\n\
             Current revision: main\n\
             Local Branches: 2 [feature, main]\n"
        );
    }

    #[test]
    fn test_divergence_block() {
        let result = DivergenceResult {
            target: ComparisonTarget::Tracked("origin/main".to_string()),
            local_only: vec![Commit::new("bbb2222", "Second"), Commit::new("aaa1111", "First")],
            remote_only: vec![],
        };

        let text = render(false, |r| r.divergence(&result));

        assert_eq!(
            text,
            "Local Commits: 2 (on current branch)\n\
             bbb2222 Second\n\
             aaa1111 First\n\
             ----------------------------\n\
             Remote Commits: 0\n"
        );
    }

    #[test]
    fn test_divergence_block_notes_degraded_comparison() {
        let result = DivergenceResult {
            target: ComparisonTarget::Degraded("main".to_string()),
            local_only: vec![],
            remote_only: vec![],
        };

        let text = render(false, |r| r.divergence(&result));
        assert!(text.ends_with(
            "Remote Commits: 0 (no remote tracking branch, compared with main)\n"
        ));
    }

    #[test]
    fn test_overview_block() {
        let project = Project::new("b", "/ws/proj/b", "main", "proj/b");
        let activity = BranchActivity {
            commits: vec![Commit::new("abc1234", "Sketch new parser")],
            date: "2023-01-01".to_string(),
        };
        let entries = vec![OverviewEntry {
            project: &project,
            branches: vec![UploadableBranch::new(&project, "wip", activity, true)],
        }];

        let text = render(false, |r| r.overview(&entries));

        assert_eq!(
            text,
            "\nProjects Overview\n\
             proj/b\n\
             * wip        (1 commit, 2023-01-01)\n\
             \x20              - abc1234 Sketch new parser\n"
        );
    }
}
