use crate::{error::GenError, writer::WriteOutcome};

#[derive(Debug)]
pub struct SectionReport {
    pub name: String,
    pub hosts: usize,
    pub outcome: WriteOutcome,
}

#[derive(Debug)]
pub struct SectionFailure {
    pub name: String,
    pub error: GenError,
}

/// What a run did, section by section.
#[derive(Debug, Default)]
pub struct RunReport {
    pub sections: Vec<SectionReport>,
    pub failures: Vec<SectionFailure>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "sshgen: {} section(s) written, {} failed\n",
            self.sections.len(),
            self.failures.len()
        ));
        for s in &self.sections {
            out.push_str(&format!(
                "  - {} ({} host(s), {:?})\n",
                s.name, s.hosts, s.outcome
            ));
        }
        for f in &self.failures {
            out.push_str(&format!("  ! {}: {}\n", f.name, f.error));
        }

        out
    }
}
