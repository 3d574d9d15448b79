use tracing::{debug, error, info};

use crate::{
    config::{FailurePolicy, RunConfig},
    emit::render_section,
    error::Result,
    merge::merge_section,
    report::{RunReport, SectionFailure, SectionReport},
    source::{Document, Section},
    writer::write_region,
};

/// Drives a whole run: load, then merge and write each section in order.
#[derive(Debug, Clone)]
pub struct Generator {
    config: RunConfig,
}

impl Generator {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<RunReport> {
        debug!(path = %self.config.source_path.display(), "reading source document");
        let doc = Document::load_from_path(&self.config.source_path)?;
        self.run_document(&doc)
    }

    /// Under `StopOnFirst` the first failing section's error is returned;
    /// sections before it have already been written.
    pub fn run_document(&self, doc: &Document) -> Result<RunReport> {
        let fallback = doc
            .settings
            .proxycommand
            .as_deref()
            .unwrap_or(self.config.fallback_proxy_command.as_str());

        let mut report = RunReport::default();
        for (name, parsed) in doc.sections() {
            match parsed.and_then(|section| self.generate_section(&section, fallback)) {
                Ok(done) => report.sections.push(done),
                Err(e) => match self.config.failure_policy {
                    FailurePolicy::StopOnFirst => return Err(e),
                    FailurePolicy::ContinueOnError => {
                        error!(section = name, error = %e, "section failed, continuing");
                        report.failures.push(SectionFailure {
                            name: name.to_string(),
                            error: e,
                        });
                    }
                },
            }
        }

        info!(
            written = report.sections.len(),
            failed = report.failures.len(),
            "run finished"
        );
        Ok(report)
    }

    pub fn generate_section(&self, section: &Section, fallback: &str) -> Result<SectionReport> {
        debug!(section = %section.name, hosts = section.hosts.len(), "generating section");

        let merged = merge_section(section, fallback)?;
        let block = render_section(&merged);
        let outcome = write_region(&self.config.target_path, &section.sentinel(), &block)?;

        Ok(SectionReport {
            name: section.name.clone(),
            hosts: merged.len(),
            outcome,
        })
    }
}
