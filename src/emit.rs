use crate::merge::{HostBlock, MergedSection};

/// Accumulates ssh_config text line by line.
#[derive(Debug, Default)]
pub struct Emitter {
    buf: String,
}

impl Emitter {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn host(&mut self, key: &str) {
        self.buf.push_str("Host ");
        self.buf.push_str(key);
        self.buf.push('\n');
    }

    pub fn option(&mut self, keyword: &str, value: &str) {
        self.buf.push_str("  ");
        self.buf.push_str(keyword);
        self.buf.push(' ');
        self.buf.push_str(value);
        self.buf.push('\n');
    }

    pub fn block(&mut self, block: &HostBlock) {
        self.host(&block.key);
        for (keyword, value) in block.entry.iter() {
            self.option(keyword, value);
        }
        self.blank();
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Renders every block of a merged section, each followed by a blank line.
pub fn render_section(merged: &MergedSection) -> String {
    let mut em = Emitter::new();
    for block in &merged.blocks {
        em.block(block);
    }
    em.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::HostEntry;

    fn block(key: &str, fields: &[(&str, &str)]) -> HostBlock {
        let mut entry = HostEntry::new();
        for (k, v) in fields {
            entry.set(k, v.to_string());
        }
        HostBlock {
            key: key.to_string(),
            entry,
        }
    }

    #[test]
    fn renders_blocks_in_order() {
        let merged = MergedSection {
            blocks: vec![
                block("web.example.com", &[("Hostname", "10.0.0.1"), ("User", "alice")]),
                block("dbbox", &[("Port", "2222")]),
            ],
        };

        assert_eq!(
            render_section(&merged),
            "Host web.example.com\n  Hostname 10.0.0.1\n  User alice\n\nHost dbbox\n  Port 2222\n\n"
        );
    }

    #[test]
    fn empty_entry_still_gets_a_header() {
        let merged = MergedSection {
            blocks: vec![block("bare", &[])],
        };
        assert_eq!(render_section(&merged), "Host bare\n\n");
    }

    #[test]
    fn empty_section_renders_nothing() {
        assert_eq!(render_section(&MergedSection::default()), "");
    }
}
