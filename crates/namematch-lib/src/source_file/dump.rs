//! Test-only dump methods for source file inspection.

#[cfg(test)]
mod test_helpers {
    use crate::SourceFile;

    impl SourceFile {
        pub fn dump_cst(&self) -> String {
            self.printer().raw(true).dump()
        }

        pub fn dump_cst_full(&self) -> String {
            self.printer().raw(true).with_trivia(true).dump()
        }

        pub fn dump_outline(&self) -> String {
            self.printer().dump()
        }

        pub fn dump_diagnostics(&self) -> String {
            self.diagnostics().render_filtered(self.source())
        }

        pub fn dump_diagnostics_raw(&self) -> String {
            self.diagnostics().render(self.source())
        }

        /// Parses `src`, panicking with rendered diagnostics if it has errors.
        pub fn expect_valid(src: &str) -> Self {
            let file = SourceFile::parse(src).unwrap();
            if !file.is_valid() {
                panic!(
                    "Expected valid source, got error:\n{}",
                    file.dump_diagnostics()
                );
            }
            file
        }

        pub fn expect_valid_cst(src: &str) -> String {
            Self::expect_valid(src).dump_cst()
        }

        pub fn expect_valid_cst_full(src: &str) -> String {
            Self::expect_valid(src).dump_cst_full()
        }

        pub fn expect_valid_outline(src: &str) -> String {
            Self::expect_valid(src).dump_outline()
        }

        /// Parses `src` and returns the filtered diagnostics, panicking if there are none.
        pub fn expect_invalid(src: &str) -> String {
            let file = SourceFile::parse(src).unwrap();
            if file.is_valid() {
                panic!("Expected invalid source, got valid:\n{}", file.dump_cst());
            }
            file.dump_diagnostics()
        }
    }
}
