use crate::core::ModuleDescriptor;
use serde::Serialize;
use std::fmt::Write;

/// Per-module report built purely through the descriptor queries, without
/// knowledge of the concrete module representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    pub name: String,
    pub jar_name: String,
    pub source_count: usize,
    pub test_source_count: usize,
    pub classpath_count: usize,
    pub shared_sources: Vec<String>,
}

impl ModuleSummary {
    pub fn collect<D: ModuleDescriptor + ?Sized>(module: &D) -> Self {
        // 同時出現在 sources 與 test_sources 的路徑。契約允許重疊，
        // 這裡只回報不禁止
        let shared_sources = module
            .source_files()
            .iter()
            .filter(|path| module.test_source_files().contains(path))
            .cloned()
            .collect();

        Self {
            name: module.name().to_string(),
            jar_name: module.jar_name().to_string(),
            source_count: module.source_files().len(),
            test_source_count: module.test_source_files().len(),
            classpath_count: module.classpath_roots().len(),
            shared_sources,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "  Module: {}", self.name);
        let _ = writeln!(out, "  Jar: {}", self.jar_name);
        let _ = writeln!(out, "  Sources: {}", self.source_count);
        let _ = writeln!(out, "  Test Sources: {}", self.test_source_count);
        let _ = writeln!(out, "  Classpath Roots: {}", self.classpath_count);

        if !self.shared_sources.is_empty() {
            let _ = writeln!(
                out,
                "  ⚠️ Shared between sources and test sources: {}",
                self.shared_sources.join(", ")
            );
        }

        out
    }
}

/// 透過五個查詢比對兩個模組描述是否可觀察等價，與具體型別無關
pub fn descriptors_match<A, B>(a: &A, b: &B) -> bool
where
    A: ModuleDescriptor + ?Sized,
    B: ModuleDescriptor + ?Sized,
{
    a.name() == b.name()
        && a.source_files() == b.source_files()
        && a.test_source_files() == b.test_source_files()
        && a.classpath_roots() == b.classpath_roots()
        && a.jar_name() == b.jar_name()
}
