use crate::domain::ports::ModuleDescriptor;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpec {
    pub name: String,
    #[serde(default)]
    pub source_files: Vec<String>,
    #[serde(default)]
    pub test_source_files: Vec<String>,
    #[serde(default)]
    pub classpath_roots: Vec<String>,
    #[serde(default)]
    pub jar_name: String,
}

impl ModuleSpec {
    pub fn builder(name: impl Into<String>) -> ModuleSpecBuilder {
        ModuleSpecBuilder::new(name)
    }

    /// 將任意 ModuleDescriptor 實作快照成不可變的 ModuleSpec
    pub fn from_descriptor<D: ModuleDescriptor + ?Sized>(module: &D) -> Self {
        Self {
            name: module.name().to_string(),
            source_files: module.source_files().to_vec(),
            test_source_files: module.test_source_files().to_vec(),
            classpath_roots: module.classpath_roots().to_vec(),
            jar_name: module.jar_name().to_string(),
        }
    }
}

impl ModuleDescriptor for ModuleSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn source_files(&self) -> &[String] {
        &self.source_files
    }

    fn test_source_files(&self) -> &[String] {
        &self.test_source_files
    }

    fn classpath_roots(&self) -> &[String] {
        &self.classpath_roots
    }

    fn jar_name(&self) -> &str {
        &self.jar_name
    }
}

/// 逐步累積模組描述，build() 永遠成功
#[derive(Debug, Clone, Default)]
pub struct ModuleSpecBuilder {
    spec: ModuleSpec,
}

impl ModuleSpecBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            spec: ModuleSpec {
                name: name.into(),
                ..ModuleSpec::default()
            },
        }
    }

    pub fn jar_name(mut self, jar_name: impl Into<String>) -> Self {
        self.spec.jar_name = jar_name.into();
        self
    }

    pub fn source_file(mut self, path: impl Into<String>) -> Self {
        self.spec.source_files.push(path.into());
        self
    }

    pub fn source_files<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec.source_files.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn test_source_file(mut self, path: impl Into<String>) -> Self {
        self.spec.test_source_files.push(path.into());
        self
    }

    pub fn test_source_files<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec
            .test_source_files
            .extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn classpath_root(mut self, path: impl Into<String>) -> Self {
        self.spec.classpath_roots.push(path.into());
        self
    }

    pub fn classpath_roots<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec
            .classpath_roots
            .extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> ModuleSpec {
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_in_order() {
        let spec = ModuleSpec::builder("core")
            .source_file("src/Main.kt")
            .source_files(["src/Util.kt", "src/Io.kt"])
            .test_source_file("test/MainTest.kt")
            .classpath_root("/lib/kotlin-runtime.jar")
            .jar_name("core.jar")
            .build();

        assert_eq!(spec.name, "core");
        assert_eq!(
            spec.source_files,
            vec!["src/Main.kt", "src/Util.kt", "src/Io.kt"]
        );
        assert_eq!(spec.test_source_files, vec!["test/MainTest.kt"]);
        assert_eq!(spec.classpath_roots, vec!["/lib/kotlin-runtime.jar"]);
        assert_eq!(spec.jar_name, "core.jar");
    }

    #[test]
    fn test_builder_defaults_are_empty() {
        let spec = ModuleSpec::builder("bare").build();

        assert_eq!(spec.name, "bare");
        assert!(spec.source_files.is_empty());
        assert!(spec.test_source_files.is_empty());
        assert!(spec.classpath_roots.is_empty());
        assert_eq!(spec.jar_name, "");
    }

    #[test]
    fn test_from_descriptor_snapshots_all_fields() {
        let original = ModuleSpec::builder("web")
            .source_file("src/Server.kt")
            .jar_name("web.jar")
            .build();

        let snapshot = ModuleSpec::from_descriptor(&original);
        assert_eq!(snapshot, original);
    }
}
