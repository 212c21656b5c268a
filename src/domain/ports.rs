/// Read-only view of a single build module.
///
/// Implementations behave as immutable, fully populated values: every query
/// returns the same answer across repeated calls on the same instance, and
/// the three list queries preserve the order the module was populated with.
/// Empty lists and empty strings are legal answers.
pub trait ModuleDescriptor: Send + Sync {
    fn name(&self) -> &str;
    fn source_files(&self) -> &[String];
    fn test_source_files(&self) -> &[String];
    fn classpath_roots(&self) -> &[String];
    fn jar_name(&self) -> &str;
}
