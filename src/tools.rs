//! Resolution of required external executables.

/// Abstract interface for checking whether an executable is resolvable.
///
/// The production implementation consults PATH; tests substitute a fake
/// with a fixed set of available tools.
pub trait ToolProbe {
    fn is_available(&self, tool: &str) -> bool;
}

/// Probe backed by the environment's executable search path.
pub struct PathProbe;

impl ToolProbe for PathProbe {
    fn is_available(&self, tool: &str) -> bool {
        which::which(tool).is_ok()
    }
}

/// Returns the entries of `required` that are not resolvable, preserving
/// their original order. Empty result means every requirement is satisfied.
pub fn missing_tools(probe: &dyn ToolProbe, required: &[String]) -> Vec<String> {
    required.iter().filter(|tool| !probe.is_available(tool)).cloned().collect()
}
