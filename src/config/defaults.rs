//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization, and
//! reproduce the lookup tables the documentation site was first published with.

use std::collections::HashMap;

/// Collect `(&str, V)` pairs into an owned lookup table.
fn table<V: Copy>(entries: &[(&str, V)]) -> HashMap<String, V> {
    entries
        .iter()
        .map(|&(key, value)| (key.to_owned(), value))
        .collect()
}

fn string_table(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|&(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}

pub fn layout() -> String {
    "default".into()
}

/// Filename to page title.
///
/// By default a page is titled after its first-level heading; these win over it.
pub fn titles() -> HashMap<String, String> {
    string_table(&[
        ("index.md", "Home"),
        ("getting_started_linux_bazel.md", "Linux with Bazel"),
        ("getting_started_linux_cmake.md", "Linux with CMake"),
        ("getting_started_linux_vulkan.md", "Linux with Vulkan"),
        ("getting_started_windows_bazel.md", "Windows with Bazel"),
        ("getting_started_windows_cmake.md", "Windows with CMake"),
        ("getting_started_windows_vulkan.md", "Windows with Vulkan"),
        ("generic_vulkan_env_setup.md", "Generic Vulkan Setup"),
        ("getting_started_python.md", "Python"),
        ("op_coverage.md", "XLA HLO Operation Coverage"),
        ("roadmap.md", "Short-term Focus Areas"),
        ("roadmap_design.md", "Long-term Design Roadmap"),
    ])
}

/// Filename to permalink.
///
/// `docs/Foo/Bar.md` is published at `Foo/Bar` unless listed here.
pub fn permalinks() -> HashMap<String, String> {
    string_table(&[
        ("index.md", "/"),
        ("getting_started_linux_bazel.md", "GetStarted/LinuxBazel"),
        ("getting_started_linux_cmake.md", "GetStarted/LinuxCMake"),
        ("getting_started_linux_vulkan.md", "GetStarted/LinuxVulkan"),
        ("getting_started_windows_bazel.md", "GetStarted/WindowsBazel"),
        ("getting_started_windows_cmake.md", "GetStarted/WindowsCMake"),
        ("getting_started_windows_vulkan.md", "GetStarted/WindowsVulkan"),
        ("generic_vulkan_env_setup.md", "GetStarted/GenericVulkanSetup"),
        ("getting_started_python.md", "GetStarted/Python"),
        ("developer_overview.md", "DeveloperOverview"),
        ("testing_guide.md", "TestingGuide"),
        ("op_coverage.md", "HLOOpCoverage"),
        ("roadmap.md", "FocusAreas"),
        ("roadmap_design.md", "DesignRoadmap"),
    ])
}

/// Filename to sidebar position. Pages not listed sort alphabetically.
pub fn nav_order() -> HashMap<String, u32> {
    table(&[
        ("index.md", 1),
        // "Getting Started" is 2.
        ("developer_overview.md", 3),
        ("roadmap_design.md", 4),
        ("roadmap.md", 5),
        ("op_coverage.md", 6),
        ("testing_guide.md", 7),
        // Within "Getting Started": cmake before bazel, python after windows.
        ("getting_started_linux_cmake.md", 1),
        ("getting_started_linux_bazel.md", 2),
        ("getting_started_linux_vulkan.md", 3),
        ("getting_started_windows_cmake.md", 4),
        ("getting_started_windows_bazel.md", 5),
        ("getting_started_windows_vulkan.md", 6),
        ("getting_started_python.md", 7),
        ("generic_vulkan_env_setup.md", 8),
    ])
}

/// Relative directory to section title.
///
/// Must match the title of that directory's `index.md`.
pub fn sections() -> HashMap<String, String> {
    string_table(&[
        ("Dialects", "Dialect Definitions"),
        ("GetStarted", "Getting Started"),
    ])
}
